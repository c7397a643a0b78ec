//! Lightbox state

/// Full-screen overlay for an enlarged image
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LightboxState {
    /// Whether the overlay is shown.
    pub open: bool,
    /// Enlarged image reference. Kept after closing, as the page does.
    pub image: String,
}

impl LightboxState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `image` enlarged.
    pub fn open(&mut self, image: impl Into<String>) {
        self.image = image.into();
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}
