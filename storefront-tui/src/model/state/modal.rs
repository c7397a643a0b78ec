//! Modal state

/// Modal dialogs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Key binding overview
    Help,
    /// Prompt for a new location
    OpenLocation {
        /// Text typed so far
        input: String,
    },
}

/// Currently open modal
#[derive(Debug, Default)]
pub struct ModalState {
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    /// Open the location prompt, prefilled with `current`.
    pub fn show_open_location(&mut self, current: &str) {
        self.active = Some(Modal::OpenLocation {
            input: current.to_string(),
        });
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    /// Input buffer of the location prompt, if that prompt is open.
    pub fn location_input_mut(&mut self) -> Option<&mut String> {
        match &mut self.active {
            Some(Modal::OpenLocation { input }) => Some(input),
            _ => None,
        }
    }
}
