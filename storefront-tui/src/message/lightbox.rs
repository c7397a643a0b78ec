//! Lightbox overlay messages

/// Lightbox message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxMessage {
    /// Click on the dimmed background
    BackgroundClicked,
    /// Click on the close control
    CloseClicked,
    /// Click on the enlarged image itself
    ImageClicked,
    /// Esc
    Dismiss,
}
