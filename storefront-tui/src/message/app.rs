//! Top-level application messages

use super::{DetailMessage, LightboxMessage, ModalMessage};
use crate::model::NavLink;

/// Application message
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Exit the application
    Quit,

    /// Detail view messages
    Detail(DetailMessage),

    /// Lightbox overlay messages
    Lightbox(LightboxMessage),

    /// Modal messages
    Modal(ModalMessage),

    /// A navigation link was activated
    ActivateLink(NavLink),

    /// Open the location prompt
    OpenLocationPrompt,

    /// Show help
    ShowHelp,

    /// Terminal resized
    Resize(u16, u16),

    /// Periodic tick: expires notifications
    Tick,

    /// Clear the status message
    ClearStatus,

    /// No-op (ignored events)
    Noop,
}
