//! Application state

use std::time::Duration;

use ratatui::layout::Rect;
use storefront_client::Endpoints;

use super::{DetailState, LightboxState, Location, ModalState, ToastQueue};
use crate::model::state::toast::DEFAULT_TOAST_DURATION;

/// Application state
pub struct App {
    /// Whether the main loop should exit
    pub should_quit: bool,

    /// Current navigation location
    pub location: Location,

    /// Remote resource locations (media base for the carousel)
    pub endpoints: Endpoints,

    /// How long notifications stay on screen
    pub toast_duration: Duration,

    /// Terminal area of the last frame, for mouse hit-testing
    pub viewport: Rect,

    /// Status bar message
    pub status_message: Option<String>,

    // === View state ===
    pub detail: DetailState,
    pub lightbox: LightboxState,
    pub toasts: ToastQueue,
    pub modal: ModalState,
}

impl App {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            should_quit: false,
            location: Location::default(),
            endpoints,
            toast_duration: DEFAULT_TOAST_DURATION,
            viewport: Rect::default(),
            status_message: None,
            detail: DetailState::new(),
            lightbox: LightboxState::new(),
            toasts: ToastQueue::new(),
            modal: ModalState::new(),
        }
    }

    #[must_use]
    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }

    /// Set the status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Endpoints::default())
    }
}
