//! Transient notifications
//!
//! Components that want to tell the user something get a [`Notifier`] passed
//! in; [`ToastQueue`] is the implementation the view renders from.

use std::time::{Duration, Instant};

/// Default time a notification stays on screen.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Notification variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

/// A notification request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub variant: ToastVariant,
    pub title: String,
    pub description: String,
    /// Time until auto-dismissal.
    pub duration: Duration,
}

/// Capability to show a transient notification.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// A notification currently on screen
#[derive(Debug, Clone)]
pub struct ActiveToast {
    pub notification: Notification,
    pub expires_at: Instant,
}

/// Notifications on screen, oldest first
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<ActiveToast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification that expires `duration` after `now`.
    pub fn push_at(&mut self, notification: Notification, now: Instant) {
        let expires_at = now + notification.duration;
        self.toasts.push(ActiveToast {
            notification,
            expires_at,
        });
    }

    /// Drop every notification whose time is up.
    ///
    /// Returns whether anything was dismissed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.expires_at > now);
        self.toasts.len() != before
    }

    pub fn visible(&self) -> &[ActiveToast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, notification: Notification) {
        self.push_at(notification, Instant::now());
    }
}
