//! Per-component state containers

pub mod detail;
pub mod lightbox;
pub mod modal;
pub mod toast;

pub use detail::{DetailState, DetailStatus, DisplayedItem};
pub use lightbox::LightboxState;
pub use modal::{Modal, ModalState};
pub use toast::{Notification, Notifier, ToastQueue, ToastVariant};
