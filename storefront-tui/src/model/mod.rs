//! Model layer: application state
//!
//! The model is the single source of truth. It holds plain data only; every
//! change goes through the update layer, and the view layer only reads it.
//!
//! ```text
//! App
//!  ├─ location     Location       the address being viewed (`?code=...`)
//!  ├─ detail       DetailState    Loading | Found(item) | NotFound, carousel slide,
//!  │                              fetch generation
//!  ├─ lightbox     LightboxState  enlarged image overlay
//!  ├─ toasts       ToastQueue     transient notifications (a `Notifier`)
//!  └─ modal        ModalState     help / open-location prompt
//! ```
//!
//! `links` holds the data-driven header and bottom navigation links.

mod app;
pub mod links;
mod location;
pub mod state;

pub use app::App;
pub use links::{LinkLabel, LinkStyle, NavLink};
pub use location::Location;
pub use state::{
    DetailState, DetailStatus, DisplayedItem, LightboxState, Modal, ModalState, Notification,
    Notifier, ToastQueue, ToastVariant,
};
