//! Message layer
//!
//! Events are translated into messages, messages are consumed by `update`,
//! which may answer with a [`Command`] for the backend:
//!
//! ```text
//! Event ──▶ AppMessage ──▶ update ──▶ Model ──▶ View
//!                ▲            │
//!                │            ▼
//!             Backend ◀── Command
//! ```

mod app;
mod command;
mod detail;
mod lightbox;
mod modal;

pub use app::AppMessage;
pub use command::Command;
pub use detail::DetailMessage;
pub use lightbox::LightboxMessage;
pub use modal::ModalMessage;
