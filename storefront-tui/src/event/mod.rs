//! Event layer: input events to messages
//!
//! Keyboard events are mapped through [`keymap`]; mouse clicks are hit-tested
//! against the regions the view layout computes for the last frame.

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
