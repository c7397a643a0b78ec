//! View layer: rendering
//!
//! Reads the model and draws it; never mutates state. Geometry lives in
//! [`layout`] so mouse hit-testing can reuse it.

pub mod components;
pub mod layout;
pub mod pages;
pub mod theme;

pub use layout::render;
