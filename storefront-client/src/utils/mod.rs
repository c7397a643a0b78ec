//! Utility modules.

/// Lenient string/number deserialization for catalog attributes.
pub mod lenient;

/// Log sanitization utilities that bound logged response bodies.
pub mod log_sanitizer;
