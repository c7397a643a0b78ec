//! Log sanitization utilities
//!
//! Catalog snapshots can run to hundreds of records; request/response logging
//! only ever shows a bounded prefix of a body.

/// Maximum number of bytes of a body included in debug/error logs.
const TRUNCATE_LIMIT: usize = 256;

/// Maximum number of bytes of a body kept inside an error value.
const ERROR_BODY_LIMIT: usize = 120;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

fn truncate_to(s: &str, limit: usize) -> String {
    if s.len() <= limit {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, limit)],
            s.len()
        )
    }
}

/// Truncate a response body for logging.
pub fn truncate_for_log(s: &str) -> String {
    truncate_to(s, TRUNCATE_LIMIT)
}

/// Shorter truncation for bodies carried in [`ClientError`](crate::ClientError).
///
/// Returns `None` for an empty or whitespace-only body.
pub fn body_excerpt(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(truncate_to(trimmed, ERROR_BODY_LIMIT))
    }
}
