#![deny(missing_docs)]

//! # Path Utilities
//!
//! Joining base paths onto endpoint path templates and rewriting colon-style
//! parameters into brace-style placeholders.

/// Joins two URL path fragments with a single `/` separator.
///
/// Empty fragments pass the other side through unchanged; duplicate slashes
/// at the seam are collapsed.
pub fn join_paths(base: &str, path: &str) -> String {
    if base.is_empty() {
        return path.to_string();
    }
    if path.is_empty() {
        return base.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Rewrites every path segment beginning with `:` into brace-delimited form.
///
/// e.g. `/users/:id/orders/:orderId` -> `/users/{id}/orders/{orderId}`
///
/// Segments not starting with `:` are unchanged; empty segments survive the
/// split/join round-trip.
pub fn convert_path(path: &str) -> String {
    path.split('/')
        .map(|segment| match segment.strip_prefix(':') {
            Some(name) => format!("{{{}}}", name),
            None => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}
