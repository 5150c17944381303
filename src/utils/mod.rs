//! Utility functions and helpers.

pub mod http;

/// Collapse runs of whitespace and trim, returning `None` for text
/// that is empty after cleanup.
pub fn clean_text(text: &str) -> Option<String> {
    let cleaned = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}
