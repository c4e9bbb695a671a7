//! Byte-exact splicing of text buffers.
//!
//! Every function takes the document by reference and returns a new owned
//! buffer. Nothing outside the edited span is touched, and no normalization
//! or re-indentation is applied; callers construct the replacement text
//! exactly as it should appear.

use crate::scan::BracketRange;

/// Replaces an inclusive bracket range with `replacement`.
pub fn replace_range(text: &str, range: BracketRange, replacement: &str) -> String {
    replace_span(text, range.start, range.end + 1, replacement)
}

/// Replaces the half-open byte span `[start, end)` with `replacement`.
pub fn replace_span(text: &str, start: usize, end: usize, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len() - (end - start) + replacement.len());
    out.push_str(&text[..start]);
    out.push_str(replacement);
    out.push_str(&text[end..]);
    out
}

/// Inserts `insertion` before the byte at `index`.
pub fn insert_at(text: &str, index: usize, insertion: &str) -> String {
    replace_span(text, index, index, insertion)
}
