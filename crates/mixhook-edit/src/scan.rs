//! Bracket matching over raw mix.exs text.
//!
//! Finds the `]` that closes a given `[` by walking the text with an explicit
//! scanner state instead of a regex: regular expressions cannot count nesting
//! depth, and brackets inside string literals must be ignored.

use crate::error::{Error, Result};

/// Inclusive byte range of a matched `[`…`]` pair.
///
/// Invariants: `start < end`, `text[start] == '['`, `text[end] == ']'`, and
/// the span is balanced outside string literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketRange {
    /// Byte offset of the opening `[`.
    pub start: usize,
    /// Byte offset of the matching `]`.
    pub end: usize,
}

impl BracketRange {
    /// The text strictly between the brackets.
    pub fn body<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start + 1..self.end]
    }

    /// Byte offset of the first body character.
    pub fn body_start(&self) -> usize {
        self.start + 1
    }
}

/// Scanner state while walking a bracketed span.
#[derive(Debug, Clone, Copy)]
struct ScanState {
    depth: usize,
    in_string: bool,
    /// True only for the character immediately following an unescaped
    /// backslash inside a string.
    escaped: bool,
}

/// Finds the `]` matching the `[` at `open`.
///
/// # Arguments
/// * `text` - The full document text
/// * `open` - Byte offset of an opening `[` (caller-guaranteed)
///
/// # Returns
/// The inclusive range of the bracket pair.
///
/// # Errors
/// Returns `Error::UnterminatedBracket` when end-of-text is reached with the
/// bracket still open or a string literal still unclosed. The offset in the
/// error is the byte position of the opening `[`.
///
/// # Example
/// ```
/// use mixhook_edit::scan::match_closing;
///
/// let range = match_closing(r#"[a: ["x]y"], b]"#, 0).unwrap();
/// assert_eq!(range.end, 14);
/// ```
pub fn match_closing(text: &str, open: usize) -> Result<BracketRange> {
    let bytes = text.as_bytes();
    debug_assert_eq!(bytes.get(open), Some(&b'['), "caller must point at a `[`");

    let mut state = ScanState {
        depth: 1,
        in_string: false,
        escaped: false,
    };

    // Byte-wise walk is UTF-8 safe: every byte we act on is ASCII, and
    // continuation bytes of multibyte characters never collide with them.
    for (i, &b) in bytes.iter().enumerate().skip(open + 1) {
        if state.in_string {
            if state.escaped {
                state.escaped = false;
            } else if b == b'\\' {
                state.escaped = true;
            } else if b == b'"' {
                state.in_string = false;
            }
        } else {
            match b {
                b'"' => state.in_string = true,
                b'[' => state.depth += 1,
                b']' => {
                    state.depth -= 1;
                    if state.depth == 0 {
                        return Ok(BracketRange {
                            start: open,
                            end: i,
                        });
                    }
                }
                _ => {}
            }
        }
    }

    Err(Error::UnterminatedBracket { offset: open })
}
