//! Locating named list constructs in mix.exs text.
//!
//! Two surface forms are recognized; everything else in the file is opaque:
//!
//! ```text
//! aliases: [ ... ]              # inline keyword entry
//! defp aliases do [ ... ] end   # private function returning the list
//! ```
//!
//! First occurrence wins. The document is assumed well formed with at most
//! one relevant construct; no disambiguation is attempted.

use crate::error::{Error, Result};
use crate::scan::{BracketRange, match_closing};

/// Finds the inline `key: [ ... ]` form.
///
/// Matches the first `key:` that is not part of a longer identifier, skips
/// whitespace, and requires the next character to be `[`.
///
/// # Returns
/// `Ok(Some(range))` for the bracket pair, `Ok(None)` when `key:` does not
/// occur at all.
///
/// # Errors
/// `Error::UnexpectedCharacterAfterKey` when `key:` is followed by anything
/// other than whitespace and `[` (the key is bound to some other expression),
/// `Error::UnterminatedBracket` when the list is never closed.
pub fn locate_inline(text: &str, key: &str) -> Result<Option<BracketRange>> {
    let needle = format!("{key}:");
    let Some(key_start) = find_standalone(text, &needle) else {
        return Ok(None);
    };

    let open = expect_open_bracket(text, key, key_start, key_start + needle.len())?;
    Ok(Some(match_closing(text, open)?))
}

/// Finds the block `name do ... [ ... ]` form.
///
/// Matches the first `name do` header (the `def`/`defp` prefix is opaque
/// text), then applies the same whitespace-only skip to the opening `[`.
///
/// # Errors
/// Same as [`locate_inline`].
pub fn locate_block(text: &str, name: &str) -> Result<Option<BracketRange>> {
    let needle = format!("{name} do");
    let Some(header_start) = find_standalone(text, &needle) else {
        return Ok(None);
    };

    let open = expect_open_bracket(text, name, header_start, header_start + needle.len())?;
    Ok(Some(match_closing(text, open)?))
}

/// Skips whitespace after a matched key/header and demands a `[`.
fn expect_open_bracket(text: &str, key: &str, key_start: usize, after: usize) -> Result<usize> {
    let rest = &text[after..];
    let skipped = rest.len() - rest.trim_start().len();
    let open = after + skipped;

    match text[open..].chars().next() {
        Some('[') => Ok(open),
        Some(found) => Err(Error::UnexpectedCharacterAfterKey {
            key: key.to_string(),
            found,
            offset: key_start,
        }),
        None => Err(Error::UnexpectedCharacterAfterKey {
            key: key.to_string(),
            found: '\0',
            offset: key_start,
        }),
    }
}

/// First occurrence of `needle` not preceded by an identifier byte, so
/// `run_aliases:` never matches a search for `aliases:`.
pub(crate) fn find_standalone(text: &str, needle: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    text.match_indices(needle).find_map(|(i, _)| {
        let boundary = i == 0 || !is_ident_byte(bytes[i - 1]);
        boundary.then_some(i)
    })
}

pub(crate) fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_found() {
        let text = r#"x = 1
aliases: ["a", "b"]
y = 2"#;
        let range = locate_inline(text, "aliases").unwrap().unwrap();
        assert_eq!(&text[range.start..=range.end], r#"["a", "b"]"#);
    }

    #[test]
    fn test_inline_multiline_whitespace_skip() {
        let text = "aliases:\n  [\"a\"]\n";
        let range = locate_inline(text, "aliases").unwrap().unwrap();
        assert_eq!(&text[range.start..=range.end], "[\"a\"]");
    }

    #[test]
    fn test_inline_absent() {
        assert_eq!(locate_inline("deps: []", "aliases").unwrap(), None);
    }

    #[test]
    fn test_inline_skips_longer_identifier() {
        // `run_aliases:` must not count as an occurrence of `aliases:`.
        let text = "run_aliases: [1]\naliases: [2]\n";
        let range = locate_inline(text, "aliases").unwrap().unwrap();
        assert_eq!(&text[range.start..=range.end], "[2]");
    }

    #[test]
    fn test_inline_rejects_non_list_value() {
        let err = locate_inline("aliases: aliases()", "aliases").unwrap_err();
        assert_eq!(
            err,
            Error::UnexpectedCharacterAfterKey {
                key: "aliases".to_string(),
                found: 'a',
                offset: 0,
            }
        );
    }

    #[test]
    fn test_inline_rejects_end_of_text() {
        let err = locate_inline("aliases: ", "aliases").unwrap_err();
        assert!(matches!(
            err,
            Error::UnexpectedCharacterAfterKey { found: '\0', .. }
        ));
    }

    #[test]
    fn test_block_found() {
        let text = "defmodule M do\n  defp aliases do\n    [a: [\"x\"]]\n  end\nend\n";
        let range = locate_block(text, "aliases").unwrap().unwrap();
        assert_eq!(&text[range.start..=range.end], "[a: [\"x\"]]");
    }

    #[test]
    fn test_block_absent() {
        assert_eq!(locate_block("defp deps do\n  []\nend", "aliases").unwrap(), None);
    }

    #[test]
    fn test_block_with_non_list_body() {
        let err = locate_block("defp aliases do\n  %{}\nend", "aliases").unwrap_err();
        assert!(matches!(err, Error::UnexpectedCharacterAfterKey { .. }));
    }

    #[test]
    fn test_unterminated_list_propagates() {
        let err = locate_inline("aliases: [\"a\"", "aliases").unwrap_err();
        assert_eq!(err, Error::UnterminatedBracket { offset: 9 });
    }
}
