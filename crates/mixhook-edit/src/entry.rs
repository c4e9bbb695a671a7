//! Rendering and recognizing alias entries inside a located list body.
//!
//! The equivalence check here is deliberately loose: it confirms that each
//! desired step occurs, quoted and in order, inside the entry's value text.
//! It does not re-parse the list structurally, so hand-edited formatting
//! (extra whitespace, trailing commas, comments between steps) still counts
//! as "already installed". Callers rely on that looseness for idempotence.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::locate::find_standalone;
use crate::scan::BracketRange;
use crate::splice::replace_span;

/// Atom-shaped keys only: `precommit`, `run_all`, `dirty?`, `save!`.
static IDENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z_][a-zA-Z0-9_]*[?!]?$").expect("invalid identifier regex")
});

/// A desired alias: a key and its ordered mix task steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    name: String,
    steps: Vec<String>,
}

impl AliasEntry {
    /// Creates an entry, validating that `name` is a usable keyword-list key.
    ///
    /// # Errors
    /// `Error::InvalidIdentifier` when the name is not atom-shaped.
    pub fn new(name: impl Into<String>, steps: Vec<String>) -> Result<Self> {
        let name = name.into();
        if !IDENT_REGEX.is_match(&name) {
            return Err(Error::InvalidIdentifier { name });
        }
        Ok(Self { name, steps })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Canonical textual form: `precommit: ["format", "test"]`.
    pub fn render(&self) -> String {
        let quoted: Vec<String> = self.steps.iter().map(|s| format!("\"{s}\"")).collect();
        format!("{}: [{}]", self.name, quoted.join(", "))
    }
}

/// Byte extent of one `key: value` entry within a list body.
///
/// `value_end` is exclusive and excludes trailing whitespace; separators are
/// not part of the span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EntrySpan {
    pub key_start: usize,
    pub value_start: usize,
    pub value_end: usize,
}

/// Finds the entry keyed `name` in a list body, regardless of its value.
///
/// Used to distinguish "absent" from "present but different".
pub(crate) fn find_entry(body: &str, name: &str) -> Option<EntrySpan> {
    let needle = format!("{name}:");
    let key_start = find_standalone(body, &needle)?;
    let after_key = key_start + needle.len();

    let rest = &body[after_key..];
    let value_start = after_key + (rest.len() - rest.trim_start().len());
    let value_end = value_extent(body, value_start);

    Some(EntrySpan {
        key_start,
        value_start,
        value_end,
    })
}

/// True iff an entry keyed `name` exists at all.
pub fn has_entry_key(body: &str, name: &str) -> bool {
    find_entry(body, name).is_some()
}

/// True iff the entry keyed `name` exists and its value contains every step,
/// quoted, in order.
pub fn contains_equivalent(body: &str, name: &str, steps: &[String]) -> bool {
    let Some(span) = find_entry(body, name) else {
        return false;
    };
    let value = &body[span.value_start..span.value_end];

    let mut pos = 0;
    for step in steps {
        let quoted = format!("\"{step}\"");
        match value[pos..].find(&quoted) {
            Some(at) => pos += at + quoted.len(),
            None => return false,
        }
    }
    true
}

/// Walks the value starting at `start`, returning the exclusive end offset.
///
/// The value runs to the first comma at nesting depth zero outside a string,
/// or to the end of the body. Trailing whitespace is excluded.
fn value_extent(body: &str, start: usize) -> usize {
    let bytes = body.as_bytes();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    let mut end = body.len();

    for i in start..bytes.len() {
        let b = bytes[i];
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'[' | b'{' | b'(' => depth += 1,
            b']' | b'}' | b')' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                end = i;
                break;
            }
            _ => {}
        }
    }

    body[start..end]
        .char_indices()
        .rev()
        .find(|(_, c)| !c.is_whitespace())
        .map_or(start, |(i, c)| start + i + c.len_utf8())
}

/// Appends `rendered` as the last entry of the list at `range`, matching the
/// list's existing layout.
///
/// Multi-line lists get the new entry on its own line at the indentation of
/// the last entry; single-line lists get `, ` separation. Whitespace before
/// the closing bracket is preserved verbatim. An empty list collapses to
/// `[rendered]`.
pub(crate) fn append_to_list(text: &str, range: BracketRange, rendered: &str) -> String {
    let body = range.body(text);

    if body.trim().is_empty() {
        return replace_span(
            text,
            range.body_start(),
            range.end,
            rendered,
        );
    }

    let (last_start, last_char) = body
        .char_indices()
        .rev()
        .find(|(_, c)| !c.is_whitespace())
        .expect("non-empty body has a non-whitespace character");
    let after_last = last_start + last_char.len_utf8();
    let trailing = &body[after_last..];
    let sep = if last_char == ',' { "" } else { "," };

    let new_body = if body.contains('\n') {
        let line_start = body[..after_last].rfind('\n').map_or(0, |p| p + 1);
        let line = &body[line_start..after_last];
        let indent = &line[..line.len() - line.trim_start().len()];
        format!("{}{sep}\n{indent}{rendered}{trailing}", &body[..after_last])
    } else {
        format!("{}{sep} {rendered}{trailing}", &body[..after_last])
    };

    replace_span(text, range.body_start(), range.end, &new_body)
}
