//! Error types for mixhook-edit

/// Result type for mixhook-edit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while scanning or rewriting mix.exs text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A `[` was found but the scan hit end-of-text before its `]`.
    #[error("unterminated list: the bracket opened at byte {offset} is never closed")]
    UnterminatedBracket { offset: usize },

    /// A key was located but the text after it is not a list literal.
    #[error(
        "found `{key}:` at byte {offset} but it is followed by `{found}`, not a `[` list; \
         mix.exs is not in a shape mixhook recognizes"
    )]
    UnexpectedCharacterAfterKey {
        key: String,
        found: char,
        offset: usize,
    },

    /// There is no place to synthesize a new aliases block.
    #[error("{message}")]
    NoInsertionPoint { message: String },

    /// The desired alias name is not a valid keyword-list key.
    #[error("`{name}` is not a valid alias name (expected an atom like `precommit`)")]
    InvalidIdentifier { name: String },
}

impl Error {
    pub(crate) fn no_insertion_point(message: impl Into<String>) -> Self {
        Self::NoInsertionPoint {
            message: message.into(),
        }
    }
}
