//! Error types for mixhook-git

use std::path::PathBuf;

/// Result type for mixhook-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to git or the hooks directory
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to launch git: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("git exited with status {code}: {stderr}")]
    CommandFailed { code: i32, stderr: String },

    #[error("{path} is not inside a git repository")]
    NotARepository { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
