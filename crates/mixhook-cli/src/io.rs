//! Whole-file read and atomic write-back for mix.exs.
//!
//! The planners compute a complete new document in memory; the only write is
//! a whole-file replace via write-to-temp-then-rename, so a crash never
//! leaves a half-edited mix.exs behind.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use fs2::FileExt;

use crate::error::Result;

/// Reads the whole file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Writes content atomically: temp file in the same directory, advisory
/// exclusive lock, fsync, rename over the target.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)?;

    temp_file.lock_exclusive()?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.sync_all()?;
    temp_file.unlock()?;

    fs::rename(&temp_path, path)?;
    Ok(())
}
