//! Bump command implementation

use std::path::Path;

use colored::Colorize;

use crate::cli::BumpLevel;
use crate::error::{CliError, Result};
use crate::{io, version};

/// Run the bump command
pub fn run_bump(path: &Path, level: BumpLevel) -> Result<()> {
    let mix_path = path.join("mix.exs");
    if !mix_path.exists() {
        return Err(CliError::user(format!(
            "no mix.exs found in {}; run mixhook from the project root or pass -C",
            path.display()
        )));
    }

    let text = io::read_text(&mix_path)?;
    let Some(bumped) = version::bump(&text, level) else {
        return Err(CliError::user(
            "no `version: \"X.Y.Z\"` literal found in mix.exs; edit the version by hand",
        ));
    };

    io::write_atomic(&mix_path, &bumped.text)?;
    println!(
        "{} Bumped version {} -> {}",
        "\u{2713}".green().bold(),
        bumped.old.dimmed(),
        bumped.new.cyan()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_bump_rewrites_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("mix.exs"),
            "def project do\n  [version: \"0.4.9\"]\nend\n",
        )
        .unwrap();

        run_bump(temp.path(), BumpLevel::Minor).unwrap();

        let content = fs::read_to_string(temp.path().join("mix.exs")).unwrap();
        assert_eq!(content, "def project do\n  [version: \"0.5.0\"]\nend\n");
    }

    #[test]
    fn test_bump_without_version_literal_errors() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("mix.exs"), "def project do\n  []\nend\n").unwrap();

        let err = run_bump(temp.path(), BumpLevel::Patch).unwrap_err();
        assert!(err.to_string().contains("version"));
    }
}
