//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for the single force-retry confirmation. Anything
//! non-interactive (pipes, CI) silently declines so scripted runs stay
//! deterministic.

use std::io::IsTerminal;

use dialoguer::Confirm;

use crate::error::Result;

/// Asks the user to confirm a forced retry of a refused plan.
///
/// Returns `Ok(false)` without prompting when stdin or stderr is not a
/// terminal.
pub fn confirm_force(question: &str) -> Result<bool> {
    if !std::io::stdin().is_terminal() || !std::io::stderr().is_terminal() {
        return Ok(false);
    }

    let answer = Confirm::new()
        .with_prompt(question.to_string())
        .default(false)
        .interact()?;
    Ok(answer)
}
