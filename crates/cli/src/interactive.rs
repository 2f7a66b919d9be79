//! User interaction utilities for the CLI.
//!
//! Responsibilities:
//! - Provide shared helpers for interactive user prompts
//! - Handle stdin/stderr interactions safely

use anyhow::Result;
use std::io::{BufRead, Write};

/// Prompt the user for delete confirmation on stderr.
///
/// Returns `true` only when the answer is `y` or `yes` (any case).
///
/// # Errors
/// IO errors reading from stdin.
pub fn confirm_delete(key: &str) -> Result<bool> {
    let stdin = std::io::stdin();
    let mut stderr = std::io::stderr();
    confirm_delete_with(key, &mut stdin.lock(), &mut stderr)
}

fn confirm_delete_with(key: &str, input: &mut impl BufRead, prompt: &mut impl Write) -> Result<bool> {
    write!(
        prompt,
        "Are you sure you want to delete variable '{}'? [y/N] ",
        key
    )?;
    prompt.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    let answer = answer.trim();
    if !(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")) {
        writeln!(prompt, "Delete cancelled.")?;
        return Ok(false);
    }

    Ok(true)
}
