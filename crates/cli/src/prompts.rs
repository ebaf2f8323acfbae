use std::io::{self, IsTerminal, Write};

use anyhow::{Result, bail};

/// Ask a yes/no question on stderr; `force` answers yes without asking.
///
/// Fails instead of blocking when stdin or stderr is not a terminal.
pub fn confirm(message: &str, force: bool) -> Result<bool> {
  if force {
    return Ok(true);
  }

  if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
    bail!("Cannot ask for confirmation without a terminal. Pass --force to proceed.");
  }

  write!(io::stderr(), "{} [y/N] ", message)?;
  io::stderr().flush()?;

  let mut answer = String::new();
  io::stdin().read_line(&mut answer)?;

  Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
  matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
