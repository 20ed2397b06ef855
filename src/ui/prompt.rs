//! Confirmation prompts.

use std::io::{self, BufRead, Write};

use crate::services::Confirm;

/// Asks on the terminal; anything but `y`/`yes` declines.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, header: &str, message: &str) -> bool {
        let mut stdout = io::stdout().lock();
        if writeln!(stdout, "{}", header)
            .and_then(|_| write!(stdout, "{} [y/N] ", message))
            .and_then(|_| stdout.flush())
            .is_err()
        {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(e) => {
                tracing::warn!("Failed to read confirmation: {}", e);
                false
            }
        }
    }
}

/// Accepts without asking (`--yes`)
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoConfirm;

impl Confirm for AutoConfirm {
    fn confirm(&self, header: &str, message: &str) -> bool {
        tracing::debug!(header, message, "Confirmation accepted automatically");
        true
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("\n"));
        assert!(!is_yes("no"));
    }
}
