//! Blocking notifications and confirmations shown to the user.

use std::io::{BufRead, Write};

/// Interrupts the user, the way a browser's `alert` and `confirm` would.
pub trait Notifier {
    /// Show `message` and wait for the user to acknowledge it.
    fn alert(&mut self, message: &str);

    /// Ask the user a yes/no question, returns true if they answered yes.
    fn confirm(&mut self, message: &str) -> bool;
}

/// A [Notifier] that writes to stderr and reads answers from stdin.
#[derive(Debug, Clone, Default)]
pub struct TerminalNotifier {
    assume_yes: bool,
}

impl TerminalNotifier {
    /// Create a notifier that asks for confirmation on stdin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a notifier that answers yes to every confirmation without asking.
    pub fn assume_yes() -> Self {
        Self { assume_yes: true }
    }
}

impl Notifier for TerminalNotifier {
    fn alert(&mut self, message: &str) {
        eprintln!("{message}");
    }

    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        eprint!("{message} [y/N] ");
        if let Err(error) = std::io::stderr().flush() {
            tracing::warn!("could not flush stderr: {error}");
        }

        let mut answer = String::new();
        match std::io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(error) => {
                tracing::warn!("could not read confirmation: {error}");
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
