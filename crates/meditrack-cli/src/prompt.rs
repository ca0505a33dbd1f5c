//! Terminal confirmation prompts.

use std::io::{self, BufRead, Write};

use meditrack_core::Prompt;

/// Asks on stderr and reads the answer from stdin.
#[derive(Debug, Clone, Copy)]
pub struct TerminalPrompt {
    assume_yes: bool,
}

impl TerminalPrompt {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Prompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            tracing::debug!(prompt = message, "confirmation assumed");
            return true;
        }
        eprint!("{message} [y/N] ");
        let _ = io::stderr().flush();
        read_answer(&mut io::stdin().lock())
    }

    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Read one line and treat `y`/`yes` (any case) as consent. EOF or a read
/// error counts as no.
pub fn read_answer<R: BufRead>(reader: &mut R) -> bool {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) | Err(_) => false,
        Ok(_) => matches!(line.trim().to_lowercase().as_str(), "y" | "yes"),
    }
}
