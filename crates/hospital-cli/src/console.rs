//! Console implementations of the notification and confirmation services.

use hospital_core::{Confirmer, Notifier};
use std::io::{BufRead, Write};

/// Prints outcome messages to stdout/stderr.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Asks for confirmation on the terminal; accepts `y` or `yes`.
pub struct StdinConfirmer;

impl Confirmer for StdinConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        if std::io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match std::io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }
}

/// Non-interactive confirmation for `--yes` invocations.
pub struct AutoConfirmer;

impl Confirmer for AutoConfirmer {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Pick the confirmer for a delete invocation.
pub fn confirmer(skip_prompt: bool) -> Box<dyn Confirmer> {
    if skip_prompt {
        Box::new(AutoConfirmer)
    } else {
        Box::new(StdinConfirmer)
    }
}
