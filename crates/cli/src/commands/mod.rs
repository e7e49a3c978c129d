//! Command implementations.
//!
//! Every command seeds a fresh store, mirroring the screens it replaces:
//! data is process-local mock state and is gone when the command exits.

pub mod donations;
pub mod history;
pub mod login;
pub mod pets;
pub mod requests;
pub mod users;

use std::io::{self, BufRead, Write};

/// Ask a yes/no question on the terminal; `s`/`sim` confirms.
///
/// The prompt goes to stderr so it reaches the terminal even when log output
/// is redirected.
pub(crate) fn confirm(question: &str) -> io::Result<bool> {
    let mut stderr = io::stderr();
    write!(stderr, "{question} [s/N] ")?;
    stderr.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "s" || answer == "sim")
}
