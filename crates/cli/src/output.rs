//! Terminal output utilities
//!
//! Status and error lines go to stderr. Only session data and the fields
//! printed by [`Status::field`] go to stdout.

use djsession_core::SessionError;
use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print a session error with its code and suggestion
    pub fn session_error(err: &SessionError) {
        eprintln!("{} {} {}", "✗".red(), format!("[{}]", err.code()).dimmed(), err);
        if let Some(suggestion) = err.suggestion() {
            eprintln!("  {} {}", "hint:".cyan(), suggestion);
        }
    }

    /// Print a labelled field to stdout
    pub fn field(label: &str, value: &str) {
        println!("{:>11} {}", format!("{label}:").bold(), value);
    }
}

/// Shorten long values for display, keeping both ends
pub fn ellipsize(value: &str, max_chars: usize) -> String {
    let count = value.chars().count();
    if count <= max_chars || max_chars < 5 {
        return value.to_string();
    }

    let tail_len = (max_chars - 3) / 2;
    let head_len = max_chars - 3 - tail_len;
    let head: String = value.chars().take(head_len).collect();
    let tail: String = value.chars().skip(count - tail_len).collect();
    format!("{head}...{tail}")
}
