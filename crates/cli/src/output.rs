//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{}", render("✗".red(), message));
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{}", render("ℹ".blue(), message));
    }
}

/// Glyph, one space, then the message exactly as given
pub fn render(glyph: impl Display, message: &str) -> String {
    format!("{glyph} {message}")
}
