// Rust guideline compliant 2026-10-14

//! Terminal UI utilities for the linemerge CLI.
//!
//! This module provides color support detection and colored status lines on
//! stderr.

use std::env;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Status lines go to stderr
    atty::is(atty::Stream::Stderr)
}

/// Prints a status message with a colored prefix to stderr.
///
/// # Arguments
/// * `prefix` - The prefix text
/// * `prefix_color` - The color for the prefix
/// * `message` - The message text
/// * `use_color` - Whether to emit color codes
pub fn print_status(prefix: &str, prefix_color: Color, message: &str, use_color: bool) {
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true));
    let _ = write!(stderr, "{}:", prefix);
    let _ = stderr.reset();
    let _ = writeln!(stderr, " {}", message);
}

/// Prints an error message.
pub fn print_error(message: &str, use_color: bool) {
    print_status("Error", Color::Red, message, use_color);
}

/// Prints a progress message.
pub fn print_progress(message: &str, use_color: bool) {
    print_status("Progress", Color::Cyan, message, use_color);
}
