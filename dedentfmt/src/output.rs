//! Styled terminal output helpers.

use std::io::Write;
use std::path::Path;

use colored::Colorize;

use crate::utils::normalize_display_path;

/// Print the `=== path ===` banner shown before each file when more than
/// one file is written to stdout.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_file_banner(writer: &mut impl Write, path: &Path) -> std::io::Result<()> {
    writeln!(
        writer,
        "=== {} ===",
        normalize_display_path(path).cyan().bold()
    )
}

/// Print the confirmation line after an in-place rewrite.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_formatted(writer: &mut impl Write, path: &Path) -> std::io::Result<()> {
    writeln!(
        writer,
        "{} {}",
        "Formatted".green(),
        normalize_display_path(path)
    )
}

/// Warn on stderr that a non-Python path is being skipped.
pub fn warn_skipping(path: &Path) {
    eprintln!(
        "{} Skipping non-Python file: {}",
        "Warning:".yellow().bold(),
        normalize_display_path(path)
    );
}
