//! Utilities module for dedentfmt.
//!
//! Provides the line index used to map byte offsets to source positions,
//! plus path helpers for file discovery and display.

mod paths;

pub use paths::{collect_python_files, is_excluded, normalize_display_path};

use ruff_text_size::TextSize;

/// A utility struct to convert byte offsets to line numbers and back.
///
/// The AST parser works with byte offsets, but indentation decisions need
/// line and column positions. The index stores the byte offset of each
/// line start (one linear scan), so every later lookup is a binary search
/// or a direct table read instead of a rescan of the source.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Stores the byte index of the start of each line.
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Creates a new `LineIndex` by scanning the source code for newlines.
    /// Uses byte iteration since '\n' is always a single byte in UTF-8.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, byte) in source.as_bytes().iter().enumerate() {
            if *byte == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// Converts a `TextSize` (byte offset) to a 1-indexed line number.
    #[must_use]
    pub fn line_index(&self, offset: TextSize) -> usize {
        let offset = offset.to_usize();
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(line) => line,
        }
    }

    /// Returns the byte offset at which the given 1-indexed line starts.
    #[must_use]
    pub fn line_start(&self, line: usize) -> usize {
        self.line_starts[line - 1]
    }

    /// Returns the text of the given 1-indexed line, without its newline.
    #[must_use]
    pub fn line_text<'s>(&self, source: &'s str, line: usize) -> &'s str {
        let start = self.line_starts[line - 1];
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(source.len());
        source[start..end].trim_end_matches(['\n', '\r'])
    }
}
