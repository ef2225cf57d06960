//! Byte-range splicing of source text.
//!
//! Replacements are collected up front, validated against each other, and
//! applied in descending start order so earlier byte offsets stay valid
//! while later regions are rewritten.

use thiserror::Error;

/// Errors that can occur when applying splices to a source string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpliceError {
    /// A replacement range does not fit inside the source.
    #[error("splice range {index}..{end} is out of bounds for source of length {len}")]
    OutOfBounds {
        /// Start byte of the offending range.
        index: usize,
        /// End byte of the offending range.
        end: usize,
        /// Length of the source being rewritten.
        len: usize,
    },

    /// Two replacement ranges intersect.
    #[error("splice ranges overlap: {first:?} and {second:?}")]
    Overlap {
        /// The earlier range, as (start, end).
        first: (usize, usize),
        /// The overlapping range, as (start, end).
        second: (usize, usize),
    },
}

/// A single replacement of a byte range with new text.
#[derive(Debug, Clone)]
pub struct Splice {
    /// Start byte of the replaced range.
    pub start: usize,
    /// End byte (exclusive) of the replaced range.
    pub end: usize,
    /// Text spliced in place of the range.
    pub replacement: String,
}

impl Splice {
    #[must_use]
    pub fn new(start: usize, end: usize, replacement: String) -> Self {
        Self {
            start,
            end,
            replacement,
        }
    }
}

/// Collects replacements against a source string and applies them all at
/// once.
#[derive(Debug)]
pub struct SpliceBuffer {
    source: String,
    splices: Vec<Splice>,
}

impl SpliceBuffer {
    #[must_use]
    pub fn new(source: String) -> Self {
        Self {
            source,
            splices: Vec::new(),
        }
    }

    pub fn push(&mut self, splice: Splice) {
        self.splices.push(splice);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.splices.is_empty()
    }

    /// Validates all recorded splices: each must lie within the source and
    /// no two may overlap.
    fn validate(&self) -> Result<(), SpliceError> {
        let len = self.source.len();
        for splice in &self.splices {
            if splice.start > splice.end || splice.end > len {
                return Err(SpliceError::OutOfBounds {
                    index: splice.start,
                    end: splice.end,
                    len,
                });
            }
        }
        let mut sorted: Vec<(usize, usize)> = self
            .splices
            .iter()
            .map(|splice| (splice.start, splice.end))
            .collect();
        sorted.sort_unstable();
        for pair in sorted.windows(2) {
            if pair[1].0 < pair[0].1 {
                return Err(SpliceError::Overlap {
                    first: pair[0],
                    second: pair[1],
                });
            }
        }
        Ok(())
    }

    /// Applies all splices and returns the rewritten source.
    pub fn apply(mut self) -> Result<String, SpliceError> {
        self.validate()?;
        // Descending start order keeps the byte offsets of not-yet-applied
        // splices stable.
        self.splices
            .sort_unstable_by(|a, b| b.start.cmp(&a.start));
        for splice in &self.splices {
            self.source
                .replace_range(splice.start..splice.end, &splice.replacement);
        }
        Ok(self.source)
    }
}
