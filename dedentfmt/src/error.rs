//! Error taxonomy for the formatter.
//!
//! Three classes of failure exist: the input does not parse, the rewrite
//! engine violated its own invariants (splice or verification failure),
//! or the invocation itself was invalid. Usage errors are reported at the
//! CLI layer; this module covers the per-file failures.

use crate::rewrite::SpliceError;
use thiserror::Error;

/// A failure while formatting one source text.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The input is not syntactically valid Python. Fatal for the file;
    /// no partial results are produced.
    #[error("{file}:{line}:{column}: syntax error: {message}")]
    Parse {
        /// Display path of the offending input.
        file: String,
        /// 1-based line of the error location.
        line: usize,
        /// 1-based column of the error location.
        column: usize,
        /// Parser diagnostic message.
        message: String,
    },

    /// The rewritten output is not dedent-equivalent to the input. Always
    /// an internal-invariant violation, never a property of the input;
    /// the rewrite is discarded instead of being written.
    #[error("formatting validation failed for {file}: dedented strings don't match")]
    Verification {
        /// Display path of the input whose rewrite was discarded.
        file: String,
    },

    /// The splice engine rejected the planned edits (overlap or bounds).
    /// Like verification failures, this indicates a formatter bug.
    #[error("internal rewrite error for {file}: {source}")]
    Splice {
        /// Display path of the input being rewritten.
        file: String,
        /// Underlying splice failure.
        #[source]
        source: SpliceError,
    },
}
