//! Source rewriting: byte-range splicing and string literal assembly.

mod literal;
mod splicer;

pub use literal::{escape_content, IndentPlan, LiteralShape, QuoteStyle};
pub use splicer::{Splice, SpliceBuffer, SpliceError};
