//! Binary entry point for the `dedentfmt` formatter.
//!
//! This binary simply delegates to the shared `entry_point::run_with_args()`
//! function so the CLI behaves identically when driven from tests.

use anyhow::Result;

fn main() -> Result<()> {
    let code = dedentfmt::entry_point::run_with_args(std::env::args().skip(1).collect())?;
    std::process::exit(code);
}
