use clap::Parser;
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.dedentfmt.toml):
  Create this file in your project root to set defaults.

  [dedentfmt]
  # Helper recognition
  dedent_functions = [\"dedent\"]    # Call names treated as the dedent helper
  dedent_modules = [\"textwrap\"]    # Module names qualifying the helper
  indent_width = 4                  # Extra indent when the quote shares its line

  # Path filters
  exclude_folders = [\"build\", \"dist\", \".venv\"]
";

/// Command line interface configuration using `clap`.
/// This struct defines the arguments and flags accepted by the program.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "dedentfmt - Format the literal string arguments of textwrap.dedent() calls",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    /// Python source file(s) or folder(s) to format.
    /// Directories are expanded recursively. When no paths are given,
    /// a single source is read from stdin and written to stdout.
    pub paths: Vec<PathBuf>,

    /// Modify the file(s) in place.
    #[arg(short = 'i', long)]
    pub in_place: bool,

    /// Show what would be changed without modifying any file.
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// Wrap multiline strings with dedent() where dedent(s) == s,
    /// inserting the import if it is missing.
    #[arg(long)]
    pub add_dedent: bool,

    /// Enable verbose diagnostics on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}
