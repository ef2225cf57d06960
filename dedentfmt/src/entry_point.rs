//! CLI entry point: argument handling, file collection, and the per-file
//! formatting loop.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;
use crate::config::Config;
use crate::formatter::{format_file, format_text, FormatSettings};
use crate::output;
use crate::utils::collect_python_files;

/// Runs the formatter with the given arguments, writing to stdout.
///
/// # Errors
///
/// Returns an error if writing output fails.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run dedentfmt with the given arguments, writing output to the specified
/// writer.
///
/// This is the testable version of `run_with_args` that allows output
/// capture.
///
/// # Errors
///
/// Returns an error if reading stdin or writing output fails.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["dedentfmt".to_owned()];
    program_args.extend(args);
    let cli = match Cli::try_parse_from(program_args) {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                write!(writer, "{e}")?;
                writer.flush()?;
                return Ok(0);
            }
            _ => {
                eprint!("{e}");
                return Ok(1);
            }
        },
    };

    // Load config from the first path or current directory
    let config_path = cli
        .paths
        .first()
        .map_or(Path::new("."), PathBuf::as_path);
    let config = Config::load_from_path(config_path);
    let settings = FormatSettings::from_config(&config);
    let exclude_folders = config.dedentfmt.exclude_folders.clone().unwrap_or_default();

    if cli.verbose {
        eprintln!("[VERBOSE] dedentfmt v{}", env!("CARGO_PKG_VERSION"));
        if let Some(ref path) = config.config_file_path {
            eprintln!("[VERBOSE] Config loaded from {}", path.display());
        }
        eprintln!("[VERBOSE] Excluded folders: {exclude_folders:?}");
    }

    // No paths: read from stdin, write to stdout
    if cli.paths.is_empty() {
        if cli.in_place {
            eprintln!("Error: --in-place cannot be used with stdin input");
            return Ok(1);
        }
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        return match format_text(&source, "<stdin>", &settings, cli.add_dedent) {
            Ok(formatted) => {
                write!(writer, "{formatted}")?;
                writer.flush()?;
                Ok(0)
            }
            Err(err) => {
                eprintln!("{err}");
                Ok(1)
            }
        };
    }

    let mut files: Vec<PathBuf> = Vec::new();
    for path in &cli.paths {
        if !path.exists() {
            eprintln!("Error: Path {} does not exist", path.display());
            return Ok(1);
        }
        if path.is_file() {
            if path.extension().is_some_and(|ext| ext == "py") {
                files.push(path.clone());
            } else {
                output::warn_skipping(path);
            }
        } else if path.is_dir() {
            files.extend(collect_python_files(path, &exclude_folders));
        } else {
            eprintln!("Error: {} is neither a file nor a directory", path.display());
            return Ok(1);
        }
    }

    if files.is_empty() {
        eprintln!("No Python files found to format");
        return Ok(1);
    }

    // --dry-run always wins over --in-place
    let write_back = cli.in_place && !cli.dry_run;
    let show_output = cli.dry_run || !cli.in_place;
    let multiple = files.len() > 1;

    for file in &files {
        let (formatted, changed) = match format_file(file, &settings, cli.add_dedent, write_back) {
            Ok(result) => result,
            Err(err) => {
                eprintln!("{err:#}");
                return Ok(1);
            }
        };

        if changed && write_back {
            output::print_formatted(writer, file)?;
        }
        if show_output {
            if multiple {
                output::print_file_banner(writer, file)?;
            }
            write!(writer, "{formatted}")?;
            if multiple {
                writeln!(writer)?;
            }
        }
    }

    writer.flush()?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn run(args: Vec<String>) -> (i32, String) {
        let mut buffer = Vec::new();
        let code = run_with_args_to(args, &mut buffer).unwrap();
        (code, String::from_utf8(buffer).unwrap())
    }

    #[test]
    fn test_missing_path_fails() {
        let (code, _) = run(vec!["/no/such/path.py".to_owned()]);
        assert_eq!(code, 1);
    }

    #[test]
    fn test_stdout_mode_prints_formatted_source() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("sample.py");
        fs::write(
            &file,
            "from textwrap import dedent\nx = dedent(\"\"\"\nhi\n\"\"\")\n",
        )
        .unwrap();

        let (code, out) = run(vec![file.display().to_string()]);
        assert_eq!(code, 0);
        assert!(out.contains("    hi"));
        // Not in-place: the file itself is untouched
        let on_disk = fs::read_to_string(&file).unwrap();
        assert!(on_disk.contains("\nhi\n"));
    }

    #[test]
    fn test_in_place_rewrites_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("sample.py");
        fs::write(
            &file,
            "from textwrap import dedent\nx = dedent(\"\"\"\nhi\n\"\"\")\n",
        )
        .unwrap();

        let (code, out) = run(vec!["-i".to_owned(), file.display().to_string()]);
        assert_eq!(code, 0);
        assert!(out.contains("Formatted"));
        let on_disk = fs::read_to_string(&file).unwrap();
        assert!(on_disk.contains("    hi"));
    }

    #[test]
    fn test_dry_run_suppresses_in_place() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("sample.py");
        let source = "from textwrap import dedent\nx = dedent(\"\"\"\nhi\n\"\"\")\n";
        fs::write(&file, source).unwrap();

        let (code, out) = run(vec![
            "-i".to_owned(),
            "-d".to_owned(),
            file.display().to_string(),
        ]);
        assert_eq!(code, 0);
        assert!(out.contains("    hi"));
        assert_eq!(fs::read_to_string(&file).unwrap(), source);
    }

    #[test]
    fn test_directory_with_banner_per_file() {
        let dir = TempDir::new().unwrap();
        let source = "from textwrap import dedent\nx = dedent(\"\"\"\nhi\n\"\"\")\n";
        fs::write(dir.path().join("a.py"), source).unwrap();
        fs::write(dir.path().join("b.py"), source).unwrap();

        let (code, out) = run(vec![dir.path().display().to_string()]);
        assert_eq!(code, 0);
        assert!(out.contains("=== "));
        assert!(out.contains("a.py"));
        assert!(out.contains("b.py"));
    }

    #[test]
    fn test_empty_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let (code, _) = run(vec![dir.path().display().to_string()]);
        assert_eq!(code, 1);
    }
}
