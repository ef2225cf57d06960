//! CLI behavior tests driven through the compiled binary.
#![allow(clippy::unwrap_used, clippy::needless_raw_string_hashes)]

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SAMPLE: &str = r#"from textwrap import dedent

def f():
    text = dedent("""
    hello
    world
    """)
    return text
"#;

const SAMPLE_FORMATTED: &str = r#"from textwrap import dedent

def f():
    text = dedent("""
        hello
        world
    """)
    return text
"#;

#[test]
fn test_stdin_to_stdout() -> Result<()> {
    let mut cmd = Command::cargo_bin("dedentfmt")?;
    cmd.write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::eq(SAMPLE_FORMATTED));
    Ok(())
}

#[test]
fn test_stdin_rejects_in_place() -> Result<()> {
    let mut cmd = Command::cargo_bin("dedentfmt")?;
    cmd.arg("--in-place")
        .write_stdin(SAMPLE)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "--in-place cannot be used with stdin",
        ));
    Ok(())
}

#[test]
fn test_file_prints_formatted_to_stdout() -> Result<()> {
    let temp = TempDir::new()?;
    let file = temp.path().join("sample.py");
    fs::write(&file, SAMPLE)?;

    let mut cmd = Command::cargo_bin("dedentfmt")?;
    cmd.arg(&file)
        .assert()
        .success()
        .stdout(predicate::eq(SAMPLE_FORMATTED));

    // Without --in-place the file stays as it was
    assert_eq!(fs::read_to_string(&file)?, SAMPLE);
    Ok(())
}

#[test]
fn test_in_place_rewrites_and_reports() -> Result<()> {
    let temp = TempDir::new()?;
    let file = temp.path().join("sample.py");
    fs::write(&file, SAMPLE)?;

    let mut cmd = Command::cargo_bin("dedentfmt")?;
    cmd.arg("-i")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Formatted"));

    assert_eq!(fs::read_to_string(&file)?, SAMPLE_FORMATTED);
    Ok(())
}

#[test]
fn test_dry_run_overrides_in_place() -> Result<()> {
    let temp = TempDir::new()?;
    let file = temp.path().join("sample.py");
    fs::write(&file, SAMPLE)?;

    let mut cmd = Command::cargo_bin("dedentfmt")?;
    cmd.arg("-i")
        .arg("--dry-run")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("        hello"));

    assert_eq!(fs::read_to_string(&file)?, SAMPLE);
    Ok(())
}

#[test]
fn test_directory_output_has_banners() -> Result<()> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("a.py"), SAMPLE)?;
    fs::write(temp.path().join("b.py"), SAMPLE)?;

    let mut cmd = Command::cargo_bin("dedentfmt")?;
    cmd.arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("=== "))
        .stdout(predicate::str::contains("a.py"))
        .stdout(predicate::str::contains("b.py"));
    Ok(())
}

#[test]
fn test_missing_path_is_an_error() -> Result<()> {
    let mut cmd = Command::cargo_bin("dedentfmt")?;
    cmd.arg("/definitely/not/here.py")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
    Ok(())
}

#[test]
fn test_non_python_file_is_skipped_with_warning() -> Result<()> {
    let temp = TempDir::new()?;
    let file = temp.path().join("notes.txt");
    fs::write(&file, "plain text\n")?;

    let mut cmd = Command::cargo_bin("dedentfmt")?;
    cmd.arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Skipping non-Python file"))
        .stderr(predicate::str::contains("No Python files found to format"));
    Ok(())
}

#[test]
fn test_syntax_error_reports_position() -> Result<()> {
    let temp = TempDir::new()?;
    let file = temp.path().join("broken.py");
    fs::write(&file, "def broken(:\n    pass\n")?;

    let mut cmd = Command::cargo_bin("dedentfmt")?;
    cmd.arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("syntax error"));
    Ok(())
}

#[test]
fn test_add_dedent_flag() -> Result<()> {
    let temp = TempDir::new()?;
    let file = temp.path().join("sample.py");
    fs::write(&file, "def f():\n    return \"\"\"\nhi\n\"\"\"\n")?;

    let mut cmd = Command::cargo_bin("dedentfmt")?;
    cmd.arg("--add-dedent")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("from textwrap import dedent"))
        .stdout(predicate::str::contains("dedent(\"\"\""));
    Ok(())
}

#[test]
fn test_config_file_changes_recognized_helpers() -> Result<()> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join(".dedentfmt.toml"),
        "[dedentfmt]\ndedent_functions = [\"strip_margin\"]\ndedent_modules = [\"helpers\"]\n",
    )?;
    let file = temp.path().join("sample.py");
    fs::write(
        &file,
        "from helpers import strip_margin\nx = strip_margin(\"\"\"\nhi\n\"\"\")\n",
    )?;

    let mut cmd = Command::cargo_bin("dedentfmt")?;
    cmd.arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("    hi"));
    Ok(())
}

#[test]
fn test_excluded_folders_are_not_traversed() -> Result<()> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join(".dedentfmt.toml"),
        "[dedentfmt]\nexclude_folders = [\"vendored\"]\n",
    )?;
    fs::write(temp.path().join("a.py"), SAMPLE)?;
    let sub = temp.path().join("vendored");
    fs::create_dir(&sub)?;
    fs::write(sub.join("skip.py"), SAMPLE)?;

    let mut cmd = Command::cargo_bin("dedentfmt")?;
    cmd.arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("        hello"))
        .stdout(predicate::str::contains("skip.py").not());
    Ok(())
}

#[test]
fn test_help_shows_config_section() -> Result<()> {
    let mut cmd = Command::cargo_bin("dedentfmt")?;
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("CONFIGURATION FILE"))
        .stdout(predicate::str::contains("--add-dedent"));
    Ok(())
}
