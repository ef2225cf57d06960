//! Core library for the `dedentfmt` formatter.
//!
//! `dedentfmt` reformats the literal string arguments of Python
//! `textwrap.dedent()` calls, re-indenting their content to align with the
//! opening quote without changing the dedented value. An add-mode wraps
//! multiline strings with `dedent()` where doing so is a no-op.

// Allow common complexity warnings - these are intentional design choices
#![allow(clippy::similar_names, clippy::items_after_statements)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module defining the command-line interface arguments.
pub mod cli;

/// Module for loading configuration from `.dedentfmt.toml` / `pyproject.toml`.
pub mod config;

/// Module defining the entry point logic shared by the binary and tests.
pub mod entry_point;

/// Module defining the error taxonomy (parse, verification, splice).
pub mod error;

/// Module orchestrating the format pass over one source text or file.
pub mod formatter;

/// Module locating candidate string literals in the syntax tree.
pub mod locator;

/// Module for CLI status output (changed files, banners, warnings).
pub mod output;

/// Module implementing dedent and re-indentation of literal content.
pub mod reindent;

/// Module rebuilding string literals and splicing them into the source.
pub mod rewrite;

/// Module containing utility functions (line index, path helpers).
pub mod utils;

/// Module verifying that a rewrite preserved all dedented values.
pub mod verify;

/// Module implementing add-mode: wrapping safe multiline strings.
pub mod wrap;
