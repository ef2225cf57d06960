//! Formatting pipeline for a single source text or file.
//!
//! The pipeline is locate, reindent, escape, splice, verify. A file is
//! only ever written back after the verifier confirms the dedented
//! values are unchanged.

use std::fs;
use std::path::Path;

use anyhow::Context;
use ruff_python_ast::ModModule;
use ruff_python_parser::parse_module;

use crate::config::Config;
use crate::error::FormatError;
use crate::locator::{find_dedent_strings, DedentSpec};
use crate::reindent::reindent;
use crate::rewrite::{escape_content, IndentPlan, LiteralShape, Splice, SpliceBuffer};
use crate::utils::LineIndex;
use crate::verify::dedent_values_match;
use crate::wrap::add_dedent_calls;

/// Settings driving the formatting pipeline, derived from configuration.
#[derive(Debug, Clone)]
pub struct FormatSettings {
    /// Which calls count as dedent helpers.
    pub spec: DedentSpec,
    /// Extra indent when the opening quote trails other code on its line.
    pub indent_width: usize,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            spec: DedentSpec::default(),
            indent_width: 4,
        }
    }
}

impl FormatSettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let functions = config
            .dedentfmt
            .dedent_functions
            .clone()
            .unwrap_or_else(|| vec!["dedent".to_owned()]);
        let modules = config
            .dedentfmt
            .dedent_modules
            .clone()
            .unwrap_or_else(|| vec!["textwrap".to_owned()]);
        Self {
            spec: DedentSpec::new(functions, modules),
            indent_width: config.dedentfmt.indent_width.unwrap_or(4),
        }
    }
}

/// Parses source text, converting parse failures into a [`FormatError`]
/// with a 1-indexed line and column.
pub(crate) fn parse_source(source: &str, file: &str) -> Result<ModModule, FormatError> {
    match parse_module(source) {
        Ok(parsed) => Ok(parsed.into_syntax()),
        Err(err) => {
            let index = LineIndex::new(source);
            let offset = err.location.start();
            let line = index.line_index(offset);
            let column = offset.to_usize() - index.line_start(line) + 1;
            Err(FormatError::Parse {
                file: file.to_owned(),
                line,
                column,
                message: err.error.to_string(),
            })
        }
    }
}

/// Reindents the literal arguments of recognized dedent calls in `source`.
///
/// Literals whose quote style cannot be determined from the source (for
/// example prefixed literals) are left untouched. The returned text has
/// been verified semantically equivalent to the input.
///
/// # Errors
///
/// Returns an error when the source does not parse, when computed
/// replacements conflict, or when verification of the rewritten text
/// fails.
pub fn format_source(
    source: &str,
    file: &str,
    settings: &FormatSettings,
) -> Result<String, FormatError> {
    let module = parse_source(source, file)?;
    let strings = find_dedent_strings(&module, &settings.spec);
    if strings.is_empty() {
        return Ok(source.to_owned());
    }

    let index = LineIndex::new(source);
    let mut buffer = SpliceBuffer::new(source.to_owned());

    for located in &strings {
        let start = located.range.start().to_usize();
        let end = located.range.end().to_usize();
        let raw = &source[start..end];
        let Some(shape) = LiteralShape::detect(raw) else {
            continue;
        };

        let line = index.line_index(located.range.start());
        let quote_line = index.line_text(source, line);
        let opening_quote_col = start - index.line_start(line);
        let plan = IndentPlan::for_literal(quote_line, opening_quote_col, settings.indent_width);

        let content = reindent(&located.value, plan.content_indent);
        let escaped = escape_content(&content, shape.style);
        let replacement = shape.assemble(&escaped, plan.closing_column);
        if replacement != raw {
            buffer.push(Splice::new(start, end, replacement));
        }
    }

    if buffer.is_empty() {
        return Ok(source.to_owned());
    }

    let formatted = buffer.apply().map_err(|err| FormatError::Splice {
        file: file.to_owned(),
        source: err,
    })?;

    if !dedent_values_match(source, &formatted, &settings.spec) {
        return Err(FormatError::Verification {
            file: file.to_owned(),
        });
    }

    Ok(formatted)
}

/// Runs the full pipeline on a text: the optional wrap pass followed by
/// formatting.
///
/// # Errors
///
/// Returns an error on parse, splice or verification failure.
pub fn format_text(
    source: &str,
    file: &str,
    settings: &FormatSettings,
    add_dedent_mode: bool,
) -> Result<String, FormatError> {
    if add_dedent_mode {
        let wrapped = add_dedent_calls(source, file, settings)?;
        format_source(&wrapped, file, settings)
    } else {
        format_source(source, file, settings)
    }
}

/// Formats one file, optionally rewriting it in place.
///
/// Returns the formatted text and whether it differs from the input. The
/// file is only rewritten when `write_back` is set and the text changed.
///
/// # Errors
///
/// Returns an error when the file cannot be read or written, or when the
/// formatting pipeline fails.
pub fn format_file(
    path: &Path,
    settings: &FormatSettings,
    add_dedent_mode: bool,
    write_back: bool,
) -> anyhow::Result<(String, bool)> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let formatted = format_text(&source, &path.display().to_string(), settings, add_dedent_mode)?;

    let changed = formatted != source;
    if changed && write_back {
        fs::write(path, &formatted)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok((formatted, changed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(source: &str) -> String {
        format_source(source, "<test>", &FormatSettings::default()).unwrap()
    }

    #[test]
    fn test_reindents_function_level_literal() {
        let source = "\
from textwrap import dedent

def f():
    text = dedent(\"\"\"
hello
world
\"\"\")
";
        let expected = "\
from textwrap import dedent

def f():
    text = dedent(\"\"\"
        hello
        world
    \"\"\")
";
        assert_eq!(format(source), expected);
    }

    #[test]
    fn test_module_level_literal() {
        let source = "\
from textwrap import dedent

text = dedent(\"\"\"
hello
\"\"\")
";
        let expected = "\
from textwrap import dedent

text = dedent(\"\"\"
    hello
\"\"\")
";
        assert_eq!(format(source), expected);
    }

    #[test]
    fn test_no_dedent_calls_returns_input() {
        let source = "x = \"\"\"\nplain\n\"\"\"\n";
        assert_eq!(format(source), source);
    }

    #[test]
    fn test_idempotent() {
        let source = "\
from textwrap import dedent

def f():
    text = dedent(\"\"\"
        hello
    \"\"\")
";
        let once = format(source);
        assert_eq!(format(&once), once);
    }

    #[test]
    fn test_prefixed_literal_skipped() {
        let source = "\
from textwrap import dedent

text = dedent(r\"\"\"
raw \\stuff
\"\"\")
";
        assert_eq!(format(source), source);
    }

    #[test]
    fn test_parse_error_reported_with_position() {
        let err = format_source("def broken(:\n", "bad.py", &FormatSettings::default())
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("bad.py"), "{message}");
        assert!(message.contains("syntax error"), "{message}");
    }

    #[test]
    fn test_single_line_argument_reindented() {
        let source = "from textwrap import dedent\nx = dedent(\"hello\")\n";
        let expected = "from textwrap import dedent\nx = dedent(\"    hello\")\n";
        assert_eq!(format(source), expected);
    }
}
