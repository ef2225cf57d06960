//! Wraps safe multi-line strings in dedent helper calls.
//!
//! A string is safe to wrap when dedenting it is a no-op, so adding the
//! call cannot change the runtime value. The inserted call name follows
//! the imports already present in the file; when none exist, an import is
//! added near the top of the module.

use ruff_python_ast::visitor::{self, Visitor};
use ruff_python_ast::{Expr, ModModule, Stmt};
use ruff_text_size::Ranged;

use crate::error::FormatError;
use crate::formatter::{parse_source, FormatSettings};
use crate::locator::{find_wrap_candidates, DedentSpec};
use crate::reindent::dedent;
use crate::rewrite::{Splice, SpliceBuffer};
use crate::utils::LineIndex;

/// Which helper imports a module already has.
#[derive(Debug, Default)]
struct ImportState {
    /// A recognized helper function imported by its own name.
    function: Option<String>,
    /// A recognized helper module imported whole.
    module: Option<String>,
}

impl ImportState {
    /// The call name to use for newly wrapped strings.
    fn call_name(&self, spec: &DedentSpec) -> String {
        if let Some(function) = &self.function {
            function.clone()
        } else if let Some(module) = &self.module {
            format!("{module}.{}", spec.primary_function())
        } else {
            spec.primary_function().to_owned()
        }
    }

    fn needs_import(&self) -> bool {
        self.function.is_none() && self.module.is_none()
    }
}

struct ImportScanner<'spec> {
    spec: &'spec DedentSpec,
    state: ImportState,
}

impl<'a> Visitor<'a> for ImportScanner<'_> {
    fn visit_stmt(&mut self, stmt: &'a Stmt) {
        match stmt {
            Stmt::Import(import) => {
                for alias in &import.names {
                    // An aliased import changes the call spelling, so it
                    // does not count.
                    if alias.asname.is_none() && self.spec.is_module(alias.name.as_str()) {
                        self.state.module = Some(alias.name.to_string());
                    }
                }
            }
            Stmt::ImportFrom(import) => {
                let from_helper_module = import
                    .module
                    .as_ref()
                    .is_some_and(|module| self.spec.is_module(module.as_str()));
                if from_helper_module {
                    for alias in &import.names {
                        if alias.asname.is_none() && self.spec.is_function(alias.name.as_str()) {
                            self.state.function = Some(alias.name.to_string());
                        }
                    }
                }
            }
            _ => {}
        }
        visitor::walk_stmt(self, stmt);
    }
}

fn scan_imports(module: &ModModule, spec: &DedentSpec) -> ImportState {
    let mut scanner = ImportScanner {
        spec,
        state: ImportState::default(),
    };
    for stmt in &module.body {
        scanner.visit_stmt(stmt);
    }
    scanner.state
}

/// Inserts an import line after leading comment lines and the module
/// docstring, if any.
fn insert_import(source: &str, spec: &DedentSpec) -> String {
    let lines: Vec<&str> = source.split_inclusive('\n').collect();

    // Shebang and encoding declarations stay on top.
    let mut insert_at = 0;
    for (i, line) in lines.iter().enumerate() {
        if line.starts_with('#') {
            insert_at = i + 1;
        } else {
            break;
        }
    }

    if let Ok(parsed) = ruff_python_parser::parse_module(source) {
        let module = parsed.into_syntax();
        if let Some(Stmt::Expr(stmt_expr)) = module.body.first() {
            if let Expr::StringLiteral(lit) = &*stmt_expr.value {
                let index = LineIndex::new(source);
                insert_at = index.line_index(lit.range().end());
            }
        }
    }

    let import_line = format!(
        "from {} import {}\n",
        spec.primary_module(),
        spec.primary_function()
    );

    let mut result = String::with_capacity(source.len() + import_line.len());
    for (i, line) in lines.iter().enumerate() {
        if i == insert_at {
            result.push_str(&import_line);
        }
        result.push_str(line);
    }
    if insert_at >= lines.len() {
        result.push_str(&import_line);
    }
    result
}

/// Wraps eligible multi-line strings in dedent helper calls.
///
/// Only strings whose value is unchanged by dedenting are wrapped.
/// Returns the source unchanged when nothing qualifies.
///
/// # Errors
///
/// Returns an error when the source does not parse or when computed
/// replacements conflict.
pub fn add_dedent_calls(
    source: &str,
    file: &str,
    settings: &FormatSettings,
) -> Result<String, FormatError> {
    let module = parse_source(source, file)?;
    let spec = &settings.spec;

    let candidates = find_wrap_candidates(&module, source, spec);
    if candidates.is_empty() {
        return Ok(source.to_owned());
    }

    let imports = scan_imports(&module, spec);
    let call_name = imports.call_name(spec);

    let mut buffer = SpliceBuffer::new(source.to_owned());
    for candidate in &candidates {
        if dedent(&candidate.value) != candidate.value {
            continue;
        }
        let start = candidate.range.start().to_usize();
        let end = candidate.range.end().to_usize();
        let raw = &source[start..end];
        buffer.push(Splice::new(start, end, format!("{call_name}({raw})")));
    }

    if buffer.is_empty() {
        return Ok(source.to_owned());
    }

    let wrapped = buffer.apply().map_err(|err| FormatError::Splice {
        file: file.to_owned(),
        source: err,
    })?;

    if imports.needs_import() {
        Ok(insert_import(&wrapped, spec))
    } else {
        Ok(wrapped)
    }
}
