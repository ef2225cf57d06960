//! Locates string literals of interest in a parsed module.
//!
//! Two searches share this module: the literal arguments of recognized
//! dedent calls (the strings the formatter reindents), and multi-line
//! strings that are not yet wrapped (the add-mode candidates).

use ruff_python_ast::visitor::{self, Visitor};
use ruff_python_ast::{Expr, ModModule, Stmt};
use ruff_text_size::{Ranged, TextRange};
use rustc_hash::FxHashSet;

/// Which calls count as dedent helpers.
///
/// A call matches when its callee is a bare name in `functions`, or an
/// attribute access `module.function` where the module is a plain name in
/// `modules` and the attribute is in `functions`.
#[derive(Debug, Clone)]
pub struct DedentSpec {
    functions: Vec<String>,
    modules: Vec<String>,
}

impl Default for DedentSpec {
    fn default() -> Self {
        Self {
            functions: vec!["dedent".to_owned()],
            modules: vec!["textwrap".to_owned()],
        }
    }
}

impl DedentSpec {
    #[must_use]
    pub fn new(functions: Vec<String>, modules: Vec<String>) -> Self {
        Self { functions, modules }
    }

    /// Checks whether a call expression's callee names a dedent helper.
    #[must_use]
    pub fn matches_callee(&self, func: &Expr) -> bool {
        match func {
            Expr::Name(name) => self.functions.iter().any(|f| f == name.id.as_str()),
            Expr::Attribute(attr) => {
                if !self.functions.iter().any(|f| f == attr.attr.as_str()) {
                    return false;
                }
                if let Expr::Name(module) = &*attr.value {
                    self.modules.iter().any(|m| m == module.id.as_str())
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    /// True when `name` is one of the recognized helper function names.
    #[must_use]
    pub fn is_function(&self, name: &str) -> bool {
        self.functions.iter().any(|f| f == name)
    }

    /// True when `name` is one of the recognized helper modules.
    #[must_use]
    pub fn is_module(&self, name: &str) -> bool {
        self.modules.iter().any(|m| m == name)
    }

    /// The preferred function name for newly inserted calls.
    #[must_use]
    pub fn primary_function(&self) -> &str {
        self.functions.first().map_or("dedent", String::as_str)
    }

    /// The preferred module name for newly inserted imports.
    #[must_use]
    pub fn primary_module(&self) -> &str {
        self.modules.first().map_or("textwrap", String::as_str)
    }
}

/// A string literal found in the source, with its byte range and cooked
/// value. Implicitly concatenated parts appear as one literal with the
/// joined value.
#[derive(Debug, Clone)]
pub struct LocatedString {
    /// Byte range of the literal in the source, quotes included.
    pub range: TextRange,
    /// The cooked string value.
    pub value: String,
}

struct DedentStringFinder<'spec> {
    spec: &'spec DedentSpec,
    found: Vec<LocatedString>,
}

impl<'a> Visitor<'a> for DedentStringFinder<'_> {
    fn visit_expr(&mut self, expr: &'a Expr) {
        if let Expr::Call(call) = expr {
            if self.spec.matches_callee(&call.func) {
                if let Some(Expr::StringLiteral(lit)) = call.arguments.args.first() {
                    self.found.push(LocatedString {
                        range: lit.range(),
                        value: lit.value.to_string(),
                    });
                }
            }
        }
        visitor::walk_expr(self, expr);
    }
}

/// Finds the literal string arguments of recognized dedent calls.
///
/// Only the first positional argument counts; keyword arguments, f-strings
/// and non-literal expressions are ignored.
#[must_use]
pub fn find_dedent_strings(module: &ModModule, spec: &DedentSpec) -> Vec<LocatedString> {
    let mut finder = DedentStringFinder {
        spec,
        found: Vec::new(),
    };
    for stmt in &module.body {
        finder.visit_stmt(stmt);
    }
    finder.found
}

struct WrapCandidateFinder<'a> {
    spec: &'a DedentSpec,
    source: &'a str,
    /// Start offsets of literals that are already dedent arguments.
    dedent_args: FxHashSet<u32>,
    /// Start offsets of literals that are module-level assignment values.
    toplevel_values: FxHashSet<u32>,
    fstring_depth: usize,
    found: Vec<LocatedString>,
}

impl<'a> Visitor<'a> for WrapCandidateFinder<'_> {
    fn visit_expr(&mut self, expr: &'a Expr) {
        match expr {
            Expr::Call(call) => {
                if self.spec.matches_callee(&call.func) {
                    if let Some(Expr::StringLiteral(lit)) = call.arguments.args.first() {
                        self.dedent_args.insert(lit.range().start().to_u32());
                    }
                }
            }
            Expr::FString(_) => {
                self.fstring_depth += 1;
                visitor::walk_expr(self, expr);
                self.fstring_depth -= 1;
                return;
            }
            Expr::StringLiteral(lit) => {
                let range = lit.range();
                let start = range.start().to_u32();
                let spans_lines = self.source[range.start().to_usize()..range.end().to_usize()]
                    .contains('\n');
                if spans_lines
                    && self.fstring_depth == 0
                    && !self.dedent_args.contains(&start)
                    && !self.toplevel_values.contains(&start)
                {
                    self.found.push(LocatedString {
                        range,
                        value: lit.value.to_string(),
                    });
                }
            }
            _ => {}
        }
        visitor::walk_expr(self, expr);
    }
}

/// Finds multi-line string literals eligible for wrapping in a dedent
/// call.
///
/// Excluded: literals already passed to a dedent call, literals inside
/// f-string interpolations, and direct values of module-level assignments
/// (those are usually data constants whose exact value matters).
#[must_use]
pub fn find_wrap_candidates(
    module: &ModModule,
    source: &str,
    spec: &DedentSpec,
) -> Vec<LocatedString> {
    let mut toplevel_values = FxHashSet::default();
    for stmt in &module.body {
        let value = match stmt {
            Stmt::Assign(assign) => Some(&assign.value),
            Stmt::AnnAssign(ann) => ann.value.as_ref(),
            _ => None,
        };
        if let Some(Expr::StringLiteral(lit)) = value.map(|v| &**v) {
            toplevel_values.insert(lit.range().start().to_u32());
        }
    }

    let mut finder = WrapCandidateFinder {
        spec,
        source,
        dedent_args: FxHashSet::default(),
        toplevel_values,
        fstring_depth: 0,
        found: Vec::new(),
    };
    for stmt in &module.body {
        finder.visit_stmt(stmt);
    }
    finder.found
}
