//! String literal shape detection, escaping, and re-assembly.
//!
//! A rewritten literal must parse back to the same cooked value, so the
//! reindented content is escaped for the target quote style before the
//! quotes are put back around it.

/// The quote style of a string literal as written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    /// A triple-quoted literal (`"""` or `'''`).
    Triple(char),
    /// A single-character-quoted literal (`"` or `'`).
    Single(char),
}

impl QuoteStyle {
    /// Detects the quote style from the raw source text of a literal.
    ///
    /// Returns `None` when the literal starts with something other than a
    /// plain quote (a string prefix like `r` or `b`); such literals are
    /// left untouched.
    #[must_use]
    pub fn detect(raw: &str) -> Option<Self> {
        if raw.starts_with("\"\"\"") || raw.starts_with("'''") {
            Some(Self::Triple(raw.chars().next()?))
        } else if raw.starts_with('"') || raw.starts_with('\'') {
            Some(Self::Single(raw.chars().next()?))
        } else {
            None
        }
    }

    /// The quote marker as written in source (`"""` or `"` etc.).
    #[must_use]
    pub fn marker(self) -> String {
        match self {
            Self::Triple(quote) => quote.to_string().repeat(3),
            Self::Single(quote) => quote.to_string(),
        }
    }

    /// Length in bytes of the opening quote marker.
    #[must_use]
    pub fn opener_len(self) -> usize {
        match self {
            Self::Triple(_) => 3,
            Self::Single(_) => 1,
        }
    }

}

/// The source-level shape of a literal: its quote style and whether the
/// opening quote is followed by a backslash line continuation.
#[derive(Debug, Clone, Copy)]
pub struct LiteralShape {
    /// The quote characters used by the literal.
    pub style: QuoteStyle,
    /// Whether a `\\` line continuation follows the opening quote.
    pub backslash_continuation: bool,
}

impl LiteralShape {
    /// Detects the shape from the raw source text of a literal.
    #[must_use]
    pub fn detect(raw: &str) -> Option<Self> {
        let style = QuoteStyle::detect(raw)?;
        let backslash_continuation = raw[style.opener_len()..].starts_with('\\');
        Some(Self {
            style,
            backslash_continuation,
        })
    }

    /// Re-assembles a literal from escaped content.
    ///
    /// When the content ends with a newline, the closing quote is placed on
    /// its own line at `closing_column`.
    #[must_use]
    pub fn assemble(self, escaped_content: &str, closing_column: usize) -> String {
        let marker = self.style.marker();
        let opening = if self.backslash_continuation {
            format!("{marker}\\\n")
        } else {
            marker.clone()
        };
        if let Some(body) = escaped_content.strip_suffix('\n') {
            let pad = " ".repeat(closing_column);
            format!("{opening}{body}\n{pad}{marker}")
        } else {
            format!("{opening}{escaped_content}{marker}")
        }
    }
}

/// Escapes content so it survives being written between the given quotes.
///
/// Backslashes are escaped first so the quote escaping added afterwards is
/// not doubled. Single-character quote styles additionally need real
/// newlines escaped, since an unescaped newline would terminate the
/// literal.
#[must_use]
pub fn escape_content(content: &str, style: QuoteStyle) -> String {
    let mut escaped = content.replace('\\', "\\\\");
    match style {
        QuoteStyle::Triple(quote) => {
            let marker = style.marker();
            let escaped_marker = format!("\\{quote}").repeat(3);
            escaped = escaped.replace(&marker, &escaped_marker);
        }
        QuoteStyle::Single(quote) => {
            escaped = escaped.replace(quote, &format!("\\{quote}"));
            escaped = escaped.replace('\n', "\\n").replace('\r', "\\r");
        }
    }
    escaped
}

/// The indentation decisions for one rewritten literal.
#[derive(Debug, Clone, Copy)]
pub struct IndentPlan {
    /// Indentation applied to each content line.
    pub content_indent: usize,
    /// Column of the closing quote when it lands on its own line.
    pub closing_column: usize,
}

impl IndentPlan {
    /// Derives the plan from the line holding the opening quote.
    ///
    /// A quote that starts its line keeps its own column as the content
    /// indent. A quote trailing other code (the common `dedent("""` case)
    /// indents content one level past the statement.
    #[must_use]
    pub fn for_literal(quote_line: &str, opening_quote_col: usize, indent_width: usize) -> Self {
        let first_non_space = quote_line.len() - quote_line.trim_start().len();
        let content_indent = if opening_quote_col == first_non_space {
            opening_quote_col
        } else {
            first_non_space + indent_width
        };
        Self {
            content_indent,
            closing_column: first_non_space,
        }
    }
}
