//! Whitespace normalization for multi-line string content.
//!
//! [`dedent`] mirrors Python's `textwrap.dedent` exactly, since the
//! verifier compares dedented values and the formatter must not change
//! them. [`reindent`] dedents and then re-applies a uniform indent.

/// Removes the longest common leading whitespace from all lines.
///
/// Lines consisting solely of spaces and tabs do not participate in the
/// margin computation and are normalized to empty lines, matching
/// `textwrap.dedent`. Tabs and spaces are compared literally, so a line
/// indented with a tab shares no margin with a line indented with spaces.
#[must_use]
pub fn dedent(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();

    let mut margin: Option<&str> = None;
    for line in &lines {
        let stripped = line.trim_start_matches([' ', '\t']);
        if stripped.is_empty() {
            continue;
        }
        let indent = &line[..line.len() - stripped.len()];
        margin = Some(match margin {
            None => indent,
            Some(current) => common_prefix(current, indent),
        });
    }
    let margin = margin.unwrap_or("");

    let result: Vec<&str> = lines
        .iter()
        .map(|line| {
            if line.trim_start_matches([' ', '\t']).is_empty() {
                ""
            } else {
                line.strip_prefix(margin).unwrap_or(line)
            }
        })
        .collect();
    result.join("\n")
}

/// Longest shared prefix of two indent strings. Indents are ASCII
/// whitespace, so the byte boundary is always a char boundary.
fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}

/// Dedents `content` and re-indents every interior line by `indent` spaces.
///
/// Leading and trailing blank lines stay empty, as do blank lines between
/// paragraphs. Trailing whitespace on content lines is preserved because
/// it is part of the dedented value.
#[must_use]
pub fn reindent(content: &str, indent: usize) -> String {
    let dedented = dedent(content);
    let lines: Vec<&str> = dedented.split('\n').collect();

    let first_non_blank = lines
        .iter()
        .position(|line| !line.trim().is_empty())
        .unwrap_or(0);
    let last_non_blank = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .unwrap_or(lines.len() - 1);

    let indent_str = " ".repeat(indent);
    let result: Vec<String> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i < first_non_blank || i > last_non_blank || line.trim().is_empty() {
                String::new()
            } else {
                format!("{indent_str}{line}")
            }
        })
        .collect();
    result.join("\n")
}
