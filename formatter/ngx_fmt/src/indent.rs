//! Depth-Based Indentation
//!
//! The third pipeline stage: a single forward pass over the line sequence,
//! maintaining one depth register driven purely by the brace structure. The
//! (possibly inconsistent) input formatting plays no part.

use crate::scan::find_unquoted;

/// Prefix every line with `indent_unit` repeated once per open block.
///
/// A line whose content ends with `}` dedents before it is emitted; a line
/// whose content ends with `{` indents after. Comment lines are indented at
/// the current depth but never change it, and blank lines carry no prefix.
/// The depth floors at zero, so input that closes more blocks than it opened
/// degrades gracefully instead of crashing.
pub fn indent_lines(lines: &[String], indent_unit: &str) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());
    let mut depth: usize = 0;

    for line in lines {
        let is_comment = line.starts_with('#');
        if !is_comment && closes_block(line) {
            depth = depth.saturating_sub(1);
        }

        if line.is_empty() {
            out.push(String::new());
        } else {
            let mut indented = indent_unit.repeat(depth);
            indented.push_str(line);
            out.push(indented);
        }

        if !is_comment && opens_block(line) {
            depth += 1;
        }
    }
    out
}

/// Structural content of a line: everything before a trailing unquoted
/// comment, with trailing whitespace removed.
///
/// The cleaner already strips trailing comments from directive lines; this
/// tolerates them anyway so the indenter stands on its own.
fn structural_content(line: &str) -> &str {
    let code = match find_unquoted(line, '#') {
        Some(pos) => &line[..pos],
        None => line,
    };
    code.trim_end()
}

fn closes_block(line: &str) -> bool {
    structural_content(line).ends_with('}')
}

fn opens_block(line: &str) -> bool {
    structural_content(line).ends_with('{')
}
