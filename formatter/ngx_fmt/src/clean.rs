//! Line Cleaning
//!
//! The first pipeline stage: turns raw configuration text into a line
//! sequence ready for the structural stages.
//!
//! Per line, the cleaner trims whitespace, collapses internal whitespace
//! runs outside quoted spans, strips trailing comments, and breaks the line
//! apart so that every `{`/`}` introducer and every directive statement sits
//! on its own line. Runs of blank lines are capped. Quoted literals are
//! masked via [`ngx_mask`] around each transformation and restored into
//! every produced line, so their contents are never split or collapsed.
//!
//! Splitting works through a queue: when a line breaks at its first
//! structural point, the remainder goes back on the queue and is processed
//! again from scratch, so arbitrarily dense one-liners unfold one split at a
//! time.

use std::collections::VecDeque;

use ngx_mask::mask_delimited;

use crate::error::FormatError;
use crate::scan::{find_unquoted, split_logical_lines};

/// Maximum run of consecutive blank lines kept by the cleaner.
pub const MAX_BLANK_RUN: usize = 2;

/// Directives whose arguments are whitespace-significant. Lines naming one
/// of these outside quotes are exempt from whitespace collapsing.
///
/// The list is deliberately conservative; extend it only for directives
/// whose arguments change meaning when internal runs of whitespace are
/// collapsed.
pub const WHITESPACE_SENSITIVE_DIRECTIVES: &[&str] = &["sub_filter"];

/// Argument tokens that embed literal braces. A line containing one of
/// these is never structurally split, so the token survives verbatim.
const BRACE_LITERAL_TOKENS: &[&str] = &["('{", "}')", "'{'", "'}'"];

/// Clean raw configuration text into a line sequence.
///
/// Output lines are trimmed and carry at most one structural introducer
/// each; blank runs are capped at [`MAX_BLANK_RUN`].
pub fn clean_lines(text: &str) -> Result<Vec<String>, FormatError> {
    let mut queue: VecDeque<String> = split_logical_lines(text)
        .into_iter()
        .map(str::to_string)
        .collect();
    let mut out: Vec<String> = Vec::with_capacity(queue.len());
    let mut blank_run = 0usize;

    while let Some(raw) = queue.pop_front() {
        let line = raw.trim();

        if line.is_empty() {
            blank_run += 1;
            if blank_run <= MAX_BLANK_RUN {
                out.push(String::new());
            }
            continue;
        }
        blank_run = 0;

        if line.starts_with('#') {
            // Full-line comments pass through untouched, embedded braces
            // and all.
            out.push(line.to_string());
            continue;
        }

        let stripped = strip_line(line)?;
        if stripped == "{" || stripped == "}" || has_brace_literal(&stripped) {
            out.push(stripped);
            continue;
        }

        // Trailing comment text is dropped before structural analysis.
        let code = match find_unquoted(&stripped, '#') {
            Some(pos) => stripped[..pos].trim_end(),
            None => stripped.as_str(),
        };

        split_structural(code, &mut out, &mut queue)?;
    }

    Ok(out)
}

/// Trim a line and collapse internal whitespace runs outside quoted spans.
///
/// Collapsing is skipped when the unquoted text names a directive from
/// [`WHITESPACE_SENSITIVE_DIRECTIVES`].
fn strip_line(line: &str) -> Result<String, FormatError> {
    let mut masked = mask_delimited(line.trim(), '"', '"');
    let collapsed = if is_whitespace_sensitive(masked.filtered()) {
        masked.filtered().to_string()
    } else {
        collapse_whitespace(masked.filtered())
    };
    let restored = masked.restore_fragment(&collapsed);
    masked.finish()?;
    Ok(restored)
}

fn is_whitespace_sensitive(filtered: &str) -> bool {
    WHITESPACE_SENSITIVE_DIRECTIVES
        .iter()
        .any(|directive| filtered.contains(directive))
}

fn has_brace_literal(line: &str) -> bool {
    BRACE_LITERAL_TOKENS.iter().any(|token| line.contains(token))
}

/// Replace every run of two or more whitespace characters with one space.
///
/// A single whitespace character is kept as written.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_whitespace() && chars.peek().is_some_and(|next| next.is_whitespace()) {
            while chars.peek().is_some_and(|next| next.is_whitespace()) {
                chars.next();
            }
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    out
}

/// Where a cleaned line breaks apart.
enum SplitPoint {
    /// Byte offset of a `{` or `}` introducer.
    Brace(usize),
    /// Byte offset of a `;` with further content after it.
    StatementEnd(usize),
}

/// First structural point in masked text: a brace, or a `;` that is not the
/// last thing on the line.
fn find_split_point(filtered: &str) -> Option<SplitPoint> {
    for (pos, c) in filtered.char_indices() {
        match c {
            '{' | '}' => return Some(SplitPoint::Brace(pos)),
            ';' if !filtered[pos + 1..].trim().is_empty() => {
                return Some(SplitPoint::StatementEnd(pos));
            }
            _ => {}
        }
    }
    None
}

/// Break one line at its first structural point.
///
/// A brace is emitted alone on its own line, between the text before it (if
/// any) and the requeued text after it (if any). A mid-line `;` ends the
/// statement there and requeues the rest. Lines with no structural point are
/// emitted whole.
fn split_structural(
    code: &str,
    out: &mut Vec<String>,
    queue: &mut VecDeque<String>,
) -> Result<(), FormatError> {
    let mut masked = mask_delimited(code, '"', '"');
    let filtered = masked.filtered().to_string();

    match find_split_point(&filtered) {
        Some(SplitPoint::Brace(pos)) => {
            let before = filtered[..pos].trim();
            let after = filtered[pos + 1..].trim();
            if !before.is_empty() {
                out.push(masked.restore_fragment(before));
            }
            out.push(filtered[pos..=pos].to_string());
            if !after.is_empty() {
                queue.push_front(masked.restore_fragment(after));
            }
        }
        Some(SplitPoint::StatementEnd(pos)) => {
            let statement = filtered[..=pos].trim();
            let rest = filtered[pos + 1..].trim();
            out.push(masked.restore_fragment(statement));
            queue.push_front(masked.restore_fragment(rest));
        }
        None => {
            out.push(masked.restore_fragment(&filtered));
        }
    }
    masked.finish()?;
    Ok(())
}
