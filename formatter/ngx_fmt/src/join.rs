//! Opening-Brace Joining
//!
//! The second pipeline stage: merges every line that is exactly `{` onto the
//! nearest preceding non-blank line, so a block opener reads as
//! `statement {` rather than a dangling brace.

use crate::options::FormatOptions;

/// Merge standalone `{` lines onto the statement that opens the block.
///
/// A `{` with no preceding non-blank line stays standalone. When
/// `preserve_trailing_blank_lines` is set and the line that followed the
/// standalone `{` is non-blank, one blank line keeps the separation the
/// author wrote. No-op when `join_opening_brace` is disabled.
pub fn join_opening_braces(lines: &[String], options: &FormatOptions) -> Vec<String> {
    if !options.join_opening_brace {
        return lines.to_vec();
    }

    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        if line == "{" {
            if let Some(target) = out.iter_mut().rev().find(|l| !l.is_empty()) {
                target.push_str(" {");
                let next_is_content = lines.get(i + 1).is_some_and(|next| !next.is_empty());
                if options.preserve_trailing_blank_lines && next_is_content {
                    out.push(String::new());
                }
                continue;
            }
        }
        out.push(line.clone());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn joins_brace_onto_previous_line() {
        let joined = join_opening_braces(
            &lines(&["server", "{", "listen 80;", "}"]),
            &FormatOptions::default(),
        );
        assert_eq!(joined, lines(&["server {", "listen 80;", "}"]));
    }

    #[test]
    fn joins_across_intervening_blank_lines() {
        let joined = join_opening_braces(
            &lines(&["server", "", "{", "listen 80;"]),
            &FormatOptions::default(),
        );
        assert_eq!(joined, lines(&["server {", "", "listen 80;"]));
    }

    #[test]
    fn leading_brace_stays_standalone() {
        let joined = join_opening_braces(
            &lines(&["{", "listen 80;", "}"]),
            &FormatOptions::default(),
        );
        assert_eq!(joined, lines(&["{", "listen 80;", "}"]));
    }

    #[test]
    fn disabled_joining_is_a_no_op() {
        let input = lines(&["server", "{", "}"]);
        let joined = join_opening_braces(&input, &FormatOptions::without_brace_joining());
        assert_eq!(joined, input);
    }

    #[test]
    fn preserves_separation_after_join_when_requested() {
        let options = FormatOptions {
            preserve_trailing_blank_lines: true,
            ..FormatOptions::default()
        };
        let joined = join_opening_braces(&lines(&["server", "{", "listen 80;"]), &options);
        assert_eq!(joined, lines(&["server {", "", "listen 80;"]));
    }

    #[test]
    fn no_blank_inserted_when_blank_already_follows() {
        let options = FormatOptions {
            preserve_trailing_blank_lines: true,
            ..FormatOptions::default()
        };
        let joined = join_opening_braces(&lines(&["server", "{", "", "listen 80;"]), &options);
        assert_eq!(joined, lines(&["server {", "", "listen 80;"]));
    }

    #[test]
    fn consecutive_braces_chain_onto_one_line() {
        // Malformed input degrades gracefully rather than panicking.
        let joined = join_opening_braces(&lines(&["a", "{", "{"]), &FormatOptions::default());
        assert_eq!(joined, lines(&["a { {"]));
    }
}
