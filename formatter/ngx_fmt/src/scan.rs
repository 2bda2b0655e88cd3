//! Explicit character scanners shared by the pipeline stages.
//!
//! Quoting uses matched-pair semantics: a `"` only shields text if a closing
//! `"` follows it in the same line. A lone trailing quote shields nothing,
//! which agrees with how [`ngx_mask`] treats an unpaired delimiter.

/// Split raw text into logical lines, accepting `\n`, `\r\n`, and `\r`
/// terminators.
///
/// Returned lines carry no terminator. Like the usual split semantics, text
/// ending in a terminator yields a final empty line; the finishing stage
/// removes blanks, so this never reaches output.
pub fn split_logical_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    lines.push(&text[start..]);
    lines
}

/// Byte offset of the first `needle` outside double-quoted spans.
///
/// `needle` must not itself be `"`. Quote pairs are skipped wholesale; an
/// unpaired trailing quote opens no span, so a `needle` after it is found.
pub fn find_unquoted(line: &str, needle: char) -> Option<usize> {
    debug_assert!(needle != '"');
    let mut rest = line;
    let mut base = 0;

    loop {
        let hit = rest.find(needle);
        let quote = rest.find('"');
        match (hit, quote) {
            (Some(h), Some(q)) if h < q => return Some(base + h),
            (Some(h), None) => return Some(base + h),
            (None, None) => return None,
            (_, Some(q)) => match rest[q + 1..].find('"') {
                Some(close) => {
                    // Skip past the closing quote and keep scanning.
                    let next = q + 1 + close + 1;
                    base += next;
                    rest = &rest[next..];
                }
                None => return hit.map(|h| base + h),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_on_every_terminator_style() {
        assert_eq!(split_logical_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn trailing_newline_yields_final_empty_line() {
        assert_eq!(split_logical_lines("a\n"), vec!["a", ""]);
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(split_logical_lines(""), vec![""]);
    }

    #[test]
    fn crlf_is_one_terminator() {
        assert_eq!(split_logical_lines("a\r\n\r\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn finds_plain_needle() {
        assert_eq!(find_unquoted("listen 80; # note", '#'), Some(11));
    }

    #[test]
    fn skips_needle_inside_quotes() {
        assert_eq!(find_unquoted(r#"log "a # b" ; # real"#, '#'), Some(14));
    }

    #[test]
    fn needle_only_inside_quotes_is_not_found() {
        assert_eq!(find_unquoted(r#"log "a # b";"#, '#'), None);
    }

    #[test]
    fn unpaired_quote_shields_nothing() {
        assert_eq!(find_unquoted(r#"broken "quote # here"#, '#'), Some(14));
    }

    #[test]
    fn needle_before_any_quote() {
        assert_eq!(find_unquoted(r#"a # "quoted""#, '#'), Some(2));
    }
}
