//! Finishing
//!
//! The last pipeline stage: drops every blank line, joins the rest with a
//! single newline, and guarantees the output ends with exactly one newline.

/// Join the line sequence into the final document text.
///
/// The empty document formats to a single newline.
pub fn finish(lines: &[String]) -> String {
    let kept: Vec<&str> = lines
        .iter()
        .map(String::as_str)
        .filter(|line| !line.trim().is_empty())
        .collect();

    let mut result = kept.join("\n");
    result.truncate(result.trim_end().len());
    result.push('\n');
    result
}
