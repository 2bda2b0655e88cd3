//! Nginx Configuration Formatter
//!
//! Rewrites raw, human-written nginx-style configuration text (nested
//! brace-delimited blocks, `;`-terminated directives, `#` comments, quoted
//! string literals) into a canonical, consistently indented form.
//!
//! # Architecture
//!
//! The formatter is a pipeline of pure stages over a sequence of logical
//! lines. Data flows strictly left to right; no stage knows about the stages
//! after it:
//!
//! 1. **Span masking** ([`ngx_mask`]): quoted literals become placeholder
//!    tokens so later text processing cannot corrupt them.
//! 2. **[`clean`]**: split into logical lines, normalize whitespace outside
//!    quotes, and break lines apart so every `{`/`}` introducer and every
//!    directive statement sits on its own line.
//! 3. **[`join`]**: merge standalone `{` lines onto the statement they open.
//! 4. **[`indent`]**: prefix each line with the indent unit once per open
//!    block, derived purely from brace depth.
//! 5. **[`finish`]**: drop blank lines and end with exactly one newline.
//!
//! Formatting is structural only: directive values are never altered, no
//! semantic model of the configuration is built, and nothing is validated.
//! Malformed input (unterminated quotes, unbalanced braces) degrades
//! gracefully instead of failing.
//!
//! The whole computation is synchronous and call-scoped; concurrent calls
//! with independent inputs share no state.

pub mod clean;
mod error;
pub mod finish;
pub mod indent;
pub mod join;
mod options;
pub mod scan;

pub use error::FormatError;
pub use options::{FormatOptions, DEFAULT_INDENT_UNIT};

/// Format configuration text into canonical form.
///
/// Returns `Err` only for internal pipeline failures; malformed input is
/// processed on a best-effort basis and still yields a complete string.
///
/// # Example
///
/// ```
/// use ngx_fmt::FormatOptions;
///
/// let out = ngx_fmt::format("server{listen 80;}", &FormatOptions::default())?;
/// assert_eq!(out, "server {\n    listen 80;\n}\n");
/// # Ok::<(), ngx_fmt::FormatError>(())
/// ```
pub fn format(text: &str, options: &FormatOptions) -> Result<String, FormatError> {
    let lines = clean::clean_lines(text)?;
    tracing::debug!(lines = lines.len(), "cleaned input into logical lines");

    let lines = join::join_opening_braces(&lines, options);
    let lines = indent::indent_lines(&lines, &options.indent_unit);
    let formatted = finish::finish(&lines);

    tracing::debug!(bytes = formatted.len(), "formatting complete");
    Ok(formatted)
}

/// Format a single self-contained block (for example one `server` block)
/// with default options.
pub fn format_block(text: &str) -> Result<String, FormatError> {
    format(text, &FormatOptions::default())
}
