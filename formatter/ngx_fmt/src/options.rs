//! Formatter configuration.

/// Default indentation unit: four spaces per nesting level.
pub const DEFAULT_INDENT_UNIT: &str = "    ";

/// Configuration for the formatter.
///
/// Immutable for the duration of a formatting call. Construct with
/// [`FormatOptions::default`] or one of the `with_*` constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// String emitted once per nesting level in front of each line.
    pub indent_unit: String,

    /// Merge a standalone `{` onto the end of the statement line that opens
    /// the block. Defaults to `true`.
    pub join_opening_brace: bool,

    /// When joining a standalone `{`, insert one blank line if non-blank
    /// content followed the brace, preserving the separation the author
    /// wrote. Defaults to `false`.
    pub preserve_trailing_blank_lines: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent_unit: DEFAULT_INDENT_UNIT.to_string(),
            join_opening_brace: true,
            preserve_trailing_blank_lines: false,
        }
    }
}

impl FormatOptions {
    /// Create options with the given indentation unit.
    pub fn with_indent_unit(indent_unit: impl Into<String>) -> Self {
        Self {
            indent_unit: indent_unit.into(),
            ..Self::default()
        }
    }

    /// Create options that leave standalone `{` lines unjoined.
    pub fn without_brace_joining() -> Self {
        Self {
            join_opening_brace: false,
            ..Self::default()
        }
    }
}
