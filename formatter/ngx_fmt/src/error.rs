//! The formatter's public error type.

use ngx_mask::MaskError;
use thiserror::Error;

/// Error raised at the formatting boundary.
///
/// Malformed-but-processable input (unbalanced braces, unterminated quotes)
/// never produces an error; the pipeline degrades gracefully and still
/// returns a string. The error path is reserved for internal failures, where
/// returning a partial result would corrupt the document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A masked quoted span could not be restored into the output.
    #[error("formatting failed: {0}")]
    Mask(#[from] MaskError),
}
