//! Delimited-Span Masking
//!
//! Replaces delimiter-bounded spans (typically quoted string literals) with
//! unique placeholder tokens so that text-level processing cannot corrupt
//! their contents, and restores them afterwards.
//!
//! # Contract
//!
//! [`mask_delimited`] scans left to right, non-greedy: each opening delimiter
//! is paired with the nearest closing delimiter after it. The two delimiters
//! may be the same character, as they are for quotes. An unpaired trailing
//! delimiter ends extraction; the remainder of the input, including the lone
//! delimiter, passes through untouched. Empty spans are masked like any
//! other span.
//!
//! The span map is owned by the returned [`MaskedText`] value and never
//! outlives it. Restoration is a literal substitution, applied at most once
//! per placeholder, and must fully reverse masking: a placeholder that is
//! never restored means a stage corrupted it and the span's contents would
//! be silently lost, which [`MaskedText::finish`] reports as a [`MaskError`].
//!
//! # Placeholders
//!
//! Placeholders carry a per-call counter and the delimiter codepoints, and
//! are built from characters that are inert to every consumer of this crate:
//! no whitespace, quotes, braces, `#`, or `;`. If the input already contains
//! a candidate placeholder, the counter is bumped until the candidate does
//! not occur in the input, so collision freedom is checked rather than
//! assumed. This also makes repeated masking of already-masked text safe.

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Marker framing every placeholder token.
///
/// Exposed so invariant tests can assert that no placeholder survives into
/// final output.
pub const SIGIL: &str = "$%&$%&";

/// Failure to reverse masking: one or more spans were never restored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaskError {
    /// Placeholders remained in the span map after restoration finished,
    /// meaning an intermediate stage corrupted or dropped them.
    #[error("{count} masked span(s) were never restored into the output")]
    UnrestoredSpans {
        /// Number of spans whose placeholders were lost.
        count: usize,
    },
}

/// Text with its delimiter-bounded spans replaced by placeholders, plus the
/// map needed to reverse the replacement.
#[derive(Debug)]
pub struct MaskedText {
    filtered: String,
    spans: FxHashMap<String, String>,
}

/// Mask every `open`..`close` span in `input`, delimiters included.
pub fn mask_delimited(input: &str, open: char, close: char) -> MaskedText {
    let mut filtered = String::with_capacity(input.len());
    let mut spans = FxHashMap::default();
    let mut rest = input;
    let mut counter = 0usize;

    loop {
        let Some(start) = rest.find(open) else { break };
        let body = &rest[start + open.len_utf8()..];
        let Some(body_len) = body.find(close) else {
            // Unpaired trailing delimiter: no span is assumed over
            // end-of-input.
            break;
        };
        let span_len = open.len_utf8() + body_len + close.len_utf8();

        filtered.push_str(&rest[..start]);
        let placeholder = next_placeholder(input, &mut counter, open, close);
        filtered.push_str(&placeholder);
        spans.insert(placeholder, rest[start..start + span_len].to_string());
        rest = &rest[start + span_len..];
    }
    filtered.push_str(rest);

    MaskedText { filtered, spans }
}

/// Build a placeholder that does not occur anywhere in the input.
fn next_placeholder(input: &str, counter: &mut usize, open: char, close: char) -> String {
    loop {
        let candidate = format!(
            "{SIGIL}span{n}c{o}c{c}{SIGIL}",
            n = *counter,
            o = open as u32,
            c = close as u32
        );
        *counter += 1;
        if !input.contains(&candidate) {
            return candidate;
        }
    }
}

impl MaskedText {
    /// The input with every span replaced by its placeholder.
    pub fn filtered(&self) -> &str {
        &self.filtered
    }

    /// Number of spans still awaiting restoration.
    pub fn span_count(&self) -> usize {
        self.spans.len()
    }

    /// Restore this call's spans into `fragment`, a string derived from the
    /// filtered text.
    ///
    /// Each placeholder is substituted at most once and is consumed by the
    /// substitution, so a span split across fragments cannot be duplicated.
    pub fn restore_fragment(&mut self, fragment: &str) -> String {
        let mut restored = fragment.to_string();
        let found: Vec<String> = self
            .spans
            .keys()
            .filter(|key| restored.contains(key.as_str()))
            .cloned()
            .collect();
        for key in found {
            if let Some(original) = self.spans.remove(&key) {
                restored = restored.replacen(&key, &original, 1);
            }
        }
        restored
    }

    /// Restore the filtered text itself, verifying every span came back.
    pub fn into_restored(mut self) -> Result<String, MaskError> {
        let filtered = std::mem::take(&mut self.filtered);
        let restored = self.restore_fragment(&filtered);
        self.finish()?;
        Ok(restored)
    }

    /// Assert that every span has been restored somewhere.
    ///
    /// Call this once all fragments derived from the filtered text have been
    /// passed through [`MaskedText::restore_fragment`].
    pub fn finish(self) -> Result<(), MaskError> {
        if self.spans.is_empty() {
            Ok(())
        } else {
            Err(MaskError::UnrestoredSpans {
                count: self.spans.len(),
            })
        }
    }
}
