//! Error types for action dispatch.

use miette::Diagnostic;
use smol_str::SmolStr;
use thiserror::Error;

use crate::formatter::FormatterError;
use crate::text::utf16_len;

/// Errors that can occur while applying an action.
///
/// None of these are fatal: the caller's buffer and selection are never
/// touched, so a host can surface the error and carry on.
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
#[non_exhaustive]
pub enum EditorError {
    /// Selection offsets are reversed, out of bounds, or split a surrogate pair.
    #[error("invalid selection {start}..{end} for text of length {len}")]
    #[diagnostic(
        code(marksmith::selection),
        help("offsets are UTF-16 code units and must satisfy start <= end <= length")
    )]
    InvalidSelection { start: usize, end: usize, len: usize },

    /// No action is registered under this name.
    #[error("unknown action: {0}")]
    #[diagnostic(code(marksmith::unknown_action))]
    UnknownAction(SmolStr),

    /// The injected canonical formatter failed.
    #[error(transparent)]
    #[diagnostic(transparent)]
    FormatterFailure(#[from] FormatterError),
}

impl EditorError {
    /// Build an `InvalidSelection` for the given offsets against `text`.
    pub fn invalid_selection(text: &str, start: usize, end: usize) -> Self {
        Self::InvalidSelection {
            start,
            end,
            len: utf16_len(text),
        }
    }
}
