//! Canonical formatter capability.
//!
//! The `format` action rewrites the whole document into a fixed markdown
//! style. The actual formatter is injected by the host so this crate has no
//! dependency on any particular markdown implementation.

use miette::Diagnostic;
use thiserror::Error;

/// Errors a canonical formatter may report.
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
#[non_exhaustive]
pub enum FormatterError {
    /// Document exceeds the formatter's configured size limit.
    #[error("document is {len} bytes, formatter limit is {limit}")]
    #[diagnostic(code(marksmith::formatter::too_large))]
    InputTooLarge { len: usize, limit: usize },

    /// Formatter-specific failure.
    #[error("formatter failed: {0}")]
    #[diagnostic(code(marksmith::formatter))]
    Failed(String),
}

impl From<&str> for FormatterError {
    fn from(s: &str) -> Self {
        FormatterError::Failed(s.to_string())
    }
}

impl From<String> for FormatterError {
    fn from(s: String) -> Self {
        FormatterError::Failed(s)
    }
}

/// Reformats an entire markdown document into a canonical style.
///
/// Implementations must be synchronous. Timeouts and cancellation are the
/// host's business.
pub trait CanonicalFormatter: Send + Sync {
    /// Format `text`, returning the rewritten document.
    fn format(&self, text: &str) -> Result<String, FormatterError>;
}

impl<F> CanonicalFormatter for F
where
    F: Fn(&str) -> Result<String, FormatterError> + Send + Sync,
{
    fn format(&self, text: &str) -> Result<String, FormatterError> {
        self(text)
    }
}

/// Formatter that hands the document back unchanged.
///
/// Useful for hosts that never offer the `format` command.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityFormatter;

impl CanonicalFormatter for IdentityFormatter {
    fn format(&self, text: &str) -> Result<String, FormatterError> {
        Ok(text.to_string())
    }
}
