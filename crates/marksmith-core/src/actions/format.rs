//! Whole-document canonical formatting.

use std::fmt;
use std::sync::Arc;

use crate::action::Action;
use crate::error::EditorError;
use crate::formatter::CanonicalFormatter;
use crate::types::ActionResult;

/// Hands the whole buffer to the injected formatter and resets the caret to
/// the top of the document.
///
/// A formatter error is returned as `FormatterFailure`; nothing is
/// produced for the caller to write back.
#[derive(Clone)]
pub struct FormatDocument {
    formatter: Arc<dyn CanonicalFormatter>,
}

impl FormatDocument {
    pub fn new(formatter: Arc<dyn CanonicalFormatter>) -> Self {
        Self { formatter }
    }
}

impl fmt::Debug for FormatDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatDocument").finish_non_exhaustive()
    }
}

impl Action for FormatDocument {
    fn apply(
        &self,
        name: &str,
        text: &str,
        _start: usize,
        _end: usize,
    ) -> Result<ActionResult, EditorError> {
        match self.formatter.format(text) {
            Ok(formatted) => Ok(ActionResult::with_caret(formatted, 0)),
            Err(err) => {
                tracing::warn!(
                    target: "marksmith::engine",
                    action = name,
                    error = %err,
                    "formatter failed"
                );
                Err(err.into())
            }
        }
    }
}
