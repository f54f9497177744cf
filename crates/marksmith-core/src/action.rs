//! The `Action` trait.
//!
//! An action is a named, stateless transform from a buffer and selection to
//! a new buffer and selection. Plain functions and closures with the
//! matching signature are actions, so overrides can be supplied inline.

use crate::error::EditorError;
use crate::types::ActionResult;

/// A pure transform of `(text, start..end)`.
///
/// `name` is the name the action was invoked under, which lets one
/// implementation serve several registry entries. Offsets are UTF-16 code
/// units and have already been validated when called through `apply`.
pub trait Action: Send + Sync {
    fn apply(
        &self,
        name: &str,
        text: &str,
        start: usize,
        end: usize,
    ) -> Result<ActionResult, EditorError>;
}

impl<F> Action for F
where
    F: Fn(&str, &str, usize, usize) -> Result<ActionResult, EditorError> + Send + Sync,
{
    fn apply(
        &self,
        name: &str,
        text: &str,
        start: usize,
        end: usize,
    ) -> Result<ActionResult, EditorError> {
        self(name, text, start, end)
    }
}
