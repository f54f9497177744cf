//! Action dispatch.
//!
//! `apply` is the single entry point a host calls when a formatting command
//! fires. It validates the selection, resolves the action by name and runs
//! it. The result is returned exactly as the action produced it.

use crate::error::EditorError;
use crate::registry::ActionRegistry;
use crate::types::{ActionResult, SelectionRange};

/// Apply the action registered under `name` to `text` with the UTF-16
/// selection `start..end`.
///
/// Fails with `InvalidSelection` before any lookup if the selection does not
/// fit the text, with `UnknownAction` if nothing is registered under `name`,
/// and with `FormatterFailure` if the formatter behind `format` fails. On
/// error the caller should keep its buffer and selection as they were.
pub fn apply(
    registry: &ActionRegistry,
    name: &str,
    text: &str,
    start: usize,
    end: usize,
) -> Result<ActionResult, EditorError> {
    let selection = SelectionRange::new(start, end).validate(text)?;
    let action = registry
        .get(name)
        .ok_or_else(|| EditorError::UnknownAction(name.into()))?;

    tracing::debug!(
        target: "marksmith::engine",
        action = name,
        start = selection.start,
        end = selection.end,
        len = text.len(),
        "applying action"
    );

    action.apply(name, text, selection.start, selection.end)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::formatter::{FormatterError, IdentityFormatter};

    fn registry() -> ActionRegistry {
        ActionRegistry::with_defaults(Arc::new(IdentityFormatter))
    }

    #[test]
    fn test_apply_bold() {
        let result = apply(&registry(), "bold", "hello", 0, 5).unwrap();
        assert_eq!(result, ActionResult::new("**hello**", 2, 7));
    }

    #[test]
    fn test_unknown_action() {
        let err = apply(&registry(), "doesNotExist", "x", 0, 1).unwrap_err();
        assert_eq!(err, EditorError::UnknownAction("doesNotExist".into()));
    }

    #[test]
    fn test_reversed_selection() {
        let err = apply(&registry(), "bold", "x", 2, 1).unwrap_err();
        assert!(matches!(err, EditorError::InvalidSelection { start: 2, end: 1, len: 1 }));
    }

    #[test]
    fn test_selection_checked_before_lookup() {
        let err = apply(&registry(), "doesNotExist", "x", 0, 9).unwrap_err();
        assert!(matches!(err, EditorError::InvalidSelection { .. }));
    }

    #[test]
    fn test_formatter_failure_is_signalled() {
        let failing = |_: &str| -> Result<String, FormatterError> { Err("parse error".into()) };
        let registry = ActionRegistry::with_defaults(Arc::new(failing));
        let text = "# keep me";
        let err = apply(&registry, "format", text, 2, 4).unwrap_err();
        assert!(matches!(err, EditorError::FormatterFailure(FormatterError::Failed(_))));
        assert_eq!(text, "# keep me");
    }
}
