// Integration tests for the CommonMark formatter
//
// Exact output is comrak's business, so these only check that content
// survives and that the result plugs into the action engine.

use std::sync::Arc;

use marksmith_core::text::utf16_len;
use marksmith_core::{ActionRegistry, ActionResult, CanonicalFormatter, EditorError, FormatterError};
use marksmith_format::{CommonMarkFormatter, FormatOptions};

const DOC: &str = concat!(
    "#   Title   \n\n\n\n",
    "Some __strong__ words.\n\n",
    "* one\n* two\n\n",
    "| a | b |\n|---|---|\n| 1 | 2 |\n",
);

#[test]
fn test_content_survives() {
    let formatted = CommonMarkFormatter::default().format(DOC).unwrap();
    assert!(formatted.contains("# Title"));
    assert!(formatted.contains("strong"));
    assert!(formatted.contains("one"));
    assert!(formatted.contains("two"));
    assert!(!formatted.contains("\n\n\n"));
}

#[test]
fn test_idempotent() {
    let formatter = CommonMarkFormatter::default();
    let once = formatter.format("Some __strong__ words.\n\n\n* one\n* two\n").unwrap();
    let twice = formatter.format(&once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_format_action_resets_caret() {
    let registry = ActionRegistry::with_defaults(Arc::new(CommonMarkFormatter::default()));
    let result = registry.apply("format", DOC, 5, utf16_len(DOC)).unwrap();
    let expected = CommonMarkFormatter::default().format(DOC).unwrap();
    assert_eq!(result, ActionResult::with_caret(expected, 0));
}

#[test]
fn test_oversized_document_fails_action() {
    let formatter = CommonMarkFormatter::new(FormatOptions {
        max_input_len: 8,
        ..Default::default()
    });
    let registry = ActionRegistry::with_defaults(Arc::new(formatter));
    let err = registry.apply("format", DOC, 0, 0).unwrap_err();
    assert!(matches!(
        err,
        EditorError::FormatterFailure(FormatterError::InputTooLarge { limit: 8, .. })
    ));
}
