// Integration tests for the action engine
//
// These drive every built-in action through `apply` over a small corpus of
// documents and selections, checking the properties every host relies on:
// results stay in bounds, block actions keep the line structure, and failures
// never produce a result.

use std::sync::Arc;
use std::thread;

use marksmith_core::actions::BUILTIN_NAMES;
use marksmith_core::text::utf16_len;
use marksmith_core::{
    ActionRegistry, ActionResult, EditorError, FormatterError, IdentityFormatter, apply,
};

const CORPUS: &[&str] = &[
    "",
    "hello",
    "a\nb",
    "first line\n  indented\n\nlast",
    "# Heading\n\nSome *text* here.\n- item\n- item two\n",
    "caf\u{e9} \u{1F600} emoji\nsecond",
    "\n\n\n",
];

fn registry() -> ActionRegistry {
    ActionRegistry::with_defaults(Arc::new(IdentityFormatter))
}

/// Every valid selection in `text`: all ordered pairs of char boundaries.
fn selections(text: &str) -> Vec<(usize, usize)> {
    let mut offsets = vec![0];
    let mut at = 0;
    for ch in text.chars() {
        at += ch.len_utf16();
        offsets.push(at);
    }
    offsets
        .iter()
        .enumerate()
        .flat_map(|(i, &start)| offsets[i..].iter().map(move |&end| (start, end)))
        .collect()
}

#[test]
fn test_selection_stays_in_bounds_for_every_action() {
    let registry = registry();
    for text in CORPUS {
        for (start, end) in selections(text) {
            for name in BUILTIN_NAMES {
                let result = apply(&registry, name, text, start, end)
                    .unwrap_or_else(|err| panic!("{name} on {text:?} {start}..{end}: {err}"));
                assert!(
                    result.is_consistent(),
                    "{name} on {text:?} {start}..{end} gave {result:?}"
                );
            }
        }
    }
}

#[test]
fn test_prefix_actions_keep_line_count() {
    let registry = registry();
    let prefixing = [
        "quote",
        "unorderedList",
        "orderedList",
        "taskList",
        "indentIncrease",
        "indentDecrease",
        "title",
    ];
    for text in CORPUS {
        let lines = text.split('\n').count();
        for (start, end) in selections(text) {
            for name in prefixing {
                let result = apply(&registry, name, text, start, end).unwrap();
                assert_eq!(
                    result.content.split('\n').count(),
                    lines,
                    "{name} changed line count of {text:?}"
                );
            }
        }
    }
}

#[test]
fn test_code_and_table_add_fixed_lines() {
    let registry = registry();
    for text in CORPUS {
        let lines = text.split('\n').count();
        for (start, end) in selections(text) {
            let fenced = apply(&registry, "code", text, start, end).unwrap();
            assert_eq!(fenced.content.split('\n').count(), lines + 2);
            let table = apply(&registry, "table", text, start, end).unwrap();
            assert_eq!(table.content.split('\n').count(), lines + 3);
        }
    }
}

#[test]
fn test_indent_round_trip() {
    let registry = registry();
    for text in CORPUS {
        for (start, end) in selections(text) {
            let indented = apply(&registry, "indentIncrease", text, start, end).unwrap();
            let back = apply(
                &registry,
                "indentDecrease",
                &indented.content,
                indented.selection_start,
                indented.selection_end,
            )
            .unwrap();
            assert_eq!(back.content, *text, "round trip {start}..{end} of {text:?}");
        }
    }
}

#[test]
fn test_ordered_list_numbers_from_one() {
    let text = (0..12).map(|i| format!("item {i}")).collect::<Vec<_>>().join("\n");
    let len = utf16_len(&text);
    let result = apply(&registry(), "orderedList", &text, 0, len).unwrap();
    for (index, line) in result.content.lines().enumerate() {
        assert!(
            line.starts_with(&format!("{}. item {index}", index + 1)),
            "line {index}: {line:?}"
        );
    }
    assert!(result.is_consistent());
}

#[test]
fn test_bold_selection() {
    let result = apply(&registry(), "bold", "hello", 0, 5).unwrap();
    assert_eq!(result, ActionResult::new("**hello**", 2, 7));
}

#[test]
fn test_link_caret_between_parens() {
    let result = apply(&registry(), "link", "text", 0, 4).unwrap();
    assert_eq!(result, ActionResult::new("[text]()", 7, 7));
}

#[test]
fn test_unordered_list_two_lines() {
    let result = apply(&registry(), "unorderedList", "a\nb", 0, 3).unwrap();
    assert_eq!(result, ActionResult::new("- a\n- b", 2, 7));
}

#[test]
fn test_unknown_action_fails() {
    let err = apply(&registry(), "doesNotExist", "x", 0, 1).unwrap_err();
    assert_eq!(err, EditorError::UnknownAction("doesNotExist".into()));
}

#[test]
fn test_reversed_selection_fails() {
    let err = apply(&registry(), "bold", "x", 2, 1).unwrap_err();
    assert!(matches!(err, EditorError::InvalidSelection { .. }));
}

#[test]
fn test_failing_formatter_produces_no_result() {
    let registry = ActionRegistry::with_defaults(Arc::new(
        |_: &str| -> Result<String, FormatterError> { Err("cannot parse".into()) },
    ));
    let text = String::from("# Title\n\nbody");
    let outcome = apply(&registry, "format", &text, 3, 5);
    assert!(matches!(outcome, Err(EditorError::FormatterFailure(_))));
    assert_eq!(text, "# Title\n\nbody");
}

#[test]
fn test_surrogate_pair_offsets_are_rejected() {
    // the emoji spans units 1..3
    let err = apply(&registry(), "bold", "a\u{1F600}b", 0, 2).unwrap_err();
    assert!(matches!(err, EditorError::InvalidSelection { .. }));
    let ok = apply(&registry(), "bold", "a\u{1F600}b", 1, 3).unwrap();
    assert_eq!(ok, ActionResult::new("a**\u{1F600}**b", 3, 5));
}

#[test]
fn test_concurrent_apply_shares_registry() {
    let registry = Arc::new(registry());
    let handles: Vec<_> = BUILTIN_NAMES
        .iter()
        .map(|&name| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                (0..50)
                    .map(|_| registry.apply(name, "line one\nline two", 2, 12))
                    .collect::<Result<Vec<_>, _>>()
            })
        })
        .collect();

    for (handle, name) in handles.into_iter().zip(BUILTIN_NAMES) {
        let results = handle.join().unwrap().unwrap();
        let expected = registry.apply(name, "line one\nline two", 2, 12).unwrap();
        assert!(results.iter().all(|r| *r == expected), "{name} not deterministic");
    }
}
