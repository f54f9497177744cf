//! Block actions: rewrite every line the selection touches.
//!
//! Each action runs through `split_lines`, so a selection that starts or
//! ends mid-line acts on the whole line, and a caret acts on its own line.

use std::iter;

use crate::error::EditorError;
use crate::lines::split_lines;
use crate::text::utf16_len;
use crate::types::ActionResult;

const INDENT: &str = "  ";
const FENCE: &str = "```";
const TABLE_TEMPLATE: [&str; 3] = [
    "| Column1 | Column2 |",
    "| -------------- | -------------- |",
    "| value 1    | value2     |",
];

/// Prefix every selected line with `marker`.
///
/// The selection start moves past one marker, the end past one marker per
/// line.
fn prefix_lines(
    text: &str,
    start: usize,
    end: usize,
    marker: &str,
) -> Result<ActionResult, EditorError> {
    let lines = split_lines(text, start, end)?;
    let width = utf16_len(marker);
    let content = lines.join_with(lines.selected.iter().map(|line| format!("{marker}{line}")));
    Ok(ActionResult::new(
        content,
        start + width,
        end + width * lines.line_count(),
    ))
}

pub fn quote(
    _name: &str,
    text: &str,
    start: usize,
    end: usize,
) -> Result<ActionResult, EditorError> {
    prefix_lines(text, start, end, "> ")
}

pub fn unordered_list(
    _name: &str,
    text: &str,
    start: usize,
    end: usize,
) -> Result<ActionResult, EditorError> {
    prefix_lines(text, start, end, "- ")
}

pub fn task_list(
    _name: &str,
    text: &str,
    start: usize,
    end: usize,
) -> Result<ActionResult, EditorError> {
    prefix_lines(text, start, end, "- [ ] ")
}

pub fn indent_increase(
    _name: &str,
    text: &str,
    start: usize,
    end: usize,
) -> Result<ActionResult, EditorError> {
    prefix_lines(text, start, end, INDENT)
}

/// Number each selected line from 1.
///
/// Numbering ignores any list markers already in the text, and the
/// selection shift assumes single-digit markers (`"1. "`).
pub fn ordered_list(
    _name: &str,
    text: &str,
    start: usize,
    end: usize,
) -> Result<ActionResult, EditorError> {
    let lines = split_lines(text, start, end)?;
    let numbered = lines.selected.iter().enumerate().map(|(index, line)| {
        let mut item = (index + 1).to_string();
        item.push_str(". ");
        item.push_str(line);
        item
    });
    let content = lines.join_with(numbered);
    Ok(ActionResult::new(
        content,
        start + 3,
        end + 3 * lines.line_count(),
    ))
}

/// Turn the first selected line into a heading, or deepen an existing one.
pub fn title(
    _name: &str,
    text: &str,
    start: usize,
    end: usize,
) -> Result<ActionResult, EditorError> {
    let mut lines = split_lines(text, start, end)?;
    let shift = match lines.selected.first_mut() {
        Some(first) if first.starts_with('#') => {
            first.insert(0, '#');
            1
        }
        Some(first) => {
            first.insert_str(0, "# ");
            2
        }
        None => 0,
    };
    Ok(ActionResult::new(lines.join(), start + shift, end + shift))
}

/// Remove two leading spaces from each selected line that has them.
///
/// Lines with a tab or a single leading space are left alone. Each offset
/// of the selection is pulled back by the indentation removed before it,
/// so an offset inside a removed indent lands at its line start.
pub fn indent_decrease(
    _name: &str,
    text: &str,
    start: usize,
    end: usize,
) -> Result<ActionResult, EditorError> {
    let mut lines = split_lines(text, start, end)?;

    // UTF-16 offsets (in the original text) where an indent was removed.
    let mut removed = Vec::new();
    let mut line_start = lines.first_line_start;
    for line in &mut lines.selected {
        let width = utf16_len(line);
        if line.starts_with(INDENT) {
            line.replace_range(..INDENT.len(), "");
            removed.push(line_start);
        }
        line_start += width + 1;
    }

    let map = |offset: usize| {
        let pulled: usize = removed
            .iter()
            .map(|&at| offset.saturating_sub(at).min(INDENT.len()))
            .sum();
        offset - pulled
    };

    Ok(ActionResult::new(lines.join(), map(start), map(end)))
}

/// Fence the selected lines as a code block, indenting each by two spaces.
pub fn code(
    _name: &str,
    text: &str,
    start: usize,
    end: usize,
) -> Result<ActionResult, EditorError> {
    let lines = split_lines(text, start, end)?;
    let body = lines.selected.iter().map(|line| format!("{INDENT}{line}"));
    let fenced = iter::once(FENCE.to_string())
        .chain(body)
        .chain(iter::once(FENCE.to_string()));
    let content = lines.join_with(fenced);
    // opening fence + newline + indent
    Ok(ActionResult::new(
        content,
        start + 6,
        end + 2 * lines.line_count() + 4,
    ))
}

/// Insert a two-column table template after the first selected line.
pub fn table(
    _name: &str,
    text: &str,
    start: usize,
    end: usize,
) -> Result<ActionResult, EditorError> {
    let lines = split_lines(text, start, end)?;
    let mut rest = lines.selected.iter().map(String::as_str);
    let first = rest.next();
    let rows = first.into_iter().chain(TABLE_TEMPLATE).chain(rest);
    Ok(ActionResult::with_caret(lines.join_with(rows), start))
}
