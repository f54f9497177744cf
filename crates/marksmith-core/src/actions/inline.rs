//! Inline actions: wrap the exact selection in markers.
//!
//! With a caret the markers are inserted empty and the caret lands between
//! them.

use crate::chunk::split_chunk;
use crate::error::EditorError;
use crate::text::utf16_len;
use crate::types::ActionResult;

/// Wrap the selection in `open`/`close`, keeping the same text selected.
fn wrap(
    text: &str,
    start: usize,
    end: usize,
    open: &str,
    close: &str,
) -> Result<ActionResult, EditorError> {
    let chunk = split_chunk(text, start, end)?;
    let shift = utf16_len(open);
    Ok(ActionResult::new(
        chunk.surround(open, close),
        start + shift,
        end + shift,
    ))
}

pub fn bold(
    _name: &str,
    text: &str,
    start: usize,
    end: usize,
) -> Result<ActionResult, EditorError> {
    wrap(text, start, end, "**", "**")
}

pub fn italic(
    _name: &str,
    text: &str,
    start: usize,
    end: usize,
) -> Result<ActionResult, EditorError> {
    wrap(text, start, end, "_", "_")
}

pub fn strikethrough(
    _name: &str,
    text: &str,
    start: usize,
    end: usize,
) -> Result<ActionResult, EditorError> {
    wrap(text, start, end, "~~", "~~")
}

pub fn inline_code(
    _name: &str,
    text: &str,
    start: usize,
    end: usize,
) -> Result<ActionResult, EditorError> {
    wrap(text, start, end, "`", "`")
}

/// `[selection]()` with the caret inside the parens, ready for the URL.
pub fn link(
    _name: &str,
    text: &str,
    start: usize,
    end: usize,
) -> Result<ActionResult, EditorError> {
    let chunk = split_chunk(text, start, end)?;
    // past "[" and "]("
    Ok(ActionResult::with_caret(chunk.surround("[", "]()"), end + 3))
}

/// `![selection]()` with the caret inside the parens.
pub fn image(
    _name: &str,
    text: &str,
    start: usize,
    end: usize,
) -> Result<ActionResult, EditorError> {
    let chunk = split_chunk(text, start, end)?;
    Ok(ActionResult::with_caret(chunk.surround("![", "]()"), end + 4))
}
