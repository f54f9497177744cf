//! Selection and action result types.

use serde::{Deserialize, Serialize};

use crate::error::EditorError;
use crate::text::{is_utf16_boundary, utf16_len};

/// A selection in the buffer, in UTF-16 code units.
///
/// `start == end` is a caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

impl SelectionRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check `start <= end <= len(text)` and that both offsets sit on
    /// character boundaries.
    pub fn validate(self, text: &str) -> Result<Self, EditorError> {
        if self.start > self.end
            || self.end > utf16_len(text)
            || !is_utf16_boundary(text, self.start)
            || !is_utf16_boundary(text, self.end)
        {
            return Err(EditorError::invalid_selection(text, self.start, self.end));
        }
        Ok(self)
    }
}

impl From<std::ops::Range<usize>> for SelectionRange {
    fn from(r: std::ops::Range<usize>) -> Self {
        Self::new(r.start, r.end)
    }
}

impl From<SelectionRange> for std::ops::Range<usize> {
    fn from(r: SelectionRange) -> Self {
        r.start..r.end
    }
}

/// New buffer contents and selection produced by an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResult {
    pub content: String,
    pub selection_start: usize,
    pub selection_end: usize,
}

impl ActionResult {
    pub fn new(content: impl Into<String>, selection_start: usize, selection_end: usize) -> Self {
        Self {
            content: content.into(),
            selection_start,
            selection_end,
        }
    }

    /// Result with the caret collapsed at `offset`.
    pub fn with_caret(content: impl Into<String>, offset: usize) -> Self {
        Self::new(content, offset, offset)
    }

    pub fn selection(&self) -> SelectionRange {
        SelectionRange::new(self.selection_start, self.selection_end)
    }

    /// Whether the selection lies within the content, in order.
    pub fn is_consistent(&self) -> bool {
        self.selection().validate(&self.content).is_ok()
    }
}
