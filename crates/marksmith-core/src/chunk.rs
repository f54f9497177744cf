//! Three-way split of a buffer around a selection.

use crate::error::EditorError;
use crate::text::utf16_to_byte;

/// A buffer split at a selection: everything before, the selection itself,
/// and everything after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub prefix: &'a str,
    pub selected: &'a str,
    pub suffix: &'a str,
}

impl<'a> Chunk<'a> {
    /// Rebuild the buffer with `open` and `close` around the selection.
    pub fn surround(&self, open: &str, close: &str) -> String {
        let mut out = String::with_capacity(
            self.prefix.len() + open.len() + self.selected.len() + close.len() + self.suffix.len(),
        );
        out.push_str(self.prefix);
        out.push_str(open);
        out.push_str(self.selected);
        out.push_str(close);
        out.push_str(self.suffix);
        out
    }
}

/// Split `text` at the UTF-16 offsets `start` and `end`.
///
/// Fails with `InvalidSelection` if `start > end` or either offset is not a
/// position in the text.
pub fn split_chunk(text: &str, start: usize, end: usize) -> Result<Chunk<'_>, EditorError> {
    let (Some(start_byte), Some(end_byte)) = (utf16_to_byte(text, start), utf16_to_byte(text, end))
    else {
        return Err(EditorError::invalid_selection(text, start, end));
    };
    if start_byte > end_byte {
        return Err(EditorError::invalid_selection(text, start, end));
    }

    Ok(Chunk {
        prefix: &text[..start_byte],
        selected: &text[start_byte..end_byte],
        suffix: &text[end_byte..],
    })
}
