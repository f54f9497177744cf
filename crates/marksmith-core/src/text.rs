//! UTF-16 offset helpers.
//!
//! Selections arrive as UTF-16 code-unit offsets (what a browser textarea
//! reports), while Rust strings are indexed by UTF-8 bytes. Everything that
//! slices the buffer goes through these conversions.

/// Length of `text` in UTF-16 code units.
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Convert a UTF-16 offset into a byte index into `text`.
///
/// Returns `None` if the offset is past the end of the text or lands between
/// the two halves of a surrogate pair.
pub fn utf16_to_byte(text: &str, offset: usize) -> Option<usize> {
    let mut units = 0;
    for (byte, ch) in text.char_indices() {
        if units == offset {
            return Some(byte);
        }
        units += ch.len_utf16();
        if units > offset {
            return None;
        }
    }
    (units == offset).then_some(text.len())
}

/// Whether `offset` names a position in `text` (a char boundary, in bounds).
pub fn is_utf16_boundary(text: &str, offset: usize) -> bool {
    utf16_to_byte(text, offset).is_some()
}
