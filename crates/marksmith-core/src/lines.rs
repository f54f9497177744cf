//! Line-granular split of a buffer around a selection.
//!
//! Block actions (quotes, lists, fences, indentation) work on whole lines.
//! `split_lines` widens the selection so the partially selected lines at
//! either edge are folded into `selected`, leaving `prefix` and `suffix`
//! with only lines the selection does not touch.

use crate::chunk::split_chunk;
use crate::error::EditorError;
use crate::text::utf16_len;

/// A buffer split into untouched leading lines, selected lines and
/// untouched trailing lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedLines<'a> {
    /// Lines fully before the selection.
    pub prefix: Vec<&'a str>,
    /// Lines the selection touches, extended to full lines. Never empty.
    pub selected: Vec<String>,
    /// Lines fully after the selection.
    pub suffix: Vec<&'a str>,
    /// UTF-16 offset of the first selected line.
    pub first_line_start: usize,
}

impl<'a> SelectedLines<'a> {
    /// Number of selected lines.
    pub fn line_count(&self) -> usize {
        self.selected.len()
    }

    /// Rebuild the document with `lines` standing in for the selected lines.
    pub fn join_with<I, S>(&self, lines: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<S> = lines.into_iter().collect();
        self.prefix
            .iter()
            .copied()
            .chain(lines.iter().map(|line| line.as_ref()))
            .chain(self.suffix.iter().copied())
            .collect::<Vec<&str>>()
            .join("\n")
    }

    /// Rebuild the document from the (possibly edited) selected lines.
    pub fn join(&self) -> String {
        self.join_with(&self.selected)
    }
}

/// Split `text` into lines around the UTF-16 selection `start..end`.
pub fn split_lines(text: &str, start: usize, end: usize) -> Result<SelectedLines<'_>, EditorError> {
    let chunk = split_chunk(text, start, end)?;

    // Partial line before the selection start.
    let (prefix, head): (Vec<&str>, &str) = match chunk.prefix.rsplit_once('\n') {
        Some((before, head)) => (before.split('\n').collect(), head),
        None => (Vec::new(), chunk.prefix),
    };

    // Partial line after the selection end.
    let (tail, suffix): (&str, Vec<&str>) = match chunk.suffix.split_once('\n') {
        Some((tail, after)) => (tail, after.split('\n').collect()),
        None => (chunk.suffix, Vec::new()),
    };

    let mut selected: Vec<String> = chunk.selected.split('\n').map(str::to_owned).collect();
    if let Some(first) = selected.first_mut() {
        first.insert_str(0, head);
    }
    if let Some(last) = selected.last_mut() {
        last.push_str(tail);
    }

    tracing::trace!(
        target: "marksmith::lines",
        prefix = prefix.len(),
        selected = selected.len(),
        suffix = suffix.len(),
        "split lines"
    );

    Ok(SelectedLines {
        prefix,
        selected,
        suffix,
        first_line_start: start - utf16_len(head),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extends_to_line_edges() {
        let text = "one\ntwo three\nfour\nfive";
        // select "three\nfo"
        let lines = split_lines(text, 8, 16).unwrap();
        assert_eq!(lines.prefix, vec!["one"]);
        assert_eq!(lines.selected, vec!["two three", "four"]);
        assert_eq!(lines.suffix, vec!["five"]);
        assert_eq!(lines.first_line_start, 4);
    }

    #[test]
    fn test_caret_selects_its_line() {
        let lines = split_lines("a\nbc\nd", 3, 3).unwrap();
        assert_eq!(lines.prefix, vec!["a"]);
        assert_eq!(lines.selected, vec!["bc"]);
        assert_eq!(lines.suffix, vec!["d"]);
        assert_eq!(lines.first_line_start, 2);
    }

    #[test]
    fn test_empty_text() {
        let lines = split_lines("", 0, 0).unwrap();
        assert!(lines.prefix.is_empty());
        assert_eq!(lines.selected, vec![""]);
        assert!(lines.suffix.is_empty());
        assert_eq!(lines.join(), "");
    }

    #[test]
    fn test_caret_at_line_start_after_newline() {
        let lines = split_lines("a\n", 2, 2).unwrap();
        assert_eq!(lines.prefix, vec!["a"]);
        assert_eq!(lines.selected, vec![""]);
        assert!(lines.suffix.is_empty());
    }

    #[test]
    fn test_selection_ending_on_newline() {
        // "a\n" selected: the line after the newline is pulled in.
        let lines = split_lines("a\nb", 0, 2).unwrap();
        assert!(lines.prefix.is_empty());
        assert_eq!(lines.selected, vec!["a", "b"]);
        assert!(lines.suffix.is_empty());
    }

    #[test]
    fn test_round_trip() {
        let docs = ["", "x", "a\nb", "\n\n", "one\ntwo\n\nthree\n", "🌍\nλ\n"];
        for doc in docs {
            let len = utf16_len(doc);
            for start in 0..=len {
                for end in start..=len {
                    let Ok(lines) = split_lines(doc, start, end) else {
                        continue;
                    };
                    assert_eq!(lines.join(), doc, "round trip {start}..{end} of {doc:?}");
                }
            }
        }
    }

    #[test]
    fn test_join_with_replacement() {
        let lines = split_lines("a\nb\nc", 2, 3).unwrap();
        assert_eq!(lines.join_with(["x", "y"]), "a\nx\ny\nc");
    }
}
