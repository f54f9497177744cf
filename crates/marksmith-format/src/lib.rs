//! marksmith-format: CommonMark canonical formatter.
//!
//! Implements `marksmith_core::CanonicalFormatter` by parsing the document
//! with comrak and rendering it back out as CommonMark. Which GFM extensions
//! are recognised, and the wrap width, come from [`FormatOptions`].

use marksmith_core::{CanonicalFormatter, FormatterError};
use serde::{Deserialize, Serialize};

/// Default upper bound on document size, in bytes.
pub const DEFAULT_MAX_INPUT_LEN: usize = 1024 * 1024;

/// Formatter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FormatOptions {
    /// Recognise GFM tables.
    pub tables: bool,
    /// Recognise `~~strikethrough~~`.
    pub strikethrough: bool,
    /// Recognise `- [ ]` task list items.
    pub tasklist: bool,
    /// Turn bare URLs into links.
    pub autolink: bool,
    /// Wrap paragraphs at this column. 0 disables wrapping.
    pub width: usize,
    /// Refuse documents larger than this many bytes.
    pub max_input_len: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            tasklist: true,
            autolink: false,
            width: 0,
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }
}

/// Round-trips markdown through comrak's CommonMark renderer.
#[derive(Debug, Clone, Default)]
pub struct CommonMarkFormatter {
    options: FormatOptions,
}

impl CommonMarkFormatter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }
}

impl CanonicalFormatter for CommonMarkFormatter {
    fn format(&self, text: &str) -> Result<String, FormatterError> {
        let limit = self.options.max_input_len;
        if text.len() > limit {
            tracing::warn!(
                target: "marksmith::format",
                len = text.len(),
                limit,
                "document too large to format"
            );
            return Err(FormatterError::InputTooLarge {
                len: text.len(),
                limit,
            });
        }

        let mut options = comrak::Options::default();
        options.extension.table = self.options.tables;
        options.extension.strikethrough = self.options.strikethrough;
        options.extension.tasklist = self.options.tasklist;
        options.extension.autolink = self.options.autolink;
        options.render.width = self.options.width;

        let formatted = comrak::markdown_to_commonmark(text, &options);
        tracing::debug!(
            target: "marksmith::format",
            before = text.len(),
            after = formatted.len(),
            "formatted document"
        );
        Ok(formatted)
    }
}
