//! Built-in formatting actions.
//!
//! Inline actions (`inline`) wrap the exact selection; block actions
//! (`block`) operate on whole lines; `format` hands the document to the
//! injected `CanonicalFormatter`.

pub mod block;
pub mod format;
pub mod inline;

use std::sync::Arc;

use smol_str::SmolStr;

use crate::action::Action;
use crate::formatter::CanonicalFormatter;
use crate::registry::ActionMap;

pub use format::FormatDocument;

pub const BOLD: &str = "bold";
pub const ITALIC: &str = "italic";
pub const STRIKETHROUGH: &str = "strikethrough";
pub const INLINE_CODE: &str = "inlineCode";
pub const LINK: &str = "link";
pub const IMAGE: &str = "image";
pub const QUOTE: &str = "quote";
pub const TITLE: &str = "title";
pub const UNORDERED_LIST: &str = "unorderedList";
pub const ORDERED_LIST: &str = "orderedList";
pub const TASK_LIST: &str = "taskList";
pub const INDENT_INCREASE: &str = "indentIncrease";
pub const INDENT_DECREASE: &str = "indentDecrease";
pub const CODE: &str = "code";
pub const TABLE: &str = "table";
pub const FORMAT: &str = "format";

/// Every built-in action name.
pub const BUILTIN_NAMES: [&str; 16] = [
    BOLD,
    ITALIC,
    STRIKETHROUGH,
    INLINE_CODE,
    LINK,
    IMAGE,
    QUOTE,
    TITLE,
    UNORDERED_LIST,
    ORDERED_LIST,
    TASK_LIST,
    INDENT_INCREASE,
    INDENT_DECREASE,
    CODE,
    TABLE,
    FORMAT,
];

/// The built-in action map, with `format` backed by `formatter`.
pub fn default_actions(formatter: Arc<dyn CanonicalFormatter>) -> ActionMap {
    let entries: [(&str, Arc<dyn Action>); 16] = [
        (BOLD, Arc::new(inline::bold)),
        (ITALIC, Arc::new(inline::italic)),
        (STRIKETHROUGH, Arc::new(inline::strikethrough)),
        (INLINE_CODE, Arc::new(inline::inline_code)),
        (LINK, Arc::new(inline::link)),
        (IMAGE, Arc::new(inline::image)),
        (QUOTE, Arc::new(block::quote)),
        (TITLE, Arc::new(block::title)),
        (UNORDERED_LIST, Arc::new(block::unordered_list)),
        (ORDERED_LIST, Arc::new(block::ordered_list)),
        (TASK_LIST, Arc::new(block::task_list)),
        (INDENT_INCREASE, Arc::new(block::indent_increase)),
        (INDENT_DECREASE, Arc::new(block::indent_decrease)),
        (CODE, Arc::new(block::code)),
        (TABLE, Arc::new(block::table)),
        (FORMAT, Arc::new(FormatDocument::new(formatter))),
    ];
    entries
        .into_iter()
        .map(|(name, action)| (SmolStr::new_static(name), action))
        .collect()
}
