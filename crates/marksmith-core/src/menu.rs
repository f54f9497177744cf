//! Toolbar model: which commands a host offers, in which groups.
//!
//! This is a presentation-free description. Hosts render it however they
//! like; the only contract is that every item names a registered action.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::actions::{
    BOLD, CODE, FORMAT, IMAGE, INDENT_DECREASE, INDENT_INCREASE, INLINE_CODE, ITALIC, LINK,
    ORDERED_LIST, QUOTE, STRIKETHROUGH, TABLE, TASK_LIST, TITLE, UNORDERED_LIST,
};
use crate::error::EditorError;
use crate::registry::ActionRegistry;

/// Grouped list of command names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    groups: Vec<Vec<SmolStr>>,
}

impl Menu {
    pub fn new(groups: Vec<Vec<SmolStr>>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[Vec<SmolStr>] {
        &self.groups
    }

    /// All command names, group by group.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().flatten().map(SmolStr::as_str)
    }

    /// Check that every item resolves in `registry`.
    ///
    /// Returns `UnknownAction` for the first item that does not.
    pub fn validate(&self, registry: &ActionRegistry) -> Result<(), EditorError> {
        match self.items().find(|name| !registry.contains(name)) {
            Some(missing) => Err(EditorError::UnknownAction(missing.into())),
            None => Ok(()),
        }
    }
}

impl Default for Menu {
    fn default() -> Self {
        default_menu()
    }
}

/// The stock toolbar layout.
pub fn default_menu() -> Menu {
    let groups: [&[&'static str]; 8] = [
        &[BOLD, ITALIC, STRIKETHROUGH],
        &[TITLE, QUOTE],
        &[LINK, IMAGE],
        &[CODE, INLINE_CODE],
        &[UNORDERED_LIST, ORDERED_LIST, TASK_LIST],
        &[INDENT_INCREASE, INDENT_DECREASE],
        &[TABLE],
        &[FORMAT],
    ];
    Menu::new(
        groups
            .iter()
            .map(|group| group.iter().copied().map(SmolStr::new_static).collect())
            .collect(),
    )
}

/// Human-readable label for a built-in command.
pub fn default_title(name: &str) -> Option<&'static str> {
    let title = match name {
        BOLD => "Bold",
        ITALIC => "Italic",
        STRIKETHROUGH => "Strikethrough",
        TITLE => "Title",
        QUOTE => "Quote",
        LINK => "Link",
        IMAGE => "Image",
        CODE => "Code",
        INLINE_CODE => "Inline Code",
        UNORDERED_LIST => "Unordered List",
        ORDERED_LIST => "Ordered List",
        TASK_LIST => "Task List",
        INDENT_INCREASE => "Increase Indent",
        INDENT_DECREASE => "Decrease Indent",
        TABLE => "Table",
        FORMAT => "Format",
        _ => return None,
    };
    Some(title)
}
