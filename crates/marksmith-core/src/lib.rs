//! marksmith-core: selection-aware markdown formatting commands.
//!
//! This crate provides:
//! - `split_chunk` / `split_lines` for carving a buffer around a selection
//! - `Action` trait and the built-in formatting actions
//! - `ActionRegistry` - immutable name -> action map with caller overrides
//! - `apply` - validated dispatch of a named action
//! - `CanonicalFormatter` - injected whole-document formatter capability
//!
//! All offsets are UTF-16 code units, matching text-input selection APIs.

pub mod action;
pub mod actions;
pub mod chunk;
pub mod engine;
pub mod error;
pub mod formatter;
pub mod lines;
pub mod menu;
pub mod registry;
pub mod text;
pub mod types;

pub use action::Action;
pub use actions::{FormatDocument, default_actions};
pub use chunk::{Chunk, split_chunk};
pub use engine::apply;
pub use error::EditorError;
pub use formatter::{CanonicalFormatter, FormatterError, IdentityFormatter};
pub use lines::{SelectedLines, split_lines};
pub use menu::{Menu, default_menu, default_title};
pub use registry::{ActionMap, ActionRegistry, ActionRegistryBuilder, build_registry};
pub use smol_str::SmolStr;
pub use types::{ActionResult, SelectionRange};
