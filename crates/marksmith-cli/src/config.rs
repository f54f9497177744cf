//! KDL config file.
//!
//! ```kdl
//! format {
//!     tables true
//!     width 80
//!     max-input-len 1048576
//! }
//! menu {
//!     group "bold" "italic"
//!     group "format"
//! }
//! ```

use std::path::{Path, PathBuf};

use kdl::{KdlDocument, KdlNode, KdlValue};
use marksmith_core::{Menu, SmolStr};
use marksmith_format::FormatOptions;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config {}", path.display())]
    #[diagnostic(code(marksmith::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}", path.display())]
    #[diagnostic(code(marksmith::config::parse), help("config files are KDL documents"))]
    Parse {
        path: PathBuf,
        #[source]
        source: kdl::KdlError,
    },

    #[error("invalid value for `{key}` in {}: expected {expected}", path.display())]
    #[diagnostic(code(marksmith::config::value))]
    InvalidValue {
        path: PathBuf,
        key: String,
        expected: &'static str,
    },
}

/// Settings loaded from `config.kdl`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub format: FormatOptions,
    /// Custom toolbar layout. `None` means the default menu.
    pub menu: Option<Menu>,
}

impl Config {
    /// Load `path`, falling back to defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::parse(&source, path)
    }

    /// Parse config text. `path` is only used in error messages.
    pub fn parse(source: &str, path: &Path) -> Result<Self, ConfigError> {
        let doc: KdlDocument = source.parse().map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::default();
        if let Some(children) = doc.get("format").and_then(KdlNode::children) {
            for node in children.nodes() {
                apply_format_option(&mut config.format, node, path)?;
            }
        }
        if let Some(children) = doc.get("menu").and_then(KdlNode::children) {
            config.menu = Some(parse_menu(children, path)?);
        }
        Ok(config)
    }
}

const BOOL: &str = "a boolean";
const COUNT: &str = "a non-negative integer";

fn apply_format_option(
    options: &mut FormatOptions,
    node: &KdlNode,
    path: &Path,
) -> Result<(), ConfigError> {
    let key = node.name().value();
    let value = node.entries().first().map(|entry| entry.value());
    let invalid = |expected| ConfigError::InvalidValue {
        path: path.to_path_buf(),
        key: key.to_string(),
        expected,
    };

    match key {
        "tables" => options.tables = as_bool(value).ok_or_else(|| invalid(BOOL))?,
        "strikethrough" => options.strikethrough = as_bool(value).ok_or_else(|| invalid(BOOL))?,
        "tasklist" => options.tasklist = as_bool(value).ok_or_else(|| invalid(BOOL))?,
        "autolink" => options.autolink = as_bool(value).ok_or_else(|| invalid(BOOL))?,
        "width" => options.width = as_usize(value).ok_or_else(|| invalid(COUNT))?,
        "max-input-len" => options.max_input_len = as_usize(value).ok_or_else(|| invalid(COUNT))?,
        other => tracing::warn!(key = other, "ignoring unknown format option"),
    }
    Ok(())
}

fn as_bool(value: Option<&KdlValue>) -> Option<bool> {
    value.and_then(KdlValue::as_bool)
}

fn as_usize(value: Option<&KdlValue>) -> Option<usize> {
    value
        .and_then(KdlValue::as_i64)
        .and_then(|n| usize::try_from(n).ok())
}

fn parse_menu(children: &KdlDocument, path: &Path) -> Result<Menu, ConfigError> {
    let mut groups = Vec::new();
    for node in children.nodes() {
        if node.name().value() != "group" {
            tracing::warn!(node = node.name().value(), "ignoring unknown menu node");
            continue;
        }
        let group = node
            .entries()
            .iter()
            .map(|entry| {
                entry
                    .value()
                    .as_string()
                    .map(SmolStr::new)
                    .ok_or_else(|| ConfigError::InvalidValue {
                        path: path.to_path_buf(),
                        key: "group".to_string(),
                        expected: "action names as strings",
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        groups.push(group);
    }
    Ok(Menu::new(groups))
}
