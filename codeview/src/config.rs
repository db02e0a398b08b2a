//! Generator configuration.
//!
//! Configuration is read from TOML:
//!
//! ```toml
//! max_depth = 64
//! on_conflict = "replace"
//! indent = "tab"   # or a number of spaces
//! ```
//!
//! Every key is optional.

use std::{path::Path, str::FromStr};

use codeview_core::Indent;
use serde::{Deserialize, Deserializer};

use crate::{Error, Result};

/// What happens when a second view is registered for the same kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Fail with [`Error::RegistrationConflict`].
    #[default]
    Reject,
    /// The last registration wins.
    Replace,
}

/// Settings fixed at generator construction time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Maximum render recursion depth and parent-chain length.
    pub max_depth: usize,
    /// Duplicate registration behavior.
    pub on_conflict: ConflictPolicy,
    /// Indentation used by block-structured views.
    #[serde(deserialize_with = "deserialize_indent")]
    pub indent: Indent,
}

impl GeneratorConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 256;

    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        content.parse()
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn on_conflict(mut self, policy: ConflictPolicy) -> Self {
        self.on_conflict = policy;
        self
    }

    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            on_conflict: ConflictPolicy::default(),
            indent: Indent::default(),
        }
    }
}

impl FromStr for GeneratorConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|source| Error::Config { source })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IndentValue {
    Width(u8),
    Name(String),
}

fn deserialize_indent<'de, D>(deserializer: D) -> std::result::Result<Indent, D::Error>
where
    D: Deserializer<'de>,
{
    match IndentValue::deserialize(deserializer)? {
        IndentValue::Width(width) => Ok(Indent::Spaces(width)),
        IndentValue::Name(name) => Indent::parse(&name).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "invalid indent '{}', expected \"tab\" or a number of spaces",
                name
            ))
        }),
    }
}
