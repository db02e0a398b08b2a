//! Node kinds used as dispatch keys.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The kind of a model node.
///
/// Every [`NodeData`](crate::NodeData) variant maps to exactly one kind.
/// The render registry is keyed by this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Package,
    Import,
    Class,
    Interface,
    Field,
    Method,
    Type,
    Javadoc,
    Annotation,
}

impl NodeKind {
    /// All kinds, in declaration order.
    pub const ALL: [NodeKind; 10] = [
        NodeKind::File,
        NodeKind::Package,
        NodeKind::Import,
        NodeKind::Class,
        NodeKind::Interface,
        NodeKind::Field,
        NodeKind::Method,
        NodeKind::Type,
        NodeKind::Javadoc,
        NodeKind::Annotation,
    ];

    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::File => "file",
            NodeKind::Package => "package",
            NodeKind::Import => "import",
            NodeKind::Class => "class",
            NodeKind::Interface => "interface",
            NodeKind::Field => "field",
            NodeKind::Method => "method",
            NodeKind::Type => "type",
            NodeKind::Javadoc => "javadoc",
            NodeKind::Annotation => "annotation",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s.to_lowercase())
            .ok_or_else(|| format!("unknown node kind '{}'", s))
    }
}
