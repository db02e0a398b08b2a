use std::{fmt, path::PathBuf};

use codeview_model::{NodeId, NodeKind};
use miette::Diagnostic;
use thiserror::Error;

/// Result type for codeview operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a tree was rejected as malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// The parent chain returns to a node it already visited.
    Cycle,
    /// The parent chain or render recursion exceeds the configured depth.
    TooDeep { limit: usize },
    /// A node on a qualified-name chain has an empty name.
    EmptyName,
    /// A node on a qualified-name chain has a kind without a name.
    Unnamed(NodeKind),
    /// A parent reference points outside the model.
    DanglingParent(NodeId),
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::Cycle => write!(f, "parent chain contains a cycle"),
            MalformedReason::TooDeep { limit } => {
                write!(f, "nesting exceeds the maximum depth of {}", limit)
            }
            MalformedReason::EmptyName => write!(f, "empty name segment"),
            MalformedReason::Unnamed(kind) => write!(f, "`{}` nodes have no name", kind),
            MalformedReason::DanglingParent(parent) => {
                write!(f, "parent {} does not exist", parent)
            }
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("no view registered for node kind `{kind}` (node {node})")]
    #[diagnostic(
        code(codeview::unsupported_node_kind),
        help("register a view for `{kind}` before rendering")
    )]
    UnsupportedNodeKind { kind: NodeKind, node: NodeId },

    #[error("malformed tree at node {node}: {reason}")]
    #[diagnostic(code(codeview::malformed_tree))]
    MalformedTree {
        node: NodeId,
        reason: MalformedReason,
    },

    #[error("a view is already registered for node kind `{kind}`")]
    #[diagnostic(
        code(codeview::registration_conflict),
        help("set `on_conflict = \"replace\"` to let the last registration win")
    )]
    RegistrationConflict { kind: NodeKind },

    #[error("node {node} does not exist in the model")]
    #[diagnostic(code(codeview::unknown_node))]
    UnknownNode { node: NodeId },

    #[error("view for `{expected}` received a `{found}` node ({node})")]
    #[diagnostic(
        code(codeview::kind_mismatch),
        help("check that each view is registered under the kind it renders")
    )]
    KindMismatch {
        expected: NodeKind,
        found: NodeKind,
        node: NodeId,
    },

    #[error("nodes {first} and {second} both render to '{path}'")]
    #[diagnostic(
        code(codeview::duplicate_output_path),
        help("give each file node a distinct name or package")
    )]
    DuplicateOutputPath {
        path: String,
        first: NodeId,
        second: NodeId,
    },

    #[error("failed to parse generator config")]
    #[diagnostic(code(codeview::config))]
    Config {
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Shorthand for a [`Error::MalformedTree`].
    pub fn malformed(node: NodeId, reason: MalformedReason) -> Self {
        Error::MalformedTree { node, reason }
    }
}
