//! Qualified name construction.
//!
//! A qualified name is the separator-joined list of a node's own name and
//! the names of all its structural ancestors, outermost first:
//!
//! ```text
//! Package(a) ← Package(b) ← Package(c)   renders   package a.b.c;
//! ```
//!
//! The parent chain is walked from the target upward, pushing each name on
//! a stack, and the stack is drained so the root comes out first.

use std::collections::HashSet;

use codeview_core::Text;
use codeview_model::Node;

use crate::{Error, MalformedReason, Result};

/// The fixed tokens wrapped around a qualified name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualifiedName<'a> {
    pub prefix: &'a str,
    pub separator: &'a str,
    pub suffix: &'a str,
}

impl<'a> QualifiedName<'a> {
    /// `package a.b.c;`
    pub const PACKAGE: QualifiedName<'static> = QualifiedName::new("package ", ".", ";");

    /// `import a.b.C;`
    pub const IMPORT: QualifiedName<'static> = QualifiedName::new("import ", ".", ";");

    /// `a.b.C` with no surrounding tokens.
    pub const DOTTED: QualifiedName<'static> = QualifiedName::new("", ".", "");

    /// `a/b/C`, for output paths.
    pub const PATH: QualifiedName<'static> = QualifiedName::new("", "/", "");

    pub const fn new(prefix: &'a str, separator: &'a str, suffix: &'a str) -> Self {
        Self {
            prefix,
            separator,
            suffix,
        }
    }

    /// Collect the name segments of `node`'s parent chain, outermost first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedTree`] when the chain revisits a node, is
    /// longer than `max_depth + 1` nodes, points at a missing parent, or
    /// contains a node with an empty or absent name. Empty segments are
    /// never collapsed.
    pub fn segments<'m>(node: Node<'m>, max_depth: usize) -> Result<Vec<&'m str>> {
        let target = node.id();
        let malformed = |reason| Error::malformed(target, reason);

        let mut stack = Vec::new();
        let mut visited = HashSet::new();
        let mut current = Some(node);

        while let Some(n) = current {
            if !visited.insert(n.id()) {
                return Err(malformed(MalformedReason::Cycle));
            }
            if stack.len() > max_depth {
                return Err(malformed(MalformedReason::TooDeep { limit: max_depth }));
            }

            let name = n
                .name()
                .ok_or_else(|| malformed(MalformedReason::Unnamed(n.kind())))?;
            if name.is_empty() {
                return Err(malformed(MalformedReason::EmptyName));
            }
            stack.push(name);

            current = match n.entry().parent {
                Some(parent) => Some(
                    n.model()
                        .node(parent)
                        .ok_or_else(|| malformed(MalformedReason::DanglingParent(parent)))?,
                ),
                None => None,
            };
        }

        let mut segments = Vec::with_capacity(stack.len());
        while let Some(segment) = stack.pop() {
            segments.push(segment);
        }
        Ok(segments)
    }

    /// The segments joined with the separator, without prefix or suffix.
    pub fn join(&self, node: Node<'_>, max_depth: usize) -> Result<String> {
        Ok(Self::segments(node, max_depth)?.join(self.separator))
    }

    /// The full qualified name: prefix, joined segments, suffix.
    pub fn render(&self, node: Node<'_>, max_depth: usize) -> Result<String> {
        let segments = Self::segments(node, max_depth)?;

        let mut text = Text::from(self.prefix);
        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                text.push(self.separator);
            }
            text.push(segment);
        }
        text.push(self.suffix);
        Ok(text.into_string())
    }
}
