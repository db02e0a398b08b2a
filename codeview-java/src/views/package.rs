use codeview::{Generator, Node, NodeKind, QualifiedName, Result, View, view::ensure_kind};

/// Renders a package declaration, `package com.example;`.
///
/// The full path is built from the package's chain of enclosing packages.
pub struct PackageView;

impl View for PackageView {
    fn render(&self, generator: &Generator, node: Node<'_>) -> Result<String> {
        ensure_kind(node, NodeKind::Package)?;
        generator.qualified_name(node, &QualifiedName::PACKAGE)
    }
}
