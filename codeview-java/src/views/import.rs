use codeview::{Error, Generator, MalformedReason, Node, QualifiedName, Result, View};

use super::payload;

/// Renders an import of a class or interface node.
///
/// The imported type's qualified name comes from its parent chain, so a
/// class added under `com.example` imports as `import com.example.User;`.
/// Static imports append the member: `import static com.example.User.of;`.
pub struct ImportView;

impl View for ImportView {
    fn render(&self, generator: &Generator, node: Node<'_>) -> Result<String> {
        let import = payload!(node, Import);
        let target = node
            .model()
            .node(import.target)
            .ok_or(Error::UnknownNode {
                node: import.target,
            })?;

        match &import.member {
            None => generator.qualified_name(target, &QualifiedName::IMPORT),
            Some(member) if member.is_empty() => {
                Err(Error::malformed(node.id(), MalformedReason::EmptyName))
            }
            Some(member) => {
                let suffix = format!(".{};", member);
                let style = QualifiedName::new("import static ", ".", &suffix);
                generator.qualified_name(target, &style)
            }
        }
    }
}
