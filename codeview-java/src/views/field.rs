use codeview::{Generator, Node, Result, Text, View};

use super::{modifier_prefix, payload};

/// Renders a field declaration without its terminator.
///
/// `private final String name = "x"`. The same view renders method
/// parameters, so the enclosing class view appends the `;`.
pub struct FieldView;

impl View for FieldView {
    fn render(&self, generator: &Generator, node: Node<'_>) -> Result<String> {
        let field = payload!(node, Field);

        let mut text = Text::new();
        if let Some(javadoc) = field.javadoc {
            text.push(generator.render_child(node, javadoc)?).push("\n");
        }
        for annotation in generator.render_children(node, &field.annotations)? {
            text.push(annotation).push(" ");
        }
        text.push(modifier_prefix(&field.modifiers))
            .push(generator.render_child(node, field.ty)?)
            .push(" ")
            .push(&field.name);
        if let Some(value) = &field.value {
            text.push(" = ").push(value);
        }
        Ok(text.into_string())
    }
}
