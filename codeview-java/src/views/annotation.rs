use codeview::{Generator, Node, Result, View};

use super::payload;

/// Renders `@Name` or `@Name(value)`.
pub struct AnnotationView;

impl View for AnnotationView {
    fn render(&self, _generator: &Generator, node: Node<'_>) -> Result<String> {
        let annotation = payload!(node, Annotation);
        Ok(match &annotation.value {
            Some(value) => format!("@{}({})", annotation.name, value),
            None => format!("@{}", annotation.name),
        })
    }
}

#[cfg(test)]
mod tests {
    use codeview::{Annotation, Model, NodeKind};

    use super::*;

    #[test]
    fn test_annotation() {
        let mut builder = Generator::builder();
        builder.register(NodeKind::Annotation, AnnotationView).unwrap();
        let generator = builder.build();

        let mut model = Model::new();
        let plain = model.add(Annotation::new("Override"));
        let valued = model.add(Annotation::new("SuppressWarnings").value("\"unchecked\""));

        assert_eq!(generator.render_id(&model, plain).unwrap(), "@Override");
        assert_eq!(
            generator.render_id(&model, valued).unwrap(),
            "@SuppressWarnings(\"unchecked\")"
        );
    }
}
