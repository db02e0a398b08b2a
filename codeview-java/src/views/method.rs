use codeview::{CodeBuilder, Generator, Node, Result, View};

use super::{modifier_prefix, payload};

/// Renders a method declaration.
///
/// Methods with a body render as a block; methods without one render as a
/// signature terminated by `;`.
pub struct MethodView;

impl View for MethodView {
    fn render(&self, generator: &Generator, node: Node<'_>) -> Result<String> {
        let method = payload!(node, Method);

        let mut builder = CodeBuilder::new(generator.config().indent);
        if let Some(javadoc) = method.javadoc {
            builder.push_lines(&generator.render_child(node, javadoc)?);
        }
        for annotation in generator.render_children(node, &method.annotations)? {
            builder.push_line(&annotation);
        }

        let mut signature = format!(
            "{}{} {}({})",
            modifier_prefix(&method.modifiers),
            generator.render_child(node, method.ty)?,
            method.name,
            generator.render_joined(node, &method.params, ", ")?,
        );
        if !method.throws.is_empty() {
            signature.push_str(" throws ");
            signature.push_str(&generator.render_joined(node, &method.throws, ", ")?);
        }

        match &method.body {
            None => {
                builder.push_raw(&signature).push_raw(";");
            }
            Some(body) if body.is_empty() => {
                builder.push_raw(&signature).push_raw(" {}");
            }
            Some(body) => {
                let block = builder
                    .block_with_close(&format!("{} {{", signature), "}", |b| {
                        b.each(body, |b, line| b.lines(line))
                    })
                    .build();
                return Ok(block.trim_end().to_string());
            }
        }
        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use codeview::{Annotation, Field, Javadoc, Method, Model, NodeKind, Type};

    use super::*;
    use crate::views::{AnnotationView, FieldView, JavadocView, TypeView};

    fn generator() -> Generator {
        let mut builder = Generator::builder();
        builder
            .register(NodeKind::Method, MethodView)
            .unwrap()
            .register(NodeKind::Field, FieldView)
            .unwrap()
            .register(NodeKind::Type, TypeView)
            .unwrap()
            .register(NodeKind::Annotation, AnnotationView)
            .unwrap()
            .register(NodeKind::Javadoc, JavadocView)
            .unwrap();
        builder.build()
    }

    #[test]
    fn test_method_with_body() {
        let mut model = Model::new();
        let int = model.add(Type::new("int"));
        let a = model.add(Field::new("a", int));
        let b = model.add(Field::new("b", int));
        let method = model.add(
            Method::new("add", int)
                .public()
                .static_()
                .param(a)
                .param(b)
                .line("return a + b;"),
        );

        assert_eq!(
            generator().render_id(&model, method).unwrap(),
            "public static int add(int a, int b) {\n    return a + b;\n}"
        );
    }

    #[test]
    fn test_empty_body() {
        let mut model = Model::new();
        let void = model.add(Type::new("void"));
        let method = model.add(Method::new("run", void).public());

        assert_eq!(
            generator().render_id(&model, method).unwrap(),
            "public void run() {}"
        );
    }

    #[test]
    fn test_signature_only_with_throws() {
        let mut model = Model::new();
        let string = model.add(Type::new("String"));
        let io = model.add(Type::new("IOException"));
        let method = model.add(
            Method::new("read", string)
                .abstract_()
                .throws(io)
                .signature_only(),
        );

        assert_eq!(
            generator().render_id(&model, method).unwrap(),
            "abstract String read() throws IOException;"
        );
    }

    #[test]
    fn test_javadoc_and_annotation() {
        let mut model = Model::new();
        let string = model.add(Type::new("String"));
        let doc = model.add(Javadoc::new("Describe this."));
        let over = model.add(Annotation::new("Override"));
        let method = model.add(
            Method::new("toString", string)
                .public()
                .javadoc(doc)
                .annotation(over)
                .line("return \"User\";"),
        );

        assert_eq!(
            generator().render_id(&model, method).unwrap(),
            "/**\n * Describe this.\n */\n@Override\npublic String toString() {\n    return \"User\";\n}"
        );
    }

    #[test]
    fn test_nested_body_lines_keep_relative_indent() {
        let mut model = Model::new();
        let void = model.add(Type::new("void"));
        let method = model.add(
            Method::new("loop", void)
                .line("for (int i = 0; i < 3; i++) {")
                .line("    tick(i);")
                .line("}"),
        );

        assert_eq!(
            generator().render_id(&model, method).unwrap(),
            "void loop() {\n    for (int i = 0; i < 3; i++) {\n        tick(i);\n    }\n}"
        );
    }
}
