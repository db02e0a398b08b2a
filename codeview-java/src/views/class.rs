use codeview::{CodeBuilder, Generator, Node, NodeId, Result, View};

use super::{modifier_prefix, payload};

/// Renders a class declaration with its fields and methods.
pub struct ClassView;

/// Renders an interface declaration with its constants and methods.
pub struct InterfaceView;

impl View for ClassView {
    fn render(&self, generator: &Generator, node: Node<'_>) -> Result<String> {
        let class = payload!(node, Class);

        let mut header = format!("{}class {}", modifier_prefix(&class.modifiers), class.name);
        if let Some(parent) = class.extends {
            header.push_str(" extends ");
            header.push_str(&generator.render_child(node, parent)?);
        }
        if !class.implements.is_empty() {
            header.push_str(" implements ");
            header.push_str(&generator.render_joined(node, &class.implements, ", ")?);
        }

        Declaration {
            header,
            javadoc: class.javadoc,
            annotations: &class.annotations,
            fields: &class.fields,
            methods: &class.methods,
        }
        .render(generator, node)
    }
}

impl View for InterfaceView {
    fn render(&self, generator: &Generator, node: Node<'_>) -> Result<String> {
        let interface = payload!(node, Interface);

        let mut header = format!(
            "{}interface {}",
            modifier_prefix(&interface.modifiers),
            interface.name
        );
        if !interface.extends.is_empty() {
            header.push_str(" extends ");
            header.push_str(&generator.render_joined(node, &interface.extends, ", ")?);
        }

        Declaration {
            header,
            javadoc: interface.javadoc,
            annotations: &interface.annotations,
            fields: &interface.fields,
            methods: &interface.methods,
        }
        .render(generator, node)
    }
}

/// The parts shared by class and interface declarations.
struct Declaration<'a> {
    header: String,
    javadoc: Option<NodeId>,
    annotations: &'a [NodeId],
    fields: &'a [NodeId],
    methods: &'a [NodeId],
}

impl Declaration<'_> {
    /// Fields form one section and each method its own; sections are
    /// separated by blank lines.
    fn render(&self, generator: &Generator, node: Node<'_>) -> Result<String> {
        let mut builder = CodeBuilder::new(generator.config().indent);
        if let Some(javadoc) = self.javadoc {
            builder.push_lines(&generator.render_child(node, javadoc)?);
        }
        for annotation in generator.render_children(node, self.annotations)? {
            builder.push_line(&annotation);
        }
        builder.push_line(&format!("{} {{", self.header)).push_indent();

        let fields = generator.render_children(node, self.fields)?;
        if !fields.is_empty() {
            builder.push_blank();
            for field in fields {
                builder.push_lines(&format!("{};", field));
            }
        }
        for method in generator.render_children(node, self.methods)? {
            builder.push_blank().push_lines(&method);
        }

        builder.push_dedent().push_line("}");
        Ok(builder.build().trim_end().to_string())
    }
}
