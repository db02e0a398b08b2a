use codeview::{Generator, Node, Result, Text, View};

use super::payload;

/// Renders a documentation comment block.
///
/// ```text
/// /**
///  * Text, one line per source line.
///  *
///  * @param name the tag value
///  */
/// ```
pub struct JavadocView;

impl View for JavadocView {
    fn render(&self, _generator: &Generator, node: Node<'_>) -> Result<String> {
        let javadoc = payload!(node, Javadoc);

        let mut text = Text::from("/**\n");
        for line in javadoc.text.lines() {
            push_line(&mut text, line);
        }
        if !javadoc.text.is_empty() && !javadoc.tags.is_empty() {
            push_line(&mut text, "");
        }
        for tag in &javadoc.tags {
            push_line(&mut text, &format!("@{} {}", tag.name, tag.value));
        }
        text.push(" */");
        Ok(text.into_string())
    }
}

/// Content lines never close the comment: `*/` becomes `*&#47;`.
fn push_line(text: &mut Text, line: &str) {
    if line.is_empty() {
        text.push(" *\n");
    } else {
        let escaped = line.replace("*/", "*&#47;");
        text.push_all([" * ", escaped.as_str(), "\n"]);
    }
}

#[cfg(test)]
mod tests {
    use codeview::{Javadoc, Model, NodeKind};

    use super::*;

    fn render(javadoc: Javadoc) -> String {
        let mut builder = Generator::builder();
        builder.register(NodeKind::Javadoc, JavadocView).unwrap();
        let generator = builder.build();

        let mut model = Model::new();
        let id = model.add(javadoc);
        generator.render_id(&model, id).unwrap()
    }

    #[test]
    fn test_text_only() {
        assert_eq!(
            render(Javadoc::new("A user.\n\nImmutable.")),
            "/**\n * A user.\n *\n * Immutable.\n */"
        );
    }

    #[test]
    fn test_text_and_tags() {
        assert_eq!(
            render(Javadoc::new("Sets the name.").tag("param", "name the new name")),
            "/**\n * Sets the name.\n *\n * @param name the new name\n */"
        );
    }

    #[test]
    fn test_comment_terminator_is_escaped() {
        assert_eq!(
            render(Javadoc::new("Matches /* and */ markers.").tag("see", "a*/b")),
            "/**\n * Matches /* and *&#47; markers.\n *\n * @see a*&#47;b\n */"
        );
    }

    #[test]
    fn test_tags_only() {
        assert_eq!(
            render(Javadoc::new("").tag("author", "codeview")),
            "/**\n * @author codeview\n */"
        );
    }
}
