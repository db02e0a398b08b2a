use codeview::{Generator, Node, Result, Text, View};

use super::payload;

/// Renders a type reference: `String`, `Map<String, Integer>`, `byte[]`.
pub struct TypeView;

impl View for TypeView {
    fn render(&self, generator: &Generator, node: Node<'_>) -> Result<String> {
        let ty = payload!(node, Type);

        let mut text = Text::from(ty.name.as_str());
        if !ty.generics.is_empty() {
            text.push("<")
                .push(generator.render_joined(node, &ty.generics, ", ")?)
                .push(">");
        }
        for _ in 0..ty.array_dims {
            text.push("[]");
        }
        Ok(text.into_string())
    }
}

#[cfg(test)]
mod tests {
    use codeview::{Model, NodeKind, Type};

    use super::*;

    fn generator() -> Generator {
        let mut builder = Generator::builder();
        builder.register(NodeKind::Type, TypeView).unwrap();
        builder.build()
    }

    #[test]
    fn test_simple_type() {
        let mut model = Model::new();
        let ty = model.add(Type::new("String"));
        assert_eq!(generator().render_id(&model, ty).unwrap(), "String");
    }

    #[test]
    fn test_nested_generics() {
        let mut model = Model::new();
        let string = model.add(Type::new("String"));
        let integer = model.add(Type::new("Integer"));
        let list = model.add(Type::new("List").generic(integer));
        let map = model.add(Type::new("Map").generic(string).generic(list));

        assert_eq!(
            generator().render_id(&model, map).unwrap(),
            "Map<String, List<Integer>>"
        );
    }

    #[test]
    fn test_array() {
        let mut model = Model::new();
        let ty = model.add(Type::new("byte").array().array());
        assert_eq!(generator().render_id(&model, ty).unwrap(), "byte[][]");
    }
}
