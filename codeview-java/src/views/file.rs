use std::collections::BTreeSet;

use codeview::{Generator, Node, Result, View};

use super::payload;

/// Renders a whole compilation unit.
///
/// Sections appear in order (package line, imports, declarations) and are
/// separated by one blank line. Imports are sorted and deduplicated so the
/// output does not depend on the order they were added in.
pub struct FileView;

impl View for FileView {
    fn render(&self, generator: &Generator, node: Node<'_>) -> Result<String> {
        let file = payload!(node, File);

        let mut sections = Vec::new();
        if let Some(package) = file.package {
            sections.push(generator.render_child(node, package)?);
        }

        let imports: BTreeSet<String> = generator
            .render_children(node, &file.imports)?
            .into_iter()
            .collect();
        if !imports.is_empty() {
            sections.push(imports.into_iter().collect::<Vec<_>>().join("\n"));
        }

        sections.extend(generator.render_children(node, &file.declarations)?);

        let mut source = sections.join("\n\n");
        source.push('\n');
        Ok(source)
    }
}

#[cfg(test)]
mod tests {
    use codeview::{Class, File, Import, Model, Package};

    use super::*;
    use crate::Java8;

    fn generator() -> Generator {
        let mut builder = Generator::builder();
        builder.install(&Java8).unwrap();
        builder.build()
    }

    #[test]
    fn test_imports_sorted_and_deduplicated() {
        let mut model = Model::new();
        let java = model.add(Package::new("java"));
        let util = model.add_child(java, Package::new("util"));
        let map = model.add_child(util, Class::new("Map"));
        let list = model.add_child(util, Class::new("List"));
        let app = model.add(Package::new("app"));
        let main = model.add_child(app, Class::new("Main"));

        let i1 = model.add(Import::new(map));
        let i2 = model.add(Import::new(list));
        let i3 = model.add(Import::new(map));
        let file = model.add(
            File::new("Main")
                .package(app)
                .import(i1)
                .import(i2)
                .import(i3)
                .declaration(main),
        );

        assert_eq!(
            generator().render_id(&model, file).unwrap(),
            "package app;\n\nimport java.util.List;\nimport java.util.Map;\n\nclass Main {\n}\n"
        );
    }

    #[test]
    fn test_default_package() {
        let mut model = Model::new();
        let main = model.add(Class::new("Main"));
        let file = model.add(File::new("Main").declaration(main));

        assert_eq!(
            generator().render_id(&model, file).unwrap(),
            "class Main {\n}\n"
        );
    }
}
