//! The Java 8 view set.

use std::collections::HashMap;

use codeview::{
    Error, FileSet, Generator, GeneratorBuilder, Model, Node, NodeData, NodeId, NodeKind,
    QualifiedName, RenderedFile, Result, ViewSet,
};
use tracing::debug;

use crate::views::{
    AnnotationView, ClassView, FieldView, FileView, ImportView, InterfaceView, JavadocView,
    MethodView, PackageView, TypeView,
};

/// Views for every node kind, rendering Java 8 source.
#[derive(Debug, Clone, Copy, Default)]
pub struct Java8;

impl ViewSet for Java8 {
    fn name(&self) -> &'static str {
        "java8"
    }

    fn install(&self, builder: &mut GeneratorBuilder) -> Result<()> {
        builder
            .register(NodeKind::File, FileView)?
            .register(NodeKind::Package, PackageView)?
            .register(NodeKind::Import, ImportView)?
            .register(NodeKind::Class, ClassView)?
            .register(NodeKind::Interface, InterfaceView)?
            .register(NodeKind::Field, FieldView)?
            .register(NodeKind::Method, MethodView)?
            .register(NodeKind::Type, TypeView)?
            .register(NodeKind::Javadoc, JavadocView)?
            .register(NodeKind::Annotation, AnnotationView)?;
        Ok(())
    }
}

impl Java8 {
    /// File extension of rendered sources.
    pub const EXTENSION: &'static str = "java";

    /// The output path of a `File` node: its package as directories plus
    /// `<name>.java`, e.g. `com/example/User.java`.
    pub fn file_path(generator: &Generator, node: Node<'_>) -> Result<String> {
        let NodeData::File(file) = node.data() else {
            return Err(Error::KindMismatch {
                expected: NodeKind::File,
                found: node.kind(),
                node: node.id(),
            });
        };

        let name = format!("{}.{}", file.name, Self::EXTENSION);
        match file.package {
            None => Ok(name),
            Some(package) => {
                let package = node
                    .model()
                    .node(package)
                    .ok_or(Error::UnknownNode { node: package })?;
                let dir = QualifiedName::PATH.join(package, generator.config().max_depth)?;
                Ok(format!("{}/{}", dir, name))
            }
        }
    }

    /// Render each `File` node into a [`FileSet`].
    ///
    /// Fails without returning any files if one of them fails to render or
    /// two of them map to the same path.
    pub fn render_files(generator: &Generator, model: &Model, files: &[NodeId]) -> Result<FileSet> {
        let mut set = FileSet::new();
        let mut owners: HashMap<String, NodeId> = HashMap::new();
        for id in files {
            let node = model.node(*id).ok_or(Error::UnknownNode { node: *id })?;
            let path = Self::file_path(generator, node)?;
            if let Some(first) = owners.get(&path) {
                return Err(Error::DuplicateOutputPath {
                    path,
                    first: *first,
                    second: *id,
                });
            }
            owners.insert(path.clone(), *id);

            let content = generator.render(node)?;
            debug!(%path, bytes = content.len(), "rendered file");
            set.push(RenderedFile::new(path, content));
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use codeview::{Class, ConflictPolicy, File, GeneratorConfig, Package};

    use super::*;

    fn generator() -> Generator {
        let mut builder = Generator::builder();
        builder.install(&Java8).unwrap();
        builder.build()
    }

    #[test]
    fn test_installs_every_kind() {
        let generator = generator();
        for kind in NodeKind::ALL {
            assert!(generator.supports(kind), "missing view for {}", kind);
        }
    }

    #[test]
    fn test_install_twice_conflicts() {
        let mut builder = Generator::builder();
        builder.install(&Java8).unwrap();
        assert!(matches!(
            builder.install(&Java8).err().unwrap(),
            Error::RegistrationConflict {
                kind: NodeKind::File
            }
        ));
    }

    #[test]
    fn test_override_single_view() {
        let config = GeneratorConfig::default().on_conflict(ConflictPolicy::Replace);
        let mut builder = GeneratorBuilder::with_config(config);
        builder.install(&Java8).unwrap();
        builder
            .register_fn(NodeKind::Package, |_, node| {
                Ok(format!("// package {}", node.name().unwrap_or_default()))
            })
            .unwrap();
        let generator = builder.build();

        let mut model = Model::new();
        let app = model.add(Package::new("app"));
        let main = model.add_child(app, Class::new("Main"));
        let file = model.add(File::new("Main").package(app).declaration(main));

        assert_eq!(
            generator.render_id(&model, file).unwrap(),
            "// package app\n\nclass Main {\n}\n"
        );
    }

    #[test]
    fn test_file_path() {
        let generator = generator();
        let mut model = Model::new();
        let com = model.add(Package::new("com"));
        let example = model.add_child(com, Package::new("example"));
        let with_package = model.add(File::new("User").package(example));
        let without = model.add(File::new("Main"));

        assert_eq!(
            Java8::file_path(&generator, model.node(with_package).unwrap()).unwrap(),
            "com/example/User.java"
        );
        assert_eq!(
            Java8::file_path(&generator, model.node(without).unwrap()).unwrap(),
            "Main.java"
        );
    }

    #[test]
    fn test_render_files_rejects_shared_path() {
        let generator = generator();
        let mut model = Model::new();
        let app = model.add(Package::new("app"));
        let a = model.add_child(app, Class::new("A"));
        let b = model.add_child(app, Class::new("B"));
        let first = model.add(File::new("User").package(app).declaration(a));
        let second = model.add(File::new("User").package(app).declaration(b));

        let err = Java8::render_files(&generator, &model, &[first, second]).unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateOutputPath { ref path, first: f, second: s }
                if path == "app/User.java" && f == first && s == second
        ));
    }

    #[test]
    fn test_render_files_fails_as_a_whole() {
        let mut builder = Generator::builder();
        builder.register(NodeKind::File, FileView).unwrap();
        let generator = builder.build();

        let mut model = Model::new();
        let empty = model.add(File::new("Empty"));
        let main = model.add(Class::new("Main"));
        let broken = model.add(File::new("Main").declaration(main));

        let err = Java8::render_files(&generator, &model, &[empty, broken]).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedNodeKind {
                kind: NodeKind::Class,
                ..
            }
        ));
    }
}
