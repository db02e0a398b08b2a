//! End-to-end checks of the dispatch engine through its public API.

use codeview::{
    Class, Error, Generator, GeneratorBuilder, MalformedReason, Model, Node, NodeId, NodeKind,
    Package, QualifiedName, Result,
};

fn package(generator: &Generator, node: Node<'_>) -> Result<String> {
    generator.qualified_name(node, &QualifiedName::PACKAGE)
}

fn class(_: &Generator, node: Node<'_>) -> Result<String> {
    Ok(format!("class {} {{}}", node.name().unwrap_or_default()))
}

fn with(kinds: &[NodeKind]) -> Generator {
    let mut builder = GeneratorBuilder::new();
    for kind in kinds {
        let registered = match kind {
            NodeKind::Package => builder.register_fn(*kind, package),
            _ => builder.register_fn(*kind, class),
        };
        registered.expect("kinds should not repeat");
    }
    builder.build()
}

fn abc() -> (Model, NodeId) {
    let mut model = Model::new();
    let a = model.add(Package::new("a"));
    let b = model.add_child(a, Package::new("b"));
    let c = model.add_child(b, Package::new("c"));
    (model, c)
}

#[test]
fn test_composite_name_ordering() {
    let (model, c) = abc();
    let generator = with(&[NodeKind::Package]);
    assert_eq!(generator.render_id(&model, c).unwrap(), "package a.b.c;");
}

#[test]
fn test_depth_zero_package() {
    let mut model = Model::new();
    let root = model.add(Package::new("root"));
    let generator = with(&[NodeKind::Package]);
    assert_eq!(generator.render_id(&model, root).unwrap(), "package root;");
}

#[test]
fn test_missing_renderer_returns_no_text() {
    let mut model = Model::new();
    let user = model.add(Class::new("User"));
    let generator = with(&[NodeKind::Package]);

    let result = generator.render_id(&model, user);
    assert!(matches!(
        result,
        Err(Error::UnsupportedNodeKind {
            kind: NodeKind::Class,
            ..
        })
    ));
}

#[test]
fn test_cyclic_parent_chain() {
    let (mut model, c) = abc();
    let a = NodeId::new(0);
    model.set_parent(a, Some(c));
    let generator = with(&[NodeKind::Package]);

    let err = generator.render_id(&model, c).unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedTree {
            reason: MalformedReason::Cycle,
            ..
        }
    ));
}

#[test]
fn test_registration_order_and_isolation() {
    let (mut model, c) = abc();
    let user = model.add_child(c, Class::new("User"));

    let xy = with(&[NodeKind::Package, NodeKind::Class]);
    let yx = with(&[NodeKind::Class, NodeKind::Package]);
    let x = with(&[NodeKind::Package]);

    for id in [c, user] {
        assert_eq!(
            xy.render_id(&model, id).unwrap(),
            yx.render_id(&model, id).unwrap()
        );
    }
    assert_eq!(
        x.render_id(&model, c).unwrap(),
        xy.render_id(&model, c).unwrap()
    );
}

#[test]
fn test_config_limits_parent_chain() {
    let (model, c) = abc();
    let config = "max_depth = 1".parse().unwrap();
    let mut builder = GeneratorBuilder::with_config(config);
    builder.register_fn(NodeKind::Package, package).unwrap();
    let generator = builder.build();

    let err = generator.render_id(&model, c).unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedTree {
            reason: MalformedReason::TooDeep { limit: 1 },
            ..
        }
    ));
}
