//! Node payloads, one per [`NodeKind`].
//!
//! Each payload is a plain value with a fluent builder API. Child nodes are
//! referenced by [`NodeId`], so they must be added to the [`Model`](crate::Model)
//! before the node that refers to them.

use serde::{Deserialize, Serialize};

use crate::{Modifier, Modifiers, NodeId, NodeKind};

/// The payload of a model node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NodeData {
    File(File),
    Package(Package),
    Import(Import),
    Class(Class),
    Interface(Interface),
    Field(Field),
    Method(Method),
    Type(Type),
    Javadoc(Javadoc),
    Annotation(Annotation),
}

impl NodeData {
    /// The dispatch kind of this payload.
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::File(_) => NodeKind::File,
            NodeData::Package(_) => NodeKind::Package,
            NodeData::Import(_) => NodeKind::Import,
            NodeData::Class(_) => NodeKind::Class,
            NodeData::Interface(_) => NodeKind::Interface,
            NodeData::Field(_) => NodeKind::Field,
            NodeData::Method(_) => NodeKind::Method,
            NodeData::Type(_) => NodeKind::Type,
            NodeData::Javadoc(_) => NodeKind::Javadoc,
            NodeData::Annotation(_) => NodeKind::Annotation,
        }
    }

    /// The local name fragment, for kinds that have one.
    pub fn name(&self) -> Option<&str> {
        match self {
            NodeData::File(n) => Some(&n.name),
            NodeData::Package(n) => Some(&n.name),
            NodeData::Class(n) => Some(&n.name),
            NodeData::Interface(n) => Some(&n.name),
            NodeData::Field(n) => Some(&n.name),
            NodeData::Method(n) => Some(&n.name),
            NodeData::Type(n) => Some(&n.name),
            NodeData::Annotation(n) => Some(&n.name),
            NodeData::Import(_) | NodeData::Javadoc(_) => None,
        }
    }
}

macro_rules! impl_from_payload {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for NodeData {
                fn from(value: $variant) -> Self {
                    NodeData::$variant(value)
                }
            }
        )*
    };
}

impl_from_payload!(
    File, Package, Import, Class, Interface, Field, Method, Type, Javadoc, Annotation,
);

macro_rules! modifier_builders {
    ($($ty:ident),* $(,)?) => {
        $(
            impl $ty {
                /// Add a modifier.
                pub fn modifier(mut self, modifier: Modifier) -> Self {
                    self.modifiers.insert(modifier);
                    self
                }

                pub fn public(self) -> Self {
                    self.modifier(Modifier::Public)
                }

                pub fn protected(self) -> Self {
                    self.modifier(Modifier::Protected)
                }

                pub fn private(self) -> Self {
                    self.modifier(Modifier::Private)
                }

                pub fn static_(self) -> Self {
                    self.modifier(Modifier::Static)
                }

                pub fn final_(self) -> Self {
                    self.modifier(Modifier::Final)
                }

                pub fn abstract_(self) -> Self {
                    self.modifier(Modifier::Abstract)
                }

                /// Attach a javadoc node.
                pub fn javadoc(mut self, javadoc: NodeId) -> Self {
                    self.javadoc = Some(javadoc);
                    self
                }

                /// Attach an annotation node.
                pub fn annotation(mut self, annotation: NodeId) -> Self {
                    self.annotations.push(annotation);
                    self
                }
            }
        )*
    };
}

modifier_builders!(Class, Interface, Field, Method);

/// A compilation unit: one package line, imports and top-level types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    /// File stem, usually the name of the main type.
    pub name: String,
    #[serde(default)]
    pub package: Option<NodeId>,
    #[serde(default)]
    pub imports: Vec<NodeId>,
    #[serde(default)]
    pub declarations: Vec<NodeId>,
}

impl File {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: None,
            imports: Vec::new(),
            declarations: Vec::new(),
        }
    }

    pub fn package(mut self, package: NodeId) -> Self {
        self.package = Some(package);
        self
    }

    pub fn import(mut self, import: NodeId) -> Self {
        self.imports.push(import);
        self
    }

    /// Add a top-level class or interface.
    pub fn declaration(mut self, declaration: NodeId) -> Self {
        self.declarations.push(declaration);
        self
    }
}

/// One segment of a package path. The enclosing package is the node's parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
}

impl Package {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// An import of a class or interface node, optionally of one static member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Import {
    pub target: NodeId,
    #[serde(default)]
    pub member: Option<String>,
}

impl Import {
    pub fn new(target: NodeId) -> Self {
        Self {
            target,
            member: None,
        }
    }

    /// Turn this into a static import of `member` (use `*` for all members).
    pub fn static_member(mut self, member: impl Into<String>) -> Self {
        self.member = Some(member.into());
        self
    }
}

/// A class declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub name: String,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub javadoc: Option<NodeId>,
    #[serde(default)]
    pub annotations: Vec<NodeId>,
    #[serde(default)]
    pub extends: Option<NodeId>,
    #[serde(default)]
    pub implements: Vec<NodeId>,
    #[serde(default)]
    pub fields: Vec<NodeId>,
    #[serde(default)]
    pub methods: Vec<NodeId>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Modifiers::new(),
            javadoc: None,
            annotations: Vec::new(),
            extends: None,
            implements: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Set the superclass type.
    pub fn extends(mut self, ty: NodeId) -> Self {
        self.extends = Some(ty);
        self
    }

    pub fn implements(mut self, ty: NodeId) -> Self {
        self.implements.push(ty);
        self
    }

    pub fn field(mut self, field: NodeId) -> Self {
        self.fields.push(field);
        self
    }

    pub fn method(mut self, method: NodeId) -> Self {
        self.methods.push(method);
        self
    }
}

/// An interface declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interface {
    pub name: String,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub javadoc: Option<NodeId>,
    #[serde(default)]
    pub annotations: Vec<NodeId>,
    #[serde(default)]
    pub extends: Vec<NodeId>,
    #[serde(default)]
    pub fields: Vec<NodeId>,
    #[serde(default)]
    pub methods: Vec<NodeId>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Modifiers::new(),
            javadoc: None,
            annotations: Vec::new(),
            extends: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn extends(mut self, ty: NodeId) -> Self {
        self.extends.push(ty);
        self
    }

    pub fn field(mut self, field: NodeId) -> Self {
        self.fields.push(field);
        self
    }

    pub fn method(mut self, method: NodeId) -> Self {
        self.methods.push(method);
        self
    }
}

/// A field declaration, also used for method parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    /// The field's [`Type`] node.
    pub ty: NodeId,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub javadoc: Option<NodeId>,
    #[serde(default)]
    pub annotations: Vec<NodeId>,
    /// Initializer expression, emitted verbatim.
    #[serde(default)]
    pub value: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: NodeId) -> Self {
        Self {
            name: name.into(),
            ty,
            modifiers: Modifiers::new(),
            javadoc: None,
            annotations: Vec::new(),
            value: None,
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// A method declaration.
///
/// A method without a body (`body == None`) renders as a bare signature,
/// as needed for abstract and interface methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    /// The return [`Type`] node.
    pub ty: NodeId,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub javadoc: Option<NodeId>,
    #[serde(default)]
    pub annotations: Vec<NodeId>,
    /// Parameter [`Field`] nodes.
    #[serde(default)]
    pub params: Vec<NodeId>,
    #[serde(default)]
    pub throws: Vec<NodeId>,
    #[serde(default)]
    pub body: Option<Vec<String>>,
}

impl Method {
    pub fn new(name: impl Into<String>, ty: NodeId) -> Self {
        Self {
            name: name.into(),
            ty,
            modifiers: Modifiers::new(),
            javadoc: None,
            annotations: Vec::new(),
            params: Vec::new(),
            throws: Vec::new(),
            body: Some(Vec::new()),
        }
    }

    pub fn param(mut self, param: NodeId) -> Self {
        self.params.push(param);
        self
    }

    pub fn throws(mut self, ty: NodeId) -> Self {
        self.throws.push(ty);
        self
    }

    /// Add a line to the body.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.body.get_or_insert_with(Vec::new).push(line.into());
        self
    }

    /// Add raw body content (can contain multiple lines).
    pub fn body(mut self, content: impl Into<String>) -> Self {
        let body = self.body.get_or_insert_with(Vec::new);
        for line in content.into().lines() {
            body.push(line.to_string());
        }
        self
    }

    /// Drop the body, leaving only the signature.
    pub fn signature_only(mut self) -> Self {
        self.body = None;
        self
    }
}

/// A type reference such as `String`, `List<T>` or `int[]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Type {
    pub name: String,
    /// Generic argument [`Type`] nodes.
    #[serde(default)]
    pub generics: Vec<NodeId>,
    #[serde(default)]
    pub array_dims: u8,
}

impl Type {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generics: Vec::new(),
            array_dims: 0,
        }
    }

    pub fn generic(mut self, ty: NodeId) -> Self {
        self.generics.push(ty);
        self
    }

    /// Add one array dimension.
    pub fn array(mut self) -> Self {
        self.array_dims += 1;
        self
    }
}

/// A documentation comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Javadoc {
    pub text: String,
    #[serde(default)]
    pub tags: Vec<JavadocTag>,
}

/// A block tag such as `@param name the name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JavadocTag {
    pub name: String,
    pub value: String,
}

impl Javadoc {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tags: Vec::new(),
        }
    }

    pub fn tag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push(JavadocTag {
            name: name.into(),
            value: value.into(),
        });
        self
    }
}

/// An annotation usage such as `@Override` or `@SuppressWarnings("unused")`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl Annotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}
