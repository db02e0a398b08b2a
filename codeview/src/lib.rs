//! Render registry and dispatch engine for model-to-text code generation.
//!
//! A [`Generator`] maps each [`NodeKind`] to exactly one [`View`] and turns
//! a model tree into text by dispatching on the kind of every node it
//! meets. Views render their children by calling back into the generator.
//!
//! # Module Organization
//!
//! - [`generator`] - Registration ([`GeneratorBuilder`]) and dispatch ([`Generator`])
//! - [`view`] - The [`View`] strategy trait and [`ViewSet`] bundles
//! - [`name`] - Qualified name construction over parent chains
//! - [`config`] - [`GeneratorConfig`] loaded from TOML
//! - [`output`] - Multi-file output ([`FileSet`])
//!
//! # Example
//!
//! ```
//! use codeview::{Generator, Model, NodeKind, Package, QualifiedName};
//!
//! let mut builder = Generator::builder();
//! builder
//!     .register_fn(NodeKind::Package, |generator, node| {
//!         generator.qualified_name(node, &QualifiedName::PACKAGE)
//!     })
//!     .unwrap();
//! let generator = builder.build();
//!
//! let mut model = Model::new();
//! let com = model.add(Package::new("com"));
//! let example = model.add_child(com, Package::new("example"));
//!
//! assert_eq!(
//!     generator.render_id(&model, example).unwrap(),
//!     "package com.example;"
//! );
//! ```

pub mod config;
mod error;
pub mod generator;
pub mod name;
pub mod output;
pub mod view;

pub use codeview_core::{CodeBuilder, Indent, Text};
pub use codeview_model::{
    Annotation, Class, Field, File, Import, Interface, Javadoc, JavadocTag, Method, Model,
    Modifier, Modifiers, Node, NodeData, NodeId, NodeKind, Package, Type,
};
pub use config::{ConflictPolicy, GeneratorConfig};
pub use error::{Error, MalformedReason, Result};
pub use generator::{Generator, GeneratorBuilder};
pub use name::QualifiedName;
pub use output::{FileSet, Overwrite, RenderedFile, WriteResult, WriteStats};
pub use view::{FnView, View, ViewSet};
