//! Model tree types for the codeview render engine.
//!
//! A [`Model`] is an append-only arena of typed nodes. Nodes refer to their
//! children and to their structurally enclosing node by [`NodeId`], so the
//! parent relation never owns anything and a tree can be shared freely
//! between concurrent render passes.
//!
//! # Architecture
//!
//! ```text
//! upstream builder → Model (arena) → Node handles → Generator → text
//! ```
//!
//! The model is built once and never mutated by the render engine.

mod kind;
mod model;
mod modifier;
mod nodes;

pub use kind::NodeKind;
pub use model::{Entry, Model, Node, NodeId};
pub use modifier::{Modifier, Modifiers};
pub use nodes::{
    Annotation, Class, Field, File, Import, Interface, Javadoc, JavadocTag, Method, NodeData,
    Package, Type,
};
