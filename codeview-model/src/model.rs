//! The node arena and non-owning node handles.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{NodeData, NodeKind};

/// Index of a node in a [`Model`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One arena slot: a payload plus its structural parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// The structurally enclosing node, e.g. a package's enclosing package.
    #[serde(default)]
    pub parent: Option<NodeId>,
    #[serde(flatten)]
    pub data: NodeData,
}

/// Append-only arena of model nodes.
///
/// Ids are `u32`, so a model holds at most `u32::MAX + 1` nodes; adding
/// more panics.
///
/// # Example
///
/// ```
/// use codeview_model::{Model, NodeKind, Package};
///
/// let mut model = Model::new();
/// let com = model.add(Package::new("com"));
/// let example = model.add_child(com, Package::new("example"));
///
/// let node = model.node(example).unwrap();
/// assert_eq!(node.kind(), NodeKind::Package);
/// assert_eq!(node.parent().and_then(|p| p.name()), Some("com"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(default)]
    nodes: Vec<Entry>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with no structural parent.
    pub fn add(&mut self, data: impl Into<NodeData>) -> NodeId {
        self.push(None, data.into())
    }

    /// Add a node enclosed by `parent`.
    pub fn add_child(&mut self, parent: NodeId, data: impl Into<NodeData>) -> NodeId {
        self.push(Some(parent), data.into())
    }

    /// Re-link the structural parent of `child`.
    ///
    /// Returns false if `child` is not in this model. The engine detects any
    /// cycle this creates when it walks the chain.
    pub fn set_parent(&mut self, child: NodeId, parent: Option<NodeId>) -> bool {
        match self.nodes.get_mut(child.index()) {
            Some(entry) => {
                entry.parent = parent;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&Entry> {
        self.nodes.get(id.index())
    }

    /// A handle to the node at `id`, at render depth zero.
    pub fn node(&self, id: NodeId) -> Option<Node<'_>> {
        self.get(id).map(|_| Node {
            model: self,
            id,
            depth: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all node ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(next_id)
    }

    fn push(&mut self, parent: Option<NodeId>, data: NodeData) -> NodeId {
        let id = next_id(self.nodes.len());
        self.nodes.push(Entry { parent, data });
        id
    }
}

/// The id for the slot at `len`.
///
/// # Panics
///
/// Panics once a model holds `u32::MAX + 1` nodes, the same way `Vec`
/// panics on capacity overflow.
fn next_id(len: usize) -> NodeId {
    match u32::try_from(len) {
        Ok(index) => NodeId(index),
        Err(_) => panic!("model arena is full ({} nodes)", len),
    }
}

/// A borrowed handle to one node of a [`Model`].
///
/// Handles carry the render depth at which they were reached: [`Node::child`]
/// returns a handle one level deeper, which lets the engine bound recursion
/// without keeping any mutable state of its own.
#[derive(Clone, Copy)]
pub struct Node<'a> {
    model: &'a Model,
    id: NodeId,
    depth: usize,
}

impl<'a> Node<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn model(&self) -> &'a Model {
        self.model
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn entry(&self) -> &'a Entry {
        // Handles are only created for ids present in the arena, and the
        // arena never shrinks.
        &self.model.nodes[self.id.index()]
    }

    pub fn data(&self) -> &'a NodeData {
        &self.entry().data
    }

    pub fn kind(&self) -> NodeKind {
        self.data().kind()
    }

    /// The local name fragment, for kinds that have one.
    pub fn name(&self) -> Option<&'a str> {
        self.data().name()
    }

    /// The structurally enclosing node, if any.
    pub fn parent(&self) -> Option<Node<'a>> {
        let parent = self.entry().parent?;
        self.model.get(parent).map(|_| Node {
            model: self.model,
            id: parent,
            depth: self.depth,
        })
    }

    /// A handle to a child node, one render level deeper.
    pub fn child(&self, id: NodeId) -> Option<Node<'a>> {
        self.model.get(id).map(|_| Node {
            model: self.model,
            id,
            depth: self.depth + 1,
        })
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("kind", &self.kind())
            .field("depth", &self.depth)
            .finish()
    }
}
