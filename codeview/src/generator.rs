//! Render registry and dispatch.
//!
//! Registration and rendering are separate phases with separate types:
//! a [`GeneratorBuilder`] collects views, and [`GeneratorBuilder::build`]
//! freezes them into an immutable [`Generator`]. A generator can therefore
//! be shared across threads (e.g. behind an `Arc`) and rendered from
//! concurrently without any locking.
//!
//! # Example
//!
//! ```
//! use codeview::{Generator, Model, NodeData, NodeKind, Type};
//!
//! let mut builder = Generator::builder();
//! builder
//!     .register_fn(NodeKind::Type, |generator, node| match node.data() {
//!         NodeData::Type(ty) => {
//!             let args = generator.render_children(node, &ty.generics)?;
//!             if args.is_empty() {
//!                 Ok(ty.name.clone())
//!             } else {
//!                 Ok(format!("{}<{}>", ty.name, args.join(", ")))
//!             }
//!         }
//!         _ => unreachable!(),
//!     })
//!     .unwrap();
//! let generator = builder.build();
//!
//! let mut model = Model::new();
//! let string = model.add(Type::new("String"));
//! let list = model.add(Type::new("List").generic(string));
//!
//! assert_eq!(generator.render_id(&model, list).unwrap(), "List<String>");
//! ```

use codeview_model::{Model, Node, NodeId, NodeKind};
use indexmap::{IndexMap, map::Entry};
use tracing::{debug, trace, warn};

use crate::{
    ConflictPolicy, Error, FnView, GeneratorConfig, MalformedReason, QualifiedName, Result, View,
    ViewSet,
};

/// Collects views before rendering starts.
///
/// This is the only mutable phase of a generator's life; once
/// [`build`](Self::build) is called no more views can be added.
#[derive(Default)]
pub struct GeneratorBuilder {
    views: IndexMap<NodeKind, Box<dyn View>>,
    fallback: Option<Box<dyn View>>,
    config: GeneratorConfig,
}

impl GeneratorBuilder {
    /// Create a builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with the given configuration.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Register the view for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegistrationConflict`] if `kind` already has a view
    /// and the conflict policy is [`ConflictPolicy::Reject`].
    pub fn register(&mut self, kind: NodeKind, view: impl View + 'static) -> Result<&mut Self> {
        match self.views.entry(kind) {
            Entry::Vacant(slot) => {
                debug!(%kind, "registered view");
                slot.insert(Box::new(view));
            }
            Entry::Occupied(mut slot) => match self.config.on_conflict {
                ConflictPolicy::Reject => return Err(Error::RegistrationConflict { kind }),
                ConflictPolicy::Replace => {
                    warn!(%kind, "replacing previously registered view");
                    slot.insert(Box::new(view));
                }
            },
        }
        Ok(self)
    }

    /// Register a closure as the view for `kind`.
    pub fn register_fn<F>(&mut self, kind: NodeKind, f: F) -> Result<&mut Self>
    where
        F: Fn(&crate::Generator, Node<'_>) -> Result<String> + Send + Sync + 'static,
    {
        self.register(kind, FnView(f))
    }

    /// Set a view used for every kind without an exact registration.
    ///
    /// There is no fallback unless one is set here; unregistered kinds
    /// otherwise fail with [`Error::UnsupportedNodeKind`].
    pub fn fallback(&mut self, view: impl View + 'static) -> &mut Self {
        debug!("registered fallback view");
        self.fallback = Some(Box::new(view));
        self
    }

    /// Install every view of a [`ViewSet`].
    pub fn install(&mut self, set: &impl ViewSet) -> Result<&mut Self> {
        debug!(set = set.name(), "installing view set");
        set.install(self)?;
        Ok(self)
    }

    /// Check if `kind` has an exact registration.
    pub fn contains(&self, kind: NodeKind) -> bool {
        self.views.contains_key(&kind)
    }

    /// Freeze the registry into a [`Generator`].
    pub fn build(self) -> Generator {
        debug!(
            views = self.views.len(),
            fallback = self.fallback.is_some(),
            max_depth = self.config.max_depth,
            "built generator"
        );
        Generator {
            views: self.views,
            fallback: self.fallback,
            config: self.config,
        }
    }
}

/// Renders model nodes by dispatching on their kind.
///
/// Holds no mutable state: rendering the same node twice yields the same
/// text, and independent render passes may run concurrently.
pub struct Generator {
    views: IndexMap<NodeKind, Box<dyn View>>,
    fallback: Option<Box<dyn View>>,
    config: GeneratorConfig,
}

impl Generator {
    /// Start building a generator with default configuration.
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Check if a node of `kind` can be rendered.
    pub fn supports(&self, kind: NodeKind) -> bool {
        self.views.contains_key(&kind) || self.fallback.is_some()
    }

    /// Kinds with an exact registration, in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = NodeKind> + '_ {
        self.views.keys().copied()
    }

    /// Render one node with the view registered for its kind.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedNodeKind`] if no view handles the node's kind
    /// - [`Error::MalformedTree`] if the node lies deeper than `max_depth`
    /// - any error raised by the view or by rendering its children
    pub fn render(&self, node: Node<'_>) -> Result<String> {
        let kind = node.kind();
        if node.depth() > self.config.max_depth {
            return Err(Error::malformed(
                node.id(),
                MalformedReason::TooDeep {
                    limit: self.config.max_depth,
                },
            ));
        }

        let view = match (self.views.get(&kind), &self.fallback) {
            (Some(view), _) => view,
            (None, Some(fallback)) => {
                trace!(%kind, node = %node.id(), "using fallback view");
                fallback
            }
            (None, None) => {
                return Err(Error::UnsupportedNodeKind {
                    kind,
                    node: node.id(),
                });
            }
        };

        trace!(%kind, node = %node.id(), depth = node.depth(), "rendering node");
        view.render(self, node)
    }

    /// Render the node at `id` as a root.
    pub fn render_id(&self, model: &Model, id: NodeId) -> Result<String> {
        let node = model.node(id).ok_or(Error::UnknownNode { node: id })?;
        self.render(node)
    }

    /// Render a child of `parent`, one level deeper.
    pub fn render_child(&self, parent: Node<'_>, id: NodeId) -> Result<String> {
        let child = parent.child(id).ok_or(Error::UnknownNode { node: id })?;
        self.render(child)
    }

    /// Render several children of `parent`, in order.
    pub fn render_children(&self, parent: Node<'_>, ids: &[NodeId]) -> Result<Vec<String>> {
        ids.iter().map(|id| self.render_child(parent, *id)).collect()
    }

    /// Render several children of `parent` and join them with `separator`.
    pub fn render_joined(&self, parent: Node<'_>, ids: &[NodeId], separator: &str) -> Result<String> {
        Ok(self.render_children(parent, ids)?.join(separator))
    }

    /// Render several root nodes and join them with `separator`.
    pub fn render_all(&self, model: &Model, ids: &[NodeId], separator: &str) -> Result<String> {
        let parts = ids
            .iter()
            .map(|id| self.render_id(model, *id))
            .collect::<Result<Vec<_>>>()?;
        Ok(parts.join(separator))
    }

    /// Build the qualified name of `node` from its parent chain.
    ///
    /// The chain is bounded by the configured `max_depth`.
    pub fn qualified_name(&self, node: Node<'_>, style: &QualifiedName<'_>) -> Result<String> {
        style.render(node, self.config.max_depth)
    }
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("kinds", &self.views.keys().collect::<Vec<_>>())
            .field("fallback", &self.fallback.is_some())
            .field("config", &self.config)
            .finish()
    }
}
