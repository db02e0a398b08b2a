//! The view strategy trait.

use codeview_model::{Node, NodeKind};

use crate::{Error, Generator, GeneratorBuilder, Result};

/// Renders exactly one kind of model node to text.
///
/// A view receives the generator so it can render child nodes, and owns
/// the exact formatting of its own node including any terminator. Views
/// must be deterministic and must not keep per-render state.
///
/// # Example
///
/// ```
/// use codeview::{Generator, Node, NodeData, Result, View};
///
/// struct AnnotationView;
///
/// impl View for AnnotationView {
///     fn render(&self, _generator: &Generator, node: Node<'_>) -> Result<String> {
///         match node.data() {
///             NodeData::Annotation(a) => Ok(format!("@{}", a.name)),
///             _ => unreachable!(),
///         }
///     }
/// }
/// ```
pub trait View: Send + Sync {
    fn render(&self, generator: &Generator, node: Node<'_>) -> Result<String>;
}

/// Blanket implementation for references.
impl<T: View + ?Sized> View for &T {
    fn render(&self, generator: &Generator, node: Node<'_>) -> Result<String> {
        (**self).render(generator, node)
    }
}

/// Blanket implementation for Box.
impl<T: View + ?Sized> View for Box<T> {
    fn render(&self, generator: &Generator, node: Node<'_>) -> Result<String> {
        self.as_ref().render(generator, node)
    }
}

/// Adapts a closure into a [`View`].
///
/// Usually created through [`GeneratorBuilder::register_fn`].
pub struct FnView<F>(pub F);

impl<F> View for FnView<F>
where
    F: Fn(&Generator, Node<'_>) -> Result<String> + Send + Sync,
{
    fn render(&self, generator: &Generator, node: Node<'_>) -> Result<String> {
        (self.0)(generator, node)
    }
}

/// A bundle of views installed together, e.g. one target language.
pub trait ViewSet {
    /// The name of this set (for logging).
    fn name(&self) -> &'static str;

    /// Register every view of this set.
    ///
    /// # Errors
    ///
    /// Propagates registration conflicts.
    fn install(&self, builder: &mut GeneratorBuilder) -> Result<()>;
}

/// Check that `node` has the kind a view expects.
///
/// Dispatch is exact, so this only fails when a view was registered under
/// the wrong kind or reached through a fallback.
pub fn ensure_kind(node: Node<'_>, expected: NodeKind) -> Result<()> {
    let found = node.kind();
    if found == expected {
        Ok(())
    } else {
        Err(Error::KindMismatch {
            expected,
            found,
            node: node.id(),
        })
    }
}
