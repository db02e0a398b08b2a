//! One view per model node kind.

mod annotation;
mod class;
mod field;
mod file;
mod import;
mod javadoc;
mod method;
mod package;
mod types;

pub use annotation::AnnotationView;
pub use class::{ClassView, InterfaceView};
pub use field::FieldView;
pub use file::FileView;
pub use import::ImportView;
pub use javadoc::JavadocView;
pub use method::MethodView;
pub use package::PackageView;
pub use types::TypeView;

use codeview::Modifiers;

/// Extract the payload of the expected variant, or fail with
/// [`Error::KindMismatch`](codeview::Error::KindMismatch).
macro_rules! payload {
    ($node:expr, $variant:ident) => {
        match $node.data() {
            codeview::NodeData::$variant(payload) => payload,
            _ => {
                return Err(codeview::Error::KindMismatch {
                    expected: codeview::NodeKind::$variant,
                    found: $node.kind(),
                    node: $node.id(),
                });
            }
        }
    };
}

pub(crate) use payload;

/// Modifiers in canonical order, each followed by a space.
pub(crate) fn modifier_prefix(modifiers: &Modifiers) -> String {
    modifiers
        .iter()
        .map(|m| format!("{} ", m.as_str()))
        .collect()
}
