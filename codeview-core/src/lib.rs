//! Core text primitives for the codeview render engine.
//!
//! This crate provides the building blocks views use to assemble output:
//! an append-only [`Text`] buffer, the indentation-aware [`CodeBuilder`],
//! and a few identifier casing helpers.

mod code_builder;
mod indent;
mod text;
mod utils;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use text::Text;
pub use utils::{to_camel_case, to_pascal_case};
