//! Java 8 view set for the codeview render engine.
//!
//! Install [`Java8`] into a [`GeneratorBuilder`](codeview::GeneratorBuilder)
//! to render every model node kind as Java source:
//!
//! ```
//! use codeview::{Class, File, Generator, Model, Package};
//! use codeview_java::Java8;
//!
//! let mut builder = Generator::builder();
//! builder.install(&Java8).unwrap();
//! let generator = builder.build();
//!
//! let mut model = Model::new();
//! let com = model.add(Package::new("com"));
//! let example = model.add_child(com, Package::new("example"));
//! let user = model.add_child(example, Class::new("User").public());
//! let file = model.add(File::new("User").package(example).declaration(user));
//!
//! let source = generator.render_id(&model, file).unwrap();
//! assert_eq!(source, "package com.example;\n\npublic class User {\n}\n");
//! ```

mod accessors;
mod java8;
pub mod views;

pub use accessors::accessors;
pub use java8::Java8;
