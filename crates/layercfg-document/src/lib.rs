//! Ordered configuration documents.
//!
//! A [`Document`] is an insertion-ordered tree of scalars, sequences and
//! nested sections. Values are classified into merge [`Family`] tags, read
//! through the [`PathAccess`] typed accessors, and converted to and from text
//! by a [`DocumentProvider`] such as [`YamlProvider`].

mod access;
mod document;
mod error;
mod value;
mod yaml;

pub use access::{FromValue, PathAccess};
pub use document::{Document, PATH_SEPARATOR};
pub use error::DocumentError;
pub use value::{Family, Value};
pub use yaml::{DocumentProvider, YamlProvider};
