//! Convention-based XML marshaling for xmlmarshal values.
//!
//! This crate converts any [`Value`](xmlmarshal_model::Value) tree to an XML
//! document and back without a schema. The document shape is derived purely
//! from field names and element multiplicity.
//!
//! # Key components
//!
//! - [`Marshaller`], [`encode`] and [`decode`]: the public entry points
//! - [`Node`]: the intermediate element tree
//! - [`read_document`] / [`write_document`]: the quick-xml backed reader and
//!   writer for that tree
//! - [`naming`]: the attribute/element naming convention
//!
//! # Conventions
//!
//! - Declaration: `<?xml version="1.0" encoding="UTF-8" standalone="yes"?>`
//! - `@name` fields are attributes, every other field is a child element
//! - list fields become repeated sibling elements; repeated elements decode
//!   back into lists, single ones into scalars
//! - decoding adds a `type` field holding the document element's tag
//! - no namespaces, no indentation

mod decode;
mod encode;
mod marshaller;
pub mod naming;
pub mod node;
pub mod reader;
pub mod writer;

pub use marshaller::{Marshaller, decode, encode};
pub use node::Node;
pub use reader::read_document;
pub use writer::{DOC_DECLARATION, write_document};
