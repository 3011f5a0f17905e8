//! Value model for xmlmarshal.
//!
//! The marshaler works on a closed, tagged representation of an object
//! graph rather than on arbitrary runtime objects:
//!
//! - [`Value`] is `Null`, `Opaque`, a [`Primitive`], a [`Record`] or a list
//! - [`Record`] keeps fields in insertion order; `@`-prefixed names are
//!   attributes on the wire
//! - [`Record::flatten`] collapses derived/base layers before marshaling
//! - [`ToValue`] / [`FromValue`] connect concrete structs such as
//!   [`ChatEntry`] to the generic model
//! - JSON text converts to and from [`Value`] through `serde_json`

pub mod chat;
pub mod convert;
pub mod json;
pub mod value;

pub use chat::ChatEntry;
pub use convert::{FromValue, ToValue, optional_field, repeated_field, required_field};
pub use value::{Primitive, Record, Value};
