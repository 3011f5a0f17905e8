//! Decoder: turning a [`Node`] tree into a [`Value`].
//!
//! Field shape follows element multiplicity: a child tag seen once is a
//! scalar field, a tag seen twice or more is folded into a list field.

use tracing::trace;
use xmlmarshal_model::{Record, Value};

use crate::naming::{self, TYPE_FIELD};
use crate::node::Node;

/// Decode the document element and inject the synthetic `type` field.
///
/// A bare document element (no attributes, no children) decodes to an
/// otherwise empty record even if it holds text, unlike a bare nested
/// element, which decodes to its text.
pub(crate) fn decode_document(root: &Node) -> Value {
    let mut record = if root.is_bare() {
        Record::new()
    } else {
        decode_record(root)
    };
    record.insert(TYPE_FIELD, root.name.as_str());
    Value::Record(record)
}

fn decode_element(node: &Node) -> Value {
    if node.is_bare() {
        return Value::string(node.text_content());
    }
    Value::Record(decode_record(node))
}

fn decode_record(node: &Node) -> Record {
    let mut record = Record::new();
    for (name, value) in &node.attributes {
        record.insert(naming::attribute_field(name), value.as_str());
    }
    for child in &node.children {
        fold(&mut record, &child.name, decode_element(child));
    }
    record
}

fn fold(record: &mut Record, key: &str, value: Value) {
    match record.get_mut(key) {
        None => {
            record.insert(key, value);
        }
        Some(Value::List(items)) => items.push(value),
        Some(existing) => {
            trace!(field = key, "folding repeated element into a list");
            let first = std::mem::take(existing);
            *existing = Value::List(vec![first, value]);
        }
    }
}
