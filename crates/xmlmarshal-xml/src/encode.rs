//! Encoder: turning a [`Value`] into a [`Node`] tree.

use xmlmarshal_core::{MarshalError, MarshalResult};
use xmlmarshal_model::Value;

use crate::naming::{self, FieldKind};
use crate::node::Node;

/// Build the document element for `value`.
///
/// `value` must be a primitive or a record; `root_name` must be a valid XML
/// name.
pub(crate) fn encode_document(
    value: &Value,
    root_name: &str,
    max_depth: usize,
) -> MarshalResult<Node> {
    match value {
        Value::Null => return Err(MarshalError::invalid("cannot marshal a null value")),
        Value::Opaque => return Err(MarshalError::invalid("cannot marshal an opaque value")),
        Value::List(_) => return Err(MarshalError::invalid("cannot marshal a list as the root")),
        Value::Primitive(_) | Value::Record(_) => {}
    }
    naming::validate_name(root_name)?;

    let mut root = Node::new(root_name);
    Encoder { max_depth }.encode_into(value, &mut root, 1)?;
    Ok(root)
}

#[derive(Debug, Clone, Copy)]
struct Encoder {
    max_depth: usize,
}

impl Encoder {
    fn encode_into(self, value: &Value, element: &mut Node, depth: usize) -> MarshalResult<()> {
        if depth > self.max_depth {
            return Err(MarshalError::ResourceExhaustion { depth });
        }

        match value {
            Value::Primitive(p) => element.set_text(p.to_string()),
            Value::Record(record) => {
                for (name, field) in record {
                    self.encode_field(name, field, element, depth)?;
                }
            }
            // An absent list item still occupies its position as an empty element.
            Value::Null | Value::Opaque => {}
            Value::List(_) => {
                return Err(MarshalError::invalid(format!(
                    "list nested directly inside a list item <{}>",
                    element.name
                )));
            }
        }
        Ok(())
    }

    fn encode_field(
        self,
        name: &str,
        value: &Value,
        element: &mut Node,
        depth: usize,
    ) -> MarshalResult<()> {
        if value.is_absent() {
            return Ok(());
        }

        match naming::classify(name) {
            FieldKind::Attribute(attribute) => {
                naming::validate_name(attribute)?;
                let Value::Primitive(p) = value else {
                    return Err(MarshalError::invalid(format!(
                        "attribute field '{name}' must hold a primitive value"
                    )));
                };
                element.set_attribute(attribute, p.to_string());
            }
            FieldKind::Element(tag) => {
                naming::validate_name(tag)?;
                let items = match value {
                    Value::List(items) => items.as_slice(),
                    single => std::slice::from_ref(single),
                };
                for item in items {
                    let mut child = Node::new(tag);
                    self.encode_into(item, &mut child, depth + 1)?;
                    element.append_child(child);
                }
            }
        }
        Ok(())
    }
}
