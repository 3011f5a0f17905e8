//! Document serialization: writing a [`Node`] tree as XML text.
//!
//! Output is compact: the fixed declaration, then the document element with
//! no added whitespace. Text and attribute values escape `& < > " '`.
//! Elements without children or text are written self-closing.

use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};
use xmlmarshal_core::{MarshalError, MarshalResult};

use crate::node::Node;

/// The declaration every document starts with.
pub const DOC_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Serialize a tree as a complete document.
///
/// # Errors
///
/// Returns `MarshalError::Io` if writing fails, which the in-memory buffer
/// does not do in practice.
pub fn write_document(root: &Node) -> MarshalResult<String> {
    let mut buf = Vec::with_capacity(512);
    let mut writer = Writer::new(&mut buf);

    writer.write_event(Event::Decl(BytesDecl::new(
        "1.0",
        Some("UTF-8"),
        Some("yes"),
    )))?;
    write_node(&mut writer, root)?;

    String::from_utf8(buf)
        .map_err(|e| MarshalError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

fn write_node<W: Write>(writer: &mut Writer<W>, node: &Node) -> io::Result<()> {
    let element = writer
        .create_element(node.name.as_str())
        .with_attributes(node.attribute_pairs());

    if node.children.is_empty() {
        match node.text.as_deref() {
            Some(text) if !text.is_empty() => {
                element.write_text_content(BytesText::new(text))?;
            }
            _ => {
                element.write_empty()?;
            }
        }
    } else {
        element.write_inner_content(|w| {
            for child in &node.children {
                write_node(w, child)?;
            }
            Ok(())
        })?;
    }

    Ok(())
}
