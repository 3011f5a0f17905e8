//! Document parsing: reading XML text into a [`Node`] tree.
//!
//! The reader is strict about structure (one root element, matching and
//! terminated tags, well-formed attributes, known entities) and lenient
//! about everything the marshaler ignores: the declaration, comments,
//! processing instructions and doctype are skipped. Whitespace is kept, so
//! leaf text comes back exactly as written.

use std::fmt;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use xmlmarshal_core::{MarshalError, MarshalResult};

use crate::node::Node;

/// Parse a complete document into its root element.
///
/// # Errors
///
/// Returns `MarshalError::Parse` for malformed documents and
/// `MarshalError::ResourceExhaustion` when elements nest deeper than
/// `max_depth`.
pub fn read_document(xml: &str, max_depth: usize) -> MarshalResult<Node> {
    let mut reader = Reader::from_str(xml);
    let mut open: Vec<Node> = Vec::new();
    let mut root: Option<Node> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| MarshalError::parse(e.to_string(), reader.error_position()))?;

        match event {
            Event::Start(e) => {
                check_new_element(&reader, &open, root.as_ref(), max_depth)?;
                open.push(start_node(&reader, &e)?);
            }
            Event::Empty(e) => {
                check_new_element(&reader, &open, root.as_ref(), max_depth)?;
                let node = start_node(&reader, &e)?;
                close_element(&mut open, &mut root, node);
            }
            Event::End(_) => {
                let node = open
                    .pop()
                    .ok_or_else(|| parse_error(&reader, &"end tag without start tag"))?;
                close_element(&mut open, &mut root, node);
            }
            Event::Text(e) => {
                let decoded = e.decode().map_err(|err| parse_error(&reader, &err))?;
                let unescaped = quick_xml::escape::unescape(&decoded)
                    .map_err(|err| parse_error(&reader, &err))?;
                append_text(&reader, &mut open, &unescaped)?;
            }
            Event::GeneralRef(e) => {
                let name = e.decode().map_err(|err| parse_error(&reader, &err))?;
                let reference = format!("&{name};");
                let resolved = quick_xml::escape::unescape(&reference)
                    .map_err(|err| parse_error(&reader, &err))?;
                append_text(&reader, &mut open, &resolved)?;
            }
            Event::CData(e) => {
                let raw = e.into_inner();
                let text = std::str::from_utf8(&raw).map_err(|err| parse_error(&reader, &err))?;
                append_text(&reader, &mut open, text)?;
            }
            Event::Eof => break,
            // Declaration, comments, processing instructions, doctype.
            _ => {}
        }
    }

    if let Some(node) = open.last() {
        let message = format!("unterminated element <{}>", node.name);
        return Err(parse_error(&reader, &message));
    }

    root.ok_or_else(|| parse_error(&reader, &"missing root element"))
}

fn check_new_element(
    reader: &Reader<&[u8]>,
    open: &[Node],
    root: Option<&Node>,
    max_depth: usize,
) -> MarshalResult<()> {
    if open.is_empty() && root.is_some() {
        return Err(parse_error(reader, &"more than one root element"));
    }
    if open.len() >= max_depth {
        return Err(MarshalError::ResourceExhaustion {
            depth: open.len() + 1,
        });
    }
    Ok(())
}

fn start_node(reader: &Reader<&[u8]>, e: &BytesStart<'_>) -> MarshalResult<Node> {
    let name = e.name();
    let tag = std::str::from_utf8(name.as_ref()).map_err(|err| parse_error(reader, &err))?;
    let mut node = Node::new(tag);

    for attr in e.attributes() {
        let attr = attr.map_err(|err| parse_error(reader, &err))?;
        let key = std::str::from_utf8(attr.key.as_ref()).map_err(|err| parse_error(reader, &err))?;
        let raw = std::str::from_utf8(&attr.value).map_err(|err| parse_error(reader, &err))?;
        let value = quick_xml::escape::unescape(raw).map_err(|err| parse_error(reader, &err))?;
        node.attributes.push((key.to_owned(), value.into_owned()));
    }

    Ok(node)
}

/// Attach a finished element to its parent, or make it the root.
fn close_element(open: &mut [Node], root: &mut Option<Node>, mut node: Node) {
    if !node.children.is_empty() {
        node.text = None;
    }
    if let Some(parent) = open.last_mut() {
        parent.append_child(node);
    } else {
        *root = Some(node);
    }
}

fn append_text(reader: &Reader<&[u8]>, open: &mut [Node], text: &str) -> MarshalResult<()> {
    match open.last_mut() {
        Some(node) => node.push_text(text),
        None if text.trim().is_empty() => {}
        None => return Err(parse_error(reader, &"text outside the root element")),
    }
    Ok(())
}

fn parse_error(reader: &Reader<&[u8]>, message: &dyn fmt::Display) -> MarshalError {
    MarshalError::parse(message.to_string(), reader.buffer_position())
}
