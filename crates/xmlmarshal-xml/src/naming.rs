//! Field naming convention.
//!
//! - `@`-prefixed field names are attributes; the prefix is stripped and
//!   the rest trimmed
//! - every other field name is the tag of one or more child elements
//! - decoding adds a synthetic `type` field holding the root tag

use xmlmarshal_core::{MarshalError, MarshalResult};

/// Prefix marking an attribute field.
pub const ATTRIBUTE_PREFIX: char = '@';

/// Field injected into every decoded document.
pub const TYPE_FIELD: &str = "type";

/// What a record field becomes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind<'a> {
    /// An attribute with the given (trimmed) name.
    Attribute(&'a str),
    /// Child elements with the given tag.
    Element(&'a str),
}

/// Classify a record field name.
#[must_use]
pub fn classify(field: &str) -> FieldKind<'_> {
    if let Some(rest) = field.strip_prefix(ATTRIBUTE_PREFIX) {
        FieldKind::Attribute(rest.trim())
    } else {
        FieldKind::Element(field)
    }
}

/// The record field name for an attribute.
#[must_use]
pub fn attribute_field(attribute: &str) -> String {
    format!("{ATTRIBUTE_PREFIX}{}", attribute.trim())
}

/// Check that `name` is a legal XML element or attribute name.
pub fn validate_name(name: &str) -> MarshalResult<()> {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|first| is_name_start_char(first) && chars.all(is_name_char));
    if valid {
        Ok(())
    } else {
        Err(MarshalError::invalid(format!("invalid XML name: '{name}'")))
    }
}

fn is_name_start_char(c: char) -> bool {
    matches!(c,
        ':' | '_' | 'A'..='Z' | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}'
            | '\u{300}'..='\u{36F}'
            | '\u{203F}'..='\u{2040}')
}
