//! Generic element tree shared by the reader, the writer, the encoder and
//! the decoder.

/// An XML element.
///
/// Only leaves carry text: the reader drops text of elements that turn out
/// to have child elements, and the encoder never sets both.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    /// Tag name.
    pub name: String,
    /// Attributes in document order.
    pub attributes: Vec<(String, String)>,
    /// Child elements in document order.
    pub children: Vec<Node>,
    /// Text content of a leaf.
    pub text: Option<String>,
}

impl Node {
    /// Create an empty element.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set an attribute. An existing attribute of the same name keeps its
    /// position and takes the new value.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some((_, existing)) = self.attributes.iter_mut().find(|(n, _)| n == name) {
            *existing = value;
        } else {
            self.attributes.push((name.to_owned(), value));
        }
    }

    /// Look up an attribute value.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Attributes as borrowed name/value pairs, in document order.
    pub fn attribute_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Append a child element.
    pub fn append_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Append to the text content.
    pub fn push_text(&mut self, text: &str) {
        self.text.get_or_insert_with(String::new).push_str(text);
    }

    /// Replace the text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Text content, empty when none was set.
    #[must_use]
    pub fn text_content(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    /// Returns true if the element has neither attributes nor child elements.
    #[must_use]
    pub fn is_bare(&self) -> bool {
        self.attributes.is_empty() && self.children.is_empty()
    }
}
