//! The tagged value model.
//!
//! A [`Value`] is a tree by construction: every node owns its children, so
//! no value can reference one of its ancestors. Producers build values
//! explicitly, and the marshaler dispatches on the variant instead of
//! inspecting runtime types.

use std::fmt;

use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter};

/// A scalar carried as element text or attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A string.
    String(String),
    /// A whole number.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A boolean.
    Bool(bool),
}

impl Primitive {
    /// Returns the string slice if this is a string primitive.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Canonical text form: `5`, `1.5`, `true`, `NaN`, `-Infinity`, `1e+21`.
impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
            Self::Float(n) => write_float(f, *n),
        }
    }
}

/// Shortest round-trip digits, switching to exponent form below `1e-6` and
/// from `1e21` upwards. The exponent always carries its sign.
fn write_float(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        return f.write_str("NaN");
    }
    if n.is_infinite() {
        return f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
    }
    // -0 prints as 0
    if n == 0.0 {
        return f.write_str("0");
    }

    let magnitude = n.abs();
    if (EXPONENT_BELOW..EXPONENT_FROM).contains(&magnitude) {
        return write!(f, "{n}");
    }
    let text = format!("{n:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{mantissa}e+{exponent}")
        }
        _ => f.write_str(&text),
    }
}

const EXPONENT_BELOW: f64 = 1e-6;
const EXPONENT_FROM: f64 = 1e21;

/// A node of the object graph handed to, or returned by, the marshaler.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// An absent value. Skipped as a field, rejected at the top level.
    #[default]
    Null,
    /// A producer-side value without a data representation, such as a
    /// callback or a handle. Treated like [`Value::Null`] by the encoder.
    Opaque,
    /// A string, number or boolean.
    Primitive(Primitive),
    /// An ordered set of named fields.
    Record(Record),
    /// A sequence of values. Only meaningful as a field value.
    List(Vec<Value>),
}

impl Value {
    /// Shorthand for a string primitive.
    #[must_use]
    pub fn string(s: impl Into<String>) -> Self {
        Self::Primitive(Primitive::String(s.into()))
    }

    /// Returns true for [`Value::Null`] and [`Value::Opaque`], the values
    /// that never reach the wire.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Null | Self::Opaque)
    }

    /// Returns true if this value is a list.
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns the primitive if this is one.
    #[must_use]
    pub fn as_primitive(&self) -> Option<&Primitive> {
        match self {
            Self::Primitive(p) => Some(p),
            _ => None,
        }
    }

    /// Returns the string slice if this is a string primitive.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_primitive().and_then(Primitive::as_str)
    }

    /// Returns the record if this is one.
    #[must_use]
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Returns the mutable record if this is one.
    pub fn as_record_mut(&mut self) -> Option<&mut Record> {
        match self {
            Self::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Look up a field when this value is a record.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.as_record().and_then(|r| r.get(name))
    }

    /// All values of a field regardless of how many elements produced it:
    /// none when absent, one when scalar, every item when a list.
    ///
    /// Decoded records only use list fields for repeated elements, so callers
    /// that expect "zero or more" should read through this.
    #[must_use]
    pub fn items(&self, name: &str) -> Vec<&Value> {
        self.as_record().map(|r| r.items(name)).unwrap_or_default()
    }
}

impl From<Primitive> for Value {
    fn from(p: Primitive) -> Self {
        Self::Primitive(p)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::string(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Primitive(Primitive::Integer(i))
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Primitive(Primitive::Integer(i64::from(i)))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Primitive(Primitive::Float(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Primitive(Primitive::Bool(b))
    }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self {
        Self::Record(r)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// An ordered mapping from field name to value.
///
/// Field names starting with `@` are attributes on the wire, every other
/// name is a child element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record(IndexMap<String, Value>);

impl Record {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a chain of layers into a single record.
    ///
    /// Layers are given nearest first (a derived definition before its
    /// base). The nearest definition of a field wins; fields keep the order
    /// of the layer that contributed them, nearest layer first, followed by
    /// the unshadowed fields of outer layers.
    #[must_use]
    pub fn flatten<I>(layers: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        let mut merged = IndexMap::new();
        for layer in layers {
            for (name, value) in layer.0 {
                merged.entry(name).or_insert(value);
            }
        }
        Self(merged)
    }

    /// Insert a field, returning the previous value of that name. A
    /// replaced field keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    /// Builder-style [`Record::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up a field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Look up a field mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.0.get_mut(name)
    }

    /// Remove a field, preserving the order of the others.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.shift_remove(name)
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over fields in order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.0.iter()
    }

    /// See [`Value::items`].
    #[must_use]
    pub fn items(&self, name: &str) -> Vec<&Value> {
        match self.0.get(name) {
            None => Vec::new(),
            Some(Value::List(items)) => items.iter().collect(),
            Some(v) => vec![v],
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Build a [`Record`] from `name => value` pairs.
///
/// ```
/// use xmlmarshal_model::record;
///
/// let r = record! { "@id" => 5, "name" => "a" };
/// assert_eq!(r.len(), 2);
/// ```
#[macro_export]
macro_rules! record {
    () => { $crate::Record::new() };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut r = $crate::Record::new();
        $( r.insert($name, $value); )+
        r
    }};
}
