//! JSON interop.
//!
//! The same resources travel as JSON or as XML. JSON objects map onto
//! records, arrays onto lists and `null` onto [`Value::Null`]. Opaque values
//! have no JSON form: they are dropped from objects and become `null` inside
//! arrays or at the top level. Non-finite floats become `null` as well.

use serde_json::{Map, Number};
use xmlmarshal_core::MarshalResult;

use crate::value::{Primitive, Record, Value};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::from(b),
            serde_json::Value::Number(n) => number_to_value(&n),
            serde_json::Value::String(s) => Self::string(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => Self::Record(map.into_iter().collect()),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null | Value::Opaque => Self::Null,
            Value::Primitive(p) => primitive_to_json(p),
            Value::List(items) => Self::Array(items.iter().map(Self::from).collect()),
            Value::Record(r) => Self::Object(record_to_json(r)),
        }
    }
}

fn number_to_value(n: &Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::from(i)
    } else {
        Value::from(n.as_f64().unwrap_or(f64::NAN))
    }
}

fn primitive_to_json(p: &Primitive) -> serde_json::Value {
    match p {
        Primitive::String(s) => serde_json::Value::String(s.clone()),
        Primitive::Integer(i) => serde_json::Value::from(*i),
        Primitive::Bool(b) => serde_json::Value::Bool(*b),
        Primitive::Float(f) => {
            Number::from_f64(*f).map_or(serde_json::Value::Null, serde_json::Value::Number)
        }
    }
}

fn record_to_json(record: &Record) -> Map<String, serde_json::Value> {
    record
        .iter()
        .filter(|(_, v)| !matches!(v, Value::Opaque))
        .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
        .collect()
}

impl Value {
    /// Parse JSON text into a value.
    pub fn from_json_str(text: &str) -> MarshalResult<Self> {
        let json: serde_json::Value = serde_json::from_str(text)?;
        Ok(Self::from(json))
    }

    /// Render this value as indented JSON text.
    pub fn to_json_string_pretty(&self) -> MarshalResult<String> {
        let json = serde_json::Value::from(self);
        Ok(serde_json::to_string_pretty(&json)?)
    }
}
