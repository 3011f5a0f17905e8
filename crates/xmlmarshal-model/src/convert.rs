//! Conversion between typed records and the generic value model.
//!
//! [`ToValue`] and [`FromValue`] play the part of a serialize/deserialize
//! pair for concrete structs. Decoded documents carry every scalar as a
//! string, so the [`FromValue`] implementations for numbers and booleans
//! accept both the native primitive and its text form.

use xmlmarshal_core::{MarshalError, MarshalResult};

use crate::value::{Primitive, Record, Value};

/// Trait for types that can be turned into a [`Value`].
pub trait ToValue {
    /// Build the generic representation of this value.
    fn to_value(&self) -> Value;
}

/// Trait for types that can be rebuilt from a [`Value`].
pub trait FromValue: Sized {
    /// Convert a generic value into this type.
    ///
    /// # Errors
    ///
    /// Returns [`MarshalError::Conversion`] if the value has the wrong shape
    /// or a scalar cannot be parsed.
    fn from_value(value: &Value) -> MarshalResult<Self>;
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl ToValue for Record {
    fn to_value(&self) -> Value {
        Value::Record(self.clone())
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::string(self)
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::string(self.as_str())
    }
}

impl ToValue for i64 {
    fn to_value(&self) -> Value {
        Value::from(*self)
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::from(*self)
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, ToValue::to_value)
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> MarshalResult<Self> {
        Ok(value.clone())
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> MarshalResult<Self> {
        match value {
            Value::Primitive(p) => Ok(p.to_string()),
            other => Err(shape_error("string", other)),
        }
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> MarshalResult<Self> {
        match value {
            Value::Primitive(Primitive::Integer(i)) => Ok(*i),
            Value::Primitive(Primitive::String(s)) => s
                .trim()
                .parse::<i64>()
                .map_err(|e| MarshalError::Conversion(format!("invalid integer '{s}': {e}"))),
            other => Err(shape_error("integer", other)),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> MarshalResult<Self> {
        match value {
            Value::Primitive(Primitive::Float(f)) => Ok(*f),
            #[allow(clippy::cast_precision_loss)]
            Value::Primitive(Primitive::Integer(i)) => Ok(*i as f64),
            Value::Primitive(Primitive::String(s)) => parse_float(s),
            other => Err(shape_error("number", other)),
        }
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> MarshalResult<Self> {
        match value {
            Value::Primitive(Primitive::Bool(b)) => Ok(*b),
            Value::Primitive(Primitive::String(s)) => match s.as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(MarshalError::Conversion(format!("invalid boolean: {s}"))),
            },
            other => Err(shape_error("boolean", other)),
        }
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value) -> MarshalResult<Self> {
        match value {
            Value::Null => Ok(Vec::new()),
            Value::List(items) => items.iter().map(T::from_value).collect(),
            single => Ok(vec![T::from_value(single)?]),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> MarshalResult<Self> {
        if value.is_absent() {
            return Ok(None);
        }
        T::from_value(value).map(Some)
    }
}

/// Read a required field of a record.
pub fn required_field<T: FromValue>(record: &Record, name: &str) -> MarshalResult<T> {
    let value = record
        .get(name)
        .ok_or_else(|| MarshalError::Conversion(format!("missing field: {name}")))?;
    T::from_value(value).map_err(|e| MarshalError::Conversion(format!("field '{name}': {e}")))
}

/// Read an optional field of a record.
pub fn optional_field<T: FromValue>(record: &Record, name: &str) -> MarshalResult<Option<T>> {
    let Some(value) = record.get(name) else {
        return Ok(None);
    };
    Option::<T>::from_value(value)
        .map_err(|e| MarshalError::Conversion(format!("field '{name}': {e}")))
}

/// Read a field as "zero or more" values, whatever its decoded cardinality.
pub fn repeated_field<T: FromValue>(record: &Record, name: &str) -> MarshalResult<Vec<T>> {
    record
        .items(name)
        .into_iter()
        .map(T::from_value)
        .collect::<MarshalResult<Vec<T>>>()
        .map_err(|e| MarshalError::Conversion(format!("field '{name}': {e}")))
}

fn parse_float(s: &str) -> MarshalResult<f64> {
    match s.trim() {
        "NaN" => Ok(f64::NAN),
        "Infinity" => Ok(f64::INFINITY),
        "-Infinity" => Ok(f64::NEG_INFINITY),
        t => t
            .parse::<f64>()
            .map_err(|e| MarshalError::Conversion(format!("invalid number '{s}': {e}"))),
    }
}

fn shape_error(expected: &str, found: &Value) -> MarshalError {
    let kind = match found {
        Value::Null => "null",
        Value::Opaque => "opaque value",
        Value::Primitive(_) => "primitive",
        Value::Record(_) => "record",
        Value::List(_) => "list",
    };
    MarshalError::Conversion(format!("expected {expected}, found {kind}"))
}
