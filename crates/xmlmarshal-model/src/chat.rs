//! Chat entry records exchanged by the chat client.

use xmlmarshal_core::{MarshalError, MarshalResult};

use crate::convert::{FromValue, ToValue, repeated_field, required_field};
use crate::value::{Record, Value};

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChatEntry {
    /// Author alias.
    pub alias: String,
    /// Message text.
    pub content: String,
    /// Creation time in milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl ChatEntry {
    /// Root element of a single entry document.
    pub const ROOT: &'static str = "chatEntry";
    /// Root element of an entry list document.
    pub const LIST_ROOT: &'static str = "chatEntries";

    /// Create an entry.
    #[must_use]
    pub fn new(alias: impl Into<String>, content: impl Into<String>, timestamp: i64) -> Self {
        Self {
            alias: alias.into(),
            content: content.into(),
            timestamp,
        }
    }

    /// Read every entry of a decoded list document.
    ///
    /// A list document with no entries decodes to a bare record, one entry
    /// to a scalar field and several to a list field; all three are accepted.
    pub fn list_from_value(value: &Value) -> MarshalResult<Vec<Self>> {
        let Some(record) = value.as_record() else {
            return Err(MarshalError::Conversion(
                "chat entry list must be a record".to_owned(),
            ));
        };
        repeated_field(record, Self::ROOT)
    }

    /// Build the generic form of an entry list document.
    #[must_use]
    pub fn list_to_value(entries: &[Self]) -> Value {
        Value::Record(Record::new().with(Self::ROOT, entries.to_value()))
    }
}

impl ToValue for ChatEntry {
    fn to_value(&self) -> Value {
        Value::Record(
            Record::new()
                .with("alias", self.alias.as_str())
                .with("content", self.content.as_str())
                .with("timestamp", self.timestamp),
        )
    }
}

impl FromValue for ChatEntry {
    fn from_value(value: &Value) -> MarshalResult<Self> {
        let Some(record) = value.as_record() else {
            return Err(MarshalError::Conversion(
                "chat entry must be a record".to_owned(),
            ));
        };

        Ok(Self {
            alias: required_field(record, "alias")?,
            content: required_field(record, "content")?,
            timestamp: required_field(record, "timestamp")?,
        })
    }
}
