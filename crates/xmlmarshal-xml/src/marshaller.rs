//! The marshaler façade.

use tracing::debug;
use xmlmarshal_core::{MarshalConfig, MarshalResult};
use xmlmarshal_model::{FromValue, ToValue, Value};

use crate::decode::decode_document;
use crate::encode::encode_document;
use crate::reader::read_document;
use crate::writer::write_document;

/// Stateless XML marshaler.
///
/// A `Marshaller` only carries its immutable [`MarshalConfig`]; it is
/// `Copy` and may be shared freely between threads. Each call either
/// returns a complete result or fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Marshaller {
    config: MarshalConfig,
}

impl Marshaller {
    /// Create a marshaler with the given configuration.
    #[must_use]
    pub fn new(config: MarshalConfig) -> Self {
        Self { config }
    }

    /// Create a marshaler configured from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(MarshalConfig::from_env())
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(self) -> MarshalConfig {
        self.config
    }

    /// Encode `value` as a document whose element is named `root_name`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `value` is null, opaque or a list, or if a
    ///   name is not a valid XML name
    /// - `ResourceExhaustion` if nesting exceeds the configured depth
    pub fn encode(self, value: &Value, root_name: &str) -> MarshalResult<String> {
        let root = encode_document(value, root_name, self.config.max_depth)?;
        let xml = write_document(&root)?;
        debug!(root = root_name, bytes = xml.len(), "encoded XML document");
        Ok(xml)
    }

    /// Decode a document into a record carrying the synthetic `type` field.
    ///
    /// # Errors
    ///
    /// - `Parse` if the text is not well-formed XML
    /// - `ResourceExhaustion` if nesting exceeds the configured depth
    pub fn decode(self, xml: &str) -> MarshalResult<Value> {
        let root = read_document(xml, self.config.max_depth)?;
        debug!(root = %root.name, bytes = xml.len(), "decoded XML document");
        Ok(decode_document(&root))
    }

    /// Encode a typed record.
    pub fn encode_typed<T: ToValue + ?Sized>(
        self,
        value: &T,
        root_name: &str,
    ) -> MarshalResult<String> {
        self.encode(&value.to_value(), root_name)
    }

    /// Decode a document into a typed record.
    pub fn decode_typed<T: FromValue>(self, xml: &str) -> MarshalResult<T> {
        T::from_value(&self.decode(xml)?)
    }
}

/// Encode with the default configuration. See [`Marshaller::encode`].
pub fn encode(value: &Value, root_name: &str) -> MarshalResult<String> {
    Marshaller::default().encode(value, root_name)
}

/// Decode with the default configuration. See [`Marshaller::decode`].
pub fn decode(xml: &str) -> MarshalResult<Value> {
    Marshaller::default().decode(xml)
}
