//! Error types for marshaling.

use std::io;

/// Errors that can occur while encoding or decoding a document.
///
/// Every operation either returns a complete result or fails with one of
/// these; no partial output is ever produced.
#[derive(Debug, thiserror::Error)]
pub enum MarshalError {
    /// The input cannot be marshaled: a null, opaque or list value at the
    /// top level, an invalid XML name, or a structured value in attribute
    /// position.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The document text is not well-formed XML.
    #[error("malformed XML at byte {position}: {message}")]
    Parse {
        /// What went wrong.
        message: String,
        /// Byte offset reported by the reader.
        position: u64,
    },

    /// Nesting exceeded the configured depth limit.
    #[error("nesting depth {depth} exceeds the configured limit")]
    ResourceExhaustion {
        /// The depth at which marshaling gave up.
        depth: usize,
    },

    /// An I/O error while writing the document.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An error converting from or to JSON text.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A generic value could not be converted into a typed record.
    #[error("conversion error: {0}")]
    Conversion(String),
}

impl MarshalError {
    /// Create an [`MarshalError::InvalidArgument`] from any message.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a [`MarshalError::Parse`] at the given byte offset.
    #[must_use]
    pub fn parse(message: impl Into<String>, position: u64) -> Self {
        Self::Parse {
            message: message.into(),
            position,
        }
    }
}

/// Convenience result type for marshaling operations.
pub type MarshalResult<T> = Result<T, MarshalError>;
