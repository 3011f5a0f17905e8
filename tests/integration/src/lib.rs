//! Integration tests for the xmlmarshal crates.
//!
//! These tests drive the public API end to end: typed records and JSON
//! text through the value model, the marshaler and back.
//!
//! Run them with:
//! ```text
//! cargo test -p xmlmarshal-integration
//! ```

use std::sync::Once;

use xmlmarshal_model::Value;
use xmlmarshal_xml::Marshaller;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Create a marshaler with the default configuration.
#[must_use]
pub fn marshaller() -> Marshaller {
    init_tracing();
    Marshaller::default()
}

/// Remove the synthetic `type` field from a decoded document.
#[must_use]
pub fn without_type(mut value: Value) -> Value {
    if let Some(record) = value.as_record_mut() {
        record.remove("type");
    }
    value
}

mod test_chat;
mod test_decode;
mod test_encode;
mod test_round_trip;
