//! Configuration management for the marshaler.
//!
//! All configuration is driven by environment variables.

use tracing::warn;

/// Global configuration for encode/decode calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarshalConfig {
    /// Maximum element nesting accepted by the encoder and the decoder.
    pub max_depth: usize,
}

impl MarshalConfig {
    /// Default nesting limit.
    pub const DEFAULT_MAX_DEPTH: usize = 256;

    /// Create a configuration with the given nesting limit.
    #[must_use]
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `XMLMARSHAL_MAX_DEPTH` | `256` |
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("XMLMARSHAL_MAX_DEPTH") {
            if let Some(depth) = parse_depth(&v) {
                config.max_depth = depth;
            } else {
                warn!(value = %v, "ignoring invalid XMLMARSHAL_MAX_DEPTH");
            }
        }

        config
    }
}

impl Default for MarshalConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

fn parse_depth(s: &str) -> Option<usize> {
    s.trim().parse::<usize>().ok().filter(|d| *d > 0)
}
