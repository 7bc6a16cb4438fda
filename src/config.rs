//! Converter configuration
//!
//! Controls the few decode-side policies that are not fixed by the schema:
//! what to do with trailing wire elements and which scalar coercions the
//! builder may compile in. Encoding is not configurable.

use serde::Deserialize;

use crate::errors::{BridgeError, BridgeResult};

/// Policy for wire sequences longer than both the struct schema and the
/// target record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingFieldPolicy {
    /// Drop extra elements (forward compatibility with newer engines)
    #[default]
    Ignore,
    /// Fail the decode with a schema mismatch
    Reject,
}

/// Configuration consumed by `ConverterBuilder`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Handling of wire elements beyond the schema and target field counts.
    pub trailing_fields: TrailingFieldPolicy,
    /// Decode 16-byte uuid wire values into `Uuid` host values.
    pub uuid_from_bytes: bool,
    /// Allow int64 wire values to decode into float targets.
    pub widen_int_to_float: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            trailing_fields: TrailingFieldPolicy::Ignore,
            uuid_from_bytes: true,
            widen_int_to_float: true,
        }
    }
}

impl BridgeConfig {
    /// Config that rejects trailing elements and disables int to float
    /// widening. The uuid coercion stays on since it is lossless.
    pub fn strict() -> Self {
        Self {
            trailing_fields: TrailingFieldPolicy::Reject,
            uuid_from_bytes: true,
            widen_int_to_float: false,
        }
    }

    /// Parses a config from JSON. Missing keys take their defaults.
    pub fn from_json(input: &str) -> BridgeResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| BridgeError::malformed_schema(format!("invalid bridge config: {}", e)))
    }

    /// Check if trailing wire elements are dropped silently.
    pub fn ignores_trailing_fields(&self) -> bool {
        self.trailing_fields == TrailingFieldPolicy::Ignore
    }
}
