//! Schema loading from the engine's JSON description
//!
//! The engine (or whatever describes host types for it) hands schemas over as
//! JSON. Loading parses and then validates the node tree, so a converter is
//! never compiled against a structurally broken schema.

use serde_json::Value;

use super::types::SchemaNode;
use crate::errors::{BridgeError, BridgeResult};

/// Parses and validates a schema from a JSON string.
pub fn load_schema(input: &str) -> BridgeResult<SchemaNode> {
    let node: SchemaNode = serde_json::from_str(input)
        .map_err(|e| BridgeError::malformed_schema(format!("invalid JSON: {}", e)))?;
    checked(node)
}

/// Parses and validates a schema from an already decoded JSON value.
pub fn load_schema_value(value: Value) -> BridgeResult<SchemaNode> {
    let node: SchemaNode = serde_json::from_value(value)
        .map_err(|e| BridgeError::malformed_schema(format!("invalid schema: {}", e)))?;
    checked(node)
}

fn checked(node: SchemaNode) -> BridgeResult<SchemaNode> {
    node.validate_structure()
        .map_err(BridgeError::malformed_schema)?;
    Ok(node)
}
