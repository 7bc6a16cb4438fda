//! Bridge error types
//!
//! Error codes:
//! - BRIDGE_UNSUPPORTED_TYPE
//! - BRIDGE_SCHEMA_MISMATCH
//! - BRIDGE_MISSING_FIELD
//! - BRIDGE_MALFORMED_SCHEMA
//!
//! Every error raised while walking a value carries the path at which it was
//! detected. Errors are terminal for the encode/decode call that raised them.

use std::fmt;

use thiserror::Error;

use crate::convert::{FieldPath, PathSegment};

/// Stable error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeErrorCode {
    /// Value shape or scalar pairing has no rule
    BridgeUnsupportedType,
    /// Wire shape, schema node and target kind disagree
    BridgeSchemaMismatch,
    /// Wire value too short and no default declared
    BridgeMissingField,
    /// Schema description could not be parsed or is structurally invalid
    BridgeMalformedSchema,
}

impl BridgeErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            BridgeErrorCode::BridgeUnsupportedType => "BRIDGE_UNSUPPORTED_TYPE",
            BridgeErrorCode::BridgeSchemaMismatch => "BRIDGE_SCHEMA_MISMATCH",
            BridgeErrorCode::BridgeMissingField => "BRIDGE_MISSING_FIELD",
            BridgeErrorCode::BridgeMalformedSchema => "BRIDGE_MALFORMED_SCHEMA",
        }
    }
}

impl fmt::Display for BridgeErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors raised by encoding, converter compilation and decoding
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BridgeError {
    #[error("unsupported type `{type_name}` at {path}")]
    UnsupportedType { type_name: String, path: FieldPath },

    #[error("schema mismatch at {path}: expected {expected}, got {actual}")]
    SchemaMismatch {
        path: FieldPath,
        expected: String,
        actual: String,
    },

    #[error("missing field `{field}` at {path}: no wire value and no default")]
    MissingField { field: String, path: FieldPath },

    #[error("malformed schema: {reason}")]
    MalformedSchema { reason: String },
}

impl BridgeError {
    pub fn unsupported_type(type_name: impl Into<String>, path: FieldPath) -> Self {
        BridgeError::UnsupportedType {
            type_name: type_name.into(),
            path,
        }
    }

    pub fn schema_mismatch(
        path: FieldPath,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        BridgeError::SchemaMismatch {
            path,
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>, path: FieldPath) -> Self {
        BridgeError::MissingField {
            field: field.into(),
            path,
        }
    }

    pub fn malformed_schema(reason: impl Into<String>) -> Self {
        BridgeError::MalformedSchema {
            reason: reason.into(),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> BridgeErrorCode {
        match self {
            BridgeError::UnsupportedType { .. } => BridgeErrorCode::BridgeUnsupportedType,
            BridgeError::SchemaMismatch { .. } => BridgeErrorCode::BridgeSchemaMismatch,
            BridgeError::MissingField { .. } => BridgeErrorCode::BridgeMissingField,
            BridgeError::MalformedSchema { .. } => BridgeErrorCode::BridgeMalformedSchema,
        }
    }

    /// Returns the path the error was raised at, if it has one
    pub fn path(&self) -> Option<&FieldPath> {
        match self {
            BridgeError::UnsupportedType { path, .. }
            | BridgeError::SchemaMismatch { path, .. }
            | BridgeError::MissingField { path, .. } => Some(path),
            BridgeError::MalformedSchema { .. } => None,
        }
    }

    /// Prefixes the error path with `segment`.
    ///
    /// Used while an error unwinds out of a nested value, so the outermost
    /// caller sees the full path from the root.
    pub fn nested_in(mut self, segment: PathSegment) -> Self {
        match &mut self {
            BridgeError::UnsupportedType { path, .. }
            | BridgeError::SchemaMismatch { path, .. }
            | BridgeError::MissingField { path, .. } => path.prepend(segment),
            BridgeError::MalformedSchema { .. } => {}
        }
        self
    }

    /// Pins the collection wildcard at `depth` to element `i`.
    pub fn at_element(mut self, depth: usize, i: usize) -> Self {
        match &mut self {
            BridgeError::UnsupportedType { path, .. }
            | BridgeError::SchemaMismatch { path, .. }
            | BridgeError::MissingField { path, .. } => path.resolve_element(depth, i),
            BridgeError::MalformedSchema { .. } => {}
        }
        self
    }
}

/// Result type for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;
