//! Schema model shared by the encoder and the converter builder
//!
//! A schema node describes the expected shape of a wire value. The wire value
//! itself never says whether a sequence is a struct or a list, so decoding
//! always needs the node that accompanies it.
//!
//! # Design Principles
//!
//! - Struct field order is authoritative for wire positions
//! - Field names are diagnostics only
//! - Schemas are immutable once loaded

mod loader;
mod types;

pub use loader::{load_schema, load_schema_value};
pub use types::{BasicKind, CollectionKind, FieldSchema, SchemaNode};
