//! valuebridge - schema-driven marshalling between host records and engine values
//!
//! Two mirror pipelines over one positional wire representation:
//!
//! - `encode`: host value → wire value, driven by the value's own shape
//! - `convert`: schema + declared host type → compiled converter, then
//!   wire value → host value any number of times

pub mod config;
pub mod convert;
pub mod encode;
pub mod errors;
pub mod schema;
pub mod value;

pub use config::{BridgeConfig, TrailingFieldPolicy};
pub use convert::{build_converter, Converter, ConverterBuilder, FieldPath, TypedConverter};
pub use encode::{encode, ToEngineValue};
pub use errors::{BridgeError, BridgeErrorCode, BridgeResult};
pub use schema::SchemaNode;
pub use value::{Bytes, HostType, HostValue, WireValue};
