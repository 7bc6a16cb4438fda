//! Wire value decoding
//!
//! Two phases: `ConverterBuilder::build` compiles a schema node and a declared
//! host target into a `Converter` once, then `Converter::convert` is applied
//! to any number of wire values.
//!
//! # Design Principles
//!
//! - Struct fields align by position, never by name
//! - Extra trailing wire elements are dropped by default
//! - Missing trailing elements take the target field's default
//! - Null is valid at every node and never coerced
//! - Every error carries the path to the failing node

mod builder;
mod converter;
mod path;

pub use builder::{build_converter, ConverterBuilder};
pub use converter::{Converter, FromHostValue, RecordReader, TypedConverter};
pub use path::{FieldPath, PathSegment};
