//! Host value encoder
//!
//! Turns a host value into its positional wire form without consulting any
//! schema; the value's own shape drives the result. Rules, in order:
//!
//! 1. absent → null
//! 2. int, float, string, bool → passthrough
//! 3. UUID → 16 canonical bytes
//! 4. date, time, datetime → passthrough as native temporal values
//! 5. records (`StructuredRecord`) → field values in declaration order
//! 6. lists, slices, arrays, tuples → elements in order (empty stays empty)
//! 7. anything else → `UnsupportedType`
//!
//! Encoding has no side effects and allocates only the output tree.

mod encoder;
mod impls;

pub use encoder::{encode, encode_record, encode_seq, StructuredRecord, ToEngineValue};
