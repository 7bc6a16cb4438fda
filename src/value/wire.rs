//! Positional wire values exchanged with the engine
//!
//! A struct and a list are both a `Seq`; nothing in the wire value itself
//! tells them apart. An empty `Seq` is equally an empty list and a zero-field
//! struct.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::{json, Value};

/// Wire value tree
#[derive(Debug, Clone, PartialEq)]
pub enum WireValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    Date(NaiveDate),
    Time(NaiveTime),
    LocalDateTime(NaiveDateTime),
    OffsetDateTime(DateTime<FixedOffset>),
    /// Ordered sequence; struct fields or collection elements
    Seq(Vec<WireValue>),
}

impl WireValue {
    pub fn is_null(&self) -> bool {
        matches!(self, WireValue::Null)
    }

    pub fn as_seq(&self) -> Option<&[WireValue]> {
        match self {
            WireValue::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the shape name for error messages
    pub fn shape_name(&self) -> &'static str {
        match self {
            WireValue::Null => "null",
            WireValue::Bool(_) => "bool",
            WireValue::Int(_) => "int",
            WireValue::Float(_) => "float",
            WireValue::Str(_) => "str",
            WireValue::Bytes(_) => "bytes",
            WireValue::Date(_) => "date",
            WireValue::Time(_) => "time",
            WireValue::LocalDateTime(_) => "local_date_time",
            WireValue::OffsetDateTime(_) => "offset_date_time",
            WireValue::Seq(_) => "seq",
        }
    }

    /// Renders the value as JSON.
    ///
    /// Bytes become standard base64, temporal values ISO 8601 strings.
    /// Non-finite floats have no JSON form and render as null.
    pub fn to_json(&self) -> Value {
        match self {
            WireValue::Null => Value::Null,
            WireValue::Bool(b) => json!(b),
            WireValue::Int(i) => json!(i),
            WireValue::Float(f) => json!(f),
            WireValue::Str(s) => json!(s),
            WireValue::Bytes(bytes) => json!(STANDARD.encode(bytes)),
            WireValue::Date(d) => json!(d.format("%Y-%m-%d").to_string()),
            WireValue::Time(t) => json!(t.format("%H:%M:%S%.f").to_string()),
            WireValue::LocalDateTime(dt) => json!(dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string()),
            WireValue::OffsetDateTime(dt) => json!(dt.to_rfc3339()),
            WireValue::Seq(items) => Value::Array(items.iter().map(WireValue::to_json).collect()),
        }
    }
}

impl fmt::Display for WireValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl From<bool> for WireValue {
    fn from(v: bool) -> Self {
        WireValue::Bool(v)
    }
}

impl From<i64> for WireValue {
    fn from(v: i64) -> Self {
        WireValue::Int(v)
    }
}

impl From<f64> for WireValue {
    fn from(v: f64) -> Self {
        WireValue::Float(v)
    }
}

impl From<&str> for WireValue {
    fn from(v: &str) -> Self {
        WireValue::Str(v.to_string())
    }
}

impl From<String> for WireValue {
    fn from(v: String) -> Self {
        WireValue::Str(v)
    }
}

impl From<Vec<WireValue>> for WireValue {
    fn from(v: Vec<WireValue>) -> Self {
        WireValue::Seq(v)
    }
}

impl<T: Into<WireValue>> From<Option<T>> for WireValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(WireValue::Null, Into::into)
    }
}
