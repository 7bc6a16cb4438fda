//! Host-side values and type descriptors
//!
//! `HostValue` is the dynamic form of a value in the calling system.
//! `HostType` is what the caller declares it expects back from a decode, and
//! `RecordDescriptor` lists a record type's fields in declaration order along
//! with their defaults.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use uuid::Uuid;

/// Dynamic host value
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    /// Absent / optional-none
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    Uuid(Uuid),
    Date(NaiveDate),
    Time(NaiveTime),
    LocalDateTime(NaiveDateTime),
    OffsetDateTime(DateTime<FixedOffset>),
    List(Vec<HostValue>),
    Tuple(Vec<HostValue>),
    Record(RecordValue),
    /// Keyed mapping; has no positional wire form
    Map(Vec<(HostValue, HostValue)>),
}

impl HostValue {
    pub fn is_null(&self) -> bool {
        matches!(self, HostValue::Null)
    }

    /// Returns the type name for error messages
    pub fn type_name(&self) -> &str {
        match self {
            HostValue::Null => "null",
            HostValue::Bool(_) => "bool",
            HostValue::Int(_) => "int",
            HostValue::Float(_) => "float",
            HostValue::Str(_) => "str",
            HostValue::Bytes(_) => "bytes",
            HostValue::Uuid(_) => "uuid",
            HostValue::Date(_) => "date",
            HostValue::Time(_) => "time",
            HostValue::LocalDateTime(_) => "local_date_time",
            HostValue::OffsetDateTime(_) => "offset_date_time",
            HostValue::List(_) => "list",
            HostValue::Tuple(_) => "tuple",
            HostValue::Record(record) => &record.type_name,
            HostValue::Map(_) => "map",
        }
    }
}

impl From<bool> for HostValue {
    fn from(v: bool) -> Self {
        HostValue::Bool(v)
    }
}

impl From<i64> for HostValue {
    fn from(v: i64) -> Self {
        HostValue::Int(v)
    }
}

impl From<f64> for HostValue {
    fn from(v: f64) -> Self {
        HostValue::Float(v)
    }
}

impl From<&str> for HostValue {
    fn from(v: &str) -> Self {
        HostValue::Str(v.to_string())
    }
}

impl From<String> for HostValue {
    fn from(v: String) -> Self {
        HostValue::Str(v)
    }
}

impl From<Uuid> for HostValue {
    fn from(v: Uuid) -> Self {
        HostValue::Uuid(v)
    }
}

impl From<Bytes> for HostValue {
    fn from(v: Bytes) -> Self {
        HostValue::Bytes(v.0)
    }
}

impl From<RecordValue> for HostValue {
    fn from(v: RecordValue) -> Self {
        HostValue::Record(v)
    }
}

impl From<Vec<HostValue>> for HostValue {
    fn from(v: Vec<HostValue>) -> Self {
        HostValue::List(v)
    }
}

/// Owned byte string
///
/// `Vec<u8>` encodes as a sequence of ints like any other `Vec`; wrap it in
/// `Bytes` to send and receive the engine's bytes kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bytes(pub Vec<u8>);

impl Bytes {
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(v: Vec<u8>) -> Self {
        Bytes(v)
    }
}

impl From<&[u8]> for Bytes {
    fn from(v: &[u8]) -> Self {
        Bytes(v.to_vec())
    }
}

/// Instance of a host record type, fields in declaration order
#[derive(Debug, Clone, PartialEq)]
pub struct RecordValue {
    pub type_name: String,
    pub fields: Vec<(String, HostValue)>,
}

impl RecordValue {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field; declaration order is call order.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<HostValue>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&HostValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Declared target type of a decode
#[derive(Debug, Clone, PartialEq)]
pub enum HostType {
    /// No annotation; scalars and lists of scalars pass through untyped
    Any,
    Bool,
    Int,
    Float,
    Str,
    Bytes,
    Uuid,
    Date,
    Time,
    LocalDateTime,
    OffsetDateTime,
    /// Value may be absent
    Optional(Box<HostType>),
    List(Box<HostType>),
    Record(Arc<RecordDescriptor>),
}

impl HostType {
    pub fn optional(inner: HostType) -> Self {
        HostType::Optional(Box::new(inner))
    }

    pub fn list(element: HostType) -> Self {
        HostType::List(Box::new(element))
    }

    pub fn record(descriptor: RecordDescriptor) -> Self {
        HostType::Record(Arc::new(descriptor))
    }

    /// Strips any number of `Optional` layers.
    ///
    /// Absence is accepted at every node, so optionality never changes how a
    /// node is compiled.
    pub fn without_optional(&self) -> &HostType {
        match self {
            HostType::Optional(inner) => inner.without_optional(),
            other => other,
        }
    }

    /// Returns the type name for error messages
    pub fn type_name(&self) -> String {
        match self {
            HostType::Any => "any".into(),
            HostType::Bool => "bool".into(),
            HostType::Int => "int".into(),
            HostType::Float => "float".into(),
            HostType::Str => "str".into(),
            HostType::Bytes => "bytes".into(),
            HostType::Uuid => "uuid".into(),
            HostType::Date => "date".into(),
            HostType::Time => "time".into(),
            HostType::LocalDateTime => "local_date_time".into(),
            HostType::OffsetDateTime => "offset_date_time".into(),
            HostType::Optional(inner) => format!("optional<{}>", inner.type_name()),
            HostType::List(element) => format!("list<{}>", element.type_name()),
            HostType::Record(descriptor) => descriptor.type_name.clone(),
        }
    }
}

/// Declared field of a host record type
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    pub ty: HostType,
    /// Value used when the wire sequence is too short
    pub default: Option<HostValue>,
}

/// Declared layout of a host record type
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDescriptor {
    pub type_name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl RecordDescriptor {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Declares a field without a default.
    pub fn field(mut self, name: impl Into<String>, ty: HostType) -> Self {
        self.fields.push(FieldDescriptor {
            name: name.into(),
            ty,
            default: None,
        });
        self
    }

    /// Declares a field with a default.
    pub fn field_with_default(
        mut self,
        name: impl Into<String>,
        ty: HostType,
        default: impl Into<HostValue>,
    ) -> Self {
        self.fields.push(FieldDescriptor {
            name: name.into(),
            ty,
            default: Some(default.into()),
        });
        self
    }

    /// Builds an instance from field values in declaration order.
    ///
    /// Callers supply exactly one value per declared field.
    pub fn construct(&self, values: Vec<HostValue>) -> RecordValue {
        debug_assert_eq!(values.len(), self.fields.len());
        RecordValue {
            type_name: self.type_name.clone(),
            fields: self
                .fields
                .iter()
                .map(|field| field.name.clone())
                .zip(values)
                .collect(),
        }
    }
}
