//! Compiled converters and typed extraction
//!
//! A `Converter` is the closure tree produced by `ConverterBuilder`. It is
//! immutable, `Send + Sync`, and cheap to clone (clones share the tree).

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use uuid::Uuid;

use super::path::{FieldPath, PathSegment};
use crate::errors::{BridgeError, BridgeResult};
use crate::value::{Bytes, HostType, HostValue, WireValue};

type DecodeFn = dyn Fn(&WireValue) -> BridgeResult<HostValue> + Send + Sync;

/// Reusable decode function for one (schema, target) pair
#[derive(Clone)]
pub struct Converter {
    decode: Arc<DecodeFn>,
}

impl Converter {
    pub(crate) fn new<F>(decode: F) -> Self
    where
        F: Fn(&WireValue) -> BridgeResult<HostValue> + Send + Sync + 'static,
    {
        Self {
            decode: Arc::new(decode),
        }
    }

    /// Decodes one wire value.
    ///
    /// Holds no state between calls; safe to call concurrently.
    pub fn convert(&self, wire: &WireValue) -> BridgeResult<HostValue> {
        (self.decode)(wire)
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter").finish_non_exhaustive()
    }
}

/// Host types that can be extracted from a decoded `HostValue`.
///
/// `host_type` is the decode target the converter is compiled against;
/// `from_host_value` unpacks the decoded value into `Self`.
pub trait FromHostValue: Sized {
    fn host_type() -> HostType;

    fn from_host_value(value: HostValue) -> BridgeResult<Self>;
}

fn extraction_mismatch(expected: &HostType, actual: &HostValue) -> BridgeError {
    BridgeError::schema_mismatch(FieldPath::root(), expected.type_name(), actual.type_name())
}

macro_rules! scalar_from_host_value {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl FromHostValue for $ty {
                fn host_type() -> HostType {
                    HostType::$variant
                }

                fn from_host_value(value: HostValue) -> BridgeResult<Self> {
                    match value {
                        HostValue::$variant(v) => Ok(v),
                        other => Err(extraction_mismatch(&HostType::$variant, &other)),
                    }
                }
            }
        )+
    };
}

scalar_from_host_value!(
    bool => Bool,
    i64 => Int,
    f64 => Float,
    String => Str,
    Uuid => Uuid,
    NaiveDate => Date,
    NaiveTime => Time,
    NaiveDateTime => LocalDateTime,
    DateTime<FixedOffset> => OffsetDateTime,
);

// Narrower widths accept only ints that fit.
macro_rules! narrow_int_from_host_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromHostValue for $ty {
                fn host_type() -> HostType {
                    HostType::Int
                }

                fn from_host_value(value: HostValue) -> BridgeResult<Self> {
                    match value {
                        HostValue::Int(v) => <$ty>::try_from(v).map_err(|_| {
                            BridgeError::schema_mismatch(
                                FieldPath::root(),
                                stringify!($ty),
                                format!("out-of-range int {}", v),
                            )
                        }),
                        other => Err(extraction_mismatch(&HostType::Int, &other)),
                    }
                }
            }
        )+
    };
}

narrow_int_from_host_value!(i8, i16, i32, u8, u16, u32);

impl FromHostValue for f32 {
    fn host_type() -> HostType {
        HostType::Float
    }

    fn from_host_value(value: HostValue) -> BridgeResult<Self> {
        match value {
            HostValue::Float(v) => Ok(v as f32),
            other => Err(extraction_mismatch(&HostType::Float, &other)),
        }
    }
}

impl FromHostValue for DateTime<Utc> {
    fn host_type() -> HostType {
        HostType::OffsetDateTime
    }

    fn from_host_value(value: HostValue) -> BridgeResult<Self> {
        match value {
            HostValue::OffsetDateTime(v) => Ok(v.with_timezone(&Utc)),
            other => Err(extraction_mismatch(&HostType::OffsetDateTime, &other)),
        }
    }
}

impl FromHostValue for Bytes {
    fn host_type() -> HostType {
        HostType::Bytes
    }

    fn from_host_value(value: HostValue) -> BridgeResult<Self> {
        match value {
            HostValue::Bytes(v) => Ok(Bytes(v)),
            other => Err(extraction_mismatch(&HostType::Bytes, &other)),
        }
    }
}

impl<T: FromHostValue> FromHostValue for Option<T> {
    fn host_type() -> HostType {
        HostType::optional(T::host_type())
    }

    fn from_host_value(value: HostValue) -> BridgeResult<Self> {
        match value {
            HostValue::Null => Ok(None),
            other => T::from_host_value(other).map(Some),
        }
    }
}

impl<T: FromHostValue> FromHostValue for Vec<T> {
    fn host_type() -> HostType {
        HostType::list(T::host_type())
    }

    fn from_host_value(value: HostValue) -> BridgeResult<Self> {
        match value {
            HostValue::List(items) | HostValue::Tuple(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| {
                    T::from_host_value(item).map_err(|e| e.nested_in(PathSegment::Index(i)))
                })
                .collect(),
            other => Err(extraction_mismatch(&Self::host_type(), &other)),
        }
    }
}

impl FromHostValue for HostValue {
    fn host_type() -> HostType {
        HostType::Any
    }

    fn from_host_value(value: HostValue) -> BridgeResult<Self> {
        Ok(value)
    }
}

/// Reads the fields of a decoded record in declaration order.
///
/// Host record types use it to implement `FromHostValue`:
///
/// ```ignore
/// let mut fields = RecordReader::new(value, "Tag")?;
/// Ok(Tag { name: fields.next_field()? })
/// ```
#[derive(Debug)]
pub struct RecordReader {
    fields: std::vec::IntoIter<(String, HostValue)>,
    position: usize,
}

impl RecordReader {
    /// Opens a record value, checking it was built for `type_name`.
    pub fn new(value: HostValue, type_name: &str) -> BridgeResult<Self> {
        match value {
            HostValue::Record(record) if record.type_name == type_name => Ok(Self {
                fields: record.fields.into_iter(),
                position: 0,
            }),
            other => Err(BridgeError::schema_mismatch(
                FieldPath::root(),
                type_name,
                other.type_name(),
            )),
        }
    }

    /// Extracts the next field.
    pub fn next_field<T: FromHostValue>(&mut self) -> BridgeResult<T> {
        let position = self.position;
        self.position += 1;
        let (name, value) = self.fields.next().ok_or_else(|| {
            BridgeError::missing_field(format!("#{}", position), FieldPath::root().index(position))
        })?;
        T::from_host_value(value).map_err(|e| e.nested_in(PathSegment::Field(name)))
    }
}

/// Converter whose output is extracted into `T`
pub struct TypedConverter<T> {
    inner: Converter,
    _target: PhantomData<fn() -> T>,
}

impl<T: FromHostValue> TypedConverter<T> {
    pub(crate) fn new(inner: Converter) -> Self {
        Self {
            inner,
            _target: PhantomData,
        }
    }

    pub fn convert(&self, wire: &WireValue) -> BridgeResult<T> {
        T::from_host_value(self.inner.convert(wire)?)
    }

    /// Returns the underlying dynamic converter.
    pub fn untyped(&self) -> &Converter {
        &self.inner
    }
}

impl<T> Clone for TypedConverter<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _target: PhantomData,
        }
    }
}

impl<T> fmt::Debug for TypedConverter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedConverter")
            .field("target", &std::any::type_name::<T>())
            .finish()
    }
}
