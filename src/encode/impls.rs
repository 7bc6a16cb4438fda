//! `ToEngineValue` implementations for std, chrono, uuid and host values

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use uuid::Uuid;

use super::encoder::{encode_record, encode_seq, StructuredRecord, ToEngineValue};
use crate::convert::{FieldPath, PathSegment};
use crate::errors::{BridgeError, BridgeResult};
use crate::value::{Bytes, HostValue, RecordValue, WireValue};

macro_rules! int_to_engine_value {
    ($($ty:ty),+) => {
        $(
            impl ToEngineValue for $ty {
                fn to_engine_value(&self) -> BridgeResult<WireValue> {
                    Ok(WireValue::Int(i64::from(*self)))
                }
            }
        )+
    };
}

int_to_engine_value!(i8, i16, i32, i64, u8, u16, u32);

impl ToEngineValue for f32 {
    fn to_engine_value(&self) -> BridgeResult<WireValue> {
        Ok(WireValue::Float(f64::from(*self)))
    }
}

impl ToEngineValue for f64 {
    fn to_engine_value(&self) -> BridgeResult<WireValue> {
        Ok(WireValue::Float(*self))
    }
}

impl ToEngineValue for bool {
    fn to_engine_value(&self) -> BridgeResult<WireValue> {
        Ok(WireValue::Bool(*self))
    }
}

impl ToEngineValue for str {
    fn to_engine_value(&self) -> BridgeResult<WireValue> {
        Ok(WireValue::Str(self.to_string()))
    }
}

impl ToEngineValue for String {
    fn to_engine_value(&self) -> BridgeResult<WireValue> {
        Ok(WireValue::Str(self.clone()))
    }
}

impl ToEngineValue for Bytes {
    fn to_engine_value(&self) -> BridgeResult<WireValue> {
        Ok(WireValue::Bytes(self.0.clone()))
    }
}

// Canonical big-endian bytes, not the hyphenated text form.
impl ToEngineValue for Uuid {
    fn to_engine_value(&self) -> BridgeResult<WireValue> {
        Ok(WireValue::Bytes(self.as_bytes().to_vec()))
    }
}

impl ToEngineValue for NaiveDate {
    fn to_engine_value(&self) -> BridgeResult<WireValue> {
        Ok(WireValue::Date(*self))
    }
}

impl ToEngineValue for NaiveTime {
    fn to_engine_value(&self) -> BridgeResult<WireValue> {
        Ok(WireValue::Time(*self))
    }
}

impl ToEngineValue for NaiveDateTime {
    fn to_engine_value(&self) -> BridgeResult<WireValue> {
        Ok(WireValue::LocalDateTime(*self))
    }
}

impl ToEngineValue for DateTime<FixedOffset> {
    fn to_engine_value(&self) -> BridgeResult<WireValue> {
        Ok(WireValue::OffsetDateTime(*self))
    }
}

impl ToEngineValue for DateTime<Utc> {
    fn to_engine_value(&self) -> BridgeResult<WireValue> {
        Ok(WireValue::OffsetDateTime(DateTime::<FixedOffset>::from(*self)))
    }
}

impl<T: ToEngineValue> ToEngineValue for Option<T> {
    fn to_engine_value(&self) -> BridgeResult<WireValue> {
        match self {
            Some(value) => value.to_engine_value(),
            None => Ok(WireValue::Null),
        }
    }
}

impl<T: ToEngineValue + ?Sized> ToEngineValue for &T {
    fn to_engine_value(&self) -> BridgeResult<WireValue> {
        (**self).to_engine_value()
    }
}

impl<T: ToEngineValue + ?Sized> ToEngineValue for Box<T> {
    fn to_engine_value(&self) -> BridgeResult<WireValue> {
        (**self).to_engine_value()
    }
}

impl<T: ToEngineValue> ToEngineValue for [T] {
    fn to_engine_value(&self) -> BridgeResult<WireValue> {
        encode_seq(self)
    }
}

impl<T: ToEngineValue, const N: usize> ToEngineValue for [T; N] {
    fn to_engine_value(&self) -> BridgeResult<WireValue> {
        encode_seq(self)
    }
}

impl<T: ToEngineValue> ToEngineValue for Vec<T> {
    fn to_engine_value(&self) -> BridgeResult<WireValue> {
        encode_seq(self)
    }
}

impl ToEngineValue for () {
    fn to_engine_value(&self) -> BridgeResult<WireValue> {
        Ok(WireValue::Seq(Vec::new()))
    }
}

macro_rules! tuple_to_engine_value {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: ToEngineValue),+> ToEngineValue for ($($name,)+) {
            fn to_engine_value(&self) -> BridgeResult<WireValue> {
                Ok(WireValue::Seq(vec![$(
                    self.$idx
                        .to_engine_value()
                        .map_err(|e| e.nested_in(PathSegment::Index($idx)))?
                ),+]))
            }
        }
    };
}

tuple_to_engine_value!(A: 0);
tuple_to_engine_value!(A: 0, B: 1);
tuple_to_engine_value!(A: 0, B: 1, C: 2);
tuple_to_engine_value!(A: 0, B: 1, C: 2, D: 3);
tuple_to_engine_value!(A: 0, B: 1, C: 2, D: 3, E: 4);
tuple_to_engine_value!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);

impl StructuredRecord for RecordValue {
    fn record_fields(&self) -> Vec<(&str, &dyn ToEngineValue)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value as &dyn ToEngineValue))
            .collect()
    }
}

impl ToEngineValue for RecordValue {
    fn to_engine_value(&self) -> BridgeResult<WireValue> {
        encode_record(self)
    }
}

impl ToEngineValue for HostValue {
    fn to_engine_value(&self) -> BridgeResult<WireValue> {
        match self {
            HostValue::Null => Ok(WireValue::Null),
            HostValue::Bool(b) => Ok(WireValue::Bool(*b)),
            HostValue::Int(i) => Ok(WireValue::Int(*i)),
            HostValue::Float(f) => Ok(WireValue::Float(*f)),
            HostValue::Str(s) => Ok(WireValue::Str(s.clone())),
            HostValue::Bytes(bytes) => Ok(WireValue::Bytes(bytes.clone())),
            HostValue::Uuid(u) => u.to_engine_value(),
            HostValue::Date(d) => Ok(WireValue::Date(*d)),
            HostValue::Time(t) => Ok(WireValue::Time(*t)),
            HostValue::LocalDateTime(dt) => Ok(WireValue::LocalDateTime(*dt)),
            HostValue::OffsetDateTime(dt) => Ok(WireValue::OffsetDateTime(*dt)),
            HostValue::List(items) | HostValue::Tuple(items) => encode_seq(items),
            HostValue::Record(record) => encode_record(record),
            HostValue::Map(_) => Err(BridgeError::unsupported_type(
                self.type_name(),
                FieldPath::root(),
            )),
        }
    }
}
