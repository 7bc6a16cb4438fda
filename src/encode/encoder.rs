//! Schema-free encoding of host values into wire values

use crate::convert::PathSegment;
use crate::errors::BridgeResult;
use crate::value::WireValue;

/// A host value that knows its own wire form.
///
/// Implemented for scalars, UUIDs, chrono temporal types, options, sequences
/// and tuples, and for `HostValue`. Record types implement it by delegating
/// to [`encode_record`].
pub trait ToEngineValue {
    fn to_engine_value(&self) -> BridgeResult<WireValue>;
}

/// A host record with named fields in declaration order.
///
/// This is the capability the encoder uses to recognize struct-like values;
/// field names are only used to qualify error paths.
pub trait StructuredRecord {
    fn record_fields(&self) -> Vec<(&str, &dyn ToEngineValue)>;
}

/// Encodes any host value into its wire form.
///
/// # Errors
///
/// Returns `UnsupportedType` if the value, or anything nested in it, has no
/// wire encoding. The error path points at the offending value.
pub fn encode<V: ToEngineValue + ?Sized>(value: &V) -> BridgeResult<WireValue> {
    value.to_engine_value()
}

/// Encodes a record as the sequence of its field values, names dropped.
pub fn encode_record<R: StructuredRecord + ?Sized>(record: &R) -> BridgeResult<WireValue> {
    let fields = record.record_fields();
    let mut items = Vec::with_capacity(fields.len());
    for (name, value) in fields {
        let item = value
            .to_engine_value()
            .map_err(|e| e.nested_in(PathSegment::Field(name.to_string())))?;
        items.push(item);
    }
    Ok(WireValue::Seq(items))
}

/// Encodes an ordered sequence element by element.
pub fn encode_seq<'a, V, I>(items: I) -> BridgeResult<WireValue>
where
    V: ToEngineValue + 'a,
    I: IntoIterator<Item = &'a V>,
{
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            item.to_engine_value()
                .map_err(|e| e.nested_in(PathSegment::Index(i)))
        })
        .collect::<BridgeResult<Vec<_>>>()
        .map(WireValue::Seq)
}
