//! Converter builder
//!
//! Compiles a schema node and a declared host target into a `Converter`.
//! All schema/target dispatch happens here, once; the compiled closures only
//! check wire shapes and call their pre-built children.
//!
//! Compilation rules:
//! - basic: passthrough when the target matches the kind, a documented
//!   coercion (uuid bytes → uuid, int64 → float) when one applies,
//!   `UnsupportedType` for other scalar pairs, `SchemaMismatch` for
//!   list/record targets
//! - struct: target fields paired with schema fields by position; short wire
//!   values fall back to defaults; trailing wire elements are ignored unless
//!   the config rejects them
//! - collection: one element converter mapped over the sequence
//! - null wire values decode to `HostValue::Null` at every node

use std::sync::Arc;

use tracing::{debug, trace};
use uuid::Uuid;

use super::converter::{Converter, FromHostValue, TypedConverter};
use super::path::FieldPath;
use crate::config::{BridgeConfig, TrailingFieldPolicy};
use crate::errors::{BridgeError, BridgeResult};
use crate::schema::{BasicKind, CollectionKind, FieldSchema, SchemaNode};
use crate::value::{HostType, HostValue, RecordDescriptor, WireValue};

/// Compiles converters under one configuration.
#[derive(Debug, Clone, Default)]
pub struct ConverterBuilder {
    config: BridgeConfig,
}

impl ConverterBuilder {
    pub fn new(config: BridgeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Compiles a converter for `schema` decoding into `target`.
    ///
    /// `path` is the diagnostic position of the root; pass
    /// `FieldPath::root()` unless the value is nested in something larger.
    ///
    /// # Errors
    ///
    /// Fails fast when the schema and target cannot be reconciled:
    /// - `SchemaMismatch` for structurally incompatible pairs
    /// - `UnsupportedType` for scalar pairs with no coercion
    /// - `MissingField` when the schema lacks a target field that has no default
    pub fn build(
        &self,
        path: &FieldPath,
        schema: &SchemaNode,
        target: &HostType,
    ) -> BridgeResult<Converter> {
        let converter = self.compile(path, schema, target)?;
        debug!(
            path = %path,
            schema = schema.type_name(),
            target = %target.type_name(),
            "compiled engine value converter"
        );
        Ok(converter)
    }

    /// Compiles a converter that extracts its output into `T`.
    pub fn build_typed<T: FromHostValue>(
        &self,
        path: &FieldPath,
        schema: &SchemaNode,
    ) -> BridgeResult<TypedConverter<T>> {
        self.build(path, schema, &T::host_type())
            .map(TypedConverter::new)
    }

    fn compile(
        &self,
        path: &FieldPath,
        schema: &SchemaNode,
        target: &HostType,
    ) -> BridgeResult<Converter> {
        trace!(
            path = %path,
            schema = schema.type_name(),
            target = %target.type_name(),
            "compiling converter node"
        );

        let target = target.without_optional();
        match schema {
            SchemaNode::Basic { basic } => self.compile_basic(path, *basic, target),
            SchemaNode::Struct { fields } => self.compile_struct(path, fields, target),
            SchemaNode::Collection {
                collection,
                element,
            } => self.compile_collection(path, *collection, element, target),
        }
    }

    fn compile_basic(
        &self,
        path: &FieldPath,
        kind: BasicKind,
        target: &HostType,
    ) -> BridgeResult<Converter> {
        match target {
            HostType::Any => Ok(scalar_passthrough(path.clone(), kind)),
            HostType::Uuid if kind == BasicKind::Uuid => {
                if self.config.uuid_from_bytes {
                    Ok(uuid_from_bytes(path.clone()))
                } else {
                    Err(no_coercion(path, kind, target))
                }
            }
            HostType::Float if kind == BasicKind::Int64 && self.config.widen_int_to_float => {
                Ok(int_to_float(path.clone()))
            }
            HostType::List(_) | HostType::Record(_) => Err(BridgeError::schema_mismatch(
                path.clone(),
                target.type_name(),
                kind.name(),
            )),
            _ if representation_matches(kind, target) => Ok(scalar_passthrough(path.clone(), kind)),
            _ => Err(no_coercion(path, kind, target)),
        }
    }

    fn compile_struct(
        &self,
        path: &FieldPath,
        fields: &[FieldSchema],
        target: &HostType,
    ) -> BridgeResult<Converter> {
        let descriptor = match target {
            HostType::Record(descriptor) => Arc::clone(descriptor),
            other => {
                return Err(BridgeError::schema_mismatch(
                    path.clone(),
                    "record target for struct",
                    other.type_name(),
                ))
            }
        };

        let slots = self.compile_slots(path, fields, &descriptor)?;
        let policy = self.config.trailing_fields;
        // Projections read fewer fields than the schema carries.
        let width = fields.len().max(slots.len());
        let path = path.clone();

        Ok(Converter::new(move |wire| {
            let items = match wire {
                WireValue::Null => return Ok(HostValue::Null),
                WireValue::Seq(items) => items,
                other => {
                    return Err(BridgeError::schema_mismatch(
                        path.clone(),
                        "struct",
                        other.shape_name(),
                    ))
                }
            };

            if policy == TrailingFieldPolicy::Reject && items.len() > width {
                return Err(BridgeError::schema_mismatch(
                    path.clone(),
                    format!("at most {} fields", width),
                    format!("{} fields", items.len()),
                ));
            }

            let values = slots
                .iter()
                .enumerate()
                .map(|(i, slot)| slot.resolve(items.get(i)))
                .collect::<BridgeResult<Vec<_>>>()?;
            Ok(HostValue::Record(descriptor.construct(values)))
        }))
    }

    /// Pairs target field `i` with schema field `i`.
    fn compile_slots(
        &self,
        path: &FieldPath,
        fields: &[FieldSchema],
        descriptor: &RecordDescriptor,
    ) -> BridgeResult<Vec<FieldSlot>> {
        let mut slots = Vec::with_capacity(descriptor.fields.len());
        for (i, field) in descriptor.fields.iter().enumerate() {
            let field_path = path.field(&field.name);
            let slot = match fields.get(i) {
                Some(schema_field) => FieldSlot::Wire {
                    converter: self.compile(&field_path, &schema_field.node, &field.ty)?,
                    default: field.default.clone(),
                    name: field.name.clone(),
                    path: field_path,
                },
                // Schema never carries this position.
                None => match &field.default {
                    Some(default) => FieldSlot::Default(default.clone()),
                    None => return Err(BridgeError::missing_field(&field.name, field_path)),
                },
            };
            slots.push(slot);
        }
        Ok(slots)
    }

    fn compile_collection(
        &self,
        path: &FieldPath,
        kind: CollectionKind,
        element: &SchemaNode,
        target: &HostType,
    ) -> BridgeResult<Converter> {
        let any = HostType::Any;
        let element_target = match (kind, target) {
            (_, HostType::List(element_target)) => &**element_target,
            (CollectionKind::List, HostType::Any) => &any,
            (_, other) => {
                return Err(BridgeError::schema_mismatch(
                    path.clone(),
                    format!("list target for {}", kind.name()),
                    other.type_name(),
                ))
            }
        };

        let element_converter = self.compile(&path.element(), element, element_target)?;
        let path = path.clone();
        let depth = path.segments().len();

        Ok(Converter::new(move |wire| match wire {
            WireValue::Null => Ok(HostValue::Null),
            WireValue::Seq(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    element_converter
                        .convert(item)
                        .map_err(|e| e.at_element(depth, i))
                })
                .collect::<BridgeResult<Vec<_>>>()
                .map(HostValue::List),
            other => Err(BridgeError::schema_mismatch(
                path.clone(),
                kind.name(),
                other.shape_name(),
            )),
        }))
    }
}

/// Compiles a converter with the default configuration.
pub fn build_converter(
    path: &FieldPath,
    schema: &SchemaNode,
    target: &HostType,
) -> BridgeResult<Converter> {
    ConverterBuilder::default().build(path, schema, target)
}

/// How one target field gets its value
enum FieldSlot {
    /// Read from the wire at the field's position
    Wire {
        converter: Converter,
        default: Option<HostValue>,
        name: String,
        path: FieldPath,
    },
    /// Position absent from the schema; always the default
    Default(HostValue),
}

impl FieldSlot {
    fn resolve(&self, item: Option<&WireValue>) -> BridgeResult<HostValue> {
        match self {
            FieldSlot::Wire {
                converter,
                default,
                name,
                path,
            } => match item {
                Some(item) => converter.convert(item),
                None => default
                    .clone()
                    .ok_or_else(|| BridgeError::missing_field(name.clone(), path.clone())),
            },
            FieldSlot::Default(value) => Ok(value.clone()),
        }
    }
}

fn representation_matches(kind: BasicKind, target: &HostType) -> bool {
    matches!(
        (kind, target),
        (BasicKind::Bool, HostType::Bool)
            | (BasicKind::Int64, HostType::Int)
            | (BasicKind::Float32 | BasicKind::Float64, HostType::Float)
            | (BasicKind::Str, HostType::Str)
            | (BasicKind::Bytes | BasicKind::Uuid, HostType::Bytes)
            | (BasicKind::Date, HostType::Date)
            | (BasicKind::Time, HostType::Time)
            | (BasicKind::LocalDateTime, HostType::LocalDateTime)
            | (BasicKind::OffsetDateTime, HostType::OffsetDateTime)
    )
}

fn no_coercion(path: &FieldPath, kind: BasicKind, target: &HostType) -> BridgeError {
    BridgeError::unsupported_type(
        format!("{} -> {}", kind.name(), target.type_name()),
        path.clone(),
    )
}

/// Mirrors a wire scalar of `kind` as the matching host scalar.
fn host_scalar(kind: BasicKind, wire: &WireValue) -> Option<HostValue> {
    let value = match (kind, wire) {
        (BasicKind::Bool, WireValue::Bool(b)) => HostValue::Bool(*b),
        (BasicKind::Int64, WireValue::Int(i)) => HostValue::Int(*i),
        (BasicKind::Float32 | BasicKind::Float64, WireValue::Float(f)) => HostValue::Float(*f),
        (BasicKind::Str, WireValue::Str(s)) => HostValue::Str(s.clone()),
        (BasicKind::Bytes | BasicKind::Uuid, WireValue::Bytes(bytes)) => {
            HostValue::Bytes(bytes.clone())
        }
        (BasicKind::Date, WireValue::Date(d)) => HostValue::Date(*d),
        (BasicKind::Time, WireValue::Time(t)) => HostValue::Time(*t),
        (BasicKind::LocalDateTime, WireValue::LocalDateTime(dt)) => HostValue::LocalDateTime(*dt),
        (BasicKind::OffsetDateTime, WireValue::OffsetDateTime(dt)) => {
            HostValue::OffsetDateTime(*dt)
        }
        _ => return None,
    };
    Some(value)
}

fn scalar_passthrough(path: FieldPath, kind: BasicKind) -> Converter {
    Converter::new(move |wire| {
        if wire.is_null() {
            return Ok(HostValue::Null);
        }
        host_scalar(kind, wire).ok_or_else(|| {
            BridgeError::schema_mismatch(path.clone(), kind.name(), wire.shape_name())
        })
    })
}

fn uuid_from_bytes(path: FieldPath) -> Converter {
    Converter::new(move |wire| match wire {
        WireValue::Null => Ok(HostValue::Null),
        WireValue::Bytes(bytes) => Uuid::from_slice(bytes).map(HostValue::Uuid).map_err(|_| {
            BridgeError::schema_mismatch(
                path.clone(),
                "16-byte uuid",
                format!("{} bytes", bytes.len()),
            )
        }),
        other => Err(BridgeError::schema_mismatch(
            path.clone(),
            "uuid",
            other.shape_name(),
        )),
    })
}

fn int_to_float(path: FieldPath) -> Converter {
    Converter::new(move |wire| match wire {
        WireValue::Null => Ok(HostValue::Null),
        WireValue::Int(i) => Ok(HostValue::Float(*i as f64)),
        WireValue::Float(f) => Ok(HostValue::Float(*f)),
        other => Err(BridgeError::schema_mismatch(
            path.clone(),
            "int64",
            other.shape_name(),
        )),
    })
}
