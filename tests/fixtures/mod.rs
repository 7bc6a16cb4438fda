//! Shared host record types and their schemas
//!
//! Each record implements both directions: `StructuredRecord` for encoding and
//! `FromHostValue` for typed decoding. Schemas are written out by hand the
//! way the engine would describe them.

#![allow(dead_code)]

use valuebridge::convert::{FromHostValue, RecordReader};
use valuebridge::encode::{encode_record, StructuredRecord, ToEngineValue};
use valuebridge::schema::{BasicKind, FieldSchema, SchemaNode};
use valuebridge::value::{HostType, HostValue, RecordDescriptor, WireValue};
use valuebridge::BridgeResult;

// =============================================================================
// Records
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_id: String,
    pub name: String,
    pub price: f64,
    pub extra_field: String,
}

impl Order {
    /// Order with `extra_field` left at its default.
    pub fn new(order_id: &str, name: &str, price: f64) -> Self {
        Self::with_extra(order_id, name, price, "default_extra")
    }

    pub fn with_extra(order_id: &str, name: &str, price: f64, extra_field: &str) -> Self {
        Self {
            order_id: order_id.into(),
            name: name.into(),
            price,
            extra_field: extra_field.into(),
        }
    }
}

impl StructuredRecord for Order {
    fn record_fields(&self) -> Vec<(&str, &dyn ToEngineValue)> {
        vec![
            ("order_id", &self.order_id as &dyn ToEngineValue),
            ("name", &self.name as &dyn ToEngineValue),
            ("price", &self.price as &dyn ToEngineValue),
            ("extra_field", &self.extra_field as &dyn ToEngineValue),
        ]
    }
}

impl ToEngineValue for Order {
    fn to_engine_value(&self) -> BridgeResult<WireValue> {
        encode_record(self)
    }
}

impl FromHostValue for Order {
    fn host_type() -> HostType {
        HostType::record(
            RecordDescriptor::new("Order")
                .field("order_id", String::host_type())
                .field("name", String::host_type())
                .field("price", f64::host_type())
                .field_with_default("extra_field", String::host_type(), "default_extra"),
        )
    }

    fn from_host_value(value: HostValue) -> BridgeResult<Self> {
        let mut fields = RecordReader::new(value, "Order")?;
        Ok(Order {
            order_id: fields.next_field()?,
            name: fields.next_field()?,
            price: fields.next_field()?,
            extra_field: fields.next_field()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    pub fn new(name: &str) -> Self {
        Self { name: name.into() }
    }
}

impl StructuredRecord for Tag {
    fn record_fields(&self) -> Vec<(&str, &dyn ToEngineValue)> {
        vec![("name", &self.name as &dyn ToEngineValue)]
    }
}

impl ToEngineValue for Tag {
    fn to_engine_value(&self) -> BridgeResult<WireValue> {
        encode_record(self)
    }
}

impl FromHostValue for Tag {
    fn host_type() -> HostType {
        HostType::record(RecordDescriptor::new("Tag").field("name", String::host_type()))
    }

    fn from_host_value(value: HostValue) -> BridgeResult<Self> {
        let mut fields = RecordReader::new(value, "Tag")?;
        Ok(Tag {
            name: fields.next_field()?,
        })
    }
}

/// Encode-only record holding an untyped list.
#[derive(Debug, Clone, PartialEq)]
pub struct Basket {
    pub items: Vec<String>,
}

impl StructuredRecord for Basket {
    fn record_fields(&self) -> Vec<(&str, &dyn ToEngineValue)> {
        vec![("items", &self.items as &dyn ToEngineValue)]
    }
}

impl ToEngineValue for Basket {
    fn to_engine_value(&self) -> BridgeResult<WireValue> {
        encode_record(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub name: String,
    pub order: Order,
    pub tags: Option<Vec<Tag>>,
}

impl StructuredRecord for Customer {
    fn record_fields(&self) -> Vec<(&str, &dyn ToEngineValue)> {
        vec![
            ("name", &self.name as &dyn ToEngineValue),
            ("order", &self.order as &dyn ToEngineValue),
            ("tags", &self.tags as &dyn ToEngineValue),
        ]
    }
}

impl ToEngineValue for Customer {
    fn to_engine_value(&self) -> BridgeResult<WireValue> {
        encode_record(self)
    }
}

impl FromHostValue for Customer {
    fn host_type() -> HostType {
        HostType::record(
            RecordDescriptor::new("Customer")
                .field("name", String::host_type())
                .field("order", Order::host_type())
                .field_with_default("tags", Option::<Vec<Tag>>::host_type(), HostValue::Null),
        )
    }

    fn from_host_value(value: HostValue) -> BridgeResult<Self> {
        let mut fields = RecordReader::new(value, "Customer")?;
        Ok(Customer {
            name: fields.next_field()?,
            order: fields.next_field()?,
            tags: fields.next_field()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NestedStruct {
    pub customer: Customer,
    pub orders: Vec<Order>,
    pub count: i64,
}

impl StructuredRecord for NestedStruct {
    fn record_fields(&self) -> Vec<(&str, &dyn ToEngineValue)> {
        vec![
            ("customer", &self.customer as &dyn ToEngineValue),
            ("orders", &self.orders as &dyn ToEngineValue),
            ("count", &self.count as &dyn ToEngineValue),
        ]
    }
}

impl ToEngineValue for NestedStruct {
    fn to_engine_value(&self) -> BridgeResult<WireValue> {
        encode_record(self)
    }
}

impl FromHostValue for NestedStruct {
    fn host_type() -> HostType {
        HostType::record(
            RecordDescriptor::new("NestedStruct")
                .field("customer", Customer::host_type())
                .field("orders", Vec::<Order>::host_type())
                .field_with_default("count", i64::host_type(), 0i64),
        )
    }

    fn from_host_value(value: HostValue) -> BridgeResult<Self> {
        let mut fields = RecordReader::new(value, "NestedStruct")?;
        Ok(NestedStruct {
            customer: fields.next_field()?,
            orders: fields.next_field()?,
            count: fields.next_field()?,
        })
    }
}

// =============================================================================
// Schemas
// =============================================================================

fn basic(name: &str, kind: BasicKind) -> FieldSchema {
    FieldSchema::new(name, SchemaNode::basic(kind))
}

pub fn order_schema() -> SchemaNode {
    SchemaNode::struct_of(vec![
        basic("order_id", BasicKind::Str),
        basic("name", BasicKind::Str),
        basic("price", BasicKind::Float64),
        basic("extra_field", BasicKind::Str),
    ])
}

pub fn tag_schema() -> SchemaNode {
    SchemaNode::struct_of(vec![basic("name", BasicKind::Str)])
}

pub fn customer_schema() -> SchemaNode {
    SchemaNode::struct_of(vec![
        basic("name", BasicKind::Str),
        FieldSchema::new("order", order_schema()),
        FieldSchema::new("tags", SchemaNode::table_of(tag_schema())),
    ])
}

pub fn nested_schema() -> SchemaNode {
    SchemaNode::struct_of(vec![
        FieldSchema::new("customer", customer_schema()),
        FieldSchema::new("orders", SchemaNode::table_of(order_schema())),
        basic("count", BasicKind::Int64),
    ])
}

// =============================================================================
// Wire helpers
// =============================================================================

pub fn s(value: &str) -> WireValue {
    WireValue::from(value)
}

pub fn seq(items: Vec<WireValue>) -> WireValue {
    WireValue::Seq(items)
}

pub fn order_wire(order_id: &str, name: &str, price: f64) -> WireValue {
    seq(vec![s(order_id), s(name), WireValue::Float(price), s("default_extra")])
}
