//! Encoder Tests
//!
//! The encoder works from the value's own shape:
//! - scalars and temporal values pass through
//! - UUIDs become their 16 canonical bytes
//! - records become positional sequences
//! - lists and tuples keep order and length, empty stays empty

mod fixtures;

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;
use valuebridge::value::RecordValue;
use valuebridge::{encode, BridgeErrorCode, HostValue, WireValue};

use fixtures::{order_wire, s, seq, Basket, Customer, Order, Tag};

// =============================================================================
// Scalars
// =============================================================================

#[test]
fn test_basic_types_pass_through() {
    assert_eq!(encode(&123i64).unwrap(), WireValue::Int(123));
    assert_eq!(encode(&2.75f64).unwrap(), WireValue::Float(2.75));
    assert_eq!(encode("hello").unwrap(), s("hello"));
    assert_eq!(encode(&true).unwrap(), WireValue::Bool(true));
}

/// UUIDs are sent as bytes, not as their hyphenated text.
#[test]
fn test_uuid_encodes_to_bytes() {
    let u = Uuid::new_v4();
    assert_eq!(encode(&u).unwrap(), WireValue::Bytes(u.as_bytes().to_vec()));
}

#[test]
fn test_date_time_types_pass_through() {
    let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    assert_eq!(encode(&d).unwrap(), WireValue::Date(d));

    let t = NaiveTime::from_hms_opt(12, 30, 0).unwrap();
    assert_eq!(encode(&t).unwrap(), WireValue::Time(t));

    let dt = d.and_hms_opt(12, 30, 0).unwrap();
    assert_eq!(encode(&dt).unwrap(), WireValue::LocalDateTime(dt));
}

#[test]
fn test_none_encodes_to_null() {
    assert_eq!(encode(&None::<i64>).unwrap(), WireValue::Null);
    assert_eq!(encode(&HostValue::Null).unwrap(), WireValue::Null);
}

// =============================================================================
// Records
// =============================================================================

#[test]
fn test_struct_encodes_positionally() {
    let order = Order::new("O123", "mixed nuts", 25.0);
    assert_eq!(encode(&order).unwrap(), order_wire("O123", "mixed nuts", 25.0));
}

#[test]
fn test_dynamic_record_matches_typed_record() {
    let record = RecordValue::new("Order")
        .with_field("order_id", "O123")
        .with_field("name", "mixed nuts")
        .with_field("price", 25.0f64)
        .with_field("extra_field", "default_extra");
    assert_eq!(
        encode(&HostValue::Record(record)).unwrap(),
        encode(&Order::new("O123", "mixed nuts", 25.0)).unwrap()
    );
}

#[test]
fn test_list_of_structs() {
    let orders = vec![
        Order::new("O1", "item1", 10.0),
        Order::new("O2", "item2", 20.0),
    ];
    assert_eq!(
        encode(&orders).unwrap(),
        seq(vec![
            order_wire("O1", "item1", 10.0),
            order_wire("O2", "item2", 20.0),
        ])
    );
}

#[test]
fn test_struct_with_list() {
    let basket = Basket {
        items: vec!["apple".into(), "banana".into()],
    };
    assert_eq!(
        encode(&basket).unwrap(),
        seq(vec![seq(vec![s("apple"), s("banana")])])
    );
}

#[test]
fn test_nested_struct() {
    let customer = Customer {
        name: "Alice".into(),
        order: Order::new("O1", "item1", 10.0),
        tags: None,
    };
    assert_eq!(
        encode(&customer).unwrap(),
        seq(vec![s("Alice"), order_wire("O1", "item1", 10.0), WireValue::Null])
    );

    let tagged = Customer {
        tags: Some(vec![Tag::new("vip")]),
        ..customer
    };
    assert_eq!(
        encode(&tagged).unwrap(),
        seq(vec![
            s("Alice"),
            order_wire("O1", "item1", 10.0),
            seq(vec![seq(vec![s("vip")])]),
        ])
    );
}

// =============================================================================
// Sequences
// =============================================================================

#[test]
fn test_empty_list() {
    assert_eq!(encode(&Vec::<i64>::new()).unwrap(), seq(vec![]));
    assert_eq!(encode(&vec![Vec::<i64>::new()]).unwrap(), seq(vec![seq(vec![])]));
}

#[test]
fn test_tuples() {
    assert_eq!(encode(&()).unwrap(), seq(vec![]));
    assert_eq!(
        encode(&(1i64, 2i64, 3i64)).unwrap(),
        seq(vec![WireValue::Int(1), WireValue::Int(2), WireValue::Int(3)])
    );
    assert_eq!(
        encode(&((1i64, 2i64), (3i64, 4i64))).unwrap(),
        seq(vec![
            seq(vec![WireValue::Int(1), WireValue::Int(2)]),
            seq(vec![WireValue::Int(3), WireValue::Int(4)]),
        ])
    );
    assert_eq!(encode(&(Vec::<i64>::new(),)).unwrap(), seq(vec![seq(vec![])]));
    assert_eq!(encode(&((),)).unwrap(), seq(vec![seq(vec![])]));
}

#[test]
fn test_host_tuple_and_list_agree() {
    let items = vec![HostValue::Int(1), HostValue::from("two")];
    assert_eq!(
        encode(&HostValue::Tuple(items.clone())).unwrap(),
        encode(&HostValue::List(items)).unwrap()
    );
}

// =============================================================================
// Unsupported shapes
// =============================================================================

#[test]
fn test_map_is_unsupported() {
    let value = HostValue::List(vec![HostValue::Int(1), HostValue::Map(vec![])]);
    let err = encode(&value).unwrap_err();
    assert_eq!(err.code(), BridgeErrorCode::BridgeUnsupportedType);
    assert_eq!(err.path().unwrap().to_string(), "$[1]");
    assert!(err.to_string().contains("map"));
}
