#![no_main]

use arbitrary::Arbitrary;
use bytes::Bytes;
use chrono::DateTime;
use libfuzzer_sys::fuzz_target;
use sybdb_protocol::TypeTag;
use sybdb_types::{SqlValue, decode_value, encode_value};

/// Arbitrary SQL values for round-trip fuzzing.
#[derive(Debug, Arbitrary)]
enum FuzzSqlValue {
    TinyInt(u8),
    SmallInt(i16),
    Int(i32),
    BigInt(i64),
    Real(f32),
    Float(f64),
    Bool(bool),
    Binary(Vec<u8>),
    String(String),
    /// Unix seconds and sub-second nanos.
    DateTime(i64, u32),
}

fuzz_target!(|input: (u8, FuzzSqlValue)| {
    let (type_id, input) = input;
    let value = match input {
        FuzzSqlValue::TinyInt(v) => SqlValue::TinyInt(v),
        FuzzSqlValue::SmallInt(v) => SqlValue::SmallInt(v),
        FuzzSqlValue::Int(v) => SqlValue::Int(v),
        FuzzSqlValue::BigInt(v) => SqlValue::BigInt(v),
        FuzzSqlValue::Real(v) => SqlValue::Real(v),
        FuzzSqlValue::Float(v) => SqlValue::Float(v),
        FuzzSqlValue::Bool(v) => SqlValue::Bool(v),
        FuzzSqlValue::Binary(v) => SqlValue::Binary(Bytes::from(v)),
        FuzzSqlValue::String(v) => SqlValue::String(v),
        FuzzSqlValue::DateTime(secs, nanos) => match DateTime::from_timestamp(secs, nanos) {
            Some(dt) => SqlValue::from(dt),
            None => return,
        },
    };

    let Ok(wire) = encode_value(type_id, &value) else {
        return;
    };

    let tag = TypeTag::from_u8(type_id);
    if let Some(width) = tag.and_then(|tag| tag.fixed_len()) {
        assert_eq!(wire.len(), width);
    }

    let decoded = decode_value(type_id, &wire);
    match (tag, &value) {
        // Strict fixed-width shapes round-trip exactly
        (Some(TypeTag::Int1 | TypeTag::Int2 | TypeTag::Int8 | TypeTag::Bit), _) => {
            assert_eq!(decoded, value)
        }
        (Some(tag), SqlValue::Binary(_)) if tag.is_binary() => assert_eq!(decoded, value),
        (_, SqlValue::String(s)) if !s.contains('\0') => assert_eq!(decoded, value),
        _ => {}
    }
});
