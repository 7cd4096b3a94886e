//! Property tests for encode/decode round trips.

#![allow(clippy::unwrap_used)]

use bytes::Bytes;
use chrono::{DateTime, TimeDelta, Utc};
use proptest::prelude::*;
use sybdb_types::{FromSql, SqlValue, TypeTag, decode_value, encode_value};

fn roundtrip(tag: TypeTag, value: &SqlValue) -> SqlValue {
    decode_value(tag.code(), &encode_value(tag.code(), value).unwrap())
}

/// Instants between 1900-01-01 and 9999-12-31, as Unix seconds plus nanos.
fn datetimes() -> impl Strategy<Value = DateTime<Utc>> {
    (-2_208_988_800_i64..253_402_300_799, 0u32..1_000_000_000)
        .prop_map(|(secs, nanos)| DateTime::from_timestamp(secs, nanos).unwrap())
}

/// Instants within the SMALLDATETIME range (1900-01-01 to 2079-06-06).
fn small_datetimes() -> impl Strategy<Value = DateTime<Utc>> {
    (-2_208_988_800_i64..3_453_321_599, 0u32..1_000_000_000)
        .prop_map(|(secs, nanos)| DateTime::from_timestamp(secs, nanos).unwrap())
}

fn instant(value: &SqlValue) -> DateTime<Utc> {
    DateTime::<Utc>::from_sql(value).unwrap()
}

proptest! {
    #[test]
    fn prop_tinyint_roundtrip(v in any::<u8>()) {
        prop_assert_eq!(roundtrip(TypeTag::Int1, &v.into()), SqlValue::TinyInt(v));
    }

    #[test]
    fn prop_smallint_roundtrip(v in any::<i16>()) {
        prop_assert_eq!(roundtrip(TypeTag::Int2, &v.into()), SqlValue::SmallInt(v));
    }

    #[test]
    fn prop_int_roundtrip(v in any::<i32>()) {
        prop_assert_eq!(roundtrip(TypeTag::Int4, &v.into()), SqlValue::Int(v));
    }

    #[test]
    fn prop_int_narrows_bigint(v in any::<i64>()) {
        prop_assert_eq!(roundtrip(TypeTag::Int4, &v.into()), SqlValue::Int(v as i32));
    }

    #[test]
    fn prop_bigint_roundtrip(v in any::<i64>()) {
        prop_assert_eq!(roundtrip(TypeTag::Int8, &v.into()), SqlValue::BigInt(v));
    }

    #[test]
    fn prop_real_roundtrip(v in any::<f32>().prop_filter("NaN != NaN", |v| !v.is_nan())) {
        prop_assert_eq!(roundtrip(TypeTag::Real, &v.into()), SqlValue::Real(v));
    }

    #[test]
    fn prop_float_roundtrip(v in any::<f64>().prop_filter("NaN != NaN", |v| !v.is_nan())) {
        prop_assert_eq!(roundtrip(TypeTag::Float8, &v.into()), SqlValue::Float(v));
    }

    #[test]
    fn prop_bit_roundtrip(v in any::<bool>()) {
        prop_assert_eq!(roundtrip(TypeTag::Bit, &v.into()), SqlValue::Bool(v));
    }

    #[test]
    fn prop_binary_roundtrip(v in proptest::collection::vec(any::<u8>(), 0..512)) {
        let value = SqlValue::from(v.clone());
        prop_assert_eq!(
            roundtrip(TypeTag::VarBinary, &value),
            SqlValue::Binary(Bytes::from(v))
        );
    }

    #[test]
    fn prop_text_roundtrip(s in "[^\\x00]*") {
        let value = SqlValue::from(s.as_str());
        prop_assert_eq!(roundtrip(TypeTag::VarChar, &value), value);
    }

    #[test]
    fn prop_money_units_roundtrip(units in -900_000_000_000_000_i64..900_000_000_000_000) {
        // Amounts with at most four decimals and fewer than 16 digits are exact.
        let amount = units as f64 / 10_000.0;
        prop_assert_eq!(
            roundtrip(TypeTag::Money, &amount.into()),
            SqlValue::Float(amount)
        );
    }

    #[test]
    fn prop_smallmoney_units_roundtrip(units in any::<i32>()) {
        let amount = f64::from(units) / 10_000.0;
        prop_assert_eq!(
            roundtrip(TypeTag::Money4, &amount.into()),
            SqlValue::Float(amount)
        );
    }

    #[test]
    fn prop_datetime_within_one_tick(original in datetimes()) {
        let decoded = instant(&roundtrip(TypeTag::DateTime, &original.into()));
        prop_assert!(decoded <= original);
        prop_assert!(original - decoded <= TimeDelta::nanoseconds(1_000_000_000 / 300));
    }

    #[test]
    fn prop_smalldatetime_within_one_minute(original in small_datetimes()) {
        let decoded = instant(&roundtrip(TypeTag::DateTime4, &original.into()));
        prop_assert!(decoded <= original);
        prop_assert!(original - decoded < TimeDelta::minutes(1));
    }

    #[test]
    fn prop_decode_is_total(
        type_id in any::<u8>(),
        data in proptest::collection::vec(any::<u8>(), 0..16),
    ) {
        let _ = decode_value(type_id, &data);
    }
}
