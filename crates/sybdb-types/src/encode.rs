//! DB-Library binary encoding for SQL values.
//!
//! This module provides encoding of Rust values into wire format for bound
//! parameters. Every wire type demands one value shape; INT alone also
//! accepts wider integers, see [`Int4Coercion`].

use bytes::{BufMut, Bytes, BytesMut};
use chrono::{DateTime, FixedOffset, Timelike, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use sybdb_protocol::ValueKind;

use crate::codec::{self, MONEY_SCALE, NANOS_PER_SEC, TICKS_PER_SEC};
use crate::coerce::Int4Coercion;
use crate::error::TypeError;
use crate::value::SqlValue;

/// Encode a parameter value into newly allocated wire bytes.
///
/// Unrecognized type codes are encoded as NUL-terminated text.
///
/// # Errors
///
/// Returns [`TypeError::TypeMismatch`] if `value` does not have the shape
/// the wire type requires.
pub fn encode_value(type_id: u8, value: &SqlValue) -> Result<Bytes, TypeError> {
    (codec::lookup(type_id).encode)(value)
        .inspect_err(|err| tracing::debug!(type_id, %err, "cannot encode parameter"))
}

fn mismatch(expected: ValueKind, value: &SqlValue) -> TypeError {
    TypeError::TypeMismatch {
        expected,
        actual: value.kind(),
    }
}

fn fixed_width(len: usize, write: impl FnOnce(&mut BytesMut)) -> Bytes {
    let mut buf = BytesMut::with_capacity(len);
    write(&mut buf);
    buf.freeze()
}

pub(crate) fn encode_tinyint(value: &SqlValue) -> Result<Bytes, TypeError> {
    match value {
        SqlValue::TinyInt(v) => Ok(fixed_width(1, |buf| buf.put_u8(*v))),
        other => Err(mismatch(ValueKind::TinyInt, other)),
    }
}

pub(crate) fn encode_smallint(value: &SqlValue) -> Result<Bytes, TypeError> {
    match value {
        SqlValue::SmallInt(v) => Ok(fixed_width(2, |buf| buf.put_i16_le(*v))),
        other => Err(mismatch(ValueKind::SmallInt, other)),
    }
}

pub(crate) fn encode_int(value: &SqlValue) -> Result<Bytes, TypeError> {
    let v = Int4Coercion::narrow(value).ok_or_else(|| mismatch(ValueKind::Int, value))?;
    Ok(fixed_width(4, |buf| buf.put_i32_le(v)))
}

pub(crate) fn encode_bigint(value: &SqlValue) -> Result<Bytes, TypeError> {
    match value {
        SqlValue::BigInt(v) => Ok(fixed_width(8, |buf| buf.put_i64_le(*v))),
        other => Err(mismatch(ValueKind::BigInt, other)),
    }
}

pub(crate) fn encode_real(value: &SqlValue) -> Result<Bytes, TypeError> {
    match value {
        SqlValue::Real(v) => Ok(fixed_width(4, |buf| buf.put_f32_le(*v))),
        other => Err(mismatch(ValueKind::Real, other)),
    }
}

pub(crate) fn encode_float(value: &SqlValue) -> Result<Bytes, TypeError> {
    match value {
        SqlValue::Float(v) => Ok(fixed_width(8, |buf| buf.put_f64_le(*v))),
        other => Err(mismatch(ValueKind::Float, other)),
    }
}

pub(crate) fn encode_bit(value: &SqlValue) -> Result<Bytes, TypeError> {
    match value {
        SqlValue::Bool(v) => Ok(fixed_width(1, |buf| buf.put_u8(u8::from(*v)))),
        other => Err(mismatch(ValueKind::Bool, other)),
    }
}

/// Scale a currency amount to its fixed-point unit count, truncating toward
/// zero.
///
/// The amount is scaled in decimal using the shortest representation that
/// round-trips `amount`, so `12.3456` becomes exactly `123456` instead of the
/// binary product `123455.99999999999`. Amounts with no such decimal form
/// (non-finite or huge) use the saturating float product.
fn money_units(amount: f64) -> i64 {
    amount
        .to_string()
        .parse::<Decimal>()
        .ok()
        .and_then(|d| d.checked_mul(Decimal::from(MONEY_SCALE)))
        .and_then(|scaled| scaled.trunc().to_i64())
        .unwrap_or((amount * MONEY_SCALE as f64) as i64)
}

pub(crate) fn encode_smallmoney(value: &SqlValue) -> Result<Bytes, TypeError> {
    match value {
        SqlValue::Float(v) => {
            let units = money_units(*v).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
            Ok(fixed_width(4, |buf| buf.put_i32_le(units)))
        }
        other => Err(mismatch(ValueKind::Float, other)),
    }
}

pub(crate) fn encode_money(value: &SqlValue) -> Result<Bytes, TypeError> {
    match value {
        SqlValue::Float(v) => {
            let units = money_units(*v);
            // Inverse of the decoder's `high * 2^32 + low`: the low word is
            // what remains after removing the shifted high word.
            let high = (units >> 32) as i32;
            let low = (units - (i64::from(high) << 32)) as u32;
            Ok(fixed_width(8, |buf| {
                buf.put_i32_le(high);
                buf.put_u32_le(low);
            }))
        }
        other => Err(mismatch(ValueKind::Float, other)),
    }
}

/// Convert to UTC, moving a leap second back to the last nanosecond of the
/// minute it extends so that neither the day nor the time of day overflows.
fn fold_leap_second(dt: &DateTime<FixedOffset>) -> DateTime<Utc> {
    let utc = dt.with_timezone(&Utc);
    if utc.nanosecond() < NANOS_PER_SEC as u32 {
        return utc;
    }
    utc.with_nanosecond(NANOS_PER_SEC as u32 - 1).unwrap_or(utc)
}

/// Whole ticks elapsed within the second, rounded down.
fn sub_second_ticks(nanos: u32) -> u32 {
    (i64::from(nanos) * i64::from(TICKS_PER_SEC) / NANOS_PER_SEC) as u32
}

pub(crate) fn encode_datetime(value: &SqlValue) -> Result<Bytes, TypeError> {
    match value {
        SqlValue::DateTime(dt) => {
            let utc = fold_leap_second(dt);
            // Whole days, truncated toward zero
            let days = utc.signed_duration_since(codec::sql_epoch()).num_days() as i32;
            let ticks = utc.num_seconds_from_midnight() * TICKS_PER_SEC
                + sub_second_ticks(utc.nanosecond());
            Ok(fixed_width(8, |buf| {
                buf.put_i32_le(days);
                buf.put_u32_le(ticks);
            }))
        }
        other => Err(mismatch(ValueKind::DateTime, other)),
    }
}

pub(crate) fn encode_smalldatetime(value: &SqlValue) -> Result<Bytes, TypeError> {
    match value {
        SqlValue::DateTime(dt) => {
            let utc = fold_leap_second(dt);
            let days = utc.signed_duration_since(codec::sql_epoch()).num_days() as u16;
            let minutes = (utc.hour() * 60 + utc.minute()) as u16;
            Ok(fixed_width(4, |buf| {
                buf.put_u16_le(days);
                buf.put_u16_le(minutes);
            }))
        }
        other => Err(mismatch(ValueKind::DateTime, other)),
    }
}

/// Appends a single terminator byte.
pub(crate) fn encode_binary(value: &SqlValue) -> Result<Bytes, TypeError> {
    match value {
        SqlValue::Binary(b) => Ok(terminated(b)),
        other => Err(mismatch(ValueKind::Binary, other)),
    }
}

/// UTF-8 bytes plus a NUL terminator.
pub(crate) fn encode_text(value: &SqlValue) -> Result<Bytes, TypeError> {
    match value {
        SqlValue::String(s) => Ok(terminated(s.as_bytes())),
        other => Err(mismatch(ValueKind::String, other)),
    }
}

fn terminated(body: &[u8]) -> Bytes {
    let mut buf = BytesMut::with_capacity(body.len() + 1);
    buf.put_slice(body);
    buf.put_u8(0);
    buf.freeze()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_encode_int() {
        let buf = encode_value(56, &SqlValue::Int(42)).unwrap();
        assert_eq!(&buf[..], &[42, 0, 0, 0]);
    }

    #[test]
    fn test_encode_bigint() {
        let buf = encode_value(127, &SqlValue::BigInt(0x0102_0304_0506_0708)).unwrap();
        assert_eq!(&buf[..], &[0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn test_encode_int_accepts_bigint() {
        let buf = encode_value(56, &SqlValue::BigInt(-2)).unwrap();
        assert_eq!(&buf[..], &[0xFE, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_encode_strict_mismatch() {
        let err = encode_value(52, &SqlValue::from("7")).unwrap_err();
        assert_eq!(
            err,
            TypeError::TypeMismatch {
                expected: ValueKind::SmallInt,
                actual: ValueKind::String,
            }
        );
        // A narrower integer is still the wrong shape for BIGINT.
        assert!(encode_value(127, &SqlValue::Int(1)).is_err());
    }

    #[test]
    fn test_encode_bit() {
        assert_eq!(&encode_value(50, &SqlValue::Bool(true)).unwrap()[..], &[1]);
        assert_eq!(&encode_value(50, &SqlValue::Bool(false)).unwrap()[..], &[0]);
    }

    #[test]
    fn test_money_units_exact() {
        assert_eq!(money_units(12.3456), 123_456);
        assert_eq!(money_units(-7.5), -75_000);
        assert_eq!(money_units(0.00019), 1);
        assert_eq!(money_units(-0.00019), -1);
        assert_eq!(money_units(f64::NAN), 0);
    }

    #[test]
    fn test_encode_smallmoney() {
        let buf = encode_value(122, &SqlValue::Float(-7.5)).unwrap();
        assert_eq!(&buf[..], &(-75_000i32).to_le_bytes());
    }

    #[test]
    fn test_encode_smallmoney_saturates() {
        let buf = encode_value(122, &SqlValue::Float(1.0e12)).unwrap();
        assert_eq!(&buf[..], &i32::MAX.to_le_bytes());
    }

    #[test]
    fn test_encode_money_words() {
        // 2^32 + 5 units: high word 1, low word 5
        let amount = 429_496.7301;
        let buf = encode_value(60, &SqlValue::Float(amount)).unwrap();
        assert_eq!(&buf[..], &[1, 0, 0, 0, 5, 0, 0, 0]);
    }

    #[test]
    fn test_encode_money_negative_words() {
        // -1 unit: high word -1, low word 0xFFFF_FFFF
        let buf = encode_value(60, &SqlValue::Float(-0.0001)).unwrap();
        assert_eq!(&buf[..], &[0xFF; 8]);
    }

    #[test]
    fn test_encode_money_requires_float() {
        assert!(matches!(
            encode_value(60, &SqlValue::Int(1)),
            Err(TypeError::TypeMismatch {
                expected: ValueKind::Float,
                actual: ValueKind::Int,
            })
        ));
    }

    #[test]
    fn test_encode_datetime() {
        let dt = Utc.with_ymd_and_hms(1900, 1, 2, 0, 0, 1).unwrap();
        let buf = encode_value(61, &SqlValue::from(dt)).unwrap();
        assert_eq!(&buf[..], &[1, 0, 0, 0, 44, 1, 0, 0]);
    }

    #[test]
    fn test_encode_datetime_converts_to_utc() {
        let offset = chrono::FixedOffset::east_opt(2 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(1900, 1, 2, 2, 0, 0).unwrap();
        let utc = Utc.with_ymd_and_hms(1900, 1, 2, 0, 0, 0).unwrap();
        assert_eq!(
            encode_value(61, &SqlValue::from(local)).unwrap(),
            encode_value(61, &SqlValue::from(utc)).unwrap()
        );
    }

    #[test]
    fn test_encode_smalldatetime() {
        let dt = Utc.with_ymd_and_hms(1900, 1, 3, 1, 30, 59).unwrap();
        let buf = encode_value(58, &SqlValue::from(dt)).unwrap();
        assert_eq!(&buf[..], &[2, 0, 90, 0]);
    }

    #[test]
    fn test_sub_second_ticks_round_down() {
        assert_eq!(sub_second_ticks(0), 0);
        assert_eq!(sub_second_ticks(3_333_333), 0);
        assert_eq!(sub_second_ticks(3_333_334), 1);
        assert_eq!(sub_second_ticks(999_999_999), 299);
    }

    #[test]
    fn test_encode_leap_second_stays_on_its_day() {
        let last = Utc.with_ymd_and_hms(2016, 12, 31, 23, 59, 59).unwrap();
        let leap = SqlValue::from(last.with_nanosecond(1_500_000_000).unwrap());
        let before = SqlValue::from(last.with_nanosecond(999_999_999).unwrap());
        for type_id in [61, 58] {
            assert_eq!(
                encode_value(type_id, &leap).unwrap(),
                encode_value(type_id, &before).unwrap()
            );
        }
    }

    #[test]
    fn test_encode_binary_appends_terminator() {
        let buf = encode_value(37, &SqlValue::from(vec![1u8, 2])).unwrap();
        assert_eq!(&buf[..], &[1, 2, 0]);
        assert!(encode_value(37, &SqlValue::from("12")).is_err());
    }

    #[test]
    fn test_encode_text() {
        assert_eq!(
            &encode_value(39, &SqlValue::from("ab")).unwrap()[..],
            b"ab\0"
        );
        assert_eq!(&encode_value(0xEE, &SqlValue::from("")).unwrap()[..], b"\0");
        assert!(encode_value(47, &SqlValue::Int(1)).is_err());
    }
}
