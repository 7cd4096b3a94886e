//! DB-Library binary decoding for SQL values.
//!
//! Every decoder here is total: the framing layer hands over a buffer of the
//! type's declared width and decoding cannot fail. A short fixed-width buffer
//! reads as if the missing high-order bytes were zero; trailing extra bytes
//! are ignored.

use bytes::{Buf, Bytes};
use chrono::{DateTime, TimeDelta, Utc};

use crate::codec::{self, MONEY_SCALE, NANOS_PER_SEC, TICKS_PER_SEC};
use crate::value::SqlValue;

/// Decode a column value from its wire bytes.
///
/// Unrecognized type codes are decoded as NUL-terminated text. Binary and
/// text results are copied out, so `data` may be reused as soon as this
/// returns.
#[must_use]
pub fn decode_value(type_id: u8, data: &[u8]) -> SqlValue {
    (codec::lookup(type_id).decode)(data)
}

/// Copy a fixed-width field, zero-filling whatever the buffer lacks.
fn fixed<const N: usize>(data: &[u8]) -> [u8; N] {
    let mut raw = [0u8; N];
    let len = data.len().min(N);
    raw[..len].copy_from_slice(&data[..len]);
    raw
}

pub(crate) fn decode_tinyint(data: &[u8]) -> SqlValue {
    SqlValue::TinyInt(fixed::<1>(data)[0])
}

pub(crate) fn decode_smallint(data: &[u8]) -> SqlValue {
    SqlValue::SmallInt(i16::from_le_bytes(fixed(data)))
}

pub(crate) fn decode_int(data: &[u8]) -> SqlValue {
    SqlValue::Int(i32::from_le_bytes(fixed(data)))
}

pub(crate) fn decode_bigint(data: &[u8]) -> SqlValue {
    SqlValue::BigInt(i64::from_le_bytes(fixed(data)))
}

pub(crate) fn decode_real(data: &[u8]) -> SqlValue {
    SqlValue::Real(f32::from_le_bytes(fixed(data)))
}

pub(crate) fn decode_float(data: &[u8]) -> SqlValue {
    SqlValue::Float(f64::from_le_bytes(fixed(data)))
}

/// Only the byte value 1 is true.
pub(crate) fn decode_bit(data: &[u8]) -> SqlValue {
    SqlValue::Bool(data.first() == Some(&1))
}

pub(crate) fn decode_smallmoney(data: &[u8]) -> SqlValue {
    let units = i32::from_le_bytes(fixed(data));
    SqlValue::Float(f64::from(units) / MONEY_SCALE as f64)
}

pub(crate) fn decode_money(data: &[u8]) -> SqlValue {
    // MONEY is 8 bytes: signed high word, then unsigned low word
    let raw = fixed::<8>(data);
    let mut buf = &raw[..];
    let high = buf.get_i32_le();
    let low = buf.get_u32_le();

    let units = i64::from(high) * (1_i64 << 32) + i64::from(low);
    SqlValue::Float(units as f64 / MONEY_SCALE as f64)
}

pub(crate) fn decode_datetime(data: &[u8]) -> SqlValue {
    // DATETIME is 8 bytes: days since 1900-01-01, then 300ths of a second
    let raw = fixed::<8>(data);
    let mut buf = &raw[..];
    let days = buf.get_i32_le();
    let ticks = buf.get_u32_le();

    let nanos = i64::from(ticks) * NANOS_PER_SEC / i64::from(TICKS_PER_SEC);
    let offset = TimeDelta::days(i64::from(days)) + TimeDelta::nanoseconds(nanos);
    SqlValue::DateTime(from_epoch(offset, days < 0).fixed_offset())
}

pub(crate) fn decode_smalldatetime(data: &[u8]) -> SqlValue {
    // SMALLDATETIME is 4 bytes: days since 1900-01-01, then minutes
    let raw = fixed::<4>(data);
    let mut buf = &raw[..];
    let days = buf.get_u16_le();
    let minutes = buf.get_u16_le();

    let offset = TimeDelta::days(i64::from(days)) + TimeDelta::minutes(i64::from(minutes));
    SqlValue::DateTime(from_epoch(offset, false).fixed_offset())
}

/// Instant at `offset` past the 1900 epoch, saturating outside chrono's range.
fn from_epoch(offset: TimeDelta, negative: bool) -> DateTime<Utc> {
    codec::sql_epoch()
        .checked_add_signed(offset)
        .unwrap_or(if negative {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
}

/// Drops the trailing terminator byte.
pub(crate) fn decode_binary(data: &[u8]) -> SqlValue {
    let body = data.split_last().map_or(&[][..], |(_, body)| body);
    SqlValue::Binary(Bytes::copy_from_slice(body))
}

/// Reads up to the first NUL; invalid UTF-8 is replaced rather than rejected.
pub(crate) fn decode_text(data: &[u8]) -> SqlValue {
    let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
    SqlValue::String(String::from_utf8_lossy(&data[..end]).into_owned())
}
