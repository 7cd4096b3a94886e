//! Per-tag codec dispatch.
//!
//! Each codec-bearing wire type has one row in [`CODECS`] naming its decode
//! and encode functions. Codes without a row (including DECIMAL and NUMERIC)
//! use the NUL-terminated text codec.

use bytes::Bytes;
use chrono::{DateTime, TimeDelta, Utc};
use sybdb_protocol::TypeTag;

use crate::decode::{
    decode_bigint, decode_binary, decode_bit, decode_datetime, decode_float, decode_int,
    decode_money, decode_real, decode_smalldatetime, decode_smallint, decode_smallmoney,
    decode_text, decode_tinyint,
};
use crate::encode::{
    encode_bigint, encode_binary, encode_bit, encode_datetime, encode_float, encode_int,
    encode_money, encode_real, encode_smalldatetime, encode_smallint, encode_smallmoney,
    encode_text, encode_tinyint,
};
use crate::error::TypeError;
use crate::value::SqlValue;

/// Fixed-point scale of MONEY and SMALLMONEY.
pub(crate) const MONEY_SCALE: i64 = 10_000;

/// DATETIME fractional-second resolution.
pub(crate) const TICKS_PER_SEC: u32 = 300;

pub(crate) const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Seconds from 1900-01-01T00:00:00Z to the Unix epoch, negated.
const SQL_EPOCH_UNIX_SECS: i64 = -2_208_988_800;

/// 1900-01-01T00:00:00Z, the origin of both date/time wire formats.
pub(crate) fn sql_epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(SQL_EPOCH_UNIX_SECS)
}

/// Decode and encode functions for one wire type.
#[derive(Debug, Clone, Copy)]
pub struct TagCodec {
    /// Wire bytes to value. Total.
    pub decode: fn(&[u8]) -> SqlValue,
    /// Value to newly allocated wire bytes.
    pub encode: fn(&SqlValue) -> Result<Bytes, TypeError>,
}

const fn row(
    decode: fn(&[u8]) -> SqlValue,
    encode: fn(&SqlValue) -> Result<Bytes, TypeError>,
) -> TagCodec {
    TagCodec { decode, encode }
}

/// NUL-terminated text, also the fallback for unlisted codes.
pub const TEXT: TagCodec = row(decode_text, encode_text);

const BINARY: TagCodec = row(decode_binary, encode_binary);

/// Codec table, one row per codec-bearing tag.
pub static CODECS: [(TypeTag, TagCodec); 19] = [
    (TypeTag::Int1, row(decode_tinyint, encode_tinyint)),
    (TypeTag::Int2, row(decode_smallint, encode_smallint)),
    (TypeTag::Int4, row(decode_int, encode_int)),
    (TypeTag::Int8, row(decode_bigint, encode_bigint)),
    (TypeTag::Real, row(decode_real, encode_real)),
    (TypeTag::Float8, row(decode_float, encode_float)),
    (TypeTag::Bit, row(decode_bit, encode_bit)),
    (TypeTag::Money4, row(decode_smallmoney, encode_smallmoney)),
    (TypeTag::Money, row(decode_money, encode_money)),
    (TypeTag::DateTime, row(decode_datetime, encode_datetime)),
    (TypeTag::DateTime4, row(decode_smalldatetime, encode_smalldatetime)),
    (TypeTag::Image, BINARY),
    (TypeTag::Binary, BINARY),
    (TypeTag::VarBinary, BINARY),
    (TypeTag::XVarBinary, BINARY),
    (TypeTag::Char, TEXT),
    (TypeTag::VarChar, TEXT),
    (TypeTag::NVarChar, TEXT),
    (TypeTag::Text, TEXT),
];

/// Find the codec for a raw type code.
#[must_use]
pub fn lookup(type_id: u8) -> &'static TagCodec {
    match CODECS.iter().find(|(tag, _)| tag.code() == type_id) {
        Some((_, codec)) => codec,
        None => {
            tracing::trace!(type_id, "no codec for type tag, using text codec");
            &TEXT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_row_is_a_distinct_tag() {
        for (i, (a, _)) in CODECS.iter().enumerate() {
            for (b, _) in &CODECS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_every_value_tag_has_a_row() {
        for tag in TypeTag::ALL {
            let listed = CODECS.iter().any(|(t, _)| *t == tag);
            let exact_numeric = matches!(tag, TypeTag::Decimal | TypeTag::Numeric);
            assert_eq!(listed, !exact_numeric, "{tag}");
        }
    }

    #[test]
    fn test_sql_epoch() {
        assert_eq!(sql_epoch().to_rfc3339(), "1900-01-01T00:00:00+00:00");
    }
}
