//! SQL value representation.

use bytes::Bytes;
use chrono::{DateTime, FixedOffset, TimeZone};
use sybdb_protocol::ValueKind;

/// A native value read from or bound to a DB-Library column.
///
/// The variants are exactly the shapes the wire codec understands, so an
/// encoder's shape check is an exhaustive `match` over this enum.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// 8-bit unsigned integer (TINYINT).
    TinyInt(u8),
    /// 16-bit signed integer (SMALLINT).
    SmallInt(i16),
    /// 32-bit signed integer (INT).
    Int(i32),
    /// 64-bit signed integer (BIGINT).
    BigInt(i64),
    /// 32-bit floating point (REAL).
    Real(f32),
    /// 64-bit floating point (FLOAT, MONEY, SMALLMONEY).
    Float(f64),
    /// Boolean value (BIT).
    Bool(bool),
    /// Binary value (IMAGE, BINARY, VARBINARY).
    Binary(Bytes),
    /// String value (CHAR, VARCHAR, NVARCHAR, TEXT).
    String(String),
    /// Calendar instant (DATETIME, SMALLDATETIME).
    ///
    /// Equality compares instants, so values with different offsets that
    /// name the same moment are equal.
    DateTime(DateTime<FixedOffset>),
}

impl SqlValue {
    /// The native shape of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::TinyInt(_) => ValueKind::TinyInt,
            Self::SmallInt(_) => ValueKind::SmallInt,
            Self::Int(_) => ValueKind::Int,
            Self::BigInt(_) => ValueKind::BigInt,
            Self::Real(_) => ValueKind::Real,
            Self::Float(_) => ValueKind::Float,
            Self::Bool(_) => ValueKind::Bool,
            Self::Binary(_) => ValueKind::Binary,
            Self::String(_) => ValueKind::String,
            Self::DateTime(_) => ValueKind::DateTime,
        }
    }

    /// Get the value as a bool, if it is one.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the value as an i64, if it is any integer.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::BigInt(v) => Some(*v),
            Self::Int(v) => Some(i64::from(*v)),
            Self::SmallInt(v) => Some(i64::from(*v)),
            Self::TinyInt(v) => Some(i64::from(*v)),
            _ => None,
        }
    }

    /// Get the value as an f64, if it is a float.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Real(v) => Some(f64::from(*v)),
            _ => None,
        }
    }

    /// Get the value as a string slice, if it is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Get the value as bytes, if it is binary.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Binary(v) => Some(v),
            _ => None,
        }
    }

    /// Get the value as a date/time, if it is one.
    #[must_use]
    pub fn as_datetime(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            Self::DateTime(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<u8> for SqlValue {
    fn from(v: u8) -> Self {
        Self::TinyInt(v)
    }
}

impl From<i16> for SqlValue {
    fn from(v: i16) -> Self {
        Self::SmallInt(v)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        Self::BigInt(v)
    }
}

/// The platform-width integer travels as a 64-bit value.
impl From<isize> for SqlValue {
    fn from(v: isize) -> Self {
        Self::BigInt(v as i64)
    }
}

impl From<f32> for SqlValue {
    fn from(v: f32) -> Self {
        Self::Real(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<Bytes> for SqlValue {
    fn from(v: Bytes) -> Self {
        Self::Binary(v)
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(v: Vec<u8>) -> Self {
        Self::Binary(Bytes::from(v))
    }
}

impl From<&[u8]> for SqlValue {
    fn from(v: &[u8]) -> Self {
        Self::Binary(Bytes::copy_from_slice(v))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for SqlValue {
    fn from(v: DateTime<Tz>) -> Self {
        Self::DateTime(v.fixed_offset())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_kind() {
        assert_eq!(SqlValue::from(5u8).kind(), ValueKind::TinyInt);
        assert_eq!(SqlValue::from(5).kind(), ValueKind::Int);
        assert_eq!(SqlValue::from(5isize).kind(), ValueKind::BigInt);
        assert_eq!(SqlValue::from("x").kind(), ValueKind::String);
        assert_eq!(SqlValue::from(vec![1u8]).kind(), ValueKind::Binary);
    }

    #[test]
    fn test_datetime_equality_ignores_offset() {
        let utc = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let plus_two = utc.with_timezone(&FixedOffset::east_opt(7200).unwrap());
        assert_eq!(SqlValue::from(utc), SqlValue::from(plus_two));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(SqlValue::SmallInt(-3).as_i64(), Some(-3));
        assert_eq!(SqlValue::Real(1.5).as_f64(), Some(1.5));
        assert_eq!(SqlValue::Bool(true).as_str(), None);
        assert_eq!(SqlValue::from(&b"ab"[..]).as_bytes(), Some(&b"ab"[..]));
    }
}
