//! Trait for converting from SQL values to Rust types.

use bytes::Bytes;
use chrono::{DateTime, FixedOffset, Utc};
use sybdb_protocol::ValueKind;

use crate::error::TypeError;
use crate::value::SqlValue;

/// Trait for types that can be converted from SQL values.
///
/// This trait is implemented for common Rust types to enable type-safe
/// extraction of decoded column values. Lossless widening is allowed
/// (`TINYINT` into `i32`, `REAL` into `f64`); anything else is a
/// [`TypeError::TypeMismatch`].
pub trait FromSql: Sized {
    /// Convert from a SQL value to this type.
    fn from_sql(value: &SqlValue) -> Result<Self, TypeError>;
}

fn mismatch<T>(expected: ValueKind, value: &SqlValue) -> Result<T, TypeError> {
    Err(TypeError::TypeMismatch {
        expected,
        actual: value.kind(),
    })
}

impl FromSql for bool {
    fn from_sql(value: &SqlValue) -> Result<Self, TypeError> {
        match value {
            SqlValue::Bool(v) => Ok(*v),
            _ => mismatch(ValueKind::Bool, value),
        }
    }
}

impl FromSql for u8 {
    fn from_sql(value: &SqlValue) -> Result<Self, TypeError> {
        match value {
            SqlValue::TinyInt(v) => Ok(*v),
            _ => mismatch(ValueKind::TinyInt, value),
        }
    }
}

impl FromSql for i16 {
    fn from_sql(value: &SqlValue) -> Result<Self, TypeError> {
        match value {
            SqlValue::SmallInt(v) => Ok(*v),
            SqlValue::TinyInt(v) => Ok(i16::from(*v)),
            _ => mismatch(ValueKind::SmallInt, value),
        }
    }
}

impl FromSql for i32 {
    fn from_sql(value: &SqlValue) -> Result<Self, TypeError> {
        match value {
            SqlValue::Int(v) => Ok(*v),
            SqlValue::SmallInt(v) => Ok(i32::from(*v)),
            SqlValue::TinyInt(v) => Ok(i32::from(*v)),
            _ => mismatch(ValueKind::Int, value),
        }
    }
}

impl FromSql for i64 {
    fn from_sql(value: &SqlValue) -> Result<Self, TypeError> {
        value
            .as_i64()
            .map_or_else(|| mismatch(ValueKind::BigInt, value), Ok)
    }
}

impl FromSql for f32 {
    fn from_sql(value: &SqlValue) -> Result<Self, TypeError> {
        match value {
            SqlValue::Real(v) => Ok(*v),
            _ => mismatch(ValueKind::Real, value),
        }
    }
}

impl FromSql for f64 {
    fn from_sql(value: &SqlValue) -> Result<Self, TypeError> {
        value
            .as_f64()
            .map_or_else(|| mismatch(ValueKind::Float, value), Ok)
    }
}

impl FromSql for String {
    fn from_sql(value: &SqlValue) -> Result<Self, TypeError> {
        match value {
            SqlValue::String(v) => Ok(v.clone()),
            _ => mismatch(ValueKind::String, value),
        }
    }
}

impl FromSql for Bytes {
    fn from_sql(value: &SqlValue) -> Result<Self, TypeError> {
        match value {
            SqlValue::Binary(v) => Ok(v.clone()),
            _ => mismatch(ValueKind::Binary, value),
        }
    }
}

impl FromSql for Vec<u8> {
    fn from_sql(value: &SqlValue) -> Result<Self, TypeError> {
        match value {
            SqlValue::Binary(v) => Ok(v.to_vec()),
            _ => mismatch(ValueKind::Binary, value),
        }
    }
}

impl FromSql for DateTime<FixedOffset> {
    fn from_sql(value: &SqlValue) -> Result<Self, TypeError> {
        value
            .as_datetime()
            .map_or_else(|| mismatch(ValueKind::DateTime, value), Ok)
    }
}

impl FromSql for DateTime<Utc> {
    fn from_sql(value: &SqlValue) -> Result<Self, TypeError> {
        DateTime::<FixedOffset>::from_sql(value).map(|dt| dt.with_timezone(&Utc))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_widening() {
        assert_eq!(i32::from_sql(&SqlValue::TinyInt(200)).unwrap(), 200);
        assert_eq!(i64::from_sql(&SqlValue::SmallInt(-3)).unwrap(), -3);
        assert_eq!(f64::from_sql(&SqlValue::Real(0.5)).unwrap(), 0.5);
    }

    #[test]
    fn test_narrowing_is_rejected() {
        assert!(matches!(
            i16::from_sql(&SqlValue::Int(1)),
            Err(TypeError::TypeMismatch {
                expected: ValueKind::SmallInt,
                actual: ValueKind::Int,
            })
        ));
        assert!(f32::from_sql(&SqlValue::Float(1.0)).is_err());
    }

    #[test]
    fn test_binary_and_text() {
        let bin = SqlValue::from(vec![1u8, 2]);
        assert_eq!(Vec::<u8>::from_sql(&bin).unwrap(), vec![1, 2]);
        assert!(String::from_sql(&bin).is_err());
        assert_eq!(String::from_sql(&SqlValue::from("x")).unwrap(), "x");
    }
}
