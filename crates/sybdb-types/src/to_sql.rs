//! Trait for converting Rust types to SQL values.

use bytes::Bytes;
use chrono::{DateTime, TimeZone};
use sybdb_protocol::TypeTag;

use crate::encode::encode_value;
use crate::error::TypeError;
use crate::value::SqlValue;

/// Trait for types that can be bound as query parameters.
///
/// Each implementation names the wire type its values are bound with by
/// default, so callers do not need to pick a tag for ordinary Rust values.
pub trait ToSql {
    /// Convert this value to a SQL value.
    fn to_sql(&self) -> SqlValue;

    /// The wire type this value binds as.
    fn type_tag(&self) -> TypeTag;
}

/// Encode a parameter under its default wire type.
///
/// # Errors
///
/// Propagates [`TypeError::TypeMismatch`] from [`encode_value`]; this can
/// only happen if a `ToSql` implementation pairs a value with a tag of a
/// different shape.
pub fn encode_param(param: &dyn ToSql) -> Result<(TypeTag, Bytes), TypeError> {
    let tag = param.type_tag();
    let wire = encode_value(tag.code(), &param.to_sql())?;
    Ok((tag, wire))
}

macro_rules! impl_to_sql {
    ($($ty:ty => $tag:ident),* $(,)?) => {
        $(
            impl ToSql for $ty {
                fn to_sql(&self) -> SqlValue {
                    SqlValue::from(*self)
                }

                fn type_tag(&self) -> TypeTag {
                    TypeTag::$tag
                }
            }
        )*
    };
}

impl_to_sql! {
    u8 => Int1,
    i16 => Int2,
    i32 => Int4,
    i64 => Int8,
    f32 => Real,
    f64 => Float8,
    bool => Bit,
}

/// Platform-width integers bind as INT, narrowed by
/// [`Int4Coercion`](crate::coerce::Int4Coercion).
impl ToSql for isize {
    fn to_sql(&self) -> SqlValue {
        SqlValue::from(*self)
    }

    fn type_tag(&self) -> TypeTag {
        TypeTag::Int4
    }
}

impl ToSql for str {
    fn to_sql(&self) -> SqlValue {
        SqlValue::String(self.to_owned())
    }

    fn type_tag(&self) -> TypeTag {
        TypeTag::NVarChar
    }
}

impl ToSql for String {
    fn to_sql(&self) -> SqlValue {
        SqlValue::String(self.clone())
    }

    fn type_tag(&self) -> TypeTag {
        TypeTag::NVarChar
    }
}

impl ToSql for [u8] {
    fn to_sql(&self) -> SqlValue {
        SqlValue::Binary(Bytes::copy_from_slice(self))
    }

    fn type_tag(&self) -> TypeTag {
        TypeTag::VarBinary
    }
}

impl ToSql for Vec<u8> {
    fn to_sql(&self) -> SqlValue {
        SqlValue::Binary(Bytes::copy_from_slice(self))
    }

    fn type_tag(&self) -> TypeTag {
        TypeTag::VarBinary
    }
}

impl ToSql for Bytes {
    fn to_sql(&self) -> SqlValue {
        SqlValue::Binary(self.clone())
    }

    fn type_tag(&self) -> TypeTag {
        TypeTag::VarBinary
    }
}

impl<Tz: TimeZone> ToSql for DateTime<Tz> {
    fn to_sql(&self) -> SqlValue {
        SqlValue::DateTime(self.fixed_offset())
    }

    fn type_tag(&self) -> TypeTag {
        TypeTag::DateTime
    }
}

impl<T: ToSql + ?Sized> ToSql for &T {
    fn to_sql(&self) -> SqlValue {
        (**self).to_sql()
    }

    fn type_tag(&self) -> TypeTag {
        (**self).type_tag()
    }
}
