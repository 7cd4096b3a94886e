//! DB-Library column binding strategies.
//!
//! `dbbind` copies a column's wire bytes into an application buffer using a
//! conversion routine selected by a `*BIND` constant. [`bind_type`] picks
//! that constant for a wire type code.

use std::fmt;

use crate::types::TypeTag;

/// DB-Library `*BIND` constants, with their `sybdb.h` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum BindType {
    /// `NTBSTRINGBIND`: NUL-terminated string. Also the fallback.
    NtbStringBind = 2,
    /// `TINYBIND`.
    TinyBind = 6,
    /// `SMALLBIND`.
    SmallBind = 7,
    /// `INTBIND`.
    IntBind = 8,
    /// `FLT8BIND`.
    Flt8Bind = 9,
    /// `REALBIND`.
    RealBind = 10,
    /// `DATETIMEBIND`.
    DateTimeBind = 11,
    /// `SMALLDATETIMEBIND`.
    SmallDateTimeBind = 12,
    /// `MONEYBIND`.
    MoneyBind = 13,
    /// `SMALLMONEYBIND`.
    SmallMoneyBind = 14,
    /// `BINARYBIND`.
    BinaryBind = 15,
    /// `BITBIND`.
    BitBind = 16,
    /// `NUMERICBIND`.
    NumericBind = 17,
    /// `DECIMALBIND`.
    DecimalBind = 18,
    /// `BIGINTBIND`.
    BigIntBind = 30,
}

impl BindType {
    /// The integer value passed to `dbbind`.
    #[must_use]
    pub const fn value(self) -> i32 {
        self as i32
    }

    /// The C macro name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NtbStringBind => "NTBSTRINGBIND",
            Self::TinyBind => "TINYBIND",
            Self::SmallBind => "SMALLBIND",
            Self::IntBind => "INTBIND",
            Self::Flt8Bind => "FLT8BIND",
            Self::RealBind => "REALBIND",
            Self::DateTimeBind => "DATETIMEBIND",
            Self::SmallDateTimeBind => "SMALLDATETIMEBIND",
            Self::MoneyBind => "MONEYBIND",
            Self::SmallMoneyBind => "SMALLMONEYBIND",
            Self::BinaryBind => "BINARYBIND",
            Self::BitBind => "BITBIND",
            Self::NumericBind => "NUMERICBIND",
            Self::DecimalBind => "DECIMALBIND",
            Self::BigIntBind => "BIGINTBIND",
        }
    }
}

impl fmt::Display for BindType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TypeTag {
    /// The binding strategy for columns of this type.
    #[must_use]
    pub const fn bind_type(&self) -> BindType {
        match self {
            Self::Image | Self::VarBinary | Self::Binary | Self::XVarBinary => BindType::BinaryBind,
            Self::Bit => BindType::BitBind,
            Self::Text | Self::VarChar | Self::Char | Self::NVarChar => BindType::NtbStringBind,
            Self::DateTime => BindType::DateTimeBind,
            Self::DateTime4 => BindType::SmallDateTimeBind,
            Self::Decimal => BindType::DecimalBind,
            Self::Numeric => BindType::NumericBind,
            Self::Float8 => BindType::Flt8Bind,
            Self::Real => BindType::RealBind,
            Self::Int1 => BindType::TinyBind,
            Self::Int2 => BindType::SmallBind,
            Self::Int4 => BindType::IntBind,
            Self::Int8 => BindType::BigIntBind,
            Self::Money => BindType::MoneyBind,
            Self::Money4 => BindType::SmallMoneyBind,
        }
    }
}

/// Map a raw wire type code to its binding strategy.
///
/// Codes without a table entry bind as [`BindType::NtbStringBind`], which
/// every server type can be converted to. XVARBINARY (165) carries raw bytes
/// and binds as [`BindType::BinaryBind`] like the other binary types.
#[must_use]
pub fn bind_type(type_id: u8) -> BindType {
    match TypeTag::from_u8(type_id) {
        Some(tag) => tag.bind_type(),
        None => {
            tracing::debug!(type_id, "unrecognized type tag, binding as NTBSTRINGBIND");
            BindType::NtbStringBind
        }
    }
}
