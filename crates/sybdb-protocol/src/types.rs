//! DB-Library data type definitions.
//!
//! This module defines the server data types as they appear on the wire,
//! together with the native value shape each one carries.

use std::fmt;

use crate::error::ProtocolError;

/// DB-Library wire type identifiers (`SYB*` codes).
///
/// These correspond to the type bytes reported for result columns and
/// supplied for bound parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TypeTag {
    // Fixed-length types
    /// TINYINT, 8-bit unsigned integer.
    Int1 = 48,
    /// SMALLINT, 16-bit signed integer.
    Int2 = 52,
    /// INT, 32-bit signed integer.
    Int4 = 56,
    /// BIGINT, 64-bit signed integer.
    Int8 = 127,
    /// REAL, IEEE-754 single precision.
    Real = 59,
    /// FLOAT(53), IEEE-754 double precision.
    Float8 = 62,
    /// BIT.
    Bit = 50,
    /// SMALLMONEY, 4-byte fixed point.
    Money4 = 122,
    /// MONEY, 8-byte fixed point split into high/low words.
    Money = 60,
    /// DATETIME, days plus 1/300-second ticks.
    DateTime = 61,
    /// SMALLDATETIME, days plus minutes.
    DateTime4 = 58,

    // Character types (NUL-terminated on the wire)
    /// CHAR.
    Char = 47,
    /// VARCHAR.
    VarChar = 39,
    /// NVARCHAR.
    NVarChar = 103,
    /// TEXT.
    Text = 35,

    // Binary types (one trailing terminator byte on the wire)
    /// IMAGE.
    Image = 34,
    /// BINARY.
    Binary = 45,
    /// VARBINARY.
    VarBinary = 37,
    /// Extended VARBINARY.
    XVarBinary = 165,

    // Exact numerics: bind table only, no native value support
    /// DECIMAL.
    Decimal = 106,
    /// NUMERIC.
    Numeric = 108,
}

/// Native value shape carried by a [`TypeTag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// 8-bit unsigned integer.
    TinyInt,
    /// 16-bit signed integer.
    SmallInt,
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    BigInt,
    /// 32-bit float.
    Real,
    /// 64-bit float.
    Float,
    /// Boolean.
    Bool,
    /// Opaque byte sequence.
    Binary,
    /// UTF-8 text.
    String,
    /// Calendar instant.
    DateTime,
}

impl ValueKind {
    /// Short name of the native Rust shape.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::TinyInt => "u8",
            Self::SmallInt => "i16",
            Self::Int => "i32",
            Self::BigInt => "i64",
            Self::Real => "f32",
            Self::Float => "f64",
            Self::Bool => "bool",
            Self::Binary => "bytes",
            Self::String => "string",
            Self::DateTime => "datetime",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TypeTag {
    /// Every known tag, in wire-table order.
    pub const ALL: [TypeTag; 21] = [
        Self::Int1,
        Self::Int2,
        Self::Int4,
        Self::Int8,
        Self::Char,
        Self::VarChar,
        Self::NVarChar,
        Self::Text,
        Self::Real,
        Self::Float8,
        Self::Bit,
        Self::Money4,
        Self::Money,
        Self::DateTime,
        Self::DateTime4,
        Self::Image,
        Self::Binary,
        Self::VarBinary,
        Self::XVarBinary,
        Self::Decimal,
        Self::Numeric,
    ];

    /// Create a type tag from a raw byte.
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            48 => Some(Self::Int1),
            52 => Some(Self::Int2),
            56 => Some(Self::Int4),
            127 => Some(Self::Int8),
            59 => Some(Self::Real),
            62 => Some(Self::Float8),
            50 => Some(Self::Bit),
            122 => Some(Self::Money4),
            60 => Some(Self::Money),
            61 => Some(Self::DateTime),
            58 => Some(Self::DateTime4),
            47 => Some(Self::Char),
            39 => Some(Self::VarChar),
            103 => Some(Self::NVarChar),
            35 => Some(Self::Text),
            34 => Some(Self::Image),
            45 => Some(Self::Binary),
            37 => Some(Self::VarBinary),
            165 => Some(Self::XVarBinary),
            106 => Some(Self::Decimal),
            108 => Some(Self::Numeric),
            _ => None,
        }
    }

    /// The raw wire code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Get the fixed size of this type in bytes, if applicable.
    #[must_use]
    pub const fn fixed_len(&self) -> Option<usize> {
        match self {
            Self::Int1 | Self::Bit => Some(1),
            Self::Int2 => Some(2),
            Self::Int4 | Self::Real | Self::Money4 | Self::DateTime4 => Some(4),
            Self::Int8 | Self::Float8 | Self::Money | Self::DateTime => Some(8),
            _ => None,
        }
    }

    /// Check if this is a fixed-length type.
    #[must_use]
    pub const fn is_fixed_length(&self) -> bool {
        self.fixed_len().is_some()
    }

    /// Check if this is a terminator-framed binary type.
    #[must_use]
    pub const fn is_binary(&self) -> bool {
        matches!(
            self,
            Self::Image | Self::Binary | Self::VarBinary | Self::XVarBinary
        )
    }

    /// Check if this is a NUL-terminated character type.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(
            self,
            Self::Char | Self::VarChar | Self::NVarChar | Self::Text
        )
    }

    /// The native value shape for this tag.
    ///
    /// DECIMAL and NUMERIC have no native representation; the codec handles
    /// them on its text path, so they report [`ValueKind::String`].
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Int1 => ValueKind::TinyInt,
            Self::Int2 => ValueKind::SmallInt,
            Self::Int4 => ValueKind::Int,
            Self::Int8 => ValueKind::BigInt,
            Self::Real => ValueKind::Real,
            Self::Float8 | Self::Money4 | Self::Money => ValueKind::Float,
            Self::Bit => ValueKind::Bool,
            Self::DateTime | Self::DateTime4 => ValueKind::DateTime,
            Self::Image | Self::Binary | Self::VarBinary | Self::XVarBinary => ValueKind::Binary,
            Self::Char
            | Self::VarChar
            | Self::NVarChar
            | Self::Text
            | Self::Decimal
            | Self::Numeric => ValueKind::String,
        }
    }

    /// SQL type name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Int1 => "TINYINT",
            Self::Int2 => "SMALLINT",
            Self::Int4 => "INT",
            Self::Int8 => "BIGINT",
            Self::Real => "REAL",
            Self::Float8 => "FLOAT",
            Self::Bit => "BIT",
            Self::Money4 => "SMALLMONEY",
            Self::Money => "MONEY",
            Self::DateTime => "DATETIME",
            Self::DateTime4 => "SMALLDATETIME",
            Self::Char => "CHAR",
            Self::VarChar => "VARCHAR",
            Self::NVarChar => "NVARCHAR",
            Self::Text => "TEXT",
            Self::Image => "IMAGE",
            Self::Binary => "BINARY",
            Self::VarBinary | Self::XVarBinary => "VARBINARY",
            Self::Decimal => "DECIMAL",
            Self::Numeric => "NUMERIC",
        }
    }
}

impl TryFrom<u8> for TypeTag {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or(ProtocolError::UnknownTypeTag(value))
    }
}

impl From<TypeTag> for u8 {
    fn from(tag: TypeTag) -> Self {
        tag.code()
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
