//! # sybdb-types
//!
//! Wire value codec for the Sybase / SQL Server DB-Library protocol.
//!
//! This crate converts between the raw column and parameter bytes exchanged
//! with the server and native Rust values. It is stateless: every call reads
//! its own input and returns a newly owned output.
//!
//! ## Operations
//!
//! - [`decode_value`]: wire bytes to [`SqlValue`]; total over well-formed input.
//! - [`encode_value`]: [`SqlValue`] to wire bytes; fails only with
//!   [`TypeError::TypeMismatch`].
//! - [`sybdb_protocol::bind_type`]: wire type to DB-Library bind strategy.
//!
//! ## Type Mappings
//!
//! | Server Type | Code | Rust Type |
//! |-------------|------|-----------|
//! | `TINYINT` | 48 | `u8` |
//! | `SMALLINT` | 52 | `i16` |
//! | `INT` | 56 | `i32` (also accepts `i64` when encoding) |
//! | `BIGINT` | 127 | `i64` |
//! | `REAL` | 59 | `f32` |
//! | `FLOAT` | 62 | `f64` |
//! | `BIT` | 50 | `bool` |
//! | `SMALLMONEY` / `MONEY` | 122 / 60 | `f64` |
//! | `DATETIME` / `SMALLDATETIME` | 61 / 58 | `chrono::DateTime` |
//! | `CHAR` / `VARCHAR` / `NVARCHAR` / `TEXT` | 47 / 39 / 103 / 35 | `String` |
//! | `IMAGE` / `BINARY` / `VARBINARY` | 34 / 45 / 37, 165 | `bytes::Bytes` |
//!
//! ## Example
//!
//! ```rust
//! use sybdb_types::{SqlValue, decode_value, encode_value};
//!
//! let wire = encode_value(60, &SqlValue::Float(12.3456)).unwrap();
//! assert_eq!(decode_value(60, &wire), SqlValue::Float(12.3456));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod codec;
pub mod coerce;
pub mod decode;
pub mod encode;
pub mod error;
pub mod from_sql;
pub mod to_sql;
pub mod value;

pub use codec::TagCodec;
pub use coerce::Int4Coercion;
pub use decode::decode_value;
pub use encode::encode_value;
pub use error::TypeError;
pub use from_sql::FromSql;
pub use to_sql::{ToSql, encode_param};
pub use value::SqlValue;

pub use sybdb_protocol::{BindType, TypeTag, ValueKind, bind_type};
