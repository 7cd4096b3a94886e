//! # sybdb-protocol
//!
//! Wire-level type identifiers for the Sybase / SQL Server DB-Library
//! flavour of the Tabular Data Stream (TDS) protocol.
//!
//! This crate is the leaf of the workspace. It knows the numeric type codes
//! that appear in column metadata and parameter definitions, the fixed wire
//! width and native value shape of each, and which DB-Library `*BIND`
//! strategy a column of that type is bound with.
//!
//! ## Design Philosophy
//!
//! Nothing here performs I/O or holds state. Value encoding and decoding
//! live in `sybdb-types`, which depends on this crate for the tag table only.
//!
//! ## Example
//!
//! ```rust
//! use sybdb_protocol::{BindType, TypeTag, bind_type};
//!
//! assert_eq!(TypeTag::from_u8(56), Some(TypeTag::Int4));
//! assert_eq!(TypeTag::Int4.fixed_len(), Some(4));
//! assert_eq!(bind_type(56), BindType::IntBind);
//! // Unknown codes fall back to NUL-terminated string binding.
//! assert_eq!(bind_type(0xEE), BindType::NtbStringBind);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod bind;
pub mod error;
pub mod types;

pub use bind::{BindType, bind_type};
pub use error::ProtocolError;
pub use types::{TypeTag, ValueKind};
