//! Protocol error types.

use thiserror::Error;

/// Errors raised while interpreting protocol-level identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// The byte is not a type code this crate knows about.
    #[error("unknown type tag: {0} (0x{0:02X})")]
    UnknownTypeTag(u8),
}
