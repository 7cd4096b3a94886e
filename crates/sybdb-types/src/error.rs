//! Type conversion error types.

use sybdb_protocol::ValueKind;
use thiserror::Error;

/// Errors that can occur during type conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TypeError {
    /// The value's shape does not match what the wire type requires.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Shape the wire type requires.
        expected: ValueKind,
        /// Shape that was supplied.
        actual: ValueKind,
    },
}

impl TypeError {
    /// Check if this error is transient and may succeed on retry.
    ///
    /// Conversion errors come from binding the wrong value to a column, so
    /// retrying the same call always fails the same way.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_message() {
        let err = TypeError::TypeMismatch {
            expected: ValueKind::SmallInt,
            actual: ValueKind::String,
        };
        assert_eq!(err.to_string(), "type mismatch: expected i16, got string");
        assert!(!err.is_transient());
    }
}
