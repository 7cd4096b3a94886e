//! Coercion policies for lenient parameter binding.
//!
//! Wire types require an exact value shape, with one exception: INT accepts
//! any of the integer shapes a caller is likely to hold without casting.
//! The rule lives here so that every encoder path applies the same one.

use crate::value::SqlValue;

/// Narrowing policy applied when encoding under the INT wire type.
///
/// Accepted shapes:
///
/// - [`SqlValue::Int`], passed through.
/// - [`SqlValue::BigInt`], which is also what a platform-width `isize`
///   converts to, narrowed with `as i32`.
///
/// Narrowing keeps the low 32 bits and performs no overflow check, so
/// `i64::from(i32::MAX) + 1` encodes as `i32::MIN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Int4Coercion;

impl Int4Coercion {
    /// Narrow `value` to the INT wire width, or `None` if its shape is not
    /// accepted.
    #[must_use]
    pub fn narrow(value: &SqlValue) -> Option<i32> {
        match value {
            SqlValue::Int(v) => Some(*v),
            SqlValue::BigInt(v) => Some(*v as i32),
            _ => None,
        }
    }
}
