//! Arithmetic error types.

use thiserror::Error;

/// Errors that can occur during arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The result does not fit in an `i64`.
    #[error("integer overflow computing {a} {op} {b}")]
    Overflow { op: &'static str, a: i64, b: i64 },
}
