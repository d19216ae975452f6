//! Domain layer for the calculator API.
//!
//! This crate provides the arithmetic operations exposed over HTTP:
//! - `add` and `sub` over `i64` with explicit overflow detection
//! - `ArithmeticError` for operations whose result does not fit

pub mod error;
pub mod ops;

pub use error::ArithmeticError;
pub use ops::{add, sub};
