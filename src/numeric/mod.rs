// ============================================================================
// Numeric Module
// Arbitrary-precision decimal arithmetic for column statistics
// ============================================================================
//
// This module provides:
// - Decimal: arbitrary-precision decimal with exact add/sub/mul
// - Precision: significant-digit budget for every inexact operation
// - sqrt: Newton-Raphson square root with guard digits
// - NumericError: Error types for arithmetic and parsing
//
// Design principles:
// - No floating-point results (f64 is only used to seed the square root)
// - No ambient precision: division, powers and roots take a Precision
// - Rounding is always half away from zero
// - All fallible operations return Result (no panics)

mod decimal;
mod errors;
mod precision;
mod sqrt;

pub use decimal::{Decimal, MAX_EXPONENT};
pub use errors::{NumericError, NumericResult};
pub use precision::Precision;
pub use sqrt::{sqrt, GUARD_DIGITS};
