// ============================================================================
// Numeric Errors
// Error types for arbitrary-precision decimal operations
// ============================================================================

use std::fmt;

/// Errors that can occur during decimal arithmetic and conversion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input text is not a decimal numeral
    InvalidInput(String),
    /// Attempted division by zero
    DivisionByZero,
    /// Requested digit count is outside the supported range
    PrecisionOutOfRange(u64),
    /// Floating-point value is NaN or infinite
    NotFinite,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidInput(text) => {
                write!(f, "invalid input: '{}' is not a decimal number", text)
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::PrecisionOutOfRange(digits) => write!(
                f,
                "precision out of range: {} digits (supported: {}..={})",
                digits,
                super::Precision::MIN_DIGITS,
                super::Precision::MAX_DIGITS
            ),
            NumericError::NotFinite => write!(f, "value is not finite"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
