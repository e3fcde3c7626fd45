// ============================================================================
// Statistics Errors
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;

/// Errors raised while aggregating a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// Column has no values
    EmptyColumn { label: String },
    /// Input rows do not all have the same length
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Underlying decimal operation failed
    Numeric(NumericError),
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::EmptyColumn { label } => write!(f, "column '{}' has no values", label),
            StatsError::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} fields, expected {}",
                row, found, expected
            ),
            StatsError::Numeric(err) => write!(f, "numeric error: {}", err),
        }
    }
}

impl std::error::Error for StatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StatsError::Numeric(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NumericError> for StatsError {
    fn from(err: NumericError) -> Self {
        StatsError::Numeric(err)
    }
}
