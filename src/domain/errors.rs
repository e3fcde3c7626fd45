// ============================================================================
// Table Errors
// Per-file failures: reported, then the batch moves on to the next file
// ============================================================================

use crate::stats::StatsError;
use std::fmt;

/// Coarse classification of a [`TableError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableErrorKind {
    MissingFile,
    Io,
    MalformedTable,
    Parse,
    Statistics,
}

/// Errors raised while turning one input source into statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Source file does not exist
    MissingFile { name: String },

    /// Source exists but could not be read
    Io { name: String, message: String },

    /// Tokenization failed, rows are ragged, or there are no data rows
    MalformedTable { name: String, reason: String },

    /// A cell is not a decimal numeral (row and column are 1-based)
    Parse {
        name: String,
        row: usize,
        column: usize,
        value: String,
    },

    /// Aggregation failed
    Statistics { name: String, error: StatsError },
}

impl TableError {
    pub fn kind(&self) -> TableErrorKind {
        match self {
            TableError::MissingFile { .. } => TableErrorKind::MissingFile,
            TableError::Io { .. } => TableErrorKind::Io,
            TableError::MalformedTable { .. } => TableErrorKind::MalformedTable,
            TableError::Parse { .. } => TableErrorKind::Parse,
            TableError::Statistics { .. } => TableErrorKind::Statistics,
        }
    }

    /// Name of the source the error belongs to
    pub fn name(&self) -> &str {
        match self {
            TableError::MissingFile { name }
            | TableError::Io { name, .. }
            | TableError::MalformedTable { name, .. }
            | TableError::Parse { name, .. }
            | TableError::Statistics { name, .. } => name,
        }
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::MissingFile { name } => write!(f, "File named '{}' not found.", name),
            TableError::Io { name, message } => {
                write!(f, "Could not read file '{}': {}", name, message)
            },
            TableError::MalformedTable { name, reason } => {
                write!(f, "Malformed CSV in file '{}': {}", name, reason)
            },
            TableError::Parse {
                name,
                row,
                column,
                value,
            } => write!(
                f,
                "Non-numeric value '{}' at row {}, column {} in file '{}'",
                value, row, column, name
            ),
            TableError::Statistics { name, error } => {
                write!(f, "Statistics failed for file '{}': {}", name, error)
            },
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableError::Statistics { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Result type alias for table operations
pub type TableResult<T> = Result<T, TableError>;
