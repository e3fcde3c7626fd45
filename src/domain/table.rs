// ============================================================================
// Table Domain Model
// ============================================================================

use super::errors::{TableError, TableResult};
use crate::numeric::Decimal;
use crate::stats::ColumnStatistics;
use chrono::{DateTime, Utc};
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rows of raw text cells from one input source.
///
/// All rows have the same length; the parser rejects ragged input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Source name (usually the file path as given)
    pub name: String,

    /// Column names when header mode is enabled
    pub header: Option<Vec<String>>,

    /// Data rows
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(name: impl Into<String>, header: Option<Vec<String>>, rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            header,
            rows,
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.rows
            .first()
            .or(self.header.as_ref())
            .map_or(0, Vec::len)
    }

    /// Header names, or 1-based ordinals when there is no header
    pub fn column_labels(&self) -> Vec<String> {
        match &self.header {
            Some(names) => names.clone(),
            None => (1..=self.width()).map(|i| i.to_string()).collect(),
        }
    }

    /// Convert every cell to a [`Decimal`].
    ///
    /// # Errors
    /// Returns `Parse` with the 1-based data row and column of the first
    /// cell that is not a decimal numeral.
    pub fn to_decimal_rows(&self) -> TableResult<Vec<Vec<Decimal>>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .map(|(c, cell)| {
                        cell.parse::<Decimal>().map_err(|_| TableError::Parse {
                            name: self.name.clone(),
                            row: r + 1,
                            column: c + 1,
                            value: cell.clone(),
                        })
                    })
                    .collect::<TableResult<Vec<Decimal>>>()
            })
            .collect()
    }
}

/// Statistics for every column of one table
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TableReport {
    /// Source name
    pub name: String,

    /// Column names when header mode is enabled
    pub headers: Option<Vec<String>>,

    /// One entry per column, in column order
    pub columns: Vec<ColumnStatistics>,
}

/// Outcome of a batch run over several sources
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunSummary {
    /// Sources that produced a report
    pub files_processed: usize,

    /// Sources that failed with a reported error
    pub files_failed: usize,

    /// Wall-clock start of the run
    pub started_at: DateTime<Utc>,

    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn total_files(&self) -> usize {
        self.files_processed + self.files_failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_column_labels_without_header() {
        let table = Table::new("t", None, vec![cells(&["1", "2", "3"])]);
        assert_eq!(table.width(), 3);
        assert_eq!(table.column_labels(), cells(&["1", "2", "3"]));
    }

    #[test]
    fn test_column_labels_with_header() {
        let table = Table::new(
            "t",
            Some(cells(&["a", "b"])),
            vec![cells(&["1", "2"])],
        );
        assert_eq!(table.column_labels(), cells(&["a", "b"]));
    }

    #[test]
    fn test_to_decimal_rows() {
        let table = Table::new("t", None, vec![cells(&["1.5", "-2"]), cells(&["3", "4e1"])]);
        let rows = table.to_decimal_rows().unwrap();
        assert_eq!(rows[0][0], "1.5".parse::<Decimal>().unwrap());
        assert_eq!(rows[1][1], Decimal::from(40i64));
    }

    #[test]
    fn test_to_decimal_rows_reports_position() {
        let table = Table::new("t.csv", None, vec![cells(&["1", "2"]), cells(&["3", "x"])]);
        assert_eq!(
            table.to_decimal_rows(),
            Err(TableError::Parse {
                name: "t.csv".to_string(),
                row: 2,
                column: 2,
                value: "x".to_string(),
            })
        );
    }
}
