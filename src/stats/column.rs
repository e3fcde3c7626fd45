// ============================================================================
// Column
// One table position across all data rows
// ============================================================================

use super::errors::StatsError;
use crate::numeric::{Decimal, Precision};

/// Decimal values of one column, in row order, with a display label.
///
/// Columns are rebuilt for every input table and never shared across tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Header name, or the 1-based ordinal when the table has no header
    pub label: String,

    /// Values in row order
    pub values: Vec<Decimal>,
}

impl Column {
    pub fn new(label: impl Into<String>, values: Vec<Decimal>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }

    /// Number of values
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values sorted ascending, leaving the column's own order untouched.
    pub fn sorted_values(&self) -> Vec<Decimal> {
        let mut sorted = self.values.clone();
        sorted.sort();
        sorted
    }

    /// Copy of the column with every value rounded to `precision`.
    pub fn rounded(&self, precision: Precision) -> Column {
        Column::new(
            self.label.clone(),
            self.values.iter().map(|v| v.round(precision)).collect(),
        )
    }
}

/// Transpose row-major values into columns.
///
/// `labels` names the columns; when it is shorter than the row width the
/// remaining columns are labelled by their 1-based ordinal.
///
/// # Errors
/// Returns `RaggedRows` if any row's length differs from the first row's.
pub fn transpose(rows: Vec<Vec<Decimal>>, labels: &[String]) -> Result<Vec<Column>, StatsError> {
    let width = rows.first().map_or(0, Vec::len);

    let mut columns: Vec<Column> = (0..width)
        .map(|i| {
            let label = labels
                .get(i)
                .cloned()
                .unwrap_or_else(|| (i + 1).to_string());
            Column::new(label, Vec::with_capacity(rows.len()))
        })
        .collect();

    for (index, row) in rows.into_iter().enumerate() {
        if row.len() != width {
            return Err(StatsError::RaggedRows {
                row: index + 1,
                expected: width,
                found: row.len(),
            });
        }
        for (column, value) in columns.iter_mut().zip(row) {
            column.values.push(value);
        }
    }

    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[i64]) -> Vec<Decimal> {
        values.iter().map(|v| Decimal::from(*v)).collect()
    }

    #[test]
    fn test_transpose_two_columns() {
        let rows = vec![row(&[1, 2]), row(&[4, 5]), row(&[7, 8])];
        let columns = transpose(rows, &[]).unwrap();

        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].label, "1");
        assert_eq!(columns[0].values, row(&[1, 4, 7]));
        assert_eq!(columns[1].label, "2");
        assert_eq!(columns[1].values, row(&[2, 5, 8]));
    }

    #[test]
    fn test_transpose_uses_labels() {
        let rows = vec![row(&[1, 2])];
        let labels = vec!["height".to_string(), "weight".to_string()];
        let columns = transpose(rows, &labels).unwrap();
        assert_eq!(columns[0].label, "height");
        assert_eq!(columns[1].label, "weight");
    }

    #[test]
    fn test_transpose_rejects_ragged_rows() {
        let rows = vec![row(&[1, 2]), row(&[3])];
        assert_eq!(
            transpose(rows, &[]),
            Err(StatsError::RaggedRows {
                row: 2,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_transpose_empty() {
        assert!(transpose(Vec::new(), &[]).unwrap().is_empty());
    }

    #[test]
    fn test_rounded_keeps_label_and_order() {
        let values = ["1.25", "-0.0044", "7"]
            .iter()
            .map(|v| v.parse::<Decimal>().unwrap())
            .collect();
        let column = Column::new("w", values).rounded(Precision::new(2).unwrap());

        assert_eq!(column.label, "w");
        assert_eq!(column.values[0], "1.3".parse::<Decimal>().unwrap());
        assert_eq!(column.values[1], "-0.0044".parse::<Decimal>().unwrap());
        assert_eq!(column.values[2], Decimal::from(7i64));
    }

    #[test]
    fn test_sorted_values_is_a_copy() {
        let column = Column::new("1", row(&[3, 1, 2]));
        assert_eq!(column.sorted_values(), row(&[1, 2, 3]));
        assert_eq!(column.values, row(&[3, 1, 2]));
    }
}
