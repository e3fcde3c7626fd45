// ============================================================================
// Column Aggregator
// Descriptive statistics for one column at an explicit precision
// ============================================================================

use super::column::Column;
use super::errors::StatsError;
use crate::numeric::{sqrt, Decimal, Precision};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Descriptive statistics of one column.
///
/// Created once per column per table; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColumnStatistics {
    /// Column label (header name or 1-based ordinal)
    pub label: String,

    /// Number of values
    pub count: usize,

    /// Smallest value, at the configured precision
    pub min: Decimal,

    /// Largest value, at the configured precision
    pub max: Decimal,

    /// `max - min`, rounded to the configured precision
    pub range: Decimal,

    /// Exact sum of the values at the configured precision
    pub sum: Decimal,

    /// Arithmetic mean
    pub mean: Decimal,

    /// Middle value, or the mean of the two middle values for even counts
    pub median: Decimal,

    /// Sample variance (n - 1 divisor); zero for a single value
    pub variance: Decimal,

    /// Sample standard deviation
    pub stddev: Decimal,
}

/// Computes [`ColumnStatistics`] at a fixed precision.
///
/// Stateless apart from its precision, so one aggregator serves every
/// column of every table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnAggregator {
    precision: Precision,
}

impl ColumnAggregator {
    pub fn new(precision: Precision) -> Self {
        Self { precision }
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Aggregate one column.
    ///
    /// Values are first rounded to the aggregator's precision, so a column
    /// of identical values has a mean equal to them and zero dispersion, and
    /// the rounded mean and median stay within `[min, max]`.
    ///
    /// # Errors
    /// Returns `EmptyColumn` if the column has no values.
    pub fn aggregate(&self, column: &Column) -> Result<ColumnStatistics, StatsError> {
        let p = self.precision;
        let count = column.len();
        if count == 0 {
            return Err(StatsError::EmptyColumn {
                label: column.label.clone(),
            });
        }

        let column = column.rounded(p);

        // Private sorted copy: min, max and median read from it, the
        // order-independent reductions below read the column as given
        let sorted = column.sorted_values();
        let min = sorted[0].clone();
        let max = sorted[count - 1].clone();
        let range = max.sub_rounded(&min, p);
        let median = Self::median(&sorted, p)?;

        let sum: Decimal = column.values.iter().sum();
        let mean = sum.div_int(count as u64, p)?;

        let variance = if count > 1 {
            let squared_deviations: Decimal = column
                .values
                .iter()
                .map(|v| (&mean - v).powi(2, p))
                .sum();
            squared_deviations.div_int((count - 1) as u64, p)?
        } else {
            Decimal::zero()
        };

        let stddev = if variance.is_positive() {
            sqrt(&variance, p)
        } else {
            Decimal::zero()
        };

        tracing::debug!(
            column = %column.label,
            count,
            "aggregated column"
        );

        Ok(ColumnStatistics {
            label: column.label.clone(),
            count,
            min,
            max,
            range,
            sum,
            mean,
            median,
            variance,
            stddev,
        })
    }

    /// Aggregate every column in order.
    pub fn aggregate_all(&self, columns: &[Column]) -> Result<Vec<ColumnStatistics>, StatsError> {
        columns.iter().map(|c| self.aggregate(c)).collect()
    }

    fn median(sorted: &[Decimal], precision: Precision) -> Result<Decimal, StatsError> {
        let n = sorted.len();
        let mid = n / 2;
        if n % 2 == 1 {
            Ok(sorted[mid].clone())
        } else {
            Ok((&sorted[mid - 1] + &sorted[mid]).div_int(2, precision)?)
        }
    }
}

impl Default for ColumnAggregator {
    fn default() -> Self {
        Self::new(Precision::default())
    }
}
