// ============================================================================
// Statistics Module
// Column transpose and per-column descriptive statistics
// ============================================================================

mod aggregator;
mod column;
mod errors;

pub use aggregator::{ColumnAggregator, ColumnStatistics};
pub use column::{transpose, Column};
pub use errors::StatsError;
