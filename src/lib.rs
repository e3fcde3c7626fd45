// ============================================================================
// Decimal Statistics Library
// Precision-preserving descriptive statistics for delimited numeric tables
// ============================================================================

//! # Decimal Stats
//!
//! Per-column descriptive statistics computed with arbitrary-precision
//! decimal arithmetic instead of binary floating point.
//!
//! ## Features
//!
//! - **Configurable precision** from 2 to 1024 significant digits
//! - **Explicit rounding** (half away from zero) on every inexact operation
//! - **Guard-digit square root** that keeps trailing digits generic routines lose
//! - **Per-file error isolation**: a bad file is reported and the batch continues
//!
//! ## Example
//!
//! ```rust
//! use decimal_stats::prelude::*;
//!
//! let pipeline = TablePipeline::new(RunConfig::new(Precision::clamped(40)));
//! let report = pipeline.process_str("inline", "1,10\n2,20\n3,30\n").unwrap();
//!
//! let first = &report.columns[0];
//! assert_eq!(first.mean.to_string(), "2");
//! assert_eq!(first.variance.to_string(), "1");
//! assert_eq!(report.columns[1].stddev.to_string(), "10");
//! ```

pub mod domain;
pub mod engine;
pub mod ingest;
pub mod interfaces;
pub mod numeric;
pub mod stats;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        RunConfig, RunSummary, Table, TableError, TableErrorKind, TableReport, TableResult,
    };
    pub use crate::engine::TablePipeline;
    pub use crate::ingest::{CsvTableParser, LineFilter};
    pub use crate::interfaces::{
        CollectingReportSink, LoggingReportSink, NoOpReportSink, ReportEvent, ReportSink,
        TextReportSink,
    };
    pub use crate::numeric::{sqrt, Decimal, NumericError, Precision};
    pub use crate::stats::{transpose, Column, ColumnAggregator, ColumnStatistics, StatsError};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_statistics() {
        let pipeline = TablePipeline::new(RunConfig::default());
        let sink = TextReportSink::new(Vec::new(), Precision::DEFAULT);

        let report = pipeline.process_str("inline", "1\n2\n3\n4\n").unwrap();
        sink.on_event(ReportEvent::TableCompleted {
            report: report.clone(),
            timestamp: chrono::Utc::now(),
        });

        let stats = &report.columns[0];
        assert_eq!(stats.count, 4);
        assert_eq!(stats.median.to_string(), "2.5");
        assert_eq!(stats.sum.to_string(), "10");

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.contains("  Median    : 2.5\n"));
        // 5/3
        assert!(text.contains("  Variance  : 1.666666666666666666666666666666666666667\n"));
    }
}
