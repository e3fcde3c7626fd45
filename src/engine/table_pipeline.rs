// ============================================================================
// Table Pipeline
// Core orchestration for one batch of input tables
// ============================================================================

use crate::domain::{RunConfig, RunSummary, TableError, TableReport, TableResult};
use crate::ingest::{CsvTableParser, LineFilter};
use crate::interfaces::{ReportEvent, ReportSink};
use crate::stats::{transpose, ColumnAggregator};
use chrono::Utc;
use std::io::ErrorKind;
use std::path::Path;

/// Turns input tables into per-column statistics.
///
/// Each table is processed independently: columns and statistics are
/// rebuilt from scratch and nothing carries over between tables.
pub struct TablePipeline {
    /// Run configuration
    config: RunConfig,

    /// Drops skipped, blank and comment lines
    filter: LineFilter,

    /// Tokenizes the remaining lines
    parser: CsvTableParser,

    /// Computes statistics at the configured precision
    aggregator: ColumnAggregator,
}

impl TablePipeline {
    /// Create a pipeline without validating the configuration
    pub fn new(config: RunConfig) -> Self {
        Self {
            filter: LineFilter::from_config(&config),
            parser: CsvTableParser::new().with_header(config.has_header),
            aggregator: ColumnAggregator::new(config.precision),
            config,
        }
    }

    /// Create a pipeline from a validated configuration
    ///
    /// # Example
    /// ```
    /// use decimal_stats::prelude::*;
    ///
    /// let pipeline = TablePipeline::from_config(RunConfig::default()).unwrap();
    /// let report = pipeline.process_str("inline", "1\n2\n3\n").unwrap();
    /// assert_eq!(report.columns[0].mean.to_string(), "2");
    /// ```
    pub fn from_config(config: RunConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Compute statistics for in-memory text named `name`
    pub fn process_str(&self, name: &str, text: &str) -> TableResult<TableReport> {
        let filtered = self.filter.filtered_text(text);
        let table = self.parser.parse(name, &filtered)?;
        let rows = table.to_decimal_rows()?;

        let statistics_error = |error| TableError::Statistics {
            name: name.to_string(),
            error,
        };

        let columns = transpose(rows, &table.column_labels()).map_err(statistics_error)?;
        let columns = self
            .aggregator
            .aggregate_all(&columns)
            .map_err(statistics_error)?;

        tracing::debug!(
            table = name,
            columns = columns.len(),
            precision = self.config.precision.digits(),
            "computed table statistics"
        );

        Ok(TableReport {
            name: name.to_string(),
            headers: table.header,
            columns,
        })
    }

    /// Read and process one file
    pub fn process_path(&self, path: &Path) -> TableResult<TableReport> {
        let name = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => TableError::MissingFile { name: name.clone() },
            _ => TableError::Io {
                name: name.clone(),
                message: err.to_string(),
            },
        })?;

        self.process_str(&name, &text)
    }

    /// Process every path in order, reporting each outcome to `sink`.
    ///
    /// A failing file is reported and skipped; it never stops the run.
    pub fn run<P: AsRef<Path>>(&self, paths: &[P], sink: &dyn ReportSink) -> RunSummary {
        let started_at = Utc::now();
        let mut files_processed = 0;
        let mut files_failed = 0;

        for path in paths {
            let path = path.as_ref();
            sink.on_event(ReportEvent::TableStarted {
                name: path.display().to_string(),
                timestamp: Utc::now(),
            });

            match self.process_path(path) {
                Ok(report) => {
                    files_processed += 1;
                    sink.on_event(ReportEvent::TableCompleted {
                        report,
                        timestamp: Utc::now(),
                    });
                },
                Err(error) => {
                    files_failed += 1;
                    tracing::warn!(kind = ?error.kind(), "{}", error);
                    sink.on_event(ReportEvent::TableFailed {
                        error,
                        timestamp: Utc::now(),
                    });
                },
            }
        }

        let elapsed = Utc::now()
            .signed_duration_since(started_at)
            .to_std()
            .unwrap_or_default();

        let summary = RunSummary {
            files_processed,
            files_failed,
            started_at,
            elapsed,
        };
        sink.on_event(ReportEvent::RunCompleted {
            summary: summary.clone(),
        });
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TableErrorKind;
    use crate::interfaces::CollectingReportSink;
    use crate::numeric::{Decimal, Precision};

    fn d(text: &str) -> Decimal {
        text.parse().unwrap()
    }

    fn pipeline() -> TablePipeline {
        TablePipeline::new(RunConfig::default())
    }

    #[test]
    fn test_two_columns_are_independent() {
        let report = pipeline().process_str("t", "1,2\n4,5\n7,8\n").unwrap();

        assert_eq!(report.columns.len(), 2);
        assert_eq!(report.columns[0].label, "1");
        assert_eq!(report.columns[0].sum, d("12"));
        assert_eq!(report.columns[0].median, d("4"));
        assert_eq!(report.columns[1].label, "2");
        assert_eq!(report.columns[1].sum, d("15"));
        assert_eq!(report.columns[1].median, d("5"));
    }

    #[test]
    fn test_header_names_columns() {
        let config = RunConfig::default().with_header(true);
        let report = TablePipeline::new(config)
            .process_str("t", "# sizes\nwidth,height\n1,10\n3,30\n")
            .unwrap();

        assert_eq!(
            report.headers,
            Some(vec!["width".to_string(), "height".to_string()])
        );
        assert_eq!(report.columns[0].label, "width");
        assert_eq!(report.columns[1].label, "height");
        assert_eq!(report.columns[1].mean, d("20"));
    }

    #[test]
    fn test_non_numeric_cell_is_parse_error() {
        let err = pipeline().process_str("t", "1,2\n3,abc\n").unwrap_err();
        assert_eq!(err.kind(), TableErrorKind::Parse);
    }

    #[test]
    fn test_extreme_exponent_is_parse_error() {
        let err = pipeline()
            .process_str("t", "1e200000\n1e-200000\n")
            .unwrap_err();
        assert_eq!(
            err,
            TableError::Parse {
                name: "t".to_string(),
                row: 1,
                column: 1,
                value: "1e200000".to_string(),
            }
        );
    }

    #[test]
    fn test_ragged_row_is_malformed() {
        let err = pipeline().process_str("t", "1,2\n3\n").unwrap_err();
        assert_eq!(err.kind(), TableErrorKind::MalformedTable);
    }

    #[test]
    fn test_only_comments_is_malformed() {
        let err = pipeline().process_str("t", "# nothing here\n\n").unwrap_err();
        assert_eq!(err.kind(), TableErrorKind::MalformedTable);
    }

    #[test]
    fn test_missing_file() {
        let err = pipeline()
            .process_path(Path::new("definitely/not/here.csv"))
            .unwrap_err();
        assert_eq!(err.kind(), TableErrorKind::MissingFile);
    }

    #[test]
    fn test_precision_is_applied() {
        let config = RunConfig::new(Precision::new(4).unwrap());
        let report = TablePipeline::new(config).process_str("t", "1\n1\n0\n").unwrap();
        assert_eq!(report.columns[0].mean, d("0.6667"));
    }

    #[test]
    fn test_cells_wider_than_precision_have_zero_dispersion() {
        let config = RunConfig::new(Precision::new(2).unwrap());
        let report = TablePipeline::new(config).process_str("t", "1.25\n1.25\n").unwrap();
        let stats = &report.columns[0];

        assert_eq!(stats.mean, d("1.3"));
        assert!(stats.variance.is_zero());
        assert!(stats.stddev.is_zero());
    }

    #[test]
    fn test_run_continues_after_failure() {
        let sink = CollectingReportSink::new();
        let summary = pipeline().run(&["no/such/file.csv", "another/missing.csv"][..], &sink);

        assert_eq!(summary.files_failed, 2);
        assert_eq!(summary.files_processed, 0);
        assert_eq!(summary.total_files(), 2);
        assert_eq!(sink.errors().len(), 2);
        assert!(matches!(
            sink.events().last(),
            Some(ReportEvent::RunCompleted { .. })
        ));
    }

    #[test]
    fn test_from_config_validates() {
        let config = RunConfig::default().with_comment_prefix("");
        assert!(TablePipeline::from_config(config).is_err());
    }
}
