// ============================================================================
// Report Sink Interface
// Defines the contract for emitting per-table results and failures
// ============================================================================

use crate::domain::{RunSummary, TableError, TableReport};
use crate::numeric::{Decimal, Precision};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::io::Write;

/// Events emitted by the table pipeline
#[derive(Debug, Clone)]
pub enum ReportEvent {
    /// Processing of a source began
    TableStarted {
        name: String,
        timestamp: DateTime<Utc>,
    },

    /// Statistics computed for every column of a source
    TableCompleted {
        report: TableReport,
        timestamp: DateTime<Utc>,
    },

    /// Source failed; the run continues with the next one
    TableFailed {
        error: TableError,
        timestamp: DateTime<Utc>,
    },

    /// Every source has been processed
    RunCompleted { summary: RunSummary },
}

/// Report sink trait for processing pipeline events
/// Implementations can print, log, collect, etc.
pub trait ReportSink: Send + Sync {
    /// Handle a report event
    fn on_event(&self, event: ReportEvent);

    /// Batch event handler
    fn on_events(&self, events: Vec<ReportEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op sink for testing
pub struct NoOpReportSink;

impl ReportSink for NoOpReportSink {
    fn on_event(&self, _event: ReportEvent) {
        // Do nothing
    }
}

/// Logs every event, then forwards it to the wrapped sink
pub struct LoggingReportSink<S> {
    inner: S,
}

impl<S: ReportSink> LoggingReportSink<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: ReportSink> ReportSink for LoggingReportSink<S> {
    fn on_event(&self, event: ReportEvent) {
        match &event {
            ReportEvent::TableStarted { name, .. } => {
                tracing::debug!(table = %name, "table started");
            },
            ReportEvent::TableCompleted { report, .. } => {
                tracing::debug!(
                    table = %report.name,
                    columns = report.columns.len(),
                    "table completed"
                );
            },
            ReportEvent::TableFailed { error, .. } => {
                tracing::debug!(table = error.name(), kind = ?error.kind(), "table failed");
            },
            ReportEvent::RunCompleted { summary } => {
                tracing::debug!(
                    processed = summary.files_processed,
                    failed = summary.files_failed,
                    "run completed"
                );
            },
        }
        self.inner.on_event(event);
    }
}

/// Collects every event in memory
#[derive(Default)]
pub struct CollectingReportSink {
    events: Mutex<Vec<ReportEvent>>,
}

impl CollectingReportSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far, in order
    pub fn events(&self) -> Vec<ReportEvent> {
        self.events.lock().clone()
    }

    /// Reports received so far, in order
    pub fn reports(&self) -> Vec<TableReport> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                ReportEvent::TableCompleted { report, .. } => Some(report.clone()),
                _ => None,
            })
            .collect()
    }

    /// Errors received so far, in order
    pub fn errors(&self) -> Vec<TableError> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                ReportEvent::TableFailed { error, .. } => Some(error.clone()),
                _ => None,
            })
            .collect()
    }
}

impl ReportSink for CollectingReportSink {
    fn on_event(&self, event: ReportEvent) {
        self.events.lock().push(event);
    }
}

/// Writes the fixed-format text report.
///
/// ```text
/// Processing file: "data.csv"
/// Column: 1
///   Count     : 3
///   Minimum   : 1
///   ...
///   Std. Dev. : 1
/// ```
pub struct TextReportSink<W: Write + Send> {
    writer: Mutex<W>,
    output_digits: Precision,
}

impl<W: Write + Send> TextReportSink<W> {
    pub fn new(writer: W, output_digits: Precision) -> Self {
        Self {
            writer: Mutex::new(writer),
            output_digits,
        }
    }

    /// Recover the writer (e.g. an in-memory buffer in tests)
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn value(&self, value: &Decimal) -> String {
        value.to_string_rounded(self.output_digits)
    }

    fn write_report(&self, out: &mut W, report: &TableReport) -> std::io::Result<()> {
        for column in &report.columns {
            writeln!(out, "Column: {}", column.label)?;
            writeln!(out, "  Count     : {}", column.count)?;
            writeln!(out, "  Minimum   : {}", self.value(&column.min))?;
            writeln!(out, "  Mean      : {}", self.value(&column.mean))?;
            writeln!(out, "  Median    : {}", self.value(&column.median))?;
            writeln!(out, "  Maximum   : {}", self.value(&column.max))?;
            writeln!(out, "  Range     : {}", self.value(&column.range))?;
            writeln!(out, "  Sum       : {}", self.value(&column.sum))?;
            writeln!(out, "  Variance  : {}", self.value(&column.variance))?;
            writeln!(out, "  Std. Dev. : {}", self.value(&column.stddev))?;
        }
        Ok(())
    }

    fn write_event(&self, event: &ReportEvent) -> std::io::Result<()> {
        let mut out = self.writer.lock();
        match event {
            ReportEvent::TableStarted { name, .. } => {
                writeln!(out, "\nProcessing file: \"{}\"", name)?;
            },
            ReportEvent::TableCompleted { report, .. } => {
                self.write_report(&mut *out, report)?;
            },
            ReportEvent::TableFailed { error, .. } => {
                writeln!(out, "Error: {}", error)?;
            },
            ReportEvent::RunCompleted { .. } => {},
        }
        out.flush()
    }
}

impl<W: Write + Send> ReportSink for TextReportSink<W> {
    fn on_event(&self, event: ReportEvent) {
        if let Err(err) = self.write_event(&event) {
            tracing::warn!(error = %err, "failed to write report");
        }
    }
}
