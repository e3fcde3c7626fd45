// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod report_sink;

pub use report_sink::{
    CollectingReportSink, LoggingReportSink, NoOpReportSink, ReportEvent, ReportSink,
    TextReportSink,
};
