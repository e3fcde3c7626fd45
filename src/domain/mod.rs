// ============================================================================
// Domain Models Module
// Tables, reports, run configuration and the per-file error taxonomy
// ============================================================================

pub mod config;
pub mod errors;
pub mod table;

pub use config::{RunConfig, DEFAULT_COMMENT_PREFIX};
pub use errors::{TableError, TableErrorKind, TableResult};
pub use table::{RunSummary, Table, TableReport};
