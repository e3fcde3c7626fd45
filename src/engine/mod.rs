// ============================================================================
// Engine Module
// Per-table orchestration: text -> decimals -> columns -> statistics
// ============================================================================

mod table_pipeline;

pub use table_pipeline::TablePipeline;
