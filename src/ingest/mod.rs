// ============================================================================
// Ingest Module
// Raw text to rows of text cells
// ============================================================================

mod csv_parser;
mod line_filter;

pub use csv_parser::CsvTableParser;
pub use line_filter::LineFilter;
