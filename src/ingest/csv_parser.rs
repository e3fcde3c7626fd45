// ============================================================
// CSV TABLE PARSER
// ============================================================
// Tokenize filtered lines into a rectangular table of text cells

use crate::domain::{Table, TableError, TableResult};
use csv::{ReaderBuilder, Trim};

/// Delimited-text parser producing a [`Table`].
///
/// Fields are trimmed, so `1, 2,  3` parses as three clean cells. Every
/// record must have the same number of fields as the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvTableParser {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// First record holds column names
    has_header: bool,
}

impl Default for CsvTableParser {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_header: false,
        }
    }
}

impl CsvTableParser {
    /// Create a new CSV parser with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat the first record as a header row
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parse already-filtered content into a table named `name`
    pub fn parse(&self, name: &str, content: &str) -> TableResult<Table> {
        let malformed = |reason: String| TableError::MalformedTable {
            name: name.to_string(),
            reason,
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .delimiter(self.delimiter)
            .trim(Trim::All)
            .flexible(false)
            .from_reader(content.as_bytes());

        let mut header = None;
        let mut rows = Vec::new();

        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| malformed(e.to_string()))?;
            let fields: Vec<String> = record.iter().map(str::to_string).collect();

            if index == 0 && self.has_header {
                header = Some(fields);
            } else {
                rows.push(fields);
            }
        }

        if rows.is_empty() {
            return Err(malformed("no data rows".to_string()));
        }

        tracing::debug!(
            table = name,
            rows = rows.len(),
            header = header.is_some(),
            "parsed table"
        );

        Ok(Table::new(name, header, rows))
    }
}
