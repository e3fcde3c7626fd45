// ============================================================================
// Run Configuration
// Precision, header handling and line filtering for a batch of tables
// ============================================================================

use crate::numeric::Precision;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default comment prefix for discarded input lines
pub const DEFAULT_COMMENT_PREFIX: &str = "#";

/// Configuration shared by every table in a run
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunConfig {
    /// Significant digits for every rounded statistic
    pub precision: Precision,

    /// Significant digits used when printing results (never above `precision`)
    pub output_digits: Precision,

    /// Treat the first parsed row of each table as column names
    pub has_header: bool,

    /// Lines whose trimmed text starts with this prefix are discarded
    pub comment_prefix: String,

    /// Number of raw lines to skip at the start of each file
    pub skip_lines: usize,
}

impl RunConfig {
    /// Create a new configuration with the given precision
    pub fn new(precision: Precision) -> Self {
        Self {
            precision,
            output_digits: precision,
            has_header: false,
            comment_prefix: DEFAULT_COMMENT_PREFIX.to_string(),
            skip_lines: 0,
        }
    }

    /// Builder method: Treat the first row as a header
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Builder method: Set printed digits (clamped to the calculation precision)
    pub fn with_output_digits(mut self, digits: Precision) -> Self {
        self.output_digits = digits.min(self.precision);
        self
    }

    /// Builder method: Set the comment prefix
    pub fn with_comment_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.comment_prefix = prefix.into();
        self
    }

    /// Builder method: Skip leading raw lines
    pub fn with_skip_lines(mut self, lines: usize) -> Self {
        self.skip_lines = lines;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.comment_prefix.trim().is_empty() {
            return Err("Comment prefix cannot be empty".to_string());
        }

        if self.output_digits > self.precision {
            return Err(format!(
                "Output digits ({}) cannot exceed precision ({})",
                self.output_digits, self.precision
            ));
        }

        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(Precision::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.precision.digits(), 40);
        assert_eq!(config.output_digits.digits(), 40);
        assert!(!config.has_header);
        assert_eq!(config.comment_prefix, "#");
        assert_eq!(config.skip_lines, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = RunConfig::new(Precision::clamped(80))
            .with_header(true)
            .with_output_digits(Precision::clamped(20))
            .with_comment_prefix("//")
            .with_skip_lines(2);

        assert_eq!(config.precision.digits(), 80);
        assert_eq!(config.output_digits.digits(), 20);
        assert!(config.has_header);
        assert_eq!(config.comment_prefix, "//");
        assert_eq!(config.skip_lines, 2);
    }

    #[test]
    fn test_output_digits_clamped_to_precision() {
        let config = RunConfig::new(Precision::clamped(10)).with_output_digits(Precision::clamped(50));
        assert_eq!(config.output_digits.digits(), 10);
    }

    #[test]
    fn test_validate_empty_comment_prefix() {
        let config = RunConfig::default().with_comment_prefix("  ");
        assert!(config.validate().is_err());
    }
}
