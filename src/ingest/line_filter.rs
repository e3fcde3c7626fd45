// ============================================================================
// Line Filter
// Drops leading, blank and comment lines before tokenization
// ============================================================================

use crate::domain::RunConfig;

/// Removes lines that carry no data.
///
/// The first `skip_lines` raw lines are always dropped. Of the rest, blank
/// lines and lines whose text (after leading whitespace) starts with the
/// comment prefix are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFilter {
    comment_prefix: String,
    skip_lines: usize,
}

impl LineFilter {
    pub fn new(comment_prefix: impl Into<String>, skip_lines: usize) -> Self {
        Self {
            comment_prefix: comment_prefix.into(),
            skip_lines,
        }
    }

    pub fn from_config(config: &RunConfig) -> Self {
        Self::new(config.comment_prefix.clone(), config.skip_lines)
    }

    /// Lines that survive filtering, in input order
    pub fn filter<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.lines()
            .skip(self.skip_lines)
            .filter(|line| {
                let trimmed = line.trim_start();
                !trimmed.is_empty() && !trimmed.starts_with(self.comment_prefix.as_str())
            })
            .collect()
    }

    /// Surviving lines joined with `\n`
    pub fn filtered_text(&self, text: &str) -> String {
        self.filter(text).join("\n")
    }
}

impl Default for LineFilter {
    fn default() -> Self {
        Self::new(crate::domain::DEFAULT_COMMENT_PREFIX, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_blank_and_comment_lines() {
        let text = "# heading\n1,2\n\n   \n  # indented comment\n3,4\r\n";
        let filter = LineFilter::default();
        assert_eq!(filter.filter(text), vec!["1,2", "3,4"]);
    }

    #[test]
    fn test_skip_lines_counts_raw_lines() {
        let text = "junk line\n# comment\n1,2\n3,4\n";
        let filter = LineFilter::new("#", 1);
        assert_eq!(filter.filtered_text(text), "1,2\n3,4");
    }

    #[test]
    fn test_custom_prefix() {
        let text = "// note\n1\n#2\n";
        let filter = LineFilter::new("//", 0);
        assert_eq!(filter.filter(text), vec!["1", "#2"]);
    }
}
