//! Extraction options and configuration.

use crate::error::{Error, Result};

/// Phrases that mark a document as an administrative notice.
pub const DEFAULT_NOTICE_KEYWORDS: &[&str] = &[
    "dear students",
    "requested",
    "without fail",
    "complete it",
    "registration",
    "on or before",
];

/// Marks strictly below this value are treated as extraction noise.
pub const DEFAULT_MIN_MARKS: f64 = 20.0;

/// Options for classification and field extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    /// Keywords whose presence (case-insensitive substring) marks a notice
    pub notice_keywords: Vec<String>,

    /// Smallest marks value kept by the academic extractor
    pub min_marks: f64,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the notice keyword set.
    pub fn with_notice_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.notice_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Add one keyword to the notice keyword set.
    pub fn with_extra_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.notice_keywords.push(keyword.into());
        self
    }

    /// Set the marks threshold.
    pub fn with_min_marks(mut self, min_marks: f64) -> Self {
        self.min_marks = min_marks;
        self
    }

    /// Check that the options can drive a pipeline.
    pub fn validate(&self) -> Result<()> {
        if !self.min_marks.is_finite() {
            return Err(Error::InvalidOption(format!(
                "min_marks must be finite, got {}",
                self.min_marks
            )));
        }
        if let Some(pos) = self.notice_keywords.iter().position(|k| k.trim().is_empty()) {
            return Err(Error::InvalidOption(format!(
                "notice keyword #{} is empty",
                pos + 1
            )));
        }
        Ok(())
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            notice_keywords: DEFAULT_NOTICE_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
            min_marks: DEFAULT_MIN_MARKS,
        }
    }
}
