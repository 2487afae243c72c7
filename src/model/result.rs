//! Pipeline output and derived statistics.

use serde::{Deserialize, Serialize};

use super::{DeadlineMatch, DocumentCategory, SubjectRecord};

/// Terminal output of processing one document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PipelineResult {
    /// Assigned category
    pub category: DocumentCategory,

    /// Aligned subject rows (empty unless the category is academic)
    pub subject_records: Vec<SubjectRecord>,

    /// Detected dates in text order (empty unless the category is notice)
    pub deadlines: Vec<DeadlineMatch>,

    /// Whitespace-normalized source text
    pub normalized_text: String,
}

impl PipelineResult {
    /// Whether the document was classified as academic.
    pub fn is_academic(&self) -> bool {
        self.category == DocumentCategory::Academic
    }

    /// Whether the document was classified as a notice.
    pub fn is_notice(&self) -> bool {
        self.category == DocumentCategory::Notice
    }

    /// True when neither records nor deadlines were extracted.
    pub fn is_empty(&self) -> bool {
        self.subject_records.is_empty() && self.deadlines.is_empty()
    }

    /// Compute statistics over the result.
    pub fn stats(&self) -> ExtractionStats {
        let mut stats = ExtractionStats::new();
        stats.count_text(&self.normalized_text);
        stats.subject_count = self.subject_records.len() as u32;
        stats.deadline_count = self.deadlines.len() as u32;
        if !self.subject_records.is_empty() {
            let total: f64 = self.subject_records.iter().map(|r| r.marks).sum();
            stats.average_marks = Some(total / self.subject_records.len() as f64);
        }
        stats
    }
}

/// Statistics collected from a processed document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,

    /// Number of subject records extracted
    pub subject_count: u32,

    /// Number of deadlines detected
    pub deadline_count: u32,

    /// Mean marks across subject records
    pub average_marks: Option<f64>,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }
}
