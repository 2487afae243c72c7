//! Summarization seam and fallback policy.
//!
//! Prose summaries come from an external service (typically a language
//! model). This crate only defines the request shape and the
//! [`Summarizer`] trait, and makes fallback substitution an explicit caller
//! step: a summarizer reports [`SummaryOutcome::Unavailable`] instead of
//! failing, and [`summarize_or_fallback`] swaps in fixed text keyed by
//! category.

use serde::{Deserialize, Serialize};

use crate::model::{DocumentCategory, PipelineResult};

/// Fallback for an academic document with extracted subject records.
pub const ACADEMIC_FALLBACK: &str = "This is an academic document containing multiple subjects. \
     Marks and units have been extracted successfully. \
     The data can be reviewed to assess overall performance.";

/// Fallback for a notice.
pub const NOTICE_FALLBACK: &str = "This is an official notice. \
     Important instructions and deadlines have been detected. \
     Immediate attention may be required.";

/// Fallback for anything else.
pub const GENERIC_FALLBACK: &str = "This document has been processed and summarized successfully.";

/// Shown by [`quick_summary`] when no sentence qualifies.
pub const NOT_ENOUGH_TEXT: &str = "Not enough text to summarize.";

/// What a summarizer is asked to summarize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// Document category
    pub category: DocumentCategory,

    /// Subject records rendered as `"NAME (MARKS marks)"`
    pub subjects: Vec<String>,

    /// Deadline literals in text order
    pub deadlines: Vec<String>,

    /// Normalized document text
    pub text: String,
}

impl SummaryRequest {
    /// Build a request from a pipeline result.
    pub fn from_result(result: &PipelineResult) -> Self {
        Self {
            category: result.category,
            subjects: result
                .subject_records
                .iter()
                .map(|r| r.summary_fragment())
                .collect(),
            deadlines: result.deadlines.iter().map(|d| d.text.clone()).collect(),
            text: result.normalized_text.clone(),
        }
    }

    /// Whether the request carries academic subject data.
    pub fn has_records(&self) -> bool {
        !self.subjects.is_empty()
    }

    /// Prompt text for a language-model summarizer.
    pub fn prompt(&self) -> String {
        match self.category {
            DocumentCategory::Academic if self.has_records() => format!(
                "Analyze this student's academic performance and give 3 short insights:\n{}",
                self.subjects.join(", ")
            ),
            DocumentCategory::Notice => format!(
                "Summarize this notice in 2 short lines and highlight urgency:\n{}",
                self.text
            ),
            DocumentCategory::Academic => {
                format!("Summarize this document briefly:\n{}", self.text)
            }
        }
    }
}

/// Result of asking a summarizer for prose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    /// Summary text produced by the service
    Ok(String),
    /// The service could not produce a summary (reason for logging)
    Unavailable(String),
}

/// An external summarization collaborator.
///
/// Implementations own their client state (credentials, connections); none
/// of it is shared with the extraction pipeline.
pub trait Summarizer: Send + Sync {
    /// Summarize a request. Failures are reported, never raised.
    fn summarize(&self, request: &SummaryRequest) -> SummaryOutcome;
}

/// A summarizer with no backing service; always unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineSummarizer;

impl Summarizer for OfflineSummarizer {
    fn summarize(&self, _request: &SummaryRequest) -> SummaryOutcome {
        SummaryOutcome::Unavailable("no summarization service configured".to_string())
    }
}

/// Fixed fallback text for a category.
pub fn fallback_text(category: DocumentCategory, has_records: bool) -> &'static str {
    match category {
        DocumentCategory::Academic if has_records => ACADEMIC_FALLBACK,
        DocumentCategory::Notice => NOTICE_FALLBACK,
        DocumentCategory::Academic => GENERIC_FALLBACK,
    }
}

/// Ask `summarizer` for a summary, substituting the fallback text when it is
/// unavailable or returns only whitespace.
pub fn summarize_or_fallback(summarizer: &dyn Summarizer, result: &PipelineResult) -> String {
    let request = SummaryRequest::from_result(result);
    match summarizer.summarize(&request) {
        SummaryOutcome::Ok(text) if !text.trim().is_empty() => text,
        SummaryOutcome::Ok(_) => {
            log::warn!("Summarizer returned empty text, using fallback");
            fallback_text(request.category, request.has_records()).to_string()
        }
        SummaryOutcome::Unavailable(reason) => {
            log::warn!("Summarizer unavailable ({}), using fallback", reason);
            fallback_text(request.category, request.has_records()).to_string()
        }
    }
}

/// Extractive summary: the first four sentences longer than three
/// characters, joined with `" • "`.
pub fn quick_summary(text: &str) -> String {
    let sentences: Vec<&str> = text
        .split('.')
        .map(str::trim)
        .filter(|s| s.chars().count() > 3)
        .take(4)
        .collect();

    if sentences.is_empty() {
        NOT_ENOUGH_TEXT.to_string()
    } else {
        sentences.join(" • ")
    }
}
