//! The renderable report: pipeline output plus summary insights.

use serde::{Deserialize, Serialize};

use crate::model::PipelineResult;
use crate::summary::{summarize_or_fallback, Summarizer};

/// Everything an exporter needs for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Classification and extraction output
    #[serde(flatten)]
    pub result: PipelineResult,

    /// Prose summary (service output or fallback text)
    pub insights: String,
}

impl Report {
    /// Create a report from a result and its insights text.
    pub fn new(result: PipelineResult, insights: impl Into<String>) -> Self {
        Self {
            result,
            insights: insights.into(),
        }
    }

    /// Create a report, asking `summarizer` for insights and falling back to
    /// the fixed category text when it is unavailable.
    pub fn summarize(result: PipelineResult, summarizer: &dyn Summarizer) -> Self {
        let insights = summarize_or_fallback(summarizer, &result);
        Self { result, insights }
    }
}
