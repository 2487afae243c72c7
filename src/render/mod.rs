//! Rendering module for converting processed documents to reports.
//!
//! Every renderer shows the document category, a subject table (code, name
//! truncated to [`ReportOptions::name_width`] characters, units, marks), the
//! first [`ReportOptions::insight_chars`] characters of the insights, and a
//! bulleted deadline list.

mod json;
mod markdown;
mod options;
mod report;
mod text;

pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, MarkdownRenderer};
pub use options::{truncate_chars, ReportOptions, DEFAULT_TITLE};
pub use report::Report;
pub use text::to_text;
