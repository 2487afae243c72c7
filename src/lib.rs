//! # schooldoc
//!
//! Classification and structured-field extraction for OCR text of school
//! documents (report cards, notices, planners).
//!
//! Raw OCR text is whitespace-normalized, classified as an academic record or
//! an administrative notice by keyword signal, and mined for subject rows
//! (code, name, units, marks) or deadline dates accordingly.
//!
//! ## Quick Start
//!
//! ```
//! use schooldoc::{process, render, DocumentCategory};
//!
//! fn main() -> schooldoc::Result<()> {
//!     let result = process("CS301 DATA STRUCTURES 4\n85.50\nMA201 CALCULUS 3\n45.00");
//!     assert_eq!(result.category, DocumentCategory::Academic);
//!     assert_eq!(result.subject_records.len(), 2);
//!
//!     let report = render::Report::new(result, "Two subjects extracted.");
//!     let markdown = render::to_markdown(&report, &render::ReportOptions::default())?;
//!     println!("{}", markdown);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Total core**: normalization, classification and extraction never fail
//! - **Positional join**: subject rows are aligned by index across three scans
//! - **Parallel batches**: Rayon worker pools with a bounded thread count
//! - **Summary seam**: pluggable summarizer with explicit fallback text
//! - **Reports**: Markdown, plain text and JSON output

pub mod batch;
pub mod error;
pub mod extract;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod summary;

// Re-export commonly used types
pub use batch::{process_batch, process_stream, BatchItem, BatchOptions};
pub use error::{Error, Result};
pub use extract::{
    classify, extract_academic, extract_deadlines, normalize, ExtractOptions,
};
pub use model::{
    DeadlineKind, DeadlineMatch, DocumentCategory, ExtractionStats, PipelineResult, SubjectRecord,
};
pub use pipeline::{process, Pipeline};
pub use render::{JsonFormat, Report, ReportOptions};
pub use summary::{
    fallback_text, quick_summary, summarize_or_fallback, OfflineSummarizer, Summarizer,
    SummaryOutcome, SummaryRequest,
};

use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Read an OCR text file, replacing invalid UTF-8 sequences.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read and process an OCR text file with default options.
///
/// # Example
///
/// ```no_run
/// use schooldoc::process_file;
///
/// let result = process_file("report_card.txt").unwrap();
/// println!("{} records", result.subject_records.len());
/// ```
pub fn process_file<P: AsRef<Path>>(path: P) -> Result<PipelineResult> {
    let raw = read_text(path)?;
    Ok(process(&raw))
}

/// Builder for processing documents into reports.
///
/// # Example
///
/// ```
/// use schooldoc::Analyzer;
///
/// let analyzer = Analyzer::new().with_min_marks(35.0).sequential().build()?;
/// let report = analyzer.analyze("Dear Students, fees due 01/02/2024");
/// assert_eq!(report.result.deadlines.len(), 1);
/// # Ok::<(), schooldoc::Error>(())
/// ```
pub struct Analyzer {
    extract_options: ExtractOptions,
    batch_options: BatchOptions,
    summarizer: Arc<dyn Summarizer>,
}

impl Analyzer {
    /// Create a new analyzer builder.
    pub fn new() -> Self {
        Self {
            extract_options: ExtractOptions::default(),
            batch_options: BatchOptions::default(),
            summarizer: Arc::new(OfflineSummarizer),
        }
    }

    /// Set the marks threshold.
    pub fn with_min_marks(mut self, min_marks: f64) -> Self {
        self.extract_options = self.extract_options.with_min_marks(min_marks);
        self
    }

    /// Add a notice keyword.
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.extract_options = self.extract_options.with_extra_keyword(keyword);
        self
    }

    /// Replace all extraction options.
    pub fn with_extract_options(mut self, options: ExtractOptions) -> Self {
        self.extract_options = options;
        self
    }

    /// Disable parallel batch processing.
    pub fn sequential(mut self) -> Self {
        self.batch_options = self.batch_options.sequential();
        self
    }

    /// Bound the number of batch worker threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.batch_options = self.batch_options.with_max_threads(threads);
        self
    }

    /// Use a summarization service for insights.
    pub fn with_summarizer(mut self, summarizer: Arc<dyn Summarizer>) -> Self {
        self.summarizer = summarizer;
        self
    }

    /// Validate the options and compile the pipeline.
    pub fn build(self) -> Result<AnalyzerSession> {
        let pipeline = Pipeline::with_options(self.extract_options)?;
        Ok(AnalyzerSession {
            pipeline,
            batch_options: self.batch_options,
            summarizer: self.summarizer,
        })
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// A compiled analyzer ready to process documents.
pub struct AnalyzerSession {
    pipeline: Pipeline,
    batch_options: BatchOptions,
    summarizer: Arc<dyn Summarizer>,
}

impl AnalyzerSession {
    /// Process one raw text into a report.
    pub fn analyze(&self, raw: &str) -> Report {
        Report::summarize(self.pipeline.process(raw), self.summarizer.as_ref())
    }

    /// Read and process one OCR text file.
    pub fn analyze_file<P: AsRef<Path>>(&self, path: P) -> Result<Report> {
        let raw = read_text(path)?;
        Ok(self.analyze(&raw))
    }

    /// Process a batch of raw texts, keeping input order.
    pub fn analyze_batch<S>(&self, documents: &[S]) -> Result<Vec<Report>>
    where
        S: AsRef<str> + Sync,
    {
        let results = process_batch(documents, &self.pipeline, &self.batch_options)?;
        Ok(results
            .into_iter()
            .map(|result| Report::summarize(result, self.summarizer.as_ref()))
            .collect())
    }

    /// The compiled pipeline.
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// The batch options in use.
    pub fn batch_options(&self) -> &BatchOptions {
        &self.batch_options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    struct EchoSummarizer;

    impl Summarizer for EchoSummarizer {
        fn summarize(&self, request: &SummaryRequest) -> SummaryOutcome {
            SummaryOutcome::Ok(format!("{} document", request.category))
        }
    }

    #[test]
    fn test_analyzer_builder() {
        let session = Analyzer::new()
            .with_min_marks(40.0)
            .with_keyword("circular")
            .with_threads(2)
            .build()
            .unwrap();

        assert_eq!(session.pipeline().academic().min_marks(), 40.0);
        assert!(session
            .pipeline()
            .classifier()
            .keywords()
            .contains(&"circular".to_string()));
        assert_eq!(session.batch_options().max_threads, 2);
    }

    #[test]
    fn test_analyzer_rejects_invalid_options() {
        let result = Analyzer::new().with_min_marks(f64::NAN).build();
        assert!(matches!(result, Err(Error::InvalidOption(_))));
    }

    #[test]
    fn test_analyze_with_summarizer() {
        let session = Analyzer::new()
            .with_summarizer(Arc::new(EchoSummarizer))
            .build()
            .unwrap();
        let report = session.analyze("CIRCULAR: registration open");
        assert_eq!(report.insights, "NOTICE document");
    }

    #[test]
    fn test_analyze_batch_offline() {
        let session = Analyzer::new().sequential().build().unwrap();
        let reports = session
            .analyze_batch(&["CS301 DATA STRUCTURES 4 85.50", ""])
            .unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].insights, summary::ACADEMIC_FALLBACK);
        assert_eq!(reports[1].insights, summary::GENERIC_FALLBACK);
    }

    #[test]
    fn test_read_text_lossy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.txt");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"MA201 CALCULUS 3\n\xFF45.00").unwrap();
        drop(file);

        let text = read_text(&path).unwrap();
        assert!(text.contains('\u{FFFD}'));
        let result = process_file(&path).unwrap();
        assert_eq!(result.subject_records.len(), 1);
    }

    #[test]
    fn test_process_file_missing() {
        let result = process_file("/nonexistent/schooldoc/scan.txt");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
