//! Single-document pipeline: normalize, classify, then run the extractor
//! that matches the category.

use crate::error::Result;
use crate::extract::{
    normalize, AcademicExtractor, Classifier, DeadlineExtractor, ExtractOptions,
};
use crate::model::{DocumentCategory, PipelineResult};

/// Process one document with the default options.
///
/// # Example
///
/// ```
/// use schooldoc::{process, DocumentCategory};
///
/// let result = process("CS301 DATA STRUCTURES 4\n85.50");
/// assert_eq!(result.category, DocumentCategory::Academic);
/// assert_eq!(result.subject_records[0].code, "CS301");
/// ```
pub fn process(raw: &str) -> PipelineResult {
    Pipeline::new().process(raw)
}

/// Compiled classification and extraction stages.
///
/// A pipeline holds no per-document state, so one instance can be shared
/// across threads and reused for any number of documents.
#[derive(Debug, Clone)]
pub struct Pipeline {
    classifier: Classifier,
    academic: AcademicExtractor,
    deadlines: DeadlineExtractor,
}

impl Pipeline {
    /// Create a pipeline with default options.
    pub fn new() -> Self {
        Self::build(&ExtractOptions::default())
    }

    /// Create a pipeline with custom options.
    pub fn with_options(options: ExtractOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::build(&options))
    }

    fn build(options: &ExtractOptions) -> Self {
        Self {
            classifier: Classifier::new(options),
            academic: AcademicExtractor::new(options),
            deadlines: DeadlineExtractor::new(),
        }
    }

    /// Process one raw OCR text. Never fails; the worst case is an empty result.
    pub fn process(&self, raw: &str) -> PipelineResult {
        let normalized_text = normalize(raw);
        let category = self.classifier.classify(&normalized_text);

        let subject_records = match category {
            DocumentCategory::Academic => self.academic.extract(&normalized_text),
            DocumentCategory::Notice => Vec::new(),
        };
        let deadlines = match category {
            DocumentCategory::Notice => self.deadlines.extract(&normalized_text),
            DocumentCategory::Academic => Vec::new(),
        };

        log::debug!(
            "Processed document: {} ({} records, {} deadlines)",
            category,
            subject_records.len(),
            deadlines.len()
        );

        PipelineResult {
            category,
            subject_records,
            deadlines,
            normalized_text,
        }
    }

    /// The classification stage.
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// The academic extraction stage.
    pub fn academic(&self) -> &AcademicExtractor {
        &self.academic
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
