//! Keyword-signal document classification.

use crate::model::DocumentCategory;

use super::ExtractOptions;

/// Classify normalized text with the default keyword set.
pub fn classify(text: &str) -> DocumentCategory {
    Classifier::default().classify(text)
}

/// Assigns a [`DocumentCategory`] by searching for notice keywords.
///
/// Any keyword occurring as a case-insensitive substring (even inside a
/// larger word) makes the document a notice; otherwise it is academic.
#[derive(Debug, Clone)]
pub struct Classifier {
    keywords: Vec<String>,
}

impl Classifier {
    /// Create a classifier from extraction options.
    pub fn new(options: &ExtractOptions) -> Self {
        Self {
            keywords: options
                .notice_keywords
                .iter()
                .map(|k| fold_case(k))
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    /// Classify normalized text.
    pub fn classify(&self, text: &str) -> DocumentCategory {
        let folded = fold_case(text);
        match self.matching_keyword(&folded) {
            Some(keyword) => {
                log::debug!("Classified as notice (keyword {:?})", keyword);
                DocumentCategory::Notice
            }
            None => {
                log::debug!("No notice keyword found, classified as academic");
                DocumentCategory::Academic
            }
        }
    }

    /// The folded keywords this classifier searches for.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn matching_keyword(&self, folded: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|k| folded.contains(k.as_str()))
            .map(String::as_str)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&ExtractOptions::default())
    }
}

/// Case fold through uppercase first so that upper-, lower- and mixed-case
/// spellings of the same text fold identically (`ſ` and `s` both become `s`).
fn fold_case(text: &str) -> String {
    text.to_uppercase().to_lowercase()
}
