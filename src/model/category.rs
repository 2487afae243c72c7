//! Document category.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The category assigned to a document by keyword classification.
///
/// Exactly one category is assigned per document and it decides which
/// extractor runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentCategory {
    /// Report cards, mark sheets and other academic records.
    #[default]
    Academic,
    /// Administrative notices and planners.
    Notice,
}

impl DocumentCategory {
    /// Short uppercase identifier (`"ACADEMIC"` or `"NOTICE"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentCategory::Academic => "ACADEMIC",
            DocumentCategory::Notice => "NOTICE",
        }
    }

    /// Human readable description used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentCategory::Academic => "ACADEMIC / REPORT DOCUMENT",
            DocumentCategory::Notice => "OFFICIAL NOTICE / PLANNER",
        }
    }
}

impl fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display() {
        assert_eq!(DocumentCategory::Academic.to_string(), "ACADEMIC");
        assert_eq!(DocumentCategory::Notice.to_string(), "NOTICE");
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&DocumentCategory::Notice).unwrap();
        assert_eq!(json, "\"NOTICE\"");

        let category: DocumentCategory = serde_json::from_str("\"ACADEMIC\"").unwrap();
        assert_eq!(category, DocumentCategory::Academic);
    }

    #[test]
    fn test_category_label() {
        assert_eq!(DocumentCategory::Notice.label(), "OFFICIAL NOTICE / PLANNER");
        assert_eq!(DocumentCategory::default(), DocumentCategory::Academic);
    }
}
