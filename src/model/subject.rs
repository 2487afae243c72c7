//! Academic subject rows.

use serde::{Deserialize, Serialize};

/// One row of academic performance extracted from a report document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectRecord {
    /// Course code, 2-3 uppercase letters followed by 3 digits (e.g. `CS301`)
    pub code: String,

    /// Subject name, trimmed
    pub name: String,

    /// Credit units (single digit as matched)
    pub units: u8,

    /// Score; never below the configured marks threshold
    pub marks: f64,
}

impl SubjectRecord {
    /// Create a new subject record.
    pub fn new(code: impl Into<String>, name: impl Into<String>, units: u8, marks: f64) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            units,
            marks,
        }
    }

    /// Render as `"NAME (MARKS marks)"`, the shape handed to summarizers.
    pub fn summary_fragment(&self) -> String {
        format!("{} ({} marks)", self.name, format_marks(self.marks))
    }
}

/// Format a marks value, always keeping at least one fractional digit.
///
/// `85.5` renders as `"85.5"` and `45.0` as `"45.0"`.
pub fn format_marks(marks: f64) -> String {
    if marks.is_finite() && marks.fract() == 0.0 {
        format!("{:.1}", marks)
    } else {
        format!("{}", marks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_fragment() {
        let record = SubjectRecord::new("CS301", "DATA STRUCTURES", 4, 85.5);
        assert_eq!(record.summary_fragment(), "DATA STRUCTURES (85.5 marks)");
    }

    #[test]
    fn test_format_marks() {
        assert_eq!(format_marks(45.0), "45.0");
        assert_eq!(format_marks(85.5), "85.5");
        assert_eq!(format_marks(72.25), "72.25");
    }
}
