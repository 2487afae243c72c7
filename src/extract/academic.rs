//! Subject record extraction for academic documents.
//!
//! Three independent scans run over the normalized text: course codes,
//! subject name/unit pairs, and decimal marks. The scans are not
//! cross-validated. Records are built by a positional join that pairs the
//! i-th entry of each sequence and stops at the shortest one, so a dropped
//! value in one column shifts every later record. The join assumes OCR
//! emits code, name, units and marks as implicitly ordered columns.

use regex::Regex;

use crate::model::SubjectRecord;

use super::ExtractOptions;

/// 2-3 uppercase letters immediately followed by exactly 3 digits.
const CODE_PATTERN: &str = r"[A-Z]{2,3}[0-9]{3}";

/// Uppercase name (letters, spaces, `&`) then whitespace then one unit digit.
const COURSE_PAIR_PATTERN: &str = r"([A-Z][A-Z\s&]+)\s+([0-9])";

/// Decimal number with a fractional part.
const MARKS_PATTERN: &str = r"[0-9]+\.[0-9]+";

/// Extract subject records using the default options.
pub fn extract_academic(text: &str) -> Vec<SubjectRecord> {
    AcademicExtractor::default().extract(text)
}

/// A subject name and unit digit captured together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoursePair {
    /// Trimmed subject name
    pub name: String,
    /// Unit digit
    pub units: u8,
}

/// Runs the three academic scans and aligns their results.
#[derive(Debug, Clone)]
pub struct AcademicExtractor {
    code_regex: Regex,
    course_regex: Regex,
    marks_regex: Regex,
    min_marks: f64,
}

impl AcademicExtractor {
    /// Create an extractor from extraction options.
    pub fn new(options: &ExtractOptions) -> Self {
        Self {
            code_regex: Regex::new(CODE_PATTERN).expect("code pattern is valid"),
            course_regex: Regex::new(COURSE_PAIR_PATTERN).expect("course pattern is valid"),
            marks_regex: Regex::new(MARKS_PATTERN).expect("marks pattern is valid"),
            min_marks: options.min_marks,
        }
    }

    /// Extract aligned subject records from normalized text.
    pub fn extract(&self, text: &str) -> Vec<SubjectRecord> {
        let codes = self.scan_codes(text);
        let pairs = self.scan_course_pairs(text);
        let marks = self.scan_marks(text);

        log::debug!(
            "Academic scan: {} codes, {} course pairs, {} marks",
            codes.len(),
            pairs.len(),
            marks.len()
        );
        if codes.len() != pairs.len() || pairs.len() != marks.len() {
            log::warn!(
                "Academic columns differ in length ({} codes, {} pairs, {} marks); records may be misaligned",
                codes.len(),
                pairs.len(),
                marks.len()
            );
        }

        align_records(&codes, &pairs, &marks)
    }

    /// Every non-overlapping course code, in text order.
    pub fn scan_codes<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.code_regex.find_iter(text).map(|m| m.as_str()).collect()
    }

    /// Every non-overlapping name/unit pair, in text order.
    pub fn scan_course_pairs(&self, text: &str) -> Vec<CoursePair> {
        self.course_regex
            .captures_iter(text)
            .filter_map(|caps| {
                let name = caps.get(1)?.as_str().trim();
                let units = caps.get(2)?.as_str().parse().ok()?;
                Some(CoursePair {
                    name: name.to_string(),
                    units,
                })
            })
            .collect()
    }

    /// Every decimal marks value at or above the threshold, in text order.
    pub fn scan_marks(&self, text: &str) -> Vec<f64> {
        let mut discarded = 0usize;
        let marks: Vec<f64> = self
            .marks_regex
            .find_iter(text)
            .filter_map(|m| m.as_str().parse::<f64>().ok())
            .filter(|value| {
                let keep = *value >= self.min_marks;
                if !keep {
                    discarded += 1;
                }
                keep
            })
            .collect();

        if discarded > 0 {
            log::debug!(
                "Discarded {} marks values below {}",
                discarded,
                self.min_marks
            );
        }
        marks
    }

    /// The marks threshold in use.
    pub fn min_marks(&self) -> f64 {
        self.min_marks
    }
}

impl Default for AcademicExtractor {
    fn default() -> Self {
        Self::new(&ExtractOptions::default())
    }
}

/// Positional join of the three scan results.
///
/// Produces exactly `min(codes, pairs, marks)` records; record `i` takes the
/// i-th entry of each sequence.
pub fn align_records(codes: &[&str], pairs: &[CoursePair], marks: &[f64]) -> Vec<SubjectRecord> {
    codes
        .iter()
        .zip(pairs)
        .zip(marks)
        .map(|((code, pair), marks)| SubjectRecord::new(*code, pair.name.clone(), pair.units, *marks))
        .collect()
}
