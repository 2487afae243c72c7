//! Deadline date detection for notice documents.

use chrono::Month;
use regex::Regex;

use crate::model::DeadlineMatch;

/// Written month (ASCII, any case), day, optional comma, 4-digit year; or a
/// numeric `D[D]/M[M]/YY[YY]` date with `/` or `-` separators.
const DATE_PATTERN: &str = r"(?i)(?-u:(january|february|march|april|may|june|july|august|september|october|november|december))\s+[0-9]{1,2},?\s+[0-9]{4}|[0-9]{1,2}[/-][0-9]{1,2}[/-][0-9]{2,4}";

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Extract deadlines with a freshly compiled extractor.
pub fn extract_deadlines(text: &str) -> Vec<DeadlineMatch> {
    DeadlineExtractor::new().extract(text)
}

/// Finds calendar date literals in notice text.
#[derive(Debug, Clone)]
pub struct DeadlineExtractor {
    date_regex: Regex,
}

impl DeadlineExtractor {
    /// Create a new deadline extractor.
    pub fn new() -> Self {
        Self {
            date_regex: Regex::new(DATE_PATTERN).expect("date pattern is valid"),
        }
    }

    /// Every non-overlapping date literal in text order, duplicates kept.
    pub fn extract(&self, text: &str) -> Vec<DeadlineMatch> {
        let deadlines: Vec<DeadlineMatch> = self
            .date_regex
            .captures_iter(text)
            .filter_map(|caps| {
                let literal = caps.get(0)?.as_str();
                match caps.get(1) {
                    Some(name) => month_from_name(name.as_str())
                        .map(|month| DeadlineMatch::written(literal, month)),
                    None => Some(DeadlineMatch::numeric(literal)),
                }
            })
            .collect();

        log::debug!("Found {} deadline dates", deadlines.len());
        deadlines
    }
}

impl Default for DeadlineExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Month for an ASCII month name in any case.
fn month_from_name(name: &str) -> Option<Month> {
    MONTHS
        .iter()
        .copied()
        .find(|month| month.name().eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DeadlineKind;

    #[test]
    fn test_written_month() {
        let text = "Dear Students, registration must be completed on or before March 5, 2024 without fail.";
        let deadlines = extract_deadlines(text);
        assert_eq!(deadlines.len(), 1);
        assert_eq!(deadlines[0].text, "March 5, 2024");
        assert_eq!(deadlines[0].month_name(), Some("March"));
    }

    #[test]
    fn test_case_insensitive_and_no_comma() {
        let deadlines = extract_deadlines("submit by DECEMBER 15 2023 or september 1, 2024");
        let texts: Vec<&str> = deadlines.iter().map(|d| d.text.as_str()).collect();
        assert_eq!(texts, vec!["DECEMBER 15 2023", "september 1, 2024"]);
        assert_eq!(
            deadlines[0].kind,
            DeadlineKind::WrittenMonth {
                month: Month::December
            }
        );
    }

    #[test]
    fn test_numeric_dates() {
        let deadlines = extract_deadlines("from 1/2/23 to 15-08-2024");
        let texts: Vec<&str> = deadlines.iter().map(|d| d.text.as_str()).collect();
        assert_eq!(texts, vec!["1/2/23", "15-08-2024"]);
        assert!(deadlines.iter().all(|d| d.kind == DeadlineKind::Numeric));
    }

    #[test]
    fn test_order_and_duplicates() {
        let deadlines = extract_deadlines("due 01/02/2023 and again 01/02/2023");
        assert_eq!(deadlines.len(), 2);
        assert_eq!(deadlines[0], deadlines[1]);
        assert_eq!(deadlines[0].text, "01/02/2023");
    }

    #[test]
    fn test_mixed_text_order() {
        let deadlines = extract_deadlines("fees 10/06/2024, exams April 2, 2024");
        assert_eq!(deadlines[0].text, "10/06/2024");
        assert_eq!(deadlines[1].text, "April 2, 2024");
    }

    #[test]
    fn test_no_match() {
        assert!(extract_deadlines("").is_empty());
        assert!(extract_deadlines("March 2024 and 12.05.2024").is_empty());
    }

    #[test]
    fn test_not_calendar_validated() {
        let deadlines = extract_deadlines("99/99/9999");
        assert_eq!(deadlines.len(), 1);
        assert_eq!(deadlines[0].to_date(), None);
    }
}
