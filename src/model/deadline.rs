//! Calendar dates detected in notice text.

use chrono::{Month, NaiveDate};
use serde::{Deserialize, Serialize};

/// Which date shape produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum DeadlineKind {
    /// Written month name, day and year (`March 5, 2024`).
    WrittenMonth {
        /// Parsed month, used for grouping
        month: Month,
    },
    /// Numeric day/month/year with `/` or `-` separators (`05/03/2024`).
    Numeric,
}

/// A calendar date literal found in a notice.
///
/// The literal is kept exactly as matched; it is not validated as a real
/// calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineMatch {
    /// Matched substring as it appears in the normalized text
    pub text: String,

    /// Shape of the match
    #[serde(flatten)]
    pub kind: DeadlineKind,
}

impl DeadlineMatch {
    /// Create a written-month match.
    pub fn written(text: impl Into<String>, month: Month) -> Self {
        Self {
            text: text.into(),
            kind: DeadlineKind::WrittenMonth { month },
        }
    }

    /// Create a numeric match.
    pub fn numeric(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: DeadlineKind::Numeric,
        }
    }

    /// Canonical month name for written-month matches.
    pub fn month_name(&self) -> Option<&'static str> {
        match self.kind {
            DeadlineKind::WrittenMonth { month } => Some(month.name()),
            DeadlineKind::Numeric => None,
        }
    }

    /// Best-effort calendar interpretation of the literal.
    ///
    /// Numeric dates are read day first. Two-digit years map to 20YY.
    /// Returns `None` when the literal does not name a real date.
    pub fn to_date(&self) -> Option<NaiveDate> {
        match self.kind {
            DeadlineKind::WrittenMonth { month } => {
                let mut numbers = self
                    .text
                    .split(|c: char| c.is_whitespace() || c == ',')
                    .filter(|part| !part.is_empty())
                    .skip(1);
                let day: u32 = numbers.next()?.parse().ok()?;
                let year: i32 = numbers.next()?.parse().ok()?;
                NaiveDate::from_ymd_opt(year, month.number_from_month(), day)
            }
            DeadlineKind::Numeric => {
                let parts: Vec<&str> = self.text.split(['/', '-']).collect();
                if parts.len() != 3 {
                    return None;
                }
                let day: u32 = parts[0].parse().ok()?;
                let month: u32 = parts[1].parse().ok()?;
                let year: i32 = match parts[2].len() {
                    2 => 2000 + parts[2].parse::<i32>().ok()?,
                    4 => parts[2].parse().ok()?,
                    _ => return None,
                };
                NaiveDate::from_ymd_opt(year, month, day)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_written_to_date() {
        let deadline = DeadlineMatch::written("March 5, 2024", Month::March);
        assert_eq!(deadline.month_name(), Some("March"));
        assert_eq!(deadline.to_date(), NaiveDate::from_ymd_opt(2024, 3, 5));
    }

    #[test]
    fn test_written_without_comma() {
        let deadline = DeadlineMatch::written("JUNE 30 2025", Month::June);
        assert_eq!(deadline.to_date(), NaiveDate::from_ymd_opt(2025, 6, 30));
    }

    #[test]
    fn test_numeric_to_date() {
        let deadline = DeadlineMatch::numeric("05/03/2024");
        assert_eq!(deadline.month_name(), None);
        assert_eq!(deadline.to_date(), NaiveDate::from_ymd_opt(2024, 3, 5));

        let short = DeadlineMatch::numeric("1-2-23");
        assert_eq!(short.to_date(), NaiveDate::from_ymd_opt(2023, 2, 1));
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(DeadlineMatch::numeric("31/02/2024").to_date(), None);
        assert_eq!(DeadlineMatch::numeric("12/12/202").to_date(), None);
        assert_eq!(
            DeadlineMatch::written("February 30, 2024", Month::February).to_date(),
            None
        );
    }

    #[test]
    fn test_deadline_serde() {
        let deadline = DeadlineMatch::written("March 5, 2024", Month::March);
        let json = serde_json::to_string(&deadline).unwrap();
        assert!(json.contains("\"form\":\"written_month\""));
        assert!(json.contains("\"text\":\"March 5, 2024\""));

        let back: DeadlineMatch = serde_json::from_str(&json).unwrap();
        assert_eq!(back, deadline);
    }
}
