//! Plain text rendering for reports.

use crate::error::Result;
use crate::model::format_marks;

use super::{truncate_chars, Report, ReportOptions};

/// Convert a report to plain text.
pub fn to_text(report: &Report, options: &ReportOptions) -> Result<String> {
    let result = &report.result;
    let mut lines = vec![options.title.clone(), String::new()];

    lines.push("Document Type:".to_string());
    lines.push(format!("    {}", result.category));
    lines.push(String::new());

    if !result.subject_records.is_empty() {
        let width = options.name_width.max("Subject".len());
        lines.push("Academic Summary".to_string());
        lines.push(format!(
            "{:<8} {:<width$} {:>5} {:>7}",
            "Code",
            "Subject",
            "Units",
            "Marks",
            width = width
        ));
        for record in &result.subject_records {
            lines.push(format!(
                "{:<8} {:<width$} {:>5} {:>7}",
                record.code,
                truncate_chars(&record.name, options.name_width),
                record.units,
                format_marks(record.marks),
                width = width
            ));
        }
        lines.push(String::new());
    }

    lines.push("AI Insights".to_string());
    lines.push(format!(
        "    {}",
        truncate_chars(&report.insights, options.insight_chars)
    ));
    lines.push(String::new());

    if !result.deadlines.is_empty() {
        lines.push("Important Deadlines".to_string());
        for deadline in &result.deadlines {
            lines.push(format!("    - {}", deadline.text));
        }
        lines.push(String::new());
    }

    if options.include_text && !result.normalized_text.is_empty() {
        lines.push("Extracted Text".to_string());
        lines.push(result.normalized_text.clone());
    }

    Ok(lines.join("\n").trim_end().to_string())
}
