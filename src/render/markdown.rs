//! Markdown rendering for reports.

use std::fmt::Write;

use crate::error::{Error, Result};
use crate::model::{format_marks, DeadlineMatch, SubjectRecord};

use super::{truncate_chars, Report, ReportOptions};

/// Convert a report to Markdown.
pub fn to_markdown(report: &Report, options: &ReportOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(report)
}

/// Markdown report renderer.
pub struct MarkdownRenderer {
    options: ReportOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    /// Render a report to Markdown.
    pub fn render(&self, report: &Report) -> Result<String> {
        let mut output = String::new();
        self.render_internal(&mut output, report)
            .map_err(|e| Error::Render(format!("Markdown formatting error: {}", e)))?;
        Ok(output.trim_end().to_string())
    }

    fn render_internal(&self, output: &mut String, report: &Report) -> std::fmt::Result {
        let result = &report.result;

        writeln!(output, "# {}\n", self.options.title)?;
        writeln!(output, "## Document Type\n")?;
        writeln!(output, "{} ({})\n", result.category, result.category.label())?;

        if !result.subject_records.is_empty() {
            writeln!(output, "## Academic Summary\n")?;
            self.render_table(output, &result.subject_records)?;
            output.push('\n');
        }

        writeln!(output, "## AI Insights\n")?;
        writeln!(
            output,
            "{}\n",
            truncate_chars(&report.insights, self.options.insight_chars)
        )?;

        if !result.deadlines.is_empty() {
            writeln!(output, "## Important Deadlines\n")?;
            self.render_deadlines(output, &result.deadlines)?;
            output.push('\n');
        }

        if self.options.include_text && !result.normalized_text.is_empty() {
            writeln!(output, "## Extracted Text\n")?;
            writeln!(output, "{}", result.normalized_text)?;
        }

        Ok(())
    }

    fn render_table(&self, output: &mut String, records: &[SubjectRecord]) -> std::fmt::Result {
        writeln!(output, "| Code | Subject | Units | Marks |")?;
        writeln!(output, "|------|---------|------:|------:|")?;
        for record in records {
            writeln!(
                output,
                "| {} | {} | {} | {} |",
                escape_cell(&record.code),
                escape_cell(truncate_chars(&record.name, self.options.name_width)),
                record.units,
                format_marks(record.marks)
            )?;
        }
        Ok(())
    }

    fn render_deadlines(&self, output: &mut String, deadlines: &[DeadlineMatch]) -> std::fmt::Result {
        for deadline in deadlines {
            writeln!(output, "- {}", deadline.text)?;
        }
        Ok(())
    }
}

/// Escape characters that would break a Markdown table cell.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
