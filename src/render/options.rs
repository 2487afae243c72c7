//! Report rendering options.

/// Default report title.
pub const DEFAULT_TITLE: &str = "School Document AI - Summary Report";

/// Options for rendering reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Report heading
    pub title: String,

    /// Maximum characters of a subject name shown in the table
    pub name_width: usize,

    /// Maximum characters of the insights text shown
    pub insight_chars: usize,

    /// Append the normalized document text
    pub include_text: bool,
}

impl ReportOptions {
    /// Create new report options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the subject name width.
    pub fn with_name_width(mut self, width: usize) -> Self {
        self.name_width = width;
        self
    }

    /// Set how many characters of the insights are shown.
    pub fn with_insight_chars(mut self, chars: usize) -> Self {
        self.insight_chars = chars;
        self
    }

    /// Enable or disable the normalized text section.
    pub fn with_text(mut self, include: bool) -> Self {
        self.include_text = include;
        self
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            name_width: 30,
            insight_chars: 100,
            include_text: false,
        }
    }
}

/// The first `max` characters of `text`, never splitting a character.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
