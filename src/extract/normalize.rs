//! Whitespace normalization for raw OCR output.

/// Collapse every run of whitespace (spaces, tabs, line breaks) into a single
/// space and trim both ends.
///
/// Total over any input; the empty string normalizes to the empty string.
/// The result never contains two consecutive whitespace characters, so
/// normalizing twice is the same as normalizing once.
pub fn normalize(raw: &str) -> String {
    let mut output = String::with_capacity(raw.len());
    for word in raw.split_whitespace() {
        if !output.is_empty() {
            output.push(' ');
        }
        output.push_str(word);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_newlines_and_spaces() {
        let raw = "CS301 DATA STRUCTURES 4\n85.50\nMA201 CALCULUS 3\n45.00";
        assert_eq!(
            normalize(raw),
            "CS301 DATA STRUCTURES 4 85.50 MA201 CALCULUS 3 45.00"
        );
    }

    #[test]
    fn test_trim_and_tabs() {
        assert_eq!(normalize("  \t Dear\r\n\n\n  Students \t"), "Dear Students");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t\r "), "");
    }

    #[test]
    fn test_unicode_whitespace() {
        assert_eq!(normalize("a\u{00A0}\u{2003}b\u{3000}c"), "a b c");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("x \n\n y\t\tz  ");
        assert_eq!(normalize(&once), once);
    }
}
