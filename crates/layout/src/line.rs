use serde::Serialize;

/// Leading marker of a bullet line.
pub const BULLET_MARKER: char = '\u{2022}';
/// Leading token of an image placeholder line.
pub const PLACEHOLDER_TOKEN: &str = "[INSERT";

/// How a section content line is rendered, decided by its markup alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineKind {
    Bullet,
    /// Informational only: never triggers an image embed.
    Placeholder,
    Subheading,
    Body,
}

impl LineKind {
    /// First match wins, on the raw line: bullet, placeholder, subheading, body.
    pub fn classify(line: &str) -> Self {
        if line.starts_with(BULLET_MARKER) {
            LineKind::Bullet
        } else if line.starts_with(PLACEHOLDER_TOKEN) {
            LineKind::Placeholder
        } else if line.ends_with(':') {
            LineKind::Subheading
        } else {
            LineKind::Body
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_kind() {
        assert_eq!(LineKind::classify("• item"), LineKind::Bullet);
        assert_eq!(LineKind::classify("Summary:"), LineKind::Subheading);
        assert_eq!(
            LineKind::classify("[INSERT SIGNUP_SCREEN.PNG IMAGE HERE]"),
            LineKind::Placeholder
        );
        assert_eq!(LineKind::classify("NextStep makes job searching easier."), LineKind::Body);
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(LineKind::classify("• Frontend:"), LineKind::Bullet);
        assert_eq!(LineKind::classify("[INSERT diagram]:"), LineKind::Placeholder);
    }

    #[test]
    fn test_raw_line_is_not_trimmed() {
        assert_eq!(LineKind::classify("  • indented"), LineKind::Body);
        assert_eq!(LineKind::classify("Key Features: "), LineKind::Body);
        assert_eq!(LineKind::classify("\nKey Innovation Points:"), LineKind::Subheading);
    }

    #[test]
    fn test_empty_line_is_body() {
        assert_eq!(LineKind::classify(""), LineKind::Body);
    }

    #[test]
    fn test_placeholder_token_is_case_sensitive() {
        assert_eq!(LineKind::classify("[insert image]"), LineKind::Body);
    }
}
