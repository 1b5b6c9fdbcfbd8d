use crate::error::WriteError;
use crate::traits::DocumentWriter;
use placard_layout::Document;

/// Dumps the layout model as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonWriter;

impl DocumentWriter for JsonWriter {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, document: &Document) -> Result<Vec<u8>, WriteError> {
        let mut bytes = serde_json::to_vec_pretty(document)?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placard_layout::{Composer, FooterContent, HeaderContent, SectionContent};
    use placard_style::Theme;
    use placard_types::Size;
    use std::sync::Arc;

    fn document() -> Document {
        Composer::new(Arc::new(Theme::default()))
            .compose(
                Size::new(48.0, 36.0),
                &HeaderContent::new("NextStep").line("Career guidance"),
                &[SectionContent::new("Purpose", ["Key Features:", "• Roadmaps"])],
                &FooterContent::new("Thanks"),
            )
            .unwrap()
    }

    #[test]
    fn test_json_carries_regions_and_text() {
        let bytes = JsonWriter.render(&document()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["canvas"]["width"], 48.0);
        let elements = value["elements"].as_array().unwrap();
        let content = elements
            .iter()
            .find(|e| e["role"] == "section-content")
            .unwrap();
        assert_eq!(content["section"], 0);
        assert_eq!(content["text"]["paragraphs"][0]["kind"], "subheading");
        assert_eq!(content["text"]["paragraphs"][1]["kind"], "bullet");
        assert_eq!(elements.last().unwrap()["role"], "footer");
    }

    #[test]
    fn test_write_to_missing_directory_is_location_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("poster.json");

        let err = JsonWriter.write(&document(), &path).unwrap_err();
        assert!(err.is_location_unavailable());
    }

    #[test]
    fn test_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("poster.json");

        JsonWriter.write(&document(), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"title\": \"NextStep\""));
        assert_eq!(JsonWriter.extension(), "json");
    }
}
