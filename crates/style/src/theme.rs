//! The declarative look-and-feel consumed by the composer.
//!
//! A `Theme` holds every color, point size and offset used to paint a poster,
//! so layout code only decides *where* regions go. All lengths are inches,
//! all font sizes are points. Every field has a default, which means a JSON
//! theme file only needs to name what it changes.

use crate::dimension::{ColumnWidth, Margins};
use crate::error::StyleParseError;
use crate::text::TextStyle;
use placard_types::Color;
use serde::{Deserialize, Serialize};

/// Deep purple used for bands and accents in the default palette (#2D1441).
pub const ACCENT: Color = Color::rgb(45, 20, 65);
/// Outline color paired with [`ACCENT`] (#1A0B26).
pub const ACCENT_OUTLINE: Color = Color::rgb(26, 11, 38);

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    pub header: HeaderTheme,
    pub columns: ColumnTheme,
    pub section: SectionTheme,
    pub lines: LineStyles,
    pub footer: FooterTheme,
}

impl Theme {
    pub fn from_json(json: &str) -> Result<Self, StyleParseError> {
        let theme: Theme = serde_json::from_str(json)?;
        theme.validate()?;
        Ok(theme)
    }

    pub fn to_json(&self) -> Result<String, StyleParseError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects negative or non-finite lengths, which no layout can honor.
    pub fn validate(&self) -> Result<(), StyleParseError> {
        let insets = self.section.content_insets;
        let mut lengths = vec![
            ("header.height".to_string(), self.header.height),
            ("header.titleOffset".to_string(), self.header.title_offset),
            ("header.titleHeight".to_string(), self.header.title_height),
            ("header.band.borderWidth".to_string(), self.header.band.border_width),
            ("columns.spacing".to_string(), self.columns.spacing),
            ("columns.margin".to_string(), self.columns.margin),
            ("columns.headerGap".to_string(), self.columns.header_gap),
            ("columns.footerGap".to_string(), self.columns.footer_gap),
            ("section.titleHeight".to_string(), self.section.title_height),
            ("section.background.borderWidth".to_string(), self.section.background.border_width),
            ("section.titleBar.borderWidth".to_string(), self.section.title_bar.border_width),
            ("section.contentInsets.top".to_string(), insets.top),
            ("section.contentInsets.right".to_string(), insets.right),
            ("section.contentInsets.bottom".to_string(), insets.bottom),
            ("section.contentInsets.left".to_string(), insets.left),
            ("footer.height".to_string(), self.footer.height),
            ("footer.band.borderWidth".to_string(), self.footer.band.border_width),
        ];
        if let ColumnWidth::Fixed(width) = self.columns.width {
            lengths.push(("columns.width".to_string(), width));
        }
        for (i, line) in self.header.lines.iter().enumerate() {
            lengths.push((format!("header.lines[{}].offset", i), line.offset));
            lengths.push((format!("header.lines[{}].height", i), line.height));
        }

        for (property, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(StyleParseError::InvalidValue {
                    property,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Fill and outline of a painted rectangle. `None` leaves that part unpainted.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BoxStyle {
    pub fill: Option<Color>,
    pub border: Option<Color>,
    /// Outline width in points.
    pub border_width: f32,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self::none()
    }
}

impl BoxStyle {
    pub const fn none() -> Self {
        Self { fill: None, border: None, border_width: 1.0 }
    }

    pub const fn filled(fill: Color) -> Self {
        Self { fill: Some(fill), border: None, border_width: 1.0 }
    }

    pub const fn outlined(fill: Color, border: Color) -> Self {
        Self { fill: Some(fill), border: Some(border), border_width: 1.0 }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderTheme {
    pub height: f32,
    pub band: BoxStyle,
    pub title: TextStyle,
    /// Distance from the top of the canvas to the title's text box.
    pub title_offset: f32,
    pub title_height: f32,
    /// Styles for the header lines under the title, in order.
    pub lines: Vec<HeaderLineTheme>,
}

impl Default for HeaderTheme {
    fn default() -> Self {
        Self {
            height: 4.0,
            band: BoxStyle::outlined(ACCENT, ACCENT_OUTLINE),
            title: TextStyle::new(60.0, Color::WHITE).bold().centered(),
            title_offset: 0.2,
            title_height: 1.2,
            lines: vec![
                HeaderLineTheme::new(1.5, 1.0, TextStyle::new(28.0, Color::gray(204)).centered()),
                HeaderLineTheme::new(2.5, 0.7, TextStyle::new(30.0, Color::WHITE).centered()),
                HeaderLineTheme::new(3.2, 0.7, TextStyle::new(24.0, Color::WHITE).centered()),
            ],
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeaderLineTheme {
    pub offset: f32,
    pub height: f32,
    #[serde(default)]
    pub style: TextStyle,
}

impl HeaderLineTheme {
    pub fn new(offset: f32, height: f32, style: TextStyle) -> Self {
        Self { offset, height, style }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnTheme {
    pub width: ColumnWidth,
    /// Horizontal gap between neighbouring columns.
    pub spacing: f32,
    /// Left margin before the first column; the same margin is expected after the last.
    pub margin: f32,
    /// Vertical gap between the header band and the columns.
    pub header_gap: f32,
    /// Vertical gap between the columns and the footer band.
    pub footer_gap: f32,
}

impl Default for ColumnTheme {
    fn default() -> Self {
        Self {
            width: ColumnWidth::Fixed(15.0),
            spacing: 1.0,
            margin: 1.0,
            header_gap: 1.0,
            footer_gap: 0.0,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionTheme {
    pub background: BoxStyle,
    pub title_bar: BoxStyle,
    pub title_height: f32,
    pub title: TextStyle,
    pub content_insets: Margins,
}

impl Default for SectionTheme {
    fn default() -> Self {
        Self {
            background: BoxStyle::outlined(Color::WHITE, Color::gray(217)),
            title_bar: BoxStyle::outlined(ACCENT, ACCENT_OUTLINE),
            title_height: 1.0,
            title: TextStyle::new(36.0, Color::WHITE).bold().centered(),
            content_insets: Margins::new(1.5, 0.5, 0.5, 0.5),
        }
    }
}

/// One text style per content line kind.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LineStyles {
    pub body: TextStyle,
    pub bullet: TextStyle,
    pub placeholder: TextStyle,
    pub subheading: TextStyle,
}

impl LineStyles {
    /// Every kind of line rendered the same way.
    pub fn uniform(style: TextStyle) -> Self {
        Self {
            body: style,
            bullet: style,
            placeholder: style,
            subheading: style,
        }
    }
}

impl Default for LineStyles {
    fn default() -> Self {
        let body = TextStyle::new(24.0, Color::gray(51));
        Self {
            body,
            bullet: TextStyle::new(24.0, ACCENT),
            placeholder: TextStyle::new(24.0, Color::gray(128)).italic(),
            subheading: TextStyle::new(28.0, Color::gray(51)).bold(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterTheme {
    pub height: f32,
    pub band: BoxStyle,
    pub text: TextStyle,
}

impl Default for FooterTheme {
    fn default() -> Self {
        Self {
            height: 3.0,
            band: BoxStyle::outlined(ACCENT, ACCENT_OUTLINE),
            text: TextStyle::new(24.0, Color::WHITE).centered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{FontStyle, FontWeight};
    use crate::text::TextAlign;

    #[test]
    fn test_empty_json_is_default_theme() {
        let theme = Theme::from_json("{}").unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let theme = Theme::from_json(
            r##"{
                "columns": { "width": "fill", "spacing": 1.5, "margin": 0 },
                "lines": { "bullet": { "fontSize": 20, "color": "#FF0000" } }
            }"##,
        )
        .unwrap();

        assert_eq!(theme.columns.width, ColumnWidth::Fill);
        assert_eq!(theme.columns.spacing, 1.5);
        assert_eq!(theme.columns.header_gap, 1.0);
        assert_eq!(theme.lines.bullet.font_size, 20.0);
        assert_eq!(theme.lines.bullet.color, Color::rgb(255, 0, 0));
        assert_eq!(theme.lines.bullet.font_weight, FontWeight::Regular);
        assert_eq!(theme.lines.subheading, LineStyles::default().subheading);
        assert_eq!(theme.footer, FooterTheme::default());
    }

    #[test]
    fn test_text_style_fields_parse() {
        let theme = Theme::from_json(
            r##"{
                "section": {
                    "title": { "fontSize": 40, "color": "#fff", "fontWeight": "bold", "fontStyle": "italic", "textAlign": "right" },
                    "contentInsets": "1.5 0.5 0.5 0.5",
                    "titleBar": { "fill": null, "border": null }
                }
            }"##,
        )
        .unwrap();

        let title = theme.section.title;
        assert_eq!(title.font_size, 40.0);
        assert_eq!(title.font_style, FontStyle::Italic);
        assert_eq!(title.text_align, TextAlign::Right);
        assert!(title.is_bold());
        assert_eq!(theme.section.title_bar, BoxStyle::none());
        assert_eq!(theme.section.content_insets, Margins::new(1.5, 0.5, 0.5, 0.5));
    }

    #[test]
    fn test_negative_lengths_rejected() {
        let rejected = |json: &str| match Theme::from_json(json) {
            Err(StyleParseError::InvalidValue { property, .. }) => property,
            other => panic!("expected InvalidValue for {json}, got {other:?}"),
        };

        assert_eq!(rejected(r#"{ "footer": { "height": -2 } }"#), "footer.height");
        assert_eq!(
            rejected(r#"{ "section": { "contentInsets": "-3 -3 -3 -3" } }"#),
            "section.contentInsets.top"
        );
        assert_eq!(
            rejected(r#"{ "section": { "contentInsets": "0.5 0.5 0.5 -1" } }"#),
            "section.contentInsets.left"
        );
        assert_eq!(
            rejected(r#"{ "header": { "lines": [{ "offset": -5, "height": -2 }] } }"#),
            "header.lines[0].offset"
        );
        assert_eq!(
            rejected(r#"{ "header": { "lines": [{ "offset": 1, "height": 1 }, { "offset": 2, "height": -1 }] } }"#),
            "header.lines[1].height"
        );
        assert_eq!(
            rejected(r#"{ "section": { "titleBar": { "borderWidth": -1 } } }"#),
            "section.titleBar.borderWidth"
        );

        let mut theme = Theme::default();
        theme.columns.width = ColumnWidth::Fixed(f32::NAN);
        assert!(theme.validate().is_err());
    }

    #[test]
    fn test_non_ascii_color_is_an_error() {
        let err = Theme::from_json(r##"{ "header": { "band": { "fill": "#€" } } }"##).unwrap_err();
        assert!(matches!(err, StyleParseError::Json(_)));
    }

    #[test]
    fn test_malformed_json_reports_error() {
        let err = Theme::from_json(r#"{ "header": { "band": { "fill": "purple" } } }"#).unwrap_err();
        assert!(matches!(err, StyleParseError::Json(_)));
    }

    #[test]
    fn test_json_roundtrip_of_default() {
        let json = Theme::default().to_json().unwrap();
        assert_eq!(Theme::from_json(&json).unwrap(), Theme::default());
    }
}
