use crate::line::LineKind;
use placard_style::TextStyle;
use placard_types::{Color, Rect, ResourceUri};
use serde::Serialize;

/// What a region is for. Bands are the top-level areas that tile the canvas;
/// everything else sits inside a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionRole {
    Header,
    HeaderText,
    SectionBackground,
    SectionTitle,
    SectionContent,
    Footer,
}

impl RegionRole {
    pub fn is_band(self) -> bool {
        matches!(
            self,
            RegionRole::Header | RegionRole::SectionBackground | RegionRole::Footer
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerticalAnchor {
    #[default]
    Top,
    Middle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    pub text: String,
    /// Set for section content lines; `None` for titles, header lines and the footer.
    pub kind: Option<LineKind>,
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFrame {
    pub paragraphs: Vec<Paragraph>,
    pub anchor: VerticalAnchor,
}

impl TextFrame {
    pub fn single(text: impl Into<String>, style: TextStyle, anchor: VerticalAnchor) -> Self {
        Self {
            paragraphs: vec![Paragraph {
                text: text.into(),
                kind: None,
                style,
            }],
            anchor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub rect: Rect,
    pub fill: Option<Color>,
    pub border: Option<Color>,
    /// Outline width in points; only meaningful with a border.
    pub border_width: f32,
    pub role: RegionRole,
    /// Index of the owning section, if any.
    pub section: Option<usize>,
    pub text: Option<TextFrame>,
}

/// An image anchored by its top-left corner. The height follows from the
/// image's own aspect ratio once it is decoded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedImage {
    pub source: ResourceUri,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub section: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum LayoutElement {
    Region(Region),
    Image(PlacedImage),
}

impl LayoutElement {
    pub fn as_region(&self) -> Option<&Region> {
        match self {
            LayoutElement::Region(region) => Some(region),
            LayoutElement::Image(_) => None,
        }
    }

    pub fn as_image(&self) -> Option<&PlacedImage> {
        match self {
            LayoutElement::Image(image) => Some(image),
            LayoutElement::Region(_) => None,
        }
    }

    pub fn section(&self) -> Option<usize> {
        match self {
            LayoutElement::Region(region) => region.section,
            LayoutElement::Image(image) => Some(image.section),
        }
    }
}
