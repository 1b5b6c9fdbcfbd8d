use crate::elements::{LayoutElement, PlacedImage, Region};
use placard_types::Size;
use serde::Serialize;

/// A fully composed poster: the canvas plus every element in paint order.
///
/// Built once by the composer and never mutated afterwards; writers only read it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    title: String,
    canvas: Size,
    section_count: usize,
    overflow: f32,
    elements: Vec<LayoutElement>,
}

impl Document {
    pub(crate) fn new(
        title: String,
        canvas: Size,
        section_count: usize,
        overflow: f32,
        elements: Vec<LayoutElement>,
    ) -> Self {
        Self {
            title,
            canvas,
            section_count,
            overflow,
            elements,
        }
    }

    /// The header title, used as document metadata by writers.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    pub fn section_count(&self) -> usize {
        self.section_count
    }

    /// How far the section columns (plus the right margin) run past the
    /// canvas edge, in inches. Zero when they fit.
    pub fn overflow(&self) -> f32 {
        self.overflow
    }

    /// All elements in paint order.
    pub fn elements(&self) -> &[LayoutElement] {
        &self.elements
    }

    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.elements.iter().filter_map(LayoutElement::as_region)
    }

    pub fn images(&self) -> impl Iterator<Item = &PlacedImage> {
        self.elements.iter().filter_map(LayoutElement::as_image)
    }

    /// Header band, section backgrounds and footer band, in paint order.
    pub fn bands(&self) -> impl Iterator<Item = &Region> {
        self.regions().filter(|r| r.role.is_band())
    }

    /// Every element owned by one section, in paint order.
    pub fn section_elements(&self, index: usize) -> impl Iterator<Item = &LayoutElement> {
        self.elements
            .iter()
            .filter(move |e| e.section() == Some(index))
    }
}
