//! Poster layout.
//!
//! [`Composer::compose`] turns a canvas size, header/footer text and an ordered
//! list of sections into a [`Document`]: a flat, paint-ordered list of regions
//! and images. Composition is a pure function of its inputs; the only outside
//! question it asks is whether an attached image exists, through a
//! [`ResourceProvider`](placard_traits::ResourceProvider).

use thiserror::Error;

/// Input the composer refuses to lay out.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid layout: canvas must have a positive size, got {width} x {height}")]
    NonPositiveCanvas { width: f32, height: f32 },
    #[error("Invalid layout: at least one section is required")]
    NoSections,
}

pub mod algorithms;
pub mod composer;
pub mod content;
pub mod document;
pub mod elements;
pub mod line;
pub mod painting;

pub use self::algorithms::columns::ColumnGrid;
pub use self::composer::Composer;
pub use self::content::{FooterContent, HeaderContent, ImageAttachment, SectionContent};
pub use self::document::Document;
pub use self::elements::{
    LayoutElement, Paragraph, PlacedImage, Region, RegionRole, TextFrame, VerticalAnchor,
};
pub use self::line::LineKind;

pub use placard_types::{Rect, Size};

#[cfg(test)]
mod test_utils;
