use crate::LayoutError;
use crate::algorithms::columns::ColumnGrid;
use crate::content::{FooterContent, HeaderContent, SectionContent};
use crate::document::Document;
use crate::elements::{
    LayoutElement, Paragraph, PlacedImage, Region, RegionRole, TextFrame, VerticalAnchor,
};
use crate::line::LineKind;
use crate::painting::{paint_box, text_region};
use placard_style::{HeaderLineTheme, LineStyles, TextStyle, Theme};
use placard_traits::{InMemoryResourceProvider, ResourceProvider};
use placard_types::{Rect, ResourceUri, Size};
use std::sync::Arc;

/// Lays out a poster in a single deterministic pass.
///
/// The composer owns the look (a [`Theme`]) and an asset probe used to decide
/// whether attached images are placed. It holds no other state, so one
/// composer can be shared and called any number of times.
#[derive(Debug, Clone)]
pub struct Composer {
    theme: Arc<Theme>,
    resources: Arc<dyn ResourceProvider>,
}

impl Composer {
    /// A composer that never finds any images.
    pub fn new(theme: Arc<Theme>) -> Self {
        Self {
            theme,
            resources: Arc::new(InMemoryResourceProvider::new()),
        }
    }

    pub fn with_resources(mut self, resources: Arc<dyn ResourceProvider>) -> Self {
        self.resources = resources;
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn compose(
        &self,
        canvas: Size,
        header: &HeaderContent,
        sections: &[SectionContent],
        footer: &FooterContent,
    ) -> Result<Document, LayoutError> {
        if !canvas.is_positive() {
            return Err(LayoutError::NonPositiveCanvas {
                width: canvas.width,
                height: canvas.height,
            });
        }
        if sections.is_empty() {
            return Err(LayoutError::NoSections);
        }

        let theme = &*self.theme;
        let grid = ColumnGrid::compute(
            canvas,
            sections.len(),
            theme.header.height,
            theme.footer.height,
            &theme.columns,
        );
        log::debug!(
            "Laying out {} sections of {:.2}in x {:.2}in starting at y={:.2}in",
            sections.len(),
            grid.width,
            grid.height,
            grid.top
        );

        let overflow = grid.overflow();
        if overflow > 0.0 {
            log::warn!(
                "Sections span {:.2}in on a {:.2}in canvas and overflow by {:.2}in",
                grid.placed_width(),
                canvas.width,
                overflow
            );
        }

        let mut elements = Vec::with_capacity(4 + sections.len() * 4 + header.lines.len());
        self.push_header(&mut elements, canvas, header);
        for (index, section) in sections.iter().enumerate() {
            self.push_section(&mut elements, index, grid.column(index), section);
        }
        self.push_footer(&mut elements, canvas, footer);

        Ok(Document::new(
            header.title.clone(),
            canvas,
            sections.len(),
            overflow,
            elements,
        ))
    }

    fn push_header(&self, out: &mut Vec<LayoutElement>, canvas: Size, header: &HeaderContent) {
        let theme = &self.theme.header;
        let band = Rect::new(0.0, 0.0, canvas.width, theme.height.min(canvas.height));
        out.push(LayoutElement::Region(paint_box(band, &theme.band, RegionRole::Header, None)));

        let title_rect = Rect::new(0.0, theme.title_offset, canvas.width, theme.title_height);
        out.push(LayoutElement::Region(text_region(
            title_rect,
            RegionRole::HeaderText,
            None,
            TextFrame::single(&header.title, theme.title, VerticalAnchor::Middle),
        )));

        let mut previous: Option<HeaderLineTheme> = None;
        for (i, line) in header.lines.iter().enumerate() {
            // Lines past the themed list stack under the previous one.
            let slot = theme.lines.get(i).copied().unwrap_or_else(|| match previous {
                Some(prev) => HeaderLineTheme::new(prev.offset + prev.height, prev.height, prev.style),
                None => HeaderLineTheme::new(
                    theme.title_offset + theme.title_height,
                    theme.title_height,
                    theme.title,
                ),
            });
            previous = Some(slot);

            let rect = Rect::new(0.0, slot.offset, canvas.width, slot.height);
            out.push(LayoutElement::Region(text_region(
                rect,
                RegionRole::HeaderText,
                None,
                TextFrame::single(line, slot.style, VerticalAnchor::Middle),
            )));
        }
    }

    fn push_section(
        &self,
        out: &mut Vec<LayoutElement>,
        index: usize,
        column: Rect,
        section: &SectionContent,
    ) {
        let theme = &self.theme.section;

        out.push(LayoutElement::Region(paint_box(
            column,
            &theme.background,
            RegionRole::SectionBackground,
            Some(index),
        )));

        // The title bar is painted over the top of the background.
        let title_rect = Rect::new(column.x, column.y, column.width, theme.title_height.min(column.height));
        out.push(LayoutElement::Region(Region {
            text: Some(TextFrame::single(&section.title, theme.title, VerticalAnchor::Middle)),
            ..paint_box(title_rect, &theme.title_bar, RegionRole::SectionTitle, Some(index))
        }));

        let insets = theme.content_insets;
        let content_rect = column.inset(insets.top, insets.right, insets.bottom, insets.left);
        let frame = TextFrame {
            paragraphs: content_paragraphs(&section.lines, &self.theme.lines),
            anchor: VerticalAnchor::Top,
        };
        out.push(LayoutElement::Region(text_region(
            content_rect,
            RegionRole::SectionContent,
            Some(index),
            frame,
        )));

        if let Some(image) = &section.image {
            if self.resources.exists(&image.file) {
                out.push(LayoutElement::Image(PlacedImage {
                    source: ResourceUri::from(image.file.as_str()),
                    x: column.x + image.offset_x,
                    y: column.y + image.offset_y,
                    width: (column.width - 2.0 * image.offset_x).max(0.0),
                    section: index,
                }));
            } else {
                log::debug!(
                    "Image '{}' for section '{}' not found via {}, skipping",
                    image.file,
                    section.title,
                    self.resources.name()
                );
            }
        }
    }

    fn push_footer(&self, out: &mut Vec<LayoutElement>, canvas: Size, footer: &FooterContent) {
        let theme = &self.theme.footer;
        // Never reach above the header band.
        let header_bottom = self.theme.header.height.min(canvas.height);
        let top = (canvas.height - theme.height).max(header_bottom);
        if top > canvas.height - theme.height {
            log::warn!(
                "Footer clipped to {:.2}in to stay below the header band",
                canvas.height - top
            );
        }
        let rect = Rect::new(0.0, top, canvas.width, canvas.height - top);
        out.push(LayoutElement::Region(Region {
            text: Some(TextFrame::single(&footer.text, theme.text, VerticalAnchor::Middle)),
            ..paint_box(rect, &theme.band, RegionRole::Footer, None)
        }));
    }
}

fn content_paragraphs(lines: &[String], styles: &LineStyles) -> Vec<Paragraph> {
    lines
        .iter()
        .map(|line| {
            let kind = LineKind::classify(line);
            Paragraph {
                text: line.clone(),
                kind: Some(kind),
                style: style_for(kind, styles),
            }
        })
        .collect()
}

fn style_for(kind: LineKind, styles: &LineStyles) -> TextStyle {
    match kind {
        LineKind::Bullet => styles.bullet,
        LineKind::Placeholder => styles.placeholder,
        LineKind::Subheading => styles.subheading,
        LineKind::Body => styles.body,
    }
}
