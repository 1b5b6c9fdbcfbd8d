use crate::metrics::{self, BASELINE_FACTOR, LINE_HEIGHT_FACTOR};
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use placard_layout::{Region, TextFrame, VerticalAnchor};
use placard_render_core::utils::{flip_y, to_points};
use placard_style::{TextAlign, TextStyle};
use placard_types::{Color, Rect};
use std::collections::HashMap;

/// Horizontal padding inside every text frame, in points.
const FRAME_PADDING: f32 = 7.2;

/// Resource name of each standard face, keyed by its PostScript name.
pub type FontMap = HashMap<String, String>;

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font_name: String,
    font_size: f32,
    fill_color: Option<Color>,
}

/// Accumulates the content stream of the single poster page.
pub(crate) struct PageContext<'a> {
    page_height: f32,
    content: Content,
    state: PageRenderState,
    font_map: &'a FontMap,
}

impl<'a> PageContext<'a> {
    /// `page_height` is in points.
    pub fn new(page_height: f32, font_map: &'a FontMap) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
            font_map,
        }
    }

    pub fn finish(self) -> Content {
        self.content
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    pub fn draw_region(&mut self, region: &Region) {
        let rect = region.rect.to_points();
        let y = flip_y(rect.bottom(), self.page_height);

        if let Some(fill) = region.fill {
            self.set_fill_color(fill);
            self.op("re", vec![rect.x.into(), y.into(), rect.width.into(), rect.height.into()]);
            self.op("f", vec![]);
        }
        if let Some(border) = region.border {
            let [r, g, b] = border.to_unit_rgb();
            self.op("w", vec![region.border_width.into()]);
            self.op("RG", vec![r.into(), g.into(), b.into()]);
            self.op("re", vec![rect.x.into(), y.into(), rect.width.into(), rect.height.into()]);
            self.op("S", vec![]);
        }
        if let Some(frame) = &region.text {
            self.draw_text_frame(frame, rect);
        }
    }

    /// Lays out and paints a frame inside `rect` (points, top-left origin).
    fn draw_text_frame(&mut self, frame: &TextFrame, rect: Rect) {
        let inner_width = (rect.width - 2.0 * FRAME_PADDING).max(0.0);

        let mut lines: Vec<(String, f32, &TextStyle)> = Vec::new();
        for paragraph in &frame.paragraphs {
            for line in metrics::wrap(&paragraph.text, &paragraph.style, inner_width) {
                let width = metrics::measure(&line, &paragraph.style);
                lines.push((line, width, &paragraph.style));
            }
        }
        let total_height: f32 = lines
            .iter()
            .map(|(_, _, style)| style.font_size * LINE_HEIGHT_FACTOR)
            .sum();

        let mut top = match frame.anchor {
            VerticalAnchor::Top => rect.y,
            VerticalAnchor::Middle => rect.y + (rect.height - total_height) / 2.0,
        };

        for (line, width, style) in lines {
            let x = match style.text_align {
                TextAlign::Left => rect.x + FRAME_PADDING,
                TextAlign::Center => rect.x + (rect.width - width) / 2.0,
                TextAlign::Right => rect.right() - FRAME_PADDING - width,
            };
            let baseline = top + style.font_size * BASELINE_FACTOR;
            self.draw_text_line(&line, style, x, flip_y(baseline, self.page_height));
            top += style.font_size * LINE_HEIGHT_FACTOR;
        }
    }

    fn draw_text_line(&mut self, text: &str, style: &TextStyle, x: f32, y: f32) {
        if text.trim().is_empty() {
            return;
        }
        self.op("BT", vec![]);
        self.set_font(style);
        self.set_fill_color(style.color);
        self.op("Td", vec![x.into(), y.into()]);
        self.op(
            "Tj",
            vec![Object::String(metrics::to_win_ansi(text), StringFormat::Literal)],
        );
        self.op("ET", vec![]);
    }

    /// Paints an image XObject with its top-left corner at `(x, y)` inches.
    pub fn draw_image(&mut self, resource_name: &str, x: f32, y: f32, width: f32, height: f32) {
        let (x, width, height) = (to_points(x), to_points(width), to_points(height));
        let bottom = flip_y(to_points(y) + height, self.page_height);
        self.op("q", vec![]);
        self.op(
            "cm",
            vec![width.into(), 0.into(), 0.into(), height.into(), x.into(), bottom.into()],
        );
        self.op("Do", vec![Object::Name(resource_name.as_bytes().to_vec())]);
        self.op("Q", vec![]);
    }

    fn set_font(&mut self, style: &TextStyle) {
        let styled_font_name = placard_render_core::utils::font_name_for(style);
        let internal_font_name = self
            .font_map
            .get(&styled_font_name)
            .cloned()
            .unwrap_or_else(|| "F1".to_string());

        if self.state.font_name != internal_font_name || self.state.font_size != style.font_size {
            self.op(
                "Tf",
                vec![Object::Name(internal_font_name.as_bytes().to_vec()), style.font_size.into()],
            );
            self.state.font_name = internal_font_name;
            self.state.font_size = style.font_size;
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            self.op("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = Some(color);
        }
    }
}
