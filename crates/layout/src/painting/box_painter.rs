use crate::elements::{Region, RegionRole, TextFrame};
use placard_style::BoxStyle;
use placard_types::Rect;

/// A painted rectangle with no text.
pub fn paint_box(rect: Rect, style: &BoxStyle, role: RegionRole, section: Option<usize>) -> Region {
    Region {
        rect,
        fill: style.fill,
        border: style.border,
        border_width: style.border_width,
        role,
        section,
        text: None,
    }
}

/// An unpainted rectangle that only carries text.
pub fn text_region(rect: Rect, role: RegionRole, section: Option<usize>, frame: TextFrame) -> Region {
    Region {
        text: Some(frame),
        ..paint_box(rect, &BoxStyle::none(), role, section)
    }
}
