//! Horizontal and vertical placement of the section columns.

use placard_style::{ColumnTheme, ColumnWidth};
use placard_types::{Rect, Size};

/// Placement of N equal-width columns in one horizontal band between the
/// header and the footer.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnGrid {
    pub top: f32,
    pub height: f32,
    pub width: f32,
    pub spacing: f32,
    pub margin: f32,
    pub count: usize,
    canvas_width: f32,
}

impl ColumnGrid {
    pub fn compute(
        canvas: Size,
        count: usize,
        header_height: f32,
        footer_height: f32,
        theme: &ColumnTheme,
    ) -> Self {
        let width = match theme.width {
            ColumnWidth::Fixed(width) => width,
            ColumnWidth::Fill if count == 0 => 0.0,
            ColumnWidth::Fill => {
                let gutters = theme.spacing * count.saturating_sub(1) as f32;
                ((canvas.width - 2.0 * theme.margin - gutters) / count as f32).max(0.0)
            }
        };

        let top = header_height + theme.header_gap;
        let bottom = canvas.height - footer_height - theme.footer_gap;
        let height = (bottom - top).max(0.0);
        if bottom < top {
            log::warn!(
                "Header and footer leave no vertical space for sections ({:.2}in above {:.2}in)",
                bottom,
                top
            );
        }

        Self {
            top,
            height,
            width,
            spacing: theme.spacing,
            margin: theme.margin,
            count,
            canvas_width: canvas.width,
        }
    }

    pub fn column(&self, index: usize) -> Rect {
        let x = self.margin + index as f32 * (self.width + self.spacing);
        Rect::new(x, self.top, self.width, self.height)
    }

    /// Total horizontal extent including both margins.
    pub fn placed_width(&self) -> f32 {
        let gutters = self.spacing * self.count.saturating_sub(1) as f32;
        2.0 * self.margin + self.count as f32 * self.width + gutters
    }

    pub fn overflow(&self) -> f32 {
        (self.placed_width() - self.canvas_width).max(0.0)
    }
}
