pub mod box_painter;

pub use box_painter::{paint_box, text_region};
