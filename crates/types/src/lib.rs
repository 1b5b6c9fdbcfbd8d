pub mod color;
pub mod geometry;
pub mod ids;

pub use color::Color;
pub use geometry::{Rect, Size, POINTS_PER_INCH};
pub use ids::ResourceUri;
