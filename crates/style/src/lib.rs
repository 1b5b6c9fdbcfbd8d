pub mod dimension;
pub mod error;
pub mod font;
pub mod text;
pub mod theme;

pub use dimension::{ColumnWidth, Margins};
pub use error::StyleParseError;
pub use font::{FontStyle, FontWeight};
pub use text::{TextAlign, TextStyle};
pub use theme::{
    BoxStyle, ColumnTheme, FooterTheme, HeaderLineTheme, HeaderTheme, LineStyles, SectionTheme,
    Theme, ACCENT, ACCENT_OUTLINE,
};
