use placard_style::{FontStyle, FontWeight, TextStyle};
use placard_types::POINTS_PER_INCH;

/// Base face of the standard PDF font family used for all poster text.
pub const BASE_FONT: &str = "Helvetica";

/// Get the standard PDF font name with style suffix
pub fn get_styled_font_name(base_name: &str, weight: FontWeight, style: FontStyle) -> String {
    let bold = weight == FontWeight::Bold;
    let italic = style == FontStyle::Italic;
    let mut name = base_name.to_string();
    if bold || italic {
        name.push('-');
        if bold && italic {
            name.push_str("BoldOblique");
        } else if bold {
            name.push_str("Bold");
        } else {
            name.push_str("Oblique");
        }
    }
    name
}

pub fn font_name_for(style: &TextStyle) -> String {
    get_styled_font_name(BASE_FONT, style.font_weight, style.font_style)
}

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

pub fn to_points(inches: f32) -> f32 {
    inches * POINTS_PER_INCH
}
