//! What goes on the poster, independent of how it looks.

/// The title band at the top of the canvas.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeaderContent {
    pub title: String,
    /// Lines printed under the title (tagline, authors, affiliation ...).
    pub lines: Vec<String>,
}

impl HeaderContent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }
}

/// One titled column of content.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectionContent {
    pub title: String,
    pub lines: Vec<String>,
    pub image: Option<ImageAttachment>,
}

impl SectionContent {
    pub fn new<I, S>(title: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            lines: lines.into_iter().map(Into::into).collect(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: ImageAttachment) -> Self {
        self.image = Some(image);
        self
    }
}

/// An optional picture overlaid on a section.
///
/// The image is placed at `(offset_x, offset_y)` from the section's top-left
/// corner and spans the column width minus `offset_x` on both sides. It is
/// only placed if the asset exists.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAttachment {
    pub file: String,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl ImageAttachment {
    pub fn new(file: impl Into<String>, offset_x: f32, offset_y: f32) -> Self {
        Self {
            file: file.into(),
            offset_x,
            offset_y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FooterContent {
    pub text: String,
}

impl FooterContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
