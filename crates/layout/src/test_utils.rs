use crate::{Composer, Document, FooterContent, HeaderContent, LayoutError, SectionContent};
use placard_style::{ColumnWidth, Theme};
use placard_traits::InMemoryResourceProvider;
use placard_types::Size;
use std::sync::Arc;

pub const CANVAS: Size = Size { width: 48.0, height: 36.0 };

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn sample_header() -> HeaderContent {
    HeaderContent::new("NextStep")
        .line("AI-Powered Career Guidance for Students")
        .line("Jane Doe, John Smith")
        .line("Department of Computer Science")
}

pub fn sample_sections(count: usize) -> Vec<SectionContent> {
    (0..count)
        .map(|i| {
            SectionContent::new(
                format!("Section {}", i + 1),
                [
                    "Overview:",
                    "Students struggle to plan their careers.",
                    "• Personalized roadmaps",
                    "[INSERT SCREENSHOT HERE]",
                ],
            )
        })
        .collect()
}

pub fn sample_footer() -> FooterContent {
    FooterContent::new("Contact: team@nextstep.example")
}

/// The default look with columns that fit a 48in canvas exactly.
pub fn fitting_theme() -> Theme {
    let mut theme = Theme::default();
    theme.columns.width = ColumnWidth::Fixed(15.0);
    theme.columns.margin = 0.5;
    theme.columns.spacing = 1.0;
    theme
}

pub fn compose_with(theme: Theme, sections: &[SectionContent]) -> Result<Document, LayoutError> {
    Composer::new(Arc::new(theme)).compose(CANVAS, &sample_header(), sections, &sample_footer())
}

pub fn provider_with(files: &[&str]) -> Arc<InMemoryResourceProvider> {
    let provider = InMemoryResourceProvider::new();
    for file in files {
        provider.add(*file, vec![0u8; 4]).unwrap();
    }
    Arc::new(provider)
}
