use crate::images::load_image;
use crate::page::{FontMap, PageContext};
use crate::metrics::to_pdf_text_string;
use lopdf::{Dictionary, Document as PdfDocument, Object, Stream, StringFormat, dictionary};
use placard_layout::{Document, LayoutElement};
use placard_render_core::utils::{BASE_FONT, get_styled_font_name};
use placard_render_core::{DocumentWriter, WriteError};
use placard_style::{FontStyle, FontWeight};
use placard_traits::{InMemoryResourceProvider, ResourceProvider};
use std::sync::Arc;

const PRODUCER: &str = concat!("placard ", env!("CARGO_PKG_VERSION"));

/// Writes a composed poster as a single-page PDF.
///
/// The page is exactly the canvas size. Text uses the standard Helvetica
/// faces, so no fonts are embedded. Images are read through the resource
/// provider; an image that cannot be loaded or decoded is skipped with a
/// warning.
#[derive(Debug, Clone)]
pub struct PdfWriter {
    resources: Arc<dyn ResourceProvider>,
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryResourceProvider::new()))
    }
}

impl PdfWriter {
    pub fn new(resources: Arc<dyn ResourceProvider>) -> Self {
        Self { resources }
    }

    fn font_resources() -> (Dictionary, FontMap) {
        let faces = [
            (FontWeight::Regular, FontStyle::Normal),
            (FontWeight::Bold, FontStyle::Normal),
            (FontWeight::Regular, FontStyle::Italic),
            (FontWeight::Bold, FontStyle::Italic),
        ];
        let mut font_dict = Dictionary::new();
        let mut font_map = FontMap::new();
        for (i, (weight, style)) in faces.into_iter().enumerate() {
            let postscript_name = get_styled_font_name(BASE_FONT, weight, style);
            let internal_name = format!("F{}", i + 1);
            font_dict.set(
                internal_name.as_bytes(),
                Object::Dictionary(dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => postscript_name.clone(),
                    "Encoding" => "WinAnsiEncoding",
                }),
            );
            font_map.insert(postscript_name, internal_name);
        }
        (font_dict, font_map)
    }
}

impl DocumentWriter for PdfWriter {
    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn render(&self, document: &Document) -> Result<Vec<u8>, WriteError> {
        let canvas = document.canvas().to_points();
        let mut pdf = PdfDocument::with_version("1.5");
        let pages_id = pdf.new_object_id();

        let (font_dict, font_map) = Self::font_resources();
        let mut xobjects = Dictionary::new();
        let mut page = PageContext::new(canvas.height, &font_map);

        for element in document.elements() {
            match element {
                LayoutElement::Region(region) => page.draw_region(region),
                LayoutElement::Image(placed) => {
                    let embedded = match load_image(self.resources.as_ref(), placed.source.as_str()) {
                        Ok(embedded) => embedded,
                        Err(e) => {
                            log::warn!("Skipping image '{}': {}", placed.source, e);
                            continue;
                        }
                    };
                    let height = embedded.height_for(placed.width);
                    let name = format!("Im{}", xobjects.len() + 1);
                    let image_id = pdf.add_object(embedded.stream);
                    xobjects.set(name.as_bytes(), image_id);
                    page.draw_image(&name, placed.x, placed.y, placed.width, height);
                    log::debug!(
                        "Embedded '{}' as {} ({}x{} px)",
                        placed.source,
                        name,
                        embedded.pixel_width,
                        embedded.pixel_height
                    );
                }
            }
        }

        let content = page.finish().encode()?;
        let content_id = pdf.add_object(Stream::new(dictionary! {}, content));

        let mut resources = dictionary! { "Font" => font_dict };
        if !xobjects.is_empty() {
            resources.set("XObject", xobjects);
        }
        let resources_id = pdf.add_object(resources);

        let page_id = pdf.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), canvas.width.into(), canvas.height.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        pdf.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );

        let catalog_id = pdf.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let title_format = if document.title().is_ascii() {
            StringFormat::Literal
        } else {
            StringFormat::Hexadecimal
        };
        let info_id = pdf.add_object(dictionary! {
            "Title" => Object::String(to_pdf_text_string(document.title()), title_format),
            "Producer" => Object::string_literal(PRODUCER),
        });
        pdf.trailer.set("Root", catalog_id);
        pdf.trailer.set("Info", info_id);

        let mut buffer = Vec::new();
        pdf.save_to(&mut buffer)
            .map_err(|e| WriteError::Pdf(e.to_string()))?;
        Ok(buffer)
    }
}
