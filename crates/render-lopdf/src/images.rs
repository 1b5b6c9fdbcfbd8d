use lopdf::{Stream, dictionary};
use placard_traits::ResourceProvider;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum ImageLoadError {
    #[error(transparent)]
    Resource(#[from] placard_traits::ResourceError),
    #[error("cannot decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// A decoded image ready to embed as an XObject.
pub(crate) struct EmbeddedImage {
    pub stream: Stream,
    pub pixel_width: u32,
    pub pixel_height: u32,
}

impl EmbeddedImage {
    /// Height matching `width` at the image's own aspect ratio.
    pub fn height_for(&self, width: f32) -> f32 {
        if self.pixel_width == 0 {
            return 0.0;
        }
        width * self.pixel_height as f32 / self.pixel_width as f32
    }
}

pub(crate) fn load_image(
    resources: &dyn ResourceProvider,
    source: &str,
) -> Result<EmbeddedImage, ImageLoadError> {
    let bytes = resources.load(source)?;
    let rgb = image::load_from_memory(&bytes)?.to_rgb8();
    let (pixel_width, pixel_height) = rgb.dimensions();

    let stream = Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => pixel_width as i64,
            "Height" => pixel_height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        },
        rgb.into_raw(),
    );
    Ok(EmbeddedImage {
        stream,
        pixel_width,
        pixel_height,
    })
}
