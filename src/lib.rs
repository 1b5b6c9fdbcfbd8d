//! Placard composes the NextStep project posters.
//!
//! A [`Preset`] supplies fixed content and a [`Theme`](placard_style::Theme);
//! the layout composer turns them into a paint-ordered document, and a
//! writer saves it as PDF (or as the JSON layout model), falling back
//! through an ordered list of save locations. An HTML rendition can also be
//! snapshotted to PNG with a headless browser.

pub mod error;
pub mod pipeline;
pub mod presets;
pub mod save;
pub mod snapshot;

pub use error::PipelineError;
pub use pipeline::{OutputFormat, PosterPipeline};
pub use presets::{PosterContent, Preset};
pub use save::{SaveLocations, save_with_fallback};

pub use placard_layout as layout;
pub use placard_render_core as render;
pub use placard_style as style;
