use crate::error::PipelineError;
use crate::presets::Preset;
use crate::save::{SaveLocations, save_with_fallback};
use placard_layout::{Composer, Document};
use placard_render_core::{DocumentWriter, JsonWriter};
use placard_render_lopdf::PdfWriter;
use placard_resource::FilesystemResourceProvider;
use placard_style::Theme;
use placard_traits::ResourceProvider;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Single-page PDF
    #[default]
    Pdf,
    /// The composed layout model as JSON
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Json => "json",
        }
    }

    pub fn writer(self, resources: Arc<dyn ResourceProvider>) -> Box<dyn DocumentWriter> {
        match self {
            OutputFormat::Pdf => Box::new(PdfWriter::new(resources)),
            OutputFormat::Json => Box::new(JsonWriter),
        }
    }
}

/// Builds one poster from a preset: compose, then save with fallback.
///
/// ```no_run
/// use placard::{PosterPipeline, Preset};
///
/// let path = PosterPipeline::new(Preset::Showcase).run()?;
/// println!("saved {}", path.display());
/// # Ok::<(), placard::PipelineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PosterPipeline {
    preset: Preset,
    theme: Option<Theme>,
    resources: Option<Arc<dyn ResourceProvider>>,
    format: OutputFormat,
    output: Option<PathBuf>,
}

impl PosterPipeline {
    pub fn new(preset: Preset) -> Self {
        Self {
            preset,
            theme: None,
            resources: None,
            format: OutputFormat::default(),
            output: None,
        }
    }

    /// Replaces the preset's theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_theme_file<P: AsRef<Path>>(self, path: P) -> Result<Self, PipelineError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let theme = Theme::from_json(&json)?;
        log::debug!("Loaded theme from {}", path.as_ref().display());
        Ok(self.with_theme(theme))
    }

    /// Looks for images in `dir` instead of the working directory.
    pub fn with_assets_dir<P: AsRef<Path>>(self, dir: P) -> Self {
        self.with_resources(Arc::new(FilesystemResourceProvider::new(dir)))
    }

    pub fn with_resources(mut self, resources: Arc<dyn ResourceProvider>) -> Self {
        self.resources = Some(resources);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Saves to exactly this path instead of the preset's locations.
    pub fn with_output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output = Some(path.into());
        self
    }

    fn resources(&self) -> Arc<dyn ResourceProvider> {
        self.resources
            .clone()
            .unwrap_or_else(|| Arc::new(FilesystemResourceProvider::current_dir()))
    }

    pub fn save_locations(&self) -> SaveLocations {
        match &self.output {
            Some(path) => SaveLocations::exact(path.clone()),
            None => self.preset.save_locations(self.format.extension()),
        }
    }

    pub fn compose(&self) -> Result<Document, PipelineError> {
        let theme = self.theme.clone().unwrap_or_else(|| self.preset.theme());
        let content = self.preset.content();
        log::info!("Composing '{}' poster", self.preset);

        let document = Composer::new(Arc::new(theme))
            .with_resources(self.resources())
            .compose(
                self.preset.canvas(),
                &content.header,
                &content.sections,
                &content.footer,
            )?;
        Ok(document)
    }

    /// Composes the poster and saves it, returning the path written.
    pub fn run(&self) -> Result<PathBuf, PipelineError> {
        let document = self.compose()?;
        let writer = self.format.writer(self.resources());
        save_with_fallback(writer.as_ref(), &document, &self.save_locations())
    }
}
