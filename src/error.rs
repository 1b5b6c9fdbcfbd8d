use crate::snapshot::RenderError;
use placard_layout::LayoutError;
use placard_render_core::WriteError;
use placard_style::StyleParseError;
use placard_traits::ResourceError;
use std::path::PathBuf;
use thiserror::Error;

/// Every failure a poster run can end with.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Theme is invalid: {0}")]
    Theme(#[from] StyleParseError),

    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),

    #[error("Writing failed: {0}")]
    Write(#[from] WriteError),

    #[error("Snapshot failed: {0}")]
    Render(#[from] RenderError),

    #[error("Could not save to any location (tried {})", display_paths(.attempted))]
    WriteLocationUnavailable { attempted: Vec<PathBuf> },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
