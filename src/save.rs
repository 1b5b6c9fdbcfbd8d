//! Ordered save locations with fallback on unavailable ones.

use crate::error::PipelineError;
use placard_layout::Document;
use placard_render_core::DocumentWriter;
use std::path::PathBuf;

/// Candidate output paths, most preferred first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveLocations {
    candidates: Vec<PathBuf>,
}

impl SaveLocations {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// Desktop, then Documents, then the working directory. The home-relative
    /// entries are left out when no home directory is known.
    pub fn standard(file_name: &str) -> Self {
        let mut candidates = Vec::with_capacity(3);
        match dirs::home_dir() {
            Some(home) => {
                candidates.push(home.join("Desktop").join(file_name));
                candidates.push(home.join("Documents").join(file_name));
            }
            None => log::debug!("No home directory, saving to the working directory only"),
        }
        candidates.push(working_dir().join(file_name));
        Self { candidates }
    }

    pub fn working_dir(file_name: &str) -> Self {
        Self {
            candidates: vec![working_dir().join(file_name)],
        }
    }

    /// A single explicit destination.
    pub fn exact(path: impl Into<PathBuf>) -> Self {
        Self {
            candidates: vec![path.into()],
        }
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }
}

fn working_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|e| {
        log::warn!("Cannot determine working directory ({}), using '.'", e);
        PathBuf::from(".")
    })
}

/// Writes `document` to the first candidate that accepts it.
///
/// Permission and missing-directory failures move on to the next candidate.
/// Any other write error stops immediately. Returns the path written.
pub fn save_with_fallback(
    writer: &dyn DocumentWriter,
    document: &Document,
    locations: &SaveLocations,
) -> Result<PathBuf, PipelineError> {
    let mut attempted = Vec::with_capacity(locations.candidates.len());

    for path in locations.candidates() {
        attempted.push(path.clone());
        match writer.write(document, path) {
            Ok(()) => {
                log::info!("Poster saved successfully to: {}", path.display());
                return Ok(path.clone());
            }
            Err(e) if e.is_location_unavailable() => {
                log::warn!("Could not save to {} ({}), trying next location...", path.display(), e);
            }
            Err(e) => return Err(e.into()),
        }
    }

    log::error!("Could not save the poster to any location");
    Err(PipelineError::WriteLocationUnavailable { attempted })
}
