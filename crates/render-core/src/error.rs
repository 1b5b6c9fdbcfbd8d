use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Permission denied writing to {}", path.display())]
    PermissionDenied { path: PathBuf },
    #[error("Directory for {} does not exist", path.display())]
    MissingDirectory { path: PathBuf },
    #[error("I/O error writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("PDF generation error: {0}")]
    Pdf(String),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl WriteError {
    /// Classifies an I/O failure from writing `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::PermissionDenied | io::ErrorKind::ReadOnlyFilesystem => {
                WriteError::PermissionDenied { path }
            }
            io::ErrorKind::NotFound => WriteError::MissingDirectory { path },
            _ => WriteError::Io { path, source: err },
        }
    }

    /// The target location cannot be written at all, so another location may succeed.
    pub fn is_location_unavailable(&self) -> bool {
        matches!(
            self,
            WriteError::PermissionDenied { .. } | WriteError::MissingDirectory { .. }
        )
    }
}

impl From<lopdf::Error> for WriteError {
    fn from(err: lopdf::Error) -> Self {
        WriteError::Pdf(err.to_string())
    }
}
