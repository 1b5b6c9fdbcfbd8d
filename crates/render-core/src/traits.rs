use crate::error::WriteError;
use placard_layout::Document;
use std::path::Path;

/// Serializes a composed poster into one output format.
pub trait DocumentWriter {
    /// File extension, without the dot, for outputs of this writer.
    fn extension(&self) -> &'static str;

    fn render(&self, document: &Document) -> Result<Vec<u8>, WriteError>;

    /// Renders and writes to `path`. Permission and missing-directory
    /// failures come back as location-unavailable errors.
    fn write(&self, document: &Document, path: &Path) -> Result<(), WriteError> {
        let bytes = self.render(document)?;
        std::fs::write(path, &bytes).map_err(|e| WriteError::from_io(path, e))?;
        log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}
