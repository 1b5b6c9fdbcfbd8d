pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use placard::layout::Document;
use placard::render::{DocumentWriter, WriteError};
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_bytes(std::fs::read(path)?)
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }
}

/// How a scripted write attempt ends.
#[derive(Debug, Clone, Copy)]
pub enum Outcome {
    Ok,
    PermissionDenied,
    MissingDirectory,
    DiskFull,
}

/// A writer that plays back one scripted outcome per call and records the
/// paths it was asked to write. Successful calls write nothing to disk.
pub struct ScriptedWriter {
    outcomes: Vec<Outcome>,
    calls: Cell<usize>,
    pub paths: RefCell<Vec<PathBuf>>,
}

impl ScriptedWriter {
    pub fn new(outcomes: Vec<Outcome>) -> Self {
        Self {
            outcomes,
            calls: Cell::new(0),
            paths: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl DocumentWriter for ScriptedWriter {
    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn render(&self, _document: &Document) -> Result<Vec<u8>, WriteError> {
        Ok(Vec::new())
    }

    fn write(&self, _document: &Document, path: &Path) -> Result<(), WriteError> {
        let call = self.calls.get();
        self.calls.set(call + 1);
        self.paths.borrow_mut().push(path.to_path_buf());

        let path = path.to_path_buf();
        match self.outcomes.get(call).copied().unwrap_or(Outcome::Ok) {
            Outcome::Ok => Ok(()),
            Outcome::PermissionDenied => Err(WriteError::PermissionDenied { path }),
            Outcome::MissingDirectory => Err(WriteError::MissingDirectory { path }),
            Outcome::DiskFull => Err(WriteError::Io {
                path,
                source: std::io::Error::other("no space left on device"),
            }),
        }
    }
}

/// A tiny solid-color PNG.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = Vec::new();
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([255, 255, 255]));
    img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("encode png");
    bytes
}
