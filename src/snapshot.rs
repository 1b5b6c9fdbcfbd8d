//! Renders an HTML rendition of the poster to a PNG with a headless browser.

use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("HTML source not found: {}", .0.display())]
    MissingSource(PathBuf),
    #[error("Cannot build a file URL for {}", .0.display())]
    InvalidUrl(PathBuf),
    #[error("Failed to launch browser: {0}")]
    Launch(String),
    #[error("Navigation failed: {0}")]
    Navigation(String),
    #[error("Screenshot failed: {0}")]
    Capture(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Captures a rendered page as a PNG file.
pub trait Snapshotter {
    fn capture(&self, url: &Url, output: &Path) -> Result<(), RenderError>;
}

/// Canonicalizes a local path into a `file://` URL.
pub fn file_url(path: &Path) -> Result<Url, RenderError> {
    let absolute = path
        .canonicalize()
        .map_err(|_| RenderError::MissingSource(path.to_path_buf()))?;
    Url::from_file_path(&absolute).map_err(|()| RenderError::InvalidUrl(absolute))
}

/// Snapshots a local HTML file to `output`.
pub fn snapshot_file(
    snapshotter: &dyn Snapshotter,
    html: &Path,
    output: &Path,
) -> Result<(), RenderError> {
    if !html.is_file() {
        return Err(RenderError::MissingSource(html.to_path_buf()));
    }
    let url = file_url(html)?;
    log::info!("Capturing {} to {}", url, output.display());
    snapshotter.capture(&url, output)
}

#[cfg(feature = "snapshot")]
pub use chrome::ChromeSnapshotter;

#[cfg(feature = "snapshot")]
mod chrome {
    use super::{RenderError, Snapshotter};
    use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
    use headless_chrome::{Browser, LaunchOptions};
    use std::ffi::OsStr;
    use std::path::Path;
    use url::Url;

    /// Extra Chrome switches for containers and machines without a GPU.
    const CHROME_ARGS: [&str; 2] = ["--disable-gpu", "--disable-dev-shm-usage"];

    pub(super) fn launch_args() -> Vec<&'static OsStr> {
        CHROME_ARGS.into_iter().map(OsStr::new).collect()
    }

    /// Headless Chrome without a sandbox, sized to the poster in pixels.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ChromeSnapshotter {
        pub width: u32,
        pub height: u32,
    }

    impl Default for ChromeSnapshotter {
        fn default() -> Self {
            Self {
                width: 4800,
                height: 3600,
            }
        }
    }

    impl Snapshotter for ChromeSnapshotter {
        fn capture(&self, url: &Url, output: &Path) -> Result<(), RenderError> {
            let options = LaunchOptions::default_builder()
                .headless(true)
                .sandbox(false)
                .window_size(Some((self.width, self.height)))
                .args(launch_args())
                .build()
                .map_err(|e| RenderError::Launch(e.to_string()))?;
            let browser = Browser::new(options).map_err(|e| RenderError::Launch(e.to_string()))?;
            let tab = browser
                .new_tab()
                .map_err(|e| RenderError::Launch(e.to_string()))?;

            tab.navigate_to(url.as_str())
                .map_err(|e| RenderError::Navigation(e.to_string()))?
                .wait_until_navigated()
                .map_err(|e| RenderError::Navigation(e.to_string()))?;

            let png = tab
                .capture_screenshot(CaptureScreenshotFormatOption::Png, None, None, true)
                .map_err(|e| RenderError::Capture(e.to_string()))?;
            std::fs::write(output, &png)?;
            log::debug!("Wrote {} byte screenshot", png.len());
            Ok(())
        }
    }
}
