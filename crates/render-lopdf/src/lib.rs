//! PDF output for composed posters, built with lopdf.
//!
//! The whole poster becomes one page. Regions are painted in document order,
//! text is set in the 14 standard fonts and images are embedded as RGB
//! XObjects.

mod images;
pub mod metrics;
mod page;
mod writer;

pub use writer::PdfWriter;
