//! Writer abstractions shared by poster output backends.
//!
//! - `DocumentWriter` turns a composed [`Document`](placard_layout::Document) into bytes on disk
//! - `WriteError` classifies write failures, including the ones that mean
//!   "try another location"
//! - `JsonWriter` dumps the layout model itself
//! - Shared helpers for font naming and coordinate conversion

mod error;
mod json;
mod traits;
pub mod utils;

pub use error::WriteError;
pub use json::JsonWriter;
pub use traits::DocumentWriter;
