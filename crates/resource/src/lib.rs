//! Asset providers for poster composition.
//!
//! - [`FilesystemResourceProvider`]: resolves asset names against a directory,
//!   by default the process working directory.
//! - [`InMemoryResourceProvider`]: re-exported from `placard-traits`.

mod filesystem;

pub use filesystem::FilesystemResourceProvider;

pub use placard_traits::InMemoryResourceProvider;
