//! Image backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations the icon pipeline
//! needs from an image library: identify and resize. The production
//! implementation is [`RustBackend`](super::rust_backend::RustBackend); tests
//! swap in the recording [`MockBackend`](tests::MockBackend) so orchestration
//! logic can be checked without decoding or encoding a single pixel.

use super::params::ResizeParams;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Failed to decode {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },
    #[error("Failed to write {}: {message}", path.display())]
    Write { path: PathBuf, message: String },
    #[error("Invalid target size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error(
        "{} is {}x{}, expected {}x{}",
        path.display(),
        actual.width,
        actual.height,
        expected.width,
        expected.height
    )]
    SizeMismatch {
        path: PathBuf,
        expected: Dimensions,
        actual: Dimensions,
    },
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image backends.
pub trait ImageBackend {
    /// Get image dimensions.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Decode the source, resample to the exact target size and write a PNG.
    ///
    /// The output's parent directories are created if missing.
    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError>;
}
