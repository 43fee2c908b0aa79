//! High-level image operations.
//!
//! These functions validate inputs, build parameters, and call the backend.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::ResizeParams;
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Get image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<(u32, u32)> {
    let dims = backend.identify(path)?;
    Ok((dims.width, dims.height))
}

/// Resize `source` to exactly `width`x`height` and write it to `output` as PNG.
///
/// The source is decoded fresh on every call. Zero-sized targets are rejected
/// before the backend is invoked.
pub fn resize_and_save(
    backend: &impl ImageBackend,
    source: &Path,
    output: &Path,
    width: u32,
    height: u32,
) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(BackendError::InvalidSize { width, height });
    }
    backend.resize(&ResizeParams {
        source: source.to_path_buf(),
        output: output.to_path_buf(),
        width,
        height,
    })
}

/// Re-read a written file and fail unless it is exactly `width`x`height`.
pub fn verify_dimensions(
    backend: &impl ImageBackend,
    path: &Path,
    width: u32,
    height: u32,
) -> Result<()> {
    let (actual_w, actual_h) = get_dimensions(backend, path)?;
    if (actual_w, actual_h) != (width, height) {
        return Err(BackendError::SizeMismatch {
            path: path.to_path_buf(),
            expected: Dimensions { width, height },
            actual: Dimensions {
                width: actual_w,
                height: actual_h,
            },
        });
    }
    Ok(())
}
