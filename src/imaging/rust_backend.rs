//! Pure Rust image backend built on the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG, TIFF, WebP) | `image::ImageReader` with content sniffing |
//! | Color conversion | `DynamicImage::into_rgba8` |
//! | Resize | `image::imageops::resize` with `Lanczos3` filter |
//! | Encode → PNG | `image::codecs::png::PngEncoder`, adaptive filtering |
//!
//! Every step is deterministic: the same source and parameters always yield
//! byte-identical files.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::ResizeParams;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::FilterType;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageReader, RgbaImage};
use std::io::Write;
use std::path::Path;

/// Pure Rust backend using the `image` crate ecosystem.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_error(path: &Path, e: impl std::fmt::Display) -> BackendError {
    BackendError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

fn write_error(path: &Path, e: impl std::fmt::Display) -> BackendError {
    BackendError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

/// Load and decode an image from disk.
///
/// The format is sniffed from the file contents, so a JPEG saved as
/// `logo.png` still decodes. Any failure to read the source, including
/// open errors, is a decode error.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(|e| decode_error(path, e))?
        .with_guessed_format()
        .map_err(|e| decode_error(path, e))?
        .decode()
        .map_err(|e| decode_error(path, e))
}

/// Encode and save as PNG, creating the parent directory tree first.
fn save_png(img: &RgbaImage, path: &Path) -> Result<(), BackendError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
    }
    let file = std::fs::File::create(path).map_err(|e| write_error(path, e))?;
    let mut writer = std::io::BufWriter::new(file);
    PngEncoder::new_with_quality(&mut writer, CompressionType::Best, PngFilter::Adaptive)
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| write_error(path, e))?;
    writer.flush().map_err(|e| write_error(path, e))
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| decode_error(path, e))?;
        Ok(Dimensions { width, height })
    }

    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError> {
        // RGBA first so sources without alpha still produce icons that can
        // carry transparency.
        let rgba = load_image(&params.source)?.into_rgba8();
        let resized =
            image::imageops::resize(&rgba, params.width, params.height, FilterType::Lanczos3);
        save_png(&resized, &params.output)
    }
}
