//! Shared test utilities: synthetic source images and output lookups.

use image::{ExtendedColorType, ImageEncoder, RgbImage};
use std::path::Path;

use crate::tables::{IconSpec, all_icons};

// =========================================================================
// Synthetic sources
// =========================================================================

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    })
}

/// Write an opaque RGB PNG (no alpha channel) with a gradient pattern.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    gradient(width, height).save(path).unwrap();
}

/// Write a small valid JPEG file with the given dimensions.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = gradient(width, height);
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .unwrap();
}

// =========================================================================
// Output assertions
// =========================================================================

/// Assert every table entry was written under `project_dir` at its exact size.
pub fn assert_all_icons_written(project_dir: &Path) {
    for icon in all_icons() {
        assert_icon_written(project_dir, icon);
    }
}

/// Assert one icon exists, decodes, matches its table size and has alpha.
pub fn assert_icon_written(project_dir: &Path, icon: &IconSpec) {
    let path = icon.output_path(project_dir);
    let img = image::open(&path)
        .unwrap_or_else(|e| panic!("icon '{}' not readable: {e}", path.display()));
    assert_eq!(
        (img.width(), img.height()),
        (icon.width, icon.height),
        "wrong size for {}",
        path.display()
    );
    assert!(
        img.color().has_alpha(),
        "{} has no alpha channel",
        path.display()
    );
}

/// Count regular files below `dir`, recursively.
pub fn count_files(dir: &Path) -> usize {
    if !dir.exists() {
        return 0;
    }
    std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| {
            let path = entry.unwrap().path();
            if path.is_dir() { count_files(&path) } else { 1 }
        })
        .sum()
}
