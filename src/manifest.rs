//! iOS asset catalog manifest (`AppIcon.appiconset/Contents.json`).
//!
//! Xcode reads the icon set through this file: one record per
//! (point size, idiom, scale) slot, each naming the PNG that fills it.
//!
//! ```json
//! {
//!   "images": [
//!     {
//!       "size": "20x20",
//!       "idiom": "iphone",
//!       "filename": "Icon-App-20x20@2x.png",
//!       "scale": "2x"
//!     }
//!   ],
//!   "info": {
//!     "version": 1,
//!     "author": "xcode"
//!   }
//! }
//! ```
//!
//! The records come from the immutable [`ICON_SET_RECORDS`] template. Every
//! template row must name a file from [`IOS_ICONS`](crate::tables::IOS_ICONS);
//! [`build_manifest`] refuses to emit a record pointing at a file the
//! pipeline never produces.

use crate::tables::{find_ios_icon, ios_icon_set_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Manifest file name inside the icon set directory.
pub const MANIFEST_FILE_NAME: &str = "Contents.json";

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Manifest record references {0}, which is not a generated icon")]
    UnknownFile(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Device class of an icon slot, serialized as Xcode's `idiom` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceClass {
    #[serde(rename = "iphone")]
    Phone,
    #[serde(rename = "ipad")]
    Tablet,
    #[serde(rename = "ios-marketing")]
    StoreMarketing,
}

/// One template row: which file fills which slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordTemplate {
    pub size: &'static str,
    pub idiom: DeviceClass,
    pub filename: &'static str,
    pub scale: &'static str,
}

const fn slot(
    size: &'static str,
    idiom: DeviceClass,
    filename: &'static str,
    scale: &'static str,
) -> RecordTemplate {
    RecordTemplate {
        size,
        idiom,
        filename,
        scale,
    }
}

use DeviceClass::{Phone, StoreMarketing, Tablet};

/// Every slot the icon set fills, in output order.
pub const ICON_SET_RECORDS: &[RecordTemplate] = &[
    slot("20x20", Phone, "Icon-App-20x20@2x.png", "2x"),
    slot("20x20", Phone, "Icon-App-20x20@3x.png", "3x"),
    slot("29x29", Phone, "Icon-App-29x29@1x.png", "1x"),
    slot("29x29", Phone, "Icon-App-29x29@2x.png", "2x"),
    slot("29x29", Phone, "Icon-App-29x29@3x.png", "3x"),
    slot("40x40", Phone, "Icon-App-40x40@2x.png", "2x"),
    slot("40x40", Phone, "Icon-App-40x40@3x.png", "3x"),
    slot("60x60", Phone, "Icon-App-60x60@2x.png", "2x"),
    slot("60x60", Phone, "Icon-App-60x60@3x.png", "3x"),
    slot("20x20", Tablet, "Icon-App-20x20@1x.png", "1x"),
    slot("20x20", Tablet, "Icon-App-20x20@2x.png", "2x"),
    slot("29x29", Tablet, "Icon-App-29x29@1x.png", "1x"),
    slot("29x29", Tablet, "Icon-App-29x29@2x.png", "2x"),
    slot("40x40", Tablet, "Icon-App-40x40@1x.png", "1x"),
    slot("40x40", Tablet, "Icon-App-40x40@2x.png", "2x"),
    slot("76x76", Tablet, "Icon-App-76x76@1x.png", "1x"),
    slot("76x76", Tablet, "Icon-App-76x76@2x.png", "2x"),
    slot("83.5x83.5", Tablet, "Icon-App-83.5x83.5@2x.png", "2x"),
    slot("1024x1024", StoreMarketing, "Icon-App-1024x1024@1x.png", "1x"),
];

/// A single `images` entry. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestRecord {
    pub size: String,
    pub idiom: DeviceClass,
    pub filename: String,
    pub scale: String,
}

/// Fixed `info` block. Xcode expects exactly these values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub version: u32,
    pub author: String,
}

impl Default for ManifestInfo {
    fn default() -> Self {
        Self {
            version: 1,
            author: "xcode".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub images: Vec<ManifestRecord>,
    pub info: ManifestInfo,
}

/// Path of the manifest under the project root.
pub fn manifest_path(project_dir: &Path) -> PathBuf {
    ios_icon_set_dir(project_dir).join(MANIFEST_FILE_NAME)
}

/// Build the manifest from [`ICON_SET_RECORDS`].
pub fn build_manifest() -> Result<Manifest, ManifestError> {
    build_manifest_from(ICON_SET_RECORDS)
}

/// Build a manifest from an arbitrary template, checking each file name
/// against the iOS icon table.
pub fn build_manifest_from(templates: &[RecordTemplate]) -> Result<Manifest, ManifestError> {
    let images = templates
        .iter()
        .map(|t| {
            if find_ios_icon(t.filename).is_none() {
                return Err(ManifestError::UnknownFile(t.filename.to_string()));
            }
            Ok(ManifestRecord {
                size: t.size.to_string(),
                idiom: t.idiom,
                filename: t.filename.to_string(),
                scale: t.scale.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Manifest {
        images,
        info: ManifestInfo::default(),
    })
}

/// Serialize with two-space indentation and a trailing newline.
pub fn to_json(manifest: &Manifest) -> Result<String, ManifestError> {
    let mut json = serde_json::to_string_pretty(manifest)?;
    json.push('\n');
    Ok(json)
}

/// Write the manifest to `path`, creating parent directories as needed.
pub fn write_manifest(manifest: &Manifest, path: &Path) -> Result<(), ManifestError> {
    let json = to_json(manifest)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)?;
    Ok(())
}
