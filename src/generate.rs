//! Icon generation pipeline.
//!
//! Drives the resizer over both dimension tables, then writes the iOS
//! manifest:
//!
//! ```text
//! 1. Check      logo.png exists            (missing → SourceNotFound, nothing written)
//! 2. Android    5 × ic_launcher.png        (one per density bucket)
//! 3. iOS        15 × Icon-App-*.png        (AppIcon.appiconset)
//! 4. Manifest   Contents.json              (19 slots)
//! ```
//!
//! Each icon is re-read right after it is written and must decode at exactly
//! its table size.
//!
//! Work is strictly sequential and stops at the first failure; there is no
//! partial-success mode. Progress is reported as [`GenerateEvent`]s over an
//! optional channel so the caller decides how (and whether) to print it.

use crate::imaging::{BackendError, ImageBackend, RustBackend, resize_and_save, verify_dimensions};
use crate::manifest::{ManifestError, build_manifest, manifest_path, write_manifest};
use crate::tables::Platform;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Source image not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error("Manifest generation failed: {0}")]
    Manifest(#[from] ManifestError),
}

/// Progress reported while generating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateEvent {
    Started {
        source: PathBuf,
    },
    PlatformStarted {
        platform: Platform,
    },
    IconWritten {
        path: PathBuf,
        width: u32,
        height: u32,
    },
    ManifestWritten {
        path: PathBuf,
    },
    Finished,
}

/// Everything written by a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// Icon files in generation order.
    pub icons: Vec<PathBuf>,
    pub manifest: PathBuf,
}

pub fn generate(
    source: &Path,
    project_dir: &Path,
    events: Option<Sender<GenerateEvent>>,
) -> Result<GenerateReport, GenerateError> {
    let backend = RustBackend::new();
    generate_with_backend(&backend, source, project_dir, events)
}

/// Generate icons using a specific backend (allows testing with mock).
pub fn generate_with_backend(
    backend: &impl ImageBackend,
    source: &Path,
    project_dir: &Path,
    events: Option<Sender<GenerateEvent>>,
) -> Result<GenerateReport, GenerateError> {
    let emit = |event: GenerateEvent| {
        if let Some(tx) = &events {
            tx.send(event).ok();
        }
    };

    if !source.exists() {
        return Err(GenerateError::SourceNotFound(source.to_path_buf()));
    }

    emit(GenerateEvent::Started {
        source: source.to_path_buf(),
    });

    let mut icons = Vec::new();
    for platform in Platform::ALL {
        emit(GenerateEvent::PlatformStarted { platform });
        for icon in platform.icons() {
            let path = icon.output_path(project_dir);
            resize_and_save(backend, source, &path, icon.width, icon.height)?;
            verify_dimensions(backend, &path, icon.width, icon.height)?;
            emit(GenerateEvent::IconWritten {
                path: path.clone(),
                width: icon.width,
                height: icon.height,
            });
            icons.push(path);
        }
    }

    let manifest = build_manifest()?;
    let manifest_file = manifest_path(project_dir);
    write_manifest(&manifest, &manifest_file)?;
    emit(GenerateEvent::ManifestWritten {
        path: manifest_file.clone(),
    });
    emit(GenerateEvent::Finished);

    Ok(GenerateReport {
        icons,
        manifest: manifest_file,
    })
}
