//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between [`operations`](super::operations), which decides which
//! icons to create, and the [`backend`](super::backend), which does the pixel
//! work.

use std::path::PathBuf;

/// Parameters for an exact resize to PNG.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
}
