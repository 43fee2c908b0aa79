//! Image processing — pure Rust, no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Verify** | identify the written file, compare with the target |
//! | **Resize → PNG** | RGBA conversion + Lanczos3 + PNG encoder (best compression) |
//!
//! The module is split into:
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: Input validation and output verification on top of the backend

pub mod backend;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use operations::{get_dimensions, resize_and_save, verify_dimensions};
pub use params::ResizeParams;
pub use rust_backend::RustBackend;
