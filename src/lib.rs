//! # App Icons
//!
//! Turns one source image into the launcher icons a Flutter project needs on
//! both mobile platforms: five Android density buckets, fifteen iOS icon
//! files, and the `Contents.json` that ties the iOS files into an asset
//! catalog.
//!
//! # Pipeline
//!
//! ```text
//! logo.png ─┬─ Android table (5) ──→ android/app/src/main/res/mipmap-*/ic_launcher.png
//!           ├─ iOS table (15) ─────→ ios/Runner/Assets.xcassets/AppIcon.appiconset/*.png
//!           └─ slot template (19) ─→ ios/Runner/Assets.xcassets/AppIcon.appiconset/Contents.json
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`tables`] | Static dimension tables for both platforms and their output paths |
//! | [`imaging`] | Decode, RGBA conversion, Lanczos3 resize, PNG encode |
//! | [`manifest`] | iOS `Contents.json` template, builder and writer |
//! | [`generate`] | Orchestrator: source check, both tables, manifest, progress events |
//! | [`output`] | CLI output formatting for progress events |
//!
//! # Design Decisions
//!
//! ## Data, Not Code
//!
//! Both dimension tables and the manifest slot template are `const` arrays.
//! Tests iterate over them directly, and the manifest builder checks every
//! slot against the iOS table so it can never reference a file that was not
//! generated.
//!
//! ## Deterministic Output
//!
//! Same filter, same encoder settings, no timestamps or metadata chunks:
//! re-running on the same source overwrites every file with identical bytes,
//! so generated icons can be committed without churn.
//!
//! ## Fail Fast
//!
//! The source is decoded independently for every icon and the first failure
//! aborts the run. A missing source is checked before anything is written.

pub mod generate;
pub mod imaging;
pub mod manifest;
pub mod output;
pub mod tables;

#[cfg(test)]
pub(crate) mod test_helpers;
