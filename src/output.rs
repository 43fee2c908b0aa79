//! CLI output formatting.
//!
//! Each [`GenerateEvent`] maps to zero or more stdout lines:
//!
//! ```text
//! Generating icons from ./logo.png
//! ==> Android
//!     ./android/app/src/main/res/mipmap-mdpi/ic_launcher.png (48x48)
//!     ...
//! ==> iOS
//!     ./ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-20x20@1x.png (20x20)
//!     ...
//!     ./ios/Runner/Assets.xcassets/AppIcon.appiconset/Contents.json
//!
//! Icon generation complete
//! ```
//!
//! `format_*` functions are pure and return `Vec<String>` for testability;
//! `print_*` wrappers write to stdout.

use crate::generate::GenerateEvent;
use std::path::Path;

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format one progress event.
pub fn format_generate_event(event: &GenerateEvent) -> Vec<String> {
    match event {
        GenerateEvent::Started { source } => {
            vec![format!("Generating icons from {}", source.display())]
        }
        GenerateEvent::PlatformStarted { platform } => {
            vec![format!("==> {}", platform.display_name())]
        }
        GenerateEvent::IconWritten {
            path,
            width,
            height,
        } => vec![format!(
            "{}{} ({}x{})",
            indent(1),
            path.display(),
            width,
            height
        )],
        GenerateEvent::ManifestWritten { path } => {
            vec![format!("{}{}", indent(1), path.display())]
        }
        GenerateEvent::Finished => vec![String::new(), "Icon generation complete".to_string()],
    }
}

pub fn print_generate_event(event: &GenerateEvent) {
    for line in format_generate_event(event) {
        println!("{}", line);
    }
}

/// Message shown when the source image is absent.
pub fn format_missing_source(source: &Path) -> String {
    format!("Error: source image not found: {}", source.display())
}
