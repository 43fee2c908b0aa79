//! Static icon dimension tables for both target platforms.
//!
//! Each table is plain `const` data so tests (and the manifest builder) can
//! iterate over it without touching the resize or serialization code.
//!
//! ## Android
//!
//! One launcher icon per density bucket, written to
//! `android/app/src/main/res/<bucket>/ic_launcher.png`:
//!
//! ```text
//! mipmap-mdpi      48x48    (1x)
//! mipmap-hdpi      72x72    (1.5x)
//! mipmap-xhdpi     96x96    (2x)
//! mipmap-xxhdpi    144x144  (3x)
//! mipmap-xxxhdpi   192x192  (4x)
//! ```
//!
//! ## iOS
//!
//! Fifteen files in `ios/Runner/Assets.xcassets/AppIcon.appiconset/`. The
//! file name carries the point size and scale (`Icon-App-40x40@3x.png` is
//! 120x120 pixels). The iPad Pro icon is 83.5pt at 2x; its pixel size is
//! written out as 167, not derived from the point size.

use std::path::{Path, PathBuf};

/// Target platform of an icon table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Android,
    Ios,
}

impl Platform {
    /// Both platforms in generation order.
    pub const ALL: [Platform; 2] = [Platform::Android, Platform::Ios];

    /// The dimension table for this platform.
    pub fn icons(self) -> &'static [IconSpec] {
        match self {
            Platform::Android => ANDROID_ICONS,
            Platform::Ios => IOS_ICONS,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Platform::Android => "Android",
            Platform::Ios => "iOS",
        }
    }
}

/// A single icon to generate: a table identifier and its pixel size.
///
/// For Android the identifier is the density bucket directory; for iOS it is
/// the output file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub platform: Platform,
    pub identifier: &'static str,
    pub width: u32,
    pub height: u32,
}

impl IconSpec {
    const fn android(bucket: &'static str, size: u32) -> Self {
        Self {
            platform: Platform::Android,
            identifier: bucket,
            width: size,
            height: size,
        }
    }

    const fn ios(file_name: &'static str, width: u32, height: u32) -> Self {
        Self {
            platform: Platform::Ios,
            identifier: file_name,
            width,
            height,
        }
    }

    /// Resolve where this icon is written, relative to the project root.
    pub fn output_path(&self, project_dir: &Path) -> PathBuf {
        match self.platform {
            Platform::Android => android_res_dir(project_dir)
                .join(self.identifier)
                .join(ANDROID_ICON_FILE_NAME),
            Platform::Ios => ios_icon_set_dir(project_dir).join(self.identifier),
        }
    }
}

/// File name used for every Android launcher icon.
pub const ANDROID_ICON_FILE_NAME: &str = "ic_launcher.png";

/// Android launcher icons, one per density bucket.
pub const ANDROID_ICONS: &[IconSpec] = &[
    IconSpec::android("mipmap-mdpi", 48),
    IconSpec::android("mipmap-hdpi", 72),
    IconSpec::android("mipmap-xhdpi", 96),
    IconSpec::android("mipmap-xxhdpi", 144),
    IconSpec::android("mipmap-xxxhdpi", 192),
];

/// iOS app icon files, keyed by file name.
pub const IOS_ICONS: &[IconSpec] = &[
    IconSpec::ios("Icon-App-20x20@1x.png", 20, 20),
    IconSpec::ios("Icon-App-20x20@2x.png", 40, 40),
    IconSpec::ios("Icon-App-20x20@3x.png", 60, 60),
    IconSpec::ios("Icon-App-29x29@1x.png", 29, 29),
    IconSpec::ios("Icon-App-29x29@2x.png", 58, 58),
    IconSpec::ios("Icon-App-29x29@3x.png", 87, 87),
    IconSpec::ios("Icon-App-40x40@1x.png", 40, 40),
    IconSpec::ios("Icon-App-40x40@2x.png", 80, 80),
    IconSpec::ios("Icon-App-40x40@3x.png", 120, 120),
    IconSpec::ios("Icon-App-60x60@2x.png", 120, 120),
    IconSpec::ios("Icon-App-60x60@3x.png", 180, 180),
    IconSpec::ios("Icon-App-76x76@1x.png", 76, 76),
    IconSpec::ios("Icon-App-76x76@2x.png", 152, 152),
    IconSpec::ios("Icon-App-83.5x83.5@2x.png", 167, 167),
    // App Store marketing icon
    IconSpec::ios("Icon-App-1024x1024@1x.png", 1024, 1024),
];

/// `android/app/src/main/res` under the project root.
pub fn android_res_dir(project_dir: &Path) -> PathBuf {
    project_dir
        .join("android")
        .join("app")
        .join("src")
        .join("main")
        .join("res")
}

/// `ios/Runner/Assets.xcassets/AppIcon.appiconset` under the project root.
pub fn ios_icon_set_dir(project_dir: &Path) -> PathBuf {
    project_dir
        .join("ios")
        .join("Runner")
        .join("Assets.xcassets")
        .join("AppIcon.appiconset")
}

/// Every icon across both platforms, in generation order.
pub fn all_icons() -> impl Iterator<Item = &'static IconSpec> {
    Platform::ALL.into_iter().flat_map(|p| p.icons().iter())
}

/// Look up an iOS icon by file name.
pub fn find_ios_icon(file_name: &str) -> Option<&'static IconSpec> {
    IOS_ICONS.iter().find(|icon| icon.identifier == file_name)
}
