//! Output filename conventions for generated variants.
//!
//! | Asset | Pattern | Example |
//! |-------|---------|---------|
//! | Icon slot | `AppIcon_{nominal}@{scale}x.png` | `AppIcon_83.5@2x.png` |
//! | Universal icon | `AppIcon_{platform}.png` | `AppIcon_ios.png` |
//! | Image set | `{base}@{scale}x.png` | `hero@3x.png` |
//!
//! Asset folders are `AppIcon.appiconset` and `{base}.imageset`.
//!
//! ## Uniqueness
//!
//! Different idioms share slots of the same nominal size and scale (iPhone and
//! iPad both have `20x20 @2x`). Every manifest entry still needs its own file
//! name, so [`FilenameRegistry`] hands out the plain name first, then a name
//! with the idiom inserted (`AppIcon_ipad_20@2x.png`), then numbered names
//! (`AppIcon_ipad_20@2x_2.png`). Claims happen in template order, so the same
//! inputs always produce the same names.

use crate::variant::Scale;
use std::collections::HashSet;
use std::path::Path;

/// Fixed stem of every app icon file and of the icon asset folder.
pub const ICON_STEM: &str = "AppIcon";

/// Stem used when the source path has no usable file name.
pub const FALLBACK_IMAGE_NAME: &str = "image";

pub fn icon_filename(nominal: &str, scale: Scale) -> String {
    format!("{}_{}@{}x.png", ICON_STEM, nominal, scale.factor())
}

pub fn icon_idiom_filename(idiom: &str, nominal: &str, scale: Scale) -> String {
    format!("{}_{}_{}@{}x.png", ICON_STEM, idiom, nominal, scale.factor())
}

pub fn universal_icon_filename(platform_tag: &str) -> String {
    format!("{}_{}.png", ICON_STEM, platform_tag)
}

pub fn image_filename(base: &str, scale: Scale) -> String {
    format!("{}@{}x.png", base, scale.factor())
}

pub fn icon_set_folder() -> String {
    format!("{}.appiconset", ICON_STEM)
}

pub fn image_set_folder(base: &str) -> String {
    format!("{}.imageset", base)
}

/// Source file name without its extension (`art/hero.png` → `hero`).
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| FALLBACK_IMAGE_NAME.to_string())
}

/// Hands out file names that are unique within one manifest.
#[derive(Debug, Default)]
pub struct FilenameRegistry {
    taken: HashSet<String>,
}

impl FilenameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the first free candidate. If every candidate is taken, the last
    /// one gets a numeric suffix before its extension.
    pub fn claim<I>(&mut self, candidates: I) -> String
    where
        I: IntoIterator<Item = String>,
    {
        let mut last = None;
        for candidate in candidates {
            if !self.taken.contains(&candidate) {
                self.taken.insert(candidate.clone());
                return candidate;
            }
            last = Some(candidate);
        }

        let base = last.unwrap_or_else(|| format!("{}.png", FALLBACK_IMAGE_NAME));
        let (stem, ext) = match base.rsplit_once('.') {
            Some((stem, ext)) => (stem.to_string(), format!(".{ext}")),
            None => (base.clone(), String::new()),
        };
        let mut n = 2;
        loop {
            let candidate = format!("{stem}_{n}{ext}");
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}
