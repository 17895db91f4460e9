//! Variant templates: the `Contents.json` shape asset catalogs use.
//!
//! A template lists every variant an asset kind needs. Two are bundled into
//! the binary:
//!
//! | Kind | Resource | Entries |
//! |------|----------|---------|
//! | [`TemplateKind::IconSet`] | `icon_contents.json` | one per idiom × size × scale, all platforms |
//! | [`TemplateKind::ImageSet`] | `image_contents.json` | one per scale factor (`1x`, `2x`, `3x`) |
//!
//! Either can be replaced by a file on disk (see [`load_template`]).
//!
//! ## Shape
//!
//! ```json
//! {
//!   "images" : [
//!     { "idiom" : "iphone", "scale" : "2x", "size" : "60x60" }
//!   ],
//!   "info" : { "author" : "xcode", "version" : 1 }
//! }
//! ```
//!
//! Recognized keys are typed fields. Anything else, at the top level or on an
//! entry, is collected into `extra` and written back unchanged, so newer
//! catalog keys survive a round trip.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

const ICON_CONTENTS: &str = include_str!("../templates/icon_contents.json");
const IMAGE_CONTENTS: &str = include_str!("../templates/image_contents.json");

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("template {name} not found at {}", .path.display())]
    NotFound { name: String, path: PathBuf },
    #[error("cannot read template {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed template {name}: {source}")]
    Parse {
        name: String,
        source: serde_json::Error,
    },
    #[error("invalid entry #{index} in template {name}: {reason}")]
    InvalidEntry {
        name: String,
        index: usize,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    IconSet,
    ImageSet,
}

impl TemplateKind {
    /// Resource name of the bundled template.
    pub fn resource_name(self) -> &'static str {
        match self {
            TemplateKind::IconSet => "icon_contents",
            TemplateKind::ImageSet => "image_contents",
        }
    }

    fn bundled_json(self) -> &'static str {
        match self {
            TemplateKind::IconSet => ICON_CONTENTS,
            TemplateKind::ImageSet => IMAGE_CONTENTS,
        }
    }
}

/// A whole `Contents.json` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub images: Vec<TemplateEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<TemplateInfo>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One variant slot. Fields are declared in the order catalogs write them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idiom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TemplateEntry {
    pub fn idiom(&self) -> Option<&str> {
        self.idiom.as_deref()
    }

    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    /// Copy of this entry with `filename` assigned.
    pub fn with_filename(&self, filename: &str) -> Self {
        Self {
            filename: Some(filename.to_string()),
            ..self.clone()
        }
    }
}

impl Template {
    /// Same document with its `images` list replaced.
    pub fn with_images(&self, images: Vec<TemplateEntry>) -> Self {
        Self {
            images,
            info: self.info.clone(),
            extra: self.extra.clone(),
        }
    }
}

/// Parse template JSON. `name` only labels errors.
pub fn parse_template(name: &str, json: &str) -> Result<Template, TemplateError> {
    serde_json::from_str(json).map_err(|source| TemplateError::Parse {
        name: name.to_string(),
        source,
    })
}

/// Load the bundled template for `kind`.
pub fn bundled_template(kind: TemplateKind) -> Result<Template, TemplateError> {
    parse_template(kind.resource_name(), kind.bundled_json())
}

/// Load a template from a file on disk.
pub fn template_from_file(path: &Path) -> Result<Template, TemplateError> {
    if !path.is_file() {
        return Err(TemplateError::NotFound {
            name: path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
            path: path.to_path_buf(),
        });
    }
    let json = std::fs::read_to_string(path).map_err(|source| TemplateError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_template(&path.display().to_string(), &json)
}

/// Load the template for `kind`: from `override_path` when given, otherwise
/// the bundled one.
pub fn load_template(
    kind: TemplateKind,
    override_path: Option<&Path>,
) -> Result<Template, TemplateError> {
    match override_path {
        Some(path) => template_from_file(path),
        None => bundled_template(kind),
    }
}
