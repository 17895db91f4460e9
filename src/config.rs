//! Tool configuration.
//!
//! Settings live in an optional `assetool.toml`. Without `--config`, the file
//! is looked up in the working directory and its absence means stock
//! defaults. An explicit `--config` path must exist.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [icon]
//! platforms = ["ios"]       # iphone, ipad, ios, watch, car, mac
//! universal = false         # single 1024px icon where the platform allows it
//!
//! [templates]
//! # icon = "templates/icon.json"    # replaces the bundled icon template
//! # image = "templates/image.json"  # replaces the bundled image template
//!
//! [processing]
//! max_processes = 4         # Max parallel workers (omit for auto = CPU cores)
//! ```
//!
//! Relative template paths are resolved against the directory holding the
//! config file. Command-line flags win over config values.
//!
//! Unknown keys are rejected to catch typos early.

use crate::generate::GenerateOptions;
use crate::platform::{Platform, parse_platforms};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "assetool.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `assetool.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Icon set defaults.
    pub icon: IconConfig,
    /// Template overrides.
    pub templates: TemplatesConfig,
    /// Parallel processing settings.
    pub processing: ProcessingConfig,
}

/// Defaults for the `icon` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconConfig {
    /// Platform names. Unknown names are ignored.
    pub platforms: Vec<String>,
    /// Prefer one 1024px universal icon per platform family.
    pub universal: bool,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            platforms: vec![Platform::Ios.as_str().to_string()],
            universal: false,
        }
    }
}

impl IconConfig {
    pub fn platforms(&self) -> Vec<Platform> {
        parse_platforms(self.platforms.iter().map(String::as_str))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplatesConfig {
    pub icon: Option<PathBuf>,
    pub image: Option<PathBuf>,
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel resize workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

impl ToolConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.processing.max_processes == Some(0) {
            return Err(ConfigError::Validation(
                "processing.max_processes must be at least 1".into(),
            ));
        }
        for (key, path) in [
            ("templates.icon", &self.templates.icon),
            ("templates.image", &self.templates.image),
        ] {
            if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }

    /// Make relative template paths relative to `base_dir`.
    fn resolve_paths(mut self, base_dir: &Path) -> Self {
        for path in [&mut self.templates.icon, &mut self.templates.image]
            .into_iter()
            .flatten()
        {
            if path.is_relative() {
                *path = base_dir.join(&*path);
            }
        }
        self
    }

    /// Generate options carrying the configured template overrides.
    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            icon_template: self.templates.icon.clone(),
            image_template: self.templates.image.clone(),
            progress: None,
        }
    }
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_processes.map(|n| n.min(cores)).unwrap_or(cores)
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Parse and validate a config file's contents. Relative paths stay relative.
pub fn parse_config(content: &str) -> Result<ToolConfig, ConfigError> {
    let config: ToolConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration.
///
/// With `explicit`, that file must exist. Otherwise `assetool.toml` in
/// `search_dir` is used if present, and stock defaults if not.
pub fn load_config(explicit: Option<&Path>, search_dir: &Path) -> Result<ToolConfig, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = search_dir.join(CONFIG_FILENAME);
            if !candidate.is_file() {
                return Ok(ToolConfig::default());
            }
            candidate
        }
    };
    let content = fs::read_to_string(&path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(parse_config(&content)?.resolve_paths(base_dir))
}

/// Returns a fully-commented stock `assetool.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# assetool configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Command-line flags override these values.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# App icon sets
# ---------------------------------------------------------------------------
[icon]
# Platforms to generate icons for: iphone, ipad, ios, watch, car, mac.
# Unknown names are ignored.
platforms = ["ios"]
# Generate a single 1024x1024 universal icon for platforms that accept one
# (ios family and watch) instead of every individual size.
universal = false

# ---------------------------------------------------------------------------
# Templates
# ---------------------------------------------------------------------------
[templates]
# Contents.json files that replace the bundled templates.
# Relative paths are resolved against this file's directory.
# icon = "templates/icon.json"
# image = "templates/image.json"

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel resize workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}
