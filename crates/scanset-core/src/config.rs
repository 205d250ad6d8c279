use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use scanset_util::errors::{ScansetError, ScansetResult};

/// Global user configuration loaded from `~/.scanset/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub scan: GlobalScanConfig,
}

/// Output settings from `[output]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// How listings are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Scan settings from `[scan]` that apply to every project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalScanConfig {
    /// Reference names merged into every project's reference set.
    #[serde(default, rename = "extra-references")]
    pub extra_references: Vec<String>,
}

impl GlobalConfig {
    /// Load the global configuration from `~/.scanset/config.toml`, or return defaults if the file doesn't exist.
    pub fn load() -> ScansetResult<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load the configuration from `path`, or return defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> ScansetResult<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = scanset_util::fs::read_to_string(path).map_err(|e| ScansetError::Config {
            message: format!("Failed to read global config: {e}"),
        })?;
        toml::from_str(&content).map_err(|e| {
            ScansetError::Config {
                message: format!("Failed to parse global config: {e}"),
            }
            .into()
        })
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the path to the scanset data directory (`~/.scanset/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".scanset")
}
