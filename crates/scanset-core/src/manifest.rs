//! Project manifest (`Scanset.toml`).

use std::path::Path;

use serde::{Deserialize, Serialize};

use scanset_util::errors::{ScansetError, ScansetResult};

use crate::deps_file::DepsFile;
use crate::library::{Library, LibraryKind, LibraryName, ReferenceSet};

/// Top-level project manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub scan: ScanConfig,

    /// Libraries declared inline with `[[library]]`.
    #[serde(default, rename = "library", skip_serializing_if = "Vec::is_empty")]
    pub libraries: Vec<LibraryEntry>,
}

/// Scan settings from `[scan]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    pub references: Vec<String>,
    /// Runtime dependency manifest, relative to the directory of `Scanset.toml`.
    #[serde(default, rename = "deps-file", skip_serializing_if = "Option::is_none")]
    pub deps_file: Option<String>,
    /// Only report candidates of these kinds. Empty means all kinds.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub kinds: Vec<String>,
    /// Append the reference libraries themselves after the candidates.
    #[serde(default, rename = "include-references")]
    pub include_references: bool,
}

/// An inline library declaration from `[[library]]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl From<&LibraryEntry> for Library {
    fn from(entry: &LibraryEntry) -> Self {
        Library {
            name: LibraryName::new(entry.name.as_str()),
            kind: entry
                .kind
                .as_deref()
                .map(LibraryKind::parse)
                .unwrap_or_default(),
            version: entry.version.clone(),
            dependencies: entry
                .dependencies
                .iter()
                .map(|d| LibraryName::new(d.as_str()))
                .collect(),
        }
    }
}

impl Manifest {
    /// Load and parse a `Scanset.toml` file from the given path.
    pub fn from_path(path: &Path) -> ScansetResult<Self> {
        let content = scanset_util::fs::read_to_string(path).map_err(|e| ScansetError::Manifest {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::from_str(&content)
    }

    /// Parse and validate a `Scanset.toml` from a string.
    pub fn from_str(content: &str) -> ScansetResult<Self> {
        let manifest: Manifest = toml::from_str(content).map_err(|e| ScansetError::Manifest {
            message: format!("Failed to parse Scanset.toml: {e}"),
        })?;
        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> Result<(), ScansetError> {
        if self.scan.references.is_empty() {
            return Err(ScansetError::Manifest {
                message: "[scan] references must name at least one library".to_string(),
            });
        }
        if let Some(blank) = self.libraries.iter().position(|l| l.name.trim().is_empty()) {
            return Err(ScansetError::Manifest {
                message: format!("[[library]] entry #{} has an empty name", blank + 1),
            });
        }
        Ok(())
    }

    /// The reference set declared in `[scan] references`, plus `extra`.
    pub fn reference_set(&self, extra: &[String]) -> ReferenceSet {
        self.scan
            .references
            .iter()
            .chain(extra)
            .map(|n| LibraryName::new(n.as_str()))
            .collect()
    }

    /// The kind filter from `[scan] kinds`.
    pub fn kind_filter(&self) -> Vec<LibraryKind> {
        self.scan.kinds.iter().map(|k| LibraryKind::parse(k)).collect()
    }

    /// Load every library this manifest describes: those of the deps file
    /// (if configured) followed by inline `[[library]]` entries.
    ///
    /// `manifest_dir` is the directory containing `Scanset.toml`.
    pub fn load_libraries(&self, manifest_dir: &Path) -> ScansetResult<Vec<Library>> {
        let mut libraries = match &self.scan.deps_file {
            Some(rel) => {
                let path = manifest_dir.join(rel);
                tracing::debug!("loading deps file {}", path.display());
                DepsFile::from_path(&path)?.to_libraries()?
            }
            None => Vec::new(),
        };
        libraries.extend(self.libraries.iter().map(Library::from));
        Ok(libraries)
    }
}
