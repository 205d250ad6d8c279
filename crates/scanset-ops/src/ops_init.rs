//! Operation: write a starter `Scanset.toml`.

use std::path::{Path, PathBuf};

use scanset_core::manifest::{Manifest, ScanConfig};
use scanset_core::MANIFEST_FILE;
use scanset_util::errors::{ScansetError, ScansetResult};
use scanset_util::progress;

/// Create `Scanset.toml` in `dir` with the given reference names.
///
/// If `dir` contains a `*.deps.json` file, the first one (by file name) is
/// used as the deps file. Refuses to overwrite an existing manifest.
pub fn init(dir: &Path, references: &[String]) -> ScansetResult<PathBuf> {
    let path = dir.join(MANIFEST_FILE);
    if path.exists() {
        return Err(ScansetError::Generic {
            message: format!("{MANIFEST_FILE} already exists in {}", dir.display()),
        }
        .into());
    }
    if references.is_empty() {
        return Err(ScansetError::Generic {
            message: "At least one --reference is required".to_string(),
        }
        .into());
    }

    let manifest = Manifest {
        scan: ScanConfig {
            references: references.to_vec(),
            deps_file: find_deps_file(dir)?,
            kinds: Vec::new(),
            include_references: false,
        },
        libraries: Vec::new(),
    };
    let content = toml::to_string_pretty(&manifest).map_err(|e| ScansetError::Generic {
        message: format!("Failed to serialize {MANIFEST_FILE}: {e}"),
    })?;
    std::fs::write(&path, content).map_err(ScansetError::Io)?;

    progress::status("Created", &path.display().to_string());
    Ok(path)
}

fn find_deps_file(dir: &Path) -> ScansetResult<Option<String>> {
    let mut found: Vec<String> = std::fs::read_dir(dir)
        .map_err(ScansetError::Io)?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.ends_with(".deps.json"))
        .collect();
    found.sort();
    if found.len() > 1 {
        progress::status_warn(
            "Warning",
            &format!("several deps files found, using {}", found[0]),
        );
    }
    Ok(found.into_iter().next())
}
