pub mod ops_candidates;
pub mod ops_init;
pub mod ops_report;
pub mod ops_why;

use std::path::Path;

use scanset_core::config::{GlobalConfig, OutputFormat};
use scanset_core::manifest::Manifest;
use scanset_core::MANIFEST_FILE;
use scanset_resolver::resolver::{CandidateResolver, ResolvedCandidates};
use scanset_util::errors::{ScansetError, ScansetResult};

/// A project loaded from its `Scanset.toml` and fully classified.
pub struct Project {
    pub manifest: Manifest,
    pub config: GlobalConfig,
    pub resolved: ResolvedCandidates,
}

impl Project {
    /// Whether listings should be printed as JSON.
    pub fn wants_json(&self, json_flag: bool) -> bool {
        json_flag || self.config.output.format == OutputFormat::Json
    }
}

/// Load the manifest in `project_root`, the global configuration and every
/// library the manifest describes, then classify them.
pub fn load_project(project_root: &Path) -> ScansetResult<Project> {
    let config = GlobalConfig::load()?;
    load_project_with(project_root, config)
}

/// Like [`load_project`] with an explicit global configuration.
pub fn load_project_with(project_root: &Path, config: GlobalConfig) -> ScansetResult<Project> {
    let manifest = Manifest::from_path(&project_root.join(MANIFEST_FILE))?;
    let libraries = manifest.load_libraries(project_root)?;
    let references = manifest.reference_set(&config.scan.extra_references);
    tracing::debug!(
        "resolving {} libraries against {} reference names",
        libraries.len(),
        references.len()
    );

    let resolved = CandidateResolver::new(libraries, &references)
        .map_err(ScansetError::from)?
        .freeze();

    Ok(Project {
        manifest,
        config,
        resolved,
    })
}

pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> ScansetResult<()> {
    let out = serde_json::to_string_pretty(value).map_err(|e| ScansetError::Generic {
        message: format!("Failed to serialize output: {e}"),
    })?;
    println!("{out}");
    Ok(())
}
