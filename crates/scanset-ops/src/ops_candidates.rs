//! Operation: list the candidate libraries of a project.

use std::path::Path;

use serde::Serialize;

use scanset_core::library::{Library, LibraryKind};
use scanset_resolver::resolver::Classification;
use scanset_util::errors::ScansetResult;
use scanset_util::progress;

use crate::Project;

/// Options for `scanset candidates`.
#[derive(Debug, Default)]
pub struct CandidateOptions {
    /// Print JSON instead of one name per line.
    pub json: bool,
    /// Only list these kinds, in addition to `[scan] kinds`.
    pub kinds: Vec<String>,
}

/// A library as shown in a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedLibrary {
    pub name: String,
    pub kind: LibraryKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub classification: Classification,
}

impl ListedLibrary {
    fn new(library: &Library, classification: Classification) -> Self {
        Self {
            name: library.name.to_string(),
            kind: library.kind.clone(),
            version: library.version.clone(),
            classification,
        }
    }
}

/// Compute the libraries to list: candidates passing the kind filter, then
/// the references if `include-references` is set.
pub fn list_candidates(project: &Project, opts: &CandidateOptions) -> Vec<ListedLibrary> {
    let mut kinds = project.manifest.kind_filter();
    kinds.extend(opts.kinds.iter().map(|k| LibraryKind::parse(k)));

    let mut listed: Vec<ListedLibrary> = project
        .resolved
        .candidates()
        .filter(|lib| kinds.is_empty() || kinds.contains(&lib.kind))
        .map(|lib| ListedLibrary::new(lib, Classification::Candidate))
        .collect();

    if project.manifest.scan.include_references {
        listed.extend(
            project
                .resolved
                .references()
                .map(|lib| ListedLibrary::new(lib, Classification::ReferenceMatch)),
        );
    }
    listed
}

/// Print the candidate libraries of the project in `project_root`.
pub fn candidates(project_root: &Path, opts: &CandidateOptions) -> ScansetResult<()> {
    let project = crate::load_project(project_root)?;
    let listed = list_candidates(&project, opts);

    progress::status(
        "Resolved",
        &format!(
            "{} of {} libraries to scan",
            listed.len(),
            project.resolved.graph().len()
        ),
    );

    if project.wants_json(opts.json) {
        return crate::print_json(&listed);
    }
    for lib in &listed {
        match &lib.version {
            Some(v) => println!("{} {v}", lib.name),
            None => println!("{}", lib.name),
        }
    }
    Ok(())
}
