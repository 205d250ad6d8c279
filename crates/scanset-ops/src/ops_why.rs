//! Operation: explain why a library is (or is not) a candidate.

use std::path::Path;

use scanset_resolver::explain::path_to_reference;
use scanset_resolver::resolver::{Classification, ResolvedCandidates};
use scanset_util::errors::ScansetResult;

/// Outcome of explaining a single library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Explanation {
    /// The library is not part of the dependency manifest.
    NotFound,
    /// The library is in the reference set.
    Reference,
    /// The library is a candidate through this path of library names.
    Candidate { path: Vec<String> },
    /// The library reaches no reference library.
    NotCandidate,
}

pub fn explain(resolved: &ResolvedCandidates, name: &str) -> Explanation {
    match resolved.classification(name) {
        None => Explanation::NotFound,
        Some(Classification::ReferenceMatch) => Explanation::Reference,
        Some(Classification::Candidate) => match path_to_reference(resolved, name) {
            Some(path) => Explanation::Candidate {
                path: path.iter().map(|l| l.to_string()).collect(),
            },
            None => Explanation::NotCandidate,
        },
        Some(_) => Explanation::NotCandidate,
    }
}

/// Print the explanation for `name` in the project at `project_root`.
pub fn why(project_root: &Path, name: &str) -> ScansetResult<()> {
    let project = crate::load_project(project_root)?;
    match explain(&project.resolved, name) {
        Explanation::NotFound => println!("Library '{name}' not found in the dependency manifest."),
        Explanation::Reference => println!("{name} is a reference library."),
        Explanation::NotCandidate => {
            println!("{name} is not a candidate: it depends on no reference library.")
        }
        Explanation::Candidate { path } => {
            println!("{name} is a candidate:");
            for (i, step) in path.iter().enumerate() {
                let indent = "  ".repeat(i);
                println!("{indent}{step}");
            }
        }
    }
    Ok(())
}
