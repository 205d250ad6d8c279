//! Classification summary reporting.

use std::fmt;

use serde::Serialize;

use crate::resolver::{Classification, ResolvedCandidates};

/// Counts of each classification over a resolved graph.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClassificationReport {
    pub libraries: usize,
    pub candidates: usize,
    pub not_candidates: usize,
    pub references: usize,
    /// Dependency names that matched no library in the graph.
    pub unresolved: Vec<String>,
}

impl ClassificationReport {
    pub fn from_resolved(resolved: &ResolvedCandidates) -> Self {
        let graph = resolved.graph();
        let mut report = Self {
            libraries: graph.len(),
            unresolved: graph.unresolved().iter().map(|n| n.to_string()).collect(),
            ..Self::default()
        };
        for idx in graph.node_indices() {
            match resolved.classification_of(idx) {
                Classification::Candidate => report.candidates += 1,
                Classification::ReferenceMatch => report.references += 1,
                _ => report.not_candidates += 1,
            }
        }
        report
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Libraries:      {}", self.libraries)?;
        writeln!(f, "Candidates:     {}", self.candidates)?;
        writeln!(f, "Not candidates: {}", self.not_candidates)?;
        writeln!(f, "References:     {}", self.references)?;
        if self.unresolved.is_empty() {
            write!(f, "No unresolved dependencies.")
        } else {
            writeln!(f, "Unresolved dependencies ({}):", self.unresolved.len())?;
            for name in &self.unresolved {
                writeln!(f, "  {name}")?;
            }
            Ok(())
        }
    }
}
