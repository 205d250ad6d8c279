//! Explain why a library is a candidate.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use scanset_core::library::Library;

use crate::resolver::{Classification, ResolvedCandidates};

/// Find the shortest dependency path from `name` to a reference library.
///
/// The path starts at `name` and ends at the first reference library
/// reached. Returns `None` if `name` is not in the graph or reaches no
/// reference library.
pub fn path_to_reference<'a>(
    resolved: &'a ResolvedCandidates,
    name: &str,
) -> Option<Vec<&'a Library>> {
    let graph = resolved.graph();
    let start = graph.find(name)?;

    let mut queue = VecDeque::from([start]);
    let mut came_from = HashMap::from([(start, start)]);
    let mut found = None;

    while let Some(current) = queue.pop_front() {
        if resolved.classification_of(current) == Classification::ReferenceMatch {
            found = Some(current);
            break;
        }
        for dep in graph.dependencies_of(current) {
            if let Entry::Vacant(e) = came_from.entry(dep) {
                e.insert(current);
                queue.push_back(dep);
            }
        }
    }

    let mut current = found?;
    let mut path = vec![graph.library(current)];
    while current != start {
        current = came_from[&current];
        path.push(graph.library(current));
    }
    path.reverse();
    Some(path)
}
