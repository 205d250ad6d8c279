//! Library dependency graph construction and traversal.

use std::collections::{BTreeSet, HashMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use scanset_core::library::{Library, LibraryName};

use crate::error::ResolveError;

/// An immutable index of libraries and the dependency edges between them.
///
/// Edges point from a library to the libraries it depends on. Dependency
/// names that do not match any library in the graph produce no edge and are
/// collected in [`DependencyGraph::unresolved`].
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    graph: DiGraph<Library, ()>,
    index: HashMap<LibraryName, NodeIndex>,
    unresolved: BTreeSet<LibraryName>,
}

impl DependencyGraph {
    /// Build the graph from libraries in input order.
    ///
    /// Fails on the first library whose name (case-insensitive) was already
    /// added.
    pub fn build<I>(libraries: I) -> Result<Self, ResolveError>
    where
        I: IntoIterator<Item = Library>,
    {
        let mut graph: DiGraph<Library, ()> = DiGraph::new();
        let mut index: HashMap<LibraryName, NodeIndex> = HashMap::new();

        for library in libraries {
            if let Some(&existing) = index.get(&library.name) {
                let first = &graph[existing];
                return Err(ResolveError::DuplicateLibrary {
                    name: library.name.to_string(),
                    first: first.name.to_string(),
                });
            }
            let name = library.name.clone();
            let idx = graph.add_node(library);
            index.insert(name, idx);
        }

        let mut unresolved = BTreeSet::new();
        let mut edges: Vec<(NodeIndex, NodeIndex)> = Vec::new();
        for idx in graph.node_indices() {
            let mut seen = HashSet::new();
            let mut targets = Vec::new();
            for dep in &graph[idx].dependencies {
                match index.get(dep) {
                    Some(&target) => {
                        if seen.insert(target) {
                            targets.push(target);
                        }
                    }
                    None => {
                        unresolved.insert(dep.clone());
                    }
                }
            }
            // petgraph lists neighbors newest-first; add in reverse so
            // traversal follows declaration order.
            edges.extend(targets.into_iter().rev().map(|t| (idx, t)));
        }
        for (from, to) in edges {
            graph.add_edge(from, to, ());
        }

        tracing::debug!(
            "built dependency graph: {} libraries, {} edges, {} unresolved names",
            graph.node_count(),
            graph.edge_count(),
            unresolved.len()
        );

        Ok(Self {
            graph,
            index,
            unresolved,
        })
    }

    /// Look up a library by name (case-insensitive).
    pub fn find(&self, name: &str) -> Option<NodeIndex> {
        self.index.get(&LibraryName::new(name)).copied()
    }

    /// Get the library for an index.
    pub fn library(&self, idx: NodeIndex) -> &Library {
        &self.graph[idx]
    }

    /// Node indices in input order.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// All libraries in input order.
    pub fn libraries(&self) -> impl Iterator<Item = &Library> + '_ {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// Direct dependencies of a library that are part of the graph, in
    /// declaration order.
    pub fn dependencies_of(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        self.graph.neighbors(idx).collect()
    }

    /// Libraries that directly depend on `idx`.
    pub fn dependents_of(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        self.graph
            .neighbors_directed(idx, Direction::Incoming)
            .collect()
    }

    pub(crate) fn neighbors(&self, idx: NodeIndex) -> petgraph::graph::Neighbors<'_, ()> {
        self.graph.neighbors(idx)
    }

    /// Dependency names that matched no library in the graph.
    pub fn unresolved(&self) -> &BTreeSet<LibraryName> {
        &self.unresolved
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}
