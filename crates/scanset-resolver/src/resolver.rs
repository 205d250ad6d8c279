//! Candidate classification: memoized reachability from each library to the
//! reference set.
//!
//! A library is a *candidate* when it transitively depends on a reference
//! library without being one itself. Classification runs lazily: asking for a
//! single library only visits what that library can reach, and every visited
//! library keeps its result for later queries.
//!
//! The search is an iterative depth-first walk with an explicit stack, so
//! deep dependency chains cannot overflow the call stack. Libraries on the
//! current walk are `InProgress`; an edge back to one of them closes a cycle.
//! The walk tracks strongly connected components (Tarjan's lowlink), and a
//! component is classified as a whole once its root finishes: every member
//! is a candidate if any member reaches a reference library, otherwise none
//! is. Cyclic manifests therefore terminate and still give transitive results.

use std::cell::RefCell;
use std::fmt;

use petgraph::graph::NodeIndex;
use serde::Serialize;

use scanset_core::library::{Library, ReferenceSet};

use crate::error::ResolveError;
use crate::graph::DependencyGraph;

/// Per-library classification state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    /// Not visited yet.
    Unknown,
    /// On the current walk, or in a component whose root has not finished.
    InProgress,
    /// Transitively depends on a reference library.
    Candidate,
    /// Has no dependency path to any reference library.
    NotCandidate,
    /// Is itself a member of the reference set.
    ReferenceMatch,
}

impl Classification {
    /// Whether this state is a final classification.
    pub fn is_resolved(self) -> bool {
        matches!(
            self,
            Classification::Candidate | Classification::NotCandidate | Classification::ReferenceMatch
        )
    }

    /// Whether a dependency in this state makes its dependent a candidate.
    fn makes_candidate(self) -> bool {
        matches!(self, Classification::Candidate | Classification::ReferenceMatch)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Unknown => "unknown",
            Classification::InProgress => "in-progress",
            Classification::Candidate => "candidate",
            Classification::NotCandidate => "not-candidate",
            Classification::ReferenceMatch => "reference-match",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    state: Classification,
    // Walk bookkeeping, only meaningful while `state` is `InProgress`.
    order: usize,
    low: usize,
    reaches: bool,
}

impl Entry {
    fn new(state: Classification) -> Self {
        Self {
            state,
            order: 0,
            low: 0,
            reaches: false,
        }
    }
}

/// Lazily classifies every library of a [`DependencyGraph`] against a
/// [`ReferenceSet`].
///
/// Classification results are cached inside the resolver, so it is not
/// `Sync`. Use [`CandidateResolver::freeze`] to obtain an immutable,
/// fully-classified snapshot that can be shared across threads.
pub struct CandidateResolver {
    graph: DependencyGraph,
    entries: RefCell<Vec<Entry>>,
}

impl CandidateResolver {
    /// Index `libraries` and seed the reference matches.
    ///
    /// No classification work happens here.
    pub fn new<I>(libraries: I, references: &ReferenceSet) -> Result<Self, ResolveError>
    where
        I: IntoIterator<Item = Library>,
    {
        let graph = DependencyGraph::build(libraries)?;
        Ok(Self::from_graph(graph, references))
    }

    /// Seed a resolver over an already built graph.
    pub fn from_graph(graph: DependencyGraph, references: &ReferenceSet) -> Self {
        let entries = graph
            .libraries()
            .map(|lib| {
                if references.contains(&lib.name) {
                    Entry::new(Classification::ReferenceMatch)
                } else {
                    Entry::new(Classification::Unknown)
                }
            })
            .collect();
        Self {
            graph,
            entries: RefCell::new(entries),
        }
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Classify the library called `name`.
    ///
    /// Names absent from the graph are treated as external libraries and
    /// classify as [`Classification::NotCandidate`].
    pub fn classify(&self, name: &str) -> Classification {
        match self.graph.find(name) {
            Some(idx) => self.classify_index(idx),
            None => Classification::NotCandidate,
        }
    }

    /// The cached state of `name` without computing anything.
    pub fn memoized(&self, name: &str) -> Option<Classification> {
        let idx = self.graph.find(name)?;
        Some(self.entries.borrow()[idx.index()].state)
    }

    /// Candidate libraries in input order, classified on demand.
    ///
    /// Reference libraries themselves are never yielded.
    pub fn candidates(&self) -> impl Iterator<Item = &Library> + '_ {
        self.graph
            .node_indices()
            .filter(move |&idx| self.classify_index(idx) == Classification::Candidate)
            .map(move |idx| self.graph.library(idx))
    }

    /// Libraries of the graph that are members of the reference set, in
    /// input order.
    pub fn references(&self) -> impl Iterator<Item = &Library> + '_ {
        self.graph
            .node_indices()
            .filter(move |&idx| {
                self.entries.borrow()[idx.index()].state == Classification::ReferenceMatch
            })
            .map(move |idx| self.graph.library(idx))
    }

    /// Classify every library and return an immutable snapshot.
    pub fn freeze(self) -> ResolvedCandidates {
        for idx in self.graph.node_indices() {
            self.classify_index(idx);
        }
        let classifications = self
            .entries
            .into_inner()
            .into_iter()
            .map(|e| e.state)
            .collect();
        ResolvedCandidates {
            graph: self.graph,
            classifications,
        }
    }

    fn classify_index(&self, start: NodeIndex) -> Classification {
        let mut entries = self.entries.borrow_mut();
        let state = entries[start.index()].state;
        if state.is_resolved() {
            return state;
        }

        let mut counter = 0usize;
        let mut walk = vec![(start, self.graph.neighbors(start))];
        let mut component: Vec<NodeIndex> = vec![start];
        enter(&mut entries[start.index()], &mut counter);

        loop {
            let Some((node, deps)) = walk.last_mut() else {
                break;
            };
            let node = *node;

            let mut descend = None;
            if !entries[node.index()].reaches {
                for dep in deps.by_ref() {
                    let target = entries[dep.index()];
                    match target.state {
                        s if s.makes_candidate() => {
                            entries[node.index()].reaches = true;
                            break;
                        }
                        Classification::InProgress => {
                            let entry = &mut entries[node.index()];
                            entry.low = entry.low.min(target.order);
                        }
                        Classification::Unknown => {
                            descend = Some(dep);
                            break;
                        }
                        _ => {}
                    }
                }
            }

            if let Some(dep) = descend {
                tracing::trace!("visiting {}", self.graph.library(dep).name);
                enter(&mut entries[dep.index()], &mut counter);
                component.push(dep);
                walk.push((dep, self.graph.neighbors(dep)));
                continue;
            }

            walk.pop();
            let finished = entries[node.index()];
            if let Some((parent, _)) = walk.last() {
                let parent = &mut entries[parent.index()];
                parent.low = parent.low.min(finished.low);
                parent.reaches |= finished.reaches;
            }

            if finished.low == finished.order {
                let split = component
                    .iter()
                    .rposition(|&n| n == node)
                    .unwrap_or(0);
                let members = component.split_off(split);
                let reaches = members.iter().any(|m| entries[m.index()].reaches);
                let verdict = if reaches {
                    Classification::Candidate
                } else {
                    Classification::NotCandidate
                };
                if members.len() > 1 {
                    tracing::debug!(
                        "cycle of {} libraries through {} resolved as {verdict}",
                        members.len(),
                        self.graph.library(node).name
                    );
                }
                for m in members {
                    entries[m.index()].state = verdict;
                }
            }
        }

        entries[start.index()].state
    }
}

fn enter(entry: &mut Entry, counter: &mut usize) {
    entry.state = Classification::InProgress;
    entry.order = *counter;
    entry.low = *counter;
    entry.reaches = false;
    *counter += 1;
}

/// A fully classified, immutable resolution result.
#[derive(Debug, Clone)]
pub struct ResolvedCandidates {
    graph: DependencyGraph,
    classifications: Vec<Classification>,
}

impl ResolvedCandidates {
    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Classification of `name`, or `None` if the graph has no such library.
    pub fn classification(&self, name: &str) -> Option<Classification> {
        self.graph
            .find(name)
            .map(|idx| self.classifications[idx.index()])
    }

    pub fn classification_of(&self, idx: NodeIndex) -> Classification {
        self.classifications[idx.index()]
    }

    /// Candidate libraries in input order.
    pub fn candidates(&self) -> impl Iterator<Item = &Library> + '_ {
        self.with_classification(Classification::Candidate)
    }

    /// Reference libraries present in the graph, in input order.
    pub fn references(&self) -> impl Iterator<Item = &Library> + '_ {
        self.with_classification(Classification::ReferenceMatch)
    }

    fn with_classification(
        &self,
        wanted: Classification,
    ) -> impl Iterator<Item = &Library> + '_ {
        self.graph
            .node_indices()
            .filter(move |idx| self.classifications[idx.index()] == wanted)
            .map(move |idx| self.graph.library(idx))
    }
}
