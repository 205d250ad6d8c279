//! Candidate resolution engine: determines which libraries of a dependency
//! manifest transitively depend on a set of reference libraries.

pub mod error;
pub mod explain;
pub mod graph;
pub mod report;
pub mod resolver;
