//! Core data types for scanset.
//!
//! This crate defines the data a candidate resolution runs over: libraries
//! and their declared dependencies, the reference set, the runtime dependency
//! manifest (`*.deps.json`) those libraries are usually read from, the
//! project manifest (`Scanset.toml`) and the global user configuration.
//!
//! This crate is intentionally free of graph algorithms; see
//! `scanset-resolver` for those.

/// File name of the project manifest.
pub const MANIFEST_FILE: &str = "Scanset.toml";

pub mod config;
pub mod deps_file;
pub mod library;
pub mod manifest;
