//! Shared utilities for scanset.
//!
//! This crate provides cross-cutting concerns used by the other scanset
//! crates: error types, filesystem helpers, and terminal status output.

pub mod errors;
pub mod fs;
pub mod progress;
