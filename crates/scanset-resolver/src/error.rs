use miette::Diagnostic;
use thiserror::Error;

use scanset_util::errors::ScansetError;

/// Errors raised while building a resolver.
#[derive(Debug, Error, Diagnostic)]
pub enum ResolveError {
    /// Two input libraries share a name under case-insensitive comparison.
    #[error("Duplicate library '{name}' (already declared as '{first}')")]
    #[diagnostic(help(
        "Library names are compared case-insensitively; the dependency manifest must list each library once"
    ))]
    DuplicateLibrary { name: String, first: String },
}

impl From<ResolveError> for ScansetError {
    fn from(e: ResolveError) -> Self {
        ScansetError::Resolution {
            message: e.to_string(),
        }
    }
}
