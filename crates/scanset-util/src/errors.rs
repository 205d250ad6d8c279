use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all scanset operations.
#[derive(Debug, Error, Diagnostic)]
pub enum ScansetError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed project manifest (`Scanset.toml`).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your Scanset.toml for syntax errors"))]
    Manifest { message: String },

    /// Invalid or malformed runtime dependency manifest (`*.deps.json`).
    #[error("Dependency file error: {message}")]
    #[diagnostic(help("Regenerate the .deps.json file by rebuilding the project"))]
    DepsFile { message: String },

    /// Candidate resolution failed (duplicate library names, etc.).
    #[error("Candidate resolution failed: {message}")]
    Resolution { message: String },

    /// Global configuration could not be loaded.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type ScansetResult<T> = miette::Result<T>;
