//! Error types for trellis operations.

use thiserror::Error;

/// Errors that can occur while building, transforming, or persisting markup.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown tag kind: {0}")]
    UnknownTagKind(String),

    #[error(transparent)]
    PatternCompilation(#[from] PatternError),

    #[error("Invalid view name: {0:?}")]
    InvalidViewName(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "cli")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A transform pattern that failed to compile.
///
/// The built-in pass table is fixed, so this only surfaces for passes built
/// by hand through [`crate::markdown::TransformPass::new`].
#[derive(Error, Debug, Clone)]
#[error("Pattern compilation error in {pattern:?}: {source}")]
pub struct PatternError {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

pub type Result<T> = std::result::Result<T, Error>;
