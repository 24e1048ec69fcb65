//! Error types for the BookCrew domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for all BookCrew operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The question was empty or all-whitespace. Surfaced to the caller,
    /// no retry.
    #[error("Question is empty or all-whitespace")]
    EmptyQuestion,

    // --- Index errors ---
    #[error("Index error: {0}")]
    Index(#[from] IndexError),

    // --- Generator errors ---
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    /// A pipeline invariant was violated (step bound exceeded, branch
    /// contract broken). This is a programmer error, never a recoverable
    /// condition.
    #[error("Internal invariant violated: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

#[derive(Debug, Clone, Error)]
pub enum IndexError {
    /// Chunking the document produced zero chunks. The ingest has no
    /// effect and any existing index is left untouched.
    #[error("Document produced no chunks; index not built")]
    EmptyDocument,

    #[error("Index build failed: {0}")]
    BuildFailed(String),
}

#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("Generation backend failed: {0}")]
    Backend(String),

    #[error("Generation backend returned empty output")]
    Empty,
}
