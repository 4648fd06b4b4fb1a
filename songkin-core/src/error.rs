//! Error types for the recommendation engine

use thiserror::Error;

/// Result type for recommendation queries
pub type Result<T> = std::result::Result<T, RecommendError>;

/// Failure modes of a single recommendation query
///
/// All three are recoverable at the call site: the caller renders a
/// message and re-prompts. None is fatal to the process.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendError {
    /// Query text was empty or whitespace-only
    #[error("query is empty or blank")]
    InvalidQuery,

    /// No catalog title matched the query, even by substring
    #[error("no song in the catalog matches the query")]
    NotFound,

    /// The catalog failed to load or lacks cluster assignments
    #[error("song catalog is unavailable")]
    CatalogUnavailable,
}
