//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.

pub mod repository_store;

use thiserror::Error;

use crate::domain::{InvalidRepositoryId, RepositoryId};

pub use repository_store::RepositoryStore;

/// Domain-specific errors for store operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested record was not found.
    #[error("Repository not found: {0}")]
    NotFound(RepositoryId),
}

/// Core error type for semantic domain errors.
///
/// Adapters should map this to their own error types (HTTP status codes,
/// CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Store operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// A path or body carried something that is not a repository id.
    #[error(transparent)]
    InvalidId(#[from] InvalidRepositoryId),
}
