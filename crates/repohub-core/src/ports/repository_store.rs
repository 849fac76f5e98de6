//! Repository store trait definition.
//!
//! This port defines the interface for record storage operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewRepository, Repository, RepositoryChanges, RepositoryId};

/// Storage for repository records.
///
/// # Design Rules
///
/// - Records are addressed by id, never by position
/// - `list` returns records in insertion order; updates and likes keep a
///   record's position, deletes keep the order of the rest
/// - Each call is atomic with respect to the others
#[async_trait]
pub trait RepositoryStore: Send + Sync {
    /// List all records in insertion order.
    async fn list(&self) -> Result<Vec<Repository>, RepositoryError>;

    /// Get a record by id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the record doesn't exist.
    async fn get(&self, id: RepositoryId) -> Result<Repository, RepositoryError>;

    /// Append a new record with a freshly generated id and zero likes.
    async fn insert(&self, new: NewRepository) -> Result<Repository, RepositoryError>;

    /// Replace title, url and techs of an existing record.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the record doesn't exist.
    async fn update(
        &self,
        id: RepositoryId,
        changes: RepositoryChanges,
    ) -> Result<Repository, RepositoryError>;

    /// Remove a record.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the record doesn't exist.
    async fn delete(&self, id: RepositoryId) -> Result<(), RepositoryError>;

    /// Add one like to a record and return the new count.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the record doesn't exist.
    async fn like(&self, id: RepositoryId) -> Result<u64, RepositoryError>;
}
