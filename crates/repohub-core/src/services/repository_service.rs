//! Repository service - orchestrates record CRUD and likes.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{NewRepository, Repository, RepositoryChanges, RepositoryId};
use crate::ports::{CoreError, RepositoryStore};

/// Service for repository operations.
///
/// A thin facade over the injected `RepositoryStore` that adds id parsing,
/// error mapping and lifecycle logging.
#[derive(Clone)]
pub struct RepositoryService {
    store: Arc<dyn RepositoryStore>,
}

impl RepositoryService {
    /// Create a new service over the given store.
    pub fn new(store: Arc<dyn RepositoryStore>) -> Self {
        Self { store }
    }

    /// Validate the textual form of an identifier.
    pub fn parse_id(raw: &str) -> Result<RepositoryId, CoreError> {
        raw.parse::<RepositoryId>().map_err(CoreError::from)
    }

    /// List all repositories in insertion order.
    pub async fn list(&self) -> Result<Vec<Repository>, CoreError> {
        self.store.list().await.map_err(CoreError::from)
    }

    /// Look a repository up by id, `None` if it is not stored.
    pub async fn find(&self, id: RepositoryId) -> Option<Repository> {
        self.store.get(id).await.ok()
    }

    /// Create a repository with zero likes.
    pub async fn create(&self, new: NewRepository) -> Result<Repository, CoreError> {
        let repo = self.store.insert(new).await?;
        info!(id = %repo.id, title = ?repo.title, "Repository created");
        Ok(repo)
    }

    /// Replace title, url and techs of a repository.
    pub async fn update(
        &self,
        id: RepositoryId,
        changes: RepositoryChanges,
    ) -> Result<Repository, CoreError> {
        let repo = self.store.update(id, changes).await?;
        info!(id = %repo.id, title = ?repo.title, "Repository updated");
        Ok(repo)
    }

    /// Delete a repository.
    pub async fn delete(&self, id: RepositoryId) -> Result<(), CoreError> {
        self.store.delete(id).await?;
        info!(id = %id, "Repository deleted");
        Ok(())
    }

    /// Like a repository, returning the new like count.
    pub async fn like(&self, id: RepositoryId) -> Result<u64, CoreError> {
        let likes = self.store.like(id).await?;
        debug!(id = %id, likes, "Repository liked");
        Ok(likes)
    }
}
