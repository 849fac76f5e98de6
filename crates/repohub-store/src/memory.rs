//! In-memory implementation of the `RepositoryStore` trait.

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use tracing::trace;

use repohub_core::{
    NewRepository, Repository, RepositoryChanges, RepositoryError, RepositoryId, RepositoryStore,
};

/// Process-local record store.
///
/// Records are keyed by id in an `IndexMap`, which keeps insertion order for
/// listing. Deletes use `shift_remove` so the remaining records keep their
/// relative order.
#[derive(Debug, Default)]
pub struct InMemoryRepositoryStore {
    records: RwLock<IndexMap<RepositoryId, Repository>>,
}

impl InMemoryRepositoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RepositoryStore for InMemoryRepositoryStore {
    async fn list(&self) -> Result<Vec<Repository>, RepositoryError> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn get(&self, id: RepositoryId) -> Result<Repository, RepositoryError> {
        self.records
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn insert(&self, new: NewRepository) -> Result<Repository, RepositoryError> {
        let mut records = self.records.write().await;

        let mut id = RepositoryId::new_v4();
        while records.contains_key(&id) {
            id = RepositoryId::new_v4();
        }

        let repo = Repository::new(id, new);
        records.insert(id, repo.clone());
        trace!(id = %id, total = records.len(), "Inserted repository");
        Ok(repo)
    }

    async fn update(
        &self,
        id: RepositoryId,
        changes: RepositoryChanges,
    ) -> Result<Repository, RepositoryError> {
        let mut records = self.records.write().await;
        let repo = records
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound(id))?;
        repo.apply(changes);
        Ok(repo.clone())
    }

    async fn delete(&self, id: RepositoryId) -> Result<(), RepositoryError> {
        let mut records = self.records.write().await;
        if records.shift_remove(&id).is_none() {
            return Err(RepositoryError::NotFound(id));
        }
        trace!(id = %id, total = records.len(), "Removed repository");
        Ok(())
    }

    async fn like(&self, id: RepositoryId) -> Result<u64, RepositoryError> {
        self.records
            .write()
            .await
            .get_mut(&id)
            .map(Repository::like)
            .ok_or(RepositoryError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_repo(title: &str) -> NewRepository {
        NewRepository {
            title: Some(title.into()),
            url: Some(format!("http://github.com/example/{title}")),
            techs: Some(vec!["Node.js".into(), "Express".into()]),
        }
    }

    fn titles(repos: &[Repository]) -> Vec<&str> {
        repos.iter().filter_map(|r| r.title.as_deref()).collect()
    }

    #[tokio::test]
    async fn starts_empty() {
        let store = InMemoryRepositoryStore::new();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_keeps_insertion_order() {
        let store = InMemoryRepositoryStore::new();
        for title in ["a", "b", "c"] {
            store.insert(new_repo(title)).await.unwrap();
        }

        assert_eq!(titles(&store.list().await.unwrap()), ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn insert_assigns_unique_ids_and_zero_likes() {
        let store = InMemoryRepositoryStore::new();
        let first = store.insert(new_repo("a")).await.unwrap();
        let second = store.insert(new_repo("a")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.likes, 0);
        assert_eq!(second.likes, 0);
        assert_eq!(store.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_keeps_id_likes_and_position() {
        let store = InMemoryRepositoryStore::new();
        store.insert(new_repo("a")).await.unwrap();
        let target = store.insert(new_repo("b")).await.unwrap();
        store.insert(new_repo("c")).await.unwrap();
        store.like(target.id).await.unwrap();

        let updated = store
            .update(
                target.id,
                RepositoryChanges {
                    title: Some("B".into()),
                    url: Some("http://example.com/b".into()),
                    techs: Some(vec!["Rust".into()]),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, target.id);
        assert_eq!(updated.likes, 1);
        assert_eq!(titles(&store.list().await.unwrap()), ["a", "B", "c"]);
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_and_keeps_order() {
        let store = InMemoryRepositoryStore::new();
        store.insert(new_repo("a")).await.unwrap();
        let target = store.insert(new_repo("b")).await.unwrap();
        store.insert(new_repo("c")).await.unwrap();

        store.delete(target.id).await.unwrap();

        let remaining = store.list().await.unwrap();
        assert_eq!(titles(&remaining), ["a", "c"]);
        assert!(remaining.iter().all(|r| r.id != target.id));
        assert!(matches!(
            store.get(target.id).await,
            Err(RepositoryError::NotFound(id)) if id == target.id
        ));
    }

    #[tokio::test]
    async fn unknown_id_is_not_found_everywhere() {
        let store = InMemoryRepositoryStore::new();
        let id = RepositoryId::new_v4();

        assert!(matches!(store.get(id).await, Err(RepositoryError::NotFound(_))));
        assert!(matches!(
            store.update(id, RepositoryChanges::default()).await,
            Err(RepositoryError::NotFound(_))
        ));
        assert!(matches!(store.delete(id).await, Err(RepositoryError::NotFound(_))));
        assert!(matches!(store.like(id).await, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_likes_are_not_lost() {
        let store = Arc::new(InMemoryRepositoryStore::new());
        let id = store.insert(new_repo("a")).await.unwrap().id;

        let tasks: Vec<_> = (0..100)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.like(id).await.unwrap() })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(store.get(id).await.unwrap().likes, 100);
    }
}
