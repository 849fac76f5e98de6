//! Composition utilities for building services over store backends.
//!
//! Construction only; no domain logic lives here.

use std::sync::Arc;

use repohub_core::RepositoryService;

use crate::memory::InMemoryRepositoryStore;

/// Factory for creating store instances.
pub struct StoreFactory;

impl StoreFactory {
    /// Create an empty in-memory repository store.
    pub fn in_memory() -> Arc<InMemoryRepositoryStore> {
        Arc::new(InMemoryRepositoryStore::new())
    }

    /// Build a `RepositoryService` over a fresh in-memory store.
    ///
    /// Every call yields an independent store, so tests can build one per case.
    pub fn build_service() -> RepositoryService {
        RepositoryService::new(Self::in_memory())
    }
}
