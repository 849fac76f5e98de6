//! Core domain types, ports and services for repohub.
//!
//! This crate has no knowledge of HTTP or of how records are stored.
//! Adapters depend on it; it depends on no adapter.

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{InvalidRepositoryId, NewRepository, Repository, RepositoryChanges, RepositoryId};
pub use ports::{CoreError, RepositoryError, RepositoryStore};
pub use services::RepositoryService;
