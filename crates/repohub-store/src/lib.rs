//! Store implementations of the `repohub-core` ports.
//!
//! Records live in process memory only: a restart starts from an empty store.

#![deny(unsafe_code)]

pub mod factory;
pub mod memory;

// Re-export factory for convenient access
pub use factory::StoreFactory;

pub use memory::InMemoryRepositoryStore;
