//! Core domain types.
//!
//! # Structure
//!
//! - `id` - `RepositoryId` and its textual validation
//! - `repository` - Record types (`Repository`, `NewRepository`, `RepositoryChanges`)

mod id;
mod repository;

pub use id::{InvalidRepositoryId, RepositoryId};
pub use repository::{NewRepository, Repository, RepositoryChanges};
