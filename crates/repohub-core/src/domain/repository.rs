//! Repository record domain types.
//!
//! These types represent records in the system, independent of any
//! infrastructure concerns (storage, HTTP).

use serde::{Deserialize, Serialize};

use super::id::RepositoryId;

/// A stored repository record.
///
/// `id` and `likes` are owned by the store: callers supply the other fields
/// through [`NewRepository`] and [`RepositoryChanges`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Identifier assigned on creation.
    pub id: RepositoryId,
    /// Caller-supplied title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Caller-supplied URL, not validated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Technology tags in caller order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub techs: Option<Vec<String>>,
    /// Number of likes received.
    pub likes: u64,
}

impl Repository {
    /// Build a freshly created record with zero likes.
    pub fn new(id: RepositoryId, new: NewRepository) -> Self {
        Self {
            id,
            title: new.title,
            url: new.url,
            techs: new.techs,
            likes: 0,
        }
    }

    /// Replace the caller-owned fields, keeping `id` and `likes`.
    pub fn apply(&mut self, changes: RepositoryChanges) {
        self.title = changes.title;
        self.url = changes.url;
        self.techs = changes.techs;
    }

    /// Add one like and return the new count.
    pub const fn like(&mut self) -> u64 {
        self.likes = self.likes.saturating_add(1);
        self.likes
    }
}

/// A repository to be created (no id yet).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRepository {
    pub title: Option<String>,
    pub url: Option<String>,
    pub techs: Option<Vec<String>>,
}

/// Full replacement of the caller-owned fields of an existing repository.
///
/// Absent fields are cleared, not kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryChanges {
    pub title: Option<String>,
    pub url: Option<String>,
    pub techs: Option<Vec<String>>,
}
