//! Repository identifier.
//!
//! Identifiers are UUIDs assigned by the store. On the wire they are always
//! the 36-character lowercase hyphenated form of a version 4 or 5 UUID, or
//! the nil UUID. Anything else is rejected by [`RepositoryId::from_str`],
//! including uppercase hex and the simple, braced and URN spellings that
//! `uuid` also understands.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Opaque, immutable identifier of a stored repository record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepositoryId(Uuid);

impl RepositoryId {
    /// Generate a fresh random (v4) identifier.
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

/// A string that is not an accepted identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid repository id: {0:?}")]
pub struct InvalidRepositoryId(pub String);

impl FromStr for RepositoryId {
    type Err = InvalidRepositoryId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidRepositoryId(s.to_owned());

        if s.len() != uuid::fmt::Hyphenated::LENGTH || s.bytes().any(|b| b.is_ascii_uppercase()) {
            return Err(invalid());
        }

        let uuid = Uuid::try_parse(s).map_err(|_| invalid())?;
        if !uuid.is_nil() && !matches!(uuid.get_version_num(), 4 | 5) {
            return Err(invalid());
        }

        Ok(Self(uuid))
    }
}
