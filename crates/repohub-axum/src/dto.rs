//! Data Transfer Objects (DTOs) for the HTTP API contract.
//!
//! Records themselves are serialized straight from the domain types;
//! only responses that differ from a record shape live here.

use serde::Serialize;

/// Body of a successful like: the new count only, not the full record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LikesResponse {
    pub likes: u64,
}
