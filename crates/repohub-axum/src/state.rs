//! Shared application state type.

use crate::bootstrap::ServerContext;
use std::sync::Arc;

/// Application state shared across all handlers and extractors.
pub type AppState = Arc<ServerContext>;
