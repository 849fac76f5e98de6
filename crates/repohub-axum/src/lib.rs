//! repohub HTTP server, using [axum](https://github.com/tokio-rs/axum).
//!
//! Exposes the in-memory repository store as a JSON REST API:
//!
//! | Method & Path | Success |
//! |---|---|
//! | `GET /repositories` | 200, all records |
//! | `POST /repositories` | 200, created record |
//! | `PUT /repositories/{id}` | 201, updated record |
//! | `DELETE /repositories/{id}` | 204, empty body |
//! | `POST /repositories/{id}/like` | 201, `{ "likes": n }` |
//! | `GET /health` | 200, `OK` |
//!
//! Errors are `{ "error": "<message>" }`; see [`HttpError`]. Cross-origin
//! requests are accepted from any origin.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{ServerConfig, ServerContext, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
