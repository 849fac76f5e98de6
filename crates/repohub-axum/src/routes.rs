//! Route definitions and router construction.
//!
//! Handlers delegate to the `RepositoryService` held in [`AppState`].

use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::ServerContext;
use crate::extract::validate_repository_id;
use crate::handlers;
use crate::state::AppState;

/// Permissive CORS: any origin, method and header.
fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Repository API routes, without state applied.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/repositories",
            get(handlers::repositories::list).post(handlers::repositories::create),
        )
        .route(
            "/repositories/{id}",
            put(handlers::repositories::update)
                .delete(handlers::repositories::remove)
                .fallback(not_found),
        )
        .route(
            "/repositories/{id}/like",
            post(handlers::repositories::like).fallback(not_found),
        )
}

/// Create the main Axum router.
///
/// Layers, outermost first: request tracing, CORS, repository id validation.
/// The id validation wraps the fallback too, so a malformed id is rejected
/// with 400 whatever the method or sub-path. A well-formed id with an
/// unsupported method is a plain 404, like any unknown route.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`
pub fn create_router(ctx: ServerContext) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/health", get(health_check))
        .merge(api_routes().with_state(state))
        .layer(middleware::from_fn(validate_repository_id))
        .layer(build_cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Unsupported method on a repository path.
async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
