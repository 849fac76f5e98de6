//! Repository handlers - CRUD and like operations.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::LikesResponse;
use crate::error::HttpError;
use crate::extract::{ExistingRepository, JsonBody};
use crate::state::AppState;
use repohub_core::{NewRepository, Repository, RepositoryChanges};

/// List all repositories in insertion order.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Repository>>, HttpError> {
    Ok(Json(state.repositories.list().await?))
}

/// Create a repository. Responds 200 with the new record.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(new): JsonBody<NewRepository>,
) -> Result<Json<Repository>, HttpError> {
    Ok(Json(state.repositories.create(new).await?))
}

/// Replace title, url and techs. Responds 201 with the updated record.
pub async fn update(
    State(state): State<AppState>,
    ExistingRepository(repo): ExistingRepository,
    JsonBody(changes): JsonBody<RepositoryChanges>,
) -> Result<(StatusCode, Json<Repository>), HttpError> {
    let updated = state.repositories.update(repo.id, changes).await?;
    Ok((StatusCode::CREATED, Json(updated)))
}

/// Delete a repository. Responds 204 with an empty body.
pub async fn remove(
    State(state): State<AppState>,
    ExistingRepository(repo): ExistingRepository,
) -> Result<StatusCode, HttpError> {
    state.repositories.delete(repo.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Like a repository. Responds 201 with `{ "likes": n }`.
pub async fn like(
    State(state): State<AppState>,
    ExistingRepository(repo): ExistingRepository,
) -> Result<(StatusCode, Json<LikesResponse>), HttpError> {
    let likes = state.repositories.like(repo.id).await?;
    Ok((StatusCode::CREATED, Json(LikesResponse { likes })))
}
