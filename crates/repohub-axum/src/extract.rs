//! Request pipeline: identifier validation, existence check and JSON bodies.
//!
//! A request for a single repository passes through these steps in order:
//!
//! 1. [`validate_repository_id`] middleware runs for every request under
//!    `/repositories/{id}` (any method, matched route or not) and rejects
//!    a malformed id with `400 Invalid Id`. The parsed [`RepositoryId`] is
//!    stored in the request extensions.
//! 2. [`ExistingRepository`] looks the id up in the store and rejects an
//!    unknown one with `400 Repository does not exist`.
//! 3. The handler runs with the located record.
//!
//! Create and update read their body through [`JsonBody`], which treats a
//! request without a JSON body as an empty object.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;
use repohub_core::{Repository, RepositoryId, RepositoryService};
use serde::de::DeserializeOwned;

use crate::error::HttpError;
use crate::state::AppState;

const REPOSITORIES_PREFIX: &str = "/repositories/";

/// The `{id}` segment of `/repositories/{id}[/...]`, if the path has one.
fn repository_id_segment(path: &str) -> Option<&str> {
    path.strip_prefix(REPOSITORIES_PREFIX)?
        .split('/')
        .next()
        .filter(|segment| !segment.is_empty())
}

/// Reject requests whose repository id segment is not a valid identifier.
pub async fn validate_repository_id(mut req: Request, next: Next) -> Result<Response, HttpError> {
    if let Some(raw) = repository_id_segment(req.uri().path()) {
        let id = RepositoryService::parse_id(raw)?;
        req.extensions_mut().insert(id);
    }

    Ok(next.run(req).await)
}

/// A repository id that passed format validation.
#[derive(Debug, Clone, Copy)]
pub struct ValidId(pub RepositoryId);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(id) = parts.extensions.get::<RepositoryId>() {
            return Ok(Self(*id));
        }

        // Router without the middleware layer: validate the path parameter here.
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| HttpError::InvalidId)?;
        Ok(Self(RepositoryService::parse_id(&raw)?))
    }
}

/// A repository located by the `{id}` path parameter.
#[derive(Debug, Clone)]
pub struct ExistingRepository(pub Repository);

impl FromRequestParts<AppState> for ExistingRepository {
    type Rejection = HttpError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let ValidId(id) = ValidId::from_request_parts(parts, state).await?;

        state
            .repositories
            .find(id)
            .await
            .map(Self)
            .ok_or(HttpError::RepositoryNotFound)
    }
}

/// Whether the request declares a JSON body (`application/json` or `+json`).
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence
        .strip_prefix("application/")
        .is_some_and(|subtype| subtype == "json" || subtype.ends_with("+json"))
}

/// A JSON request body, or `T::default()` when there is none.
///
/// A request without a JSON content type, or with an empty body, yields the
/// default value. A JSON body that fails to parse or has mistyped fields is
/// rejected with `400 { "error": ... }`.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Ok(Self(T::default()));
        }

        let bytes = Bytes::from_request(req, state).await?;
        if bytes.is_empty() {
            return Ok(Self(T::default()));
        }

        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        Ok(Self(value))
    }
}
