//! Shared helpers for driving the router in-process.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use repohub_axum::{bootstrap, create_router};

/// A router over a fresh, empty store.
pub fn test_app() -> Router {
    create_router(bootstrap())
}

/// Response status plus body, parsed as JSON when non-empty.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Option<Value>,
}

impl TestResponse {
    pub fn json(&self) -> &Value {
        self.body.as_ref().expect("expected a JSON body")
    }
}

/// Send a request with an optional JSON body.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        None
    } else {
        Some(serde_json::from_slice(&bytes).unwrap())
    };

    TestResponse { status, body }
}

/// Create a repository and return its JSON representation.
pub async fn create_repository(app: &Router, title: &str) -> Value {
    let response = send(
        app,
        Method::POST,
        "/repositories",
        Some(json!({
            "title": title,
            "url": format!("http://github.com/example/{title}"),
            "techs": ["Node.js", "Express"],
        })),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    response.json().clone()
}

/// All stored repositories.
pub async fn list_repositories(app: &Router) -> Vec<Value> {
    let response = send(app, Method::GET, "/repositories", None).await;
    assert_eq!(response.status, StatusCode::OK);
    response.json().as_array().unwrap().clone()
}

/// Whether a string is a lowercase hyphenated UUID.
pub fn is_uuid(s: &str) -> bool {
    s.len() == 36
        && s.char_indices().all(|(i, c)| match i {
            8 | 13 | 18 | 23 => c == '-',
            _ => c.is_ascii_hexdigit() && !c.is_ascii_uppercase(),
        })
}

pub const UNUSED_ID: &str = "3b241101-e2bb-4255-8caf-4136c566a962";
