//! Mocked external greeting API.
//!
//! Stands in for the real greeting service in local runs and tests.

use axum::{http::header, response::IntoResponse, routing::get, Router};
use tracing::info;

use crate::api::handlers::JSON_CONTENT_TYPE;
use crate::client::http::HELLO_PATH;

/// Body served by the mocked hello endpoint.
pub const MOCK_HELLO_BODY: &str = r#"{"message":"Hello, world!"}"#;

async fn hello() -> impl IntoResponse {
    info!("Serving request");
    ([(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], MOCK_HELLO_BODY)
}

/// Create the mocked greeting API router.
pub fn mock_router() -> Router {
    Router::new().route(HELLO_PATH, get(hello))
}
