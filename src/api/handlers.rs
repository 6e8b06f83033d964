//! HTTP API handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::client::GreetingClient;
use crate::metrics;

/// Content type of every home response.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Error text returned when no greeting could be fetched.
pub const GREETING_UNAVAILABLE: &str = "unable to get message";

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of greeting messages.
    pub client: Arc<dyn GreetingClient>,
}

impl AppState {
    /// Create new app state around a greeting client.
    pub fn new(client: impl GreetingClient + 'static) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Render a single-field JSON object as `{"key": value}`.
///
/// Both key and value go through the JSON encoder, so quotes, backslashes
/// and control characters in the greeting are escaped.
fn single_field_body(key: &str, value: &str) -> String {
    format!("{{{}: {}}}", Value::from(key), Value::from(value))
}

fn json_response(status: StatusCode, key: &str, value: &str) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)],
        single_field_body(key, value),
    )
        .into_response()
}

/// Home handler - greets the customer with the external API's message.
///
/// Returns 200 with `{"message": ...}`, or 500 with a generic error body
/// whatever the reason the greeting is unavailable.
pub async fn home(State(state): State<AppState>) -> Response {
    info!("Serving root request");

    let start = Instant::now();
    let result = state.client.fetch_greeting().await;
    metrics::record_greeting_latency(start);

    match result {
        Ok(greeting) => {
            metrics::inc_greetings_served();
            json_response(StatusCode::OK, "message", &greeting.message)
        }
        Err(e) => {
            warn!(error = %e, "Unable to get greeting");
            metrics::inc_greetings_failed();
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "error",
                GREETING_UNAVAILABLE,
            )
        }
    }
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}
