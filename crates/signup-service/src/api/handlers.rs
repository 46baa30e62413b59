//! HTTP request handlers.

use super::types::HealthResponse;
use super::AppState;
use crate::signup::{HttpRequest, HttpResponse};
use axum::{body::Bytes, extract::State, Json};
use serde_json::{Map, Value};
use tracing::debug;

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        accounts: state.accounts.count().await,
    })
}

/// Create an account.
///
/// The body is handed to the controller as raw JSON. A missing or
/// unparseable body is treated as an empty object.
pub async fn signup(State(state): State<AppState>, body: Bytes) -> HttpResponse {
    state.controller.handle(HttpRequest::new(parse_body(&body))).await
}

fn parse_body(body: &[u8]) -> Value {
    if body.is_empty() {
        return Value::Object(Map::new());
    }

    serde_json::from_slice(body).unwrap_or_else(|e| {
        debug!(error = %e, "Signup body is not valid JSON");
        Value::Object(Map::new())
    })
}
