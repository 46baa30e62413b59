//! HTTP API for the signup service.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::log_requests;
pub use types::*;

use crate::signup::Controller;
use account_store::AccountStore;
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Signup controller, already wrapped in failure logging
    pub controller: Arc<dyn Controller>,
    /// Account storage, for health reporting
    pub accounts: Arc<AccountStore>,
}

impl AppState {
    pub fn new(controller: Arc<dyn Controller>, accounts: Arc<AccountStore>) -> Self {
        Self {
            controller,
            accounts,
        }
    }
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/signup", post(handlers::signup))
        .layer(axum_middleware::from_fn(log_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
