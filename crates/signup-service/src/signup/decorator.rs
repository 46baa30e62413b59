//! Failure-logging decorator for controllers.

use super::http::{HttpRequest, HttpResponse};
use super::protocols::Controller;
use account_store::LogErrorRepository;
use async_trait::async_trait;
use axum::http::StatusCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::error;

/// Longest a response waits for its failure to be recorded.
pub const DEFAULT_LOG_TIMEOUT: Duration = Duration::from_secs(2);

/// Wraps a controller and records the trace of every 500 it returns.
///
/// The wrapped controller's response is passed through untouched. A log
/// write that fails or outlives the timeout is reported through `tracing`
/// and otherwise ignored.
pub struct LogControllerDecorator<C> {
    controller: C,
    log_repository: Arc<dyn LogErrorRepository>,
    log_timeout: Duration,
}

impl<C: Controller> LogControllerDecorator<C> {
    pub fn new(controller: C, log_repository: Arc<dyn LogErrorRepository>) -> Self {
        Self {
            controller,
            log_repository,
            log_timeout: DEFAULT_LOG_TIMEOUT,
        }
    }

    /// Override how long a 500 may wait on the log write.
    pub fn with_log_timeout(mut self, log_timeout: Duration) -> Self {
        self.log_timeout = log_timeout;
        self
    }
}

#[async_trait]
impl<C: Controller> Controller for LogControllerDecorator<C> {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let response = self.controller.handle(request).await;

        if response.status_code == StatusCode::INTERNAL_SERVER_ERROR {
            let stack = response
                .error()
                .map(|e| e.trace().map_or_else(|| e.to_string(), str::to_string))
                .unwrap_or_default();

            let write = self.log_repository.log_error(&stack);
            match tokio::time::timeout(self.log_timeout, write).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => error!(error = %e, trace = %stack, "Failed to record server error"),
                Err(_) => error!(
                    timeout_ms = self.log_timeout.as_millis() as u64,
                    trace = %stack,
                    "Timed out recording server error"
                ),
            }
        }

        response
    }
}
