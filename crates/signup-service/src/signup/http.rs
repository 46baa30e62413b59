//! Request/response envelope and the helpers that build responses.

use crate::error::{error_trace, ErrorResponse};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

/// An untyped inbound request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpRequest {
    pub body: Value,
}

impl HttpRequest {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    /// A body field, if it is a non-empty string.
    ///
    /// Numbers, booleans, arrays and objects are not accepted as values, so
    /// `"password": 123` reads as absent and is reported as a missing param.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.body
            .get(name)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    }
}

/// Errors a controller reports to its caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    #[error("Missing param: {0}")]
    MissingParam(String),

    #[error("Invalid param: {0}")]
    InvalidParam(String),

    /// The trace is kept for logging and never serialized.
    #[error("Internal server error")]
    ServerError { trace: Option<String> },
}

impl HttpError {
    pub fn missing_param(field: impl Into<String>) -> Self {
        HttpError::MissingParam(field.into())
    }

    pub fn invalid_param(field: impl Into<String>) -> Self {
        HttpError::InvalidParam(field.into())
    }

    /// Error kind as exposed in response bodies.
    pub fn name(&self) -> &'static str {
        match self {
            HttpError::MissingParam(_) => "MissingParamError",
            HttpError::InvalidParam(_) => "InvalidParamError",
            HttpError::ServerError { .. } => "ServerError",
        }
    }

    /// Diagnostic trace of a server error.
    pub fn trace(&self) -> Option<&str> {
        match self {
            HttpError::ServerError { trace } => trace.as_deref(),
            _ => None,
        }
    }
}

impl Serialize for HttpError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ErrorResponse {
            name: self.name().to_string(),
            message: self.to_string(),
        }
        .serialize(serializer)
    }
}

/// Response payload: data on success, an error otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Data(Value),
    Error(HttpError),
}

/// Status code plus body, as returned by every controller.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status_code: StatusCode,
    pub body: ResponseBody,
}

impl HttpResponse {
    /// The error carried by this response, if any.
    pub fn error(&self) -> Option<&HttpError> {
        match &self.body {
            ResponseBody::Error(error) => Some(error),
            ResponseBody::Data(_) => None,
        }
    }
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        (self.status_code, Json(self.body)).into_response()
    }
}

/// 400 with the given client error.
pub fn bad_request(error: HttpError) -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::BAD_REQUEST,
        body: ResponseBody::Error(error),
    }
}

/// 500 carrying the trace of `error`.
pub fn server_error(error: &(dyn std::error::Error + 'static)) -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::INTERNAL_SERVER_ERROR,
        body: ResponseBody::Error(HttpError::ServerError {
            trace: Some(error_trace(error)),
        }),
    }
}

/// 200 with `data` as the body.
pub fn ok<T: Serialize>(data: &T) -> HttpResponse {
    match serde_json::to_value(data) {
        Ok(value) => HttpResponse {
            status_code: StatusCode::OK,
            body: ResponseBody::Data(value),
        },
        Err(e) => server_error(&e),
    }
}
