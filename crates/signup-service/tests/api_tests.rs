//! Integration tests for the signup API.

use account_store::{AccountStore, FileLogRepository, LogErrorRepository, MemoryLogRepository};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use signup_service::{
    adapters::MIN_COST,
    api::{create_router, AppState},
    make_signup_controller,
};
use std::sync::Arc;
use tower::ServiceExt;

/// Create a router backed by in-memory storage.
fn create_test_app(error_log: Arc<dyn LogErrorRepository>) -> Router {
    let accounts = Arc::new(AccountStore::memory());
    let controller = make_signup_controller(MIN_COST, accounts.clone(), error_log);
    let state = AppState::new(Arc::new(controller), accounts);
    create_router(state)
}

fn signup_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/signup")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn valid_body(email: &str) -> serde_json::Value {
    serde_json::json!({
        "name": "integration_test",
        "email": email,
        "password": "integration_test",
        "passwordConfirmation": "integration_test"
    })
}

async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_signup_returns_account_on_success() {
    let app = create_test_app(Arc::new(MemoryLogRepository::new()));

    let response = app
        .oneshot(signup_request(valid_body("integration_test@mail.com")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = read_json(response).await;
    assert!(!json["id"].as_str().unwrap().is_empty());
    assert_eq!(json["name"], "integration_test");
    assert_eq!(json["email"], "integration_test@mail.com");
    assert_ne!(json["password"], "integration_test");
    assert!(bcrypt::verify("integration_test", json["password"].as_str().unwrap()).unwrap());
}

#[tokio::test]
async fn test_signup_missing_param() {
    let app = create_test_app(Arc::new(MemoryLogRepository::new()));

    let response = app
        .oneshot(signup_request(serde_json::json!({
            "email": "integration_test@mail.com",
            "password": "integration_test",
            "passwordConfirmation": "integration_test"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = read_json(response).await;
    assert_eq!(json["name"], "MissingParamError");
    assert_eq!(json["message"], "Missing param: name");
}

#[tokio::test]
async fn test_signup_invalid_email() {
    let app = create_test_app(Arc::new(MemoryLogRepository::new()));

    let response = app
        .oneshot(signup_request(valid_body("not-an-email")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = read_json(response).await;
    assert_eq!(json["name"], "InvalidParamError");
    assert_eq!(json["message"], "Invalid param: email");
}

#[tokio::test]
async fn test_signup_malformed_body_is_missing_name() {
    let app = create_test_app(Arc::new(MemoryLogRepository::new()));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/signup")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = read_json(response).await;
    assert_eq!(json["message"], "Missing param: name");
}

#[tokio::test]
async fn test_duplicate_signup_is_logged_server_error() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("errors.jsonl");
    let app = create_test_app(Arc::new(FileLogRepository::new(&log_path)));

    let response = app
        .clone()
        .oneshot(signup_request(valid_body("integration_test@mail.com")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(signup_request(valid_body("integration_test@mail.com")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = read_json(response).await;
    assert_eq!(
        json,
        serde_json::json!({ "name": "ServerError", "message": "Internal server error" })
    );

    let entries = FileLogRepository::new(&log_path).entries().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].stack.contains("Email already in use"));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(read_json(response).await["accounts"], 1);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app(Arc::new(MemoryLogRepository::new()));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["accounts"], 0);
}

#[tokio::test]
async fn test_signup_requires_post() {
    let app = create_test_app(Arc::new(MemoryLogRepository::new()));

    let response = app
        .oneshot(Request::builder().uri("/api/signup").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_signup_has_no_request_quota() {
    let app = create_test_app(Arc::new(MemoryLogRepository::new()));

    for _ in 0..75 {
        let response = app
            .clone()
            .oneshot(signup_request(valid_body("not-an-email")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
