//! Wiring of the signup pipeline.

use crate::adapters::{BcryptAdapter, EmailValidatorAdapter};
use crate::signup::{DbAddAccount, LogControllerDecorator, SignUpController};
use account_store::{AddAccountRepository, LogErrorRepository};
use std::sync::Arc;

/// Build the signup controller wrapped in failure logging.
pub fn make_signup_controller(
    hashing_cost: u32,
    accounts: Arc<dyn AddAccountRepository>,
    error_log: Arc<dyn LogErrorRepository>,
) -> LogControllerDecorator<SignUpController> {
    let email_validator = Arc::new(EmailValidatorAdapter::new());
    let encrypter = Arc::new(BcryptAdapter::new(hashing_cost));
    let add_account = Arc::new(DbAddAccount::new(encrypter, accounts));
    let controller = SignUpController::new(email_validator, add_account);
    LogControllerDecorator::new(controller, error_log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MIN_COST;
    use crate::signup::{Controller, HttpError, HttpRequest, ResponseBody};
    use account_store::{MemoryAccountRepository, MemoryLogRepository};
    use axum::http::StatusCode;
    use serde_json::json;

    fn signup_body(email: &str) -> HttpRequest {
        HttpRequest::new(json!({
            "name": "valid_name",
            "email": email,
            "password": "valid_password",
            "passwordConfirmation": "valid_password"
        }))
    }

    #[tokio::test]
    async fn test_creates_account_with_hashed_password() {
        let accounts = Arc::new(MemoryAccountRepository::new());
        let log = Arc::new(MemoryLogRepository::new());
        let controller = make_signup_controller(MIN_COST, accounts.clone(), log.clone());

        let response = controller.handle(signup_body("valid_email@mail.com")).await;

        assert_eq!(response.status_code, StatusCode::OK);
        let ResponseBody::Data(body) = response.body else {
            panic!("expected account body");
        };
        assert!(!body["id"].as_str().unwrap().is_empty());
        assert_eq!(body["name"], "valid_name");
        assert_eq!(body["email"], "valid_email@mail.com");

        let password = body["password"].as_str().unwrap();
        assert_ne!(password, "valid_password");
        assert!(bcrypt::verify("valid_password", password).unwrap());

        let stored = accounts.find_by_email("valid_email@mail.com").await.unwrap();
        assert_eq!(stored.password, password);
        assert_eq!(log.count().await, 0);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_logged_server_error() {
        let accounts = Arc::new(MemoryAccountRepository::new());
        let log = Arc::new(MemoryLogRepository::new());
        let controller = make_signup_controller(MIN_COST, accounts.clone(), log.clone());

        controller.handle(signup_body("valid_email@mail.com")).await;
        let response = controller.handle(signup_body("valid_email@mail.com")).await;

        assert_eq!(response.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(matches!(response.error(), Some(HttpError::ServerError { .. })));
        assert_eq!(accounts.count().await, 1);

        let entries = log.entries().await;
        assert_eq!(entries.len(), 1);
        assert!(entries[0].stack.contains("Email already in use"));
        assert!(!entries[0].stack.contains("valid_password"));
    }

    #[tokio::test]
    async fn test_invalid_email_is_rejected() {
        let accounts = Arc::new(MemoryAccountRepository::new());
        let log = Arc::new(MemoryLogRepository::new());
        let controller = make_signup_controller(MIN_COST, accounts.clone(), log.clone());

        let response = controller.handle(signup_body("invalid_email")).await;

        assert_eq!(response.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(response.error(), Some(&HttpError::invalid_param("email")));
        assert_eq!(accounts.count().await, 0);
    }
}
