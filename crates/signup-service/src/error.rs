//! Error types for the signup service.

use account_store::StoreError;
use serde::Serialize;
use thiserror::Error;

/// Password hashing failures. Never carries the plaintext.
#[derive(Debug, Error)]
pub enum EncryptError {
    #[error("bcrypt hashing failed")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("hashing task did not complete")]
    Task(#[from] tokio::task::JoinError),
}

/// Email syntax checker failures.
#[derive(Debug, Error)]
pub enum EmailValidatorError {
    #[error("Email validator misconfigured: {0}")]
    Misconfigured(String),
}

/// Account creation failures.
#[derive(Debug, Error)]
pub enum AddAccountError {
    #[error("Failed to encrypt password")]
    Encryption(#[from] EncryptError),

    #[error("Failed to store account")]
    Storage(#[from] StoreError),
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

/// Render an error and its `source()` chain, one cause per line.
pub fn error_trace(error: &(dyn std::error::Error + 'static)) -> String {
    let mut trace = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        trace.push_str("\nCaused by: ");
        trace.push_str(&cause.to_string());
        source = cause.source();
    }
    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_trace_walks_source_chain() {
        let error = AddAccountError::Storage(StoreError::EmailInUse);

        assert_eq!(
            error_trace(&error),
            "Failed to store account\nCaused by: Email already in use"
        );
    }

    #[test]
    fn test_error_trace_single_error() {
        let error = EmailValidatorError::Misconfigured("no rules".into());

        assert_eq!(error_trace(&error), "Email validator misconfigured: no rules");
    }

    #[test]
    fn test_encryption_trace_has_bcrypt_cause() {
        let error = AddAccountError::from(EncryptError::from(bcrypt::BcryptError::CostNotAllowed(2)));
        let trace = error_trace(&error);

        assert!(trace.starts_with("Failed to encrypt password\nCaused by: bcrypt hashing failed"));
        assert_eq!(trace.lines().count(), 3);
    }
}
