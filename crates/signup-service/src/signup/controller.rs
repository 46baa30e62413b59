//! Signup controller.

use super::http::{bad_request, ok, server_error, HttpError, HttpRequest, HttpResponse};
use super::protocols::{AddAccount, Controller, EmailValidator};
use account_store::AddAccountModel;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Body fields that must be present, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "email", "password", "passwordConfirmation"];

/// Validates a signup request and creates the account.
///
/// Checks run in a fixed order and the first failure is returned:
/// 1. every field in [`REQUIRED_FIELDS`] is a non-empty string
/// 2. `password` equals `passwordConfirmation`
/// 3. the email passes the [`EmailValidator`]
/// 4. the account is created through [`AddAccount`]
///
/// Collaborator failures become a 500 carrying the error trace.
pub struct SignUpController {
    email_validator: Arc<dyn EmailValidator>,
    add_account: Arc<dyn AddAccount>,
}

impl SignUpController {
    pub fn new(email_validator: Arc<dyn EmailValidator>, add_account: Arc<dyn AddAccount>) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }
}

#[async_trait]
impl Controller for SignUpController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let mut fields = [""; REQUIRED_FIELDS.len()];
        for (slot, field) in fields.iter_mut().zip(REQUIRED_FIELDS) {
            match request.field(field) {
                Some(value) => *slot = value,
                None => {
                    debug!(field, "Signup rejected: missing param");
                    return bad_request(HttpError::missing_param(field));
                }
            }
        }
        let [name, email, password, password_confirmation] = fields;

        if password != password_confirmation {
            debug!("Signup rejected: password confirmation mismatch");
            return bad_request(HttpError::invalid_param("passwordConfirmation"));
        }

        match self.email_validator.is_valid(email) {
            Ok(true) => {}
            Ok(false) => {
                debug!("Signup rejected: invalid email");
                return bad_request(HttpError::invalid_param("email"));
            }
            Err(e) => {
                warn!(error = %e, "Email validation failed");
                return server_error(&e);
            }
        }

        match self
            .add_account
            .add(AddAccountModel::new(name, email, password))
            .await
        {
            Ok(account) => {
                info!(account_id = %account.id, "Account created");
                ok(&account)
            }
            Err(e) => {
                warn!(error = %e, "Account creation failed");
                server_error(&e)
            }
        }
    }
}
