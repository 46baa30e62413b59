//! Email syntax checking.

use crate::error::EmailValidatorError;
use crate::signup::EmailValidator;

/// [`EmailValidator`] backed by the `validator` crate (HTML5 email rules).
#[derive(Debug, Clone, Default)]
pub struct EmailValidatorAdapter;

impl EmailValidatorAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> Result<bool, EmailValidatorError> {
        Ok(validator::validate_email(email))
    }
}
