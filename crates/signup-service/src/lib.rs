//! Signup Service - single-endpoint account registration.
//!
//! Accepts a signup request and:
//! - Validates presence of every field, password confirmation and email syntax
//! - Hashes the password with bcrypt before it reaches storage
//! - Persists the account and returns it with its generated id
//! - Records the trace of every internal failure in an error log

pub mod adapters;
pub mod api;
pub mod config;
pub mod error;
pub mod factory;
pub mod signup;

pub use config::Config;
pub use error::{AddAccountError, EmailValidatorError, EncryptError};
pub use factory::make_signup_controller;
pub use signup::{Controller, HttpError, HttpRequest, HttpResponse, LogControllerDecorator, SignUpController};
