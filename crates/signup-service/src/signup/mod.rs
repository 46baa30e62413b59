//! Signup request pipeline.
//!
//! `LogControllerDecorator` → `SignUpController` → {`EmailValidator`,
//! `AddAccount` (`Encrypter` + `AddAccountRepository`)}.

mod add_account;
mod controller;
mod decorator;
mod http;
mod protocols;

pub use add_account::DbAddAccount;
pub use controller::{SignUpController, REQUIRED_FIELDS};
pub use decorator::{LogControllerDecorator, DEFAULT_LOG_TIMEOUT};
pub use http::{bad_request, ok, server_error, HttpError, HttpRequest, HttpResponse, ResponseBody};
pub use protocols::{AddAccount, Controller, EmailValidator, Encrypter};
