//! Adapters binding the signup collaborators to concrete libraries.

mod email;
mod hasher;

pub use email::EmailValidatorAdapter;
pub use hasher::{BcryptAdapter, MAX_COST, MIN_COST};
