//! Secret value validation and encryption.

pub mod encrypt;
pub mod macaroon;
pub mod validation;

pub use encrypt::encrypt_secret;
pub use macaroon::{Macaroon, MacaroonError};
pub use validation::{SecretFormatError, validate_pypi_token, validate_secret};
