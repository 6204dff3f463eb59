//! Ensure secrets have the required format before setting them on GitHub.

use crate::secrets::macaroon::Macaroon;
use thiserror::Error;

/// Why a secret value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SecretFormatError {
    #[error("The token should start with 'pypi-'.")]
    BadPrefix,

    #[error("Could not decode token.")]
    Undecodable,

    #[error("The token is not for PyPI.")]
    NotPyPi,

    #[error("The decoded output does not have the expected format.")]
    UnexpectedFormat,
}

/// Validate a secret value by name.
///
/// Only `PYPI_TOKEN` has a validator; every other name is deliberately
/// accepted as-is, a placeholder rather than a completeness guarantee.
pub fn validate_secret(name: &str, value: &str) -> Result<(), SecretFormatError> {
    match name {
        "PYPI_TOKEN" => validate_pypi_token(value),
        _ => Ok(()),
    }
}

/// Check whether a PyPI token *appears* to be valid.
///
/// The token is `pypi-` followed by a base64-encoded macaroon issued by
/// `pypi.org`, whose first caveat carries a JSON permissions record.
pub fn validate_pypi_token(token: &str) -> Result<(), SecretFormatError> {
    let Some(encoded) = token.strip_prefix("pypi-") else {
        return Err(SecretFormatError::BadPrefix);
    };

    let macaroon =
        Macaroon::from_base64(encoded).map_err(|_| SecretFormatError::Undecodable)?;

    if macaroon.location.as_deref() != Some("pypi.org") {
        return Err(SecretFormatError::NotPyPi);
    }

    let Some(first) = macaroon.caveats.first() else {
        return Err(SecretFormatError::UnexpectedFormat);
    };

    if serde_json::from_slice::<serde_json::Value>(&first.identifier).is_err() {
        return Err(SecretFormatError::UnexpectedFormat);
    }

    Ok(())
}
