//! Tests for secret value validation.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use repokit_github::{SecretFormatError, validate_pypi_token, validate_secret};

fn varint(mut value: usize) -> Vec<u8> {
    let mut out = Vec::new();
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return out;
        }
        out.push(byte | 0x80);
    }
}

fn field(field_type: u8, data: &[u8]) -> Vec<u8> {
    let mut out = vec![field_type];
    out.extend(varint(data.len()));
    out.extend_from_slice(data);
    out
}

/// Serialise a v2 binary macaroon with first-party caveats only.
fn macaroon_bytes(location: &str, caveats: &[&[u8]]) -> Vec<u8> {
    let mut out = vec![2u8];
    out.extend(field(1, location.as_bytes()));
    out.extend(field(2, b"identifier"));
    out.push(0);
    for caveat in caveats {
        out.extend(field(2, caveat));
        out.push(0);
    }
    out.push(0);
    out.extend(field(6, &[0x5a; 32]));
    out
}

fn token(location: &str, caveats: &[&[u8]]) -> String {
    format!(
        "pypi-{}",
        URL_SAFE_NO_PAD.encode(macaroon_bytes(location, caveats))
    )
}

const PERMISSIONS: &[u8] = br#"{"version": 1, "permissions": {"projects": ["repokit-demo"]}}"#;

#[test]
fn test_well_formed_token_is_valid() {
    assert_eq!(validate_pypi_token(&token("pypi.org", &[PERMISSIONS])), Ok(()));
}

#[test]
fn test_missing_prefix() {
    let result = validate_pypi_token("abcdefg");
    assert_eq!(result, Err(SecretFormatError::BadPrefix));
    assert_eq!(
        result.unwrap_err().to_string(),
        "The token should start with 'pypi-'."
    );
}

#[test]
fn test_undecodable_token() {
    let result = validate_pypi_token("pypi-!!!not-a-macaroon!!!");
    assert_eq!(result, Err(SecretFormatError::Undecodable));
    assert_eq!(result.unwrap_err().to_string(), "Could not decode token.");
}

#[test]
fn test_wrong_issuer() {
    let result = validate_pypi_token(&token("example.com", &[PERMISSIONS]));
    assert_eq!(result, Err(SecretFormatError::NotPyPi));
    assert_eq!(result.unwrap_err().to_string(), "The token is not for PyPI.");
}

#[test]
fn test_no_caveats() {
    let result = validate_pypi_token(&token("pypi.org", &[]));
    assert_eq!(result, Err(SecretFormatError::UnexpectedFormat));
    assert_eq!(
        result.unwrap_err().to_string(),
        "The decoded output does not have the expected format."
    );
}

#[test]
fn test_first_caveat_not_json() {
    let result = validate_pypi_token(&token("pypi.org", &[b"not json at all"]));
    assert_eq!(result, Err(SecretFormatError::UnexpectedFormat));
}

#[test]
fn test_dispatch_by_name() {
    assert!(validate_secret("PYPI_TOKEN", "abcdefg").is_err());
    assert_eq!(
        validate_secret("PYPI_TOKEN", &token("pypi.org", &[PERMISSIONS])),
        Ok(())
    );
}

#[test]
fn test_other_secrets_are_accepted_as_is() {
    // Deliberate placeholder behaviour, not a completeness guarantee.
    assert_eq!(validate_secret("ANACONDA_TOKEN", "hijklmnop"), Ok(()));
    assert_eq!(validate_secret("ANACONDA_TOKEN", ""), Ok(()));
}
