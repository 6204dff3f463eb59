//! Sealed-box encryption of Actions secrets.

use crate::github::error::{GitHubError, GitHubResult};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use crypto_box::PublicKey;
use crypto_box::aead::OsRng;

/// Encrypt a GitHub Actions secret against the repository's public key.
///
/// Sealed-box scheme: an ephemeral keypair is generated per call and bound
/// to this ciphertext only; key material is never reused across secrets or
/// repositories. A malformed public key is a fatal configuration error.
pub fn encrypt_secret(public_key: &str, secret_value: &str) -> GitHubResult<String> {
    let key_bytes = STANDARD
        .decode(public_key)
        .map_err(|e| GitHubError::InvalidPublicKey(format!("invalid base64: {e}")))?;

    let key_bytes: [u8; 32] = key_bytes.try_into().map_err(|bytes: Vec<u8>| {
        GitHubError::InvalidPublicKey(format!("expected 32 bytes, got {}", bytes.len()))
    })?;

    let recipient = PublicKey::from(key_bytes);
    let sealed = recipient
        .seal(&mut OsRng, secret_value.as_bytes())
        .map_err(|e| GitHubError::InvalidPublicKey(format!("sealing failed: {e}")))?;

    Ok(STANDARD.encode(sealed))
}
