//! Tests for sealed-box secret encryption.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use crypto_box::SecretKey;
use crypto_box::aead::OsRng;
use repokit_github::{GitHubError, encrypt_secret};

fn recipient() -> (SecretKey, String) {
    let secret_key = SecretKey::generate(&mut OsRng);
    let public_b64 = STANDARD.encode(secret_key.public_key().as_bytes());
    (secret_key, public_b64)
}

#[test]
fn test_roundtrip() {
    let (secret_key, public_b64) = recipient();

    let sealed_b64 = encrypt_secret(&public_b64, "hunter2").expect("encryption should succeed");
    let sealed = STANDARD
        .decode(sealed_b64)
        .expect("ciphertext should be base64");

    let opened = secret_key.unseal(&sealed).expect("sealed box should open");
    assert_eq!(opened, b"hunter2");
}

#[test]
fn test_ephemeral_keys_differ_per_call() {
    let (_, public_b64) = recipient();

    let first = encrypt_secret(&public_b64, "same value").expect("encryption should succeed");
    let second = encrypt_secret(&public_b64, "same value").expect("encryption should succeed");

    assert_ne!(first, second);
}

#[test]
fn test_bad_base64_is_fatal() {
    let result = encrypt_secret("definitely not base64!!!", "value");
    assert!(matches!(result, Err(GitHubError::InvalidPublicKey(_))));
}

#[test]
fn test_wrong_key_length_is_fatal() {
    let short = STANDARD.encode([0u8; 16]);
    let result = encrypt_secret(&short, "value");
    assert!(matches!(result, Err(GitHubError::InvalidPublicKey(_))));
}
