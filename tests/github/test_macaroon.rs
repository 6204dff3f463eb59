//! Tests for the v2 binary macaroon reader.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use repokit_github::secrets::{Macaroon, MacaroonError};

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

fn sample() -> Vec<u8> {
    let mut out = vec![2u8];
    out.extend(field(1, b"pypi.org"));
    out.extend(field(2, b"identifier"));
    out.push(0);
    out.extend(field(2, br#"{"version": 1}"#));
    out.push(0);
    out.push(0);
    out.extend(field(6, &[0x5a; 32]));
    out
}

#[test]
fn test_decode_structure() {
    let macaroon = Macaroon::decode_v2(&sample()).expect("sample should decode");

    assert_eq!(macaroon.location.as_deref(), Some("pypi.org"));
    assert_eq!(macaroon.identifier, b"identifier");
    assert_eq!(macaroon.caveats.len(), 1);
    assert_eq!(macaroon.caveats[0].identifier, br#"{"version": 1}"#);
    assert_eq!(macaroon.caveats[0].location, None);
    assert_eq!(macaroon.caveats[0].verification_id, None);
    assert_eq!(macaroon.signature, vec![0x5a; 32]);
}

#[test]
fn test_base64_roundtrip_tolerates_padding() {
    let encoded = URL_SAFE_NO_PAD.encode(sample());
    let padded = format!("{encoded}==");

    assert_eq!(
        Macaroon::from_base64(&encoded),
        Macaroon::from_base64(&padded)
    );
    assert!(Macaroon::from_base64(&encoded).is_ok());
}

#[test]
fn test_unsupported_version() {
    let mut bytes = sample();
    bytes[0] = 1;

    assert_eq!(
        Macaroon::decode_v2(&bytes),
        Err(MacaroonError::UnsupportedVersion(1))
    );
}

#[test]
fn test_truncated_input() {
    let bytes = sample();

    assert_eq!(
        Macaroon::decode_v2(&bytes[..bytes.len() - 8]),
        Err(MacaroonError::Truncated)
    );
    assert_eq!(Macaroon::decode_v2(&[]), Err(MacaroonError::Truncated));
}

#[test]
fn test_multiple_caveats_in_order() {
    let mut bytes = vec![2u8];
    bytes.extend(field(1, b"pypi.org"));
    bytes.extend(field(2, b"id"));
    bytes.push(0);
    bytes.extend(field(2, b"first"));
    bytes.push(0);
    bytes.extend(field(2, b"second"));
    bytes.push(0);
    bytes.push(0);
    bytes.extend(field(6, &[1; 32]));

    let macaroon = Macaroon::decode_v2(&bytes).expect("two-caveat macaroon should decode");
    assert_eq!(macaroon.caveats.len(), 2);
    assert_eq!(macaroon.caveats[0].identifier, b"first");
    assert_eq!(macaroon.caveats[1].identifier, b"second");
}

#[test]
fn test_garbage_is_rejected() {
    assert!(Macaroon::from_base64("!!!").is_err());
    assert!(Macaroon::decode_v2(&[9, 9, 9]).is_err());
}
