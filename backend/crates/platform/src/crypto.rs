//! Cryptographic Utilities
//!
//! Signed tokens have the shape `<payload>.<base64url(HMAC-SHA256(key, payload))>`.
//! The payload itself must not contain a `.`.

use base64::{Engine, engine::general_purpose};
use hmac::{Hmac, Mac};
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Signed token verification failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("Token is not of the form payload.signature")]
    Malformed,

    #[error("Token signature is not valid base64url")]
    Encoding,

    #[error("Token signature does not match")]
    Mismatch,
}

/// Generate a random 32-byte signing key
pub fn random_key() -> [u8; 32] {
    let mut key = [0u8; 32];
    OsRng.fill_bytes(&mut key);
    key
}

/// Encode bytes as unpadded base64url
pub fn to_base64url(bytes: &[u8]) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode unpadded base64url
pub fn from_base64url(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::URL_SAFE_NO_PAD.decode(s)
}

/// Decode standard (padded) base64
pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(s)
}

fn mac_for(key: &[u8; 32], payload: &str) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    mac
}

/// Sign `payload`, producing `payload.signature`
pub fn sign(key: &[u8; 32], payload: &str) -> String {
    let signature = mac_for(key, payload).finalize().into_bytes();
    format!("{}.{}", payload, to_base64url(&signature))
}

/// Verify a token produced by [`sign`] and return its payload
///
/// Comparison is constant-time.
pub fn verify<'a>(key: &[u8; 32], token: &'a str) -> Result<&'a str, SignatureError> {
    let (payload, signature_b64) = token.rsplit_once('.').ok_or(SignatureError::Malformed)?;
    if payload.is_empty() || signature_b64.is_empty() {
        return Err(SignatureError::Malformed);
    }

    let signature = from_base64url(signature_b64).map_err(|_| SignatureError::Encoding)?;

    mac_for(key, payload)
        .verify_slice(&signature)
        .map_err(|_| SignatureError::Mismatch)?;

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_key() {
        let key = random_key();
        // Should not be all zeros (statistically)
        assert!(key.iter().any(|&b| b != 0));
        assert_ne!(key, random_key());
    }

    #[test]
    fn test_sign_and_verify() {
        let key = [42u8; 32];
        let token = sign(&key, "3f0c1a");
        assert!(token.starts_with("3f0c1a."));
        assert_eq!(verify(&key, &token), Ok("3f0c1a"));
    }

    #[test]
    fn test_verify_rejects_wrong_key() {
        let token = sign(&[1u8; 32], "payload");
        assert_eq!(verify(&[2u8; 32], &token), Err(SignatureError::Mismatch));
    }

    #[test]
    fn test_verify_rejects_tampered_payload() {
        let key = [7u8; 32];
        let token = sign(&key, "user-1");
        let (_, sig) = token.split_once('.').unwrap();
        let forged = format!("user-2.{}", sig);
        assert_eq!(verify(&key, &forged), Err(SignatureError::Mismatch));
    }

    #[test]
    fn test_verify_malformed() {
        let key = [0u8; 32];
        assert_eq!(verify(&key, "no-dot"), Err(SignatureError::Malformed));
        assert_eq!(verify(&key, ".sig"), Err(SignatureError::Malformed));
        assert_eq!(verify(&key, "payload."), Err(SignatureError::Malformed));
        assert_eq!(verify(&key, "payload.!!!"), Err(SignatureError::Encoding));
    }

    #[test]
    fn test_base64_roundtrip() {
        let data = b"hello world";
        let encoded = to_base64url(data);
        assert_eq!(from_base64url(&encoded).unwrap(), data);
    }
}
