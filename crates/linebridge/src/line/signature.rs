//! Webhook signature verification.
//!
//! The platform signs each request body with HMAC-SHA256 keyed by the channel
//! secret and sends the base64 digest in `X-Line-Signature`.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tracing::warn;

type HmacSha256 = Hmac<Sha256>;

/// Compute the base64 signature for `body`.
pub fn sign(channel_secret: &str, body: &[u8]) -> String {
    STANDARD.encode(digest(channel_secret, body))
}

/// Check `signature` (the raw header value) against `body`.
pub fn verify_signature(channel_secret: &str, body: &[u8], signature: &str) -> bool {
    let Ok(expected) = STANDARD.decode(signature.trim()) else {
        warn!("signature header is not valid base64");
        return false;
    };

    let computed = digest(channel_secret, body);
    computed.as_slice().ct_eq(expected.as_slice()).into()
}

#[allow(clippy::expect_used)] // HMAC accepts any key size, this cannot fail
fn digest(channel_secret: &str, body: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(channel_secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(body);
    mac.finalize().into_bytes().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";
    const BODY: &[u8] = br#"{"destination":"U1","events":[]}"#;

    #[test]
    fn accepts_own_signature() {
        let signature = sign(SECRET, BODY);
        assert!(verify_signature(SECRET, BODY, &signature));
    }

    #[test]
    fn matches_known_digest() {
        // printf hello | openssl dgst -sha256 -hmac secret -binary | base64
        let signature = sign("secret", b"hello");
        assert_eq!(signature, "iKqz7ejTrflNJquQ07r9SiCDBww7zOnAFO4EpEOEfAs=");
    }

    #[test]
    fn rejects_wrong_secret() {
        let signature = sign("another-secret", BODY);
        assert!(!verify_signature(SECRET, BODY, &signature));
    }

    #[test]
    fn rejects_tampered_body() {
        let signature = sign(SECRET, BODY);
        assert!(!verify_signature(
            SECRET,
            br#"{"destination":"U2","events":[]}"#,
            &signature
        ));
    }

    #[test]
    fn rejects_garbage_and_empty_headers() {
        assert!(!verify_signature(SECRET, BODY, "not base64!!"));
        assert!(!verify_signature(SECRET, BODY, ""));
        assert!(!verify_signature(SECRET, BODY, "c2hvcnQ="));
    }
}
