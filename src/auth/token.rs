//! Token Decoding
//!
//! Reads the claims out of the stored JWT without verifying its signature.
//! The decoded fields are a UX convenience only (display name, expiry check,
//! staff affordances); the server re-validates the signature on every
//! request, so nothing here is an authorization decision.

use serde::Deserialize;

/// Claims the dashboard cares about; everything else in the payload is
/// ignored
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub is_staff: bool,
}

/// Decode the payload segment of a JWT. Any malformed token yields `None`
/// and is treated the same as an absent token.
pub fn decode_claims(token: &str) -> Option<Claims> {
    let payload = token.split('.').nth(1)?;
    let bytes = base64url_decode(payload)?;
    serde_json::from_slice(&bytes).ok()
}

/// Base64url decoding (padding optional), enough for JWT payloads
fn base64url_decode(input: &str) -> Option<Vec<u8>> {
    fn sextet(c: u8) -> Option<u32> {
        match c {
            b'A'..=b'Z' => Some((c - b'A') as u32),
            b'a'..=b'z' => Some((c - b'a') as u32 + 26),
            b'0'..=b'9' => Some((c - b'0') as u32 + 52),
            b'-' | b'+' => Some(62),
            b'_' | b'/' => Some(63),
            _ => None,
        }
    }

    let input = input.trim_end_matches('=');
    let mut out = Vec::with_capacity(input.len() * 3 / 4);
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for &byte in input.as_bytes() {
        buffer = (buffer << 6) | sextet(byte)?;
        bits += 6;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
        }
    }
    Some(out)
}

/// Build an unsigned test token with the given payload
#[cfg(test)]
pub(crate) fn test_token(payload: &serde_json::Value) -> String {
    fn encode(data: &[u8]) -> String {
        const ALPHABET: &[u8] =
            b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";
        let mut result = String::new();
        for chunk in data.chunks(3) {
            let b0 = chunk[0] as usize;
            let b1 = chunk.get(1).copied().unwrap_or(0) as usize;
            let b2 = chunk.get(2).copied().unwrap_or(0) as usize;
            result.push(ALPHABET[b0 >> 2] as char);
            result.push(ALPHABET[((b0 & 0x03) << 4) | (b1 >> 4)] as char);
            if chunk.len() > 1 {
                result.push(ALPHABET[((b1 & 0x0f) << 2) | (b2 >> 6)] as char);
            }
            if chunk.len() > 2 {
                result.push(ALPHABET[b2 & 0x3f] as char);
            }
        }
        result
    }

    let header = encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = encode(payload.to_string().as_bytes());
    format!("{}.{}.signature-not-checked", header, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_valid_token() {
        let token = test_token(&json!({
            "username": "meron",
            "email": "meron@example.com",
            "exp": 2000000000i64,
            "is_staff": true
        }));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.username.as_deref(), Some("meron"));
        assert_eq!(claims.email.as_deref(), Some("meron@example.com"));
        assert_eq!(claims.exp, Some(2000000000));
        assert!(claims.is_staff);
    }

    #[test]
    fn test_missing_claims_default() {
        let token = test_token(&json!({"user_id": 7}));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.username, None);
        assert_eq!(claims.exp, None);
        assert!(!claims.is_staff);
    }

    #[test]
    fn test_malformed_tokens_yield_none() {
        assert_eq!(decode_claims(""), None);
        assert_eq!(decode_claims("no-dots-here"), None);
        assert_eq!(decode_claims("a.!!!not-base64!!!.c"), None);
        // Valid base64 but not JSON
        assert_eq!(decode_claims("a.aGVsbG8.c"), None);
    }

    #[test]
    fn test_base64url_decode_handles_padding() {
        assert_eq!(base64url_decode("aGVsbG8=").unwrap(), b"hello");
        assert_eq!(base64url_decode("aGVsbG8").unwrap(), b"hello");
    }
}
