//! Compact JWT decoding (no signature verification).

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("token must have 3 dot-separated parts, got {0}")]
    PartCount(usize),
    #[error("invalid base64url in {part}: {source}")]
    Base64 {
        part: &'static str,
        source: base64::DecodeError,
    },
    #[error("{part} is not valid JSON: {source}")]
    Json {
        part: &'static str,
        source: serde_json::Error,
    },
    #[error("{part} is not valid UTF-8")]
    Utf8 { part: &'static str },
}

/// Header and payload of a decoded token. The signature is kept as-is and
/// never checked; this is a debugging aid, not a verifier.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedToken {
    pub header: Value,
    pub payload: Value,
}

impl DecodedToken {
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.claim_timestamp("iat")
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.claim_timestamp("exp")
    }

    /// `None` when the token carries no `exp` claim.
    pub fn is_expired(&self, now: DateTime<Utc>) -> Option<bool> {
        self.expires_at().map(|exp| now >= exp)
    }

    fn claim_timestamp(&self, claim: &str) -> Option<DateTime<Utc>> {
        let seconds = self.payload.get(claim)?.as_i64()?;
        Utc.timestamp_opt(seconds, 0).single()
    }
}

/// Splits a compact JWT and decodes its header and payload.
pub fn decode(token: &str) -> Result<DecodedToken, JwtError> {
    let parts: Vec<&str> = token.trim().split('.').collect();
    if parts.len() != 3 {
        return Err(JwtError::PartCount(parts.len()));
    }
    Ok(DecodedToken {
        header: decode_part(parts[0], "header")?,
        payload: decode_part(parts[1], "payload")?,
    })
}

fn decode_part(encoded: &str, part: &'static str) -> Result<Value, JwtError> {
    // Tokens are unpadded base64url; tolerate padding some producers add.
    let bytes = URL_SAFE_NO_PAD
        .decode(encoded.trim_end_matches('='))
        .map_err(|source| JwtError::Base64 { part, source })?;
    let text = std::str::from_utf8(&bytes).map_err(|_| JwtError::Utf8 { part })?;
    serde_json::from_str(text).map_err(|source| JwtError::Json { part, source })
}
