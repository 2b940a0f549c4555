//! HMAC-signed token encoding and decoding over string claim sets.

use std::collections::{BTreeMap, HashSet};

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde_json::Value;

use sharebox_core::config::AuthConfig;
use sharebox_core::error::AppError;

use super::claims::{CLAIM_KEYS, ClaimMap};

/// Issues and parses signed tokens.
///
/// The codec checks integrity and claim presence only. Expiry is left to the
/// caller so that the codec stays a pure function of its input.
#[derive(Clone)]
pub struct TokenCodec {
    /// HMAC key for signing.
    encoding_key: EncodingKey,
    /// HMAC key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenCodec {
    /// Creates a codec from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self::from_secret(config.token_secret.as_bytes())
    }

    /// Creates a codec from a raw HMAC secret.
    pub fn from_secret(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims = HashSet::new();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Signs a claim set. Fails if any session claim is absent or empty.
    pub fn issue(&self, claims: &ClaimMap) -> Result<String, AppError> {
        for key in CLAIM_KEYS {
            if claims.get(key).is_none_or(|v| v.is_empty()) {
                return Err(AppError::validation(format!(
                    "Claim '{key}' is required to issue a token"
                )));
            }
        }

        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }

    /// Verifies a token and returns its claims.
    ///
    /// Fails if the token is malformed, its signature does not match, any
    /// claim value is not a string, or any of `expected_keys` is missing or
    /// empty. Nothing is returned on failure.
    pub fn parse(&self, token: &str, expected_keys: &[&str]) -> Result<ClaimMap, AppError> {
        let data = decode::<BTreeMap<String, Value>>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::unauthorized("Invalid token format")
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::unauthorized("Invalid token signature")
                }
                _ => AppError::unauthorized(format!("Token validation failed: {e}")),
            })?;

        let mut claims = ClaimMap::new();
        for (key, value) in data.claims {
            match value {
                Value::String(s) => {
                    claims.insert(key, s);
                }
                _ => {
                    return Err(AppError::unauthorized(format!(
                        "Claim '{key}' is not a string"
                    )));
                }
            }
        }

        for key in expected_keys {
            if claims.get(*key).is_none_or(|v| v.is_empty()) {
                return Err(AppError::unauthorized(format!("Claim '{key}' is missing")));
            }
        }

        Ok(claims)
    }
}
