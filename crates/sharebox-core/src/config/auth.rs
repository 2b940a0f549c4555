//! Session token configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Placeholder secret shipped in the defaults. Tokens signed with it can be forged.
pub const DEFAULT_TOKEN_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";

/// Session token signing and lifetime configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256).
    #[serde(default = "default_token_secret")]
    pub token_secret: String,
    /// Token lifetime in seconds. Also used as the cookie max-age.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_seconds: u64,
}

impl AuthConfig {
    /// Rejects configurations that would issue unusable tokens.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.token_secret.is_empty() {
            return Err(AppError::configuration("auth.token_secret must not be empty"));
        }
        if self.token_ttl_seconds == 0 {
            return Err(AppError::configuration(
                "auth.token_ttl_seconds must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Whether the shipped placeholder secret is still in use.
    pub fn uses_default_secret(&self) -> bool {
        self.token_secret == DEFAULT_TOKEN_SECRET
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: default_token_secret(),
            token_ttl_seconds: default_token_ttl(),
        }
    }
}

fn default_token_secret() -> String {
    DEFAULT_TOKEN_SECRET.to_string()
}

fn default_token_ttl() -> u64 {
    7 * 24 * 60 * 60
}
