//! Session cookie attributes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// `SameSite` attribute of the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SameSitePolicy {
    /// Only sent on same-site requests.
    Strict,
    /// Sent on same-site requests and top-level navigations.
    Lax,
    /// Sent on all requests; requires `Secure`.
    None,
}

impl fmt::Display for SameSitePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "Strict"),
            Self::Lax => write!(f, "Lax"),
            Self::None => write!(f, "None"),
        }
    }
}

/// Attributes applied to every session cookie the server emits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookieConfig {
    /// Cookie name carrying the session token.
    #[serde(default = "default_name")]
    pub name: String,
    /// Cookie path.
    #[serde(default = "default_path")]
    pub path: String,
    /// Optional cookie domain.
    #[serde(default)]
    pub domain: Option<String>,
    /// Whether the cookie is restricted to HTTPS.
    #[serde(default = "default_true")]
    pub secure: bool,
    /// Whether scripts are denied access to the cookie.
    #[serde(default = "default_true")]
    pub http_only: bool,
    /// `SameSite` policy.
    #[serde(default = "default_same_site")]
    pub same_site: SameSitePolicy,
}

impl CookieConfig {
    /// Enforces the `SameSite=None` ⇒ `Secure` pairing.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.is_empty() {
            return Err(AppError::configuration("cookie.name must not be empty"));
        }
        if self.same_site == SameSitePolicy::None && !self.secure {
            return Err(AppError::configuration(
                "cookie.same_site = \"none\" requires cookie.secure = true",
            ));
        }
        Ok(())
    }
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            path: default_path(),
            domain: None,
            secure: true,
            http_only: true,
            same_site: default_same_site(),
        }
    }
}

fn default_name() -> String {
    "tk".to_string()
}

fn default_path() -> String {
    "/".to_string()
}

fn default_true() -> bool {
    true
}

fn default_same_site() -> SameSitePolicy {
    SameSitePolicy::None
}
