//! `Set-Cookie` values for the session token.

use std::fmt;

use chrono::{DateTime, Duration, Utc};

use sharebox_core::config::{CookieConfig, SameSitePolicy};

/// Date format required by the `Expires` cookie attribute.
const EXPIRES_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// A session cookie ready to be rendered into a `Set-Cookie` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    pub name: String,
    pub value: String,
    pub path: String,
    pub domain: Option<String>,
    /// Lifetime in seconds. Zero tells the browser to drop the cookie.
    pub max_age: i64,
    pub expires: DateTime<Utc>,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSitePolicy,
}

impl SessionCookie {
    /// A cookie carrying `token` for `ttl_seconds`.
    pub fn issue(config: &CookieConfig, token: &str, ttl_seconds: u64) -> Self {
        let max_age = i64::try_from(ttl_seconds).unwrap_or(i64::MAX);
        let expires = Duration::try_seconds(max_age)
            .and_then(|ttl| Utc::now().checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self::build(config, token.to_string(), max_age, expires)
    }

    /// An empty cookie that expires immediately.
    pub fn expired(config: &CookieConfig) -> Self {
        Self::build(config, String::new(), 0, DateTime::UNIX_EPOCH)
    }

    fn build(
        config: &CookieConfig,
        value: String,
        max_age: i64,
        expires: DateTime<Utc>,
    ) -> Self {
        Self {
            name: config.name.clone(),
            value,
            path: config.path.clone(),
            domain: config.domain.clone(),
            max_age,
            expires,
            secure: config.secure,
            http_only: config.http_only,
            same_site: config.same_site,
        }
    }
}

impl fmt::Display for SessionCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}; Path={}", self.name, self.value, self.path)?;
        if let Some(domain) = &self.domain {
            write!(f, "; Domain={domain}")?;
        }
        write!(
            f,
            "; Max-Age={}; Expires={}",
            self.max_age,
            self.expires.format(EXPIRES_FORMAT)
        )?;
        if self.secure {
            f.write_str("; Secure")?;
        }
        if self.http_only {
            f.write_str("; HttpOnly")?;
        }
        write!(f, "; SameSite={}", self.same_site)
    }
}
