//! Session claims carried inside every token.

use std::collections::BTreeMap;

use chrono::Utc;

use sharebox_core::error::AppError;
use sharebox_entity::user::Role;

/// Claim key holding the user id.
pub const CLAIM_UID: &str = "uid";
/// Claim key holding the user name.
pub const CLAIM_USER: &str = "user";
/// Claim key holding the role.
pub const CLAIM_ROLE: &str = "role";
/// Claim key holding the expiry in Unix seconds.
pub const CLAIM_EXPIRE: &str = "expire";

/// Every session token must carry all of these, non-empty.
pub const CLAIM_KEYS: [&str; 4] = [CLAIM_UID, CLAIM_USER, CLAIM_ROLE, CLAIM_EXPIRE];

/// Ordered claim set as it travels inside a token. All values are strings.
pub type ClaimMap = BTreeMap<String, String>;

/// Typed view over a session claim set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Id of the logged-in user.
    pub user_id: u64,
    /// Name of the logged-in user.
    pub user_name: String,
    /// Role at the time of issuance.
    pub role: Role,
    /// Expiration timestamp (seconds since epoch).
    pub expire: i64,
}

impl Claims {
    /// Builds claims that expire `ttl_seconds` from now.
    pub fn new(user_id: u64, user_name: impl Into<String>, role: Role, ttl_seconds: u64) -> Self {
        let ttl = i64::try_from(ttl_seconds).unwrap_or(i64::MAX);
        Self {
            user_id,
            user_name: user_name.into(),
            role,
            expire: Utc::now().timestamp().saturating_add(ttl),
        }
    }

    /// Checks whether these claims have expired.
    pub fn is_expired(&self) -> bool {
        self.expire < Utc::now().timestamp()
    }

    /// Flattens the claims into their wire form.
    pub fn to_map(&self) -> ClaimMap {
        ClaimMap::from([
            (CLAIM_UID.to_string(), self.user_id.to_string()),
            (CLAIM_USER.to_string(), self.user_name.clone()),
            (CLAIM_ROLE.to_string(), self.role.as_str().to_string()),
            (CLAIM_EXPIRE.to_string(), self.expire.to_string()),
        ])
    }

    /// Reads claims back from their wire form.
    ///
    /// Every key must be present and non-empty, and `uid` and `expire` must
    /// be integers.
    pub fn try_from_map(map: &ClaimMap) -> Result<Self, AppError> {
        let get = |key: &str| -> Result<&str, AppError> {
            map.get(key)
                .map(String::as_str)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| AppError::unauthorized(format!("Claim '{key}' is missing")))
        };

        let user_id = get(CLAIM_UID)?
            .parse::<u64>()
            .map_err(|_| AppError::unauthorized("Claim 'uid' is not a valid id"))?;
        let expire = get(CLAIM_EXPIRE)?
            .parse::<i64>()
            .map_err(|_| AppError::unauthorized("Claim 'expire' is not a valid timestamp"))?;

        Ok(Self {
            user_id,
            user_name: get(CLAIM_USER)?.to_string(),
            role: Role::new(get(CLAIM_ROLE)?),
            expire,
        })
    }
}
