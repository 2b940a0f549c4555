//! Session lifecycle manager: login, logout, and claim extraction.

use std::sync::Arc;

use tracing::{error, info, warn};

use sharebox_core::config::{AuthConfig, CookieConfig};
use sharebox_core::error::AppError;
use sharebox_database::UserRepository;

use crate::password::PasswordHasher;
use crate::token::{CLAIM_KEYS, Claims, TokenCodec};

use super::cookie::SessionCookie;

/// Message returned for every failed login, whatever the cause.
pub const INVALID_CREDENTIALS: &str = "invalid user name or password";

/// Password behind the dummy hash. Never stored for any account.
const DUMMY_PASSWORD: &str = "sharebox-unknown-user";

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// Signed session token.
    pub token: String,
    /// Claims embedded in the token.
    pub claims: Claims,
    /// Cookie carrying the token.
    pub cookie: SessionCookie,
}

/// Issues and validates session tokens.
///
/// There is no server-side session store: logging out only clears the
/// browser cookie, and a copied token stays valid until it expires.
#[derive(Clone)]
pub struct SessionManager {
    /// Token signing and verification.
    codec: Arc<TokenCodec>,
    /// User repository.
    user_repo: Arc<dyn UserRepository>,
    /// Password hasher.
    password_hasher: Arc<PasswordHasher>,
    /// Hash checked when the user is unknown, so misses cost as much as hits.
    dummy_hash: String,
    /// Auth configuration.
    auth_config: AuthConfig,
    /// Cookie attributes.
    cookie_config: CookieConfig,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("token_ttl_seconds", &self.auth_config.token_ttl_seconds)
            .field("cookie_config", &self.cookie_config)
            .finish()
    }
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(
        codec: Arc<TokenCodec>,
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<PasswordHasher>,
        auth_config: AuthConfig,
        cookie_config: CookieConfig,
    ) -> Self {
        let dummy_hash = password_hasher
            .hash_password(DUMMY_PASSWORD)
            .unwrap_or_default();
        Self {
            codec,
            user_repo,
            password_hasher,
            dummy_hash,
            auth_config,
            cookie_config,
        }
    }

    /// Name of the cookie carrying the session token.
    pub fn cookie_name(&self) -> &str {
        &self.cookie_config.name
    }

    /// Checks credentials and issues a session token.
    ///
    /// Unknown users and wrong passwords fail with the same error.
    pub async fn login(&self, name: &str, password: &str) -> Result<LoginResult, AppError> {
        let found = self.user_repo.find_by_name(name).await.map_err(|e| {
            error!(error = %e, "User lookup failed during login");
            AppError::internal(format!("Database error: {e}"))
        })?;

        let Some(user) = found else {
            self.burn_dummy_verify(password);
            warn!(user = name, "Login for unknown user");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        // Accounts without a password hash (the visitor) can not log in.
        if user.pwd.is_empty() {
            self.burn_dummy_verify(password);
            warn!(user_id = user.id, "Login to an account without a password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        let password_valid = self
            .password_hasher
            .verify_password(password, &user.pwd)?;
        if !password_valid {
            warn!(user_id = user.id, "Login with wrong password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        let ttl = self.auth_config.token_ttl_seconds;
        let claims = Claims::new(user.id, user.name.clone(), user.role.clone(), ttl);
        let token = self.codec.issue(&claims.to_map())?;
        let cookie = SessionCookie::issue(&self.cookie_config, &token, ttl);

        info!(user_id = user.id, role = %user.role, "Login successful");

        Ok(LoginResult {
            token,
            claims,
            cookie,
        })
    }

    /// Runs one verification against the dummy hash and discards the outcome.
    fn burn_dummy_verify(&self, password: &str) {
        if !self.dummy_hash.is_empty() {
            let _ = self.password_hasher.verify_password(password, &self.dummy_hash);
        }
    }

    /// The cookie that ends a session in the browser.
    pub fn logout_cookie(&self) -> SessionCookie {
        SessionCookie::expired(&self.cookie_config)
    }

    /// Validates a session token and returns its claims.
    ///
    /// Fails on a bad signature, a missing or empty claim, a malformed
    /// `uid` or `expire`, or an expiry in the past.
    pub fn extract_claims(&self, token: &str) -> Result<Claims, AppError> {
        if token.is_empty() {
            return Err(AppError::unauthorized("Session token is missing"));
        }

        let map = self.codec.parse(token, &CLAIM_KEYS)?;
        let claims = Claims::try_from_map(&map)?;
        if claims.is_expired() {
            return Err(AppError::unauthorized("Token has expired"));
        }
        Ok(claims)
    }
}
