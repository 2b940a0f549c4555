//! `AuthUser` extractor: reads the session cookie, validates the token, and
//! injects the caller's context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use sharebox_auth::token::Claims;
use sharebox_core::error::AppError;
use sharebox_service::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // The access middleware leaves validated claims behind.
        if let Some(claims) = parts.extensions.get::<Claims>() {
            return Ok(AuthUser(RequestContext::from(claims)));
        }

        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(state.session_manager.cookie_name())
            .map(|cookie| cookie.value().to_string())
            .ok_or_else(|| AppError::unauthorized("Session cookie is missing"))?;

        let claims = state.session_manager.extract_claims(&token)?;
        Ok(AuthUser(RequestContext::from(&claims)))
    }
}
