//! Access middleware: resolves the caller's role and asks the authorizer.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use tracing::{debug, warn};

use sharebox_core::error::AppError;
use sharebox_entity::user::Role;

use crate::error::ApiError;
use crate::state::AppState;

/// Denies any request the authorizer does not allow for the caller's role.
///
/// Requests without a valid session cookie act as the visitor role. On
/// success the validated claims are stored in the request extensions.
pub async fn authorize(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let token = jar
        .get(state.session_manager.cookie_name())
        .map(|cookie| cookie.value())
        .filter(|value| !value.is_empty());

    let claims = match token {
        Some(token) => match state.session_manager.extract_claims(token) {
            Ok(claims) => Some(claims),
            Err(e) => {
                debug!(error = %e, "Ignoring invalid session token");
                None
            }
        },
        None => None,
    };
    let role = claims
        .as_ref()
        .map(|c| c.role.clone())
        .unwrap_or_else(Role::visitor);

    let method = request.method().as_str().to_string();
    let path = request.uri().path().to_string();
    if !state.authorizer.is_allowed(role.as_str(), &method, &path) {
        warn!(role = %role, method = %method, path = %path, "Access denied");
        return ApiError::from(AppError::forbidden("Access denied")).into_response();
    }

    if let Some(claims) = claims {
        request.extensions_mut().insert(claims);
    }
    next.run(request).await
}
