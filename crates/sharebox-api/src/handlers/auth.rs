//! Auth handlers: login, logout, and session check.

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::dto::request::LoginRequest;
use crate::dto::response::{LoginResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /v1/users/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state.session_manager.login(&req.user, &req.pwd).await?;

    Ok((
        [(header::SET_COOKIE, result.cookie.to_string())],
        Json(LoginResponse {
            token: result.token,
        }),
    ))
}

/// POST /v1/users/logout
///
/// Only clears the cookie; the token itself stays valid until it expires.
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(
            header::SET_COOKIE,
            state.session_manager.logout_cookie().to_string(),
        )],
        Json(MessageResponse::ok()),
    )
}

/// GET /v1/users/isauthed
pub async fn is_authed(_auth: AuthUser) -> Json<MessageResponse> {
    Json(MessageResponse::ok())
}
