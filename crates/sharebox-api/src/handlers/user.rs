//! User self-service handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::request::{SetPasswordRequest, SetPreferencesRequest};
use crate::dto::response::{MessageResponse, SelfResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /v1/users/self
pub async fn self_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<SelfResponse>, ApiError> {
    let profile = state.user_service.profile(auth.context()).await?;
    Ok(Json(profile.into()))
}

/// PATCH /v1/users/pwd
pub async fn set_password(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<SetPasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .user_service
        .change_password(auth.context(), &req.old_pwd, &req.new_pwd)
        .await?;
    Ok(Json(MessageResponse::ok()))
}

/// PATCH /v1/users/preferences
pub async fn set_preferences(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<SetPreferencesRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .user_service
        .set_preferences(auth.context(), req.preferences)
        .await?;
    Ok(Json(MessageResponse::ok()))
}
