//! Admin role management handlers.

use axum::Json;
use axum::extract::State;

use sharebox_entity::user::Role;

use crate::dto::request::RoleRequest;
use crate::dto::response::{MessageResponse, RolesResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /v1/roles/
pub async fn add_role(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(req): ValidatedJson<RoleRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .admin_user_service
        .add_role(&Role::new(req.role))
        .await?;
    Ok(Json(MessageResponse::ok()))
}

/// DELETE /v1/roles/
pub async fn delete_role(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(req): ValidatedJson<RoleRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .admin_user_service
        .delete_role(&Role::new(req.role))
        .await?;
    Ok(Json(MessageResponse::ok()))
}

/// GET /v1/roles/list
pub async fn list_roles(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<RolesResponse>, ApiError> {
    let roles = state.admin_user_service.list_roles().await?;
    Ok(Json(RolesResponse::new(roles)))
}
