//! Admin user management handlers.

use axum::Json;
use axum::extract::State;

use sharebox_service::NewUser;

use crate::dto::request::{
    AddUserRequest, DeleteUserQuery, ForceSetPasswordRequest, SetUserRequest, parse_user_id,
};
use crate::dto::response::{IdResponse, MessageResponse, UsersResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// PATCH /v1/users/pwd/force-set
pub async fn force_set_password(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(req): ValidatedJson<ForceSetPasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_user_id(&req.id)?;
    state
        .admin_user_service
        .force_set_password(id, &req.new_pwd)
        .await?;
    Ok(Json(MessageResponse::ok()))
}

/// POST /v1/users/
pub async fn add_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(req): ValidatedJson<AddUserRequest>,
) -> Result<Json<IdResponse>, ApiError> {
    let id = state
        .admin_user_service
        .add_user(NewUser {
            name: req.name,
            pwd: req.pwd,
            role: req.role,
        })
        .await?;
    Ok(Json(IdResponse::new(id)))
}

/// DELETE /v1/users/?id=N
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedQuery(query): ValidatedQuery<DeleteUserQuery>,
) -> Result<Json<IdResponse>, ApiError> {
    let id = parse_user_id(&query.id)?;
    state
        .admin_user_service
        .delete_user(auth.context(), id)
        .await?;
    Ok(Json(IdResponse::new(id)))
}

/// PATCH /v1/users/
pub async fn set_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(req): ValidatedJson<SetUserRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_user_id(&req.id)?;
    state
        .admin_user_service
        .set_user(id, req.role, req.quota)
        .await?;
    Ok(Json(MessageResponse::ok()))
}

/// GET /v1/users/list
pub async fn list_users(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<UsersResponse>, ApiError> {
    let users = state.admin_user_service.list_users().await?;
    Ok(Json(UsersResponse { users }))
}
