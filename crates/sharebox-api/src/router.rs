//! Route definitions for the Sharebox HTTP API.
//!
//! Routes are grouped by domain. Every route, and the fallback, sits behind
//! the access middleware, so a request the authorizer denies gets a 403 even
//! when no handler exists for it.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, options, patch, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes, access control, and request logging.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(admin_user_routes())
        .merge(role_routes())
        .merge(settings_routes())
        .fallback(handlers::not_found)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::access::authorize,
        ))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Login, logout, and session check
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/users/login", post(handlers::auth::login))
        .route("/v1/users/logout", post(handlers::auth::logout))
        .route("/v1/users/isauthed", get(handlers::auth::is_authed))
}

/// User self-service
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/users/self", get(handlers::user::self_profile))
        .route("/v1/users/pwd", patch(handlers::user::set_password))
        .route(
            "/v1/users/preferences",
            patch(handlers::user::set_preferences),
        )
}

/// Admin user management
fn admin_user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/v1/users/",
            post(handlers::admin::users::add_user)
                .delete(handlers::admin::users::delete_user)
                .patch(handlers::admin::users::set_user),
        )
        .route(
            "/v1/users/pwd/force-set",
            patch(handlers::admin::users::force_set_password),
        )
        .route("/v1/users/list", get(handlers::admin::users::list_users))
}

/// Admin role management
fn role_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/v1/roles/",
            post(handlers::admin::roles::add_role).delete(handlers::admin::roles::delete_role),
        )
        .route("/v1/roles/list", get(handlers::admin::roles::list_roles))
}

/// Settings endpoints
fn settings_routes() -> Router<AppState> {
    Router::new().route("/v1/settings/health", options(handlers::health::health))
}
