//! Request context carrying the authenticated caller.

use sharebox_auth::token::Claims;
use sharebox_entity::user::Role;

/// Context for the current authenticated request.
///
/// Built from validated session claims and passed into service methods so
/// that every operation knows who is acting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// The caller's user id.
    pub user_id: u64,
    /// The caller's user name.
    pub user_name: String,
    /// The caller's role at the time the token was issued.
    pub role: Role,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: u64, user_name: impl Into<String>, role: Role) -> Self {
        Self {
            user_id,
            user_name: user_name.into(),
            role,
        }
    }
}

impl From<&Claims> for RequestContext {
    fn from(claims: &Claims) -> Self {
        Self::new(claims.user_id, claims.user_name.clone(), claims.role.clone())
    }
}
