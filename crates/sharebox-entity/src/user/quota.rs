//! Per-user space and transfer limits.

use serde::{Deserialize, Serialize};

/// Space and rate limits applied to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quota {
    /// Maximum stored bytes.
    pub space_limit: i64,
    /// Upload rate limit in bytes per second.
    pub upload_speed_limit: i32,
    /// Download rate limit in bytes per second.
    pub download_speed_limit: i32,
}
