//! Access-control policy inputs.

use serde::{Deserialize, Serialize};

/// Inputs to the default access policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Public static path, joined under `/` when building rules.
    #[serde(default = "default_public_path")]
    pub public_path: String,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            public_path: default_public_path(),
        }
    }
}

fn default_public_path() -> String {
    "public".to_string()
}
