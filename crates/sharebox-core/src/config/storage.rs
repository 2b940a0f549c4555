//! Home-folder provisioning configuration.

use serde::{Deserialize, Serialize};

/// Where per-user folders are provisioned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory under which user home folders are created.
    #[serde(default = "default_root")]
    pub root: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
        }
    }
}

fn default_root() -> String {
    "data/files".to_string()
}
