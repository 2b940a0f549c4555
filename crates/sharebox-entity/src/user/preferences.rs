//! Client-side preferences stored with each user.

use serde::{Deserialize, Serialize};

/// Background image settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BgConfig {
    pub url: String,
    pub repeat: String,
    pub position: String,
    pub align: String,
}

impl Default for BgConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            repeat: "repeat".to_string(),
            position: "center".to_string(),
            align: "fixed".to_string(),
        }
    }
}

/// Per-user UI preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub bg: BgConfig,
    #[serde(rename = "cssURL")]
    pub css_url: String,
    #[serde(rename = "lanPackURL")]
    pub lan_pack_url: String,
    pub lan: String,
    pub theme: String,
    pub avatar: String,
    pub email: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            bg: BgConfig::default(),
            css_url: String::new(),
            lan_pack_url: String::new(),
            lan: "en_US".to_string(),
            theme: "light".to_string(),
            avatar: String::new(),
            email: String::new(),
        }
    }
}
