//! Button layout file configuration.

use serde::{Deserialize, Serialize};

/// Location of the persisted button layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Path to the JSON layout file.
    #[serde(default = "default_path")]
    pub path: String,
    /// Write the default layout when the file does not exist.
    #[serde(default = "default_true")]
    pub create_if_missing: bool,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            create_if_missing: true,
        }
    }
}

fn default_path() -> String {
    "webdeckCfg.json".to_string()
}

fn default_true() -> bool {
    true
}
