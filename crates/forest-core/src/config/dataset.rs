//! Folder dataset configuration.

use serde::{Deserialize, Serialize};

/// Where the folder forest is loaded from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path to the JSON folder dataset.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

fn default_path() -> String {
    "data/sample.json".to_string()
}
