//! Project configuration (`genlayer.json`).
//!
//! Read and written only by the CLI glue; the binder and validator never touch it.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DevkitError, Result};

/// File name of the project configuration.
pub const CONFIG_FILE: &str = "genlayer.json";

/// Config schema version written by `init`.
pub const GENLAYER_VERSION: &str = "1.0";

/// Connection details for one named network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub rpc_url: String,
    pub network_id: String,
}

/// Top-level `genlayer.json` contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub project_name: String,
    /// Archetype the project was initialized from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    pub genlayer_version: String,
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkConfig>,
}

impl ProjectConfig {
    /// Config written by `init`, with the public testnet and mainnet endpoints.
    pub fn default_for_project(project_name: &str, template: Option<&str>) -> Self {
        Self {
            project_name: project_name.to_string(),
            template: template.map(str::to_string),
            genlayer_version: GENLAYER_VERSION.to_string(),
            networks: default_networks(),
        }
    }

    /// Look up a network by name.
    pub fn network(&self, name: &str) -> Result<&NetworkConfig> {
        self.networks
            .get(name)
            .ok_or_else(|| DevkitError::UnknownNetwork {
                name: name.to_string(),
                configured: self.networks.keys().cloned().collect::<Vec<_>>().join(", "),
            })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| DevkitError::ConfigNotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&contents).map_err(|e| DevkitError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json().map_err(|e| DevkitError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        crate::project::write_atomic(path, json.as_bytes())
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

fn default_networks() -> BTreeMap<String, NetworkConfig> {
    [
        ("testnet", "https://rpc.testnet.genlayer.com"),
        ("mainnet", "https://rpc.mainnet.genlayer.com"),
    ]
    .into_iter()
    .map(|(id, url)| {
        (
            id.to_string(),
            NetworkConfig {
                rpc_url: url.to_string(),
                network_id: id.to_string(),
            },
        )
    })
    .collect()
}
