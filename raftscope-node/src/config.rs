// src/config.rs

//! Node facade configuration.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Complete facade configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Upstream JSON-RPC configuration
    pub rpc: RpcConfig,

    /// HTTP server configuration
    pub server: ServerConfig,

    /// Node-local files describing this node
    pub node_files: NodeFilesConfig,

    /// What to do when a node-local file cannot be read
    pub local_failure: LocalFailurePolicy,
}

/// Upstream JSON-RPC configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RpcConfig {
    /// Node JSON-RPC endpoint
    pub url: String,

    /// Request timeout in seconds, none when unset
    pub timeout_secs: Option<u64>,
}

/// HTTP server configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Facade listen address
    pub listen_addr: SocketAddr,
}

/// Locations of the node-local files
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeFilesConfig {
    /// Properties file holding `CURRENT_IP` and `RPC_PORT`
    pub setup_conf: PathBuf,

    /// Directory holding the node's `start_*.sh` script
    pub scripts_dir: PathBuf,

    /// Genesis file
    pub genesis: PathBuf,
}

/// Handling of unreadable node-local files in the status aggregation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocalFailurePolicy {
    /// Answer the request with HTTP 500
    #[default]
    Respond,

    /// Log and terminate the process
    Abort,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:22000".to_string(),
            timeout_secs: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
        }
    }
}

impl Default for NodeFilesConfig {
    fn default() -> Self {
        Self {
            setup_conf: PathBuf::from("/home/setup.conf"),
            scripts_dir: PathBuf::from("/home/node"),
            genesis: PathBuf::from("/home/node/genesis.json"),
        }
    }
}

impl NodeConfig {
    /// Loads configuration from file
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| crate::NodeError::io(path, e))?;
        serde_json::from_str(&contents)
            .map_err(|e| crate::NodeError::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Saves configuration to file
    pub fn save_to_file(&self, path: &Path) -> crate::Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| crate::NodeError::ConfigError(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents).map_err(|e| crate::NodeError::io(path, e))?;
        Ok(())
    }
}
