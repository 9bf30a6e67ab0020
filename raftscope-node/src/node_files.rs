// src/node_files.rs

//! Node-local files that describe this node: the setup properties, the
//! generated `start_<id>.sh` script and the genesis file.
//!
//! Every failure here is unrecoverable for the status request.

use crate::config::NodeFilesConfig;
use crate::properties::Properties;
use crate::{NodeError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Property holding this node's IP address
pub const CURRENT_IP_KEY: &str = "CURRENT_IP";

/// Property holding this node's JSON-RPC port
pub const RPC_PORT_KEY: &str = "RPC_PORT";

/// Name pattern of the generated startup script
pub const START_SCRIPT_PATTERN: &str = r"^start_[A-Za-z0-9]*\.sh$";

/// Zero-based line of the startup script carrying the raft id
pub const RAFT_ID_LINE: usize = 4;

/// Configured address of this node
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionSettings {
    /// Value of `CURRENT_IP`
    pub ip: String,
    /// Value of `RPC_PORT`
    pub rpc_port: u16,
}

/// Reader for the node-local files
#[derive(Clone, Debug)]
pub struct NodeFiles {
    config: NodeFilesConfig,
}

impl NodeFiles {
    /// Creates a reader over the configured paths
    pub fn new(config: NodeFilesConfig) -> Self {
        Self { config }
    }

    /// Reads `CURRENT_IP` and `RPC_PORT` from the properties file
    pub async fn connection_settings(&self) -> Result<ConnectionSettings> {
        let contents = read_text(&self.config.setup_conf).await?;
        let props = Properties::parse(&contents);

        let ip = props.require(CURRENT_IP_KEY)?.to_string();
        let port = props.require(RPC_PORT_KEY)?;
        let rpc_port = port
            .parse()
            .map_err(|_| NodeError::PropertyError(format!("invalid {}: {:?}", RPC_PORT_KEY, port)))?;

        Ok(ConnectionSettings { ip, rpc_port })
    }

    /// Locates the startup script in the scripts directory.
    ///
    /// Entries are visited in name order and the last match wins.
    pub async fn find_start_script(&self) -> Result<PathBuf> {
        let dir = &self.config.scripts_dir;
        let pattern = Regex::new(START_SCRIPT_PATTERN)
            .map_err(|e| NodeError::ConfigError(format!("Invalid script pattern: {}", e)))?;

        let mut entries = tokio::fs::read_dir(dir).await.map_err(|e| NodeError::io(dir, e))?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| NodeError::io(dir, e))? {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();

        let matches: Vec<&String> = names.iter().filter(|name| pattern.is_match(name)).collect();
        if matches.len() > 1 {
            warn!(dir = %dir.display(), count = matches.len(), "several start scripts found, using the last");
        }

        matches
            .last()
            .map(|name| dir.join(name.as_str()))
            .ok_or_else(|| NodeError::ScriptNotFound(dir.clone()))
    }

    /// Reads the raft id from the startup script
    pub async fn raft_id(&self) -> Result<u64> {
        let script = self.find_start_script().await?;
        debug!(script = %script.display(), "reading raft id");

        let contents = read_text(&script).await?;
        parse_raft_id(&contents)
    }

    /// Reads the genesis file with every newline removed
    pub async fn genesis(&self) -> Result<String> {
        let contents = read_text(&self.config.genesis).await?;
        Ok(strip_newlines(&contents))
    }
}

/// Extracts the raft id from the text of a startup script.
///
/// The fifth line has the form `<key>=<raftID>`; the segment after the first
/// `=` is the id.
pub fn parse_raft_id(script: &str) -> Result<u64> {
    let line = script.split('\n').nth(RAFT_ID_LINE).ok_or_else(|| {
        NodeError::MalformedScript(format!("expected at least {} lines", RAFT_ID_LINE + 1))
    })?;

    let value = line
        .split('=')
        .nth(1)
        .ok_or_else(|| NodeError::MalformedScript(format!("no '=' in line {:?}", line)))?;

    value
        .trim_end()
        .parse()
        .map_err(|_| NodeError::MalformedScript(format!("invalid raft id {:?}", value)))
}

/// Removes every `\n`
pub fn strip_newlines(contents: &str) -> String {
    contents.replace('\n', "")
}

async fn read_text(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| NodeError::io(path, e))
}
