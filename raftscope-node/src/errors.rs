// src/errors.rs

//! Error types for node operations.
//!
//! Errors fall in two classes. Recoverable errors come from talking to the
//! node: the facade logs them and leaves the affected field at its default.
//! Everything else fails the request.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for node operations
#[derive(Debug, Error)]
pub enum NodeError {
    /// Upstream JSON-RPC call failed
    #[error("RPC error: {0}")]
    RpcError(#[from] raftscope_rpc::RpcError),

    /// Upstream result had an unexpected shape
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// Configuration error
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Local file or directory could not be read
    #[error("I/O error on {}: {source}", .path.display())]
    IoError {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// No `start_*.sh` script in the scripts directory
    #[error("No start script found in {}", .0.display())]
    ScriptNotFound(PathBuf),

    /// Start script does not carry a raft id on its fifth line
    #[error("Malformed start script: {0}")]
    MalformedScript(String),

    /// Missing or invalid key in the properties file
    #[error("Property error: {0}")]
    PropertyError(String),

    /// HTTP server error
    #[error("Server error: {0}")]
    ServerError(String),
}

impl NodeError {
    /// Wraps an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        NodeError::IoError {
            path: path.into(),
            source,
        }
    }

    /// True for failures that only degrade a single field
    pub fn is_recoverable(&self) -> bool {
        matches!(self, NodeError::RpcError(_) | NodeError::DecodeError(_))
    }
}

impl From<serde_json::Error> for NodeError {
    fn from(err: serde_json::Error) -> Self {
        NodeError::DecodeError(format!("JSON error: {}", err))
    }
}

impl From<raftscope_core::CoreError> for NodeError {
    fn from(err: raftscope_core::CoreError) -> Self {
        NodeError::DecodeError(format!("{}", err))
    }
}

/// Result type alias for node operations
pub type Result<T> = std::result::Result<T, NodeError>;
