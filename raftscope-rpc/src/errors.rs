// src/errors.rs

//! Error types for JSON-RPC calls.

use thiserror::Error;

/// Main error type for RPC operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RpcError {
    /// Request could not be sent or the reply could not be read
    #[error("Transport error: {0}")]
    Transport(String),

    /// The node answered with a JSON-RPC error object
    #[error("RPC error {code}: {message}")]
    Rpc {
        /// Error code
        code: i64,
        /// Error message
        message: String,
    },

    /// Response carried neither a result nor an error
    #[error("Missing result in RPC response")]
    MissingResult,

    /// Response body was not a JSON-RPC response
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<reqwest::Error> for RpcError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RpcError::Serialization(format!("{}", err))
        } else {
            RpcError::Transport(format!("{}", err))
        }
    }
}

impl From<serde_json::Error> for RpcError {
    fn from(err: serde_json::Error) -> Self {
        RpcError::Serialization(format!("JSON error: {}", err))
    }
}

/// Result type alias for RPC operations
pub type Result<T> = std::result::Result<T, RpcError>;
