// src/lib.rs

//! # Raftscope RPC
//!
//! JSON-RPC 2.0 plumbing between the facade and an Ethereum-style node.
//!
//! This module provides:
//! - **Wire types**: request, response and error objects
//! - **Transport seam**: the [`RpcTransport`] trait the facade calls through
//! - **HTTP client**: [`RpcClient`], a `reqwest`-backed transport
//! - **Test double**: `MockTransport` behind the `mock` feature
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use raftscope_rpc::{methods, RpcClient, RpcTransport};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = RpcClient::new("http://127.0.0.1:22000");
//!     let height = client.call(methods::BLOCK_NUMBER, vec![]).await.unwrap();
//!     println!("{}", height);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod client;
pub mod errors;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod transport;

// Re-export commonly used types
pub use crate::client::RpcClient;
pub use crate::errors::{RpcError, Result};
#[cfg(any(test, feature = "mock"))]
pub use crate::mock::{MockTransport, RecordedCall};
pub use crate::transport::RpcTransport;

/// JSON-RPC protocol version sent with every request
pub const JSONRPC_VERSION: &str = "2.0";

/// Node RPC methods used by the facade
pub mod methods {
    /// Get a transaction by hash
    pub const GET_TRANSACTION_BY_HASH: &str = "eth_getTransactionByHash";

    /// Get a block by number
    pub const GET_BLOCK_BY_NUMBER: &str = "eth_getBlockByNumber";

    /// List transactions waiting in the pool
    pub const PENDING_TRANSACTIONS: &str = "eth_pendingTransactions";

    /// Get the current block number
    pub const BLOCK_NUMBER: &str = "eth_blockNumber";

    /// List connected peers
    pub const ADMIN_PEERS: &str = "admin_peers";

    /// Get the local node's admin info
    pub const ADMIN_NODE_INFO: &str = "admin_nodeInfo";

    /// Get the local node's raft role
    pub const RAFT_ROLE: &str = "raft_role";
}

/// Standard JSON-RPC request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    /// Protocol version, always `2.0`
    pub jsonrpc: String,
    /// Method name
    pub method: String,
    /// Positional parameters
    pub params: Vec<Value>,
    /// Request id
    pub id: u64,
}

impl RpcRequest {
    /// Creates a new request
    pub fn new(id: u64, method: &str, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.to_string(),
            params,
            id,
        }
    }
}

/// Standard JSON-RPC response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    /// Protocol version
    #[serde(default)]
    pub jsonrpc: String,
    /// Call result; a present `null` is kept as `Some(Value::Null)`
    #[serde(default, deserialize_with = "present_value")]
    pub result: Option<Value>,
    /// Error object, set when the call failed
    #[serde(default)]
    pub error: Option<ErrorObject>,
    /// Id of the matching request
    #[serde(default)]
    pub id: Value,
}

impl RpcResponse {
    /// Converts the response into its result, or the error the node reported
    pub fn into_result(self) -> Result<Value> {
        if let Some(error) = self.error {
            return Err(RpcError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        self.result.ok_or(RpcError::MissingResult)
    }
}

/// JSON-RPC error object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorObject {
    /// Error code
    pub code: i64,
    /// Human readable message
    pub message: String,
    /// Optional extra data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

// Distinguishes `"result": null` from a missing `result` member.
fn present_value<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
