// src/transport.rs

//! The seam between the facade and a node.

use crate::errors::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Sends one JSON-RPC call and returns the raw result.
///
/// A `null` result is returned as `Value::Null`; interpreting it is left to
/// the caller.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    /// Calls `method` with positional `params`
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value>;
}

