// src/client.rs

//! HTTP JSON-RPC client for a single node endpoint.

use crate::errors::{Result, RpcError};
use crate::transport::RpcTransport;
use crate::{RpcRequest, RpcResponse};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::debug;

/// RPC client for connecting to a node
pub struct RpcClient {
    /// Endpoint URL
    endpoint: String,

    /// Pooled HTTP client
    client: reqwest::Client,

    /// Next request id
    request_id: AtomicU64,
}

impl RpcClient {
    /// Creates a new RPC client without a request timeout
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
            request_id: AtomicU64::new(1),
        }
    }

    /// Creates a new RPC client whose requests give up after `timeout`
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RpcError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
            request_id: AtomicU64::new(1),
        })
    }

    /// Endpoint this client talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn next_id(&self) -> u64 {
        self.request_id.fetch_add(1, Ordering::SeqCst)
    }
}

#[async_trait]
impl RpcTransport for RpcClient {
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        let request = RpcRequest::new(self.next_id(), method, params);
        debug!(method, id = request.id, endpoint = %self.endpoint, "sending RPC request");

        let response: RpcResponse = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?
            .json()
            .await?;

        response.into_result()
    }
}
