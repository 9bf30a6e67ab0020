// src/mock.rs

//! In-memory transport that records calls and replays canned replies.

use crate::errors::{Result, RpcError};
use crate::transport::RpcTransport;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// One call seen by [`MockTransport`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    /// Method name
    pub method: String,
    /// Positional parameters
    pub params: Vec<Value>,
}

/// Transport answering from a method → reply table.
///
/// Methods without a reply fail with the standard "method not found" error.
#[derive(Default)]
pub struct MockTransport {
    replies: HashMap<String, Result<Value>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    /// Creates a transport with no replies
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `method` with `result`
    pub fn with_result(mut self, method: &str, result: Value) -> Self {
        self.replies.insert(method.to_string(), Ok(result));
        self
    }

    /// Fails `method` with `error`
    pub fn with_error(mut self, method: &str, error: RpcError) -> Self {
        self.replies.insert(method.to_string(), Err(error));
        self
    }

    /// All calls received so far, in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Number of calls received for `method`
    pub fn calls_to(&self, method: &str) -> usize {
        self.calls().iter().filter(|c| c.method == method).count()
    }
}

#[async_trait]
impl RpcTransport for MockTransport {
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                method: method.to_string(),
                params,
            });
        }

        self.replies.get(method).cloned().unwrap_or_else(|| {
            Err(RpcError::Rpc {
                code: -32601,
                message: format!("the method {} does not exist/is not available", method),
            })
        })
    }
}
