// src/lib.rs

//! # Raftscope Node
//!
//! REST facade over a Quorum node's JSON-RPC interface.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         REST Server (axum)              │
//! │  /transaction  /block  /peer  /node     │
//! ├─────────────────────────────────────────┤
//! │           NodeFacade                    │
//! ├──────────────────────┬──────────────────┤
//! │  RpcTransport        │  NodeFiles       │
//! │  (raftscope-rpc)     │  setup.conf,     │
//! │                      │  start_*.sh,     │
//! │                      │  genesis.json    │
//! ├──────────────────────┴──────────────────┤
//! │         Data model (raftscope-core)     │
//! └─────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod errors;
pub mod facade;
pub mod node_files;
pub mod properties;
pub mod server;

// Re-export commonly used types
pub use crate::config::{LocalFailurePolicy, NodeConfig};
pub use crate::errors::{NodeError, Result};
pub use crate::facade::{NodeFacade, TransactionLookup};
pub use crate::node_files::NodeFiles;
pub use crate::server::{router, AppState, HttpServer};

/// Node facade version
pub const NODE_VERSION: &str = env!("CARGO_PKG_VERSION");
