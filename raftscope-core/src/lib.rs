// src/lib.rs

//! # Raftscope Core
//!
//! Data model shared by the Raftscope facade: the simplified JSON documents
//! returned to HTTP clients and the decoding rules applied to a node's raw
//! JSON-RPC output.
//!
//! ## Records
//!
//! - [`TransactionDetailsResponse`]: a transaction, hex fields kept opaque
//! - [`BlockDetailsResponse`]: a block header with its full transactions
//! - [`AdminInfo`] / [`AdminPeers`]: the node's own and its peers' admin view
//! - [`NodeInfo`]: the aggregated status of the local node
//!
//! ## Example Usage
//!
//! ```rust
//! use raftscope_core::{quantity, TransactionDetailsResponse};
//!
//! assert_eq!(quantity::encode(255), "0xff");
//!
//! let tx: TransactionDetailsResponse =
//!     serde_json::from_str(r#"{"hash":"0xabc","to":null}"#).unwrap();
//! assert_eq!(tx.hash.as_deref(), Some("0xabc"));
//! assert!(tx.to.is_none());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod admin;
pub mod block;
pub mod errors;
pub mod node_info;
pub mod quantity;
pub mod serde_helper;
pub mod transaction;

// Re-export commonly used types
pub use crate::admin::{AdminInfo, AdminPeers, Eth, Ports, PeerNetwork, Protocols};
pub use crate::block::BlockDetailsResponse;
pub use crate::errors::{CoreError, Result};
pub use crate::node_info::{ConnectionInfo, NodeInfo};
pub use crate::transaction::TransactionDetailsResponse;

/// Sentinel transaction id that selects the pending-transaction list
pub const PENDING_TX_ID: &str = "pending";
