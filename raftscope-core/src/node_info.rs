// src/node_info.rs

//! Aggregated status of the local node.

use crate::admin::AdminInfo;
use crate::serde_helper::is_zero;
use serde::{Deserialize, Serialize};

/// How to reach a node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionInfo {
    /// Configured IP address
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ip: String,

    /// Configured JSON-RPC port
    #[serde(skip_serializing_if = "is_zero")]
    pub port: u16,

    /// Enode URL reported by the node
    #[serde(skip_serializing_if = "String::is_empty")]
    pub enode: String,
}

/// Join of the local node's configuration, identity and chain state.
///
/// Each member comes from a separate source; a member whose RPC call failed
/// stays at its zero value and is omitted, except `pendingTxCount`,
/// `connectionInfo` and `adminInfo`, which are always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeInfo {
    /// Address and identity of this node
    pub connection_info: ConnectionInfo,

    /// Raft role, e.g. `minter` or `verifier`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub raft_role: String,

    /// Raft id from the node startup script
    #[serde(rename = "raftID", skip_serializing_if = "is_zero")]
    pub raft_id: u64,

    /// Current block number
    #[serde(skip_serializing_if = "is_zero")]
    pub block_number: u64,

    /// Number of pending transactions
    pub pending_tx_count: usize,

    /// Genesis file contents with newlines removed
    #[serde(skip_serializing_if = "String::is_empty")]
    pub genesis: String,

    /// Output of `admin_nodeInfo`
    pub admin_info: AdminInfo,
}
