// src/facade.rs

//! Maps facade requests onto node JSON-RPC calls and reshapes the results.
//!
//! Upstream failures are soft: the call is logged and the record, or the
//! field, is left at its zero value. Only the node-local file reads of the
//! status aggregation can fail a request.

use crate::config::NodeConfig;
use crate::node_files::NodeFiles;
use crate::Result;
use raftscope_core::{
    quantity, AdminInfo, AdminPeers, BlockDetailsResponse, ConnectionInfo, NodeInfo,
    TransactionDetailsResponse, PENDING_TX_ID,
};
use raftscope_rpc::{methods, RpcClient, RpcTransport};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Result of a transaction lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TransactionLookup {
    /// A single transaction looked up by hash
    Single(TransactionDetailsResponse),

    /// The pending list, selected by the `pending` id
    Pending(Vec<TransactionDetailsResponse>),
}

/// Stateless facade over one node endpoint
#[derive(Clone)]
pub struct NodeFacade {
    /// Transport to the node
    rpc: Arc<dyn RpcTransport>,

    /// Node-local files
    files: NodeFiles,
}

impl NodeFacade {
    /// Creates a facade over an existing transport
    pub fn new(rpc: Arc<dyn RpcTransport>, files: NodeFiles) -> Self {
        Self { rpc, files }
    }

    /// Creates a facade with an HTTP client built from configuration
    pub fn from_config(config: &NodeConfig) -> Result<Self> {
        let client = match config.rpc.timeout_secs {
            Some(secs) => RpcClient::with_timeout(config.rpc.url.as_str(), Duration::from_secs(secs))?,
            None => RpcClient::new(config.rpc.url.as_str()),
        };

        Ok(Self::new(Arc::new(client), NodeFiles::new(config.node_files.clone())))
    }

    /// Looks up a transaction by hash, or lists the pending transactions
    /// when `id` is `pending`
    pub async fn fetch_transaction(&self, id: &str) -> TransactionLookup {
        if id == PENDING_TX_ID {
            return TransactionLookup::Pending(self.fetch_pending_transactions().await);
        }

        TransactionLookup::Single(
            self.request_or_default(methods::GET_TRANSACTION_BY_HASH, vec![json!(id)])
                .await,
        )
    }

    /// Fetches a block with full transaction objects
    pub async fn fetch_block(&self, number: u64) -> BlockDetailsResponse {
        let params = vec![json!(quantity::encode(number)), json!(true)];
        self.request_or_default(methods::GET_BLOCK_BY_NUMBER, params)
            .await
    }

    /// Lists the node's pending transactions
    pub async fn fetch_pending_transactions(&self) -> Vec<TransactionDetailsResponse> {
        self.request_or_default(methods::PENDING_TRANSACTIONS, vec![])
            .await
    }

    /// Finds a connected peer by id; the first match in list order wins.
    ///
    /// Entries are decoded one at a time, so an entry that cannot be read
    /// is skipped without hiding the others.
    pub async fn fetch_peer(&self, peer_id: &str) -> AdminPeers {
        let peers: Vec<Value> = self.request_or_default(methods::ADMIN_PEERS, vec![]).await;

        peers
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<AdminPeers>(entry) {
                Ok(peer) => Some(peer),
                Err(e) => {
                    warn!(method = methods::ADMIN_PEERS, error = %e, "skipping unreadable peer entry");
                    None
                }
            })
            .find(|peer| peer.has_id(peer_id))
            .unwrap_or_default()
    }

    /// Aggregates this node's configuration, identity and chain state.
    ///
    /// The node-local files are read first; any failure there is returned.
    /// The RPC calls are then issued concurrently and each one that fails
    /// leaves its field at zero.
    pub async fn fetch_current_node_status(&self) -> Result<NodeInfo> {
        let settings = self.files.connection_settings().await?;
        let raft_id = self.files.raft_id().await?;
        let genesis = self.files.genesis().await?;

        let (admin_info, pending, block_number, raft_role) = tokio::join!(
            self.request_or_default::<AdminInfo>(methods::ADMIN_NODE_INFO, vec![]),
            self.fetch_pending_transactions(),
            self.fetch_block_number(),
            self.fetch_raft_role(),
        );

        Ok(NodeInfo {
            connection_info: ConnectionInfo {
                ip: settings.ip,
                port: settings.rpc_port,
                enode: admin_info.enode.clone().unwrap_or_default(),
            },
            raft_role,
            raft_id,
            block_number,
            pending_tx_count: pending.len(),
            genesis,
            admin_info,
        })
    }

    async fn fetch_block_number(&self) -> u64 {
        soften(methods::BLOCK_NUMBER, self.read_block_number().await)
    }

    async fn read_block_number(&self) -> Result<u64> {
        let raw: String = self.request(methods::BLOCK_NUMBER, vec![]).await?;
        Ok(quantity::decode(&raw)?)
    }

    async fn fetch_raft_role(&self) -> String {
        let role: String = self.request_or_default(methods::RAFT_ROLE, vec![]).await;
        role.trim_end_matches('\n').to_string()
    }

    /// Calls `method` and decodes the result; `null` decodes as the default
    async fn request<T>(&self, method: &str, params: Vec<Value>) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        debug!(method, "calling node");
        let value = self.rpc.call(method, params).await?;
        let decoded: Option<T> = serde_json::from_value(value)?;
        Ok(decoded.unwrap_or_default())
    }

    async fn request_or_default<T>(&self, method: &str, params: Vec<Value>) -> T
    where
        T: DeserializeOwned + Default,
    {
        soften(method, self.request(method, params).await)
    }
}

/// Falls back to the default on a failed node call.
///
/// Recoverable failures only degrade the field and are logged as warnings.
fn soften<T: Default>(method: &str, result: Result<T>) -> T {
    result.unwrap_or_else(|e| {
        if e.is_recoverable() {
            warn!(method, error = %e, "node call failed, using default");
        } else {
            error!(method, error = %e, "unexpected failure in node call, using default");
        }
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NodeFilesConfig;
    use crate::NodeError;
    use raftscope_rpc::{MockTransport, RecordedCall, RpcError};

    fn facade(mock: MockTransport) -> (NodeFacade, Arc<MockTransport>) {
        let mock = Arc::new(mock);
        let facade = NodeFacade::new(mock.clone(), NodeFiles::new(NodeFilesConfig::default()));
        (facade, mock)
    }

    #[tokio::test]
    async fn test_fetch_transaction_single_call() {
        let (facade, mock) = facade(MockTransport::new().with_result(
            methods::GET_TRANSACTION_BY_HASH,
            json!({"hash": "0xabc", "from": "0x1", "to": "0x2", "value": "0x5"}),
        ));

        let lookup = facade.fetch_transaction("0xabc").await;

        assert_eq!(
            mock.calls(),
            vec![RecordedCall {
                method: "eth_getTransactionByHash".to_string(),
                params: vec![json!("0xabc")],
            }]
        );
        match lookup {
            TransactionLookup::Single(tx) => {
                assert_eq!(tx.hash.as_deref(), Some("0xabc"));
                assert_eq!(tx.from.as_deref(), Some("0x1"));
                assert_eq!(tx.to.as_deref(), Some("0x2"));
                assert_eq!(tx.value.as_deref(), Some("0x5"));
                assert!(tx.gas.is_none());
                assert!(tx.block_hash.is_none());
            }
            other => panic!("expected a single transaction, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_transaction_pending_overload() {
        let pending = json!([{"hash": "0x01"}, {"hash": "0x02"}]);
        let (facade, mock) =
            facade(MockTransport::new().with_result(methods::PENDING_TRANSACTIONS, pending.clone()));

        let lookup = facade.fetch_transaction("pending").await;
        let direct = facade.fetch_pending_transactions().await;

        assert_eq!(lookup, TransactionLookup::Pending(direct));
        assert_eq!(serde_json::to_value(&lookup).unwrap(), pending);
        assert_eq!(mock.calls_to(methods::PENDING_TRANSACTIONS), 2);
        assert_eq!(mock.calls_to(methods::GET_TRANSACTION_BY_HASH), 0);
        assert!(mock.calls().iter().all(|c| c.params.is_empty()));
    }

    #[tokio::test]
    async fn test_fetch_transaction_failure_is_zero_value() {
        let (facade, _) = facade(MockTransport::new().with_error(
            methods::GET_TRANSACTION_BY_HASH,
            RpcError::Transport("connection refused".to_string()),
        ));

        let lookup = facade.fetch_transaction("0xabc").await;
        assert_eq!(lookup, TransactionLookup::Single(TransactionDetailsResponse::default()));
        assert_eq!(serde_json::to_string(&lookup).unwrap(), "{}");
    }

    #[tokio::test]
    async fn test_fetch_transaction_unknown_hash() {
        let (facade, _) =
            facade(MockTransport::new().with_result(methods::GET_TRANSACTION_BY_HASH, Value::Null));

        let lookup = facade.fetch_transaction("0xdead").await;
        assert_eq!(lookup, TransactionLookup::Single(TransactionDetailsResponse::default()));
    }

    #[tokio::test]
    async fn test_fetch_block_hex_argument() {
        let (facade, mock) = facade(MockTransport::new().with_result(
            methods::GET_BLOCK_BY_NUMBER,
            json!({"number": "0xff", "transactions": [{"hash": "0x01"}], "uncles": []}),
        ));

        let block = facade.fetch_block(255).await;
        facade.fetch_block(0).await;

        assert_eq!(block.number, "0xff");
        assert_eq!(block.transactions.len(), 1);

        let calls = mock.calls();
        assert_eq!(calls[0].params, vec![json!("0xff"), json!(true)]);
        assert_eq!(calls[1].params, vec![json!("0x0"), json!(true)]);
    }

    #[tokio::test]
    async fn test_fetch_block_decode_failure() {
        let (facade, _) =
            facade(MockTransport::new().with_result(methods::GET_BLOCK_BY_NUMBER, json!("not a block")));

        assert_eq!(facade.fetch_block(1).await, BlockDetailsResponse::default());
    }

    #[tokio::test]
    async fn test_fetch_pending_empty_on_failure() {
        let (facade, _) = facade(MockTransport::new());
        assert!(facade.fetch_pending_transactions().await.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_peer() {
        let (facade, mock) = facade(MockTransport::new().with_result(
            methods::ADMIN_PEERS,
            json!([{"id": "p1", "name": "A"}, {"id": "p2", "name": "B"}]),
        ));

        let found = facade.fetch_peer("p2").await;
        assert_eq!(serde_json::to_value(&found).unwrap(), json!({"id": "p2", "name": "B"}));

        let missing = facade.fetch_peer("p3").await;
        assert_eq!(missing, AdminPeers::default());
        assert_eq!(serde_json::to_string(&missing).unwrap(), "{}");

        assert_eq!(mock.calls_to(methods::ADMIN_PEERS), 2);
    }

    #[tokio::test]
    async fn test_fetch_peer_behind_handshake_peer() {
        let (facade, _) = facade(MockTransport::new().with_result(
            methods::ADMIN_PEERS,
            json!([
                {"id": "p1", "protocols": {"eth": "handshake"}},
                "garbage",
                {"id": "p2", "name": "B", "protocols": {"eth": "unknown"}}
            ]),
        ));

        assert_eq!(facade.fetch_peer("p2").await.name.as_deref(), Some("B"));
        assert!(facade.fetch_peer("p1").await.has_id("p1"));
    }

    #[tokio::test]
    async fn test_node_info_with_oversized_difficulty() {
        let (facade, _) = facade(MockTransport::new().with_result(
            methods::ADMIN_NODE_INFO,
            json!({
                "id": "44826a5d",
                "enode": "enode://44826a5d@10.0.0.1:21000",
                "protocols": {"eth": {"network": 1101, "difficulty": 5.875e22}}
            }),
        ));

        let info: AdminInfo = facade.request_or_default(methods::ADMIN_NODE_INFO, vec![]).await;
        assert_eq!(info.enode.as_deref(), Some("enode://44826a5d@10.0.0.1:21000"));
        assert_eq!(info.id.as_deref(), Some("44826a5d"));
    }

    #[tokio::test]
    async fn test_fetch_peer_first_duplicate_wins() {
        let (facade, _) = facade(MockTransport::new().with_result(
            methods::ADMIN_PEERS,
            json!([{"id": "p1", "name": "first"}, {"id": "p1", "name": "second"}]),
        ));

        assert_eq!(facade.fetch_peer("p1").await.name.as_deref(), Some("first"));
    }

    #[tokio::test]
    async fn test_fetch_peer_case_sensitive() {
        let (facade, _) =
            facade(MockTransport::new().with_result(methods::ADMIN_PEERS, json!([{"id": "abc"}])));

        assert_eq!(facade.fetch_peer("ABC").await, AdminPeers::default());
    }

    #[tokio::test]
    async fn test_block_number_and_role_trimming() {
        let (facade, _) = facade(
            MockTransport::new()
                .with_result(methods::BLOCK_NUMBER, json!("0x2a\n"))
                .with_result(methods::RAFT_ROLE, json!("minter\n")),
        );

        assert_eq!(facade.fetch_block_number().await, 42);
        assert_eq!(facade.fetch_raft_role().await, "minter");
    }

    #[tokio::test]
    async fn test_block_number_soft_failure() {
        let (facade, _) = facade(MockTransport::new().with_result(methods::BLOCK_NUMBER, json!("0xzz")));
        assert_eq!(facade.fetch_block_number().await, 0);

        let err = facade.read_block_number().await.unwrap_err();
        assert!(matches!(err, NodeError::DecodeError(_)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_soften_defaults_every_failure_class() {
        let upstream: Result<u64> = Err(RpcError::MissingResult.into());
        assert_eq!(soften(methods::BLOCK_NUMBER, upstream), 0);

        let local: Result<String> = Err(NodeError::MalformedScript("short".to_string()));
        assert_eq!(soften(methods::RAFT_ROLE, local), "");

        assert_eq!(soften(methods::BLOCK_NUMBER, Ok(7u64)), 7);
    }
}
