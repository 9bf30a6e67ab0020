// src/admin.rs

//! Administrative views of the local node (`admin_nodeInfo`) and of its
//! connected peers (`admin_peers`).
//!
//! All members are optional and omitted when absent or empty, so a
//! zero-valued record serializes as `{}`. Geth reports some members with a
//! different shape while a peer is mid-handshake (`"eth": "handshake"`);
//! such a member decodes as absent and the rest of the record is kept.

use crate::serde_helper::{is_blank, lenient};
use serde::{Deserialize, Serialize};

/// Eth sub-protocol state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Eth {
    /// Network id
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub network: Option<u64>,

    /// Protocol version
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub version: Option<u64>,

    /// Total difficulty
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub difficulty: Option<u64>,

    /// Genesis block hash
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub genesis: Option<String>,

    /// Head block hash
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub head: Option<String>,
}

/// Protocols spoken by a node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Protocols {
    /// Eth protocol state
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub eth: Option<Eth>,
}

/// Discovery and listener ports
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ports {
    /// UDP discovery port
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub discovery: Option<u16>,

    /// TCP listener port
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub listener: Option<u16>,
}

/// Both ends of a peer connection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PeerNetwork {
    /// Local socket address
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub local_address: Option<String>,

    /// Remote socket address
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub remote_address: Option<String>,
}

/// The local node's self-reported administrative state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdminInfo {
    /// Node id
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub id: Option<String>,

    /// Client name and version
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub name: Option<String>,

    /// Enode URL
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub enode: Option<String>,

    /// Advertised IP address
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub ip: Option<String>,

    /// Discovery and listener ports
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub ports: Option<Ports>,

    /// Listen address
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub listen_addr: Option<String>,

    /// Protocol state
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub protocols: Option<Protocols>,
}

/// One connected peer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminPeers {
    /// Peer id
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub id: Option<String>,

    /// Client name and version
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub name: Option<String>,

    /// Advertised capabilities, e.g. `eth/63`
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub caps: Option<Vec<String>>,

    /// Connection endpoints
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub network: Option<PeerNetwork>,

    /// Protocol state
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub protocols: Option<Protocols>,
}

impl AdminPeers {
    /// Returns true if this peer's id equals `peer_id` exactly
    pub fn has_id(&self, peer_id: &str) -> bool {
        self.id.as_deref() == Some(peer_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_admin_info_decode() {
        let raw = json!({
            "id": "44826a5d",
            "name": "Geth/v1.8.18-stable-quorum-v2.2.1/linux-amd64/go1.10.4",
            "enode": "enode://44826a5d@10.0.0.1:21000?discport=0&raftport=50401",
            "ip": "10.0.0.1",
            "ports": {"discovery": 0, "listener": 21000},
            "listenAddr": "[::]:21000",
            "protocols": {
                "eth": {
                    "network": 1101,
                    "difficulty": 1,
                    "genesis": "0xe8f4",
                    "head": "0x1234",
                    "config": {"chainId": 10}
                }
            }
        });
        let info: AdminInfo = serde_json::from_value(raw).unwrap();

        assert_eq!(info.listen_addr.as_deref(), Some("[::]:21000"));
        assert_eq!(info.ports.as_ref().and_then(|p| p.listener), Some(21000));
        let eth = info.protocols.and_then(|p| p.eth).unwrap();
        assert_eq!(eth.network, Some(1101));
        assert_eq!(eth.head.as_deref(), Some("0x1234"));
        assert!(eth.version.is_none());
    }

    #[test]
    fn test_peer_round_trip_keeps_only_present_fields() {
        let raw = json!({
            "id": "p1",
            "caps": ["eth/63"],
            "network": {"remoteAddress": "10.0.0.2:21000"}
        });
        let peer: AdminPeers = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&peer).unwrap(), raw);
    }

    #[test]
    fn test_handshake_peer_keeps_other_fields() {
        let raw = json!({
            "id": "p1",
            "name": "A",
            "caps": ["eth/63"],
            "protocols": {"eth": "handshake"}
        });
        let peer: AdminPeers = serde_json::from_value(raw).unwrap();

        assert!(peer.has_id("p1"));
        assert_eq!(peer.name.as_deref(), Some("A"));
        assert_eq!(peer.protocols, Some(Protocols::default()));
    }

    #[test]
    fn test_oversized_difficulty_keeps_enode() {
        let raw = json!({
            "id": "44826a5d",
            "enode": "enode://44826a5d@10.0.0.1:21000",
            "protocols": {
                "eth": {"network": 1101, "difficulty": 5.875e22, "head": "0x1234"}
            }
        });
        let info: AdminInfo = serde_json::from_value(raw).unwrap();

        assert_eq!(info.enode.as_deref(), Some("enode://44826a5d@10.0.0.1:21000"));
        let eth = info.protocols.and_then(|p| p.eth).unwrap();
        assert!(eth.difficulty.is_none());
        assert_eq!(eth.network, Some(1101));
        assert_eq!(eth.head.as_deref(), Some("0x1234"));
    }

    #[test]
    fn test_empty_scalars_are_omitted() {
        let raw = json!({
            "name": "",
            "ip": "10.0.0.1",
            "ports": {"discovery": 0, "listener": 21000}
        });
        let info: AdminInfo = serde_json::from_value(raw).unwrap();

        assert_eq!(
            serde_json::to_value(&info).unwrap(),
            json!({"ip": "10.0.0.1", "ports": {"listener": 21000}})
        );
    }

    #[test]
    fn test_zero_values_are_empty_objects() {
        assert_eq!(serde_json::to_string(&AdminPeers::default()).unwrap(), "{}");
        assert_eq!(serde_json::to_string(&AdminInfo::default()).unwrap(), "{}");
    }

    #[test]
    fn test_has_id_is_case_sensitive() {
        let peer = AdminPeers {
            id: Some("abc".to_string()),
            ..Default::default()
        };
        assert!(peer.has_id("abc"));
        assert!(!peer.has_id("ABC"));
        assert!(!AdminPeers::default().has_id(""));
    }
}
