// src/block.rs

//! Block record as returned by `eth_getBlockByNumber` with full
//! transaction objects.

use crate::serde_helper::or_default;
use crate::transaction::TransactionDetailsResponse;
use serde::{Deserialize, Serialize};

/// Block details.
///
/// Header fields are the node's hex strings. Unlike the transaction record
/// every field is always serialized; missing or `null` values become empty
/// strings and empty arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockDetailsResponse {
    /// Block number
    #[serde(deserialize_with = "or_default")]
    pub number: String,

    /// Block hash
    #[serde(deserialize_with = "or_default")]
    pub hash: String,

    /// Parent block hash
    #[serde(deserialize_with = "or_default")]
    pub parent_hash: String,

    /// Proof-of-work nonce
    #[serde(deserialize_with = "or_default")]
    pub nonce: String,

    /// Hash of the uncles list
    #[serde(deserialize_with = "or_default")]
    pub sha3_uncles: String,

    /// Bloom filter of the block logs
    #[serde(deserialize_with = "or_default")]
    pub logs_bloom: String,

    /// Root of the transaction trie
    #[serde(deserialize_with = "or_default")]
    pub transactions_root: String,

    /// Root of the state trie
    #[serde(deserialize_with = "or_default")]
    pub state_root: String,

    /// Block producer address
    #[serde(deserialize_with = "or_default")]
    pub miner: String,

    /// Block difficulty
    #[serde(deserialize_with = "or_default")]
    pub difficulty: String,

    /// Chain difficulty up to this block
    #[serde(deserialize_with = "or_default")]
    pub total_difficulty: String,

    /// Extra data field
    #[serde(deserialize_with = "or_default")]
    pub extra_data: String,

    /// Block size in bytes
    #[serde(deserialize_with = "or_default")]
    pub size: String,

    /// Gas limit
    #[serde(deserialize_with = "or_default")]
    pub gas_limit: String,

    /// Gas used by all transactions
    #[serde(deserialize_with = "or_default")]
    pub gas_used: String,

    /// Block timestamp
    #[serde(deserialize_with = "or_default")]
    pub timestamp: String,

    /// Transactions in block order
    #[serde(deserialize_with = "or_default")]
    pub transactions: Vec<TransactionDetailsResponse>,

    /// Uncle hashes
    #[serde(deserialize_with = "or_default")]
    pub uncles: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_block_decode() {
        let raw = json!({
            "number": "0x1b4",
            "hash": "0xdc0818cf",
            "parentHash": "0xe99e022",
            "gasLimit": "0x47e7c4",
            "timestamp": "0x55ba467c",
            "transactions": [
                {"hash": "0x01", "transactionIndex": "0x0"},
                {"hash": "0x02", "transactionIndex": "0x1"}
            ],
            "uncles": []
        });
        let block: BlockDetailsResponse = serde_json::from_value(raw).unwrap();

        assert_eq!(block.number, "0x1b4");
        assert_eq!(block.parent_hash, "0xe99e022");
        assert_eq!(block.transactions.len(), 2);
        assert_eq!(block.transactions[1].hash.as_deref(), Some("0x02"));
        assert!(block.miner.is_empty());
    }

    #[test]
    fn test_block_always_serializes_every_field() {
        let value = serde_json::to_value(BlockDetailsResponse::default()).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 18);
        assert_eq!(obj["totalDifficulty"], json!(""));
        assert_eq!(obj["transactions"], json!([]));
        assert_eq!(obj["uncles"], json!([]));
    }

    #[test]
    fn test_pending_block_nulls() {
        let raw = json!({"number": null, "hash": null, "nonce": null, "transactions": null});
        let block: BlockDetailsResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(block, BlockDetailsResponse::default());
    }
}
