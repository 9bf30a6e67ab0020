// src/transaction.rs

//! Transaction record as returned by `eth_getTransactionByHash` and
//! `eth_pendingTransactions`.

use crate::serde_helper::{is_blank, lenient};
use serde::{Deserialize, Serialize};

/// Transaction details.
///
/// Every field is the node's hex string, passed through without numeric
/// parsing. Absent, `null` and empty fields are omitted when serialized, so
/// the zero value renders as `{}`. A field of the wrong type is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransactionDetailsResponse {
    /// Hash of the containing block
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub block_hash: Option<String>,

    /// Number of the containing block
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub block_number: Option<String>,

    /// Sender address
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub from: Option<String>,

    /// Gas provided by the sender
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub gas: Option<String>,

    /// Gas price in wei
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub gas_price: Option<String>,

    /// Transaction hash
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub hash: Option<String>,

    /// Call data
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub input: Option<String>,

    /// Sender nonce
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub nonce: Option<String>,

    /// Receiver address, `None` for contract creation
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub to: Option<String>,

    /// Position within the block
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub transaction_index: Option<String>,

    /// Value transferred in wei
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub value: Option<String>,

    /// Signature recovery id
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub v: Option<String>,

    /// Signature r
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub r: Option<String>,

    /// Signature s
    #[serde(deserialize_with = "lenient", skip_serializing_if = "is_blank")]
    pub s: Option<String>,
}
