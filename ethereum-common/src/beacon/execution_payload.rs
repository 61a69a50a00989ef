use super::*;

/// According to Ethereum spec [v1.4.0](https://github.com/ethereum/consensus-specs/blob/v1.4.0/specs/deneb/beacon-chain.md#executionpayload).
#[derive(Debug, Clone, PartialEq, Encode, Serialize, tree_hash_derive::TreeHash)]
pub struct ExecutionPayload {
    pub parent_hash: Hash256,
    pub fee_recipient: Address,
    pub state_root: Hash256,
    pub receipts_root: Hash256,
    pub logs_bloom: LogsBloom,
    pub prev_randao: Hash256,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub block_number: u64,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub gas_limit: u64,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub gas_used: u64,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub timestamp: u64,
    pub extra_data: base_types::ByteList,
    #[serde(serialize_with = "utils::serialize_u256")]
    pub base_fee_per_gas: U256,
    pub block_hash: Hash256,
    pub transactions: base_types::List<Transaction>,
    pub withdrawals: base_types::List<Withdrawal>,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub blob_gas_used: u64,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub excess_blob_gas: u64,
}

/// Limits of the variable-length payload fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionPayloadLimits {
    pub max_transactions_per_payload: usize,
    pub max_withdrawals_per_payload: usize,
}

impl ExecutionPayload {
    /// A payload with every field zeroed and every list empty.
    pub fn empty(limits: ExecutionPayloadLimits) -> Self {
        Self {
            parent_hash: Hash256::zero(),
            fee_recipient: Default::default(),
            state_root: Hash256::zero(),
            receipts_root: Hash256::zero(),
            logs_bloom: Default::default(),
            prev_randao: Hash256::zero(),
            block_number: 0,
            gas_limit: 0,
            gas_used: 0,
            timestamp: 0,
            extra_data: base_types::ByteList::new(MAX_EXTRA_DATA_BYTES),
            base_fee_per_gas: U256::zero(),
            block_hash: Hash256::zero(),
            transactions: base_types::List::new(limits.max_transactions_per_payload),
            withdrawals: base_types::List::new(limits.max_withdrawals_per_payload),
            blob_gas_used: 0,
            excess_blob_gas: 0,
        }
    }
}

/// According to Ethereum spec [v1.4.0](https://github.com/ethereum/consensus-specs/blob/v1.4.0/specs/deneb/beacon-chain.md#executionpayloadheader).
///
/// Electra keeps the Deneb layout.
#[derive(Debug, Clone, PartialEq, Encode, Serialize, tree_hash_derive::TreeHash)]
pub struct ExecutionPayloadHeader {
    pub parent_hash: Hash256,
    pub fee_recipient: Address,
    pub state_root: Hash256,
    pub receipts_root: Hash256,
    pub logs_bloom: LogsBloom,
    pub prev_randao: Hash256,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub block_number: u64,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub gas_limit: u64,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub gas_used: u64,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub timestamp: u64,
    pub extra_data: base_types::ByteList,
    #[serde(serialize_with = "utils::serialize_u256")]
    pub base_fee_per_gas: U256,
    pub block_hash: Hash256,
    pub transactions_root: Hash256,
    pub withdrawals_root: Hash256,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub blob_gas_used: u64,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub excess_blob_gas: u64,
}
