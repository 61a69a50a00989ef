//! Execution-layer block the genesis state is anchored to.

use alloy_consensus::Header;
use alloy_eips::eip4895::Withdrawal;
use alloy_primitives::{Bytes, B256};
use serde::Deserialize;

/// An execution block as returned by `eth_getBlockByNumber`, with the
/// transactions in their raw EIP-2718 encoding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExecutionBlock {
    #[serde(flatten)]
    pub header: Header,
    #[serde(default)]
    pub transactions: Vec<Bytes>,
    #[serde(default)]
    pub withdrawals: Option<Vec<Withdrawal>>,
}

impl ExecutionBlock {
    pub fn new(header: Header) -> Self {
        Self {
            header,
            transactions: vec![],
            withdrawals: None,
        }
    }

    pub fn from_json(source: &str) -> serde_json::Result<Self> {
        serde_json::from_str(source)
    }

    /// Keccak hash of the RLP encoded header.
    pub fn hash(&self) -> B256 {
        self.header.hash_slow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: &str = r#"{
        "parentHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
        "sha3Uncles": "0x1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347",
        "miner": "0x0000000000000000000000000000000000000000",
        "stateRoot": "0x7f0a2a2a4b7e2a3b1d2e5f5b2f8d1b0c5e4d3c2b1a0f9e8d7c6b5a4938271605",
        "transactionsRoot": "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421",
        "receiptsRoot": "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421",
        "logsBloom": "0x00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
        "difficulty": "0x1",
        "number": "0x0",
        "gasLimit": "0x1c9c380",
        "gasUsed": "0x0",
        "timestamp": "0x65156994",
        "extraData": "0x",
        "mixHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
        "nonce": "0x0000000000001234",
        "baseFeePerGas": "0x3b9aca00",
        "withdrawalsRoot": "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421",
        "blobGasUsed": "0x0",
        "excessBlobGas": "0x0",
        "parentBeaconBlockRoot": "0x0000000000000000000000000000000000000000000000000000000000000000",
        "hash": "0x0000000000000000000000000000000000000000000000000000000000000000",
        "size": "0x0",
        "transactions": [],
        "withdrawals": [
            {
                "index": "0x1",
                "validatorIndex": "0x2",
                "address": "0x00000000000000000000000000000000000000aa",
                "amount": "0x3"
            }
        ],
        "uncles": []
    }"#;

    #[test]
    fn decodes_rpc_block() {
        let block = ExecutionBlock::from_json(BLOCK).unwrap();

        assert_eq!(block.header.timestamp, 1_695_902_100);
        assert_eq!(block.header.gas_limit, 30_000_000);
        assert_eq!(block.header.base_fee_per_gas, Some(1_000_000_000));
        assert_eq!(block.header.blob_gas_used, Some(0));
        assert_eq!(block.header.excess_blob_gas, Some(0));
        assert!(block.transactions.is_empty());

        let withdrawals = block.withdrawals.as_deref().unwrap();
        assert_eq!(withdrawals.len(), 1);
        assert_eq!(withdrawals[0].validator_index, 2);
        assert_eq!(withdrawals[0].amount, 3);
    }

    #[test]
    fn hash_covers_header() {
        let block = ExecutionBlock::from_json(BLOCK).unwrap();
        let mut other = block.clone();
        other.header.timestamp += 1;

        assert_eq!(block.hash(), block.header.hash_slow());
        assert_ne!(block.hash(), other.hash());
    }

    #[test]
    fn missing_lists_default() {
        let block = ExecutionBlock::new(Header::default());

        assert!(block.withdrawals.is_none());
        assert!(block.transactions.is_empty());
    }
}
