use super::GenesisParts;
use crate::chain_spec::ChainSpec;
use ethereum_common::{
    base_types::List,
    beacon::{
        electra::{BeaconState, BlockBody},
        BeaconBlockHeader, Eth1Data, ExecutionPayload, ExecutionRequests, SyncAggregate,
    },
    tree_hash::TreeHash,
};

/// The block body the genesis header commits to: zero values and empty
/// lists everywhere.
pub fn genesis_block_body(spec: &ChainSpec) -> BlockBody {
    BlockBody {
        randao_reveal: Default::default(),
        eth1_data: Eth1Data::default(),
        graffiti: Default::default(),
        proposer_slashings: List::new(spec.max_proposer_slashings),
        attester_slashings: List::new(spec.max_attester_slashings_electra),
        attestations: List::new(spec.max_attestations_electra),
        deposits: List::new(spec.max_deposits),
        voluntary_exits: List::new(spec.max_voluntary_exits),
        sync_aggregate: SyncAggregate::empty(spec.sync_committee_size),
        execution_payload: ExecutionPayload::empty(spec.execution_payload_limits()),
        bls_to_execution_changes: List::new(spec.max_bls_to_execution_changes),
        blob_kzg_commitments: List::new(spec.max_blob_commitments_per_block),
        execution_requests: ExecutionRequests {
            deposits: List::new(spec.max_deposit_requests_per_payload),
            withdrawals: List::new(spec.max_withdrawal_requests_per_payload),
            consolidations: List::new(spec.max_consolidation_requests_per_payload),
        },
    }
}

impl_genesis_builder!(ElectraBuilder, Electra);

impl<H: BeaconBlockHeader> ElectraBuilder<H> {
    fn genesis_state(&self, parts: GenesisParts) -> BeaconState<H> {
        let spec = &self.inputs.spec;

        genesis_state!(
            BeaconState,
            spec,
            parts,
            genesis_block_body(spec).tree_hash_root(),
            {
                deposit_requests_start_index: 0,
                deposit_balance_to_consume: 0,
                exit_balance_to_consume: 0,
                earliest_exit_epoch: 0,
                consolidation_balance_to_consume: 0,
                earliest_consolidation_epoch: 0,
                pending_deposits: List::new(spec.pending_deposits_limit),
                pending_partial_withdrawals: List::new(spec.pending_partial_withdrawals_limit),
                pending_consolidations: List::new(spec.pending_consolidations_limit),
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        builder::GenesisBuilder, config::Config, execution::ExecutionBlock,
        validators::GenesisValidator,
    };
    use ethereum_common::{
        beacon::{BLSPubKey, BlockHeader},
        ssz::Encode,
        Hash256, U256,
    };
    use hex_literal::hex;

    #[test]
    fn body_skeleton() {
        let spec = ChainSpec::default();
        let body = genesis_block_body(&spec);

        assert_eq!(body.sync_aggregate.sync_committee_bits.len(), 512);
        assert_eq!(body.eth1_data.block_hash, Hash256::zero());
        assert!(body.execution_requests.deposits.is_empty());
        assert_eq!(body.execution_payload.base_fee_per_gas, U256::zero());

        // nine offsets and the 160 bytes sync aggregate in the fixed part
        let payload_len = ExecutionPayload::empty(spec.execution_payload_limits()).ssz_bytes_len();
        assert_eq!(
            body.ssz_bytes_len(),
            96 + 72 + 32 + 9 * 4 + 160 + payload_len + 3 * 4
        );
    }

    #[test]
    fn mainnet_empty_body() {
        let body = genesis_block_body(&ChainSpec::default());

        assert_eq!(body.ssz_bytes_len(), 936);
        assert_eq!(body.execution_payload.ssz_bytes_len(), 528);
        assert_eq!(
            body.tree_hash_root(),
            Hash256::from(hex!(
                "ca4f98890bc98a59f015d06375a5e00546b8f2ac1e88d31b1774ea28d4b3e7d1"
            ))
        );
    }

    #[test]
    fn body_root_tracks_sync_committee_size() {
        let small = ChainSpec {
            sync_committee_size: 32,
            ..Default::default()
        };

        assert_eq!(
            genesis_block_body(&small).tree_hash_root(),
            Hash256::from(hex!(
                "16b4588847d6883f7982beed1f9e90e6602abc0e1fe41b4c3551409950e0d108"
            ))
        );
    }

    #[test]
    fn validators_accumulate() {
        let mut builder = ElectraBuilder::<BlockHeader>::new(
            Config::default(),
            ChainSpec::default(),
            ExecutionBlock::new(Default::default()),
        );
        let validator = GenesisValidator {
            pubkey: BLSPubKey::default(),
            withdrawal_credentials: Hash256::zero(),
            balance: None,
        };

        builder.add_validators(vec![validator.clone()]);
        builder.add_validators(vec![validator.clone(), validator]);

        assert_eq!(builder.inputs.validators.len(), 3);
    }
}
