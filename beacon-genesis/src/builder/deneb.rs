use super::GenesisParts;
use crate::chain_spec::ChainSpec;
use ethereum_common::{
    base_types::List,
    beacon::{
        deneb::{BeaconState, BlockBody},
        BeaconBlockHeader, Eth1Data, ExecutionPayload, SyncAggregate,
    },
    tree_hash::TreeHash,
};

pub fn genesis_block_body(spec: &ChainSpec) -> BlockBody {
    BlockBody {
        randao_reveal: Default::default(),
        eth1_data: Eth1Data::default(),
        graffiti: Default::default(),
        proposer_slashings: List::new(spec.max_proposer_slashings),
        attester_slashings: List::new(spec.max_attester_slashings),
        attestations: List::new(spec.max_attestations),
        deposits: List::new(spec.max_deposits),
        voluntary_exits: List::new(spec.max_voluntary_exits),
        sync_aggregate: SyncAggregate::empty(spec.sync_committee_size),
        execution_payload: ExecutionPayload::empty(spec.execution_payload_limits()),
        bls_to_execution_changes: List::new(spec.max_bls_to_execution_changes),
        blob_kzg_commitments: List::new(spec.max_blob_commitments_per_block),
    }
}

impl_genesis_builder!(DenebBuilder, Deneb);

impl<H: BeaconBlockHeader> DenebBuilder<H> {
    fn genesis_state(&self, parts: GenesisParts) -> BeaconState<H> {
        let spec = &self.inputs.spec;

        genesis_state!(
            BeaconState,
            spec,
            parts,
            genesis_block_body(spec).tree_hash_root(),
            {}
        )
    }
}
