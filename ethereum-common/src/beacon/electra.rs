//! Electra containers. The execution payload and the slashing containers keep
//! the Deneb layout, only their limits change.

use super::*;

/// According to Ethereum spec [v1.5.0](https://github.com/ethereum/consensus-specs/blob/v1.5.0/specs/electra/beacon-chain.md#beaconblockbody).
#[derive(Debug, Clone, PartialEq, Serialize, tree_hash_derive::TreeHash)]
pub struct BlockBody {
    pub randao_reveal: SignatureBytes,
    pub eth1_data: Eth1Data,
    pub graffiti: Bytes32,
    pub proposer_slashings: base_types::List<ProposerSlashing>,
    pub attester_slashings: base_types::List<AttesterSlashing>,
    pub attestations: base_types::List<AttestationElectra>,
    pub deposits: base_types::List<Deposit>,
    pub voluntary_exits: base_types::List<SignedVoluntaryExit>,
    pub sync_aggregate: SyncAggregate,
    pub execution_payload: ExecutionPayload,
    pub bls_to_execution_changes: base_types::List<SignedBlsToExecutionChange>,
    pub blob_kzg_commitments: base_types::List<KzgCommitment>,
    pub execution_requests: ExecutionRequests,
}

crate::impl_ssz_container!(
    BlockBody,
    fixed = false,
    [
        randao_reveal,
        eth1_data,
        graffiti,
        proposer_slashings,
        attester_slashings,
        attestations,
        deposits,
        voluntary_exits,
        sync_aggregate,
        execution_payload,
        bls_to_execution_changes,
        blob_kzg_commitments,
        execution_requests,
    ]
);

/// According to Ethereum spec [v1.5.0](https://github.com/ethereum/consensus-specs/blob/v1.5.0/specs/electra/beacon-chain.md#beaconstate).
#[derive(Debug, Clone, PartialEq, Serialize, tree_hash_derive::TreeHash)]
pub struct BeaconState<H: BeaconBlockHeader> {
    #[serde(serialize_with = "utils::serialize_u64")]
    pub genesis_time: u64,
    pub genesis_validators_root: Hash256,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub slot: u64,
    pub fork: Fork,
    pub latest_block_header: H,
    pub block_roots: base_types::Vector<Hash256>,
    pub state_roots: base_types::Vector<Hash256>,
    pub historical_roots: base_types::List<Hash256>,
    pub eth1_data: Eth1Data,
    pub eth1_data_votes: base_types::List<Eth1Data>,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub eth1_deposit_index: u64,
    pub validators: base_types::List<Validator>,
    #[serde(serialize_with = "utils::serialize_quoted_seq")]
    pub balances: base_types::List<u64>,
    pub randao_mixes: base_types::Vector<Hash256>,
    #[serde(serialize_with = "utils::serialize_quoted_seq")]
    pub slashings: base_types::Vector<u64>,
    #[serde(serialize_with = "utils::serialize_quoted_seq")]
    pub previous_epoch_participation: base_types::List<u8>,
    #[serde(serialize_with = "utils::serialize_quoted_seq")]
    pub current_epoch_participation: base_types::List<u8>,
    pub justification_bits: base_types::Bitvector,
    pub previous_justified_checkpoint: Checkpoint,
    pub current_justified_checkpoint: Checkpoint,
    pub finalized_checkpoint: Checkpoint,
    #[serde(serialize_with = "utils::serialize_quoted_seq")]
    pub inactivity_scores: base_types::List<u64>,
    pub current_sync_committee: SyncCommittee,
    pub next_sync_committee: SyncCommittee,
    pub latest_execution_payload_header: ExecutionPayloadHeader,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub next_withdrawal_index: u64,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub next_withdrawal_validator_index: u64,
    pub historical_summaries: base_types::List<HistoricalSummary>,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub deposit_requests_start_index: u64,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub deposit_balance_to_consume: u64,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub exit_balance_to_consume: u64,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub earliest_exit_epoch: u64,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub consolidation_balance_to_consume: u64,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub earliest_consolidation_epoch: u64,
    pub pending_deposits: base_types::List<PendingDeposit>,
    pub pending_partial_withdrawals: base_types::List<PendingPartialWithdrawal>,
    pub pending_consolidations: base_types::List<PendingConsolidation>,
}

crate::impl_ssz_container!(
    [H: BeaconBlockHeader] BeaconState<H>,
    fixed = false,
    [
        genesis_time,
        genesis_validators_root,
        slot,
        fork,
        latest_block_header,
        block_roots,
        state_roots,
        historical_roots,
        eth1_data,
        eth1_data_votes,
        eth1_deposit_index,
        validators,
        balances,
        randao_mixes,
        slashings,
        previous_epoch_participation,
        current_epoch_participation,
        justification_bits,
        previous_justified_checkpoint,
        current_justified_checkpoint,
        finalized_checkpoint,
        inactivity_scores,
        current_sync_committee,
        next_sync_committee,
        latest_execution_payload_header,
        next_withdrawal_index,
        next_withdrawal_validator_index,
        historical_summaries,
        deposit_requests_start_index,
        deposit_balance_to_consume,
        exit_balance_to_consume,
        earliest_exit_epoch,
        consolidation_balance_to_consume,
        earliest_consolidation_epoch,
        pending_deposits,
        pending_partial_withdrawals,
        pending_consolidations,
    ]
);
