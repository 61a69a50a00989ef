// This file is part of Gear.

// Copyright (C) 2024 Gear Technologies Inc.
// SPDX-License-Identifier: GPL-3.0-or-later WITH Classpath-exception-2.0

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! The module defines types used by Beacon Chain entities. Inspired by
//! https://github.com/a16z/helios and https://github.com/sigp/lighthouse/ projects.
//!
//! Collections sized by the chain configuration use the runtime-sized
//! collections from [`base_types`]; their lengths and limits are supplied by
//! whoever constructs the value.

use super::*;

pub type Bytes32 = base_types::BytesFixed<32>;
pub type Address = base_types::BytesFixed<20>;
pub type LogsBloom = base_types::BytesFixed<256>;
pub type Transaction = base_types::ByteList;
pub type SignatureBytes = base_types::BytesFixed<96>;
pub type BLSPubKey = base_types::BytesFixed<48>;
pub type KzgCommitment = base_types::BytesFixed<48>;
pub type Version = base_types::BytesFixed<4>;

#[derive(Debug, Clone, PartialEq, Encode, Serialize, Deserialize, tree_hash_derive::TreeHash)]
pub struct Fork {
    pub previous_version: Version,
    pub current_version: Version,
    #[serde(
        serialize_with = "utils::serialize_u64",
        deserialize_with = "utils::deserialize_u64"
    )]
    pub epoch: u64,
}

#[derive(
    Debug, Clone, Default, PartialEq, Encode, Serialize, Deserialize, tree_hash_derive::TreeHash,
)]
pub struct Checkpoint {
    #[serde(
        serialize_with = "utils::serialize_u64",
        deserialize_with = "utils::deserialize_u64"
    )]
    pub epoch: u64,
    pub root: Hash256,
}

#[derive(
    Debug, Clone, Default, PartialEq, Encode, Serialize, Deserialize, tree_hash_derive::TreeHash,
)]
pub struct Eth1Data {
    pub deposit_root: Hash256,
    #[serde(
        serialize_with = "utils::serialize_u64",
        deserialize_with = "utils::deserialize_u64"
    )]
    pub deposit_count: u64,
    pub block_hash: Hash256,
}

#[derive(Debug, Clone, PartialEq, Encode, Serialize, tree_hash_derive::TreeHash)]
pub struct Validator {
    pub pubkey: BLSPubKey,
    pub withdrawal_credentials: Hash256,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub effective_balance: u64,
    pub slashed: bool,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub activation_eligibility_epoch: u64,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub activation_epoch: u64,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub exit_epoch: u64,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub withdrawable_epoch: u64,
}

/// `pubkeys` holds exactly `SYNC_COMMITTEE_SIZE` keys.
#[derive(Debug, Clone, PartialEq, Serialize, tree_hash_derive::TreeHash)]
pub struct SyncCommittee {
    pub pubkeys: base_types::Vector<BLSPubKey>,
    pub aggregate_pubkey: BLSPubKey,
}

crate::impl_ssz_container!(SyncCommittee, fixed = true, [pubkeys, aggregate_pubkey]);

#[derive(Debug, Clone, PartialEq, Serialize, tree_hash_derive::TreeHash)]
pub struct SyncAggregate {
    pub sync_committee_bits: base_types::Bitvector,
    pub sync_committee_signature: SignatureBytes,
}

impl SyncAggregate {
    /// An aggregate without participants and with the zero signature.
    pub fn empty(sync_committee_size: usize) -> Self {
        Self {
            sync_committee_bits: base_types::Bitvector::new(sync_committee_size),
            sync_committee_signature: Default::default(),
        }
    }
}

crate::impl_ssz_container!(
    SyncAggregate,
    fixed = true,
    [sync_committee_bits, sync_committee_signature]
);

#[derive(Debug, Clone, PartialEq, Encode, Serialize, Deserialize, tree_hash_derive::TreeHash)]
pub struct Withdrawal {
    #[serde(
        serialize_with = "utils::serialize_u64",
        deserialize_with = "utils::deserialize_u64"
    )]
    pub index: u64,
    #[serde(
        serialize_with = "utils::serialize_u64",
        deserialize_with = "utils::deserialize_u64"
    )]
    pub validator_index: u64,
    pub address: Address,
    #[serde(
        serialize_with = "utils::serialize_u64",
        deserialize_with = "utils::deserialize_u64"
    )]
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Encode, Serialize, tree_hash_derive::TreeHash)]
pub struct HistoricalSummary {
    pub block_summary_root: Hash256,
    pub state_summary_root: Hash256,
}

#[derive(Debug, Clone, PartialEq, Encode, Serialize, tree_hash_derive::TreeHash)]
pub struct SignedBeaconBlockHeader {
    pub message: BlockHeader,
    pub signature: SignatureBytes,
}

#[derive(Debug, Clone, PartialEq, Encode, Serialize, tree_hash_derive::TreeHash)]
pub struct ProposerSlashing {
    pub signed_header_1: SignedBeaconBlockHeader,
    pub signed_header_2: SignedBeaconBlockHeader,
}

#[derive(Debug, Clone, PartialEq, Encode, Serialize, tree_hash_derive::TreeHash)]
pub struct AttesterSlashing {
    pub attestation_1: IndexedAttestation,
    pub attestation_2: IndexedAttestation,
}

/// `attesting_indices` is bounded by `MAX_VALIDATORS_PER_COMMITTEE` before
/// Electra and by `MAX_VALIDATORS_PER_COMMITTEE * MAX_COMMITTEES_PER_SLOT` since.
#[derive(Debug, Clone, PartialEq, Encode, Serialize, tree_hash_derive::TreeHash)]
pub struct IndexedAttestation {
    #[serde(serialize_with = "utils::serialize_quoted_seq")]
    pub attesting_indices: base_types::List<u64>,
    pub data: AttestationData,
    pub signature: SignatureBytes,
}

#[derive(Debug, Clone, PartialEq, Encode, Serialize, tree_hash_derive::TreeHash)]
pub struct Attestation {
    pub aggregation_bits: base_types::Bitlist,
    pub data: AttestationData,
    pub signature: SignatureBytes,
}

#[derive(Debug, Clone, PartialEq, Serialize, tree_hash_derive::TreeHash)]
pub struct AttestationElectra {
    pub aggregation_bits: base_types::Bitlist,
    pub data: AttestationData,
    pub signature: SignatureBytes,
    pub committee_bits: base_types::Bitvector,
}

crate::impl_ssz_container!(
    AttestationElectra,
    fixed = false,
    [aggregation_bits, data, signature, committee_bits]
);

#[derive(Debug, Clone, PartialEq, Encode, Serialize, tree_hash_derive::TreeHash)]
pub struct AttestationData {
    #[serde(serialize_with = "utils::serialize_u64")]
    pub slot: u64,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub index: u64,
    pub beacon_block_root: Hash256,
    pub source: Checkpoint,
    pub target: Checkpoint,
}

#[derive(Debug, Clone, PartialEq, Encode, Serialize, tree_hash_derive::TreeHash)]
pub struct Deposit {
    pub proof: base_types::FixedArray<Hash256, 33>,
    pub data: DepositData,
}

#[derive(Debug, Clone, PartialEq, Encode, Serialize, tree_hash_derive::TreeHash)]
pub struct DepositData {
    pub pubkey: BLSPubKey,
    pub withdrawal_credentials: Hash256,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub amount: u64,
    pub signature: SignatureBytes,
}

#[derive(Debug, Clone, PartialEq, Encode, Serialize, tree_hash_derive::TreeHash)]
pub struct SignedVoluntaryExit {
    pub message: VoluntaryExit,
    pub signature: SignatureBytes,
}

#[derive(Debug, Clone, PartialEq, Encode, Serialize, tree_hash_derive::TreeHash)]
pub struct VoluntaryExit {
    #[serde(serialize_with = "utils::serialize_u64")]
    pub epoch: u64,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub validator_index: u64,
}

#[derive(Debug, Clone, PartialEq, Encode, Serialize, tree_hash_derive::TreeHash)]
pub struct SignedBlsToExecutionChange {
    pub message: BlsToExecutionChange,
    pub signature: SignatureBytes,
}

#[derive(Debug, Clone, PartialEq, Encode, Serialize, tree_hash_derive::TreeHash)]
pub struct BlsToExecutionChange {
    #[serde(serialize_with = "utils::serialize_u64")]
    pub validator_index: u64,
    pub from_bls_pubkey: BLSPubKey,
    pub to_execution_address: Address,
}

#[derive(Debug, Clone, PartialEq, Encode, Serialize, tree_hash_derive::TreeHash)]
pub struct DepositRequest {
    pub pubkey: BLSPubKey,
    pub withdrawal_credentials: Hash256,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub amount: u64,
    pub signature: SignatureBytes,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub index: u64,
}

#[derive(Debug, Clone, PartialEq, Encode, Serialize, tree_hash_derive::TreeHash)]
pub struct WithdrawalRequest {
    pub source_address: Address,
    pub validator_pubkey: BLSPubKey,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Encode, Serialize, tree_hash_derive::TreeHash)]
pub struct ConsolidationRequest {
    pub source_address: Address,
    pub source_pubkey: BLSPubKey,
    pub target_pubkey: BLSPubKey,
}

#[derive(Debug, Clone, PartialEq, Encode, Serialize, tree_hash_derive::TreeHash)]
pub struct ExecutionRequests {
    pub deposits: base_types::List<DepositRequest>,
    pub withdrawals: base_types::List<WithdrawalRequest>,
    pub consolidations: base_types::List<ConsolidationRequest>,
}

#[derive(Debug, Clone, PartialEq, Encode, Serialize, tree_hash_derive::TreeHash)]
pub struct PendingDeposit {
    pub pubkey: BLSPubKey,
    pub withdrawal_credentials: Hash256,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub amount: u64,
    pub signature: SignatureBytes,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub slot: u64,
}

#[derive(Debug, Clone, PartialEq, Encode, Serialize, tree_hash_derive::TreeHash)]
pub struct PendingPartialWithdrawal {
    #[serde(serialize_with = "utils::serialize_u64")]
    pub validator_index: u64,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub amount: u64,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub withdrawable_epoch: u64,
}

#[derive(Debug, Clone, PartialEq, Encode, Serialize, tree_hash_derive::TreeHash)]
pub struct PendingConsolidation {
    #[serde(serialize_with = "utils::serialize_u64")]
    pub source_index: u64,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub target_index: u64,
}
