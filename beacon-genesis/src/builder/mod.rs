//! Fork specific genesis state builders.

use crate::{
    chain_spec::ChainSpec,
    config::Config,
    execution::ExecutionBlock,
    roots,
    serialize::ContentType,
    sync_committee, validators,
    validators::GenesisValidator,
    Error, Result,
};
use ethereum_common::{
    base_types::{ByteList, List},
    beacon::{
        BeaconBlockHeader, DataVersion, ExecutionPayloadHeader, Fork, SyncCommittee, Validator,
        VersionedBeaconState, BLOCK_HEADER_SSZ_LEN, TEE_BLOCK_HEADER_SSZ_LEN,
    },
    ssz::Encode,
    Hash256, GENESIS_EPOCH, MAX_EXTRA_DATA_BYTES, U256,
};

/// Implements [`GenesisBuilder`] for `$builder`, producing the `$variant`
/// state. The fork module provides
/// `fn genesis_state(&self, parts: GenesisParts) -> BeaconState<H>`.
macro_rules! impl_genesis_builder {
    ($builder:ident, $variant:ident) => {
        pub struct $builder<H> {
            inputs: $crate::builder::GenesisInputs,
            _header: ::std::marker::PhantomData<H>,
        }

        impl<H: ::ethereum_common::beacon::BeaconBlockHeader> $builder<H> {
            pub fn new(
                config: $crate::config::Config,
                spec: $crate::chain_spec::ChainSpec,
                el_block: $crate::execution::ExecutionBlock,
            ) -> Self {
                Self {
                    inputs: $crate::builder::GenesisInputs::new(config, spec, el_block),
                    _header: ::std::marker::PhantomData,
                }
            }
        }

        impl<H: ::ethereum_common::beacon::BeaconBlockHeader> $crate::builder::GenesisBuilder<H>
            for $builder<H>
        {
            fn set_shadow_fork_block(&mut self, block: $crate::execution::ExecutionBlock) {
                self.inputs.shadow_fork_block = Some(block);
            }

            fn add_validators(&mut self, validators: Vec<$crate::validators::GenesisValidator>) {
                self.inputs.validators.extend(validators);
            }

            fn build_state(
                &self,
            ) -> $crate::Result<::ethereum_common::beacon::VersionedBeaconState<H>> {
                let version = ::ethereum_common::beacon::DataVersion::$variant;
                let parts = self.inputs.genesis_parts(version)?;
                let mut state = self.genesis_state(parts);

                $crate::tee::apply_tee_to_header_from_config(
                    &mut state.latest_block_header,
                    &self.inputs.config,
                )?;
                $crate::builder::log_header_size(&state.latest_block_header);
                $crate::builder::log_genesis(
                    version,
                    state.genesis_time,
                    &state.genesis_validators_root,
                );

                Ok(::ethereum_common::beacon::VersionedBeaconState::$variant(
                    Box::new(state),
                ))
            }

            fn serialize(
                &self,
                state: &::ethereum_common::beacon::VersionedBeaconState<H>,
                content_type: $crate::serialize::ContentType,
            ) -> $crate::Result<Vec<u8>> {
                let ::ethereum_common::beacon::VersionedBeaconState::$variant(state) = state else {
                    return Err($crate::Error::UnsupportedVersion(state.version()));
                };

                match content_type {
                    $crate::serialize::ContentType::Ssz => Ok($crate::serialize::encode_ssz(
                        state.as_ref(),
                        &state.latest_block_header,
                        self.inputs.spec.slots_per_historical_root,
                    )),
                    $crate::serialize::ContentType::Json => {
                        Ok(::serde_json::to_vec(state.as_ref())?)
                    }
                }
            }
        }
    };
}

/// Struct literal of a genesis `$state`: the fields every fork shares come
/// from `$parts`, the fork specific ones follow as `$field: $value` pairs.
macro_rules! genesis_state {
    (
        $state:ident,
        $spec:expr,
        $parts:expr,
        $body_root:expr,
        { $($field:ident: $value:expr),* $(,)? }
    ) => {{
        use ::ethereum_common::{
            base_types::{Bitvector, List, Vector},
            beacon::{BlockHeader, Checkpoint, Eth1Data},
            GENESIS_SLOT, JUSTIFICATION_BITS_LENGTH,
        };

        let spec: &$crate::chain_spec::ChainSpec = $spec;
        let parts: $crate::builder::GenesisParts = $parts;
        let block_hash = parts.execution.block_hash;

        $state {
            genesis_time: parts.genesis_time,
            genesis_validators_root: parts.validators_root,
            slot: GENESIS_SLOT,
            fork: parts.fork,
            latest_block_header: From::from(BlockHeader {
                body_root: $body_root,
                ..Default::default()
            }),
            block_roots: Vector::zeroed(spec.slots_per_historical_root),
            state_roots: Vector::zeroed(spec.slots_per_historical_root),
            historical_roots: List::new(spec.historical_roots_limit),
            eth1_data: Eth1Data {
                deposit_root: parts.deposit_root,
                deposit_count: 0,
                block_hash,
            },
            eth1_data_votes: List::new(spec.eth1_data_votes_limit),
            eth1_deposit_index: 0,
            validators: parts.validators,
            balances: parts.balances,
            randao_mixes: $crate::roots::randao_mixes(spec, block_hash),
            slashings: Vector::zeroed(spec.epochs_per_slashings_vector),
            previous_epoch_participation: parts.participation.clone(),
            current_epoch_participation: parts.participation,
            justification_bits: Bitvector::new(JUSTIFICATION_BITS_LENGTH),
            previous_justified_checkpoint: Checkpoint::default(),
            current_justified_checkpoint: Checkpoint::default(),
            finalized_checkpoint: Checkpoint::default(),
            inactivity_scores: parts.inactivity_scores,
            current_sync_committee: parts.sync_committee.clone(),
            next_sync_committee: parts.sync_committee,
            latest_execution_payload_header: parts.execution.payload_header,
            next_withdrawal_index: 0,
            next_withdrawal_validator_index: 0,
            historical_summaries: List::new(spec.historical_roots_limit),
            $($field: $value,)*
        }
    }};
}

mod deneb;
mod electra;

pub use deneb::DenebBuilder;
pub use electra::ElectraBuilder;

/// Builds the genesis state of one fork and encodes it.
pub trait GenesisBuilder<H: BeaconBlockHeader> {
    /// Anchors the state to `block` instead of the execution genesis block.
    fn set_shadow_fork_block(&mut self, block: ExecutionBlock);

    fn add_validators(&mut self, validators: Vec<GenesisValidator>);

    fn build_state(&self) -> Result<VersionedBeaconState<H>>;

    fn serialize(
        &self,
        state: &VersionedBeaconState<H>,
        content_type: ContentType,
    ) -> Result<Vec<u8>>;
}

/// Builder of the fork active at genesis: Electra if `ELECTRA_FORK_EPOCH` is
/// zero, Deneb if `DENEB_FORK_EPOCH` is.
pub fn genesis_builder<H: BeaconBlockHeader + 'static>(
    config: Config,
    el_block: ExecutionBlock,
) -> Result<Box<dyn GenesisBuilder<H>>> {
    let spec = ChainSpec::from_config(&config)?;

    if spec.electra_fork_epoch == GENESIS_EPOCH {
        return Ok(Box::new(ElectraBuilder::new(config, spec, el_block)));
    }

    if spec.deneb_fork_epoch == GENESIS_EPOCH {
        return Ok(Box::new(DenebBuilder::new(config, spec, el_block)));
    }

    Err(Error::UnsupportedVersion(DataVersion::Deneb.previous()))
}

/// Inputs shared by every fork builder.
#[derive(Debug, Clone)]
pub(crate) struct GenesisInputs {
    pub config: Config,
    pub spec: ChainSpec,
    pub el_block: ExecutionBlock,
    pub shadow_fork_block: Option<ExecutionBlock>,
    pub validators: Vec<GenesisValidator>,
}

impl GenesisInputs {
    pub fn new(config: Config, spec: ChainSpec, el_block: ExecutionBlock) -> Self {
        Self {
            config,
            spec,
            el_block,
            shadow_fork_block: None,
            validators: vec![],
        }
    }

    pub fn source_block(&self) -> &ExecutionBlock {
        self.shadow_fork_block.as_ref().unwrap_or(&self.el_block)
    }

    /// `MIN_GENESIS_TIME`, or the block timestamp if it is zero, delayed by
    /// `GENESIS_DELAY`.
    pub fn genesis_time(&self, block: &ExecutionBlock) -> Result<u64> {
        let min_genesis_time = match self.spec.min_genesis_time {
            0 => block.header.timestamp,
            time => time,
        };

        min_genesis_time
            .checked_add(self.spec.genesis_delay)
            .ok_or(Error::ConfigRange {
                key: "GENESIS_DELAY",
                value: self.spec.genesis_delay,
                min: 0,
                max: u64::MAX - min_genesis_time,
            })
    }

    pub fn fork(&self, version: DataVersion) -> Fork {
        Fork {
            previous_version: self.spec.fork_version(version.previous()),
            current_version: self.spec.fork_version(version),
            epoch: GENESIS_EPOCH,
        }
    }

    /// Everything but the block body of a genesis state of `version`.
    pub fn genesis_parts(&self, version: DataVersion) -> Result<GenesisParts> {
        let spec = &self.spec;
        let block = self.source_block();
        let genesis_time = self.genesis_time(block)?;
        let execution = GenesisExecution::new(spec, block)?;
        let deposit_root = roots::deposit_root(spec);

        let (registry, validators_root) =
            validators::validator_registry(spec, version, &self.validators)
                .map_err(Error::sub_root("validators root"))?;
        let balances = validators::genesis_balances(spec, &self.validators)
            .map_err(Error::sub_root("balances"))?;
        let sync_committee = sync_committee::genesis_sync_committee(
            spec,
            version,
            &registry,
            &execution.block_hash,
        )
        .map_err(Error::sub_root("sync committee"))?;

        let participation = List::try_from_vec(vec![0; registry.len()], registry.limit())
            .map_err(Error::sub_root("participation"))?;
        let inactivity_scores = List::try_from_vec(vec![0; registry.len()], registry.limit())
            .map_err(Error::sub_root("inactivity scores"))?;

        Ok(GenesisParts {
            genesis_time,
            fork: self.fork(version),
            execution,
            deposit_root,
            validators: registry,
            validators_root,
            balances,
            participation,
            inactivity_scores,
            sync_committee,
        })
    }
}

/// Fork independent values of a genesis state.
pub(crate) struct GenesisParts {
    pub genesis_time: u64,
    pub fork: Fork,
    pub execution: GenesisExecution,
    pub deposit_root: Hash256,
    pub validators: List<Validator>,
    pub validators_root: Hash256,
    pub balances: List<u64>,
    pub participation: List<u8>,
    pub inactivity_scores: List<u64>,
    pub sync_committee: SyncCommittee,
}

/// The source block reduced to what the genesis state records.
pub(crate) struct GenesisExecution {
    pub block_hash: Hash256,
    pub payload_header: ExecutionPayloadHeader,
}

impl GenesisExecution {
    /// Validates `block` and computes the payload header. Every check runs
    /// before the first root.
    pub fn new(spec: &ChainSpec, block: &ExecutionBlock) -> Result<Self> {
        let header = &block.header;

        let extra_data = header.extra_data.as_ref();
        if extra_data.len() > MAX_EXTRA_DATA_BYTES {
            return Err(Error::ExtraDataTooLong {
                len: extra_data.len(),
                max: MAX_EXTRA_DATA_BYTES,
            });
        }

        let blob_gas_used = header
            .blob_gas_used
            .ok_or(Error::MissingRequiredField("blob-gas-used"))?;
        let excess_blob_gas = header
            .excess_blob_gas
            .ok_or(Error::MissingRequiredField("excess-blob-gas"))?;

        let withdrawals_root = match &block.withdrawals {
            Some(withdrawals) => roots::withdrawals_root(spec, withdrawals)
                .map_err(Error::sub_root("withdrawals root"))?,
            None => Hash256::zero(),
        };
        let transactions_root = roots::transactions_root(spec, &block.transactions)
            .map_err(Error::sub_root("transactions root"))?;

        let block_hash = Hash256::from(block.hash().0);
        let payload_header = ExecutionPayloadHeader {
            parent_hash: Hash256::from(header.parent_hash.0),
            fee_recipient: header.beneficiary.0 .0.into(),
            state_root: Hash256::from(header.state_root.0),
            receipts_root: Hash256::from(header.receipts_root.0),
            logs_bloom: header.logs_bloom.0 .0.into(),
            prev_randao: Hash256::zero(),
            block_number: header.number,
            gas_limit: header.gas_limit,
            gas_used: header.gas_used,
            timestamp: header.timestamp,
            extra_data: ByteList::try_from_slice(extra_data, MAX_EXTRA_DATA_BYTES)
                .map_err(Error::sub_root("extra data"))?,
            base_fee_per_gas: U256::from(header.base_fee_per_gas.unwrap_or_default()),
            block_hash,
            transactions_root,
            withdrawals_root,
            blob_gas_used,
            excess_blob_gas,
        };

        Ok(Self {
            block_hash,
            payload_header,
        })
    }
}

/// Logs the encoded size of the genesis header against the two known layouts.
pub(crate) fn log_header_size<H: Encode>(header: &H) {
    let len = header.ssz_bytes_len();
    log::info!(
        "Block header SSZ size after TEE application: {len} bytes (expected TEE: \
         {TEE_BLOCK_HEADER_SSZ_LEN}, standard: {BLOCK_HEADER_SSZ_LEN})"
    );

    if len != TEE_BLOCK_HEADER_SSZ_LEN && len != BLOCK_HEADER_SSZ_LEN {
        log::warn!(
            "Unexpected block header size {len} bytes, neither TEE ({TEE_BLOCK_HEADER_SSZ_LEN}) \
             nor standard ({BLOCK_HEADER_SSZ_LEN})"
        );
    }
}

pub(crate) fn log_genesis(version: DataVersion, genesis_time: u64, validators_root: &Hash256) {
    log::info!("Genesis version: {version}");
    log::info!("Genesis time: {genesis_time}");
    log::info!("Genesis validators root: {validators_root:?}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_consensus::Header;
    use alloy_primitives::{Bytes, B256};
    use ethereum_common::beacon::{BlockHeader, TeeBlockHeader, Version};

    fn block(extra_data: &[u8]) -> ExecutionBlock {
        ExecutionBlock::new(Header {
            timestamp: 1_000,
            extra_data: Bytes::copy_from_slice(extra_data),
            blob_gas_used: Some(0),
            excess_blob_gas: Some(0),
            base_fee_per_gas: Some(7),
            ..Default::default()
        })
    }

    #[test]
    fn picks_fork_from_epochs() {
        let config = Config::default().with_value("ELECTRA_FORK_EPOCH", 0u64);
        assert!(genesis_builder::<TeeBlockHeader>(config, block(&[])).is_ok());

        let config = Config::default().with_value("DENEB_FORK_EPOCH", 0u64);
        assert!(genesis_builder::<BlockHeader>(config, block(&[])).is_ok());

        assert!(matches!(
            genesis_builder::<BlockHeader>(Config::default(), block(&[])),
            Err(Error::UnsupportedVersion(DataVersion::Capella))
        ));
    }

    #[test]
    fn genesis_time() {
        let spec = ChainSpec {
            genesis_delay: 300,
            ..Default::default()
        };
        let inputs = GenesisInputs::new(Config::default(), spec.clone(), block(&[]));
        assert_eq!(inputs.genesis_time(inputs.source_block()).unwrap(), 1_300);

        let inputs = GenesisInputs::new(
            Config::default(),
            ChainSpec {
                min_genesis_time: 5_000,
                ..spec
            },
            block(&[]),
        );
        assert_eq!(inputs.genesis_time(inputs.source_block()).unwrap(), 5_300);

        let inputs = GenesisInputs::new(
            Config::default(),
            ChainSpec {
                min_genesis_time: u64::MAX - 10,
                genesis_delay: 11,
                ..Default::default()
            },
            block(&[]),
        );
        assert!(matches!(
            inputs.genesis_time(inputs.source_block()),
            Err(Error::ConfigRange {
                key: "GENESIS_DELAY",
                value: 11,
                max: 10,
                ..
            })
        ));
    }

    #[test]
    fn shadow_fork_block_wins() {
        let mut inputs = GenesisInputs::new(Config::default(), ChainSpec::default(), block(&[]));
        let mut shadow = block(&[1]);
        shadow.header.number = 42;
        inputs.shadow_fork_block = Some(shadow);

        assert_eq!(inputs.source_block().header.number, 42);
    }

    #[test]
    fn fork_record() {
        let inputs = GenesisInputs::new(Config::default(), ChainSpec::default(), block(&[]));
        let fork = inputs.fork(DataVersion::Electra);

        assert_eq!(fork.previous_version, Version::from([4, 0, 0, 0]));
        assert_eq!(fork.current_version, Version::from([5, 0, 0, 0]));
        assert_eq!(fork.epoch, 0);
    }

    #[test]
    fn payload_header_from_block() {
        let spec = ChainSpec::default();
        let mut source = block(b"genesis");
        source.header.parent_hash = B256::repeat_byte(1);
        source.header.gas_limit = 30_000_000;

        let execution = GenesisExecution::new(&spec, &source).unwrap();
        let header = &execution.payload_header;

        assert_eq!(execution.block_hash, Hash256::from(source.hash().0));
        assert_eq!(header.block_hash, execution.block_hash);
        assert_eq!(header.parent_hash, Hash256::repeat_byte(1));
        assert_eq!(header.gas_limit, 30_000_000);
        assert_eq!(header.extra_data.as_ref(), b"genesis");
        assert_eq!(header.base_fee_per_gas, U256::from(7));
        assert_eq!(header.prev_randao, Hash256::zero());
        assert_eq!(header.withdrawals_root, Hash256::zero());
        assert_eq!(
            header.transactions_root,
            roots::transactions_root(&spec, &[]).unwrap()
        );

        source.withdrawals = Some(vec![]);
        let execution = GenesisExecution::new(&spec, &source).unwrap();
        assert_eq!(
            execution.payload_header.withdrawals_root,
            roots::withdrawals_root(&spec, &[]).unwrap()
        );
    }

    #[test]
    fn rejects_invalid_blocks_before_roots() {
        // too many transaction bytes would fail the transactions root
        let spec = ChainSpec {
            max_bytes_per_transaction: 0,
            ..Default::default()
        };

        let mut source = block(&[0; 33]);
        source.transactions = vec![Bytes::from_static(&[1])];
        assert!(matches!(
            GenesisExecution::new(&spec, &source),
            Err(Error::ExtraDataTooLong { len: 33, max: 32 })
        ));

        let mut source = block(&[0; 32]);
        source.transactions = vec![Bytes::from_static(&[1])];
        source.header.blob_gas_used = None;
        assert!(matches!(
            GenesisExecution::new(&spec, &source),
            Err(Error::MissingRequiredField("blob-gas-used"))
        ));

        source.header.blob_gas_used = Some(0);
        source.header.excess_blob_gas = None;
        assert!(matches!(
            GenesisExecution::new(&spec, &source),
            Err(Error::MissingRequiredField("excess-blob-gas"))
        ));

        source.header.excess_blob_gas = Some(0);
        assert!(matches!(
            GenesisExecution::new(&spec, &source),
            Err(Error::SubRoot {
                name: "transactions root",
                ..
            })
        ));
    }
}
