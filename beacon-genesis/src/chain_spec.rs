use crate::config::{Config, ConfigError};
use ethereum_common::{
    beacon::{DataVersion, ExecutionPayloadLimits, Version},
    FAR_FUTURE_EPOCH,
};

/// Numeric constants the builders size collections and timing with. Every
/// value falls back to its mainnet default when absent from the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainSpec {
    pub slots_per_epoch: u64,
    pub slots_per_historical_root: usize,
    pub epochs_per_historical_vector: usize,
    pub epochs_per_slashings_vector: usize,
    pub historical_roots_limit: usize,
    pub validator_registry_limit: usize,
    pub epochs_per_eth1_voting_period: u64,
    pub eth1_data_votes_limit: usize,
    pub sync_committee_size: usize,

    pub max_effective_balance: u64,
    pub max_effective_balance_electra: u64,
    pub min_activation_balance: u64,
    pub effective_balance_increment: u64,
    pub shuffle_round_count: u8,
    pub deposit_contract_tree_depth: u32,

    pub max_transactions_per_payload: usize,
    pub max_bytes_per_transaction: usize,
    pub max_withdrawals_per_payload: usize,

    pub max_proposer_slashings: usize,
    pub max_attester_slashings: usize,
    pub max_attester_slashings_electra: usize,
    pub max_attestations: usize,
    pub max_attestations_electra: usize,
    pub max_deposits: usize,
    pub max_voluntary_exits: usize,
    pub max_bls_to_execution_changes: usize,
    pub max_blob_commitments_per_block: usize,
    pub max_validators_per_committee: usize,
    pub max_committees_per_slot: usize,
    pub max_deposit_requests_per_payload: usize,
    pub max_withdrawal_requests_per_payload: usize,
    pub max_consolidation_requests_per_payload: usize,
    pub pending_deposits_limit: usize,
    pub pending_partial_withdrawals_limit: usize,
    pub pending_consolidations_limit: usize,

    pub genesis_delay: u64,
    pub min_genesis_time: u64,

    pub genesis_fork_version: Version,
    pub altair_fork_version: Version,
    pub bellatrix_fork_version: Version,
    pub capella_fork_version: Version,
    pub deneb_fork_version: Version,
    pub electra_fork_version: Version,
    pub deneb_fork_epoch: u64,
    pub electra_fork_epoch: u64,
}

impl ChainSpec {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let shuffle_round_count = config.get_uint_or("SHUFFLE_ROUND_COUNT", 90)?;
        let deposit_contract_tree_depth = config.get_uint_or("DEPOSIT_CONTRACT_TREE_DEPTH", 32)?;
        let slots_per_epoch = config.get_uint_or("SLOTS_PER_EPOCH", 32)?;
        let epochs_per_eth1_voting_period = config.get_uint_or("EPOCHS_PER_ETH1_VOTING_PERIOD", 64)?;
        let eth1_data_votes_limit = epochs_per_eth1_voting_period
            .checked_mul(slots_per_epoch)
            .and_then(|slots| usize::try_from(slots).ok())
            .ok_or_else(|| ConfigError::InvalidValue {
                key: "EPOCHS_PER_ETH1_VOTING_PERIOD".into(),
                expected: "a voting period of at most usize::MAX slots",
                value: epochs_per_eth1_voting_period.to_string(),
            })?;

        Ok(Self {
            slots_per_epoch,
            slots_per_historical_root: config.get_usize_or("SLOTS_PER_HISTORICAL_ROOT", 8_192)?,
            epochs_per_historical_vector: config
                .get_usize_or("EPOCHS_PER_HISTORICAL_VECTOR", 65_536)?,
            epochs_per_slashings_vector: config
                .get_usize_or("EPOCHS_PER_SLASHINGS_VECTOR", 8_192)?,
            historical_roots_limit: config.get_usize_or("HISTORICAL_ROOTS_LIMIT", 1 << 24)?,
            validator_registry_limit: config.get_usize_or("VALIDATOR_REGISTRY_LIMIT", 1 << 40)?,
            epochs_per_eth1_voting_period,
            eth1_data_votes_limit,
            sync_committee_size: config.get_usize_or("SYNC_COMMITTEE_SIZE", 512)?,

            max_effective_balance: config.get_uint_or("MAX_EFFECTIVE_BALANCE", 32_000_000_000)?,
            max_effective_balance_electra: config
                .get_uint_or("MAX_EFFECTIVE_BALANCE_ELECTRA", 2_048_000_000_000)?,
            min_activation_balance: config.get_uint_or("MIN_ACTIVATION_BALANCE", 32_000_000_000)?,
            effective_balance_increment: config
                .get_uint_or("EFFECTIVE_BALANCE_INCREMENT", 1_000_000_000)?,
            shuffle_round_count: u8::try_from(shuffle_round_count).map_err(|_| {
                ConfigError::InvalidValue {
                    key: "SHUFFLE_ROUND_COUNT".into(),
                    expected: "a round count below 256",
                    value: shuffle_round_count.to_string(),
                }
            })?,
            deposit_contract_tree_depth: u32::try_from(deposit_contract_tree_depth)
                .ok()
                .filter(|depth| *depth < usize::BITS)
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: "DEPOSIT_CONTRACT_TREE_DEPTH".into(),
                    expected: "a tree depth",
                    value: deposit_contract_tree_depth.to_string(),
                })?,

            max_transactions_per_payload: config
                .get_usize_or("MAX_TRANSACTIONS_PER_PAYLOAD", 1 << 20)?,
            max_bytes_per_transaction: config.get_usize_or("MAX_BYTES_PER_TRANSACTION", 1 << 30)?,
            max_withdrawals_per_payload: config.get_usize_or("MAX_WITHDRAWALS_PER_PAYLOAD", 16)?,

            max_proposer_slashings: config.get_usize_or("MAX_PROPOSER_SLASHINGS", 16)?,
            max_attester_slashings: config.get_usize_or("MAX_ATTESTER_SLASHINGS", 2)?,
            max_attester_slashings_electra: config
                .get_usize_or("MAX_ATTESTER_SLASHINGS_ELECTRA", 1)?,
            max_attestations: config.get_usize_or("MAX_ATTESTATIONS", 128)?,
            max_attestations_electra: config.get_usize_or("MAX_ATTESTATIONS_ELECTRA", 8)?,
            max_deposits: config.get_usize_or("MAX_DEPOSITS", 16)?,
            max_voluntary_exits: config.get_usize_or("MAX_VOLUNTARY_EXITS", 16)?,
            max_bls_to_execution_changes: config.get_usize_or("MAX_BLS_TO_EXECUTION_CHANGES", 16)?,
            max_blob_commitments_per_block: config
                .get_usize_or("MAX_BLOB_COMMITMENTS_PER_BLOCK", 4_096)?,
            max_validators_per_committee: config
                .get_usize_or("MAX_VALIDATORS_PER_COMMITTEE", 2_048)?,
            max_committees_per_slot: config.get_usize_or("MAX_COMMITTEES_PER_SLOT", 64)?,
            max_deposit_requests_per_payload: config
                .get_usize_or("MAX_DEPOSIT_REQUESTS_PER_PAYLOAD", 8_192)?,
            max_withdrawal_requests_per_payload: config
                .get_usize_or("MAX_WITHDRAWAL_REQUESTS_PER_PAYLOAD", 16)?,
            max_consolidation_requests_per_payload: config
                .get_usize_or("MAX_CONSOLIDATION_REQUESTS_PER_PAYLOAD", 2)?,
            pending_deposits_limit: config.get_usize_or("PENDING_DEPOSITS_LIMIT", 1 << 27)?,
            pending_partial_withdrawals_limit: config
                .get_usize_or("PENDING_PARTIAL_WITHDRAWALS_LIMIT", 1 << 27)?,
            pending_consolidations_limit: config
                .get_usize_or("PENDING_CONSOLIDATIONS_LIMIT", 1 << 18)?,

            genesis_delay: config.get_uint_or("GENESIS_DELAY", 604_800)?,
            min_genesis_time: config.get_uint_or("MIN_GENESIS_TIME", 0)?,

            genesis_fork_version: config
                .get_fixed_bytes_or("GENESIS_FORK_VERSION", [0, 0, 0, 0])?
                .into(),
            altair_fork_version: config
                .get_fixed_bytes_or("ALTAIR_FORK_VERSION", [1, 0, 0, 0])?
                .into(),
            bellatrix_fork_version: config
                .get_fixed_bytes_or("BELLATRIX_FORK_VERSION", [2, 0, 0, 0])?
                .into(),
            capella_fork_version: config
                .get_fixed_bytes_or("CAPELLA_FORK_VERSION", [3, 0, 0, 0])?
                .into(),
            deneb_fork_version: config
                .get_fixed_bytes_or("DENEB_FORK_VERSION", [4, 0, 0, 0])?
                .into(),
            electra_fork_version: config
                .get_fixed_bytes_or("ELECTRA_FORK_VERSION", [5, 0, 0, 0])?
                .into(),
            deneb_fork_epoch: config.get_uint_or("DENEB_FORK_EPOCH", FAR_FUTURE_EPOCH)?,
            electra_fork_epoch: config.get_uint_or("ELECTRA_FORK_EPOCH", FAR_FUTURE_EPOCH)?,
        })
    }

    pub fn fork_version(&self, version: DataVersion) -> Version {
        match version {
            DataVersion::Phase0 => self.genesis_fork_version.clone(),
            DataVersion::Altair => self.altair_fork_version.clone(),
            DataVersion::Bellatrix => self.bellatrix_fork_version.clone(),
            DataVersion::Capella => self.capella_fork_version.clone(),
            DataVersion::Deneb => self.deneb_fork_version.clone(),
            DataVersion::Electra => self.electra_fork_version.clone(),
        }
    }

    /// Limit of the deposit list committed to by the deposit root.
    pub fn deposit_list_limit(&self) -> usize {
        1 << self.deposit_contract_tree_depth
    }

    pub fn execution_payload_limits(&self) -> ExecutionPayloadLimits {
        ExecutionPayloadLimits {
            max_transactions_per_payload: self.max_transactions_per_payload,
            max_withdrawals_per_payload: self.max_withdrawals_per_payload,
        }
    }
}

impl Default for ChainSpec {
    fn default() -> Self {
        // SAFETY: every default above is representable; qed
        Self::from_config(&Config::default()).expect("mainnet defaults are valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mainnet_defaults() {
        let spec = ChainSpec::default();

        assert_eq!(spec.slots_per_historical_root, 8_192);
        assert_eq!(spec.epochs_per_slashings_vector, 8_192);
        assert_eq!(spec.sync_committee_size, 512);
        assert_eq!(spec.genesis_delay, 604_800);
        assert_eq!(spec.min_genesis_time, 0);
        assert_eq!(spec.deposit_list_limit(), 1 << 32);
        assert_eq!(spec.eth1_data_votes_limit, 2_048);
        assert_eq!(spec.electra_fork_epoch, FAR_FUTURE_EPOCH);
        assert_eq!(
            spec.fork_version(DataVersion::Electra),
            Version::from([5, 0, 0, 0])
        );
    }

    #[test]
    fn overrides() {
        let config = Config::default()
            .with_value("SLOTS_PER_HISTORICAL_ROOT", 64u64)
            .with_value("SYNC_COMMITTEE_SIZE", "32")
            .with_value("ELECTRA_FORK_VERSION", "0x05000001");
        let spec = ChainSpec::from_config(&config).unwrap();

        assert_eq!(spec.slots_per_historical_root, 64);
        assert_eq!(spec.sync_committee_size, 32);
        assert_eq!(spec.electra_fork_version, Version::from([5, 0, 0, 1]));
    }

    #[test]
    fn rejects_unrepresentable_values() {
        let config = Config::default().with_value("SHUFFLE_ROUND_COUNT", 300u64);
        assert!(ChainSpec::from_config(&config).is_err());

        let config = Config::default()
            .with_value("SLOTS_PER_EPOCH", 1u64 << 32)
            .with_value("EPOCHS_PER_ETH1_VOTING_PERIOD", 1u64 << 32);
        assert!(matches!(
            ChainSpec::from_config(&config),
            Err(ConfigError::InvalidValue { key, .. }) if key == "EPOCHS_PER_ETH1_VOTING_PERIOD"
        ));
    }
}
