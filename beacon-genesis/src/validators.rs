//! Genesis validator registry and balances.

use crate::chain_spec::ChainSpec;
use ethereum_common::{
    base_types::{self, List},
    beacon::{BLSPubKey, DataVersion, Validator},
    tree_hash::TreeHash,
    Hash256, FAR_FUTURE_EPOCH, GENESIS_EPOCH,
};
use serde::Deserialize;

/// Withdrawal credentials prefix of compounding validators.
pub const COMPOUNDING_WITHDRAWAL_PREFIX: u8 = 0x02;

/// A validator as listed in the genesis input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenesisValidator {
    pub pubkey: BLSPubKey,
    pub withdrawal_credentials: Hash256,
    /// Gwei. Missing means `MAX_EFFECTIVE_BALANCE`.
    #[serde(default)]
    pub balance: Option<u64>,
}

impl GenesisValidator {
    fn balance(&self, spec: &ChainSpec) -> u64 {
        self.balance.unwrap_or(spec.max_effective_balance)
    }

    fn has_compounding_credentials(&self) -> bool {
        self.withdrawal_credentials.0[0] == COMPOUNDING_WITHDRAWAL_PREFIX
    }
}

fn effective_balance(
    spec: &ChainSpec,
    version: DataVersion,
    validator: &GenesisValidator,
) -> (u64, bool) {
    let balance = validator.balance(spec);
    let rounded = balance - balance % spec.effective_balance_increment.max(1);

    match version {
        DataVersion::Electra => {
            let cap = match validator.has_compounding_credentials() {
                true => spec.max_effective_balance_electra,
                false => spec.min_activation_balance,
            };
            let effective = rounded.min(cap);

            (effective, effective >= spec.min_activation_balance)
        }
        _ => {
            let effective = rounded.min(spec.max_effective_balance);

            (effective, effective == spec.max_effective_balance)
        }
    }
}

/// Registry entries of the genesis validators in input order.
pub fn beacon_validators(
    spec: &ChainSpec,
    version: DataVersion,
    validators: &[GenesisValidator],
) -> Vec<Validator> {
    validators
        .iter()
        .map(|validator| {
            let (effective_balance, active) = effective_balance(spec, version, validator);
            let activation_epoch = match active {
                true => GENESIS_EPOCH,
                false => FAR_FUTURE_EPOCH,
            };

            Validator {
                pubkey: validator.pubkey.clone(),
                withdrawal_credentials: validator.withdrawal_credentials,
                effective_balance,
                slashed: false,
                activation_eligibility_epoch: activation_epoch,
                activation_epoch,
                exit_epoch: FAR_FUTURE_EPOCH,
                withdrawable_epoch: FAR_FUTURE_EPOCH,
            }
        })
        .collect()
}

/// Registry list bounded by `VALIDATOR_REGISTRY_LIMIT` together with its
/// root, the genesis validators root.
pub fn validator_registry(
    spec: &ChainSpec,
    version: DataVersion,
    validators: &[GenesisValidator],
) -> Result<(List<Validator>, Hash256), base_types::Error> {
    let registry = List::try_from_vec(
        beacon_validators(spec, version, validators),
        spec.validator_registry_limit,
    )?;
    let root = registry.tree_hash_root();

    Ok((registry, root))
}

pub fn genesis_balances(
    spec: &ChainSpec,
    validators: &[GenesisValidator],
) -> Result<List<u64>, base_types::Error> {
    List::try_from_vec(
        validators
            .iter()
            .map(|validator| validator.balance(spec))
            .collect(),
        spec.validator_registry_limit,
    )
}
