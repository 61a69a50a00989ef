//! Sync committee selection at genesis.
//!
//! Both the current and the next committee of a genesis state are the
//! committee computed for epoch 1 from the genesis RANDAO mixes.

use crate::{chain_spec::ChainSpec, error::SubRootError};
use blst::min_pk::{AggregatePublicKey, PublicKey};
use ethereum_common::{
    base_types::Vector,
    beacon::{BLSPubKey, DataVersion, SyncCommittee, Validator},
    Hash256, GENESIS_EPOCH,
};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

pub const DOMAIN_SYNC_COMMITTEE: [u8; 4] = [7, 0, 0, 0];

fn hash(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }

    hasher.finalize().into()
}

/// Seed of `epoch` when every RANDAO mix equals `randao_mix`.
pub fn sync_committee_seed(epoch: u64, randao_mix: &Hash256) -> [u8; 32] {
    hash(&[
        &DOMAIN_SYNC_COMMITTEE[..],
        &epoch.to_le_bytes()[..],
        randao_mix.as_bytes(),
    ])
}

/// Swap-or-not shuffle of a single index.
pub fn compute_shuffled_index(
    mut index: usize,
    index_count: usize,
    seed: &[u8; 32],
    rounds: u8,
) -> usize {
    debug_assert!(index < index_count);

    for round in 0..rounds {
        let pivot_hash = hash(&[&seed[..], &[round][..]]);
        let mut pivot_bytes = [0u8; 8];
        pivot_bytes.copy_from_slice(&pivot_hash[..8]);
        let pivot = (u64::from_le_bytes(pivot_bytes) % index_count as u64) as usize;

        let flip = (pivot + index_count - index) % index_count;
        let position = index.max(flip);
        let source = hash(&[
            &seed[..],
            &[round][..],
            &((position / 256) as u32).to_le_bytes()[..],
        ]);
        let byte = source[(position % 256) / 8];

        if (byte >> (position % 8)) & 1 == 1 {
            index = flip;
        }
    }

    index
}

fn is_active(validator: &Validator, epoch: u64) -> bool {
    validator.activation_epoch <= epoch && epoch < validator.exit_epoch
}

/// Registry indices of the next sync committee members, with repetitions.
pub fn sync_committee_indices(
    spec: &ChainSpec,
    version: DataVersion,
    validators: &[Validator],
    randao_mix: &Hash256,
) -> Result<Vec<usize>, SubRootError> {
    let epoch = GENESIS_EPOCH + 1;
    let active: Vec<usize> = validators
        .iter()
        .enumerate()
        .filter(|(_, validator)| is_active(validator, epoch))
        .map(|(index, _)| index)
        .collect();

    if active.is_empty() {
        return Err(SubRootError::NoActiveValidators);
    }

    let seed = sync_committee_seed(epoch, randao_mix);
    let mut indices = Vec::with_capacity(spec.sync_committee_size);
    let mut i = 0usize;
    while indices.len() < spec.sync_committee_size {
        let shuffled = compute_shuffled_index(
            i % active.len(),
            active.len(),
            &seed,
            spec.shuffle_round_count,
        );
        let candidate = active[shuffled];
        let effective_balance = validators[candidate].effective_balance;

        let accepted = match version {
            DataVersion::Electra => {
                let random_bytes = hash(&[&seed[..], &((i / 16) as u64).to_le_bytes()[..]]);
                let offset = i % 16 * 2;
                let random_value =
                    u16::from_le_bytes([random_bytes[offset], random_bytes[offset + 1]]) as u64;

                effective_balance * u16::MAX as u64
                    >= spec.max_effective_balance_electra * random_value
            }
            _ => {
                let random_byte =
                    hash(&[&seed[..], &((i / 32) as u64).to_le_bytes()[..]])[i % 32] as u64;

                effective_balance * u8::MAX as u64 >= spec.max_effective_balance * random_byte
            }
        };

        if accepted {
            indices.push(candidate);
        }

        i += 1;
    }

    Ok(indices)
}

fn decode_public_key(pubkey: &BLSPubKey) -> Result<PublicKey, SubRootError> {
    PublicKey::key_validate(pubkey.as_ref()).map_err(|e| SubRootError::InvalidPublicKey {
        pubkey: hex::encode(pubkey.as_ref()),
        reason: format!("{e:?}"),
    })
}

/// The genesis sync committee of `validators`. `randao_mix` is the genesis
/// RANDAO mix, the hash of the execution block.
pub fn genesis_sync_committee(
    spec: &ChainSpec,
    version: DataVersion,
    validators: &[Validator],
    randao_mix: &Hash256,
) -> Result<SyncCommittee, SubRootError> {
    let indices = sync_committee_indices(spec, version, validators, randao_mix)?;

    let mut decoded = BTreeMap::new();
    for index in &indices {
        if !decoded.contains_key(index) {
            decoded.insert(*index, decode_public_key(&validators[*index].pubkey)?);
        }
    }

    let members: Vec<&PublicKey> = indices.iter().filter_map(|i| decoded.get(i)).collect();
    let aggregate = AggregatePublicKey::aggregate(&members, false).map_err(|e| {
        SubRootError::InvalidPublicKey {
            pubkey: "aggregate".into(),
            reason: format!("{e:?}"),
        }
    })?;

    Ok(SyncCommittee {
        pubkeys: Vector::from(
            indices
                .iter()
                .map(|index| validators[*index].pubkey.clone())
                .collect::<Vec<_>>(),
        ),
        aggregate_pubkey: BLSPubKey::from(aggregate.to_public_key().compress()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{beacon_validators, GenesisValidator};
    use blst::min_pk::SecretKey;

    fn test_pubkey(seed: u8) -> BLSPubKey {
        let secret = SecretKey::key_gen(&[seed; 32], &[]).unwrap();

        BLSPubKey::from(secret.sk_to_pk().compress())
    }

    fn registry(spec: &ChainSpec, count: u8, version: DataVersion) -> Vec<Validator> {
        let validators: Vec<_> = (0..count)
            .map(|seed| GenesisValidator {
                pubkey: test_pubkey(seed + 1),
                withdrawal_credentials: Hash256::zero(),
                balance: None,
            })
            .collect();

        beacon_validators(spec, version, &validators)
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let seed = [0x42; 32];
        let mut shuffled: Vec<usize> = (0..100)
            .map(|index| compute_shuffled_index(index, 100, &seed, 90))
            .collect();
        shuffled.sort_unstable();

        assert_eq!(shuffled, (0..100).collect::<Vec<_>>());
        assert_eq!(compute_shuffled_index(0, 1, &seed, 90), 0);
        assert_eq!(compute_shuffled_index(7, 10, &seed, 0), 7);
    }

    #[test]
    fn seed_layout() {
        let mix = Hash256::repeat_byte(0x11);
        let mut preimage = vec![7, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0];
        preimage.extend_from_slice(&[0x11; 32]);

        assert_eq!(
            sync_committee_seed(1, &mix).to_vec(),
            Sha256::digest(&preimage).to_vec()
        );
    }

    #[test]
    fn committee_is_full_and_deterministic() {
        let spec = ChainSpec {
            sync_committee_size: 32,
            ..Default::default()
        };
        let mix = Hash256::repeat_byte(0x01);

        for version in [DataVersion::Deneb, DataVersion::Electra] {
            let validators = registry(&spec, 4, version);
            let committee = genesis_sync_committee(&spec, version, &validators, &mix).unwrap();
            let again = genesis_sync_committee(&spec, version, &validators, &mix).unwrap();

            assert_eq!(committee.pubkeys.len(), 32);
            assert_eq!(committee, again);
            assert!(committee
                .pubkeys
                .iter()
                .all(|key| validators.iter().any(|v| v.pubkey == *key)));
        }
    }

    #[test]
    fn single_member_aggregate() {
        let spec = ChainSpec {
            sync_committee_size: 1,
            ..Default::default()
        };
        let validators = registry(&spec, 1, DataVersion::Deneb);
        let committee =
            genesis_sync_committee(&spec, DataVersion::Deneb, &validators, &Hash256::zero())
                .unwrap();

        assert_eq!(committee.aggregate_pubkey, validators[0].pubkey);
    }

    #[test]
    fn rejects_empty_or_invalid_sets() {
        let spec = ChainSpec {
            sync_committee_size: 8,
            ..Default::default()
        };

        assert!(matches!(
            genesis_sync_committee(&spec, DataVersion::Electra, &[], &Hash256::zero()),
            Err(SubRootError::NoActiveValidators)
        ));

        let mut validators = registry(&spec, 1, DataVersion::Electra);
        validators[0].pubkey = BLSPubKey::from([0xff; 48]);
        assert!(matches!(
            genesis_sync_committee(&spec, DataVersion::Electra, &validators, &Hash256::zero()),
            Err(SubRootError::InvalidPublicKey { .. })
        ));
    }
}
