//! Roots of the genesis sub-structures the state commits to.

use crate::chain_spec::ChainSpec;
use alloy_eips::eip4895;
use alloy_primitives::Bytes;
use ethereum_common::{
    base_types::{self, ByteList, List, Vector},
    beacon::{DepositData, Withdrawal},
    tree_hash::TreeHash,
    Hash256,
};

/// Root of the execution block withdrawals as a `List[Withdrawal, MAX_WITHDRAWALS_PER_PAYLOAD]`.
pub fn withdrawals_root(
    spec: &ChainSpec,
    withdrawals: &[eip4895::Withdrawal],
) -> Result<Hash256, base_types::Error> {
    let withdrawals = withdrawals
        .iter()
        .map(|withdrawal| Withdrawal {
            index: withdrawal.index,
            validator_index: withdrawal.validator_index,
            address: withdrawal.address.0 .0.into(),
            amount: withdrawal.amount,
        })
        .collect();

    Ok(List::try_from_vec(withdrawals, spec.max_withdrawals_per_payload)?.tree_hash_root())
}

/// Root of the raw transactions as a
/// `List[ByteList[MAX_BYTES_PER_TRANSACTION], MAX_TRANSACTIONS_PER_PAYLOAD]`.
pub fn transactions_root(
    spec: &ChainSpec,
    transactions: &[Bytes],
) -> Result<Hash256, base_types::Error> {
    let transactions = transactions
        .iter()
        .map(|transaction| ByteList::try_from_slice(transaction, spec.max_bytes_per_transaction))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(List::try_from_vec(transactions, spec.max_transactions_per_payload)?.tree_hash_root())
}

/// Root of the deposit contract tree without deposits.
pub fn deposit_root(spec: &ChainSpec) -> Hash256 {
    List::<DepositData>::new(spec.deposit_list_limit()).tree_hash_root()
}

/// Every genesis RANDAO mix is the execution block hash.
pub fn randao_mixes(spec: &ChainSpec, block_hash: Hash256) -> Vector<Hash256> {
    Vector::repeat(block_hash, spec.epochs_per_historical_vector)
}
