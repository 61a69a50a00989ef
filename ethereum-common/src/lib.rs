pub mod base_types;
pub mod beacon;
pub mod utils;

use core::{
    any,
    fmt::{self, Debug},
    marker::PhantomData,
    ops::{Deref, Index},
    slice::SliceIndex,
};

pub use ethereum_types::U256;
use serde::{de, Deserialize, Serialize};
pub use ssz;
use ssz::Encode;
use ssz_derive::Encode;
pub use tree_hash::{self, Hash256};
use tree_hash::{TreeHash, TreeHashType};

pub const FAR_FUTURE_EPOCH: u64 = u64::MAX;
pub const GENESIS_EPOCH: u64 = 0;
pub const GENESIS_SLOT: u64 = 0;
pub const JUSTIFICATION_BITS_LENGTH: usize = 4;
/// Upper bound of the execution payload `extra_data`.
pub const MAX_EXTRA_DATA_BYTES: usize = 32;
