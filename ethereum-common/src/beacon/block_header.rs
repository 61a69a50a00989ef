use super::*;

/// Length of the proposer TEE quote carried by [`TeeBlockHeader`].
pub const TEE_QUOTE_LENGTH: usize = 8_192;
/// SSZ length of [`BlockHeader`].
pub const BLOCK_HEADER_SSZ_LEN: usize = 112;
/// SSZ length of [`TeeBlockHeader`]: the baseline, the vendor tag and the quote.
pub const TEE_BLOCK_HEADER_SSZ_LEN: usize = BLOCK_HEADER_SSZ_LEN + 1 + TEE_QUOTE_LENGTH;

/// According to Ethereum spec [v1.4.0](https://github.com/ethereum/consensus-specs/blob/v1.4.0/specs/phase0/beacon-chain.md#beaconblockheader).
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Encode,
    Serialize,
    Deserialize,
    tree_hash_derive::TreeHash,
)]
pub struct BlockHeader {
    #[serde(
        serialize_with = "utils::serialize_u64",
        deserialize_with = "utils::deserialize_u64"
    )]
    pub slot: u64,
    #[serde(
        serialize_with = "utils::serialize_u64",
        deserialize_with = "utils::deserialize_u64"
    )]
    pub proposer_index: u64,
    pub parent_root: Hash256,
    pub state_root: Hash256,
    pub body_root: Hash256,
}

/// Block header extended with the proposer's trusted execution environment
/// attestation: the vendor tag and the fixed-size quote.
#[derive(Debug, Clone, PartialEq, Encode, Serialize, tree_hash_derive::TreeHash)]
pub struct TeeBlockHeader {
    #[serde(serialize_with = "utils::serialize_u64")]
    pub slot: u64,
    #[serde(serialize_with = "utils::serialize_u64")]
    pub proposer_index: u64,
    pub parent_root: Hash256,
    pub state_root: Hash256,
    pub body_root: Hash256,
    #[serde(serialize_with = "utils::serialize_u8")]
    pub proposer_tee_type: u8,
    pub proposer_tee_quote: base_types::BytesFixed<TEE_QUOTE_LENGTH>,
}

static_assertions::const_assert_eq!(
    BLOCK_HEADER_SSZ_LEN,
    2 * core::mem::size_of::<u64>() + 3 * core::mem::size_of::<Hash256>()
);
static_assertions::const_assert_eq!(TEE_BLOCK_HEADER_SSZ_LEN, 8_305);

impl From<BlockHeader> for TeeBlockHeader {
    fn from(value: BlockHeader) -> Self {
        Self {
            slot: value.slot,
            proposer_index: value.proposer_index,
            parent_root: value.parent_root,
            state_root: value.state_root,
            body_root: value.body_root,
            proposer_tee_type: 0,
            proposer_tee_quote: Default::default(),
        }
    }
}

/// A slot the proposer vendor tag can be written to, whatever integer type
/// the header declares for it.
pub trait TeeTypeSlot {
    fn store(&mut self, tag: u8);
}

macro_rules! impl_tee_type_slot {
    ($($t:ty),+) => {
        $(
            impl TeeTypeSlot for $t {
                // Vendor tags are small (0..=2) so the cast never truncates them.
                fn store(&mut self, tag: u8) {
                    *self = tag as $t;
                }
            }
        )+
    };
}

impl_tee_type_slot!(u8, u16, u32, u64, usize, i8, i16, i32, i64);

/// Storage of the proposer quote.
pub enum QuoteSlot<'a> {
    /// Fixed-length bytes: the quote is copied up to the slot length and the
    /// rest of the slot is zeroed.
    Fixed(&'a mut [u8]),
    /// Variable-length bytes: the slot is replaced with the whole quote.
    Variable(&'a mut Vec<u8>),
}

impl QuoteSlot<'_> {
    pub fn write(self, quote: &[u8]) {
        match self {
            Self::Fixed(slot) => {
                let copied = slot.len().min(quote.len());
                slot[..copied].copy_from_slice(&quote[..copied]);
                slot[copied..].fill(0);
            }
            Self::Variable(slot) => *slot = quote.to_vec(),
        }
    }
}

/// Header fields holding the proposer TEE attestation. Either of them may be
/// absent.
pub trait ProposerTeeFields {
    fn proposer_tee_type(&mut self) -> Option<&mut dyn TeeTypeSlot> {
        None
    }

    fn proposer_tee_quote(&mut self) -> Option<QuoteSlot<'_>> {
        None
    }
}

/// Optional access to the proposer TEE fields of a header.
///
/// Headers that store the attestation return them from
/// [`AsProposerTee::proposer_tee_fields`]; the rest keep the default.
pub trait AsProposerTee {
    fn proposer_tee_fields(&mut self) -> Option<&mut dyn ProposerTeeFields> {
        None
    }
}

/// A block header build the genesis state can carry.
pub trait BeaconBlockHeader:
    AsProposerTee + From<BlockHeader> + Clone + Debug + PartialEq + Encode + TreeHash + Serialize
{
}

impl<T> BeaconBlockHeader for T where
    T: AsProposerTee
        + From<BlockHeader>
        + Clone
        + Debug
        + PartialEq
        + Encode
        + TreeHash
        + Serialize
{
}

impl AsProposerTee for BlockHeader {}

impl AsProposerTee for TeeBlockHeader {
    fn proposer_tee_fields(&mut self) -> Option<&mut dyn ProposerTeeFields> {
        Some(self)
    }
}

impl ProposerTeeFields for TeeBlockHeader {
    fn proposer_tee_type(&mut self) -> Option<&mut dyn TeeTypeSlot> {
        Some(&mut self.proposer_tee_type)
    }

    fn proposer_tee_quote(&mut self) -> Option<QuoteSlot<'_>> {
        Some(QuoteSlot::Fixed(self.proposer_tee_quote.as_mut()))
    }
}
