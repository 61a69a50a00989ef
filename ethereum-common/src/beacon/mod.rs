use super::*;

mod block_header;
mod common;
pub mod deneb;
pub mod electra;
mod execution_payload;
mod versioned;

pub use block_header::{
    AsProposerTee, BeaconBlockHeader, BlockHeader, ProposerTeeFields, QuoteSlot, TeeBlockHeader,
    TeeTypeSlot, BLOCK_HEADER_SSZ_LEN, TEE_BLOCK_HEADER_SSZ_LEN, TEE_QUOTE_LENGTH,
};
pub use common::*;
pub use execution_payload::{ExecutionPayload, ExecutionPayloadHeader, ExecutionPayloadLimits};
pub use versioned::{DataVersion, VersionedBeaconState};

#[cfg(test)]
mod tests;
