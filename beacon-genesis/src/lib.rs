//! Deterministic beacon chain genesis state builder.
//!
//! A builder anchors the state to an execution block, derives the validator
//! registry and the sync committee, and stamps the proposer TEE metadata
//! into the latest block header when the header build carries it.

pub mod builder;
pub mod chain_spec;
pub mod config;
mod error;
pub mod execution;
pub mod roots;
pub mod serialize;
pub mod sync_committee;
pub mod tee;
pub mod validators;

pub use builder::{genesis_builder, DenebBuilder, ElectraBuilder, GenesisBuilder};
pub use chain_spec::ChainSpec;
pub use config::{Config, ConfigError, ConfigValue};
pub use error::{Error, Result, SubRootError};
pub use execution::ExecutionBlock;
pub use serialize::ContentType;
pub use tee::{ProposerTee, TeeQuote, TeeType, DEFAULT_TEE_QUOTE};
pub use validators::GenesisValidator;
