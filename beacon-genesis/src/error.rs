use crate::config::ConfigError;
use ethereum_common::{base_types, beacon::DataVersion};

/// Custom Result type with two generic parameters for user convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Describes possible errors that might happen while building or encoding a genesis state
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid {key} value: {value} (must be between {min} and {max})")]
    ConfigRange {
        key: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },
    #[error("Execution-layer block has missing {0} field")]
    MissingRequiredField(&'static str),
    #[error("Extra data is {len} bytes, max is {max}")]
    ExtraDataTooLong { len: usize, max: usize },
    #[error("Failed to compute {name}: {source}")]
    SubRoot {
        name: &'static str,
        #[source]
        source: SubRootError,
    },
    #[error("Unsupported version: {0}")]
    UnsupportedVersion(DataVersion),
    #[error("Unsupported content type: {0}")]
    UnsupportedFormat(String),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn sub_root<E: Into<SubRootError>>(name: &'static str) -> impl FnOnce(E) -> Self {
        move |source| Self::SubRoot {
            name,
            source: source.into(),
        }
    }
}

/// Failures of the collaborators computing roots and derived collections
#[derive(thiserror::Error, Debug)]
pub enum SubRootError {
    #[error("Collection limit exceeded: {0}")]
    Limit(#[from] base_types::Error),
    #[error("Invalid BLS public key 0x{pubkey}: {reason}")]
    InvalidPublicKey { pubkey: String, reason: String },
    #[error("No active validators")]
    NoActiveValidators,
}
