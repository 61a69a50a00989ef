use super::*;

/// Consensus fork a container belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum DataVersion {
    #[display(fmt = "phase0")]
    Phase0,
    #[display(fmt = "altair")]
    Altair,
    #[display(fmt = "bellatrix")]
    Bellatrix,
    #[display(fmt = "capella")]
    Capella,
    #[display(fmt = "deneb")]
    Deneb,
    #[display(fmt = "electra")]
    Electra,
}

impl DataVersion {
    /// The fork preceding `self`. Phase 0 has none and returns itself.
    pub fn previous(self) -> Self {
        match self {
            Self::Phase0 | Self::Altair => Self::Phase0,
            Self::Bellatrix => Self::Altair,
            Self::Capella => Self::Bellatrix,
            Self::Deneb => Self::Capella,
            Self::Electra => Self::Deneb,
        }
    }
}

/// A beacon state tagged with its fork. Exactly one variant is populated and
/// [`VersionedBeaconState::version`] reports which.
#[derive(Debug, Clone, PartialEq)]
pub enum VersionedBeaconState<H: BeaconBlockHeader> {
    Deneb(Box<deneb::BeaconState<H>>),
    Electra(Box<electra::BeaconState<H>>),
}

impl<H: BeaconBlockHeader> VersionedBeaconState<H> {
    pub fn version(&self) -> DataVersion {
        match self {
            Self::Deneb(_) => DataVersion::Deneb,
            Self::Electra(_) => DataVersion::Electra,
        }
    }

    pub fn genesis_time(&self) -> u64 {
        match self {
            Self::Deneb(state) => state.genesis_time,
            Self::Electra(state) => state.genesis_time,
        }
    }

    pub fn latest_block_header(&self) -> &H {
        match self {
            Self::Deneb(state) => &state.latest_block_header,
            Self::Electra(state) => &state.latest_block_header,
        }
    }

    /// Tree hash root of the state.
    pub fn state_root(&self) -> Hash256 {
        match self {
            Self::Deneb(state) => state.tree_hash_root(),
            Self::Electra(state) => state.tree_hash_root(),
        }
    }
}
