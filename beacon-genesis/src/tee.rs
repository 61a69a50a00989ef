//! Proposer trusted execution environment metadata of the genesis header.
//!
//! The resolver picks the vendor from the configuration, the injector writes
//! the vendor tag and the quote into whatever header build is in use.

use crate::{config::Config, Error, Result};
use ethereum_common::beacon::{AsProposerTee, TEE_QUOTE_LENGTH};
use lazy_static::lazy_static;
use std::fmt;

pub const TEE_VENDOR_FROM_MNEMONICS: &str = "TEE_VENDOR_FROM_MNEMONICS";
pub const TEE_VENDOR: &str = "TEE_VENDOR";
pub const TEE_PROPOSER_VENDOR: &str = "TEE_PROPOSER_VENDOR";
pub const TEE_PROPOSER_ATTESTATION: &str = "TEE_PROPOSER_ATTESTATION";

/// Marker repeated to fill the default quote.
pub const TEE_QUOTE_MARKER: &[u8] = b"PoTE-genesis-TEE";

lazy_static! {
    /// Deterministic placeholder quote. It is not a valid attestation.
    pub static ref DEFAULT_TEE_QUOTE: TeeQuote = TeeQuote::repeat_marker(TEE_QUOTE_MARKER);
}

/// TEE vendor of the proposer. The discriminants are the on-chain tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TeeType {
    /// AMD SEV.
    #[default]
    Sev = 0,
    /// Intel TDX.
    Tdx = 1,
    /// ARM CCA.
    Cca = 2,
}

impl TeeType {
    pub const MIN_TAG: u64 = Self::Sev as u64;
    pub const MAX_TAG: u64 = Self::Cca as u64;

    /// Case-insensitive lookup ignoring surrounding whitespace. Unknown names
    /// give `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "sev" => Some(Self::Sev),
            "tdx" => Some(Self::Tdx),
            "cca" => Some(Self::Cca),
            _ => None,
        }
    }

    pub fn from_tag(tag: u64) -> Option<Self> {
        match tag {
            0 => Some(Self::Sev),
            1 => Some(Self::Tdx),
            2 => Some(Self::Cca),
            _ => None,
        }
    }

    pub fn tag(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for TeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sev => "sev",
            Self::Tdx => "tdx",
            Self::Cca => "cca",
        })
    }
}

/// Attestation quote of exactly [`TEE_QUOTE_LENGTH`] bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct TeeQuote(Box<[u8; TEE_QUOTE_LENGTH]>);

impl TeeQuote {
    fn repeat_marker(marker: &[u8]) -> Self {
        let mut quote = Box::new([0u8; TEE_QUOTE_LENGTH]);
        for (byte, marker_byte) in quote.iter_mut().zip(marker.iter().cycle()) {
            *byte = *marker_byte;
        }

        Self(quote)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0[..]
    }
}

impl fmt::Debug for TeeQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TeeQuote(0x{}..)", hex::encode(&self.0[..8]))
    }
}

/// Proposer TEE metadata resolved for the genesis header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposerTee {
    pub tee_type: TeeType,
    pub quote: TeeQuote,
}

impl Default for ProposerTee {
    fn default() -> Self {
        Self {
            tee_type: TeeType::default(),
            quote: DEFAULT_TEE_QUOTE.clone(),
        }
    }
}

/// Resolves the proposer vendor. The first source that applies wins:
/// 1. `TEE_VENDOR_FROM_MNEMONICS`, a vendor name. Unknown names are skipped.
/// 2. `TEE_VENDOR`, the default vendor tag for every validator.
/// 3. `TEE_PROPOSER_VENDOR`, the proposer override of `TEE_VENDOR`.
///
/// The quote is always [`DEFAULT_TEE_QUOTE`].
///
/// A vendor tag above 2 is [`Error::ConfigRange`]. A value that is not an
/// unsigned integer at all, a negative one included, is rejected earlier as
/// [`Error::Config`].
pub fn resolve_proposer_tee(config: &Config) -> Result<ProposerTee> {
    if config.get(TEE_PROPOSER_ATTESTATION).is_some() {
        log::warn!(
            "{TEE_PROPOSER_ATTESTATION} is ignored, the genesis header carries the default quote"
        );
    }

    if let Some(name) = config.get_string(TEE_VENDOR_FROM_MNEMONICS) {
        match TeeType::from_name(&name) {
            Some(tee_type) => {
                log::info!("Proposer TEE vendor from mnemonics: {tee_type}");

                return Ok(ProposerTee {
                    tee_type,
                    quote: DEFAULT_TEE_QUOTE.clone(),
                });
            }
            None => log::warn!("Ignoring unknown TEE vendor {name:?} from mnemonics"),
        }
    }

    let default_vendor = checked_vendor(TEE_VENDOR, config.get_uint_or(TEE_VENDOR, 0)?)?;
    let proposer_vendor = checked_vendor(
        TEE_PROPOSER_VENDOR,
        config.get_uint_or(TEE_PROPOSER_VENDOR, default_vendor.tag().into())?,
    )?;

    Ok(ProposerTee {
        tee_type: proposer_vendor,
        quote: DEFAULT_TEE_QUOTE.clone(),
    })
}

fn checked_vendor(key: &'static str, value: u64) -> Result<TeeType> {
    TeeType::from_tag(value).ok_or(Error::ConfigRange {
        key,
        value,
        min: TeeType::MIN_TAG,
        max: TeeType::MAX_TAG,
    })
}

/// Writes the vendor tag and the quote into the header if it carries the
/// corresponding fields. The two writes are independent and a header without
/// them is left untouched.
pub fn apply_tee_to_header<H>(header: Option<&mut H>, tee_type: TeeType, quote: &[u8])
where
    H: AsProposerTee + ?Sized,
{
    let Some(fields) = header.and_then(|header| header.proposer_tee_fields()) else {
        return;
    };

    if let Some(slot) = fields.proposer_tee_type() {
        slot.store(tee_type.tag());
    }

    if let Some(slot) = fields.proposer_tee_quote() {
        slot.write(quote);
    }
}

/// Applies the SEV vendor and the default quote.
pub fn apply_default_tee_to_header<H>(header: Option<&mut H>)
where
    H: AsProposerTee + ?Sized,
{
    apply_tee_to_header(header, TeeType::default(), DEFAULT_TEE_QUOTE.as_bytes());
}

/// Resolves the proposer metadata from `config` and applies it to `header`.
pub fn apply_tee_to_header_from_config<H>(header: &mut H, config: &Config) -> Result<ProposerTee>
where
    H: AsProposerTee + ?Sized,
{
    let proposer_tee = resolve_proposer_tee(config)?;
    apply_tee_to_header(
        Some(header),
        proposer_tee.tee_type,
        proposer_tee.quote.as_bytes(),
    );

    Ok(proposer_tee)
}
