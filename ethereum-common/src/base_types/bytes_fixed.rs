// This file is part of Gear.

// Copyright (C) 2024 Gear Technologies Inc.
// SPDX-License-Identifier: GPL-3.0-or-later WITH Classpath-exception-2.0

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use super::*;

/// Fixed length opaque bytes (`ByteVector[N]`), rendered as a hex string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BytesFixed<const N: usize>(pub FixedArray<u8, N>);

impl<const N: usize> Default for BytesFixed<N> {
    fn default() -> Self {
        Self(FixedArray([0; N]))
    }
}

impl<const N: usize> AsRef<[u8]> for BytesFixed<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0 .0
    }
}

impl<const N: usize> AsMut<[u8]> for BytesFixed<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0 .0
    }
}

impl<const N: usize> From<[u8; N]> for BytesFixed<N> {
    fn from(value: [u8; N]) -> Self {
        Self(FixedArray(value))
    }
}

impl<const N: usize> TryFrom<&[u8]> for BytesFixed<N> {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let data: [u8; N] = value.try_into().map_err(|_| Error::InvalidLength {
            provided: value.len(),
            expected: N,
        })?;

        Ok(data.into())
    }
}

impl<const N: usize> Encode for BytesFixed<N> {
    fn is_ssz_fixed_len() -> bool {
        true
    }

    fn ssz_fixed_len() -> usize {
        N
    }

    fn ssz_append(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.as_ref())
    }

    fn ssz_bytes_len(&self) -> usize {
        N
    }
}

impl<const N: usize> TreeHash for BytesFixed<N> {
    fn tree_hash_type() -> tree_hash::TreeHashType {
        FixedArray::<u8, N>::tree_hash_type()
    }

    fn tree_hash_packed_encoding(&self) -> tree_hash::PackedEncoding {
        self.0.tree_hash_packed_encoding()
    }

    fn tree_hash_packing_factor() -> usize {
        FixedArray::<u8, N>::tree_hash_packing_factor()
    }

    fn tree_hash_root(&self) -> Hash256 {
        self.0.tree_hash_root()
    }
}

impl<const N: usize> Serialize for BytesFixed<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        utils::serialize_hex_bytes(self.as_ref(), serializer)
    }
}

impl<'de, const N: usize> Deserialize<'de> for BytesFixed<N> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bytes = utils::decode_hex_bytes(deserializer)?;

        Ok(Self(FixedArray(bytes.try_into().map_err(|_| {
            <D::Error as de::Error>::custom("Failed to convert to BytesFixed")
        })?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_length_encoding() {
        assert!(<BytesFixed<4> as Encode>::is_ssz_fixed_len());
        assert_eq!(<BytesFixed<96> as Encode>::ssz_fixed_len(), 96);
        assert_eq!(BytesFixed::<48>::default().as_ssz_bytes(), vec![0; 48]);
    }

    #[test]
    fn try_from_slice_checks_length() {
        assert_eq!(
            BytesFixed::<4>::try_from(&[1u8, 2, 3][..]),
            Err(Error::InvalidLength {
                provided: 3,
                expected: 4
            })
        );
        assert_eq!(
            BytesFixed::<4>::try_from(&[1u8, 2, 3, 4][..]).unwrap(),
            BytesFixed::from([1, 2, 3, 4])
        );
    }

    #[test]
    fn hex_round_trip_through_json() {
        let version = BytesFixed::<4>::from([0x05, 0x00, 0x00, 0x00]);
        let json = serde_json::to_string(&version).unwrap();

        assert_eq!(json, "\"0x05000000\"");
        assert_eq!(
            serde_json::from_str::<BytesFixed<4>>(&json).unwrap(),
            version
        );
    }
}
