use super::*;
use bitvec::{
    field::BitField,
    prelude::{BitVec, Lsb0},
};

const BITS_PER_BYTE: usize = 8;

/// Returns the minimum required bytes to represent a given number of bits.
///
/// `bit_len == 0` requires a single byte.
fn bytes_for_bit_len(bit_len: usize) -> usize {
    core::cmp::max(1, (bit_len + BITS_PER_BYTE - 1) / BITS_PER_BYTE)
}

type Inner = BitVec<u8, Lsb0>;

fn fmt_bits(bits: &Inner, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    let len = bits.len();
    let mut bits_written = 0;
    for (index, bit) in bits.iter().enumerate() {
        let value = i32::from(*bit);
        write!(f, "{value}")?;
        bits_written += 1;
        // SAFETY: checked subtraction is unnecessary, as len >= 1 when this for loop runs; qed
        if bits_written % 4 == 0 && index != len - 1 {
            write!(f, "_")?;
        }
    }

    write!(f, "]")
}

/// A homogenous collection of a fixed number of boolean values.
///
/// NOTE: a `Vector` of length `0` is illegal.
#[derive(PartialEq, Eq, Clone)]
pub struct Vector(Inner);

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "Bitvector<{}>[", self.len())?;

        fmt_bits(&self.0, f)
    }
}

impl Vector {
    /// Creates a vector of `len` unset bits.
    pub fn new(len: usize) -> Self {
        Self(BitVec::repeat(false, len))
    }

    /// Return the bit at `index`. `None` if index is out-of-bounds.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.0.get(index).map(|value| *value)
    }

    /// Set the bit at `index` to `value`. Return the previous value
    /// or `None` if index is out-of-bounds.
    pub fn set(&mut self, index: usize, value: bool) -> Option<bool> {
        self.0.get_mut(index).map(|mut slot| {
            let old = *slot;
            *slot = value;
            old
        })
    }

    /// Returns a serialized representation.
    ///
    /// The output is faithful to the SSZ encoding of `self`.
    pub fn as_bytes(&self) -> Vec<u8> {
        self.chunks(BITS_PER_BYTE).map(|byte| byte.load_le::<u8>()).collect()
    }
}

impl Deref for Vector {
    type Target = Inner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Serialize for Vector {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        utils::serialize_hex_bytes(&self.as_bytes(), serializer)
    }
}

impl Encode for Vector {
    fn is_ssz_fixed_len() -> bool {
        true
    }

    fn ssz_append(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.as_bytes())
    }

    fn ssz_bytes_len(&self) -> usize {
        bytes_for_bit_len(self.len())
    }
}

impl TreeHash for Vector {
    fn tree_hash_type() -> TreeHashType {
        TreeHashType::Vector
    }

    fn tree_hash_packed_encoding(&self) -> tree_hash::PackedEncoding {
        unreachable!("Vector should never be packed.")
    }

    fn tree_hash_packing_factor() -> usize {
        unreachable!("Vector should never be packed.")
    }

    fn tree_hash_root(&self) -> Hash256 {
        utils::bitfield_bytes_tree_hash_root(&self.as_bytes(), self.len())
    }
}

/// A homogenous collection of a variable number of boolean values bounded
/// by `limit`.
#[derive(PartialEq, Eq, Clone)]
pub struct List {
    bits: Inner,
    limit: usize,
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "Bitlist<len={}, cap={}>[", self.len(), self.limit)?;

        fmt_bits(&self.bits, f)
    }
}

impl List {
    /// Creates an empty bitlist that accepts up to `limit` bits.
    pub fn new(limit: usize) -> Self {
        Self {
            bits: BitVec::new(),
            limit,
        }
    }

    pub fn try_from_bools(value: &[bool], limit: usize) -> Result<Self, Error> {
        if value.len() > limit {
            return Err(Error::Bounded {
                bound: limit,
                provided: value.len(),
            });
        }

        let mut result = Self::new(limit);
        result.bits.extend(value.iter().copied());

        Ok(result)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Return the bit at `index`. `None` if index is out-of-bounds.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).map(|value| *value)
    }

    /// Set the bit at `index` to `value`. Return the previous value
    /// or `None` if index is out-of-bounds.
    pub fn set(&mut self, index: usize, value: bool) -> Option<bool> {
        self.bits.get_mut(index).map(|mut slot| {
            let old = *slot;
            *slot = value;
            old
        })
    }

    fn serialize_with_length(&self, buffer: &mut Vec<u8>, with_length_bit: bool) -> usize {
        let start_len = buffer.len();
        buffer.extend_from_slice(self.bits.as_raw_slice());

        if with_length_bit {
            let element_count = self.len();
            let marker_index = element_count % BITS_PER_BYTE;
            match buffer.last_mut() {
                Some(last) if marker_index != 0 => *last |= 1u8 << marker_index,
                _ => buffer.push(1u8),
            }
        }

        // SAFETY: checked subtraction is unnecessary, as buffer.len() >= start_len; qed
        buffer.len() - start_len
    }
}

impl Deref for List {
    type Target = Inner;

    fn deref(&self) -> &Self::Target {
        &self.bits
    }
}

impl Serialize for List {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut buffer = vec![];
        self.serialize_with_length(&mut buffer, true);

        utils::serialize_hex_bytes(&buffer, serializer)
    }
}

impl Encode for List {
    fn is_ssz_fixed_len() -> bool {
        false
    }

    fn ssz_append(&self, buf: &mut Vec<u8>) {
        self.serialize_with_length(buf, true);
    }

    fn ssz_bytes_len(&self) -> usize {
        self.len() / BITS_PER_BYTE + 1
    }
}

impl TreeHash for List {
    fn tree_hash_type() -> TreeHashType {
        TreeHashType::List
    }

    fn tree_hash_packed_encoding(&self) -> tree_hash::PackedEncoding {
        unreachable!("List should never be packed.")
    }

    fn tree_hash_packing_factor() -> usize {
        unreachable!("List should never be packed.")
    }

    fn tree_hash_root(&self) -> Hash256 {
        let root = utils::bitfield_bytes_tree_hash_root(self.bits.as_raw_slice(), self.limit);

        tree_hash::mix_in_length(&root, self.len())
    }
}
