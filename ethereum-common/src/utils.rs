use super::*;
use core::str::FromStr;
use serde::ser::SerializeSeq;

pub fn decode_hex_bytes<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let bytes: &str = Deserialize::deserialize(deserializer)?;
    let bytes = match bytes.starts_with("0x") {
        true => &bytes[2..],
        false => bytes,
    };

    hex::decode(bytes).map_err(<D::Error as de::Error>::custom)
}

pub fn serialize_hex_bytes<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&format!("0x{}", hex::encode(bytes)))
}

pub fn deserialize_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: &str = Deserialize::deserialize(deserializer)?;

    u64::from_str(value).map_err(<D::Error as de::Error>::custom)
}

/// Beacon API JSON renders integers as decimal strings.
pub fn serialize_u64<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(value)
}

pub fn serialize_u8<S>(value: &u8, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(value)
}

pub fn serialize_u256<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(value)
}

/// Serializes a sequence of integers as decimal strings.
pub fn serialize_quoted_seq<S, T>(values: &[T], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
    T: fmt::Display,
{
    let mut seq = serializer.serialize_seq(Some(values.len()))?;
    for value in values {
        seq.serialize_element(&value.to_string())?;
    }

    seq.end()
}

/// Appends the SSZ encoding of a homogenous sequence to `buf`.
pub fn ssz_append_items<T: Encode>(items: &[T], buf: &mut Vec<u8>) {
    if T::is_ssz_fixed_len() {
        for item in items {
            item.ssz_append(buf);
        }

        return;
    }

    let mut encoder =
        ssz::SszEncoder::container(buf, items.len() * ssz::BYTES_PER_LENGTH_OFFSET);
    for item in items {
        encoder.append(item);
    }

    encoder.finalize();
}

pub fn ssz_items_len<T: Encode>(items: &[T]) -> usize {
    let payload: usize = items.iter().map(|item| item.ssz_bytes_len()).sum();

    match T::is_ssz_fixed_len() {
        true => payload,
        false => payload + items.len() * ssz::BYTES_PER_LENGTH_OFFSET,
    }
}

/// A helper function providing common functionality between the `TreeHash` implementations for
/// the vector and variable list types. `limit` is the maximum number of elements.
pub fn vec_tree_hash_root<T>(vec: &[T], limit: usize) -> Hash256
where
    T: TreeHash,
{
    use tree_hash::MerkleHasher;

    match T::tree_hash_type() {
        TreeHashType::Basic => {
            let mut hasher = MerkleHasher::with_leaves(
                (limit + T::tree_hash_packing_factor() - 1) / T::tree_hash_packing_factor(),
            );

            for item in vec {
                hasher
                    .write(&item.tree_hash_packed_encoding())
                    .expect("ssz_types variable vec should not contain more elements than max");
            }

            hasher
                .finish()
                .expect("ssz_types variable vec should not have a remaining buffer")
        }

        TreeHashType::Container | TreeHashType::List | TreeHashType::Vector => {
            let mut hasher = MerkleHasher::with_leaves(limit);

            for item in vec {
                hasher
                    .write(item.tree_hash_root().as_bytes())
                    .expect("ssz_types vec should not contain more elements than max");
            }

            hasher
                .finish()
                .expect("ssz_types vec should not have a remaining buffer")
        }
    }
}

/// A helper function providing common functionality for finding the Merkle root of some bytes that
/// represent a bitfield with up to `bit_limit` bits.
pub fn bitfield_bytes_tree_hash_root(bytes: &[u8], bit_limit: usize) -> Hash256 {
    use tree_hash::{MerkleHasher, BYTES_PER_CHUNK};

    let byte_size = (bit_limit + 7) / 8;
    let leaf_count = (byte_size + BYTES_PER_CHUNK - 1) / BYTES_PER_CHUNK;

    let mut hasher = MerkleHasher::with_leaves(leaf_count);

    hasher
        .write(bytes)
        .expect("bitfield should not exceed tree hash leaf limit");

    hasher
        .finish()
        .expect("bitfield tree hash buffer should not exceed leaf limit")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Quoted {
        #[serde(serialize_with = "serialize_u64")]
        slot: u64,
        #[serde(serialize_with = "serialize_quoted_seq")]
        balances: Vec<u64>,
    }

    #[test]
    fn integers_are_quoted() {
        let value = Quoted {
            slot: 42,
            balances: vec![32_000_000_000, 1],
        };

        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"slot":"42","balances":["32000000000","1"]}"#
        );
    }

    #[test]
    fn variable_items_are_prefixed_with_offsets() {
        let items = vec![vec![1u8], vec![2u8, 3]];
        let mut buf = vec![];
        ssz_append_items(&items, &mut buf);

        assert_eq!(buf, vec![8, 0, 0, 0, 9, 0, 0, 0, 1, 2, 3]);
        assert_eq!(ssz_items_len(&items), 11);
    }
}
