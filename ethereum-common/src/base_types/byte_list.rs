use super::*;

/// Variable length opaque bytes (`ByteList[limit]`), rendered as a hex string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteList(pub List<u8>);

impl ByteList {
    pub fn new(limit: usize) -> Self {
        Self(List::new(limit))
    }

    pub fn try_from_slice(data: &[u8], limit: usize) -> Result<Self, Error> {
        Ok(Self(List::try_from_vec(data.to_vec(), limit)?))
    }
}

impl AsRef<[u8]> for ByteList {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl Serialize for ByteList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        utils::serialize_hex_bytes(self.as_ref(), serializer)
    }
}

impl Encode for ByteList {
    fn is_ssz_fixed_len() -> bool {
        false
    }

    fn ssz_append(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.as_ref())
    }

    fn ssz_bytes_len(&self) -> usize {
        self.0.len()
    }
}

impl TreeHash for ByteList {
    fn tree_hash_type() -> TreeHashType {
        List::<u8>::tree_hash_type()
    }

    fn tree_hash_packed_encoding(&self) -> tree_hash::PackedEncoding {
        self.0.tree_hash_packed_encoding()
    }

    fn tree_hash_packing_factor() -> usize {
        List::<u8>::tree_hash_packing_factor()
    }

    fn tree_hash_root(&self) -> Hash256 {
        self.0.tree_hash_root()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_data_limit() {
        assert!(ByteList::try_from_slice(&[0u8; 32], 32).is_ok());
        assert_eq!(
            ByteList::try_from_slice(&[0u8; 33], 32),
            Err(Error::Bounded {
                bound: 32,
                provided: 33
            })
        );
    }

    #[test]
    fn json_is_hex() {
        let bytes = ByteList::try_from_slice(&[0xde, 0xad], 32).unwrap();

        assert_eq!(serde_json::to_string(&bytes).unwrap(), "\"0xdead\"");
        assert_eq!(bytes.as_ssz_bytes(), vec![0xde, 0xad]);
    }
}
