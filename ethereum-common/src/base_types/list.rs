use super::*;

/// A homogenous collection of a variable number of values bounded by `limit`.
#[derive(Clone)]
pub struct List<T> {
    data: Vec<T>,
    limit: usize,
}

impl<T> AsRef<[T]> for List<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T: Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        if f.alternate() {
            write!(
                f,
                "List<{}, {}>(len={}){:#?}",
                any::type_name::<T>(),
                self.limit,
                self.len(),
                self.data
            )
        } else {
            write!(
                f,
                "List<{}, {}>(len={}){:?}",
                any::type_name::<T>(),
                self.limit,
                self.len(),
                self.data
            )
        }
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.limit == other.limit && self.data == other.data
    }
}

impl<T> Eq for List<T> where T: Eq {}

impl<T> Deref for List<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T, Idx: SliceIndex<[T]>> Index<Idx> for List<T> {
    type Output = <Idx as SliceIndex<[T]>>::Output;

    fn index(&self, index: Idx) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> List<T> {
    /// Creates an empty list that accepts up to `limit` elements.
    pub fn new(limit: usize) -> Self {
        Self {
            data: Vec::new(),
            limit,
        }
    }

    pub fn try_from_vec(data: Vec<T>, limit: usize) -> Result<Self, Error> {
        if data.len() > limit {
            return Err(Error::Bounded {
                bound: limit,
                provided: data.len(),
            });
        }

        Ok(Self { data, limit })
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}

impl<T: Serialize> Serialize for List<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(&self.data)
    }
}

impl<T: Encode> Encode for List<T> {
    fn is_ssz_fixed_len() -> bool {
        false
    }

    fn ssz_append(&self, buf: &mut Vec<u8>) {
        utils::ssz_append_items(&self.data, buf)
    }

    fn ssz_bytes_len(&self) -> usize {
        utils::ssz_items_len(&self.data)
    }
}

impl<T: TreeHash> TreeHash for List<T> {
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
        let root = utils::vec_tree_hash_root(&self.data, self.limit);

        tree_hash::mix_in_length(&root, self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_from_vec_rejects_oversized_input() {
        assert_eq!(
            List::try_from_vec(vec![0u8; 33], 32),
            Err(Error::Bounded {
                bound: 32,
                provided: 33
            })
        );
        assert_eq!(List::try_from_vec(vec![0u8; 32], 32).unwrap().len(), 32);
    }

    #[test]
    fn ssz_encoding_of_fixed_elements_is_concatenation() {
        let list = List::try_from_vec(vec![1u64, 2], 16).unwrap();

        assert_eq!(
            list.as_ssz_bytes(),
            vec![1, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn empty_list_root_depends_on_limit_only() {
        // hash_tree_root(List[uint64, 4]()) == mix_in_length(zero chunk, 0)
        let empty = List::<u64>::new(4);
        let expected = tree_hash::mix_in_length(&Hash256::zero(), 0);

        assert_eq!(empty.tree_hash_root(), expected);
        assert_ne!(
            List::<u64>::new(1 << 20).tree_hash_root(),
            empty.tree_hash_root()
        );
    }
}
