use super::*;

/// A homogenous collection of a fixed number of values where the number is
/// only known at runtime (e.g. `SLOTS_PER_HISTORICAL_ROOT`).
///
/// NOTE: collection of length `0` is illegal.
#[derive(Clone, PartialEq, Eq)]
pub struct Vector<T>(Vec<T>);

impl<T: Clone> Vector<T> {
    /// Creates a vector of `len` copies of `value`.
    pub fn repeat(value: T, len: usize) -> Self {
        Self(vec![value; len])
    }
}

impl<T: Default + Clone> Vector<T> {
    pub fn zeroed(len: usize) -> Self {
        Self::repeat(T::default(), len)
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        Self(value)
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(
            f,
            "Vector<{}, {}>[..]",
            any::type_name::<T>(),
            self.0.len()
        )
    }
}

impl<T: Serialize> Serialize for Vector<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(&self.0)
    }
}

/// The fixed length of a `Vector` depends on the value, so the static
/// `ssz_fixed_len` is left at its default. Containers holding a `Vector` size
/// their fixed part with [`SszField`].
impl<T: Encode> Encode for Vector<T> {
    fn is_ssz_fixed_len() -> bool {
        T::is_ssz_fixed_len()
    }

    fn ssz_append(&self, buf: &mut Vec<u8>) {
        utils::ssz_append_items(&self.0, buf)
    }

    fn ssz_bytes_len(&self) -> usize {
        utils::ssz_items_len(&self.0)
    }
}

impl<T: TreeHash> TreeHash for Vector<T> {
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
        utils::vec_tree_hash_root(&self.0, self.0.len())
    }
}
