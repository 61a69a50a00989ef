//! SSZ encoding of containers whose fixed part is only known at runtime.
//!
//! `ssz_derive` sizes the fixed part of a container from the static
//! `ssz_fixed_len` of every field. That does not work for fields like
//! `Vector<Hash256>` whose length comes from the chain configuration, so such
//! containers list their fields as [`SszField`] trait objects and encode them
//! with [`encode_container`].

use super::*;

pub trait SszField {
    /// Whether the field is stored inline in the fixed part.
    fn is_fixed(&self) -> bool;

    /// Number of bytes the field occupies in the fixed part.
    fn fixed_len(&self) -> usize;

    /// Total encoded length of the field.
    fn bytes_len(&self) -> usize;

    fn append(&self, buf: &mut Vec<u8>);
}

impl<T: Encode> SszField for T {
    fn is_fixed(&self) -> bool {
        T::is_ssz_fixed_len()
    }

    fn fixed_len(&self) -> usize {
        if T::is_ssz_fixed_len() {
            self.ssz_bytes_len()
        } else {
            ssz::BYTES_PER_LENGTH_OFFSET
        }
    }

    fn bytes_len(&self) -> usize {
        self.ssz_bytes_len()
    }

    fn append(&self, buf: &mut Vec<u8>) {
        self.ssz_append(buf)
    }
}

pub fn container_bytes_len(fields: &[&dyn SszField]) -> usize {
    fields
        .iter()
        .map(|field| match field.is_fixed() {
            true => field.bytes_len(),
            false => ssz::BYTES_PER_LENGTH_OFFSET + field.bytes_len(),
        })
        .sum()
}

/// Appends the encoding of the container made of `fields` to `buf`.
///
/// Offsets are relative to the beginning of the container.
pub fn encode_container(fields: &[&dyn SszField], buf: &mut Vec<u8>) {
    let fixed_part_len: usize = fields.iter().map(|field| field.fixed_len()).sum();
    buf.reserve(container_bytes_len(fields));

    let mut encoder = ssz::SszEncoder::container(buf, fixed_part_len);
    for field in fields {
        encoder.append_parameterized(field.is_fixed(), |buf| field.append(buf));
    }

    encoder.finalize();
}

/// Implements `ssz::Encode` for a container through [`encode_container`].
///
/// `fixed` tells whether every field of the container is fixed-size.
#[macro_export]
macro_rules! impl_ssz_container {
    ([$($generics:tt)*] $ty:ty, fixed = $fixed:expr, [$($field:ident),+ $(,)?]) => {
        impl<$($generics)*> $crate::ssz::Encode for $ty {
            fn is_ssz_fixed_len() -> bool {
                $fixed
            }

            fn ssz_append(&self, buf: &mut Vec<u8>) {
                $crate::base_types::encode_container(
                    &[$(&self.$field as &dyn $crate::base_types::SszField),+],
                    buf,
                )
            }

            fn ssz_bytes_len(&self) -> usize {
                $crate::base_types::container_bytes_len(
                    &[$(&self.$field as &dyn $crate::base_types::SszField),+],
                )
            }
        }
    };
    ($ty:ty, fixed = $fixed:expr, [$($field:ident),+ $(,)?]) => {
        $crate::impl_ssz_container!([] $ty, fixed = $fixed, [$($field),+]);
    };
}
