//! The module contains implementations of basic types used by higher level
//! types. Inspired by <https://github.com/sigp/ssz_types> and <https://github.com/ralexstokes/ssz-rs>.
//!
//! Collections whose length or limit comes from the chain configuration carry
//! it at runtime instead of in the type.

use super::*;

mod bits;
mod byte_list;
mod bytes_fixed;
mod container;
mod fixed_array;
mod list;
mod vector;

pub use bits::{List as Bitlist, Vector as Bitvector};
pub use byte_list::ByteList;
pub use bytes_fixed::BytesFixed;
pub use container::{container_bytes_len, encode_container, SszField};
pub use fixed_array::FixedArray;
pub use list::List;
pub use vector::Vector;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Error {
    #[display(
        fmt = "{} elements given for a type with (inclusive) upper bound {}",
        provided,
        bound
    )]
    Bounded { bound: usize, provided: usize },
    #[display(fmt = "expected exactly {} byte(s) but {} byte(s) given", expected, provided)]
    InvalidLength { provided: usize, expected: usize },
}

impl std::error::Error for Error {}
