pub mod fnv;
pub mod polynomial_rolling;

pub use fnv::{FnvBuildHasher, FnvBuilder, FnvBits, FnvHasher, FnvVariant};
pub use polynomial_rolling::{PolyBuildHasher, PolyHashBuilder, PolynomialRollingHash};

use std::hash::{BuildHasher, Hasher};

/// Maps `key` to a bucket index in `[0, bucket_count)`.
///
/// Only the key's UTF-8 bytes are fed to the hasher (no length prefix or terminator),
/// so `bucket_index(&FnvBuildHasher::default(), k, n) == fnv64a_hash(k) % n`.
///
/// `bucket_count` must be non-zero; tables guarantee this at construction.
#[inline]
pub fn bucket_index<S: BuildHasher>(build_hasher: &S, key: &str, bucket_count: usize) -> usize {
    let mut hasher = build_hasher.build_hasher();
    hasher.write(key.as_bytes());
    (hasher.finish() % bucket_count as u64) as usize
}
