use std::hash::BuildHasher;

use crate::error::{Error, Result};
use crate::hashing::FnvBuildHasher;

use super::{ChainedHashTable, ChainStats};

/// Bucket count used when none is specified. A prime keeps modulo reduction well spread.
pub const DEFAULT_BUCKET_COUNT: usize = 101;

/// A builder for the `ChainedHashTable`.
/// Typically you'll call `.with_buckets(...)`, `.with_hasher(...)`, then `.build()`.
#[derive(Debug, Clone)]
pub struct TableBuilder<S = FnvBuildHasher> {
    bucket_count: usize,
    hasher: S,
}

impl Default for TableBuilder<FnvBuildHasher> {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
            hasher: FnvBuildHasher::default(),
        }
    }
}

impl TableBuilder<FnvBuildHasher> {
    /// Creates a new builder with the default bucket count and FNV-1a hashing.
    pub fn new() -> Self {
        Default::default()
    }
}

impl<S: BuildHasher> TableBuilder<S> {
    /// Sets the number of buckets. The table never grows past or shrinks below this.
    pub fn with_buckets(mut self, bucket_count: usize) -> Self {
        self.bucket_count = bucket_count;
        self
    }

    /// Sets the table's hash function.
    pub fn with_hasher<T: BuildHasher>(self, hasher: T) -> TableBuilder<T> {
        TableBuilder {
            bucket_count: self.bucket_count,
            hasher,
        }
    }

    /// Build the final, empty `ChainedHashTable`.
    ///
    /// # Errors
    /// `Error::ZeroBuckets` if the bucket count is 0.
    pub fn build(self) -> Result<ChainedHashTable<S>> {
        if self.bucket_count == 0 {
            return Err(Error::ZeroBuckets);
        }
        let mut buckets = Vec::with_capacity(self.bucket_count);
        buckets.resize_with(self.bucket_count, Vec::new);

        Ok(ChainedHashTable {
            buckets,
            len: 0,
            stats: ChainStats::new(),
            build_hasher: self.hasher,
        })
    }
}

/// Compile-time check that a const bucket count is non-zero.
struct NonZeroBuckets<const N: usize>;

impl<const N: usize> NonZeroBuckets<N> {
    const COUNT: usize = {
        assert!(N > 0, "bucket count must be at least 1");
        N
    };
}

impl ChainedHashTable<FnvBuildHasher> {
    /// Creates an empty table with `bucket_count` buckets and FNV-1a hashing.
    pub fn with_buckets(bucket_count: usize) -> Result<Self> {
        TableBuilder::new().with_buckets(bucket_count).build()
    }

    /// Creates an empty table whose bucket count is fixed at compile time.
    ///
    /// `ChainedHashTable::fixed::<0>()` fails to compile.
    pub fn fixed<const N: usize>() -> Self {
        let mut buckets = Vec::with_capacity(NonZeroBuckets::<N>::COUNT);
        buckets.resize_with(N, Vec::new);
        ChainedHashTable {
            buckets,
            len: 0,
            stats: ChainStats::new(),
            build_hasher: FnvBuildHasher::default(),
        }
    }
}

impl Default for ChainedHashTable<FnvBuildHasher> {
    fn default() -> Self {
        Self::fixed::<DEFAULT_BUCKET_COUNT>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::PolyBuildHasher;

    #[test]
    fn default_bucket_count() {
        let table = TableBuilder::new().build().unwrap();
        assert_eq!(table.bucket_count(), DEFAULT_BUCKET_COUNT);
        assert_eq!(ChainedHashTable::default().bucket_count(), DEFAULT_BUCKET_COUNT);
    }

    #[test]
    fn zero_buckets_rejected() {
        assert!(matches!(
            TableBuilder::new().with_buckets(0).build(),
            Err(Error::ZeroBuckets)
        ));
        assert!(matches!(
            ChainedHashTable::with_buckets(0),
            Err(Error::ZeroBuckets)
        ));
    }

    #[test]
    fn fixed_and_runtime_agree() {
        let mut fixed = ChainedHashTable::fixed::<13>();
        let mut runtime = ChainedHashTable::with_buckets(13).unwrap();
        let words = ["alpha", "beta", "gamma", "delta", "beta"];
        fixed.load(words);
        runtime.load(words);
        assert_eq!(fixed.stats(), runtime.stats());
        for i in 0..13 {
            assert_eq!(fixed.bucket(i), runtime.bucket(i));
        }
    }

    #[test]
    fn custom_hasher_is_used() {
        let table = TableBuilder::new()
            .with_buckets(7)
            .with_hasher(PolyBuildHasher::default())
            .build()
            .unwrap();
        // Polynomial hash of "a" is its byte value.
        assert_eq!(table.bucket_index("a"), 97 % 7);
        assert!(table.is_empty());
    }
}
