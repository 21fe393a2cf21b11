//! # Separate Chaining String Table
//!
//! A fixed-size hash table over string keys using **separate chaining**, with built-in
//! runtime statistics. It supports:
//! - **Bulk loading** from any token sequence, a reader, or a named file.
//! - **Search** (scans only the key's own bucket) and **remove** (first match, bucket 0 first).
//! - **Statistics**: collision count, longest chain, a damped running average of chain
//!   length, and load factor.
//! - **Dumping** every bucket to the console, a writer, or a file.
//!
//! The bucket count is fixed when the table is built. There is no resizing and no
//! rehashing, so chains grow as the table fills. Duplicate keys are kept.

mod builder;
mod dump;
mod stats;
mod tokens;

pub use builder::{TableBuilder, DEFAULT_BUCKET_COUNT};
pub use stats::{snapshot_average, ChainStats, TableStats};
pub use tokens::Tokens;

use std::fs::File;
use std::hash::BuildHasher;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::hashing::{self, FnvBuildHasher};

/// A "bucket" is the chain of keys that hashed to one slot, in insertion order.
type Bucket = Vec<String>;

/// A separate-chaining table of string keys with a fixed bucket count.
#[derive(Debug, Clone)]
pub struct ChainedHashTable<S = FnvBuildHasher> {
    buckets: Vec<Bucket>,
    /// The number of stored keys, duplicates included.
    len: usize,
    stats: ChainStats,
    build_hasher: S,
}

impl<S: BuildHasher> ChainedHashTable<S> {
    /// Returns the fixed number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of stored keys, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The bucket `key` hashes to.
    pub fn bucket_index(&self, key: &str) -> usize {
        hashing::bucket_index(&self.build_hasher, key, self.buckets.len())
    }

    /// Returns the chain stored at `index`, or `None` if out of range.
    pub fn bucket(&self, index: usize) -> Option<&[String]> {
        self.buckets.get(index).map(Vec::as_slice)
    }

    /// Iterates over all buckets in index order.
    pub fn buckets(&self) -> impl Iterator<Item = &[String]> {
        self.buckets.iter().map(Vec::as_slice)
    }

    /// Iterates over every stored key, bucket by bucket, each chain in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(String::as_str))
    }

    /// Inserts one key and refreshes the longest-chain figure, like a one-token load.
    pub fn insert(&mut self, key: impl Into<String>) {
        self.push_key(key.into());
        self.refresh_longest();
    }

    /// Inserts every token of `tokens`, in order, and returns how many were inserted.
    ///
    /// Each insertion counts a collision if its bucket was already non-empty and blends the
    /// new mean chain length into the running average. The longest chain is rescanned once
    /// at the end. An empty source leaves the table untouched.
    pub fn load<I>(&mut self, tokens: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut inserted = 0;
        for token in tokens {
            self.push_key(token.into());
            inserted += 1;
        }
        if inserted > 0 {
            self.refresh_longest();
        }
        debug!(
            "loaded {} keys: len={} collisions={} longest_chain={}",
            inserted,
            self.len,
            self.stats.collisions(),
            self.stats.longest_chain()
        );
        inserted
    }

    /// Loads whitespace-delimited tokens from `reader`.
    ///
    /// # Errors
    /// `Error::Stream` if reading fails. Tokens read before the failure stay in the table.
    pub fn load_reader<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        self.load_tokens(Tokens::new(reader)).map_err(Error::from)
    }

    /// Loads whitespace-delimited tokens from the file at `path`.
    ///
    /// # Errors
    /// `Error::Io` if the file cannot be opened or read. Tokens read before a read failure
    /// stay in the table.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        self.load_tokens(Tokens::new(BufReader::new(file)))
            .map_err(|e| Error::io(path, e))
    }

    /// Returns true if `key` is stored. Only the key's own bucket is scanned.
    pub fn contains(&self, key: &str) -> bool {
        self.buckets[self.bucket_index(key)]
            .iter()
            .any(|stored| stored == key)
    }

    /// Removes the first occurrence of `key`, scanning buckets from index 0.
    ///
    /// Returns `false` and leaves the table and its statistics untouched if the key is
    /// absent. On success the running average is recomputed; the collision count is not
    /// decremented.
    pub fn remove(&mut self, key: &str) -> bool {
        let found = self.buckets.iter().enumerate().find_map(|(index, bucket)| {
            bucket
                .iter()
                .position(|stored| stored == key)
                .map(|pos| (index, pos))
        });
        let Some((index, pos)) = found else {
            trace!("remove miss for {:?}", key);
            return false;
        };

        self.buckets[index].remove(pos);
        self.len -= 1;
        self.stats.blend_average(self.buckets.iter().map(Vec::len));
        trace!("removed {:?} from bucket {}", key, index);
        true
    }

    /// Empties every bucket and resets the statistics to those of a fresh table.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
        self.stats.reset();
    }

    /// Insertions that landed in an already non-empty bucket.
    pub fn collisions(&self) -> u64 {
        self.stats.collisions()
    }

    /// The longest chain as of the last load or insert.
    pub fn longest_chain(&self) -> usize {
        self.stats.longest_chain()
    }

    /// The damped running average of mean non-empty chain length.
    pub fn running_average(&self) -> f64 {
        self.stats.running_average()
    }

    /// Stored keys divided by bucket count.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// A snapshot of all statistics.
    pub fn stats(&self) -> TableStats {
        TableStats {
            collisions: self.stats.collisions(),
            longest_chain: self.stats.longest_chain(),
            running_average: self.stats.running_average(),
            load_factor: self.load_factor(),
            len: self.len,
            bucket_count: self.buckets.len(),
        }
    }

    fn push_key(&mut self, key: String) {
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];
        if !bucket.is_empty() {
            self.stats.record_collision();
        }
        bucket.push(key);
        self.len += 1;
        self.stats.blend_average(self.buckets.iter().map(Vec::len));
    }

    fn refresh_longest(&mut self) {
        self.stats.rescan_longest(self.buckets.iter().map(Vec::len));
    }

    /// Inserts tokens until the source is exhausted or fails. The longest chain is
    /// refreshed either way so a partial load still reports consistent statistics.
    fn load_tokens<R: BufRead>(&mut self, tokens: Tokens<R>) -> io::Result<usize> {
        let mut inserted = 0;
        let mut failure = None;
        for token in tokens {
            match token {
                Ok(token) => {
                    self.push_key(token);
                    inserted += 1;
                }
                Err(e) => {
                    warn!("token source failed after {} keys: {}", inserted, e);
                    failure = Some(e);
                    break;
                }
            }
        }
        if inserted > 0 {
            self.refresh_longest();
        }
        debug!(
            "loaded {} keys from reader: len={} collisions={} longest_chain={}",
            inserted,
            self.len,
            self.stats.collisions(),
            self.stats.longest_chain()
        );
        match failure {
            Some(e) => Err(e),
            None => Ok(inserted),
        }
    }
}
