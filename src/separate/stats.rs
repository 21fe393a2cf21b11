//! Running statistics for a [`ChainedHashTable`](crate::ChainedHashTable).

use std::fmt;
use std::io::{self, Write};

/// Incrementally maintained table statistics.
///
/// `running_average` is a damped average: each recomputation sets it to
/// `(snapshot + previous) / 2`, where the snapshot is the total key count divided by
/// the number of non-empty buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChainStats {
    collisions: u64,
    longest_chain: usize,
    running_average: f64,
}

impl ChainStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collisions(&self) -> u64 {
        self.collisions
    }

    pub fn longest_chain(&self) -> usize {
        self.longest_chain
    }

    pub fn running_average(&self) -> f64 {
        self.running_average
    }

    pub(crate) fn record_collision(&mut self) {
        self.collisions += 1;
    }

    /// Blends the current mean chain length into the running average.
    pub(crate) fn blend_average<I>(&mut self, bucket_lens: I)
    where
        I: IntoIterator<Item = usize>,
    {
        let snapshot = snapshot_average(bucket_lens);
        self.running_average = (snapshot + self.running_average) / 2.0;
    }

    /// Replaces the longest-chain figure with the largest bucket length.
    pub(crate) fn rescan_longest<I>(&mut self, bucket_lens: I)
    where
        I: IntoIterator<Item = usize>,
    {
        self.longest_chain = bucket_lens.into_iter().max().unwrap_or(0);
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Mean length over non-empty buckets; 0.0 when every bucket is empty.
pub fn snapshot_average<I>(bucket_lens: I) -> f64
where
    I: IntoIterator<Item = usize>,
{
    let (total, occupied) = bucket_lens
        .into_iter()
        .filter(|&len| len > 0)
        .fold((0usize, 0usize), |(total, occupied), len| {
            (total + len, occupied + 1)
        });
    if occupied == 0 {
        0.0
    } else {
        total as f64 / occupied as f64
    }
}

/// A point-in-time report of a table's statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStats {
    pub collisions: u64,
    pub longest_chain: usize,
    pub running_average: f64,
    pub load_factor: f64,
    pub len: usize,
    pub bucket_count: usize,
}

impl TableStats {
    /// Writes the report, one figure per line.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

impl fmt::Display for TableStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Collisions = {}", self.collisions)?;
        writeln!(f, "Longest List Ever = {}", self.longest_chain)?;
        writeln!(f, "Average List Length Over Time = {}", self.running_average)?;
        writeln!(f, "Load Factor = {}", self.load_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_ignores_empty_buckets() {
        assert_eq!(snapshot_average([0, 3, 0, 1]), 2.0);
        assert_eq!(snapshot_average([0, 0, 0]), 0.0);
        assert_eq!(snapshot_average(Vec::<usize>::new()), 0.0);
    }

    #[test]
    fn blend_halves_toward_snapshot() {
        let mut stats = ChainStats::new();
        stats.blend_average([2, 0]);
        assert_eq!(stats.running_average(), 1.0);
        stats.blend_average([2, 0]);
        assert_eq!(stats.running_average(), 1.5);
        stats.blend_average([2, 0]);
        assert_eq!(stats.running_average(), 1.75);
    }

    #[test]
    fn rescan_is_a_plain_max() {
        let mut stats = ChainStats::new();
        stats.rescan_longest([1, 4, 0, 2]);
        assert_eq!(stats.longest_chain(), 4);
        // Order does not matter, and the figure can shrink.
        stats.rescan_longest([2, 1, 0, 0]);
        assert_eq!(stats.longest_chain(), 2);
        stats.rescan_longest([0, 0]);
        assert_eq!(stats.longest_chain(), 0);
    }

    #[test]
    fn report_lines() {
        let report = TableStats {
            collisions: 2,
            longest_chain: 3,
            running_average: 2.0625,
            load_factor: 1.0,
            len: 4,
            bucket_count: 4,
        };
        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Total Collisions = 2\n\
             Longest List Ever = 3\n\
             Average List Length Over Time = 2.0625\n\
             Load Factor = 1\n"
        );
    }
}
