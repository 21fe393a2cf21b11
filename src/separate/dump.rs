use std::fmt;
use std::fs::File;
use std::hash::BuildHasher;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

use super::ChainedHashTable;

/// One line per bucket: `"<index>:\t"` then `"<key>, "` for every key in the chain.
impl<S> fmt::Display for ChainedHashTable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, bucket) in self.buckets.iter().enumerate() {
            write!(f, "{index}:\t")?;
            for key in bucket {
                write!(f, "{key}, ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<S: BuildHasher> ChainedHashTable<S> {
    /// Prints every bucket to stdout.
    pub fn print(&self) {
        print!("{self}");
    }

    /// Writes every bucket to `out` in the same format as [`print`](Self::print).
    pub fn dump<W: Write>(&self, mut out: W) -> Result<()> {
        write!(out, "{self}")?;
        out.flush()?;
        Ok(())
    }

    /// Writes every bucket to the file at `path`, creating or truncating it.
    ///
    /// # Errors
    /// `Error::Io` if the file cannot be created or written.
    pub fn dump_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        let mut out = BufWriter::new(file);
        write!(out, "{self}")
            .and_then(|()| out.flush())
            .map_err(|e| Error::io(path, e))?;
        debug!("dumped {} buckets to {}", self.bucket_count(), path.display());
        Ok(())
    }

    /// Prints the statistics report to stdout.
    pub fn print_stats(&self) {
        print!("{}", self.stats());
    }

    /// Writes the statistics report to `out`.
    pub fn write_stats<W: Write>(&self, out: W) -> io::Result<()> {
        self.stats().write_to(out)
    }
}
