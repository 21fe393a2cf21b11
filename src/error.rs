use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while building, loading, or dumping a table.
///
/// Lookup misses are not errors: `contains` and `remove` report them as `false`.
#[derive(Error, Debug)]
pub enum Error {
    /// A named file could not be opened, read, created, or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A caller-supplied reader or writer failed.
    #[error("I/O error: {0}")]
    Stream(#[from] io::Error),

    /// A table must have at least one bucket.
    #[error("bucket count must be at least 1")]
    ZeroBuckets,

    /// A hash function was configured with parameters it cannot work with.
    #[error("invalid hash parameter: {0}")]
    InvalidHashParameter(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_hash_parameter(msg: impl Into<String>) -> Self {
        Error::InvalidHashParameter(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_the_path() {
        let err = Error::io(
            "/no/such/dir/out.txt",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/no/such/dir/out.txt"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn stream_error_converts_from_io() {
        fn fails() -> Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(Error::Stream(_))));
    }
}
