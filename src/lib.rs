pub mod error;
pub mod hashing;
pub mod separate;

pub use error::{Error, Result};
pub use separate::{ChainedHashTable, TableBuilder, TableStats, DEFAULT_BUCKET_COUNT};
