//! Durable key-value blob storage abstraction.
//!
//! # Responsibility
//! - Define the opaque get/put contract the persistence layer runs
//!   against.
//! - Host the SQLite-backed durable store and the in-memory one.
//!
//! # Invariants
//! - `put` replaces the keyed entry wholesale; readers never observe a
//!   partial write.
//! - Implementations report transport failures as errors, never panic.

mod memory;
mod sqlite;

pub use memory::MemoryBlobStore;
pub use sqlite::SqliteBlobStore;

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport-level error of a blob store backend.
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "store schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Opaque durable key-value store.
///
/// The repository logic is identical whatever sits behind this trait: a
/// file, an embedded database or a remote call.
pub trait BlobStore {
    /// Reads the blob stored under `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replaces the blob stored under `key` wholesale.
    fn put(&self, key: &str, value: &str) -> StoreResult<()>;
}
