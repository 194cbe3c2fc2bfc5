//! Task-list snapshot persistence.
//!
//! # Responsibility
//! - Serialize the full task collection into one blob entry.
//! - Restore stored snapshots into task records on startup.
//!
//! # Invariants
//! - Record order is preserved across save and load, keeping the default
//!   displayed order stable before any sort is applied.
//! - `load` never fails the caller: missing or undecodable state degrades
//!   to an empty collection.
//! - `save` replaces the stored entry wholesale and reports write
//!   failures to the caller.

use crate::model::task::Task;
use crate::store::{BlobStore, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store key the task collection snapshot lives under.
pub const TASK_LIST_KEY: &str = "todo_list";

/// Error raised when persisting a snapshot fails.
///
/// Loads have no error type: undecodable storage degrades to "no tasks"
/// so a corrupt store can never crash the application.
#[derive(Debug)]
pub enum SnapshotWriteError {
    Encode(serde_json::Error),
    Store(StoreError),
}

impl Display for SnapshotWriteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "failed to encode task snapshot: {err}"),
            Self::Store(err) => write!(f, "failed to store task snapshot: {err}"),
        }
    }
}

impl Error for SnapshotWriteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SnapshotWriteError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

impl From<StoreError> for SnapshotWriteError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Persistence adapter between the repository and a blob store.
pub struct TaskSnapshots<S: BlobStore> {
    store: S,
    key: &'static str,
}

impl<S: BlobStore> TaskSnapshots<S> {
    /// Creates an adapter over `store` using the default snapshot key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, TASK_LIST_KEY)
    }

    /// Creates an adapter storing the snapshot under a custom key.
    pub fn with_key(store: S, key: &'static str) -> Self {
        Self { store, key }
    }

    /// Loads the persisted task collection.
    ///
    /// Fail-open by contract: a missing entry, a store read failure and an
    /// undecodable snapshot all degrade to an empty collection.
    pub fn load(&self) -> Vec<Task> {
        let raw = match self.store.get(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!(
                    "event=snapshot_load module=persist status=empty key={}",
                    self.key
                );
                return Vec::new();
            }
            Err(err) => {
                warn!(
                    "event=snapshot_load module=persist status=fallback key={} error_code=store_read_failed error={}",
                    self.key, err
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Task>>(&raw) {
            Ok(tasks) => {
                info!(
                    "event=snapshot_load module=persist status=ok key={} count={}",
                    self.key,
                    tasks.len()
                );
                tasks
            }
            Err(err) => {
                warn!(
                    "event=snapshot_load module=persist status=fallback key={} error_code=snapshot_decode_failed error={}",
                    self.key, err
                );
                Vec::new()
            }
        }
    }

    /// Serializes and stores the full collection, replacing the previous
    /// snapshot wholesale.
    pub fn save(&self, tasks: &[Task]) -> Result<(), SnapshotWriteError> {
        let encoded = serde_json::to_string(tasks)?;

        if let Err(err) = self.store.put(self.key, &encoded) {
            warn!(
                "event=snapshot_save module=persist status=error key={} count={} error={}",
                self.key,
                tasks.len(),
                err
            );
            return Err(err.into());
        }

        info!(
            "event=snapshot_save module=persist status=ok key={} count={}",
            self.key,
            tasks.len()
        );
        Ok(())
    }
}
