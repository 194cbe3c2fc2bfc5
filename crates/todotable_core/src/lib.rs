//! Core table-state engine for the todotable task list.
//! This crate is the single source of truth for ordering, pagination and
//! persistence invariants.

pub mod engine;
pub mod logging;
pub mod model;
pub mod persist;
pub mod repo;
pub mod store;
pub mod table;

pub use engine::paginate::{paginate, Page};
pub use engine::sort::{compare_by, sort_view, SortDirection, SortKey};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{
    new_task_id, InvalidPriorityRank, Priority, Task, TaskId, TaskValidationError,
};
pub use persist::snapshot::{SnapshotWriteError, TaskSnapshots, TASK_LIST_KEY};
pub use repo::task_repo::{RepoError, RepoResult, TaskRepository};
pub use store::{BlobStore, MemoryBlobStore, SqliteBlobStore, StoreError, StoreResult};
pub use table::controller::{
    TableController, TableView, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
