//! Task repository with write-through persistence.
//!
//! # Responsibility
//! - Hold the ordered in-memory task collection and its id index.
//! - Synchronize the durable snapshot on every accepted mutation.
//!
//! # Invariants
//! - Insertion order is preserved: load order first, then append order.
//! - The id index maps every live task id to its current position.
//! - Every accepted mutation issues exactly one snapshot save before
//!   returning; rejected mutations issue none.
//! - A failed save never rolls back the in-memory mutation: session state
//!   stays authoritative and the error surfaces to the caller.
//!
//! Single-threaded by design. An embedder driving this from multiple
//! threads must hold one mutual-exclusion section across "mutate + save"
//! so no save observes a half-applied mutation.

use crate::model::task::{Priority, Task, TaskId, TaskValidationError};
use crate::persist::snapshot::{SnapshotWriteError, TaskSnapshots};
use crate::store::BlobStore;
use log::info;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for task mutations and persistence.
#[derive(Debug)]
pub enum RepoError {
    Validation(TaskValidationError),
    NotFound(TaskId),
    Persistence(SnapshotWriteError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::Persistence(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Persistence(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for RepoError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<SnapshotWriteError> for RepoError {
    fn from(value: SnapshotWriteError) -> Self {
        Self::Persistence(value)
    }
}

/// Authoritative in-memory task collection backed by snapshot persistence.
pub struct TaskRepository<S: BlobStore> {
    tasks: Vec<Task>,
    index: HashMap<TaskId, usize>,
    snapshots: TaskSnapshots<S>,
}

impl<S: BlobStore> TaskRepository<S> {
    /// Loads the persisted collection and builds the id index.
    ///
    /// Loading is fail-open (see [`TaskSnapshots::load`]); a corrupt or
    /// missing snapshot starts an empty repository.
    pub fn open(snapshots: TaskSnapshots<S>) -> Self {
        let tasks = snapshots.load();
        let index = build_index(&tasks);
        info!(
            "event=repo_open module=repo status=ok count={}",
            tasks.len()
        );
        Self {
            tasks,
            index,
            snapshots,
        }
    }

    /// Current collection in insertion order.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Looks up one task by stable id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.index.get(&id).map(|&position| &self.tasks[position])
    }

    /// Creates a task, appends it to the collection and persists.
    ///
    /// An empty name is rejected before any state change. On a persistence
    /// failure the appended record is kept in memory and the error is
    /// returned; the record is then reachable through [`list`](Self::list).
    pub fn create(
        &mut self,
        name: impl Into<String>,
        priority: Priority,
        done: bool,
    ) -> RepoResult<&Task> {
        let task = Task::new(name, priority, done);
        task.validate()?;

        let position = self.tasks.len();
        let id = task.id;
        self.index.insert(id, position);
        self.tasks.push(task);
        info!("event=task_create module=repo status=ok id={id} position={position}");

        self.save()?;
        Ok(&self.tasks[position])
    }

    /// Sets the done flag of one task in place and persists.
    pub fn set_done(&mut self, id: TaskId, done: bool) -> RepoResult<()> {
        let position = self.position(id)?;
        self.tasks[position].done = done;
        info!("event=task_set_done module=repo status=ok id={id} done={done}");

        self.save()
    }

    /// Removes one task from the collection and persists.
    pub fn delete(&mut self, id: TaskId) -> RepoResult<()> {
        let position = self.position(id)?;
        self.tasks.remove(position);
        self.index.remove(&id);
        // Records past the removed slot all shifted left by one.
        for moved in &self.tasks[position..] {
            if let Some(entry) = self.index.get_mut(&moved.id) {
                *entry -= 1;
            }
        }
        info!("event=task_delete module=repo status=ok id={id}");

        self.save()
    }

    fn position(&self, id: TaskId) -> RepoResult<usize> {
        self.index
            .get(&id)
            .copied()
            .ok_or(RepoError::NotFound(id))
    }

    fn save(&self) -> RepoResult<()> {
        self.snapshots.save(&self.tasks)?;
        Ok(())
    }
}

fn build_index(tasks: &[Task]) -> HashMap<TaskId, usize> {
    tasks
        .iter()
        .enumerate()
        .map(|(position, task)| (task.id, position))
        .collect()
}
