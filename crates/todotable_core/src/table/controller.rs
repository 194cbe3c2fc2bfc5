//! Table controller state machine.
//!
//! # Responsibility
//! - Hold `{sort_key, sort_direction, page_index, page_size}` for the
//!   session and expose the rendered row-set contract.
//! - Delegate task mutations to the repository and re-render from its
//!   updated snapshot.
//!
//! # Invariants
//! - Toggling sort on the active key flips direction; a new key starts
//!   ascending. Neither changes the page.
//! - Changing the page size resets to the first page so the view cannot
//!   land beyond the last page.
//! - The controller lives for the whole session; there is no terminal
//!   state.

use crate::engine::paginate::{paginate, Page};
use crate::engine::sort::{sort_view, SortDirection, SortKey};
use crate::model::task::{Priority, Task, TaskId};
use crate::repo::task_repo::{RepoError, RepoResult, TaskRepository};
use crate::store::BlobStore;
use log::debug;

/// Page sizes the pagination affordance offers to the view layer.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 15];

/// Page size a fresh controller starts with.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Rendered row-set contract consumed by the view layer after every
/// transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Rows visible on the current page, sorted and windowed.
    pub visible_rows: Vec<Task>,
    /// Filler rows needed to keep the page height uniform.
    pub pad_count: usize,
    /// Total records in the repository, across all pages.
    pub total_count: usize,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
    pub page_index: usize,
    pub page_size: usize,
}

/// View-facing orchestrator over repository, sort and pagination.
pub struct TableController<S: BlobStore> {
    repo: TaskRepository<S>,
    sort_key: SortKey,
    sort_direction: SortDirection,
    page_index: usize,
    page_size: usize,
}

impl<S: BlobStore> TableController<S> {
    /// Creates a controller with the default view state: priority
    /// ascending, first page, five rows per page.
    pub fn new(repo: TaskRepository<S>) -> Self {
        Self {
            repo,
            sort_key: SortKey::Priority,
            sort_direction: SortDirection::Ascending,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Handles a sort-header click.
    ///
    /// Clicking the active key flips direction; any other key becomes the
    /// active key sorted ascending. The page index stays put.
    pub fn request_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_key = key;
            self.sort_direction = SortDirection::Ascending;
        }
        debug!(
            "event=request_sort module=table status=ok key={:?} direction={:?}",
            self.sort_key, self.sort_direction
        );
    }

    /// Jumps to `page_index`.
    ///
    /// The caller is expected to pass an index offered by the last render;
    /// an out-of-range index renders an empty, fully padded page.
    pub fn change_page(&mut self, page_index: usize) {
        self.page_index = page_index;
    }

    /// Applies a new page size and resets to the first page.
    pub fn change_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
        self.page_index = 0;
    }

    /// Creates a task from already-validated form input.
    ///
    /// Returns the new task's stable id. Validation and persistence
    /// failures propagate from the repository unchanged.
    pub fn create_task(
        &mut self,
        name: impl Into<String>,
        priority: Priority,
        done: bool,
    ) -> RepoResult<TaskId> {
        let id = self.repo.create(name, priority, done)?.id;
        Ok(id)
    }

    /// Flips the done flag of one task.
    pub fn toggle_done(&mut self, id: TaskId) -> RepoResult<()> {
        let done = match self.repo.get(id) {
            Some(task) => task.done,
            None => return Err(RepoError::NotFound(id)),
        };
        self.repo.set_done(id, !done)
    }

    /// Deletes one task.
    pub fn delete_task(&mut self, id: TaskId) -> RepoResult<()> {
        self.repo.delete(id)
    }

    /// Renders the row-set contract from the current repository snapshot.
    pub fn view(&self) -> TableView {
        let sorted = sort_view(self.repo.list(), self.sort_key, self.sort_direction);
        let Page { visible, pad_count } = paginate(&sorted, self.page_size, self.page_index);

        TableView {
            visible_rows: visible,
            pad_count,
            total_count: self.repo.len(),
            sort_key: self.sort_key,
            sort_direction: self.sort_direction,
            page_index: self.page_index,
            page_size: self.page_size,
        }
    }

    /// Read access to the underlying repository.
    pub fn repository(&self) -> &TaskRepository<S> {
        &self.repo
    }
}
