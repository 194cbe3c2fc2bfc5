//! Stable multi-criteria sorting of task views.
//!
//! # Responsibility
//! - Produce a stably ordered copy of the collection for one sort key and
//!   direction.
//!
//! # Invariants
//! - Records comparing equal under the active key keep their relative
//!   input order, in both directions.
//! - `Descending` is the inverse comparator relation, not a reversal of
//!   the ascending output; reversing the output would also reverse tie
//!   order, which must not happen.

use crate::model::task::Task;
use std::cmp::Ordering;

/// Column a table view can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Priority,
    Done,
}

/// Direction of the active ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Flips ascending to descending and back.
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Three-way comparison of two records under one sort key.
///
/// Natural orderings: lexicographic for names, numeric rank for priority,
/// `false < true` for the done flag.
pub fn compare_by(a: &Task, b: &Task, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Priority => a.priority.cmp(&b.priority),
        SortKey::Done => a.done.cmp(&b.done),
    }
}

/// Returns a stably ordered copy of `records` without touching the input.
///
/// `Ordering::reverse` maps `Equal` to `Equal`, so the descending
/// comparator hands ties to the stable sort exactly like the ascending
/// one does: equal-key records keep their input order either way.
pub fn sort_view(records: &[Task], key: SortKey, direction: SortDirection) -> Vec<Task> {
    let mut view = records.to_vec();
    view.sort_by(|a, b| {
        let ordering = compare_by(a, b, key);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    view
}
