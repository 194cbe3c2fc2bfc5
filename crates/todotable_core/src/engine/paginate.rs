//! Pagination windows over sorted task views.
//!
//! # Responsibility
//! - Compute the visible slice and filler row count for one page.
//!
//! # Invariants
//! - `visible.len() + pad_count == page_size` whenever `page_size > 0`.
//! - Requests beyond the last page yield an empty window, never an error;
//!   the controller is responsible for not offering such pages.

use crate::model::task::Task;

/// One pagination window over a sorted view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Records visible on this page, in view order.
    pub visible: Vec<Task>,
    /// Filler rows the view layer renders so every page keeps a uniform
    /// height when the last page is only partially filled.
    pub pad_count: usize,
}

/// Computes the window `[page_index * page_size, + page_size)` clipped to
/// the collection bounds.
pub fn paginate(sorted: &[Task], page_size: usize, page_index: usize) -> Page {
    if page_size == 0 {
        return Page {
            visible: Vec::new(),
            pad_count: 0,
        };
    }

    let start = page_index.saturating_mul(page_size).min(sorted.len());
    let end = start.saturating_add(page_size).min(sorted.len());
    let visible = sorted[start..end].to_vec();
    let pad_count = page_size - visible.len();

    Page { visible, pad_count }
}

#[cfg(test)]
mod tests {
    use super::paginate;
    use crate::model::task::{Priority, Task};

    fn tasks(count: usize) -> Vec<Task> {
        (0..count)
            .map(|n| Task::new(format!("task {n}"), Priority::Medium, false))
            .collect()
    }

    #[test]
    fn empty_input_pads_a_full_page() {
        let page = paginate(&[], 5, 0);
        assert!(page.visible.is_empty());
        assert_eq!(page.pad_count, 5);
    }

    #[test]
    fn zero_page_size_degenerates_to_empty() {
        let records = tasks(3);
        let page = paginate(&records, 0, 0);
        assert!(page.visible.is_empty());
        assert_eq!(page.pad_count, 0);
    }

    #[test]
    fn full_page_has_no_padding() {
        let records = tasks(7);
        let page = paginate(&records, 5, 0);
        assert_eq!(page.visible.len(), 5);
        assert_eq!(page.pad_count, 0);
    }
}
