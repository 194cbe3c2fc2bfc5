use todotable_core::{
    MemoryBlobStore, Priority, RepoError, SortDirection, SortKey, TableController,
    TaskRepository, TaskSnapshots, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS,
};

fn memory_controller() -> TableController<MemoryBlobStore> {
    TableController::new(TaskRepository::open(TaskSnapshots::new(
        MemoryBlobStore::new(),
    )))
}

#[test]
fn fresh_controller_renders_the_default_state() {
    let controller = memory_controller();
    let view = controller.view();

    assert_eq!(view.sort_key, SortKey::Priority);
    assert_eq!(view.sort_direction, SortDirection::Ascending);
    assert_eq!(view.page_index, 0);
    assert_eq!(view.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(view.total_count, 0);
    assert!(view.visible_rows.is_empty());
}

#[test]
fn page_size_options_start_at_the_default() {
    assert_eq!(PAGE_SIZE_OPTIONS[0], DEFAULT_PAGE_SIZE);
}

#[test]
fn sorting_the_active_key_flips_direction_only() {
    let mut controller = memory_controller();
    controller.change_page(1);

    controller.request_sort(SortKey::Priority);
    let view = controller.view();
    assert_eq!(view.sort_key, SortKey::Priority);
    assert_eq!(view.sort_direction, SortDirection::Descending);
    assert_eq!(view.page_index, 1);

    controller.request_sort(SortKey::Priority);
    assert_eq!(controller.view().sort_direction, SortDirection::Ascending);
}

#[test]
fn sorting_a_new_key_starts_ascending() {
    let mut controller = memory_controller();
    controller.request_sort(SortKey::Priority); // now descending

    controller.request_sort(SortKey::Name);
    let view = controller.view();
    assert_eq!(view.sort_key, SortKey::Name);
    assert_eq!(view.sort_direction, SortDirection::Ascending);
}

#[test]
fn changing_page_size_resets_to_the_first_page() {
    let mut controller = memory_controller();
    controller.change_page(2);

    controller.change_page_size(10);
    let view = controller.view();
    assert_eq!(view.page_size, 10);
    assert_eq!(view.page_index, 0);
}

#[test]
fn priority_sort_keeps_ties_stable_across_a_toggle() {
    // Two tasks, Medium after Low in rank; sorting ascending puts
    // "Clean room" first. Toggling its done flag must neither reorder
    // the view nor lose the flag.
    let mut controller = memory_controller();
    controller
        .create_task("Buy food", Priority::Medium, false)
        .unwrap();
    let clean_room = controller
        .create_task("Clean room", Priority::Low, false)
        .unwrap();

    let before = controller.view();
    assert_eq!(before.visible_rows[0].name, "Clean room");
    assert_eq!(before.visible_rows[1].name, "Buy food");

    controller.toggle_done(clean_room).unwrap();

    let after = controller.view();
    assert_eq!(after.visible_rows[0].name, "Clean room");
    assert_eq!(after.visible_rows[1].name, "Buy food");
    assert!(after.visible_rows[0].done);
}

#[test]
fn create_task_appears_in_the_rendered_view() {
    let mut controller = memory_controller();
    let id = controller
        .create_task("fresh", Priority::High, false)
        .unwrap();

    let view = controller.view();
    assert_eq!(view.total_count, 1);
    assert_eq!(view.visible_rows[0].id, id);
    assert_eq!(view.pad_count, DEFAULT_PAGE_SIZE - 1);
}

#[test]
fn create_task_with_empty_name_is_rejected() {
    let mut controller = memory_controller();
    let err = controller.create_task("", Priority::Low, false).unwrap_err();

    assert!(matches!(err, RepoError::Validation(_)));
    assert_eq!(controller.view().total_count, 0);
}

#[test]
fn toggle_done_flips_back_and_forth() {
    let mut controller = memory_controller();
    let id = controller
        .create_task("flip me", Priority::Medium, false)
        .unwrap();

    controller.toggle_done(id).unwrap();
    assert!(controller.repository().get(id).unwrap().done);

    controller.toggle_done(id).unwrap();
    assert!(!controller.repository().get(id).unwrap().done);
}

#[test]
fn toggle_done_on_unknown_id_is_not_found() {
    let mut controller = memory_controller();
    let missing = todotable_core::new_task_id();

    let err = controller.toggle_done(missing).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(found) if found == missing));
}

#[test]
fn delete_task_shrinks_the_rendered_view() {
    let mut controller = memory_controller();
    let id = controller
        .create_task("short lived", Priority::Low, false)
        .unwrap();
    controller.create_task("stays", Priority::Low, false).unwrap();

    controller.delete_task(id).unwrap();

    let view = controller.view();
    assert_eq!(view.total_count, 1);
    assert_eq!(view.visible_rows[0].name, "stays");
}

#[test]
fn second_page_shows_the_remainder_with_padding() {
    let mut controller = memory_controller();
    for n in 0..7 {
        controller
            .create_task(format!("task {n}"), Priority::Medium, false)
            .unwrap();
    }

    controller.change_page(1);
    let view = controller.view();

    assert_eq!(view.total_count, 7);
    assert_eq!(view.visible_rows.len(), 2);
    assert_eq!(view.pad_count, 3);
}

#[test]
fn page_beyond_the_end_renders_empty_and_fully_padded() {
    let mut controller = memory_controller();
    controller.create_task("lonely", Priority::Low, false).unwrap();

    controller.change_page(4);
    let view = controller.view();

    assert!(view.visible_rows.is_empty());
    assert_eq!(view.pad_count, view.page_size);
}

#[test]
fn controller_state_survives_only_in_storage_through_the_repository() {
    let store = MemoryBlobStore::new();

    {
        let repo = TaskRepository::open(TaskSnapshots::new(store.clone()));
        let mut controller = TableController::new(repo);
        controller
            .create_task("persisted by controller", Priority::High, false)
            .unwrap();
    }

    let reopened = TableController::new(TaskRepository::open(TaskSnapshots::new(store)));
    let view = reopened.view();
    assert_eq!(view.total_count, 1);
    assert_eq!(view.visible_rows[0].name, "persisted by controller");
    // View state is session-local: defaults come back after a restart.
    assert_eq!(view.sort_key, SortKey::Priority);
    assert_eq!(view.page_index, 0);
}
