use gridstate::prelude::*;
use gridstate::Interaction;

fn columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID").width(60).min_width(50),
        Column::new("name", "Name").width(200),
        Column::new("note", "Note").width(120).fixed(),
    ]
}

fn grid() -> Grid {
    Grid::with_columns(columns()).expect("valid config")
}

// ============================================================================
// Drag-resize
// ============================================================================

#[test]
fn test_resize_tracks_pointer_and_commits_on_release() {
    let mut grid = grid();
    grid.begin_resize("name", 500);
    grid.resize_to(540);
    assert_eq!(grid.column_width("name"), Some(240));
    grid.resize_to(460);
    assert_eq!(grid.column_width("name"), Some(160), "recomputed from drag start");
    grid.end_resize();
    assert_eq!(grid.column_width("name"), Some(160), "last width stands");
    assert!(grid.interaction().is_idle());
}

#[test]
fn test_resize_floors_at_min_width() {
    let mut grid = grid();
    grid.begin_resize("id", 100);
    grid.resize_to(-400);
    assert_eq!(grid.column_width("id"), Some(50));
}

#[test]
fn test_unresizable_column_ignores_pointer_down() {
    let mut grid = grid();
    grid.begin_resize("note", 100);
    assert!(grid.interaction().is_idle());
    grid.resize_to(200);
    assert_eq!(grid.column_width("note"), Some(120));
}

#[test]
fn test_resize_to_without_active_drag_is_a_noop() {
    let mut grid = grid();
    grid.resize_to(999);
    assert_eq!(grid.column_width("id"), Some(60));
}

// ============================================================================
// Drag-reorder
// ============================================================================

#[test]
fn test_drop_swaps_positions() {
    let mut grid = grid();
    grid.begin_drag("id");
    grid.drop_on("note");
    assert_eq!(grid.column_order(), vec!["note", "name", "id"]);
    assert!(grid.interaction().is_idle());
}

#[test]
fn test_drop_on_self_is_a_noop() {
    let mut grid = grid();
    grid.begin_drag("id");
    grid.drop_on("id");
    assert_eq!(grid.column_order(), vec!["id", "name", "note"]);
    assert!(grid.interaction().is_idle());
}

#[test]
fn test_drop_on_unknown_key_ends_drag_without_reorder() {
    let mut grid = grid();
    grid.begin_drag("id");
    grid.drop_on("ghost");
    assert_eq!(grid.column_order(), vec!["id", "name", "note"]);
    assert!(grid.interaction().is_idle());
}

#[test]
fn test_keyed_state_survives_reorder() {
    let mut grid = grid();
    grid.resize_column("name", 333);
    grid.set_filter("name", "abc");
    grid.reorder_column("name", "id");
    assert_eq!(grid.column_order(), vec!["name", "id", "note"]);
    assert_eq!(grid.column_width("name"), Some(333));
    assert_eq!(grid.filter_state().columns.get("name").map(String::as_str), Some("abc"));
}

// ============================================================================
// Mutual exclusion
// ============================================================================

#[test]
fn test_drag_cannot_start_while_resizing() {
    let mut grid = grid();
    grid.begin_resize("name", 100);
    grid.begin_drag("id");
    assert!(matches!(grid.interaction(), Interaction::Resizing(_)));
    grid.drop_on("note");
    assert_eq!(grid.column_order(), vec!["id", "name", "note"]);
}

#[test]
fn test_resize_cannot_start_while_dragging() {
    let mut grid = grid();
    grid.begin_drag("id");
    grid.begin_resize("name", 100);
    assert!(matches!(grid.interaction(), Interaction::Dragging(_)));
    grid.resize_to(400);
    assert_eq!(grid.column_width("name"), Some(200));
}
