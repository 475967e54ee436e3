use std::cell::RefCell;
use std::rc::Rc;

use gridstate::prelude::*;

fn columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID"),
        Column::new("status", "Status").filterable(),
    ]
}

fn rows(n: i64) -> Vec<Row> {
    (1..=n)
        .map(|i| {
            Row::new()
                .set("id", i)
                .set("status", if i % 2 == 0 { "even" } else { "odd" })
        })
        .collect()
}

/// Grid with an event log attached.
fn recording_grid(n: i64, config: GridConfig) -> (Grid, Rc<RefCell<Vec<GridEvent>>>) {
    let mut grid = Grid::new(columns(), config).expect("valid config");
    grid.set_rows(rows(n));
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    grid.on_event(move |event| sink.borrow_mut().push(event.clone()));
    (grid, log)
}

#[test]
fn test_toggle_sort_emits_each_committed_state() {
    let (mut grid, log) = recording_grid(3, GridConfig::default());
    grid.toggle_sort("id");
    grid.toggle_sort("id");
    grid.toggle_sort("id");
    let events = log.borrow();
    assert_eq!(
        *events,
        vec![
            GridEvent::SortChanged {
                key: Some("id".to_string()),
                direction: Some(SortDirection::Ascending),
            },
            GridEvent::SortChanged {
                key: Some("id".to_string()),
                direction: Some(SortDirection::Descending),
            },
            GridEvent::SortChanged {
                key: None,
                direction: None,
            },
        ]
    );
}

#[test]
fn test_unknown_sort_key_emits_nothing() {
    let (mut grid, log) = recording_grid(3, GridConfig::default());
    grid.toggle_sort("ghost");
    assert!(log.borrow().is_empty());
}

#[test]
fn test_filter_and_search_events_carry_the_new_state() {
    let (mut grid, log) = recording_grid(3, GridConfig::default());
    grid.set_filter("status", "odd");
    grid.set_search("2");
    let events = log.borrow();
    match &events[0] {
        GridEvent::FilterChanged(map) => {
            assert_eq!(map.get("status").map(String::as_str), Some("odd"));
        }
        other => panic!("expected FilterChanged, got {other:?}"),
    }
    assert_eq!(events[1], GridEvent::SearchChanged("2".to_string()));
}

#[test]
fn test_page_changed_fires_on_request_and_on_reclamp() {
    let (mut grid, log) = recording_grid(20, GridConfig {
        page_size: 5,
        ..GridConfig::default()
    });
    grid.set_page(4);
    // Shrinking the filtered set from page 4 forces a re-clamp.
    grid.set_filter("status", "even");
    let events = log.borrow();
    assert!(events.contains(&GridEvent::PageChanged(4)));
    assert!(
        events.contains(&GridEvent::PageChanged(2)),
        "re-clamp after filter shrink is a committed page change"
    );
}

#[test]
fn test_clamped_request_reports_the_served_page() {
    let (mut grid, log) = recording_grid(6, GridConfig {
        page_size: 5,
        ..GridConfig::default()
    });
    grid.set_page(50);
    assert_eq!(*log.borrow(), vec![GridEvent::PageChanged(2)]);
}

#[test]
fn test_same_page_request_emits_nothing() {
    let (mut grid, log) = recording_grid(6, GridConfig::default());
    grid.set_page(1);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_group_toggle_reports_new_flag() {
    let (mut grid, log) = recording_grid(6, GridConfig::default());
    grid.set_group_by(Some("status"));
    grid.toggle_group("odd");
    assert_eq!(
        *log.borrow(),
        vec![GridEvent::GroupToggled {
            key: "odd".to_string(),
            collapsed: true,
        }]
    );
}

#[test]
fn test_layout_interactions_emit_nothing() {
    let (mut grid, log) = recording_grid(6, GridConfig::default());
    grid.begin_resize("id", 100);
    grid.resize_to(150);
    grid.end_resize();
    grid.begin_drag("id");
    grid.drop_on("status");
    assert!(log.borrow().is_empty(), "drag/resize are internal layout state");
}
