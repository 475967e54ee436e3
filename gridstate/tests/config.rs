use gridstate::prelude::*;

#[test]
fn test_defaults() {
    let config = GridConfig::default();
    assert_eq!(config.row_key, "id");
    assert_eq!(config.page_size, 25);
    assert_eq!(config.display_mode, DisplayMode::Paginated);
    assert!(config.group_by.is_none());
    assert!(!config.sort.is_active());
}

#[test]
fn test_round_trips_through_json() {
    let config = GridConfig {
        row_key: "sku".to_string(),
        sort: SortState {
            key: Some("price".to_string()),
            direction: Some(SortDirection::Descending),
        },
        page_size: 50,
        group_by: Some("category".to_string()),
        viewport: Viewport::new(600, 32).overscan(4),
        display_mode: DisplayMode::Virtualized,
        ..GridConfig::default()
    };
    let json = serde_json::to_string(&config).expect("serialize");
    let back: GridConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, config);
}

#[test]
fn test_partial_json_fills_defaults() {
    let back: GridConfig = serde_json::from_str(r#"{"page_size": 10}"#).expect("deserialize");
    assert_eq!(back.page_size, 10);
    assert_eq!(back.row_key, "id");
    assert_eq!(back.display_mode, DisplayMode::Paginated);
}

#[test]
fn test_validate_accepts_unknown_sort_key() {
    let config = GridConfig {
        sort: SortState {
            key: Some("ghost".to_string()),
            direction: Some(SortDirection::Ascending),
        },
        ..GridConfig::default()
    };
    let columns = vec![Column::new("id", "ID")];
    assert!(config.validate(&columns).is_ok());
}

#[test]
fn test_validate_rejects_zero_row_height() {
    let config = GridConfig {
        viewport: Viewport {
            scroll_offset: 0,
            height: 100,
            row_height: 0,
            overscan: 0,
        },
        ..GridConfig::default()
    };
    let columns = vec![Column::new("id", "ID")];
    assert!(matches!(
        config.validate(&columns),
        Err(GridError::InvalidRowHeight)
    ));
}
