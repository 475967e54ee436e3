//! Orders grid example - drives the full derivation pipeline.
//!
//! Builds a small order table, then walks through the interactions a
//! rendering layer would forward: header clicks for sorting, filter
//! keystrokes, paging, grouping, and a switch to virtualized windowing.

use gridstate::prelude::*;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn columns() -> Vec<Column> {
    vec![
        Column::new("id", "Order").width(70),
        Column::new("customer", "Customer").filterable(),
        Column::new("status", "Status").filterable(),
        Column::new("total", "Total").aggregate(Aggregate::Sum),
    ]
}

fn orders() -> Vec<Row> {
    let customers = ["Acme", "Globex", "Initech", "Umbrella"];
    let statuses = ["open", "shipped", "delivered"];
    (1..=40i64)
        .map(|i| {
            Row::new()
                .set("id", i)
                .set("customer", customers[(i as usize) % customers.len()])
                .set("status", statuses[(i as usize) % statuses.len()])
                .set("total", (i * 7) as f64 + 0.5)
        })
        .collect()
}

fn print_page(label: &str, grid: &mut Grid) {
    let snapshot = grid.snapshot();
    println!(
        "-- {label} (page {}/{}, {} rows shown)",
        snapshot.current_page,
        snapshot.total_pages,
        snapshot.rows.len()
    );
    for row in &snapshot.rows {
        println!(
            "   #{:>3}  {:10}  {:10}  {:>8}",
            row.display("id"),
            row.display("customer"),
            row.display("status"),
            row.display("total")
        );
    }
    if let Some(total) = snapshot.aggregates.get("total") {
        println!("   total aggregate: {total:?}");
    }
}

fn main() -> Result<(), GridError> {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .ok();

    let mut grid = Grid::new(
        columns(),
        GridConfig {
            page_size: 8,
            ..GridConfig::default()
        },
    )?;
    grid.on_event(|event| println!("   event: {event:?}"));
    grid.set_rows(orders());

    print_page("initial", &mut grid);

    grid.toggle_sort("total");
    grid.toggle_sort("total"); // descending
    print_page("sorted by total desc", &mut grid);

    grid.set_filter("status", "shipped");
    print_page("filtered to shipped", &mut grid);

    grid.set_page(2);
    print_page("page 2", &mut grid);

    grid.set_filter("status", "");
    grid.set_group_by(Some("customer"));
    grid.toggle_group("Acme");
    print_page("grouped, Acme collapsed", &mut grid);

    grid.set_group_by(None);
    grid.set_display_mode(DisplayMode::Virtualized);
    grid.set_viewport(Viewport::new(240, 24).overscan(2));
    grid.set_scroll_offset(480);
    let window = grid.visible_window();
    println!(
        "-- virtualized window {}..{} of {}",
        window.start,
        window.end,
        grid.filtered_count()
    );

    Ok(())
}
