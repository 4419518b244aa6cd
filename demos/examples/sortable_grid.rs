// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sortable grid.
//!
//! Attach a sortable to a headless grid, drag an item across it, then insert
//! and remove children. Set `RUST_LOG=trace` to see every hover change.
//!
//! Run:
//! - `cargo run -p understory_demos --example sortable_grid`

use kurbo::{Point, Size, Vec2};
use tracing_subscriber::EnvFilter;
use understory_reorder::Surface;
use understory_sortable::grid::{GridLayout, GridSurface, ItemId};
use understory_sortable::{SortEvent, Sortable, SortableConfig};

fn print_order(title: &str, grid: &GridSurface, names: &[(ItemId, &str)], event: &SortEvent<ItemId>) {
    println!("== {} ==", title);
    for (i, id) in event.order.iter().enumerate() {
        let name = names
            .iter()
            .find(|(n, _)| n == id)
            .map_or("?", |(_, name)| *name);
        println!("  {} {:<6} {:?}", i, name, grid.bounding_box(*id));
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let mut grid = GridSurface::new(GridLayout {
        origin: Point::new(8.0, 8.0),
        columns: 3,
        cell: Size::new(120.0, 80.0),
        gap: 16.0,
    });
    let mut names: Vec<(ItemId, &str)> = ["red", "green", "blue", "cyan", "pink"]
        .into_iter()
        .map(|name| (grid.insert(), name))
        .collect();
    let ids: Vec<ItemId> = names.iter().map(|(id, _)| *id).collect();

    let (mut sortable, event) = Sortable::attach(SortableConfig::element(), &mut grid);
    event.restore.apply(&mut grid);
    print_order("Attached", &grid, &names, &event);

    // Drag "pink" (second row) over "green" (first row).
    let start = grid.bounding_box(ids[4]).center();
    assert!(sortable.drag_start(&grid, ids[4], start));
    let path = [
        start,
        grid.bounding_box(ids[3]).center(),
        grid.bounding_box(ids[1]).center(),
        // In the gutter: no slot, the last preview stays.
        grid.bounding_box(ids[1]).center() + Vec2::new(74.0, 0.0),
    ];
    for p in path {
        let over = sortable.drag_over(&mut grid, p).unwrap();
        println!(
            "  over {:?} -> {:?} (shuffled: {}, moved {:?})",
            p, over.hover, over.shuffled, over.delta
        );
    }
    let event = sortable.drag_end(&mut grid);
    tracing::info!(restore_after = ?event.restore.delay(), "drop committed");
    print_order("Dropped pink on green", &grid, &names, &event);
    assert_eq!(event.order, vec![ids[0], ids[4], ids[1], ids[2], ids[3]]);

    // A new child appended by the application.
    let white = grid.insert();
    names.push((white, "white"));
    let event = sortable.children_changed(&mut grid, &[white]);
    print_order("Inserted white", &grid, &names, &event);
    assert_eq!(event.order.last(), Some(&white));
    assert!(grid.is_draggable(white));

    grid.remove(ids[0]);
    let event = sortable.children_changed(&mut grid, &[]);
    print_order("Removed red", &grid, &names, &event);
    assert_eq!(event.order.len(), 5);

    sortable.detach(&mut grid);
    assert!(!grid.is_draggable(white));
}
