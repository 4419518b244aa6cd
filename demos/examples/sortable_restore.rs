// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scheduling the second phase of a commit.
//!
//! A host runs each `RestoreTransitions` after its delay. This example drives
//! a flow-laid-out grid with a virtual clock and a tiny timer queue, and shows
//! that a restore landing in the middle of the next drag is harmless.
//!
//! Run:
//! - `cargo run -p understory_demos --example sortable_restore`

use std::time::Duration;

use kurbo::Size;
use understory_reorder::{RestoreTransitions, Surface, Transition};
use understory_sortable::grid::{GridLayout, GridSurface};
use understory_sortable::{SortEvent, Sortable, SortableConfig};

/// Fire-and-forget timers keyed by a virtual clock.
#[derive(Default)]
struct Timers {
    now: Duration,
    pending: Vec<(Duration, RestoreTransitions)>,
}

impl Timers {
    fn schedule<K>(&mut self, event: SortEvent<K>) -> Vec<K> {
        self.pending.push((self.now + event.restore.delay(), event.restore));
        event.order
    }

    fn advance(&mut self, by: Duration, grid: &mut GridSurface) {
        self.now += by;
        let now = self.now;
        self.pending.retain(|&(due, restore)| {
            if due <= now {
                restore.apply(&mut *grid);
                false
            } else {
                true
            }
        });
    }
}

fn main() {
    // Four 90px cells fit in a 400px wide container.
    let layout = GridLayout::flow(400.0, Size::new(90.0, 60.0), 12.0);
    println!("flow layout: {} columns", layout.columns);
    let mut grid = GridSurface::new(layout);
    let ids: Vec<_> = (0..6).map(|_| grid.insert()).collect();

    let mut timers = Timers::default();
    let config = SortableConfig::element().with_transition(Duration::from_millis(250));
    let (mut sortable, event) = Sortable::attach(config, &mut grid);
    let _ = timers.schedule(event);
    assert_eq!(grid.transition(), Transition::Suppressed);

    timers.advance(Duration::from_millis(100), &mut grid);
    assert_eq!(
        grid.transition(),
        Transition::Animated(Duration::from_millis(250))
    );

    // Drag the last item to the front and drop.
    let start = grid.bounding_box(ids[5]).center();
    let front = grid.bounding_box(ids[0]).center();
    assert!(sortable.drag_start(&grid, ids[5], start));
    let _ = sortable.drag_over(&mut grid, front);
    let order = timers.schedule(sortable.drag_end(&mut grid));
    println!("after first drop: {:?}", order);
    assert_eq!(order[0], ids[5]);

    // Start the next drag before the restore fires.
    timers.advance(Duration::from_millis(40), &mut grid);
    let start = grid.bounding_box(ids[0]).center();
    let next = grid.bounding_box(ids[1]).center();
    assert!(sortable.drag_start(&grid, ids[0], start));
    timers.advance(Duration::from_millis(60), &mut grid);
    let over = sortable.drag_over(&mut grid, next).unwrap();
    println!("mid-drag hover: {:?}, transition: {:?}", over.hover, grid.transition());
    assert!(over.shuffled);

    let order = timers.schedule(sortable.drag_end(&mut grid));
    println!("after second drop: {:?}", order);
    timers.advance(Duration::from_millis(100), &mut grid);
    assert!(timers.pending.is_empty());
}
