// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reorder engine basics.
//!
//! Implement `Surface` for a vertical list, preview a drag, and commit it.
//!
//! Run:
//! - `cargo run -p understory_demos --example reorder_basics`

use kurbo::{Point, Rect, Vec2};
use understory_reorder::{Committer, Hover, ReorderEngine, Surface, Transition};

const ROW: f64 = 30.0;

/// A column of fixed-height rows. Row `i` is drawn at `order[i]`.
struct Column {
    labels: Vec<&'static str>,
    order: Vec<usize>,
    offset: Vec<Vec2>,
}

impl Column {
    fn new(labels: &[&'static str]) -> Self {
        Self {
            labels: labels.to_vec(),
            order: (0..labels.len()).collect(),
            offset: vec![Vec2::ZERO; labels.len()],
        }
    }
}

impl Surface for Column {
    type Item = usize;

    fn children(&self) -> Vec<usize> {
        (0..self.labels.len()).collect()
    }

    fn bounding_box(&self, item: usize) -> Rect {
        let y = self.order[item] as f64 * ROW;
        Rect::new(0.0, y, 200.0, y + ROW) + self.offset[item]
    }

    fn set_offset(&mut self, item: usize, offset: Vec2) {
        self.offset[item] = offset;
    }

    fn clear_offset(&mut self, item: usize) {
        self.offset[item] = Vec2::ZERO;
    }

    fn set_order(&mut self, item: usize, order: usize) {
        self.order[item] = order;
    }

    fn set_transition(&mut self, transition: Transition) {
        println!("  transition -> {:?}", transition);
    }
}

fn main() {
    let mut column = Column::new(&["alpha", "bravo", "charlie", "delta", "echo"]);
    let mut engine = ReorderEngine::new();

    // Pick up "charlie" and move it over "alpha".
    assert!(engine.drag_start(&column, 2, Point::new(100.0, 75.0)));
    let over = engine.drag_over(&mut column, Point::new(100.0, 10.0)).unwrap();
    println!("== Preview ({:?}) ==", over.hover);
    for (i, label) in column.labels.iter().enumerate() {
        println!("  {:<8} offset {:?}", label, column.offset[i]);
    }
    assert_eq!(over.hover, Hover::Slot(0));
    assert_eq!(column.offset[2], Vec2::new(0.0, -2.0 * ROW));
    assert_eq!(column.offset[0], Vec2::new(0.0, ROW));
    assert_eq!(column.offset[3], Vec2::ZERO);

    // Same slot again: nothing to do.
    let again = engine.drag_over(&mut column, Point::new(120.0, 12.0)).unwrap();
    assert!(!again.shuffled);

    let _ = engine.drag_end();
    println!("== Commit ==");
    let commit = Committer::default().commit(&mut column);
    commit.restore.apply(&mut column);
    let labels: Vec<_> = commit.order.iter().map(|&i| column.labels[i]).collect();
    println!("  {:?}", labels);
    assert_eq!(labels, ["charlie", "alpha", "bravo", "delta", "echo"]);
}
