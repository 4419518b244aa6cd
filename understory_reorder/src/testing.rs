// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A recording surface for unit tests.
//!
//! Item `i` starts at order `i`. An item's box is the slot for its current
//! order plus its offset, which is enough to observe a committed preview.

use alloc::vec::Vec;

use kurbo::{Rect, Vec2};

use crate::surface::Surface;
use crate::types::Transition;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Write {
    Offset(u32, Vec2),
    ClearOffset(u32),
    Order(u32, usize),
    Transition(Transition),
}

#[derive(Clone, Debug)]
struct TestItem {
    order: usize,
    offset: Vec2,
}

#[derive(Clone, Debug)]
pub(crate) struct TestSurface {
    slots: Vec<Rect>,
    items: Vec<TestItem>,
    pub(crate) writes: Vec<Write>,
}

impl TestSurface {
    /// One item per slot; item `i` sits in `slots[i]`.
    pub(crate) fn from_slots(slots: Vec<Rect>) -> Self {
        let items = (0..slots.len())
            .map(|order| TestItem {
                order,
                offset: Vec2::ZERO,
            })
            .collect();
        Self {
            slots,
            items,
            writes: Vec::new(),
        }
    }

    /// `n` items of 100x50 in a single row with 10px gaps.
    pub(crate) fn row(n: usize) -> Self {
        Self::from_slots(
            (0..n)
                .map(|i| {
                    let x = i as f64 * 110.0;
                    Rect::new(x, 0.0, x + 100.0, 50.0)
                })
                .collect(),
        )
    }

    /// `n` items of 100x100 in a grid of `columns` with 10px gaps.
    pub(crate) fn grid(n: usize, columns: usize) -> Self {
        Self::from_slots(
            (0..n)
                .map(|i| {
                    let x = (i % columns) as f64 * 110.0;
                    let y = (i / columns) as f64 * 110.0;
                    Rect::new(x, y, x + 100.0, y + 100.0)
                })
                .collect(),
        )
    }

    pub(crate) fn slot(&self, i: usize) -> Rect {
        self.slots[i]
    }

    pub(crate) fn offset(&self, item: u32) -> Vec2 {
        self.items[item as usize].offset
    }

    pub(crate) fn order(&self, item: u32) -> usize {
        self.items[item as usize].order
    }

    pub(crate) fn offset_writes(&self) -> usize {
        self.writes
            .iter()
            .filter(|w| matches!(w, Write::Offset(..)))
            .count()
    }
}

impl Surface for TestSurface {
    type Item = u32;

    fn children(&self) -> Vec<u32> {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Test surfaces hold a handful of items."
        )]
        (0..self.items.len() as u32).collect()
    }

    fn bounding_box(&self, item: u32) -> Rect {
        let it = &self.items[item as usize];
        self.slots[it.order] + it.offset
    }

    fn set_offset(&mut self, item: u32, offset: Vec2) {
        self.items[item as usize].offset = offset;
        self.writes.push(Write::Offset(item, offset));
    }

    fn clear_offset(&mut self, item: u32) {
        self.items[item as usize].offset = Vec2::ZERO;
        self.writes.push(Write::ClearOffset(item));
    }

    fn set_order(&mut self, item: u32, order: usize) {
        self.items[item as usize].order = order;
        self.writes.push(Write::Order(item, order));
    }

    fn set_transition(&mut self, transition: Transition) {
        self.writes.push(Write::Transition(transition));
    }
}
