// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position snapshots: a container's children sorted by where they are drawn.
//!
//! ## Ordering
//!
//! Entries are sorted by the top edge of their box, then by the left edge.
//! The sort is stable, so children with identical top-left corners keep their
//! child-list order. Coordinates are assumed finite; a NaN compares equal to
//! everything and falls back to that stable order.
//!
//! ## Hit testing
//!
//! [`Snapshot::hit_test`] treats boxes as closed on all four edges, so a
//! pointer exactly on the border between two adjacent items belongs to both.
//! When several boxes contain the point, the one sorted last wins.
//!
//! ```
//! use understory_reorder::snapshot::SnapshotEntry;
//! use understory_reorder::{Hover, Snapshot};
//! use kurbo::{Point, Rect};
//!
//! let snapshot = Snapshot::from_entries(vec![
//!     SnapshotEntry { item: 'b', bounds: Rect::new(0.0, 60.0, 50.0, 110.0) },
//!     SnapshotEntry { item: 'a', bounds: Rect::new(0.0, 0.0, 50.0, 50.0) },
//! ]);
//! assert_eq!(snapshot.items(), vec!['a', 'b']);
//! assert_eq!(snapshot.hit_test(Point::new(25.0, 80.0)), Hover::Slot(1));
//! assert_eq!(snapshot.hit_test(Point::new(25.0, 55.0)), Hover::Outside);
//! ```

use alloc::vec::Vec;
use core::cmp::Ordering;

use kurbo::{Point, Rect};

use crate::surface::Surface;
use crate::types::Hover;

/// One measured child.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SnapshotEntry<K> {
    /// The child.
    pub item: K,
    /// Its bounding box at capture time.
    pub bounds: Rect,
}

/// Children of a container in geometric order, measured at one instant.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot<K> {
    entries: Vec<SnapshotEntry<K>>,
}

impl<K> Default for Snapshot<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: Copy + Eq> Snapshot<K> {
    /// Measure every direct child of `surface` and sort them.
    pub fn capture<S>(surface: &S) -> Self
    where
        S: Surface<Item = K> + ?Sized,
    {
        let entries = surface
            .children()
            .into_iter()
            .map(|item| SnapshotEntry {
                item,
                bounds: surface.bounding_box(item),
            })
            .collect();
        Self::from_entries(entries)
    }

    /// Items in sorted order.
    pub fn items(&self) -> Vec<K> {
        self.entries.iter().map(|e| e.item).collect()
    }

    /// Sorted position of `item`, if it was captured.
    pub fn index_of(&self, item: K) -> Option<usize> {
        self.entries.iter().position(|e| e.item == item)
    }
}

impl<K> Snapshot<K> {
    /// Sort already-measured entries.
    pub fn from_entries(mut entries: Vec<SnapshotEntry<K>>) -> Self {
        entries.sort_by(|a, b| geometric_order(a.bounds, b.bounds));
        Self { entries }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the container had no children.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at sorted position `index`.
    pub fn get(&self, index: usize) -> Option<&SnapshotEntry<K>> {
        self.entries.get(index)
    }

    /// Entries in sorted order.
    pub fn iter(&self) -> core::slice::Iter<'_, SnapshotEntry<K>> {
        self.entries.iter()
    }

    /// Entries in sorted order as a slice.
    pub fn entries(&self) -> &[SnapshotEntry<K>] {
        &self.entries
    }

    /// Slot whose box contains `pt`, edges included.
    pub fn hit_test(&self, pt: Point) -> Hover {
        self.entries
            .iter()
            .rposition(|e| contains_closed(e.bounds, pt))
            .map_or(Hover::Outside, Hover::Slot)
    }
}

impl<'a, K> IntoIterator for &'a Snapshot<K> {
    type Item = &'a SnapshotEntry<K>;
    type IntoIter = core::slice::Iter<'a, SnapshotEntry<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Top edge first, then left edge.
fn geometric_order(a: Rect, b: Rect) -> Ordering {
    a.y0.partial_cmp(&b.y0)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.x0.partial_cmp(&b.x0).unwrap_or(Ordering::Equal))
}

// `Rect::contains` is half-open; drag targets include the far edges too.
fn contains_closed(r: Rect, pt: Point) -> bool {
    pt.x >= r.x0 && pt.x <= r.x1 && pt.y >= r.y0 && pt.y <= r.y1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestSurface;
    use alloc::vec;

    #[test]
    fn empty_surface_yields_empty_snapshot() {
        let surface = TestSurface::from_slots(Vec::new());
        let snapshot = Snapshot::capture(&surface);
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.hit_test(Point::new(0.0, 0.0)), Hover::Outside);
    }

    #[test]
    fn sorts_rows_before_columns() {
        // Child-list order deliberately differs from visual order.
        let surface = TestSurface::from_slots(vec![
            Rect::new(110.0, 110.0, 210.0, 210.0),
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(0.0, 110.0, 100.0, 210.0),
            Rect::new(110.0, 0.0, 210.0, 100.0),
        ]);
        let snapshot = Snapshot::capture(&surface);
        assert_eq!(snapshot.items(), vec![1, 3, 2, 0]);
        assert_eq!(snapshot.index_of(2), Some(2));
        assert_eq!(snapshot.index_of(9), None);
    }

    #[test]
    fn equal_corners_keep_child_order() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let surface = TestSurface::from_slots(vec![r, r, r]);
        let snapshot = Snapshot::capture(&surface);
        assert_eq!(snapshot.items(), vec![0, 1, 2]);
    }

    #[test]
    fn nan_coordinates_do_not_panic() {
        let surface = TestSurface::from_slots(vec![
            Rect::new(0.0, f64::NAN, 10.0, 10.0),
            Rect::new(0.0, 0.0, 10.0, 10.0),
        ]);
        let snapshot = Snapshot::capture(&surface);
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn hit_test_includes_all_edges() {
        let snapshot = Snapshot::capture(&TestSurface::row(3));
        // Item 1 spans x in [110, 210], y in [0, 50].
        assert_eq!(snapshot.hit_test(Point::new(110.0, 0.0)), Hover::Slot(1));
        assert_eq!(snapshot.hit_test(Point::new(210.0, 50.0)), Hover::Slot(1));
        // Gutter between items 1 and 2.
        assert_eq!(snapshot.hit_test(Point::new(215.0, 25.0)), Hover::Outside);
        // Below the row.
        assert_eq!(snapshot.hit_test(Point::new(50.0, 50.1)), Hover::Outside);
    }

    #[test]
    fn hit_test_prefers_last_overlapping_entry() {
        let snapshot = Snapshot::from_entries(vec![
            SnapshotEntry {
                item: 'a',
                bounds: Rect::new(0.0, 0.0, 100.0, 100.0),
            },
            SnapshotEntry {
                item: 'b',
                bounds: Rect::new(50.0, 0.0, 150.0, 100.0),
            },
        ]);
        assert_eq!(snapshot.hit_test(Point::new(75.0, 50.0)), Hover::Slot(1));
        assert_eq!(snapshot.hit_test(Point::new(25.0, 50.0)), Hover::Slot(0));
    }

    #[test]
    fn capture_sees_applied_offsets() {
        let mut surface = TestSurface::row(2);
        let shift = surface.slot(1).origin() - surface.slot(0).origin();
        surface.set_offset(0, shift + kurbo::Vec2::new(1.0, 0.0));
        let snapshot = Snapshot::capture(&surface);
        assert_eq!(snapshot.items(), vec![1, 0]);
    }
}
