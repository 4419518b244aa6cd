// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Order committer: turn the previewed arrangement into the laid-out order.
//!
//! A commit runs in two phases:
//!
//! 1. [`Committer::commit`] suppresses transitions, measures the children
//!    (offsets still applied, so the preview is what gets measured), clears
//!    every offset, and writes order indices `0..n`.
//! 2. The returned [`RestoreTransitions`] is run by the host after
//!    [`RestoreTransitions::delay`] so the reorder itself does not animate.
//!
//! Phase two only writes [`Transition::Animated`]. Running it late, twice, or
//! while a new drag is under way has no further effect, so hosts never cancel it.

use alloc::vec::Vec;
use core::time::Duration;

use crate::snapshot::Snapshot;
use crate::surface::Surface;
use crate::types::Transition;

/// Default duration of offset animations.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(200);

/// Writes committed order back to a surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Committer {
    /// Animation duration restored in phase two.
    pub transition: Duration,
    /// How long the host should wait before running phase two.
    pub restore_delay: Duration,
}

impl Default for Committer {
    fn default() -> Self {
        Self {
            transition: DEFAULT_TRANSITION,
            restore_delay: Duration::ZERO,
        }
    }
}

/// Result of phase one.
#[derive(Clone, Debug, PartialEq)]
pub struct Commit<K> {
    /// Children in their new order; `order[i]` now has order index `i`.
    pub order: Vec<K>,
    /// Phase two, to be run by the host.
    pub restore: RestoreTransitions,
}

/// Deferred second phase of a commit.
#[must_use = "transitions stay suppressed until this is applied"]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RestoreTransitions {
    transition: Duration,
    delay: Duration,
}

impl RestoreTransitions {
    /// How long to wait before calling [`Self::apply`].
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Animation duration this restores.
    pub fn transition(&self) -> Duration {
        self.transition
    }

    /// Re-enable offset animation on `surface`.
    pub fn apply<S: Surface + ?Sized>(self, surface: &mut S) {
        tracing::trace!(transition = ?self.transition, "restoring transitions");
        surface.set_transition(Transition::Animated(self.transition));
    }
}

impl Committer {
    /// Create a committer with explicit timings.
    pub const fn new(transition: Duration, restore_delay: Duration) -> Self {
        Self {
            transition,
            restore_delay,
        }
    }

    /// Phase one: rewrite order indices from the current geometry.
    pub fn commit<S>(&self, surface: &mut S) -> Commit<S::Item>
    where
        S: Surface + ?Sized,
    {
        surface.set_transition(Transition::Suppressed);
        let snapshot = Snapshot::capture(&*surface);
        for (i, entry) in snapshot.iter().enumerate() {
            surface.clear_offset(entry.item);
            surface.set_order(entry.item, i);
        }
        let order = snapshot.items();
        tracing::debug!(items = order.len(), "order committed");
        Commit {
            order,
            restore: RestoreTransitions {
                transition: self.transition,
                delay: self.restore_delay,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ReorderEngine;
    use crate::testing::{TestSurface, Write};
    use alloc::vec;
    use kurbo::{Rect, Vec2};

    #[test]
    fn assigns_each_order_once_in_geometric_order() {
        let mut surface = TestSurface::from_slots(vec![
            Rect::new(110.0, 0.0, 210.0, 100.0),
            Rect::new(0.0, 110.0, 100.0, 210.0),
            Rect::new(0.0, 0.0, 100.0, 100.0),
        ]);
        let commit = Committer::default().commit(&mut surface);
        assert_eq!(commit.order, vec![2, 0, 1]);
        let orders: Vec<_> = surface
            .writes
            .iter()
            .filter_map(|w| match w {
                Write::Order(item, order) => Some((*item, *order)),
                _ => None,
            })
            .collect();
        assert_eq!(orders, vec![(2, 0), (0, 1), (1, 2)]);
    }

    #[test]
    fn suppresses_then_clears_offsets() {
        let mut surface = TestSurface::row(2);
        surface.set_offset(1, Vec2::new(3.0, 0.0));
        surface.writes.clear();
        let _ = Committer::default().commit(&mut surface);
        assert_eq!(surface.writes[0], Write::Transition(Transition::Suppressed));
        assert_eq!(surface.writes[1], Write::ClearOffset(0));
        assert_eq!(surface.writes[2], Write::Order(0, 0));
        assert_eq!(surface.offset(1), Vec2::ZERO);
    }

    #[test]
    fn empty_surface_commits_nothing() {
        let mut surface = TestSurface::from_slots(Vec::new());
        let commit = Committer::default().commit(&mut surface);
        assert!(commit.order.is_empty());
        assert_eq!(surface.writes, vec![Write::Transition(Transition::Suppressed)]);
    }

    #[test]
    fn restore_is_idempotent() {
        let mut surface = TestSurface::row(1);
        let committer = Committer::new(Duration::from_millis(150), Duration::from_millis(100));
        let commit = committer.commit(&mut surface);
        assert_eq!(commit.restore.delay(), Duration::from_millis(100));
        assert_eq!(commit.restore.transition(), Duration::from_millis(150));
        surface.writes.clear();
        commit.restore.apply(&mut surface);
        commit.restore.apply(&mut surface);
        let animated = Write::Transition(Transition::Animated(Duration::from_millis(150)));
        assert_eq!(surface.writes, vec![animated, animated]);
    }

    // Drag A over D in [A, B, C, D] and drop: the preview becomes the order.
    #[test]
    fn drop_commits_previewed_order() {
        let mut surface = TestSurface::grid(4, 2);
        let mut engine = ReorderEngine::new();
        let (a, b, c, d) = (0, 1, 2, 3);
        assert!(engine.drag_start(&surface, a, surface.slot(0).center()));
        let target = surface.slot(3).center();
        let over = engine.drag_over(&mut surface, target).unwrap();
        assert!(over.shuffled);
        assert!(engine.drag_end().is_some());

        let commit = Committer::default().commit(&mut surface);
        assert_eq!(commit.order, vec![b, c, d, a]);
        assert_eq!(
            (surface.order(a), surface.order(b), surface.order(c), surface.order(d)),
            (3, 0, 1, 2)
        );
        for item in [a, b, c, d] {
            assert_eq!(surface.offset(item), Vec2::ZERO);
        }
    }
}
