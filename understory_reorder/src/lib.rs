// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_reorder --heading-base-level=0

//! Understory Reorder: a platform-agnostic drag-to-reorder engine.
//!
//! ## Overview
//!
//! As the user drags one item over its siblings, the other items shift to
//! preview the new order; on drop the preview becomes the committed order.
//! This crate holds the logic for that and nothing else:
//!
//! - [`Snapshot`]: the container's children sorted by top edge, then left edge.
//! - [`ReorderEngine`]: the drag session state machine. It hit-tests a frozen
//!   snapshot and writes insert-and-shift offsets when the hovered slot changes.
//! - [`Committer`]: rewrites order indices from the previewed geometry, with
//!   animation suppressed, and hands back a deferred [`RestoreTransitions`].
//!
//! It does not listen to events, observe child lists, or touch styles. All of
//! that goes through the [`Surface`] trait, implemented by the host.
//!
//! ## Workflow
//!
//! 1) On drag start, call [`ReorderEngine::drag_start`] with the drag target.
//! 2) On every drag-over, call [`ReorderEngine::drag_over`]. The host must
//!    also tell its platform the container accepts the drop.
//! 3) On drag end, call [`ReorderEngine::drag_end`], then [`Committer::commit`].
//!    Schedule the returned [`RestoreTransitions`] after its delay.
//!
//! ```
//! use understory_reorder::{Committer, Hover, ReorderEngine, Surface, Transition};
//! use kurbo::{Point, Rect, Vec2};
//!
//! // A row of three 100x40 items; an item's box is its slot plus its offset.
//! struct Row {
//!     order: Vec<usize>,
//!     offset: Vec<Vec2>,
//! }
//!
//! impl Surface for Row {
//!     type Item = usize;
//!     fn children(&self) -> Vec<usize> { (0..3).collect() }
//!     fn bounding_box(&self, item: usize) -> Rect {
//!         let x = self.order[item] as f64 * 110.0;
//!         Rect::new(x, 0.0, x + 100.0, 40.0) + self.offset[item]
//!     }
//!     fn set_offset(&mut self, item: usize, offset: Vec2) { self.offset[item] = offset; }
//!     fn clear_offset(&mut self, item: usize) { self.offset[item] = Vec2::ZERO; }
//!     fn set_order(&mut self, item: usize, order: usize) { self.order[item] = order; }
//!     fn set_transition(&mut self, _: Transition) {}
//! }
//!
//! let mut row = Row { order: vec![0, 1, 2], offset: vec![Vec2::ZERO; 3] };
//! let mut engine = ReorderEngine::new();
//!
//! assert!(engine.drag_start(&row, 2, Point::new(270.0, 20.0)));
//! let over = engine.drag_over(&mut row, Point::new(50.0, 20.0)).unwrap();
//! assert_eq!(over.hover, Hover::Slot(0));
//! assert_eq!(row.offset[2], Vec2::new(-220.0, 0.0));
//! assert_eq!(row.offset[0], Vec2::new(110.0, 0.0));
//!
//! let _ = engine.drag_end();
//! let commit = Committer::default().commit(&mut row);
//! assert_eq!(commit.order, vec![2, 0, 1]);
//! commit.restore.apply(&mut row);
//! ```
//!
//! ## Hover and drop targets
//!
//! The pointer maps to a [`Hover`]: a slot index, or `Outside` when it is over
//! no sibling. `Outside` is never a drop target, but it does not undo the
//! last preview either.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod commit;
pub mod engine;
pub mod snapshot;
pub mod surface;
pub mod types;

#[cfg(test)]
mod testing;

pub use commit::{Commit, Committer, DEFAULT_TRANSITION, RestoreTransitions};
pub use engine::{DragOver, DragSession, EngineState, ReorderEngine, shuffle_offsets};
pub use snapshot::{Snapshot, SnapshotEntry};
pub use surface::Surface;
pub use types::{Hover, Transition};
