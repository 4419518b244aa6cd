// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reorder engine: drag session state and the insert-and-shift preview.
//!
//! ## States
//!
//! - Idle: no [`DragSession`].
//! - Dragging: a session is active and its [`Snapshot`] is frozen.
//!
//! [`ReorderEngine::drag_start`] always replaces the current session, so a
//! second drag start never nests. [`ReorderEngine::drag_end`] returns to Idle.
//!
//! ## Preview
//!
//! On each drag-over the engine hit-tests the frozen snapshot. When the hovered
//! slot changes, it writes an offset to every sibling (see [`shuffle_offsets`]):
//! the dragged item jumps to the hovered slot and each sibling between the two
//! slots moves one slot toward the gap the dragged item left behind. Hovering
//! the same slot again writes nothing.
//!
//! ```
//! use understory_reorder::snapshot::SnapshotEntry;
//! use understory_reorder::{Hover, Snapshot, shuffle_offsets};
//! use kurbo::{Rect, Vec2};
//!
//! let row: Vec<_> = (0..3)
//!     .map(|i| SnapshotEntry {
//!         item: i,
//!         bounds: Rect::new(i as f64 * 100.0, 0.0, i as f64 * 100.0 + 90.0, 40.0),
//!     })
//!     .collect();
//! let snapshot = Snapshot::from_entries(row);
//!
//! // Drag item 0 over item 2.
//! let offsets = shuffle_offsets(&snapshot, 0, Hover::Slot(2));
//! assert_eq!(
//!     offsets,
//!     vec![
//!         (0, Vec2::new(200.0, 0.0)),
//!         (1, Vec2::new(-100.0, 0.0)),
//!         (2, Vec2::new(-100.0, 0.0)),
//!     ]
//! );
//! ```

use alloc::vec::Vec;

use kurbo::{Point, Rect, Vec2};

use crate::snapshot::Snapshot;
use crate::surface::Surface;
use crate::types::Hover;

/// Engine state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// No drag in progress.
    Idle,
    /// A drag session is active.
    Dragging,
}

/// State of one drag gesture, from drag start to drag end.
#[derive(Clone, Debug)]
pub struct DragSession<K> {
    item: K,
    origin_bounds: Rect,
    index: usize,
    siblings: Snapshot<K>,
    start_pointer: Point,
    hover: Option<Hover>,
}

impl<K: Copy + Eq> DragSession<K> {
    /// The dragged item.
    pub fn item(&self) -> K {
        self.item
    }

    /// Bounding box of the dragged item when the drag started.
    pub fn origin_bounds(&self) -> Rect {
        self.origin_bounds
    }

    /// Index of the dragged item within [`Self::siblings`].
    pub fn index(&self) -> usize {
        self.index
    }

    /// The frozen sibling snapshot.
    pub fn siblings(&self) -> &Snapshot<K> {
        &self.siblings
    }

    /// Pointer position that started the drag.
    pub fn start_pointer(&self) -> Point {
        self.start_pointer
    }

    /// Distance the pointer travelled since the drag started.
    pub fn pointer_delta(&self, pointer: Point) -> Vec2 {
        pointer - self.start_pointer
    }

    /// Last hover computed by a drag-over, or `None` before the first one.
    pub fn hover(&self) -> Option<Hover> {
        self.hover
    }
}

/// Result of one drag-over.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragOver {
    /// Slot under the pointer.
    pub hover: Hover,
    /// True if offsets were written for this event.
    pub shuffled: bool,
    /// Pointer displacement since the drag started.
    pub delta: Vec2,
}

/// Drag session state machine.
#[derive(Clone, Debug)]
pub struct ReorderEngine<K> {
    session: Option<DragSession<K>>,
}

impl<K> Default for ReorderEngine<K> {
    fn default() -> Self {
        Self { session: None }
    }
}

impl<K: Copy + Eq + core::fmt::Debug> ReorderEngine<K> {
    /// Create an idle engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> EngineState {
        if self.session.is_some() {
            EngineState::Dragging
        } else {
            EngineState::Idle
        }
    }

    /// True while a drag session is active.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&DragSession<K>> {
        self.session.as_ref()
    }

    /// Start dragging `target`.
    ///
    /// Any active session is discarded first. Returns `false` and stays idle
    /// if `target` is not a direct child of `surface`.
    pub fn drag_start<S>(&mut self, surface: &S, target: K, pointer: Point) -> bool
    where
        S: Surface<Item = K> + ?Sized,
    {
        if let Some(previous) = self.session.take() {
            tracing::debug!(item = ?previous.item, "replacing active drag session");
        }
        let siblings = Snapshot::capture(surface);
        let Some(index) = siblings.index_of(target) else {
            tracing::debug!(item = ?target, "drag start ignored: not a direct child");
            return false;
        };
        let origin_bounds = siblings.entries()[index].bounds;
        tracing::debug!(item = ?target, index, siblings = siblings.len(), "drag start");
        self.session = Some(DragSession {
            item: target,
            origin_bounds,
            index,
            siblings,
            start_pointer: pointer,
            hover: None,
        });
        true
    }

    /// Handle the pointer moving over the container.
    ///
    /// Returns `None` while idle. Offsets are written only when the hovered
    /// slot changed since the previous drag-over and the pointer is over a
    /// slot; the new hover is recorded either way.
    pub fn drag_over<S>(&mut self, surface: &mut S, pointer: Point) -> Option<DragOver>
    where
        S: Surface<Item = K> + ?Sized,
    {
        let session = self.session.as_mut()?;
        let hover = session.siblings.hit_test(pointer);
        let mut shuffled = false;
        if session.hover != Some(hover) {
            tracing::trace!(?hover, previous = ?session.hover, "hover changed");
            let offsets = shuffle_offsets(&session.siblings, session.index, hover);
            shuffled = !offsets.is_empty();
            for (item, offset) in offsets {
                surface.set_offset(item, offset);
            }
        }
        session.hover = Some(hover);
        Some(DragOver {
            hover,
            shuffled,
            delta: session.pointer_delta(pointer),
        })
    }

    /// End the drag and return the discarded session, if there was one.
    pub fn drag_end(&mut self) -> Option<DragSession<K>> {
        let session = self.session.take();
        if let Some(s) = &session {
            tracing::debug!(item = ?s.item, hover = ?s.hover, "drag end");
        }
        session
    }

    /// Drop the active session without handing it back.
    pub fn cancel(&mut self) {
        if let Some(s) = self.session.take() {
            tracing::debug!(item = ?s.item, "drag session cancelled");
        }
    }
}

/// Offsets that preview moving the item at `current` into `target`.
///
/// Returns one `(item, offset)` pair for every entry of `snapshot`, in
/// snapshot order, or nothing when `target` is [`Hover::Outside`]. Offsets are
/// differences between box origins:
///
/// - the dragged item moves to the target slot;
/// - siblings between the two slots move one slot toward `current`;
/// - everything else gets a zero offset.
///
/// An out-of-range `current` or `target` also yields nothing.
pub fn shuffle_offsets<K: Copy>(
    snapshot: &Snapshot<K>,
    current: usize,
    target: Hover,
) -> Vec<(K, Vec2)> {
    let Some(target) = target.index() else {
        return Vec::new();
    };
    let entries = snapshot.entries();
    if current >= entries.len() || target >= entries.len() {
        return Vec::new();
    }
    let start = current.min(target);
    let end = current.max(target);
    let origin = |i: usize| entries[i].bounds.origin();

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let offset = if i == current {
                origin(target) - origin(i)
            } else if i < start || i > end {
                Vec2::ZERO
            } else if i < current {
                origin(i + 1) - origin(i)
            } else {
                origin(i - 1) - origin(i)
            };
            (entry.item, offset)
        })
        .collect()
}
