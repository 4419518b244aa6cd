// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small value types shared by the snapshotter, engine, and committer.

use core::time::Duration;

/// Slot under the pointer during a drag.
///
/// Produced by [`Snapshot::hit_test`](crate::snapshot::Snapshot::hit_test) and
/// recorded by the [engine](crate::engine::ReorderEngine) on every drag-over.
///
/// `Outside` is never a drop target. Hovering outside every sibling does not
/// undo an earlier preview; the last applied offsets stay in place.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Hover {
    /// The pointer is over the sibling at this snapshot index.
    Slot(usize),
    /// The pointer is not over any sibling.
    Outside,
}

impl Hover {
    /// Snapshot index of the hovered slot, if any.
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Slot(i) => Some(i),
            Self::Outside => None,
        }
    }

    /// True if dropping here would land on a sibling slot.
    pub const fn is_drop_target(self) -> bool {
        matches!(self, Self::Slot(_))
    }
}

/// Transition state written to a [`Surface`](crate::surface::Surface).
///
/// The committer suppresses animation while it rewrites order indices, then
/// hands back a [`RestoreTransitions`](crate::commit::RestoreTransitions) that
/// switches to `Animated` once the host runs it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Offset and order changes apply instantly.
    Suppressed,
    /// Offset changes animate over the given duration.
    Animated(Duration),
    /// Remove any transition this crate set and fall back to the host's styling.
    Inherit,
}
