// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration for a [`Sortable`](crate::Sortable).

use core::time::Duration;

use understory_reorder::{Committer, DEFAULT_TRANSITION};

/// Timing knobs shared by every sortable host.
///
/// Grid geometry is not part of this; it belongs to the surface (see
/// [`GridLayout`](crate::grid::GridLayout)).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortableConfig {
    /// Duration of the offset animation while previewing.
    pub transition: Duration,
    /// Delay before animation is re-enabled after a commit.
    pub restore_delay: Duration,
}

impl Default for SortableConfig {
    fn default() -> Self {
        Self {
            transition: DEFAULT_TRANSITION,
            restore_delay: Duration::ZERO,
        }
    }
}

impl SortableConfig {
    /// Preset for a self-contained sortable element that scopes its own styles.
    ///
    /// Waits 100ms before animating again, long enough for the host to lay
    /// out the new order first.
    pub fn element() -> Self {
        Self {
            restore_delay: Duration::from_millis(100),
            ..Self::default()
        }
    }

    /// Preset for a controller attached to an existing container.
    ///
    /// Re-enables animation on the next tick.
    pub fn controller() -> Self {
        Self::default()
    }

    /// Override the animation duration.
    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }

    pub(crate) fn committer(&self) -> Committer {
        Committer::new(self.transition, self.restore_delay)
    }
}
