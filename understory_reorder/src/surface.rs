// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The collaborator trait the engine measures and writes through.
//!
//! A [`Surface`] is the container whose direct children are sortable. The
//! engine never owns it: every operation borrows the surface for the duration
//! of one call, so the host keeps full control over its element tree.
//!
//! ## Coordinate space
//!
//! [`Surface::bounding_box`] must report every child in one shared space (for
//! example viewport coordinates), and pointer positions passed to the engine
//! must use that same space. Boxes include any offset written with
//! [`Surface::set_offset`]; the committer relies on this to read the previewed
//! order back at drop time.

use alloc::vec::Vec;

use kurbo::{Rect, Vec2};

use crate::types::Transition;

/// A container of sortable items.
pub trait Surface {
    /// Handle of a direct child.
    type Item: Copy + Eq + core::fmt::Debug;

    /// Direct children in child-list order.
    fn children(&self) -> Vec<Self::Item>;

    /// Current bounding box of `item`, including any applied offset.
    fn bounding_box(&self, item: Self::Item) -> Rect;

    /// Translate `item` away from its laid-out position.
    fn set_offset(&mut self, item: Self::Item, offset: Vec2);

    /// Remove any offset from `item`.
    fn clear_offset(&mut self, item: Self::Item);

    /// Set the visual order index of `item`.
    fn set_order(&mut self, item: Self::Item, order: usize);

    /// Change how offset changes are animated.
    fn set_transition(&mut self, transition: Transition);
}
