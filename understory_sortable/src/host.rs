// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-side extension of [`Surface`].

use understory_reorder::Surface;

/// A [`Surface`] whose children can be marked draggable.
///
/// Platforms that start a drag only from draggable elements need every child
/// marked; [`Sortable`](crate::Sortable) does that on attach and whenever the
/// child list changes, and clears it again on detach.
pub trait DragHost: Surface {
    /// Allow or forbid dragging `item`.
    fn set_draggable(&mut self, item: Self::Item, draggable: bool);
}
