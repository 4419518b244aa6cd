// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sortable controller: drag events in, committed order out.

use alloc::vec::Vec;

use kurbo::Point;
use understory_reorder::{DragOver, ReorderEngine, RestoreTransitions, Transition};

use crate::config::SortableConfig;
use crate::host::DragHost;

/// Emitted after every commit.
///
/// `order` is the new order of the container's children. `restore` is the
/// second phase of the commit; schedule it after
/// [`RestoreTransitions::delay`] and apply it to the same host.
#[derive(Clone, Debug, PartialEq)]
pub struct SortEvent<K> {
    /// Children in their committed order.
    pub order: Vec<K>,
    /// Deferred re-enable of offset animation.
    pub restore: RestoreTransitions,
}

/// Drag-to-reorder behavior attached to one container.
///
/// The host forwards its platform's drag start, drag over and drag end
/// events, plus child-list changes. Every method borrows the host for the
/// duration of the call only.
#[derive(Clone, Debug)]
pub struct Sortable<K> {
    config: SortableConfig,
    engine: ReorderEngine<K>,
}

impl<K: Copy + Eq + core::fmt::Debug> Sortable<K> {
    /// Attach to `host`: mark every child draggable and commit a baseline order.
    pub fn attach<H>(config: SortableConfig, host: &mut H) -> (Self, SortEvent<K>)
    where
        H: DragHost<Item = K> + ?Sized,
    {
        tracing::debug!(?config, "attaching sortable");
        let mut sortable = Self {
            config,
            engine: ReorderEngine::new(),
        };
        let event = sortable.refresh(host);
        (sortable, event)
    }

    /// Configuration this sortable was attached with.
    pub fn config(&self) -> &SortableConfig {
        &self.config
    }

    /// The underlying engine, for inspecting the active drag session.
    pub fn engine(&self) -> &ReorderEngine<K> {
        &self.engine
    }

    /// A drag started on `target`.
    ///
    /// Replaces any session still active. Returns `false` if `target` is not
    /// a direct child of the container.
    pub fn drag_start<H>(&mut self, host: &H, target: K, pointer: Point) -> bool
    where
        H: DragHost<Item = K> + ?Sized,
    {
        self.engine.drag_start(host, target, pointer)
    }

    /// The pointer moved over the container during a drag.
    ///
    /// The host must always tell its platform that the container accepts the
    /// drop (for the web, `preventDefault` on `dragover`), whatever this
    /// returns; otherwise the platform rejects the drag before it ends.
    /// A [`Hover::Outside`](understory_reorder::Hover::Outside) result means
    /// the pointer is over no slot.
    pub fn drag_over<H>(&mut self, host: &mut H, pointer: Point) -> Option<DragOver>
    where
        H: DragHost<Item = K> + ?Sized,
    {
        self.engine.drag_over(host, pointer)
    }

    /// The drag ended: commit whatever order the preview shows.
    ///
    /// Commits even if no session was active, so a stray drag end still
    /// leaves the container in a consistent order.
    pub fn drag_end<H>(&mut self, host: &mut H) -> SortEvent<K>
    where
        H: DragHost<Item = K> + ?Sized,
    {
        let _ = self.engine.drag_end();
        self.commit(host)
    }

    /// Children were inserted or removed.
    ///
    /// `added` lists the inserted children. Each is marked draggable and given
    /// its child-list position as a provisional order, so it lands where it
    /// was inserted; then the whole container is re-initialized. An active
    /// drag is cancelled and its preview reverted, because its snapshot may
    /// name removed children.
    pub fn children_changed<H>(&mut self, host: &mut H, added: &[K]) -> SortEvent<K>
    where
        H: DragHost<Item = K> + ?Sized,
    {
        tracing::debug!(added = added.len(), "children changed");
        if self.engine.is_dragging() {
            self.engine.cancel();
            for item in host.children() {
                host.clear_offset(item);
            }
        }
        if !added.is_empty() {
            let children = host.children();
            for &item in added {
                host.set_draggable(item, true);
                if let Some(pos) = children.iter().position(|&c| c == item) {
                    host.set_order(item, pos);
                }
            }
        }
        self.refresh(host)
    }

    /// Mark every child draggable and recommit the order from geometry.
    pub fn refresh<H>(&mut self, host: &mut H) -> SortEvent<K>
    where
        H: DragHost<Item = K> + ?Sized,
    {
        for item in host.children() {
            host.set_draggable(item, true);
        }
        self.commit(host)
    }

    /// Detach from `host`, undoing what [`Self::attach`] set up.
    ///
    /// Children lose their draggable flag and any offset, and the transition
    /// falls back to the host's own styling. Committed order indices stay.
    pub fn detach<H>(mut self, host: &mut H)
    where
        H: DragHost<Item = K> + ?Sized,
    {
        self.engine.cancel();
        host.set_transition(Transition::Inherit);
        for item in host.children() {
            host.clear_offset(item);
            host.set_draggable(item, false);
        }
        tracing::debug!("sortable detached");
    }

    fn commit<H>(&mut self, host: &mut H) -> SortEvent<K>
    where
        H: DragHost<Item = K> + ?Sized,
    {
        let commit = self.config.committer().commit(host);
        SortEvent {
            order: commit.order,
            restore: commit.restore,
        }
    }
}
