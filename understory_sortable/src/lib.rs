// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_sortable --heading-base-level=0

//! Understory Sortable: drag-to-reorder containers on top of [`understory_reorder`].
//!
//! ## Overview
//!
//! [`Sortable`] attaches to a container and turns its platform's drag events
//! into previews and committed orders. It does the bookkeeping around the
//! engine:
//!
//! - marks children draggable on attach and whenever the child list changes;
//! - commits a baseline order on attach and the previewed order on drag end;
//! - reports every commit as a [`SortEvent`];
//! - undoes its setup on [`Sortable::detach`].
//!
//! The container is any [`DragHost`], a [`Surface`](understory_reorder::Surface)
//! that can also toggle the draggable flag. [`grid::GridSurface`] is a headless
//! one with a fixed-column grid layout.
//!
//! ## Wiring
//!
//! | Platform event | Call |
//! |---|---|
//! | drag start on a child | [`Sortable::drag_start`] |
//! | drag over the container | [`Sortable::drag_over`] (and always accept the drop) |
//! | drag end | [`Sortable::drag_end`] |
//! | children inserted or removed | [`Sortable::children_changed`] |
//!
//! Each [`SortEvent`] carries a deferred [`RestoreTransitions`](understory_reorder::RestoreTransitions).
//! Schedule it after its delay; it only re-enables animation, so it never needs
//! cancelling.
//!
//! ## Example
//!
//! ```
//! use understory_sortable::grid::{GridLayout, GridSurface};
//! use understory_sortable::{Sortable, SortableConfig};
//! use understory_reorder::Surface;
//!
//! let mut grid = GridSurface::new(GridLayout::default());
//! let items: Vec<_> = (0..4).map(|_| grid.insert()).collect();
//!
//! let (mut sortable, event) = Sortable::attach(SortableConfig::element(), &mut grid);
//! event.restore.apply(&mut grid);
//!
//! // Drag the first item over the third.
//! let start = grid.bounding_box(items[0]).center();
//! let over = grid.bounding_box(items[2]).center();
//! assert!(sortable.drag_start(&grid, items[0], start));
//! let _ = sortable.drag_over(&mut grid, over);
//!
//! let event = sortable.drag_end(&mut grid);
//! assert_eq!(event.order, vec![items[1], items[2], items[0], items[3]]);
//! ```
//!
//! ## Configuration
//!
//! [`SortableConfig`] holds the animation timings. [`SortableConfig::element`]
//! and [`SortableConfig::controller`] match the two usual integrations: a
//! self-contained element that waits 100ms before animating again, and a
//! controller on an existing container that re-enables animation at once.
//! Grid geometry lives on the surface ([`grid::GridLayout`]).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod grid;
pub mod host;
pub mod sortable;

pub use config::SortableConfig;
pub use host::DragHost;
pub use sortable::{SortEvent, Sortable};
