// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless grid container implementing [`DragHost`].
//!
//! [`GridSurface`] lays children out in a fixed-column grid the way a CSS grid
//! with `order` does: children are placed by ascending order index, ties
//! broken by child-list position, and each item is then translated by its
//! offset. It has no renderer; use it in tests, previews, or as the model
//! behind a custom-drawn list.
//!
//! ```
//! use understory_sortable::DragHost;
//! use understory_sortable::grid::{GridLayout, GridSurface};
//! use understory_reorder::Surface;
//! use kurbo::{Point, Rect, Size};
//!
//! let mut grid = GridSurface::new(GridLayout {
//!     origin: Point::ZERO,
//!     columns: 2,
//!     cell: Size::new(100.0, 50.0),
//!     gap: 10.0,
//! });
//! let a = grid.insert();
//! let b = grid.insert();
//! let c = grid.insert();
//! assert_eq!(grid.bounding_box(c), Rect::new(0.0, 60.0, 100.0, 110.0));
//!
//! // Only draggable children can be picked up.
//! assert_eq!(grid.item_at(Point::new(150.0, 25.0)), None);
//! grid.set_draggable(b, true);
//! assert_eq!(grid.item_at(Point::new(150.0, 25.0)), Some(b));
//! # let _ = a;
//! ```

use alloc::vec::Vec;

use bitflags::bitflags;
use kurbo::{Point, Rect, Size, Vec2};
use understory_reorder::{Surface, Transition};

use crate::host::DragHost;

/// Identifier for an item in a [`GridSurface`].
///
/// A slot index plus a generation counter. Removing an item frees its slot;
/// reusing the slot bumps the generation, so stale ids never alias a new item.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ItemId(u32, u32);

impl ItemId {
    const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags! {
    /// Per-item flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        /// The item may be picked up by a drag.
        const DRAGGABLE = 0b0000_0001;
    }
}

/// Grid geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLayout {
    /// Top-left corner of the first cell.
    pub origin: Point,
    /// Number of columns; zero is treated as one.
    pub columns: usize,
    /// Size of every cell.
    pub cell: Size,
    /// Gutter between rows and between columns.
    pub gap: f64,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            origin: Point::ZERO,
            columns: 3,
            cell: Size::new(100.0, 100.0),
            gap: 16.0,
        }
    }
}

impl GridLayout {
    /// Wrap cells of `cell` size into as many columns as fit in `width`.
    pub fn flow(width: f64, cell: Size, gap: f64) -> Self {
        let pitch = cell.width + gap;
        let columns = if pitch > 0.0 && width >= cell.width {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "Truncation is the intended floor of a small positive ratio."
            )]
            let fit = ((width + gap) / pitch) as usize;
            fit.max(1)
        } else {
            1
        };
        Self {
            origin: Point::ZERO,
            columns,
            cell,
            gap,
        }
    }

    /// Box of the cell at visual position `slot`.
    pub fn cell_rect(&self, slot: usize) -> Rect {
        let columns = self.columns.max(1);
        let col = (slot % columns) as f64;
        let row = (slot / columns) as f64;
        let x = self.origin.x + col * (self.cell.width + self.gap);
        let y = self.origin.y + row * (self.cell.height + self.gap);
        Rect::from_origin_size((x, y), self.cell)
    }
}

#[derive(Clone, Debug)]
struct Item {
    order: usize,
    offset: Vec2,
    flags: ItemFlags,
}

/// Headless grid container.
pub struct GridSurface {
    layout: GridLayout,
    items: Vec<Option<Item>>,
    generations: Vec<u32>,
    free_list: Vec<usize>,
    children: Vec<ItemId>,
    transition: Transition,
    offset_writes: u64,
}

impl core::fmt::Debug for GridSurface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridSurface")
            .field("layout", &self.layout)
            .field("children", &self.children.len())
            .field("free_list", &self.free_list.len())
            .field("transition", &self.transition)
            .field("offset_writes", &self.offset_writes)
            .finish_non_exhaustive()
    }
}

impl Default for GridSurface {
    fn default() -> Self {
        Self::new(GridLayout::default())
    }
}

impl GridSurface {
    /// Create an empty surface.
    pub fn new(layout: GridLayout) -> Self {
        Self {
            layout,
            items: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            children: Vec::new(),
            transition: Transition::Inherit,
            offset_writes: 0,
        }
    }

    /// Current layout.
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Replace the layout (for example after the container was resized).
    pub fn set_layout(&mut self, layout: GridLayout) {
        self.layout = layout;
    }

    /// Append a new child.
    ///
    /// Like an element without an explicit `order`, it starts at order zero.
    pub fn insert(&mut self) -> ItemId {
        self.insert_at(self.children.len())
    }

    /// Insert a new child at child-list position `index` (clamped).
    pub fn insert_at(&mut self, index: usize) -> ItemId {
        let item = Item {
            order: 0,
            offset: Vec2::ZERO,
            flags: ItemFlags::empty(),
        };
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.items[idx] = Some(item);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ItemId stores 32-bit slot indices."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.items.push(Some(item));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ItemId stores 32-bit slot indices."
            )]
            ((self.items.len() - 1) as u32, generation)
        };
        let id = ItemId::new(idx, generation);
        let index = index.min(self.children.len());
        self.children.insert(index, id);
        id
    }

    /// Remove a child. Stale ids are ignored.
    pub fn remove(&mut self, id: ItemId) {
        if !self.is_alive(id) {
            return;
        }
        self.children.retain(|&c| c != id);
        self.items[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Returns true if `id` refers to a live child.
    pub fn is_alive(&self, id: ItemId) -> bool {
        self.generations.get(id.idx()) == Some(&id.1)
            && self.items.get(id.idx()).is_some_and(Option::is_some)
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True if the container has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Order index of a child.
    pub fn order_of(&self, id: ItemId) -> Option<usize> {
        self.item(id).map(|it| it.order)
    }

    /// Offset of a child.
    pub fn offset_of(&self, id: ItemId) -> Option<Vec2> {
        self.item(id).map(|it| it.offset)
    }

    /// Flags of a child.
    pub fn flags_of(&self, id: ItemId) -> Option<ItemFlags> {
        self.item(id).map(|it| it.flags)
    }

    /// True if the child may start a drag.
    pub fn is_draggable(&self, id: ItemId) -> bool {
        self.flags_of(id)
            .is_some_and(|f| f.contains(ItemFlags::DRAGGABLE))
    }

    /// Transition last written by the engine.
    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// Number of offset writes since creation.
    pub fn offset_writes(&self) -> u64 {
        self.offset_writes
    }

    /// Children sorted by visual position (order, then child-list position).
    pub fn visual_order(&self) -> Vec<ItemId> {
        let mut ranked: Vec<(usize, usize, ItemId)> = self
            .children
            .iter()
            .enumerate()
            .filter_map(|(pos, &id)| self.order_of(id).map(|order| (order, pos, id)))
            .collect();
        ranked.sort_unstable_by_key(|&(order, pos, _)| (order, pos));
        ranked.into_iter().map(|(_, _, id)| id).collect()
    }

    /// Topmost draggable child whose box contains `pt`, edges included.
    pub fn item_at(&self, pt: Point) -> Option<ItemId> {
        self.children.iter().rev().copied().find(|&id| {
            let r = self.bounding_box(id);
            self.is_draggable(id) && pt.x >= r.x0 && pt.x <= r.x1 && pt.y >= r.y0 && pt.y <= r.y1
        })
    }

    fn item(&self, id: ItemId) -> Option<&Item> {
        if !self.is_alive(id) {
            return None;
        }
        self.items[id.idx()].as_ref()
    }

    fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        if !self.is_alive(id) {
            return None;
        }
        self.items[id.idx()].as_mut()
    }

    fn slot_of(&self, id: ItemId) -> Option<usize> {
        let order = self.order_of(id)?;
        let pos = self.children.iter().position(|&c| c == id)?;
        let before = self
            .children
            .iter()
            .enumerate()
            .filter(|&(p, &c)| {
                self.order_of(c)
                    .is_some_and(|o| (o, p) < (order, pos))
            })
            .count();
        Some(before)
    }
}

impl Surface for GridSurface {
    type Item = ItemId;

    fn children(&self) -> Vec<ItemId> {
        self.children.clone()
    }

    // Stale ids measure as an empty box at the origin.
    fn bounding_box(&self, id: ItemId) -> Rect {
        match (self.slot_of(id), self.offset_of(id)) {
            (Some(slot), Some(offset)) => self.layout.cell_rect(slot) + offset,
            _ => Rect::ZERO,
        }
    }

    fn set_offset(&mut self, id: ItemId, offset: Vec2) {
        if let Some(item) = self.item_mut(id) {
            item.offset = offset;
            self.offset_writes += 1;
        }
    }

    fn clear_offset(&mut self, id: ItemId) {
        if let Some(item) = self.item_mut(id) {
            item.offset = Vec2::ZERO;
        }
    }

    fn set_order(&mut self, id: ItemId, order: usize) {
        if let Some(item) = self.item_mut(id) {
            item.order = order;
        }
    }

    fn set_transition(&mut self, transition: Transition) {
        self.transition = transition;
    }
}

impl DragHost for GridSurface {
    fn set_draggable(&mut self, id: ItemId, draggable: bool) {
        if let Some(item) = self.item_mut(id) {
            item.flags.set(ItemFlags::DRAGGABLE, draggable);
        }
    }
}
