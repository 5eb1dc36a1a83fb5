// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame visual output consumed by a renderer.

use alloc::vec::Vec;

use crate::CellRef;

/// How a column should present itself this frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColumnState {
    /// No drag activity touches this column.
    Still,
    /// The current insertion hypothesis points into this column.
    Inserting,
    /// The dragged item's origin column (when the hypothesis points
    /// elsewhere).
    Selected,
}

/// How an item should present itself this frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ItemState {
    /// At rest, possibly displaced to make room.
    Still,
    /// The item travelling with the pointer.
    Dragging,
}

/// Per-column output.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ColumnFrame {
    /// Presentation state.
    pub state: ColumnState,
    /// Whether a change from the previous frame should animate.
    pub transition: bool,
}

/// Per-item output: a translation relative to the item's captured position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ItemFrame {
    /// Which item this applies to, by capture-time position.
    pub cell: CellRef,
    /// Presentation state.
    pub state: ItemState,
    /// Horizontal offset in pixels.
    pub dx: f64,
    /// Vertical offset in pixels.
    pub dy: f64,
    /// Captured width, for hosts that pin the dragged item's width while it
    /// floats free of its column.
    pub width: f64,
    /// Whether a change from the previous frame should animate.
    pub transition: bool,
}

/// Everything a renderer needs to paint one frame of an active session.
///
/// Items without an entry in `items` are at rest with no offset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    /// One entry per column, indexed by column.
    pub columns: Vec<ColumnFrame>,
    /// Entries for every item the drag currently displaces, plus the
    /// dragged item itself.
    pub items: Vec<ItemFrame>,
}

impl Frame {
    /// The dragged item's entry, if any.
    #[must_use]
    pub fn dragged(&self) -> Option<&ItemFrame> {
        self.items.iter().find(|item| item.state == ItemState::Dragging)
    }

    /// The entry for `cell`, if this frame displaces it.
    #[must_use]
    pub fn item(&self, cell: CellRef) -> Option<&ItemFrame> {
        self.items.iter().find(|item| item.cell == cell)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::{Frame, ItemFrame, ItemState};
    use crate::CellRef;

    #[test]
    fn lookup_helpers_find_entries() {
        let frame = Frame {
            columns: vec![],
            items: vec![
                ItemFrame {
                    cell: CellRef::new(0, 1),
                    state: ItemState::Still,
                    dx: 0.0,
                    dy: -90.0,
                    width: 112.0,
                    transition: true,
                },
                ItemFrame {
                    cell: CellRef::new(0, 0),
                    state: ItemState::Dragging,
                    dx: 3.0,
                    dy: 40.0,
                    width: 112.0,
                    transition: false,
                },
            ],
        };

        assert_eq!(frame.dragged().unwrap().cell, CellRef::new(0, 0));
        assert_eq!(frame.item(CellRef::new(0, 1)).unwrap().dy, -90.0);
        assert!(frame.item(CellRef::new(2, 0)).is_none());
    }
}
