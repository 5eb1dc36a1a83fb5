// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The authoritative item collection.

use alloc::vec::Vec;

/// Position of one item: a column index plus a row index within the column.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellRef {
    /// Column index.
    pub column: usize,
    /// Row index within the column.
    pub row: usize,
}

impl CellRef {
    /// Creates a cell reference.
    #[must_use]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

/// An ordered sequence of columns, each an ordered sequence of items.
///
/// The grid is the single source of truth for item positions: every item
/// belongs to exactly one column at exactly one index, and indices are
/// contiguous from zero. It is mutated only when a completed gesture
/// commits, never while a drag is in flight.
///
/// The payload type is opaque to the reorder machinery; a host might store
/// ids, rich records, or view handles.
#[derive(Clone, Debug, Default)]
pub struct Grid<T> {
    columns: Vec<Vec<T>>,
}

impl<T> Grid<T> {
    /// Creates a grid from its columns.
    #[must_use]
    pub fn new(columns: Vec<Vec<T>>) -> Self {
        Self { columns }
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of items in `column`, or zero for an unknown column.
    #[must_use]
    pub fn row_count(&self, column: usize) -> usize {
        self.columns.get(column).map_or(0, Vec::len)
    }

    /// The item at `cell`, if present.
    #[must_use]
    pub fn get(&self, cell: CellRef) -> Option<&T> {
        self.columns.get(cell.column)?.get(cell.row)
    }

    /// The items of `column`.
    #[must_use]
    pub fn column(&self, column: usize) -> Option<&[T]> {
        self.columns.get(column).map(Vec::as_slice)
    }

    /// Moves the item at `from` to `to`, keeping both columns contiguous.
    ///
    /// `to.row` is interpreted against the grid *without* the moved item, so
    /// a same-column move uses the index in the shortened column.
    /// Out-of-range target rows clamp to an append. Returns `false` (and
    /// changes nothing) when `from` does not exist or `to` names an unknown
    /// column.
    pub fn move_item(&mut self, from: CellRef, to: CellRef) -> bool {
        if self.get(from).is_none() || to.column >= self.columns.len() {
            return false;
        }
        let item = self.columns[from.column].remove(from.row);
        let target = &mut self.columns[to.column];
        let row = to.row.min(target.len());
        target.insert(row, item);
        true
    }
}
