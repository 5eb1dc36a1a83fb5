// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The captured-rect arena and its queries.

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Point, Rect};
use smallvec::SmallVec;

use reorder_intervals::Interval;

use crate::RectSource;

/// Captured geometry of one column.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColumnCapture {
    /// Bounding rectangle at capture time.
    pub rect: Rect,
    /// Top-left of the column's first child. Offsets are computed relative
    /// to this, since transforms apply against original positions. Falls
    /// back to the column rect's own origin when the column is empty.
    pub origin: Point,
}

/// Captured geometry of one item.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ItemCapture {
    /// Bounding rectangle at capture time.
    pub rect: Rect,
    /// Vertical space to the next item's top, or to the column's bottom for
    /// the last item.
    pub gap: f64,
}

/// An immutable arena of column and item rectangles.
///
/// Built wholesale at gesture start and discarded after commit; every query
/// during the gesture reads this snapshot, never live geometry. Entries the
/// source failed to measure are absent from the maps, and all queries on
/// them miss.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    columns: HashMap<usize, ColumnCapture>,
    items: HashMap<(usize, usize), ItemCapture>,
    row_counts: SmallVec<[usize; 8]>,
}

impl Snapshot {
    /// Captures every column and item rectangle the source can produce.
    #[must_use]
    pub fn capture(source: &impl RectSource) -> Self {
        let mut columns = HashMap::new();
        let mut items = HashMap::new();
        let mut row_counts = SmallVec::new();

        for column in 0..source.column_count() {
            let rows = source.row_count(column);
            row_counts.push(rows);
            let Some(rect) = source.column_rect(column) else {
                continue;
            };
            let origin = source
                .item_rect(column, 0)
                .map_or_else(|| rect.origin(), |first| first.origin());
            columns.insert(column, ColumnCapture { rect, origin });

            for row in 0..rows {
                let Some(item) = source.item_rect(column, row) else {
                    continue;
                };
                let next_top = if row + 1 < rows {
                    source.item_rect(column, row + 1).map(|next| next.y0)
                } else {
                    None
                };
                let gap = next_top.unwrap_or(rect.y1) - item.y1;
                items.insert((column, row), ItemCapture { rect: item, gap });
            }
        }

        Self {
            columns,
            items,
            row_counts,
        }
    }

    /// Number of columns seen at capture, measured or not.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.row_counts.len()
    }

    /// Number of items in `column` at capture time.
    #[must_use]
    pub fn row_count(&self, column: usize) -> usize {
        self.row_counts.get(column).copied().unwrap_or(0)
    }

    /// Captured geometry of `column`, if its rect was measurable.
    #[must_use]
    pub fn column(&self, column: usize) -> Option<&ColumnCapture> {
        self.columns.get(&column)
    }

    /// Captured geometry of the item at `column`/`row`.
    #[must_use]
    pub fn item(&self, column: usize, row: usize) -> Option<&ItemCapture> {
        self.items.get(&(column, row))
    }

    /// The first column whose rectangle contains `point`.
    ///
    /// Containment is inclusive on all edges; ties between overlapping
    /// columns go to the lower index.
    #[must_use]
    pub fn find_column_at(&self, point: Point) -> Option<usize> {
        (0..self.column_count()).find(|column| {
            self.columns
                .get(column)
                .is_some_and(|capture| contains_pos(&capture.rect, point))
        })
    }

    /// The first item whose rectangle contains `point`, in column-then-row
    /// order.
    #[must_use]
    pub fn find_item_at(&self, point: Point) -> Option<(usize, usize)> {
        (0..self.column_count())
            .flat_map(|column| (0..self.row_count(column)).map(move |row| (column, row)))
            .find(|key| {
                self.items
                    .get(key)
                    .is_some_and(|capture| contains_pos(&capture.rect, point))
            })
    }

    /// The column's layout as a contiguous interval list.
    ///
    /// Interval ids are row positions at capture time and heights fold in
    /// each item's gap. Rows the source failed to measure are skipped.
    #[must_use]
    pub fn intervals(&self, column: usize) -> Vec<Interval> {
        (0..self.row_count(column))
            .filter_map(|row| {
                self.items.get(&(column, row)).map(|capture| {
                    Interval::new(
                        row as u64,
                        capture.rect.y0,
                        capture.rect.height() + capture.gap,
                    )
                })
            })
            .collect()
    }
}

/// Inclusive point-in-rect test; all four edges count as inside.
#[must_use]
pub fn contains_pos(rect: &Rect, pos: Point) -> bool {
    pos.x >= rect.x0 && pos.x <= rect.x1 && pos.y >= rect.y0 && pos.y <= rect.y1
}
