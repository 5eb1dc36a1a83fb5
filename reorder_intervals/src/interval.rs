// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core interval types.

/// One item's vertical footprint within a column at a snapshot in time.
///
/// `height` includes the visual gap to the next item, so a well-formed column
/// list is contiguous: each interval ends exactly where the next one starts.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interval {
    /// Stable identifier within one list; equals the row position at snapshot
    /// time.
    pub id: u64,
    /// Distance from the coordinate origin to the interval's start.
    pub top: f64,
    /// Extent of the interval, gap included.
    pub height: f64,
}

impl Interval {
    /// Creates a new interval.
    #[must_use]
    pub const fn new(id: u64, top: f64, height: f64) -> Self {
        Self { id, top, height }
    }

    /// The end of this interval (the start of the next one in a contiguous
    /// list).
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// The vertical midpoint, used as the flip threshold for insertion.
    #[must_use]
    pub fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// A per-interval positional delta between two layouts of the same list.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Shift {
    /// Identifier of the interval the delta applies to.
    pub id: u64,
    /// `after.top - before.top`.
    pub delta: f64,
}

const CONTIGUITY_EPS: f64 = 1e-6;

/// Returns `true` if every interval ends exactly where the next one starts.
///
/// [`remove_at`](crate::remove_at) and [`insert_at`](crate::insert_at)
/// re-establish this invariant; it is checked in tests rather than enforced
/// at construction.
#[must_use]
pub fn is_contiguous(items: &[Interval]) -> bool {
    items.windows(2).all(|pair| {
        let seam = pair[0].bottom() - pair[1].top;
        seam <= CONTIGUITY_EPS && seam >= -CONTIGUITY_EPS
    })
}
