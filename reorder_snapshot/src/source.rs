// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The geometry injection boundary.

use kurbo::Rect;

/// Live geometry provider, queried once per gesture at capture time.
///
/// Implementations wrap whatever the platform can measure — real layout
/// rectangles, or a synthetic fixture in tests. All rectangles must share
/// one coordinate space (typically logical pixels in viewport coordinates).
///
/// Returning `None` from a rect query means the element is stale or not
/// rendered; the capture records no handle for it and later queries miss
/// instead of failing.
pub trait RectSource {
    /// Number of columns.
    fn column_count(&self) -> usize;

    /// Number of items in `column`.
    fn row_count(&self, column: usize) -> usize;

    /// Bounding rectangle of `column`.
    fn column_rect(&self, column: usize) -> Option<Rect>;

    /// Bounding rectangle of the item at `column`/`row`.
    fn item_rect(&self, column: usize, row: usize) -> Option<Rect>;
}
