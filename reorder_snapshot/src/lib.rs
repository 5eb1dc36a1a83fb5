// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reorder Snapshot: captured-rect geometry queries for drag reordering.
//!
//! During a drag gesture, transforms are computed against where items *were*
//! when the gesture started, not where they currently appear — translations
//! are relative to original positions, so re-measuring mid-gesture would
//! corrupt every offset. This crate owns that rule: it captures one
//! immutable [`Snapshot`] of all column and item rectangles at gesture start
//! and answers every geometric question from it.
//!
//! The core pieces are:
//!
//! - [`RectSource`]: the injection boundary. Hosts implement it over
//!   whatever the platform measures (layout rectangles, or a synthetic
//!   fixture in tests); the snapshot queries it exactly once, at capture.
//! - [`Snapshot`]: an arena of [`ColumnCapture`] and [`ItemCapture`] handles
//!   keyed by column and `(column, row)`. Point queries
//!   ([`Snapshot::find_column_at`], [`Snapshot::find_item_at`]) and
//!   interval-list construction ([`Snapshot::intervals`]) read only captured
//!   data.
//!
//! A source that cannot produce a rectangle (stale or unrendered element)
//! returns `None`; the corresponding handle is simply absent and queries
//! against it miss, which callers treat as "no-op this frame" rather than an
//! error.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use reorder_snapshot::{RectSource, Snapshot};
//!
//! struct OneColumn;
//!
//! impl RectSource for OneColumn {
//!     fn column_count(&self) -> usize {
//!         1
//!     }
//!     fn row_count(&self, _column: usize) -> usize {
//!         2
//!     }
//!     fn column_rect(&self, _column: usize) -> Option<Rect> {
//!         Some(Rect::new(0.0, 0.0, 100.0, 230.0))
//!     }
//!     fn item_rect(&self, _column: usize, row: usize) -> Option<Rect> {
//!         [Rect::new(0.0, 10.0, 100.0, 100.0), Rect::new(0.0, 110.0, 100.0, 220.0)]
//!             .get(row)
//!             .copied()
//!     }
//! }
//!
//! let snapshot = Snapshot::capture(&OneColumn);
//! assert_eq!(snapshot.find_item_at(Point::new(50.0, 50.0)), Some((0, 0)));
//! assert_eq!(snapshot.find_column_at(Point::new(50.0, 225.0)), Some(0));
//!
//! // Interval heights fold in the gap to the next item (or column bottom).
//! let intervals = snapshot.intervals(0);
//! assert_eq!(intervals[0].height, 100.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod snapshot;
mod source;

pub use snapshot::{ColumnCapture, ItemCapture, Snapshot, contains_pos};
pub use source::RectSource;
