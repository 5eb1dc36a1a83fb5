// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-and-drop reordering of items across a multi-column list.
//!
//! A [`DragController`] owns a [`Grid`] of items and turns a stream of
//! pointer events into per-frame visual output. The host supplies geometry
//! through [`RectSource`](reorder_snapshot::RectSource) once per gesture;
//! everything after that is computed against the captured snapshot, so the
//! host's layout can lag behind the animation without corrupting the
//! result. The grid itself only changes when a gesture commits.
//!
//! Dragging the first item of one column into another:
//!
//! ```
//! use kurbo::{Point, Rect};
//! use reorder_session::{DragController, Grid, ReleaseOutcome};
//! use reorder_snapshot::RectSource;
//!
//! struct Layout {
//!     columns: Vec<(Rect, Vec<Rect>)>,
//! }
//!
//! impl RectSource for Layout {
//!     fn column_count(&self) -> usize {
//!         self.columns.len()
//!     }
//!     fn row_count(&self, column: usize) -> usize {
//!         self.columns.get(column).map_or(0, |(_, items)| items.len())
//!     }
//!     fn column_rect(&self, column: usize) -> Option<Rect> {
//!         self.columns.get(column).map(|(rect, _)| *rect)
//!     }
//!     fn item_rect(&self, column: usize, row: usize) -> Option<Rect> {
//!         self.columns.get(column)?.1.get(row).copied()
//!     }
//! }
//!
//! let layout = Layout {
//!     columns: vec![
//!         (
//!             Rect::new(0.0, 0.0, 120.0, 370.0),
//!             vec![
//!                 Rect::new(4.0, 100.0, 116.0, 180.0),
//!                 Rect::new(4.0, 190.0, 116.0, 270.0),
//!                 Rect::new(4.0, 280.0, 116.0, 360.0),
//!             ],
//!         ),
//!         (
//!             Rect::new(200.0, 0.0, 320.0, 760.0),
//!             vec![
//!                 Rect::new(204.0, 160.0, 316.0, 300.0),
//!                 Rect::new(204.0, 304.0, 316.0, 588.0),
//!                 Rect::new(204.0, 592.0, 316.0, 756.0),
//!             ],
//!         ),
//!     ],
//! };
//!
//! let mut controller =
//!     DragController::new(Grid::new(vec![vec!["a", "b", "c"], vec!["d", "e", "f"]]));
//!
//! // Press on "a", drag it deep into the second column, release.
//! assert!(controller.on_gesture_start(Point::new(60.0, 140.0), &layout));
//! assert!(controller.on_gesture_move(Point::new(260.0, 640.0)));
//! assert_eq!(
//!     controller.on_gesture_end(Point::new(260.0, 640.0)),
//!     ReleaseOutcome::Settling
//! );
//!
//! // The host plays the settle animation, then reports it finished.
//! assert!(controller.on_settle_complete());
//! assert_eq!(controller.grid().column(0), Some(&["b", "c"][..]));
//! assert_eq!(controller.grid().column(1), Some(&["d", "e", "a", "f"][..]));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod frame;
mod grid;
mod session;

pub use controller::{CLICK_HYSTERESIS, DragController, ReleaseOutcome, SessionPhase};
pub use frame::{ColumnFrame, ColumnState, Frame, ItemFrame, ItemState};
pub use grid::{CellRef, Grid};
pub use session::SessionFlags;
