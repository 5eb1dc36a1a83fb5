// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reorder Intervals: contiguous interval-list algebra for drag reordering.
//!
//! This crate provides the pure layout math behind "make room for the dragged
//! item": a column of items is modeled as an ordered list of [`Interval`]s,
//! each covering one item's vertical footprint (gap included), and a small set
//! of operations rearranges that list without ever touching the items
//! themselves.
//!
//! The core concepts are:
//!
//! - [`Interval`]: `{id, top, height}`, one item's footprint at a snapshot in
//!   time. A well-formed list is contiguous: each interval ends exactly where
//!   the next one starts ([`is_contiguous`]).
//! - [`remove_at`] / [`insert_at`]: close or open a gap, re-establishing
//!   contiguity by shifting everything below.
//! - [`locate_insert_index`]: the center-crossing rule — a candidate only
//!   displaces a neighbor once its top passes that neighbor's vertical
//!   midpoint, which keeps the hypothesis stable while the pointer hovers
//!   near an edge.
//! - [`diff`]: per-id deltas between two layouts of the same interval set,
//!   which is exactly the translation each resting item must apply.
//! - [`place`]: the three-pass composition of the above that corrects a stale
//!   insertion hypothesis against the current candidate position.
//!
//! Every operation returns a fresh list and never mutates its input; hosts
//! snapshot geometry once per gesture and re-run the algebra per frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use reorder_intervals::{Interval, insert_at, locate_insert_index, remove_at};
//!
//! let column = [
//!     Interval::new(0, 160.0, 144.0),
//!     Interval::new(1, 304.0, 288.0),
//!     Interval::new(2, 592.0, 168.0),
//! ];
//!
//! // Lift the first item out: everything below moves up by its height.
//! let without_first = remove_at(0, &column);
//! assert_eq!(without_first[0], Interval::new(1, 160.0, 288.0));
//!
//! // A candidate whose top sits at 480 has crossed the centers of the first
//! // two items but not the third: it would land at index 2.
//! assert_eq!(locate_insert_index(480.0, &column), 2);
//!
//! // Open a 200-high gap at index 1 and materialize an interval in it.
//! let opened = insert_at(1, 200.0, 3, true, &column, 0.0);
//! assert_eq!(opened[1], Interval::new(3, 304.0, 200.0));
//! ```
//!
//! All positions are floating-point pixel coordinates; no rounding happens
//! here (rounding, if any, is a rendering concern).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod interval;
mod ops;
mod placement;

pub use interval::{Interval, Shift, is_contiguous};
pub use ops::{diff, insert_at, locate_insert_index, remove_at};
pub use placement::{Placement, place};
