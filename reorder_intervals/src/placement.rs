// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Three-pass placement of a dragged interval into a column layout.

use alloc::vec::Vec;

use crate::{Interval, insert_at, locate_insert_index};

/// Result of placing a dragged interval into a column.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    /// Index the dragged interval would occupy in the working list.
    pub index: usize,
    /// Top the dragged interval settles at if dropped now.
    pub top: f64,
    /// The working list with the gap opened at `index` and no interval
    /// materialized; diff this against the captured layout for per-item
    /// deltas.
    pub placed: Vec<Interval>,
}

/// Places a dragged interval into `working`, correcting a stale hypothesis.
///
/// `working` is the column's layout with the dragged interval's own space
/// already removed. The previous hypothesis `last_index` opens a speculative
/// gap first; `drag_top` is then located against that hypothetical layout,
/// so centers are evaluated where the neighbors *currently appear* — gap and
/// all — and the corrected index drives the final insertion. The located
/// index counts the hypothetical interval itself, so one is subtracted when
/// the candidate lands past it.
///
/// The two-phase settle matters: the first insertion is speculative (based
/// on the last known index) and the pointer may have moved far enough within
/// the same frame to invalidate it. `last_index` is clamped to the working
/// list, so a hypothesis carried over from another column degrades to an
/// append and gets corrected in the same call.
#[must_use]
pub fn place(
    working: &[Interval],
    last_index: usize,
    drag_top: f64,
    drag_height: f64,
    drag_id: u64,
    first_top: f64,
) -> Placement {
    let last_index = last_index.min(working.len());
    let hypothesis = insert_at(last_index, drag_height, drag_id, true, working, first_top);

    let mut index = locate_insert_index(drag_top, &hypothesis);
    if index > last_index {
        index -= 1;
    }
    let index = index.min(working.len());

    let opened = insert_at(index, drag_height, drag_id, true, working, first_top);
    let top = opened.get(index).map_or(first_top, |gap| gap.top);
    let placed = insert_at(index, drag_height, drag_id, false, working, first_top);

    Placement { index, top, placed }
}
