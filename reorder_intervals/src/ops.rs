// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure operations over ordered interval lists.
//!
//! Every function allocates a fresh list and never mutates its input.
//! Invalid indices and empty inputs are recovered locally with an
//! empty/unchanged result; they are not errors.

use alloc::vec::Vec;

use crate::{Interval, Shift};

/// Removes `items[index]` and closes the gap it occupied.
///
/// Every interval after the removed one moves up by the removed interval's
/// height, keeping the list contiguous. Returns an empty list when `items`
/// is empty or `index` is out of bounds; callers treat that as "nothing to
/// lay out this frame".
#[must_use]
pub fn remove_at(index: usize, items: &[Interval]) -> Vec<Interval> {
    let Some(removed) = items.get(index) else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(items.len().saturating_sub(1));
    for (row, item) in items.iter().enumerate() {
        if row < index {
            out.push(*item);
        } else if row > index {
            out.push(Interval {
                top: item.top - removed.height,
                ..*item
            });
        }
    }
    out
}

/// Opens (and optionally fills) a gap of `height` at `index`.
///
/// Intervals at or after `index` move down by `height`. The gap's top is the
/// pre-shift top of the displaced interval; appending lands at the end of
/// the last interval; inserting into an empty list lands at `first_top`, the
/// container's empty baseline. `index` is clamped to `[0, len]`.
///
/// When `speculative` is true a new `{id, top, height}` interval is spliced
/// in at `index`. When false only the displacement is applied — the shape
/// the list takes around a gap, which is what delta computation wants.
#[must_use]
pub fn insert_at(
    index: usize,
    height: f64,
    id: u64,
    speculative: bool,
    items: &[Interval],
    first_top: f64,
) -> Vec<Interval> {
    let index = index.min(items.len());
    let mut out = Vec::with_capacity(items.len() + usize::from(speculative));
    let mut inserted_top = first_top;
    for (row, item) in items.iter().enumerate() {
        if row >= index {
            if row == index {
                inserted_top = item.top;
            }
            out.push(Interval {
                top: item.top + height,
                ..*item
            });
        } else {
            out.push(*item);
        }
    }
    if index == items.len() {
        if let Some(last) = items.last() {
            inserted_top = last.bottom();
        }
    }
    if speculative {
        out.insert(
            index,
            Interval {
                id,
                top: inserted_top,
                height,
            },
        );
    }
    out
}

/// Finds the insertion index for a candidate whose top sits at
/// `candidate_top`.
///
/// Returns the first index whose vertical center the candidate's top has not
/// yet passed. The comparison is strict and against each interval's
/// *center*, so the hypothesis only flips once the candidate crosses halfway
/// through a neighbor, and ties have a single deterministic winner (first
/// match in list order). Returns `items.len()` when the candidate is below
/// all centers.
#[must_use]
pub fn locate_insert_index(candidate_top: f64, items: &[Interval]) -> usize {
    items
        .iter()
        .position(|item| candidate_top < item.center())
        .unwrap_or(items.len())
}

/// Per-id positional deltas between two layouts of the same interval set.
///
/// Requires equal lengths and matching id sets; mismatched operands signal a
/// logic error upstream and yield `None`, which callers treat as "skip this
/// frame's visual update" rather than a recoverable runtime condition.
/// Deltas are reported in `before` order.
#[must_use]
pub fn diff(before: &[Interval], after: &[Interval]) -> Option<Vec<Shift>> {
    if before.len() != after.len() {
        return None;
    }
    let mut out = Vec::with_capacity(before.len());
    for b in before {
        let a = after.iter().find(|a| a.id == b.id)?;
        out.push(Shift {
            id: b.id,
            delta: a.top - b.top,
        });
    }
    Some(out)
}
