// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State carried across the lifetime of one drag gesture.

use kurbo::Point;
use reorder_snapshot::{ItemCapture, Snapshot};

use crate::{CellRef, Frame};

bitflags::bitflags! {
    /// Latched facts about the gesture in progress.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct SessionFlags: u8 {
        /// No move has been processed since the gesture started. The first
        /// processed move renders displaced items without animation so they
        /// snap into their opened positions.
        const JUST_STARTED = 1 << 0;
        /// The pointer has travelled beyond the click hysteresis at least
        /// once. Once set it never clears; releasing a moved gesture is a
        /// drop, never a click.
        const MOVED = 1 << 1;
        /// The most recent move left the pointer outside every column.
        const OUTSIDE = 1 << 2;
    }
}

/// Everything a live gesture carries between pointer events.
#[derive(Clone, Debug)]
pub(crate) struct DragSession {
    /// Capture-time position of the dragged item.
    pub(crate) selected: CellRef,
    /// Captured rectangle and trailing gap of the dragged item.
    pub(crate) selected_rect: ItemCapture,
    /// Pointer position at gesture start, in capture coordinates.
    pub(crate) mouse_down: Point,
    /// Current insertion hypothesis.
    pub(crate) inserting: CellRef,
    /// Latched gesture facts.
    pub(crate) flags: SessionFlags,
    /// Geometry captured once at gesture start.
    pub(crate) snapshot: Snapshot,
    /// The frame the renderer is currently showing.
    pub(crate) frame: Frame,
    /// The frame the dragged item settles into if released now.
    pub(crate) releasing: Frame,
}
