// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture state machine.

use alloc::vec::Vec;

use kurbo::{Point, Vec2};

use reorder_intervals::{Interval, Shift, diff, place, remove_at};
use reorder_snapshot::{RectSource, Snapshot};

use crate::session::DragSession;
use crate::{CellRef, ColumnFrame, ColumnState, Frame, Grid, ItemFrame, ItemState, SessionFlags};

/// Manhattan distance the pointer must travel before a press becomes a drag.
///
/// Releases that never exceed this are reported as clicks and produce no
/// visual output.
pub const CLICK_HYSTERESIS: f64 = 10.0;

/// Interval id for the floating item while it is placed into a column's
/// list. Row ids are column positions, so this never collides.
const DRAG_ID: u64 = u64::MAX;

/// Which stage of the gesture lifecycle the controller is in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// No gesture in flight.
    Idle,
    /// The pointer is down and moves are being tracked.
    Dragging,
    /// The pointer is up and the dragged item is animating into place; the
    /// grid commits when [`DragController::on_settle_complete`] is called.
    Releasing,
}

/// What a pointer release amounted to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// No drag was in flight; nothing happened.
    Ignored,
    /// The pointer never left the click hysteresis; treat as a click on the
    /// pressed item.
    Click,
    /// The dragged item was already at its settled position, so the grid
    /// committed synchronously with no settle animation.
    Committed,
    /// A settle animation is expected; the grid commits on
    /// [`DragController::on_settle_complete`].
    Settling,
}

#[derive(Debug)]
enum Phase {
    Idle,
    Dragging(DragSession),
    Releasing(DragSession),
}

/// Drives drag gestures over a [`Grid`].
///
/// The host feeds pointer events in and reads a [`Frame`] back out after
/// each one; the controller owns the grid and mutates it only when a
/// gesture commits. See the crate docs for a worked example.
#[derive(Debug)]
pub struct DragController<T> {
    grid: Grid<T>,
    phase: Phase,
    hysteresis: f64,
}

impl<T> DragController<T> {
    /// Creates an idle controller owning `grid`, with the default
    /// [`CLICK_HYSTERESIS`].
    #[must_use]
    pub fn new(grid: Grid<T>) -> Self {
        Self::with_hysteresis(grid, CLICK_HYSTERESIS)
    }

    /// Creates an idle controller with a custom click threshold.
    ///
    /// `hysteresis` is the Manhattan distance the pointer must exceed for a
    /// press to become a drag; zero makes every move a drag.
    #[must_use]
    pub fn with_hysteresis(grid: Grid<T>, hysteresis: f64) -> Self {
        Self {
            grid,
            phase: Phase::Idle,
            hysteresis,
        }
    }

    /// The item collection.
    #[must_use]
    pub fn grid(&self) -> &Grid<T> {
        &self.grid
    }

    /// Consumes the controller, returning the item collection.
    #[must_use]
    pub fn into_grid(self) -> Grid<T> {
        self.grid
    }

    /// Current lifecycle stage.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match self.phase {
            Phase::Idle => SessionPhase::Idle,
            Phase::Dragging(_) => SessionPhase::Dragging,
            Phase::Releasing(_) => SessionPhase::Releasing,
        }
    }

    fn session(&self) -> Option<&DragSession> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Dragging(session) | Phase::Releasing(session) => Some(session),
        }
    }

    /// The frame the renderer should show, or `None` when idle.
    #[must_use]
    pub fn frame(&self) -> Option<&Frame> {
        self.session().map(|session| &session.frame)
    }

    /// Capture-time position of the dragged item, while a gesture is live.
    #[must_use]
    pub fn selected_cell(&self) -> Option<CellRef> {
        self.session().map(|session| session.selected)
    }

    /// Where the dragged item lands if released now, while a gesture is
    /// live. Rows are positions in the column *without* the dragged item.
    #[must_use]
    pub fn inserting_cell(&self) -> Option<CellRef> {
        self.session().map(|session| session.inserting)
    }

    /// Whether the most recent move left the pointer outside every column.
    #[must_use]
    pub fn is_outside(&self) -> bool {
        self.session()
            .is_some_and(|session| session.flags.contains(SessionFlags::OUTSIDE))
    }

    /// Begins a gesture at `point`.
    ///
    /// Measures `source` once into a snapshot and hit-tests the point
    /// against it. Returns `false` without starting a session when the
    /// point lands on no item, or when a gesture is already in flight (a
    /// second pointer going down mid-drag is ignored).
    pub fn on_gesture_start(&mut self, point: Point, source: &impl RectSource) -> bool {
        if !matches!(self.phase, Phase::Idle) {
            return false;
        }
        let snapshot = Snapshot::capture(source);
        let Some((column, row)) = snapshot.find_item_at(point) else {
            return false;
        };
        let Some(selected_rect) = snapshot.item(column, row).copied() else {
            return false;
        };
        let selected = CellRef::new(column, row);
        self.phase = Phase::Dragging(DragSession {
            selected,
            selected_rect,
            mouse_down: point,
            inserting: selected,
            flags: SessionFlags::JUST_STARTED,
            snapshot,
            frame: Frame::default(),
            releasing: Frame::default(),
        });
        true
    }

    /// Tracks the pointer to `point`.
    ///
    /// Returns `true` when the frame changed. Moves are ignored while no
    /// gesture is dragging, while the pointer is still inside the click
    /// hysteresis, and when the captured geometry turns out to be
    /// internally inconsistent.
    pub fn on_gesture_move(&mut self, point: Point) -> bool {
        let Phase::Dragging(session) = &mut self.phase else {
            return false;
        };
        let delta = point - session.mouse_down;
        if !session.flags.contains(SessionFlags::MOVED) && manhattan(delta) <= self.hysteresis {
            return false;
        }
        session.flags.insert(SessionFlags::MOVED);
        let hot = session.selected_rect.rect.center() + delta;
        match session.snapshot.find_column_at(hot) {
            Some(target) => move_over_column(session, target, delta),
            None => {
                move_outside(session, delta);
                true
            }
        }
    }

    /// Ends the gesture at `point`.
    ///
    /// A release inside the hysteresis is a [`ReleaseOutcome::Click`]. A
    /// real drop swaps the renderer over to the settle frame and waits for
    /// [`Self::on_settle_complete`], except when the dragged item already
    /// sits exactly at its settled offset, in which case no animation will
    /// fire and the grid commits here.
    pub fn on_gesture_end(&mut self, point: Point) -> ReleaseOutcome {
        match core::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle => ReleaseOutcome::Ignored,
            Phase::Releasing(session) => {
                self.phase = Phase::Releasing(session);
                ReleaseOutcome::Ignored
            }
            Phase::Dragging(mut session) => {
                if !session.flags.contains(SessionFlags::MOVED) {
                    return ReleaseOutcome::Click;
                }
                let delta = point - session.mouse_down;
                let hot = session.selected_rect.rect.center() + delta;
                if session.snapshot.find_column_at(hot).is_none() {
                    // Released in dead space: everything settles back to
                    // its captured position.
                    move_outside(&mut session, delta);
                }
                let shown = session.frame.dragged().map_or((0.0, 0.0), |d| (d.dx, d.dy));
                let settled = session
                    .releasing
                    .dragged()
                    .map_or((0.0, 0.0), |d| (d.dx, d.dy));
                if shown == settled {
                    self.grid.move_item(session.selected, session.inserting);
                    return ReleaseOutcome::Committed;
                }
                session.frame = session.releasing.clone();
                self.phase = Phase::Releasing(session);
                ReleaseOutcome::Settling
            }
        }
    }

    /// Reports that the settle animation finished.
    ///
    /// Commits the move into the grid and returns to idle. Returns `false`
    /// when no settle was pending.
    pub fn on_settle_complete(&mut self) -> bool {
        match core::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Releasing(session) => {
                self.grid.move_item(session.selected, session.inserting);
                true
            }
            other => {
                self.phase = other;
                false
            }
        }
    }

    /// Abandons any gesture in flight without touching the grid.
    ///
    /// Returns `true` when there was a session to discard.
    pub fn cancel(&mut self) -> bool {
        if matches!(self.phase, Phase::Idle) {
            return false;
        }
        self.phase = Phase::Idle;
        true
    }
}

fn manhattan(delta: Vec2) -> f64 {
    let dx = if delta.x < 0.0 { -delta.x } else { delta.x };
    let dy = if delta.y < 0.0 { -delta.y } else { delta.y };
    dx + dy
}

fn column_states(
    count: usize,
    inserting: usize,
    selected: usize,
    transition: bool,
) -> Vec<ColumnFrame> {
    (0..count)
        .map(|column| ColumnFrame {
            state: if column == inserting {
                ColumnState::Inserting
            } else if column == selected {
                ColumnState::Selected
            } else {
                ColumnState::Still
            },
            transition,
        })
        .collect()
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Interval ids are row indices produced from usize."
)]
fn push_shifts(
    items: &mut Vec<ItemFrame>,
    column: usize,
    shifts: &[Shift],
    transition: bool,
    snapshot: &Snapshot,
) {
    for shift in shifts {
        let row = shift.id as usize;
        let width = snapshot
            .item(column, row)
            .map_or(0.0, |capture| capture.rect.width());
        items.push(ItemFrame {
            cell: CellRef::new(column, row),
            state: ItemState::Still,
            dx: 0.0,
            dy: shift.delta,
            width,
            transition,
        });
    }
}

/// Recomputes the insertion hypothesis and both frames for a pointer over
/// `target`. Returns `false` and leaves the session untouched when the
/// captured geometry cannot be reconciled.
fn move_over_column(session: &mut DragSession, target: usize, delta: Vec2) -> bool {
    let Some(column) = session.snapshot.column(target).copied() else {
        return false;
    };
    let captured = session.snapshot.intervals(target);
    let same_column = target == session.selected.column;
    let drag_row = session.selected.row as u64;

    let working = if same_column {
        let Some(position) = captured.iter().position(|item| item.id == drag_row) else {
            return false;
        };
        remove_at(position, &captured)
    } else {
        captured.clone()
    };
    // At-rest tops the shifts are measured against; the dragged item never
    // appears in its own shift list.
    let before: Vec<Interval> = captured
        .iter()
        .copied()
        .filter(|item| !(same_column && item.id == drag_row))
        .collect();

    // Entering a new column starts from an append hypothesis; staying in
    // one reuses the last settled index so small wiggles stay stable.
    let last_index = if session.inserting.column == target {
        session.inserting.row
    } else {
        working.len()
    };
    let rect = session.selected_rect.rect;
    let placement = place(
        &working,
        last_index,
        rect.y0 + delta.y,
        rect.height() + session.selected_rect.gap,
        DRAG_ID,
        column.origin.y,
    );

    let Some(target_shifts) = diff(&before, &placement.placed) else {
        return false;
    };
    let source_shifts = if same_column {
        None
    } else {
        let src_captured = session.snapshot.intervals(session.selected.column);
        let Some(position) = src_captured.iter().position(|item| item.id == drag_row) else {
            return false;
        };
        let src_before: Vec<Interval> = src_captured
            .iter()
            .copied()
            .filter(|item| item.id != drag_row)
            .collect();
        let src_after = remove_at(position, &src_captured);
        let Some(shifts) = diff(&src_before, &src_after) else {
            return false;
        };
        Some(shifts)
    };

    session.flags.remove(SessionFlags::OUTSIDE);
    session.inserting = CellRef::new(target, placement.index);
    // The very first computed frame snaps into place; later frames animate.
    let transition = !session.flags.contains(SessionFlags::JUST_STARTED);
    session.flags.remove(SessionFlags::JUST_STARTED);

    let mut items = Vec::new();
    push_shifts(&mut items, target, &target_shifts, transition, &session.snapshot);
    if let Some(shifts) = &source_shifts {
        push_shifts(
            &mut items,
            session.selected.column,
            shifts,
            transition,
            &session.snapshot,
        );
    }
    let dragged = ItemFrame {
        cell: session.selected,
        state: ItemState::Dragging,
        dx: delta.x,
        dy: delta.y,
        width: rect.width(),
        transition: false,
    };
    let releasing_items: Vec<ItemFrame> = items
        .iter()
        .map(|item| ItemFrame {
            transition: true,
            ..*item
        })
        .chain(core::iter::once(ItemFrame {
            dx: column.origin.x - rect.x0,
            dy: placement.top - rect.y0,
            transition: true,
            ..dragged
        }))
        .collect();
    items.push(dragged);

    let count = session.snapshot.column_count();
    session.frame = Frame {
        columns: column_states(count, target, session.selected.column, transition),
        items,
    };
    session.releasing = Frame {
        columns: column_states(count, target, session.selected.column, true),
        items: releasing_items,
    };
    true
}

/// The pointer left every column: the hypothesis reverts to the origin and
/// every displaced item animates back to its captured position while the
/// dragged item keeps following the pointer.
fn move_outside(session: &mut DragSession, delta: Vec2) {
    session.flags.insert(SessionFlags::OUTSIDE);
    session.flags.remove(SessionFlags::JUST_STARTED);
    session.inserting = session.selected;
    let width = session.selected_rect.rect.width();

    let returned: Vec<ItemFrame> = session
        .frame
        .items
        .iter()
        .filter(|item| item.state == ItemState::Still)
        .map(|item| ItemFrame {
            dx: 0.0,
            dy: 0.0,
            transition: true,
            ..*item
        })
        .collect();
    let mut items = returned.clone();
    items.push(ItemFrame {
        cell: session.selected,
        state: ItemState::Dragging,
        dx: delta.x,
        dy: delta.y,
        width,
        transition: false,
    });
    let mut releasing_items = returned;
    releasing_items.push(ItemFrame {
        cell: session.selected,
        state: ItemState::Dragging,
        dx: 0.0,
        dy: 0.0,
        width,
        transition: true,
    });

    let count = session.snapshot.column_count();
    let columns = column_states(count, session.inserting.column, session.selected.column, true);
    session.frame = Frame {
        columns: columns.clone(),
        items,
    };
    session.releasing = Frame {
        columns,
        items: releasing_items,
    };
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::{Point, Rect};

    use reorder_snapshot::RectSource;

    use super::{CLICK_HYSTERESIS, DragController, ReleaseOutcome, SessionPhase};
    use crate::{CellRef, ColumnState, Grid, ItemState};

    /// Two columns; the first holds three 80px items with 10px gaps, the
    /// second three taller items with 4px gaps.
    struct Layout {
        columns: Vec<(Rect, Vec<Rect>)>,
    }

    impl RectSource for Layout {
        fn column_count(&self) -> usize {
            self.columns.len()
        }

        fn row_count(&self, column: usize) -> usize {
            self.columns.get(column).map_or(0, |(_, items)| items.len())
        }

        fn column_rect(&self, column: usize) -> Option<Rect> {
            self.columns.get(column).map(|(rect, _)| *rect)
        }

        fn item_rect(&self, column: usize, row: usize) -> Option<Rect> {
            self.columns.get(column)?.1.get(row).copied()
        }
    }

    fn layout() -> Layout {
        Layout {
            columns: vec![
                (
                    Rect::new(0.0, 0.0, 120.0, 370.0),
                    vec![
                        Rect::new(4.0, 100.0, 116.0, 180.0),
                        Rect::new(4.0, 190.0, 116.0, 270.0),
                        Rect::new(4.0, 280.0, 116.0, 360.0),
                    ],
                ),
                (
                    Rect::new(200.0, 0.0, 320.0, 760.0),
                    vec![
                        Rect::new(204.0, 160.0, 316.0, 300.0),
                        Rect::new(204.0, 304.0, 316.0, 588.0),
                        Rect::new(204.0, 592.0, 316.0, 756.0),
                    ],
                ),
            ],
        }
    }

    fn controller() -> DragController<&'static str> {
        DragController::new(Grid::new(vec![vec!["a", "b", "c"], vec!["d", "e", "f"]]))
    }

    #[test]
    fn cross_column_drag_settles_and_commits() {
        let mut controller = controller();
        // (60, 140) is the exact center of item "a".
        assert!(controller.on_gesture_start(Point::new(60.0, 140.0), &layout()));
        assert_eq!(controller.selected_cell(), Some(CellRef::new(0, 0)));
        assert_eq!(controller.phase(), SessionPhase::Dragging);

        assert!(controller.on_gesture_move(Point::new(260.0, 640.0)));
        assert_eq!(controller.inserting_cell(), Some(CellRef::new(1, 2)));

        let frame = controller.frame().unwrap();
        assert_eq!(frame.columns[0].state, ColumnState::Selected);
        assert_eq!(frame.columns[1].state, ColumnState::Inserting);
        let dragged = frame.dragged().unwrap();
        assert_eq!((dragged.dx, dragged.dy), (200.0, 500.0));
        assert_eq!(dragged.width, 112.0);
        assert!(!dragged.transition);
        // "f" opens the gap; the vacated column closes up.
        assert_eq!(frame.item(CellRef::new(1, 2)).unwrap().dy, 90.0);
        assert_eq!(frame.item(CellRef::new(1, 0)).unwrap().dy, 0.0);
        assert_eq!(frame.item(CellRef::new(0, 1)).unwrap().dy, -90.0);
        assert_eq!(frame.item(CellRef::new(0, 2)).unwrap().dy, -90.0);
        // First computed frame snaps rather than animates.
        assert!(!frame.item(CellRef::new(1, 2)).unwrap().transition);

        assert_eq!(
            controller.on_gesture_end(Point::new(260.0, 640.0)),
            ReleaseOutcome::Settling
        );
        assert_eq!(controller.phase(), SessionPhase::Releasing);
        let settle = controller.frame().unwrap().dragged().unwrap();
        // Settles onto the opened slot: x to the column's left edge, y to
        // the gap above "f".
        assert_eq!((settle.dx, settle.dy), (200.0, 492.0));
        assert!(settle.transition);

        assert!(controller.on_settle_complete());
        assert_eq!(controller.phase(), SessionPhase::Idle);
        assert_eq!(controller.grid().column(0), Some(&["b", "c"][..]));
        assert_eq!(controller.grid().column(1), Some(&["d", "e", "a", "f"][..]));
    }

    #[test]
    fn same_column_reorder() {
        let mut controller = controller();
        assert!(controller.on_gesture_start(Point::new(60.0, 140.0), &layout()));
        // Center lands inside "b"'s slot, past its midpoint.
        assert!(controller.on_gesture_move(Point::new(60.0, 280.0)));
        assert_eq!(controller.inserting_cell(), Some(CellRef::new(0, 1)));

        let frame = controller.frame().unwrap();
        assert_eq!(frame.columns[0].state, ColumnState::Inserting);
        assert_eq!(frame.item(CellRef::new(0, 1)).unwrap().dy, -90.0);
        assert_eq!(frame.item(CellRef::new(0, 2)).unwrap().dy, 0.0);

        assert_eq!(
            controller.on_gesture_end(Point::new(60.0, 280.0)),
            ReleaseOutcome::Settling
        );
        let settle = controller.frame().unwrap().dragged().unwrap();
        // "b" slides up by one slot; "a" settles into row 1's old top.
        assert_eq!((settle.dx, settle.dy), (0.0, 90.0));

        assert!(controller.on_settle_complete());
        assert_eq!(controller.grid().column(0), Some(&["b", "a", "c"][..]));
    }

    #[test]
    fn release_within_hysteresis_is_a_click() {
        let mut controller = controller();
        assert!(controller.on_gesture_start(Point::new(60.0, 140.0), &layout()));
        // Exactly at the threshold still counts as a click.
        assert!(!controller.on_gesture_move(Point::new(60.0 + CLICK_HYSTERESIS, 140.0)));
        assert!(controller.frame().unwrap().items.is_empty());
        assert_eq!(
            controller.on_gesture_end(Point::new(60.0 + CLICK_HYSTERESIS, 140.0)),
            ReleaseOutcome::Click
        );
        assert_eq!(controller.phase(), SessionPhase::Idle);
        assert_eq!(controller.grid().column(0), Some(&["a", "b", "c"][..]));
    }

    #[test]
    fn zero_hysteresis_makes_every_move_a_drag() {
        let mut controller = DragController::with_hysteresis(
            Grid::new(vec![vec!["a", "b", "c"], vec!["d", "e", "f"]]),
            0.0,
        );
        assert!(controller.on_gesture_start(Point::new(60.0, 140.0), &layout()));
        assert!(controller.on_gesture_move(Point::new(61.0, 140.0)));
        assert!(controller.frame().unwrap().dragged().is_some());
    }

    #[test]
    fn returning_to_the_origin_commits_without_settling() {
        let mut controller = controller();
        assert!(controller.on_gesture_start(Point::new(60.0, 140.0), &layout()));
        assert!(controller.on_gesture_move(Point::new(60.0, 160.0)));
        // Back to where the press began: the shown offset already equals
        // the settled offset, so no animation will fire.
        assert!(controller.on_gesture_move(Point::new(60.0, 140.0)));
        assert_eq!(
            controller.on_gesture_end(Point::new(60.0, 140.0)),
            ReleaseOutcome::Committed
        );
        assert_eq!(controller.phase(), SessionPhase::Idle);
        assert_eq!(controller.grid().column(0), Some(&["a", "b", "c"][..]));
    }

    #[test]
    fn leaving_every_column_settles_back_home() {
        let mut controller = controller();
        assert!(controller.on_gesture_start(Point::new(60.0, 140.0), &layout()));
        assert!(controller.on_gesture_move(Point::new(260.0, 640.0)));
        // Dead space between nothing: x=160 is outside both column rects.
        assert!(controller.on_gesture_move(Point::new(160.0, 900.0)));
        assert!(controller.is_outside());
        assert_eq!(controller.inserting_cell(), Some(CellRef::new(0, 0)));

        let frame = controller.frame().unwrap();
        assert_eq!(frame.item(CellRef::new(1, 2)).unwrap().dy, 0.0);
        assert_eq!(frame.item(CellRef::new(0, 1)).unwrap().dy, 0.0);

        assert_eq!(
            controller.on_gesture_end(Point::new(160.0, 900.0)),
            ReleaseOutcome::Settling
        );
        assert!(controller.on_settle_complete());
        assert_eq!(controller.grid().column(0), Some(&["a", "b", "c"][..]));
        assert_eq!(controller.grid().column(1), Some(&["d", "e", "f"][..]));
    }

    #[test]
    fn start_is_ignored_while_a_gesture_is_in_flight() {
        let mut controller = controller();
        assert!(controller.on_gesture_start(Point::new(60.0, 140.0), &layout()));
        assert!(!controller.on_gesture_start(Point::new(60.0, 230.0), &layout()));
        assert_eq!(controller.selected_cell(), Some(CellRef::new(0, 0)));

        assert!(controller.on_gesture_move(Point::new(260.0, 640.0)));
        assert_eq!(
            controller.on_gesture_end(Point::new(260.0, 640.0)),
            ReleaseOutcome::Settling
        );
        assert!(!controller.on_gesture_start(Point::new(60.0, 230.0), &layout()));
        assert_eq!(
            controller.on_gesture_end(Point::new(60.0, 230.0)),
            ReleaseOutcome::Ignored
        );
        assert_eq!(controller.phase(), SessionPhase::Releasing);
    }

    #[test]
    fn start_in_empty_space_does_nothing() {
        let mut controller = controller();
        assert!(!controller.on_gesture_start(Point::new(60.0, 50.0), &layout()));
        assert_eq!(controller.phase(), SessionPhase::Idle);
        assert!(controller.frame().is_none());
    }

    #[test]
    fn cancel_discards_the_session() {
        let mut controller = controller();
        assert!(!controller.cancel());
        assert!(controller.on_gesture_start(Point::new(60.0, 140.0), &layout()));
        assert!(controller.on_gesture_move(Point::new(260.0, 640.0)));
        assert!(controller.cancel());
        assert_eq!(controller.phase(), SessionPhase::Idle);
        assert_eq!(controller.grid().column(1), Some(&["d", "e", "f"][..]));
        assert!(!controller.on_settle_complete());
    }

    #[test]
    fn moves_are_ignored_outside_of_dragging() {
        let mut controller = controller();
        assert!(!controller.on_gesture_move(Point::new(60.0, 140.0)));
        assert!(controller.on_gesture_start(Point::new(60.0, 140.0), &layout()));
        assert!(controller.on_gesture_move(Point::new(260.0, 640.0)));
        controller.on_gesture_end(Point::new(260.0, 640.0));
        let before = controller.frame().unwrap().clone();
        assert!(!controller.on_gesture_move(Point::new(60.0, 140.0)));
        assert_eq!(controller.frame(), Some(&before));
    }

    #[test]
    fn later_frames_animate() {
        let mut controller = controller();
        assert!(controller.on_gesture_start(Point::new(60.0, 140.0), &layout()));
        assert!(controller.on_gesture_move(Point::new(60.0, 280.0)));
        assert!(controller.on_gesture_move(Point::new(60.0, 281.0)));
        let frame = controller.frame().unwrap();
        assert!(frame.item(CellRef::new(0, 1)).unwrap().transition);
        let dragged = frame.dragged().unwrap();
        assert!(!dragged.transition);
        assert_eq!(dragged.state, ItemState::Dragging);
    }
}
