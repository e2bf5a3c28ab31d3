// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session state machine: decides when a press becomes a drag and what it commits.
//!
//! ```text
//!          press            timer fires
//!   Idle ---------> Armed -------------> Dragging --+ move: re-hit-test,
//!    ^               |                      |  ^    | emit HoverChanged
//!    |    release    |        release       |  +----+
//!    +---------------+----------------------+
//!          (no commit)   (Commit if hover differs from active)
//! ```
//!
//! With [`Activation::Immediate`] a press goes straight to `Dragging`.
//! [`DragSession::cancel`] and [`DragSession::unmount`] return to `Idle` from
//! any phase without emitting anything.
//!
//! ## Timers
//!
//! The session never reads a clock. A delayed press returns an
//! [`ActivationTimer`]; the host schedules it and hands it back to
//! [`DragSession::fire`], or polls [`DragSession::tick`] with its own
//! monotonic timestamp. A timer that arrives after a release, after unmount,
//! or for an earlier press is ignored, so there is no way to end up dragging
//! after release.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect, Vec2};
//! use understory_reorder::{Activation, Axis, BoundsIndex, PositioningSpace};
//! use understory_reorder::session::{DragSession, PressOutcome, ReorderEvent};
//!
//! let rows: Vec<Rect> = (0..5)
//!     .map(|i| Rect::new(0.0, i as f64 * 10.0, 100.0, (i + 1) as f64 * 10.0))
//!     .collect();
//! let bounds = BoundsIndex::measure(&rows[..], PositioningSpace::Fixed);
//!
//! let mut session = DragSession::new();
//! session.mount();
//!
//! let PressOutcome::Armed(timer) =
//!     session.press(2, Point::new(5.0, 25.0), Vec2::ZERO, Activation::Delayed(128), 1_000)
//! else {
//!     unreachable!();
//! };
//! assert_eq!(timer.deadline(), 1_128);
//! assert_eq!(session.fire(timer), Some(ReorderEvent::HoverChanged(Some(2))));
//!
//! let moved = session.track(Point::new(5.0, 45.0), &bounds, Axis::Vertical);
//! assert_eq!(moved, Some(ReorderEvent::HoverChanged(Some(4))));
//! assert_eq!(session.release(), Some(ReorderEvent::Commit { from: 2, to: 4 }));
//! ```

use kurbo::{Point, Vec2};

use crate::anomaly::Anomaly;
use crate::bounds::{Axis, BoundsIndex};
use crate::config::Activation;
use crate::hit::hit_test;
use crate::logging::{debug, trace};

/// Lifecycle phase of a drag.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No press in progress.
    #[default]
    Idle,
    /// Pressed, waiting out the activation delay.
    Armed,
    /// Dragging: moves are hit-tested and release may commit.
    Dragging,
}

/// A pending activation the host must schedule.
///
/// Opaque apart from its deadline; two timers are equal only if they were
/// issued for the same press.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ActivationTimer {
    generation: u64,
    deadline: u64,
}

impl ActivationTimer {
    /// Host timestamp (milliseconds) at which the timer should fire.
    #[must_use]
    pub const fn deadline(self) -> u64 {
        self.deadline
    }
}

/// A notification for the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReorderEvent {
    /// The item under the drag changed; `None` when the pointer is over no item.
    HoverChanged(Option<usize>),
    /// A completed drag moved the item at `from` to `to`.
    Commit {
        /// Index the item was dragged from.
        from: usize,
        /// Index the item was dropped on.
        to: usize,
    },
}

/// Result of a press.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PressOutcome {
    /// The press was dropped: another press is in progress, the session is
    /// unmounted, or the input was unusable.
    Ignored,
    /// The press is held; schedule the timer.
    Armed(ActivationTimer),
    /// The press activated immediately.
    Activated(ReorderEvent),
}

/// The mutable state of one reorderable list's drag interaction.
#[derive(Clone, Debug, Default)]
pub struct DragSession {
    phase: Phase,
    active: Option<usize>,
    hover: Option<usize>,
    pointer: Point,
    grab_offset: Vec2,
    generation: u64,
    pending: Option<ActivationTimer>,
    mounted: bool,
    last_anomaly: Option<Anomaly>,
}

impl DragSession {
    /// Creates an idle, unmounted session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: Phase::Idle,
            active: None,
            hover: None,
            pointer: Point::ORIGIN,
            grab_offset: Vec2::ZERO,
            generation: 0,
            pending: None,
            mounted: false,
            last_anomaly: None,
        }
    }

    /// Marks the list as mounted.
    ///
    /// Returns `true` the first time, when the host must install the
    /// surface-wide move and release listeners.
    pub fn mount(&mut self) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        debug!("reorder: mounted");
        true
    }

    /// Tears the session down: abandons any drag, invalidates pending timers,
    /// and emits nothing.
    ///
    /// Returns `true` if the host must now remove the surface-wide listeners.
    pub fn unmount(&mut self) -> bool {
        let was_mounted = self.mounted;
        self.mounted = false;
        self.reset();
        if was_mounted {
            debug!("reorder: unmounted");
        }
        was_mounted
    }

    /// Returns `true` between [`mount`](Self::mount) and [`unmount`](Self::unmount).
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Handles a press on `index` at `pointer`.
    ///
    /// `grab_offset` is fixed here for the whole drag. Presses are ignored
    /// unless the session is mounted and idle.
    pub fn press(
        &mut self,
        index: usize,
        pointer: Point,
        grab_offset: Vec2,
        activation: Activation,
        now: u64,
    ) -> PressOutcome {
        if !self.mounted || self.phase != Phase::Idle {
            return PressOutcome::Ignored;
        }
        self.generation = self.generation.wrapping_add(1);
        self.active = Some(index);
        self.hover = None;
        self.pointer = pointer;
        self.grab_offset = grab_offset;
        match activation {
            Activation::Immediate => PressOutcome::Activated(self.activate()),
            Activation::Delayed(delay_ms) => {
                let timer = ActivationTimer {
                    generation: self.generation,
                    deadline: now.saturating_add(delay_ms),
                };
                self.phase = Phase::Armed;
                self.pending = Some(timer);
                debug!(index, delay_ms, "reorder: armed");
                PressOutcome::Armed(timer)
            }
        }
    }

    /// Fires an activation timer previously returned by [`press`](Self::press).
    ///
    /// Stale timers are ignored and recorded as [`Anomaly::StaleTimerFire`].
    pub fn fire(&mut self, timer: ActivationTimer) -> Option<ReorderEvent> {
        if !self.mounted || self.phase != Phase::Armed || self.pending != Some(timer) {
            self.note(Anomaly::StaleTimerFire);
            return None;
        }
        Some(self.activate())
    }

    /// Fires the pending activation if `now` has reached its deadline.
    pub fn tick(&mut self, now: u64) -> Option<ReorderEvent> {
        match self.pending {
            Some(timer) if now >= timer.deadline => self.fire(timer),
            _ => None,
        }
    }

    /// Handles a pointer move to `pointer`, already in the space of `bounds`.
    ///
    /// While dragging this re-runs the hit-test and reports a changed hover
    /// index. While armed only the pointer is recorded.
    pub fn track(
        &mut self,
        pointer: Point,
        bounds: &BoundsIndex,
        axis: Axis,
    ) -> Option<ReorderEvent> {
        match self.phase {
            Phase::Idle => None,
            Phase::Armed => {
                self.pointer = pointer;
                None
            }
            Phase::Dragging => {
                self.pointer = pointer;
                let hover = hit_test(pointer, bounds, axis);
                if hover == self.hover {
                    return None;
                }
                trace!(?hover, "reorder: hover changed");
                self.hover = hover;
                Some(ReorderEvent::HoverChanged(hover))
            }
        }
    }

    /// Handles a release: commits if the drag ended over a different item, then resets.
    pub fn release(&mut self) -> Option<ReorderEvent> {
        let commit = match (self.phase, self.active, self.hover) {
            (Phase::Dragging, Some(from), Some(to)) if from != to => {
                debug!(from, to, "reorder: commit");
                Some(ReorderEvent::Commit { from, to })
            }
            _ => None,
        };
        self.reset();
        commit
    }

    /// Abandons any press or drag without committing.
    pub fn cancel(&mut self) {
        if self.phase != Phase::Idle {
            debug!("reorder: cancelled");
        }
        self.reset();
    }

    /// Aborts the drag if its active or hover index no longer fits a list of `len` items.
    ///
    /// Returns `true` if it aborted. Nothing is emitted.
    pub fn abort_if_out_of_range(&mut self, len: usize) -> bool {
        let out_of_range =
            self.active.is_some_and(|i| i >= len) || self.hover.is_some_and(|i| i >= len);
        if out_of_range {
            self.note(Anomaly::OutOfRangeIndex);
            self.reset();
        }
        out_of_range
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the pressed or dragged item; `None` exactly when idle.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Index under the pointer; only `Some` while dragging.
    #[must_use]
    pub fn hover_index(&self) -> Option<usize> {
        self.hover
    }

    /// Last pointer position seen while pressed.
    #[must_use]
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Grab offset captured at press.
    #[must_use]
    pub fn grab_offset(&self) -> Vec2 {
        self.grab_offset
    }

    /// The activation timer still waiting to fire, if any.
    #[must_use]
    pub fn pending_timer(&self) -> Option<ActivationTimer> {
        self.pending
    }

    /// The most recent anomaly absorbed by this session.
    #[must_use]
    pub fn last_anomaly(&self) -> Option<Anomaly> {
        self.last_anomaly
    }

    pub(crate) fn note(&mut self, anomaly: Anomaly) {
        debug!(%anomaly, "reorder: input ignored");
        self.last_anomaly = Some(anomaly);
    }

    fn activate(&mut self) -> ReorderEvent {
        self.phase = Phase::Dragging;
        self.pending = None;
        self.hover = self.active;
        debug!(index = ?self.active, "reorder: dragging");
        ReorderEvent::HoverChanged(self.hover)
    }

    fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.active = None;
        self.hover = None;
        self.pointer = Point::ORIGIN;
        self.grab_offset = Vec2::ZERO;
        self.pending = None;
    }
}
