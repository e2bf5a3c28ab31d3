// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The engine facade for one mounted reorderable list.

use alloc::borrow::Cow;

use kurbo::{Point, Size};

use crate::anomaly::Anomaly;
use crate::bounds::{BoundsIndex, Measurer};
use crate::config::ReorderConfig;
use crate::ghost::{self, Ghost};
use crate::position::{PointerInput, read_position};
use crate::preview::preview;
use crate::roles::ItemRoles;
use crate::session::{ActivationTimer, DragSession, Phase, PressOutcome, ReorderEvent};

/// Drag-to-reorder engine for one list.
///
/// Owns a [`DragSession`] and the [`BoundsIndex`] it hit-tests against, and
/// turns raw [`PointerInput`] into session transitions using a
/// [`ReorderConfig`].
///
/// Host responsibilities:
///
/// - Call [`activate`](Self::activate) on mount and
///   [`deactivate`](Self::deactivate) on unmount, installing or removing the
///   surface-wide move/release listeners when they return `true`.
/// - Call [`remeasure`](Self::remeasure) whenever the rendered items change
///   identity, and before the first press.
/// - Route presses, moves, releases and cancels, and schedule the
///   [`ActivationTimer`]s returned from presses.
/// - Apply [`ReorderEvent::Commit`] to its own data.
#[derive(Clone, Debug, Default)]
pub struct Reorder {
    config: ReorderConfig,
    session: DragSession,
    bounds: BoundsIndex,
    dragged_size: Size,
}

impl Reorder {
    /// Creates an inactive engine with no measurements.
    #[must_use]
    pub fn new(config: ReorderConfig) -> Self {
        Self {
            config,
            session: DragSession::new(),
            bounds: BoundsIndex::new(),
            dragged_size: Size::ZERO,
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ReorderConfig {
        &self.config
    }

    /// Replaces the configuration.
    ///
    /// A drag in progress keeps its grab offset; other settings apply from the
    /// next event. Disabling the engine cancels any drag. Changing the
    /// positioning space takes effect at the next [`remeasure`](Self::remeasure).
    pub fn set_config(&mut self, config: ReorderConfig) {
        if config.disabled && !self.config.disabled {
            self.session.cancel();
        }
        self.config = config;
    }

    /// Starts listening. Returns `true` if the host must install the surface-wide listeners.
    pub fn activate(&mut self) -> bool {
        self.session.mount()
    }

    /// Stops listening and abandons any drag without emitting events.
    ///
    /// Returns `true` if the host must remove the surface-wide listeners.
    pub fn deactivate(&mut self) -> bool {
        self.session.unmount()
    }

    /// Returns `true` while activated.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_mounted()
    }

    /// Rebuilds the bounds table from `measurer`.
    ///
    /// A drag whose active or hovered item no longer exists is aborted
    /// without a commit. Otherwise a drag in progress is hit-tested again at
    /// the last pointer, and a changed hover index is returned.
    pub fn remeasure<M: Measurer + ?Sized>(&mut self, measurer: &M) -> Option<ReorderEvent> {
        self.bounds.rebuild(measurer, self.config.space);
        if self.session.abort_if_out_of_range(self.bounds.len()) {
            return None;
        }
        let pointer = self.session.pointer();
        self.session.track(pointer, &self.bounds, self.config.axis)
    }

    /// Handles a press on the item at `index`. `now` is the host's monotonic time in milliseconds.
    pub fn press(&mut self, index: usize, input: &PointerInput<'_>, now: u64) -> PressOutcome {
        if self.config.disabled || !self.session.is_mounted() {
            return PressOutcome::Ignored;
        }
        let Some(page) = read_position(input) else {
            self.session.note(Anomaly::MalformedInputEvent);
            return PressOutcome::Ignored;
        };
        if self.bounds.revision() == 0 {
            self.session.note(Anomaly::StaleMeasurement);
            return PressOutcome::Ignored;
        }
        if index >= self.bounds.len() {
            self.session.note(Anomaly::OutOfRangeIndex);
            return PressOutcome::Ignored;
        }
        let Some(rect) = self.bounds.get(index) else {
            self.session.note(Anomaly::StaleMeasurement);
            return PressOutcome::Ignored;
        };
        let pointer = self.bounds.localize(page);
        let grab = ghost::grab_offset(
            pointer,
            rect.origin(),
            self.config.ghost_offset,
            self.config.compensate_ghost,
        );
        let outcome = self
            .session
            .press(index, pointer, grab, self.config.activation, now);
        if outcome != PressOutcome::Ignored {
            self.dragged_size = rect.size();
        }
        outcome
    }

    /// Fires an activation timer returned from [`press`](Self::press).
    pub fn fire(&mut self, timer: ActivationTimer) -> Option<ReorderEvent> {
        self.session.fire(timer)
    }

    /// Fires the pending activation if `now` has passed its deadline.
    pub fn tick(&mut self, now: u64) -> Option<ReorderEvent> {
        self.session.tick(now)
    }

    /// Handles a pointer move anywhere on the surface.
    pub fn pointer_move(&mut self, input: &PointerInput<'_>) -> Option<ReorderEvent> {
        if self.session.phase() == Phase::Idle {
            return None;
        }
        let Some(page) = read_position(input) else {
            self.session.note(Anomaly::MalformedInputEvent);
            return None;
        };
        let pointer = self.bounds.localize(page);
        self.session.track(pointer, &self.bounds, self.config.axis)
    }

    /// Handles a release anywhere on the surface.
    pub fn release(&mut self) -> Option<ReorderEvent> {
        self.session.release()
    }

    /// Handles a pointer or touch cancel: ends the drag without committing.
    pub fn cancel(&mut self) {
        self.session.cancel();
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    /// Index of the pressed or dragged item.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.session.active_index()
    }

    /// Index currently under the drag.
    #[must_use]
    pub fn hover_index(&self) -> Option<usize> {
        self.session.hover_index()
    }

    /// Last pointer position in the configured space.
    #[must_use]
    pub fn pointer(&self) -> Point {
        self.session.pointer()
    }

    /// Where to draw the floating copy of the dragged item; `None` unless dragging.
    #[must_use]
    pub fn ghost(&self) -> Option<Ghost> {
        (self.session.phase() == Phase::Dragging).then(|| Ghost {
            origin: ghost::place(self.session.pointer(), self.session.grab_offset()),
            size: self.dragged_size,
        })
    }

    /// The sequence to render: live-previewed while dragging if enabled, else `items` as is.
    #[must_use]
    pub fn display<'a, T: Clone>(&self, items: &'a [T]) -> Cow<'a, [T]> {
        if !self.config.live_preview || self.session.phase() != Phase::Dragging {
            return Cow::Borrowed(items);
        }
        preview(items, self.session.active_index(), self.session.hover_index())
    }

    /// Roles of the item at `index` in the current drag.
    ///
    /// Empty unless dragging, so a tap never flashes the emitter styling.
    #[must_use]
    pub fn roles(&self, index: usize) -> ItemRoles {
        if self.session.phase() != Phase::Dragging {
            return ItemRoles::empty();
        }
        ItemRoles::of(index, self.session.active_index(), self.session.hover_index())
    }

    /// The bounds used for hit-testing.
    #[must_use]
    pub fn bounds(&self) -> &BoundsIndex {
        &self.bounds
    }

    /// The underlying session.
    #[must_use]
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// The most recent input the engine had to ignore or abort.
    #[must_use]
    pub fn last_anomaly(&self) -> Option<Anomaly> {
        self.session.last_anomaly()
    }
}
