// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the reorder demos.
//!
//! A minimal host: a column of fixed-height rows inside a container, plus a
//! virtual millisecond clock with one timer slot. Real hosts would measure
//! their widgets and use their event loop's timers instead.

use kurbo::{Point, Rect, Size};
use understory_reorder::{ActivationTimer, Measurer, ReorderEvent};

/// Rows of equal height stacked from the container's origin.
#[derive(Clone, Debug)]
pub struct StackLayout {
    /// Page-space origin of the container.
    pub origin: Point,
    /// Size of one row.
    pub row: Size,
    /// Number of rows.
    pub len: usize,
}

impl StackLayout {
    /// Page-space center of row `index`.
    #[must_use]
    pub fn row_center(&self, index: usize) -> Point {
        let top = self.origin.y + self.row.height * index as f64;
        Point::new(self.origin.x + self.row.width / 2.0, top + self.row.height / 2.0)
    }
}

impl Measurer for StackLayout {
    fn item_count(&self) -> usize {
        self.len
    }

    fn item_bounds(&self, index: usize) -> Option<Rect> {
        (index < self.len).then(|| {
            let top = self.origin.y + self.row.height * index as f64;
            Rect::from_origin_size(Point::new(self.origin.x, top), self.row)
        })
    }

    fn container_origin(&self) -> Point {
        self.origin
    }
}

/// A virtual clock holding at most one scheduled activation.
#[derive(Clone, Debug, Default)]
pub struct Clock {
    now: u64,
    scheduled: Option<ActivationTimer>,
}

impl Clock {
    /// Current time in milliseconds.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Schedules `timer`, replacing any earlier one.
    pub fn schedule(&mut self, timer: ActivationTimer) {
        self.scheduled = Some(timer);
    }

    /// Advances by `ms` and returns the timer that came due, if any.
    pub fn advance(&mut self, ms: u64) -> Option<ActivationTimer> {
        self.now += ms;
        match self.scheduled {
            Some(timer) if timer.deadline() <= self.now => self.scheduled.take(),
            _ => None,
        }
    }
}

/// Applies a commit to `items`; other events are ignored.
pub fn apply<T>(items: &mut Vec<T>, event: ReorderEvent) {
    if let ReorderEvent::Commit { from, to } = event {
        let item = items.remove(from);
        items.insert(to, item);
    }
}
