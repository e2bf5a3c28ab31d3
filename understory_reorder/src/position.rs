// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer normalization: one page-space [`Point`] from mouse or touch input.
//!
//! ```
//! use kurbo::Point;
//! use understory_reorder::position::{PointerInput, read_position};
//!
//! let touches = [Point::new(1.0, 2.0), Point::new(30.0, 40.0)];
//! assert_eq!(read_position(&PointerInput::Touch(&touches)), Some(Point::new(30.0, 40.0)));
//! assert_eq!(read_position(&PointerInput::Touch(&[])), None);
//! ```

use kurbo::Point;

/// A raw input payload as delivered by the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerInput<'a> {
    /// A pointing-device event carrying page-relative coordinates.
    Mouse(Point),
    /// A touch event carrying its current contact points in page space.
    Touch(&'a [Point]),
}

/// Reads the pointer position from an input event.
///
/// Touch events use the **last** contact point, so a later finger overrides
/// an earlier one. Returns `None` for an empty touch list or non-finite
/// coordinates; callers should drop such events.
#[must_use]
pub fn read_position(input: &PointerInput<'_>) -> Option<Point> {
    let point = match *input {
        PointerInput::Mouse(point) => point,
        PointerInput::Touch(touches) => *touches.last()?,
    };
    point.is_finite().then_some(point)
}

/// Where the host should attach the listener for an input source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListenerScope {
    /// Attached to each draggable item.
    Item,
    /// Attached once to the whole input surface for the lifetime of the list.
    Surface,
}

/// The input sources a reorderable list listens to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InputSource {
    /// Mouse button press on an item.
    MouseDown,
    /// Touch start on an item.
    TouchStart,
    /// Touch move on an item; global touch tracking is unreliable on some platforms.
    TouchMove,
    /// Touch end on an item.
    TouchEnd,
    /// Touch cancel on an item.
    TouchCancel,
    /// Pointer move anywhere on the surface.
    PointerMove,
    /// Pointer release anywhere on the surface.
    PointerUp,
}

impl InputSource {
    /// Every source, in registration order.
    pub const ALL: [Self; 7] = [
        Self::MouseDown,
        Self::TouchStart,
        Self::TouchMove,
        Self::TouchEnd,
        Self::TouchCancel,
        Self::PointerMove,
        Self::PointerUp,
    ];

    /// Returns where a listener for this source belongs.
    ///
    /// Moves and releases are surface-wide so a drag keeps tracking after the
    /// pointer leaves the item it started on.
    #[must_use]
    pub const fn scope(self) -> ListenerScope {
        match self {
            Self::PointerMove | Self::PointerUp => ListenerScope::Surface,
            Self::MouseDown
            | Self::TouchStart
            | Self::TouchMove
            | Self::TouchEnd
            | Self::TouchCancel => ListenerScope::Item,
        }
    }
}
