// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ghost placement: where to draw the floating copy of the dragged item.
//!
//! The grab offset is captured once when the item is pressed and stays fixed
//! for the whole drag, so the ghost is a pure translation of the pointer and
//! never accumulates drift.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_reorder::ghost::place;
//!
//! let grab = Vec2::new(5.0, 5.0);
//! assert_eq!(place(Point::new(100.0, 100.0), grab), Point::new(95.0, 95.0));
//! assert_eq!(place(Point::new(140.0, 160.0), grab), Point::new(135.0, 155.0));
//! ```

use kurbo::{Point, Rect, Size, Vec2};

/// Top-left corner of the ghost for the given pointer.
#[must_use]
pub fn place(pointer: Point, grab_offset: Vec2) -> Point {
    pointer - grab_offset
}

/// Computes the grab offset for a press at `press` on an item whose origin is `item_origin`.
///
/// With `compensate` the ghost keeps the grabbed point under the pointer,
/// shifted by `ghost_offset`. Without it the offset is zero and the ghost's
/// origin sits at the pointer.
#[must_use]
pub fn grab_offset(
    press: Point,
    item_origin: Point,
    ghost_offset: Vec2,
    compensate: bool,
) -> Vec2 {
    if compensate {
        (press - item_origin) - ghost_offset
    } else {
        Vec2::ZERO
    }
}

/// Placement and size of the ghost for the current frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ghost {
    /// Top-left corner, in the configured positioning space.
    pub origin: Point,
    /// Size of the dragged item when it was pressed.
    pub size: Size,
}

impl Ghost {
    /// The ghost's rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}
