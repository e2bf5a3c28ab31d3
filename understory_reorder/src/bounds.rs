// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measured item bounds, keyed by index in the current rendered sequence.
//!
//! ## Usage
//!
//! 1) Implement [`Measurer`] for whatever owns layout (or pass a `[Rect]` slice).
//! 2) Call [`BoundsIndex::measure`] (or [`BoundsIndex::rebuild`]) whenever the
//!    rendered items change identity: count, order, insertion, or removal.
//! 3) Query it with [`hit_test`](crate::hit::hit_test) while the pointer moves.
//!
//! The index is always rebuilt, never patched, so an entry can never outlive
//! the item it was measured from.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_reorder::{BoundsIndex, PositioningSpace};
//!
//! let rows = [Rect::new(0.0, 0.0, 100.0, 20.0), Rect::new(0.0, 20.0, 100.0, 40.0)];
//! let bounds = BoundsIndex::measure(&rows[..], PositioningSpace::Fixed);
//! assert_eq!(bounds.len(), 2);
//! assert_eq!(bounds.get(1), Some(rows[1]));
//! assert_eq!(bounds.get(2), None);
//! ```

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::config::PositioningSpace;

/// Source of on-screen item bounds.
///
/// Bounds are reported in page space; [`BoundsIndex`] converts them into the
/// configured [`PositioningSpace`].
pub trait Measurer {
    /// Number of items currently rendered.
    fn item_count(&self) -> usize;

    /// Bounds of the item at `index`, or `None` if it cannot be measured right now.
    fn item_bounds(&self, index: usize) -> Option<Rect>;

    /// Page-space origin of the list container.
    ///
    /// Only consulted for [`PositioningSpace::Relative`].
    fn container_origin(&self) -> Point {
        Point::ORIGIN
    }
}

impl Measurer for [Rect] {
    fn item_count(&self) -> usize {
        self.len()
    }

    fn item_bounds(&self, index: usize) -> Option<Rect> {
        self.get(index).copied()
    }
}

/// The primary layout axis of a list.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Items stacked top to bottom.
    #[default]
    Vertical,
    /// Items laid out left to right.
    Horizontal,
}

impl Axis {
    /// Returns the coordinate of `point` along this axis.
    #[must_use]
    pub fn coordinate(self, point: Point) -> f64 {
        match self {
            Self::Vertical => point.y,
            Self::Horizontal => point.x,
        }
    }

    /// Reduces `rect` to its leading edge and extent along this axis.
    #[must_use]
    pub fn span(self, rect: Rect) -> Span {
        match self {
            Self::Vertical => Span {
                start: rect.y0,
                extent: rect.height(),
            },
            Self::Horizontal => Span {
                start: rect.x0,
                extent: rect.width(),
            },
        }
    }
}

/// An item's bounds reduced to one axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Span {
    /// Leading edge.
    pub start: f64,
    /// Size along the axis.
    pub extent: f64,
}

impl Span {
    /// Trailing edge.
    #[must_use]
    pub fn end(self) -> f64 {
        self.start + self.extent
    }

    /// Returns `true` if `value` lies strictly between the two edges.
    ///
    /// A value exactly on an edge is outside, so two touching spans never
    /// both contain it.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        self.start < value && value < self.end()
    }
}

/// Index-keyed table of measured item bounds.
#[derive(Clone, Debug, Default)]
pub struct BoundsIndex {
    rects: Vec<Option<Rect>>,
    container_origin: Point,
    space: PositioningSpace,
    revision: u64,
}

impl BoundsIndex {
    /// Creates an empty, never-measured index.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rects: Vec::new(),
            container_origin: Point::ORIGIN,
            space: PositioningSpace::Fixed,
            revision: 0,
        }
    }

    /// Measures every item reported by `measurer`.
    #[must_use]
    pub fn measure<M: Measurer + ?Sized>(measurer: &M, space: PositioningSpace) -> Self {
        let mut index = Self::new();
        index.rebuild(measurer, space);
        index
    }

    /// Discards all entries and re-measures every item.
    ///
    /// Items the measurer cannot report, or reports with non-finite
    /// coordinates, are kept as missing entries that never match a hit-test.
    pub fn rebuild<M: Measurer + ?Sized>(&mut self, measurer: &M, space: PositioningSpace) {
        let origin = measurer.container_origin();
        self.space = space;
        self.container_origin = origin;
        self.rects.clear();
        self.rects.extend((0..measurer.item_count()).map(|i| {
            measurer
                .item_bounds(i)
                .filter(|r| r.is_finite())
                .map(|r| space.localize_rect(r, origin))
        }));
        self.revision += 1;
    }

    /// Number of items covered by the last measurement.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Returns `true` if no items were measured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Bounds of `index` in the configured space, if measured.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Rect> {
        self.rects.get(index).copied().flatten()
    }

    /// Iterates `(index, bounds)` in index order, including missing entries.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<Rect>)> + '_ {
        self.rects.iter().copied().enumerate()
    }

    /// Maps a page-space point into the space these bounds live in.
    #[must_use]
    pub fn localize(&self, point: Point) -> Point {
        self.space.localize(point, self.container_origin)
    }

    /// The space entries were converted into.
    #[must_use]
    pub fn space(&self) -> PositioningSpace {
        self.space
    }

    /// The container origin captured at the last measurement.
    #[must_use]
    pub fn container_origin(&self) -> Point {
        self.container_origin
    }

    /// Bumps on every rebuild; `0` means never measured.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Offset {
        rects: Vec<Option<Rect>>,
        origin: Point,
    }

    impl Measurer for Offset {
        fn item_count(&self) -> usize {
            self.rects.len()
        }

        fn item_bounds(&self, index: usize) -> Option<Rect> {
            self.rects.get(index).copied().flatten()
        }

        fn container_origin(&self) -> Point {
            self.origin
        }
    }

    #[test]
    fn new_index_is_unmeasured() {
        let bounds = BoundsIndex::new();
        assert!(bounds.is_empty());
        assert_eq!(bounds.revision(), 0);
        assert_eq!(bounds.get(0), None);
    }

    #[test]
    fn fixed_space_keeps_page_coordinates() {
        let m = Offset {
            rects: alloc::vec![Some(Rect::new(50.0, 50.0, 150.0, 70.0))],
            origin: Point::new(50.0, 50.0),
        };
        let bounds = BoundsIndex::measure(&m, PositioningSpace::Fixed);
        assert_eq!(bounds.get(0), Some(Rect::new(50.0, 50.0, 150.0, 70.0)));
        assert_eq!(bounds.localize(Point::new(60.0, 60.0)), Point::new(60.0, 60.0));
    }

    #[test]
    fn relative_space_translates_bounds_and_pointer() {
        let m = Offset {
            rects: alloc::vec![Some(Rect::new(50.0, 50.0, 150.0, 70.0))],
            origin: Point::new(50.0, 50.0),
        };
        let bounds = BoundsIndex::measure(&m, PositioningSpace::Relative);
        assert_eq!(bounds.get(0), Some(Rect::new(0.0, 0.0, 100.0, 20.0)));
        assert_eq!(bounds.localize(Point::new(60.0, 60.0)), Point::new(10.0, 10.0));
        assert_eq!(bounds.container_origin(), Point::new(50.0, 50.0));
    }

    #[test]
    fn unmeasurable_items_are_missing_entries() {
        let m = Offset {
            rects: alloc::vec![
                None,
                Some(Rect::new(0.0, f64::NAN, 10.0, 10.0)),
                Some(Rect::new(0.0, 0.0, 10.0, 10.0)),
            ],
            origin: Point::ORIGIN,
        };
        let bounds = BoundsIndex::measure(&m, PositioningSpace::Fixed);
        assert_eq!(bounds.len(), 3);
        assert_eq!(bounds.get(0), None);
        assert_eq!(bounds.get(1), None);
        assert!(bounds.get(2).is_some());
    }

    #[test]
    fn rebuild_replaces_entries_and_bumps_revision() {
        let three = [Rect::new(0.0, 0.0, 10.0, 10.0); 3];
        let one = [Rect::new(0.0, 5.0, 10.0, 15.0)];

        let mut bounds = BoundsIndex::measure(&three[..], PositioningSpace::Fixed);
        assert_eq!(bounds.len(), 3);
        assert_eq!(bounds.revision(), 1);

        bounds.rebuild(&one[..], PositioningSpace::Fixed);
        assert_eq!(bounds.len(), 1);
        assert_eq!(bounds.get(0), Some(one[0]));
        assert_eq!(bounds.revision(), 2);
    }

    #[test]
    fn span_edges_are_exclusive() {
        let span = Axis::Vertical.span(Rect::new(0.0, 10.0, 5.0, 30.0));
        assert_eq!(span.start, 10.0);
        assert_eq!(span.end(), 30.0);
        assert!(!span.contains(10.0));
        assert!(span.contains(10.5));
        assert!(!span.contains(30.0));

        let span = Axis::Horizontal.span(Rect::new(4.0, 0.0, 8.0, 100.0));
        assert_eq!(span.start, 4.0);
        assert_eq!(span.extent, 4.0);
    }
}
