// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit-testing the dragged pointer against measured item bounds.
//!
//! Only the primary axis is considered: in a vertical list a pointer that has
//! drifted sideways out of the column still hovers the row at its height.

use kurbo::Point;

use crate::bounds::{Axis, BoundsIndex};

/// Returns the first index whose span along `axis` strictly contains `pointer`.
///
/// `pointer` must already be in the space of `bounds`
/// (see [`BoundsIndex::localize`]). A pointer exactly on an edge matches
/// neither neighbor. Missing entries never match. When spans overlap, the
/// lowest index wins.
///
/// ```
/// use kurbo::{Point, Rect};
/// use understory_reorder::{Axis, BoundsIndex, PositioningSpace};
/// use understory_reorder::hit::hit_test;
///
/// let rows = [Rect::new(0.0, 0.0, 100.0, 20.0), Rect::new(0.0, 20.0, 100.0, 40.0)];
/// let bounds = BoundsIndex::measure(&rows[..], PositioningSpace::Fixed);
///
/// assert_eq!(hit_test(Point::new(10.0, 25.0), &bounds, Axis::Vertical), Some(1));
/// assert_eq!(hit_test(Point::new(10.0, 20.0), &bounds, Axis::Vertical), None);
/// ```
#[must_use]
pub fn hit_test(pointer: Point, bounds: &BoundsIndex, axis: Axis) -> Option<usize> {
    let along = axis.coordinate(pointer);
    if !along.is_finite() {
        return None;
    }
    bounds
        .iter()
        .find(|(_, rect)| rect.is_some_and(|r| axis.span(r).contains(along)))
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PositioningSpace;
    use alloc::vec::Vec;
    use kurbo::Rect;

    fn rows(n: usize, height: f64) -> Vec<Rect> {
        (0..n)
            .map(|i| {
                let top = i as f64 * height;
                Rect::new(0.0, top, 100.0, top + height)
            })
            .collect()
    }

    #[test]
    fn finds_row_under_pointer() {
        let bounds = BoundsIndex::measure(&rows(5, 10.0)[..], PositioningSpace::Fixed);
        assert_eq!(hit_test(Point::new(50.0, 5.0), &bounds, Axis::Vertical), Some(0));
        assert_eq!(hit_test(Point::new(50.0, 45.0), &bounds, Axis::Vertical), Some(4));
    }

    #[test]
    fn repeated_queries_agree() {
        let bounds = BoundsIndex::measure(&rows(5, 10.0)[..], PositioningSpace::Fixed);
        let p = Point::new(3.0, 27.0);
        let first = hit_test(p, &bounds, Axis::Vertical);
        for _ in 0..10 {
            assert_eq!(hit_test(p, &bounds, Axis::Vertical), first);
        }
        assert_eq!(first, Some(2));
    }

    #[test]
    fn edges_match_nothing() {
        let bounds = BoundsIndex::measure(&rows(3, 10.0)[..], PositioningSpace::Fixed);
        for y in [0.0, 10.0, 20.0, 30.0] {
            assert_eq!(hit_test(Point::new(50.0, y), &bounds, Axis::Vertical), None);
        }
    }

    #[test]
    fn outside_every_row_is_none() {
        let bounds = BoundsIndex::measure(&rows(3, 10.0)[..], PositioningSpace::Fixed);
        assert_eq!(hit_test(Point::new(50.0, -5.0), &bounds, Axis::Vertical), None);
        assert_eq!(hit_test(Point::new(50.0, 31.0), &bounds, Axis::Vertical), None);
    }

    #[test]
    fn cross_axis_position_is_ignored() {
        let bounds = BoundsIndex::measure(&rows(3, 10.0)[..], PositioningSpace::Fixed);
        assert_eq!(
            hit_test(Point::new(-500.0, 15.0), &bounds, Axis::Vertical),
            Some(1)
        );
    }

    #[test]
    fn horizontal_axis_uses_x() {
        let cols = [
            Rect::new(0.0, 0.0, 50.0, 10.0),
            Rect::new(50.0, 0.0, 100.0, 10.0),
        ];
        let bounds = BoundsIndex::measure(&cols[..], PositioningSpace::Fixed);
        assert_eq!(
            hit_test(Point::new(75.0, 500.0), &bounds, Axis::Horizontal),
            Some(1)
        );
        assert_eq!(hit_test(Point::new(50.0, 5.0), &bounds, Axis::Horizontal), None);
    }

    #[test]
    fn overlapping_rows_prefer_lowest_index() {
        let overlapping = [
            Rect::new(0.0, 0.0, 10.0, 30.0),
            Rect::new(0.0, 10.0, 10.0, 40.0),
        ];
        let bounds = BoundsIndex::measure(&overlapping[..], PositioningSpace::Fixed);
        assert_eq!(hit_test(Point::new(5.0, 20.0), &bounds, Axis::Vertical), Some(0));
    }

    #[test]
    fn unmeasured_index_matches_nothing() {
        let bounds = BoundsIndex::new();
        assert_eq!(hit_test(Point::new(5.0, 5.0), &bounds, Axis::Vertical), None);
    }

    #[test]
    fn nan_pointer_matches_nothing() {
        let bounds = BoundsIndex::measure(&rows(3, 10.0)[..], PositioningSpace::Fixed);
        assert_eq!(
            hit_test(Point::new(0.0, f64::NAN), &bounds, Axis::Vertical),
            None
        );
    }
}
