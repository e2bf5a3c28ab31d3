// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live preview: the sequence as it would look if the drag were released now.
//!
//! The dragged element is *moved* to the hover slot and everything between
//! shifts by one; it is never swapped with the hovered element.
//!
//! ```
//! use understory_reorder::preview::preview;
//!
//! let items = ['A', 'B', 'C', 'D'];
//! assert_eq!(&*preview(&items, Some(0), Some(2)), &['B', 'C', 'A', 'D']);
//! assert_eq!(&*preview(&items, Some(3), Some(1)), &['A', 'D', 'B', 'C']);
//! // Nothing hovered: the input comes back untouched.
//! assert_eq!(&*preview(&items, Some(0), None), &items);
//! ```

use alloc::borrow::Cow;

/// Returns `items` with the element at `active` moved to `hover`.
///
/// Borrows the input unchanged when either index is `None` or out of range,
/// or when they are equal.
#[must_use]
pub fn preview<T: Clone>(
    items: &[T],
    active: Option<usize>,
    hover: Option<usize>,
) -> Cow<'_, [T]> {
    let Some((from, to)) = valid_move(items.len(), active, hover) else {
        return Cow::Borrowed(items);
    };
    let mut moved = items.to_vec();
    if from < to {
        moved[from..=to].rotate_left(1);
    } else {
        moved[to..=from].rotate_right(1);
    }
    Cow::Owned(moved)
}

/// Maps a slot of the previewed sequence back to an index in the source sequence.
///
/// Returns `None` when `display >= len`. Lets hosts render the preview without
/// allocating a reordered copy.
///
/// ```
/// use understory_reorder::preview::source_index;
///
/// // [A, B, C, D] with A dragged onto C displays as [B, C, A, D].
/// let order: Vec<_> = (0..4).filter_map(|i| source_index(i, 4, Some(0), Some(2))).collect();
/// assert_eq!(order, [1, 2, 0, 3]);
/// ```
#[must_use]
pub fn source_index(
    display: usize,
    len: usize,
    active: Option<usize>,
    hover: Option<usize>,
) -> Option<usize> {
    if display >= len {
        return None;
    }
    let Some((from, to)) = valid_move(len, active, hover) else {
        return Some(display);
    };
    let source = if display == to {
        from
    } else if from < to && (from..to).contains(&display) {
        display + 1
    } else if to < from && (to + 1..=from).contains(&display) {
        display - 1
    } else {
        display
    };
    Some(source)
}

fn valid_move(len: usize, active: Option<usize>, hover: Option<usize>) -> Option<(usize, usize)> {
    let (from, to) = (active?, hover?);
    (from != to && from < len && to < len).then_some((from, to))
}
