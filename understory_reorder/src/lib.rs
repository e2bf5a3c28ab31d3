// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_reorder --heading-base-level=0

//! Understory Reorder: a drag-to-reorder interaction engine for lists.
//!
//! The user presses an item, holds it briefly, drags it over its siblings,
//! and releases to commit the new position. This crate owns the logic of that
//! interaction and nothing else:
//!
//! - [`position`]: normalize mouse and touch input into a single page-space point.
//! - [`bounds`]: an index-keyed table of measured item rectangles, rebuilt
//!   whenever the rendered items change.
//! - [`hit`]: find the item under the pointer along the list's primary axis.
//! - [`session`]: the `Idle → Armed → Dragging` state machine, including the
//!   activation delay and commit rules.
//! - [`preview`]: the live reordered sequence while dragging.
//! - [`ghost`]: where to draw the floating copy of the dragged item.
//!
//! [`Reorder`] ties these together for one mounted list.
//!
//! The crate does not paint, lay out, or style anything. Hosts measure their
//! items through [`Measurer`], route input into the engine, schedule the
//! activation timers it hands back, and react to [`ReorderEvent`]s. Time is
//! a host-supplied millisecond timestamp; the engine never reads a clock.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_reorder::{
//!     PointerInput, PressOutcome, Reorder, ReorderConfig, ReorderEvent,
//! };
//!
//! // Four 20px rows stacked from the top of the page.
//! let rows: Vec<Rect> = (0..4)
//!     .map(|i| Rect::new(0.0, 20.0 * i as f64, 200.0, 20.0 * (i + 1) as f64))
//!     .collect();
//! let mut items = vec!["A", "B", "C", "D"];
//!
//! let mut reorder = Reorder::new(ReorderConfig::default().with_live_preview(true));
//! assert!(reorder.activate()); // install surface-wide move/up listeners now
//! reorder.remeasure(&rows[..]);
//!
//! // Press "A" and hold past the activation delay.
//! let PressOutcome::Armed(timer) =
//!     reorder.press(0, &PointerInput::Mouse(Point::new(10.0, 5.0)), 0)
//! else {
//!     unreachable!();
//! };
//! assert_eq!(reorder.tick(timer.deadline()), Some(ReorderEvent::HoverChanged(Some(0))));
//!
//! // Drag over "C": the preview already shows the move.
//! reorder.pointer_move(&PointerInput::Mouse(Point::new(10.0, 45.0)));
//! assert_eq!(&*reorder.display(&items), &["B", "C", "A", "D"]);
//!
//! // The ghost keeps the grab point under the pointer.
//! assert_eq!(reorder.ghost().unwrap().origin, Point::new(0.0, 40.0));
//!
//! // Release commits; the host applies the move to its data.
//! if let Some(ReorderEvent::Commit { from, to }) = reorder.release() {
//!     let item = items.remove(from);
//!     items.insert(to, item);
//! }
//! assert_eq!(items, ["B", "C", "A", "D"]);
//! ```
//!
//! ## Configuration
//!
//! [`ReorderConfig`] expresses the behavioral variants of a reorderable list:
//! press-and-hold versus immediate activation ([`Activation`]), viewport
//! versus container coordinates ([`PositioningSpace`]), vertical versus
//! horizontal lists ([`Axis`]), live preview, and ghost compensation.
//!
//! ## Anomalies
//!
//! Nothing in this crate returns an error. Input that cannot be used, timers
//! that fire too late, and drags whose items disappear are absorbed by falling
//! back to "no active drag"; the latest such [`Anomaly`] is kept for
//! inspection.
//!
//! ## Features
//!
//! - `std` (default): forwarded to `kurbo`.
//! - `libm`: `no_std` float math for `kurbo`.
//! - `tracing`: log phase transitions and ignored input with `tracing`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod anomaly;
mod config;
mod engine;
mod logging;
mod roles;

pub mod bounds;
pub mod ghost;
pub mod hit;
pub mod position;
pub mod preview;
pub mod session;

pub use anomaly::Anomaly;
pub use bounds::{Axis, BoundsIndex, Measurer, Span};
pub use config::{Activation, DEFAULT_ACTIVATION_DELAY_MS, PositioningSpace, ReorderConfig};
pub use engine::Reorder;
pub use ghost::Ghost;
pub use position::{InputSource, ListenerScope, PointerInput};
pub use roles::ItemRoles;
pub use session::{ActivationTimer, DragSession, Phase, PressOutcome, ReorderEvent};
