// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration: activation timing, coordinate space, axis, and ghost options.
//!
//! Every historical behavior of drag-to-reorder lists maps onto a switch here:
//!
//! - Press-and-hold versus immediate activation is [`Activation`].
//! - Viewport-fixed versus container-relative coordinates is [`PositioningSpace`].
//! - Vertical versus horizontal lists is [`Axis`].
//!
//! ```
//! use kurbo::Vec2;
//! use understory_reorder::{Activation, Axis, ReorderConfig};
//!
//! let config = ReorderConfig::default()
//!     .with_activation(Activation::Immediate)
//!     .with_axis(Axis::Horizontal)
//!     .with_ghost_offset(Vec2::new(4.0, 4.0));
//!
//! assert_eq!(config.activation.delay_ms(), 0);
//! assert!(config.compensate_ghost);
//! ```

use kurbo::{Point, Rect, Vec2};

use crate::bounds::Axis;

/// Default hold time before a press turns into a drag, in milliseconds.
pub const DEFAULT_ACTIVATION_DELAY_MS: u64 = 128;

/// When a press becomes a drag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Activation {
    /// The press starts dragging in the same call.
    Immediate,
    /// The press must be held for this many milliseconds first.
    ///
    /// A release before the delay elapses is a tap and never commits.
    Delayed(u64),
}

impl Activation {
    /// Builds an activation policy from a delay; `0` means [`Activation::Immediate`].
    #[must_use]
    pub const fn from_delay_ms(delay_ms: u64) -> Self {
        if delay_ms == 0 {
            Self::Immediate
        } else {
            Self::Delayed(delay_ms)
        }
    }

    /// Returns the hold time in milliseconds (`0` for immediate activation).
    #[must_use]
    pub const fn delay_ms(self) -> u64 {
        match self {
            Self::Immediate => 0,
            Self::Delayed(ms) => ms,
        }
    }
}

impl Default for Activation {
    fn default() -> Self {
        Self::Delayed(DEFAULT_ACTIVATION_DELAY_MS)
    }
}

/// Coordinate space shared by item bounds, the pointer, and the ghost.
///
/// Pointer samples and measured bounds always arrive in page space. In
/// [`PositioningSpace::Relative`] both are translated by the container origin
/// before use, so the ghost can be positioned inside the container.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PositioningSpace {
    /// Page/viewport coordinates, for a ghost positioned against the viewport.
    #[default]
    Fixed,
    /// Coordinates relative to the list container's origin.
    Relative,
}

impl PositioningSpace {
    /// Maps a page-space point into this space.
    #[must_use]
    pub fn localize(self, point: Point, container_origin: Point) -> Point {
        match self {
            Self::Fixed => point,
            Self::Relative => point - container_origin.to_vec2(),
        }
    }

    /// Maps a page-space rectangle into this space.
    #[must_use]
    pub fn localize_rect(self, rect: Rect, container_origin: Point) -> Rect {
        match self {
            Self::Fixed => rect,
            Self::Relative => rect - container_origin.to_vec2(),
        }
    }
}

/// Configuration for a [`Reorder`](crate::Reorder) engine.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ReorderConfig {
    /// When a press becomes a drag.
    pub activation: Activation,
    /// Coordinate space for bounds, pointer, and ghost.
    pub space: PositioningSpace,
    /// Primary layout axis used for hit-testing.
    pub axis: Axis,
    /// Whether [`Reorder::display`](crate::Reorder::display) shows the move before release.
    pub live_preview: bool,
    /// Keep the grab point under the pointer instead of snapping the ghost's
    /// origin to it.
    pub compensate_ghost: bool,
    /// Extra shift applied to the ghost while compensating.
    ///
    /// Positive values move the ghost right/down relative to where the item
    /// was grabbed. Ignored when `compensate_ghost` is `false`.
    pub ghost_offset: Vec2,
    /// Ignore presses entirely.
    pub disabled: bool,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            activation: Activation::default(),
            space: PositioningSpace::default(),
            axis: Axis::default(),
            live_preview: false,
            compensate_ghost: true,
            ghost_offset: Vec2::ZERO,
            disabled: false,
        }
    }
}

impl ReorderConfig {
    /// Sets the activation policy.
    #[must_use]
    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    /// Sets the activation delay in milliseconds; `0` activates immediately.
    #[must_use]
    pub fn with_activation_delay_ms(self, delay_ms: u64) -> Self {
        self.with_activation(Activation::from_delay_ms(delay_ms))
    }

    /// Sets the positioning space.
    #[must_use]
    pub fn with_space(mut self, space: PositioningSpace) -> Self {
        self.space = space;
        self
    }

    /// Sets the primary axis.
    #[must_use]
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Enables or disables the live preview.
    #[must_use]
    pub fn with_live_preview(mut self, live_preview: bool) -> Self {
        self.live_preview = live_preview;
        self
    }

    /// Enables or disables grab-point compensation for the ghost.
    #[must_use]
    pub fn with_compensate_ghost(mut self, compensate: bool) -> Self {
        self.compensate_ghost = compensate;
        self
    }

    /// Sets the ghost offset.
    #[must_use]
    pub fn with_ghost_offset(mut self, offset: Vec2) -> Self {
        self.ghost_offset = offset;
        self
    }

    /// Disables or re-enables the engine.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}
