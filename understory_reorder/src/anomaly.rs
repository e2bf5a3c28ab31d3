// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recoverable anomalies the engine absorbs instead of reporting as errors.

use core::fmt;

/// Something the engine had to ignore or abort to stay consistent.
///
/// None of these reach the host as an error: the engine drops the offending
/// input or falls back to no active drag. The most recent one is available
/// from [`Reorder::last_anomaly`](crate::Reorder::last_anomaly).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Anomaly {
    /// An item was pressed that has no measured bounds.
    StaleMeasurement,
    /// An index no longer exists, either pressed or left behind by a shrinking list.
    OutOfRangeIndex,
    /// An activation timer fired after release, teardown, or a newer press.
    StaleTimerFire,
    /// An input event carried no usable coordinate.
    MalformedInputEvent,
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::StaleMeasurement => "item has no measured bounds",
            Self::OutOfRangeIndex => "item index out of range",
            Self::StaleTimerFire => "stale activation timer",
            Self::MalformedInputEvent => "input event has no usable coordinate",
        })
    }
}

impl core::error::Error for Anomaly {}
