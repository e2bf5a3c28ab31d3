// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logging shims.
//!
//! With the `tracing` feature these are the `tracing` macros; without it they
//! expand to nothing, so call sites never need their own `cfg`.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use debug;
#[cfg(not(feature = "tracing"))]
pub(crate) use trace;
