//! Timing constants for the simulator.
//!
//! These use `std::time::Duration`, which the `no_std` common crate does not
//! have, so they live here.

use std::time::Duration;

/// Target frame time (20 FPS). The main loop sleeps if the frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(50);
