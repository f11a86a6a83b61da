//! Platform-agnostic watchface logic.
//!
//! Shared between the desktop simulator and the Pico 2 firmware:
//!
//! - [`layout`]: Three-band screen partition
//! - [`colors`]: Battery-driven color theme
//! - [`format`]: Time, date, and step field text
//! - [`render`]: Frame composition over a [`canvas::Canvas`]
//! - [`graphics`]: `embedded-graphics` canvas and ProFont typefaces
//! - [`app`]: Startup, event dispatch, and redraw control
//! - [`events`], [`clock`], [`state`], [`window`]: Supporting types
//! - [`battery`]: Cell voltage to charge percentage
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests. Logging goes through the `log`
//! facade, or through `defmt` when the `defmt` feature is enabled, so firmware
//! log lines reach the same RTT channel as its own.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod app;
pub mod battery;
pub mod canvas;
pub mod clock;
pub mod colors;
pub mod config;
pub mod events;
pub mod format;
pub mod graphics;
pub mod layout;
pub mod render;
pub mod state;
pub mod thresholds;
pub mod window;

cfg_if::cfg_if! {
    if #[cfg(feature = "defmt")] {
        pub(crate) use defmt::{debug, info};
    } else {
        pub(crate) use log::{debug, info};
    }
}

// Re-export commonly used items
pub use app::{Platform, WatchFace};
pub use clock::WallTime;
pub use colors::*;
pub use config::*;
pub use events::{BatteryChargeState, HealthEventKind, WatchEvent};
pub use format::ClockStyle;
pub use graphics::{GraphicsCanvas, MonoFontLoader, ScaledFace, Typeface};
