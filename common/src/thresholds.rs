//! Centralized threshold configuration.
//!
//! All thresholds are compile-time constants with validation assertions, so a
//! misconfigured value fails the build instead of rendering wrong colors.

// =============================================================================
// Battery
// =============================================================================

/// Battery level at or below which every field switches to the alert color.
pub const LOW_BATTERY_PERCENT: u8 = 30;

/// Highest charge the battery service can report.
pub const BATTERY_FULL_PERCENT: u8 = 100;

const _: () = assert!(LOW_BATTERY_PERCENT < BATTERY_FULL_PERCENT);

/// Check if the battery is low.
///
/// Returns `true` at or below `LOW_BATTERY_PERCENT` (30%).
#[inline]
pub const fn is_low_battery(percent: u8) -> bool { percent <= LOW_BATTERY_PERCENT }

// =============================================================================
// Step Counter
// =============================================================================

/// Largest step count shown as a number. Anything above renders as `...`.
pub const STEPS_DISPLAY_MAX: u32 = 99_999;

/// Text shown when the step count no longer fits the bottom band.
pub const STEPS_OVERFLOW_TEXT: &str = "...";

// =============================================================================
// Unit Tests
// =============================================================================
