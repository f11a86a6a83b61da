//! Display and layout configuration constants.
//!
//! The panel variant is a build-time switch: enable the `tall-display` feature
//! for the 200x228 panel (Pebble Time 2 class), otherwise the 144x168 panel is
//! assumed. Font sizes follow the panel so text keeps the same proportions.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
#[cfg(feature = "tall-display")]
pub const SCREEN_WIDTH: u32 = 200;

/// Display height in pixels.
#[cfg(feature = "tall-display")]
pub const SCREEN_HEIGHT: u32 = 228;

/// Display width in pixels.
#[cfg(not(feature = "tall-display"))]
pub const SCREEN_WIDTH: u32 = 144;

/// Display height in pixels.
#[cfg(not(feature = "tall-display"))]
pub const SCREEN_HEIGHT: u32 = 168;

// =============================================================================
// Font Sizes (cap height in pixels)
// =============================================================================

/// Time (middle band).
#[cfg(feature = "tall-display")]
pub const FONT_SIZE_PRIMARY: u32 = 52;

/// Date and steps (top and bottom bands).
#[cfg(feature = "tall-display")]
pub const FONT_SIZE_SECONDARY: u32 = 48;

/// Time (middle band).
#[cfg(not(feature = "tall-display"))]
pub const FONT_SIZE_PRIMARY: u32 = 36;

/// Date and steps (top and bottom bands).
#[cfg(not(feature = "tall-display"))]
pub const FONT_SIZE_SECONDARY: u32 = 32;

const _: () = assert!(FONT_SIZE_SECONDARY < FONT_SIZE_PRIMARY);

// =============================================================================
// Band Layout
// =============================================================================

/// Number of equal units the surface height is split into.
pub const BAND_UNITS: u32 = 16;

/// Units given to the date band and to the steps band.
pub const SMALL_BAND_UNITS: u32 = 5;

/// Units given to the time band (plus any division remainder).
pub const LARGE_BAND_UNITS: u32 = 6;

const _: () = assert!(SMALL_BAND_UNITS * 2 + LARGE_BAND_UNITS == BAND_UNITS);

// =============================================================================
// Text Backgrounds
// =============================================================================

/// Corner radius of the time background.
pub const BORDER_RADIUS: u32 = 8;

/// Vertical inset of the time background inside its band.
pub const BG_INSET_SIZE: u32 = 4;

/// Vertical centering bias: text is nudged by `font_size / CAP_CENTER_BIAS_DIVISOR`.
///
/// Visual tuning value for digit glyphs sitting slightly low on their cap line.
pub const CAP_CENTER_BIAS_DIVISOR: i32 = -20;
