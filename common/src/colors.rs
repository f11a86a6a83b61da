//! Color constants and contrast helpers for the watchface.
//!
//! All colors are `Rgb565`, the native format of the ST7789 panel and of the
//! simulator display. Standard colors come from the `RgbColor` trait constants.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::IntoStorage;

use crate::thresholds::is_low_battery;

// =============================================================================
// Palette
// =============================================================================

/// Window background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Neutral foreground used while the battery is healthy.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Low-battery alert color (0xFF5555).
/// RGB565: (31, 21, 10).
pub const SUNSET_ORANGE: Rgb565 = Rgb565::new(31, 21, 10);

/// Background color of the watchface window.
pub const BACKGROUND: Rgb565 = BLACK;

/// Foreground used while the battery is above the low threshold.
pub const NEUTRAL: Rgb565 = WHITE;

/// Foreground used once the battery reaches the low threshold.
pub const ALERT: Rgb565 = SUNSET_ORANGE;

// =============================================================================
// Style Policy
// =============================================================================

/// Foreground color for every field, picked from the battery level.
#[inline]
pub const fn current_color(battery_percent: u8) -> Rgb565 { if is_low_battery(battery_percent) { ALERT } else { NEUTRAL } }

/// Text color that stays readable on top of `bg`.
///
/// Dark backgrounds get white text, light backgrounds get black text.
#[inline]
pub fn legible_over(bg: Rgb565) -> Rgb565 {
    let luma = calculate_luminance(bg);
    if luma < 128 { WHITE } else { BLACK }
}

/// Approximate perceived brightness (0-255) of an Rgb565 color.
///
/// Channels are expanded to 8 bits, then weighted 77/150/29 (sum 256).
#[inline]
pub fn calculate_luminance(color: Rgb565) -> u32 {
    let raw = color.into_storage();
    let r5 = u32::from((raw >> 11) & 0x1F);
    let g6 = u32::from((raw >> 5) & 0x3F);
    let b5 = u32::from(raw & 0x1F);

    let r8 = (r5 << 3) | (r5 >> 2);
    let g8 = (g6 << 2) | (g6 >> 4);
    let b8 = (b5 << 3) | (b5 >> 2);

    (r8 * 77 + g8 * 150 + b8 * 29) >> 8
}
