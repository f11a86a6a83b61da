//! Frame rendering for the watchface.
//!
//! # Frame Composition
//!
//! | Band | Field | Style | Size |
//! |------|-------|-------|------|
//! | top | date `MM/DD` | foreground | secondary |
//! | middle | time `HH:MM` | background | primary |
//! | bottom | steps | foreground | secondary |
//!
//! Every field uses [`current_color`], so the whole face turns orange when the
//! battery is low. The steps band stays empty until a step count is known.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::canvas::{Canvas, Fonts};
use crate::colors::{current_color, legible_over};
use crate::config::{BG_INSET_SIZE, BORDER_RADIUS, CAP_CENTER_BIAS_DIVISOR, FONT_SIZE_PRIMARY, FONT_SIZE_SECONDARY};
use crate::format::{ClockStyle, format_date, format_steps, format_time};
use crate::layout::bounds_calc;
use crate::state::DisplayState;

/// How a field is painted.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DrawStyle {
    /// Rounded background in the field color, text in a contrasting color.
    Background,
    /// Text only, in the field color.
    Foreground,
}

/// Point the text of a `font_size` field is centered on inside `bounds`.
pub const fn text_anchor(
    bounds: &Rectangle,
    font_size: u32,
) -> Point {
    let dy = font_size as i32 / CAP_CENTER_BIAS_DIVISOR;
    Point::new(
        bounds.top_left.x + (bounds.size.width / 2) as i32,
        bounds.top_left.y + (bounds.size.height / 2) as i32 + dy,
    )
}

/// Area of the rounded background behind a [`DrawStyle::Background`] field.
pub const fn background_area(bounds: &Rectangle) -> Rectangle {
    Rectangle::new(
        Point::new(bounds.top_left.x, bounds.top_left.y + BG_INSET_SIZE as i32),
        Size::new(bounds.size.width, bounds.size.height.saturating_sub(BG_INSET_SIZE * 2)),
    )
}

/// Draw one line of text centered in `bounds` with the bold typeface.
pub fn draw_string<C>(
    canvas: &mut C,
    fonts: &Fonts<C::Font>,
    style: DrawStyle,
    bounds: Rectangle,
    color: Rgb565,
    font_size: u32,
    text: &str,
) -> Result<(), C::Error>
where
    C: Canvas,
{
    let fg_color = match style {
        DrawStyle::Background => {
            canvas.fill_rounded_rect(background_area(&bounds), BORDER_RADIUS, color)?;
            legible_over(color)
        }
        DrawStyle::Foreground => color,
    };

    canvas.draw_centered_text(text, text_anchor(&bounds, font_size), font_size, &fonts.bold, fg_color)
}

/// Time on a rounded background.
pub fn draw_time<C>(
    canvas: &mut C,
    fonts: &Fonts<C::Font>,
    state: &DisplayState,
    clock_style: ClockStyle,
    font_size: u32,
    bounds: Rectangle,
) -> Result<(), C::Error>
where
    C: Canvas,
{
    let text = format_time(state.hours, state.minutes, clock_style);
    draw_string(
        canvas,
        fonts,
        DrawStyle::Background,
        bounds,
        current_color(state.battery_percent),
        font_size,
        &text,
    )
}

/// Month and day.
pub fn draw_date<C>(
    canvas: &mut C,
    fonts: &Fonts<C::Font>,
    state: &DisplayState,
    font_size: u32,
    bounds: Rectangle,
) -> Result<(), C::Error>
where
    C: Canvas,
{
    let text = format_date(state.month, state.date);
    draw_string(
        canvas,
        fonts,
        DrawStyle::Foreground,
        bounds,
        current_color(state.battery_percent),
        font_size,
        &text,
    )
}

/// Step count. Draws nothing while the count is unknown.
pub fn draw_steps<C>(
    canvas: &mut C,
    fonts: &Fonts<C::Font>,
    state: &DisplayState,
    font_size: u32,
    bounds: Rectangle,
) -> Result<(), C::Error>
where
    C: Canvas,
{
    let Some(text) = format_steps(state.steps) else {
        return Ok(());
    };
    draw_string(
        canvas,
        fonts,
        DrawStyle::Foreground,
        bounds,
        current_color(state.battery_percent),
        font_size,
        &text,
    )
}

/// Render a full frame into `bounds`.
///
/// `clock_style` is the platform preference at the time of this frame.
pub fn draw_main<C>(
    canvas: &mut C,
    fonts: &Fonts<C::Font>,
    state: &DisplayState,
    clock_style: ClockStyle,
    bounds: Rectangle,
) -> Result<(), C::Error>
where
    C: Canvas,
{
    let bands = bounds_calc(bounds);
    draw_date(canvas, fonts, state, FONT_SIZE_SECONDARY, bands.top)?;
    draw_time(canvas, fonts, state, clock_style, FONT_SIZE_PRIMARY, bands.middle)?;
    draw_steps(canvas, fonts, state, FONT_SIZE_SECONDARY, bands.bottom)
}

// =============================================================================
// Unit Tests
// =============================================================================
