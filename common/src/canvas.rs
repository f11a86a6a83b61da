//! Drawing and font capabilities the renderer is given.
//!
//! The renderer never touches a display directly. Hosts hand it a [`Canvas`]
//! for one frame and the fonts they loaded at startup through a
//! [`FontLoader`]. [`crate::graphics`] implements both on top of
//! `embedded-graphics`; tests use a recording canvas.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::Point;
use embedded_graphics::primitives::Rectangle;

/// Bundled font assets.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontResource {
    NotoSansRegular,
    NotoSansBold,
}

/// Loads bundled fonts into handles the canvas understands.
pub trait FontLoader {
    /// Opaque font handle.
    type Font;

    /// Load `resource`. Bundled assets are always present.
    fn load_font(
        &mut self,
        resource: FontResource,
    ) -> Self::Font;
}

/// The two typefaces the watchface uses.
#[derive(Clone, Copy, Debug)]
pub struct Fonts<F> {
    pub regular: F,
    pub bold: F,
}

impl<F> Fonts<F> {
    /// Load both typefaces.
    pub fn load<L>(loader: &mut L) -> Self
    where
        L: FontLoader<Font = F>,
    {
        Self {
            regular: loader.load_font(FontResource::NotoSansRegular),
            bold: loader.load_font(FontResource::NotoSansBold),
        }
    }
}

/// Drawing operations for one frame.
pub trait Canvas {
    /// Font handle accepted by [`Canvas::draw_centered_text`].
    type Font;
    /// Error raised by the underlying surface.
    type Error;

    /// Fill `area` with `color`, corners rounded by `radius` pixels.
    fn fill_rounded_rect(
        &mut self,
        area: Rectangle,
        radius: u32,
        color: Rgb565,
    ) -> Result<(), Self::Error>;

    /// Draw one line of `text`, horizontally centered on `anchor.x`, with the
    /// middle of its cap height on `anchor.y`.
    fn draw_centered_text(
        &mut self,
        text: &str,
        anchor: Point,
        cap_height: u32,
        font: &Self::Font,
        color: Rgb565,
    ) -> Result<(), Self::Error>;
}
