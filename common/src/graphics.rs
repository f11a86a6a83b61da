//! `embedded-graphics` implementation of the canvas capability.
//!
//! # Typefaces
//!
//! Fonts are the ProFont bitmap ladder (7pt to 24pt), drawn at an integer
//! scale. A requested cap height selects the face and scale whose scaled cap
//! height comes closest without exceeding it; on a tie the larger face (smaller
//! scale) wins. Requests below the smallest face use the smallest face unscaled.
//!
//! | Cap height | Face | Scale |
//! |------------|------|-------|
//! | 32 | 9pt | 4 |
//! | 36 | 10pt | 4 |
//! | 48 | 24pt | 2 |
//! | 52 | 14pt | 4 |
//!
//! ProFont ships a single weight, so the bold typeface is drawn with a second
//! pass one display pixel to the right.
//!
//! # Text Placement
//!
//! Text is centered horizontally on the anchor. Vertically, the anchor marks
//! the middle of the cap height: the baseline sits half a cap height below it.
//! Glyphs are scaled about the anchor, so centering holds at every scale.

use embedded_graphics::Pixel;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder};
use profont::{
    PROFONT_7_POINT,
    PROFONT_9_POINT,
    PROFONT_10_POINT,
    PROFONT_12_POINT,
    PROFONT_14_POINT,
    PROFONT_18_POINT,
    PROFONT_24_POINT,
};

use crate::canvas::{Canvas, FontLoader, FontResource};

/// Centered on the anchor, anchor's y is the baseline.
const CAP_CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Alphabetic)
    .build();

/// ProFont faces, smallest first.
const PROFONT_LADDER: &[&MonoFont<'static>] = &[
    &PROFONT_7_POINT,
    &PROFONT_9_POINT,
    &PROFONT_10_POINT,
    &PROFONT_12_POINT,
    &PROFONT_14_POINT,
    &PROFONT_18_POINT,
    &PROFONT_24_POINT,
];

/// Cap height of a mono face, taken as its baseline offset.
#[inline]
const fn face_cap_height(face: &MonoFont<'_>) -> u32 { face.baseline }

/// A bitmap face at an integer scale.
#[derive(Clone, Copy)]
pub struct ScaledFace {
    pub face: &'static MonoFont<'static>,
    pub scale: u32,
}

impl ScaledFace {
    /// Cap height in display pixels.
    #[inline]
    pub const fn cap_height(&self) -> u32 { face_cap_height(self.face) * self.scale }

    /// Glyph cell size in display pixels.
    #[inline]
    pub const fn glyph_size(&self) -> Size {
        Size::new(
            self.face.character_size.width * self.scale,
            self.face.character_size.height * self.scale,
        )
    }
}

// =============================================================================
// Typeface Handles
// =============================================================================

/// A loaded typeface: a ladder of bitmap faces plus a weight.
#[derive(Clone, Copy)]
pub struct Typeface {
    faces: &'static [&'static MonoFont<'static>],
    /// Extra one-pixel passes to the right (0 = regular, 1 = bold).
    strike: u8,
}

impl Typeface {
    /// ProFont, single pass.
    pub const fn regular() -> Self {
        Self {
            faces: PROFONT_LADDER,
            strike: 0,
        }
    }

    /// ProFont, double strike.
    pub const fn bold() -> Self {
        Self {
            faces: PROFONT_LADDER,
            strike: 1,
        }
    }

    /// Whether this typeface is drawn with the extra pass.
    #[inline]
    pub const fn is_bold(&self) -> bool { self.strike > 0 }

    /// Face and scale with the largest cap height not above `cap_height`.
    pub fn face_for(
        &self,
        cap_height: u32,
    ) -> ScaledFace {
        let smallest = ScaledFace {
            face: self.faces.first().copied().unwrap_or(&PROFONT_7_POINT),
            scale: 1,
        };

        // Largest face first, so ties keep the smaller scale
        self.faces
            .iter()
            .rev()
            .filter_map(|&face| {
                let scale = cap_height / face_cap_height(face).max(1);
                (scale > 0).then_some(ScaledFace { face, scale })
            })
            .fold(None, |best: Option<ScaledFace>, candidate| match best {
                Some(b) if b.cap_height() >= candidate.cap_height() => Some(b),
                _ => Some(candidate),
            })
            .unwrap_or(smallest)
    }
}

/// Resolves bundled font resources to ProFont typefaces.
#[derive(Clone, Copy, Default, Debug)]
pub struct MonoFontLoader;

impl FontLoader for MonoFontLoader {
    type Font = Typeface;

    fn load_font(
        &mut self,
        resource: FontResource,
    ) -> Typeface {
        match resource {
            FontResource::NotoSansRegular => Typeface::regular(),
            FontResource::NotoSansBold => Typeface::bold(),
        }
    }
}

// =============================================================================
// Integer Scaling
// =============================================================================

/// Draw target adapter that magnifies everything about `origin`.
///
/// A pixel at `origin + d` lands as a `scale` x `scale` block at
/// `origin + d * scale` on the wrapped target.
struct Scaled<'a, D> {
    target: &'a mut D,
    origin: Point,
    scale: u32,
}

impl<D> Dimensions for Scaled<'_, D>
where
    D: DrawTarget,
{
    fn bounding_box(&self) -> Rectangle {
        let bounds = self.target.bounding_box();
        let Some(bottom_right) = bounds.bottom_right() else {
            return bounds;
        };
        let scale = self.scale as i32;
        let unscale = |p: Point| {
            self.origin
                + Point::new(
                    (p.x - self.origin.x).div_euclid(scale),
                    (p.y - self.origin.y).div_euclid(scale),
                )
        };
        Rectangle::with_corners(unscale(bounds.top_left), unscale(bottom_right))
    }
}

impl<D> DrawTarget for Scaled<'_, D>
where
    D: DrawTarget,
{
    type Color = D::Color;
    type Error = D::Error;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), D::Error>
    where
        I: IntoIterator<Item = Pixel<D::Color>>,
    {
        let block = Size::new_equal(self.scale);
        for Pixel(point, color) in pixels {
            let top_left = self.origin + (point - self.origin) * self.scale as i32;
            self.target.fill_solid(&Rectangle::new(top_left, block), color)?;
        }
        Ok(())
    }
}

// =============================================================================
// Draw Target Canvas
// =============================================================================

/// Canvas over any `Rgb565` draw target, borrowed for one frame.
pub struct GraphicsCanvas<'a, D> {
    target: &'a mut D,
}

impl<'a, D> GraphicsCanvas<'a, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: &'a mut D) -> Self { Self { target } }
}

impl<D> Canvas for GraphicsCanvas<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Font = Typeface;
    type Error = D::Error;

    fn fill_rounded_rect(
        &mut self,
        area: Rectangle,
        radius: u32,
        color: Rgb565,
    ) -> Result<(), D::Error> {
        if area.is_zero_sized() {
            return Ok(());
        }
        RoundedRectangle::with_equal_corners(area, Size::new_equal(radius))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(self.target)
    }

    fn draw_centered_text(
        &mut self,
        text: &str,
        anchor: Point,
        cap_height: u32,
        font: &Typeface,
        color: Rgb565,
    ) -> Result<(), D::Error> {
        let sized = font.face_for(cap_height);
        let style = MonoTextStyle::new(sized.face, color);
        let baseline_y = anchor.y + (sized.cap_height() / 2) as i32;

        for pass in 0..=i32::from(font.strike) {
            let origin = Point::new(anchor.x + pass, baseline_y);
            let mut scaled = Scaled {
                target: &mut *self.target,
                origin,
                scale: sized.scale,
            };
            Text::with_text_style(text, origin, style, CAP_CENTERED).draw(&mut scaled)?;
        }
        Ok(())
    }
}
