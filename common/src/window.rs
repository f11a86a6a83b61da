//! The single window and layer of the watchface, with redraw tracking.
//!
//! # Redraw Strategy
//!
//! | Trigger | Effect |
//! |---------|--------|
//! | Window load | Layer created dirty (first frame) |
//! | Any event | `mark_dirty` on the layer |
//! | Host frame | `take_dirty` clears the flag, one redraw |
//! | Window unload | Layer destroyed, later marks are ignored |
//!
//! Marking several times between two frames still produces a single redraw.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::colors::BACKGROUND;

/// Full-screen drawing layer.
#[derive(Debug)]
pub struct Layer {
    bounds: Rectangle,
    dirty: bool,
}

impl Layer {
    /// Create a layer covering `bounds`. New layers need a first draw.
    pub const fn new(bounds: Rectangle) -> Self { Self { bounds, dirty: true } }

    /// Area the layer draws into.
    #[inline]
    pub const fn bounds(&self) -> Rectangle { self.bounds }

    /// Request a redraw on the next frame.
    #[inline]
    pub fn mark_dirty(&mut self) { self.dirty = true; }

    /// Check if a redraw is pending.
    #[inline]
    pub const fn is_dirty(&self) -> bool { self.dirty }

    /// Consume the pending redraw request.
    #[inline]
    pub fn take_dirty(&mut self) -> bool { core::mem::replace(&mut self.dirty, false) }
}

/// The watchface window. Owns the layer while loaded.
#[derive(Debug)]
pub struct Window {
    size: Size,
    background: Rgb565,
    layer: Option<Layer>,
}

impl Window {
    /// Create an unloaded window of `size` with the watchface background.
    pub const fn new(size: Size) -> Self {
        Self {
            size,
            background: BACKGROUND,
            layer: None,
        }
    }

    /// Color the host clears the screen with before each frame.
    #[inline]
    pub const fn background(&self) -> Rgb565 { self.background }

    /// Create the full-screen layer.
    pub fn load(&mut self) { self.layer = Some(Layer::new(Rectangle::new(Point::zero(), self.size))); }

    /// Destroy the layer.
    pub fn unload(&mut self) { self.layer = None; }

    /// Check if the window is loaded.
    #[inline]
    pub const fn is_loaded(&self) -> bool { self.layer.is_some() }

    /// The layer, if loaded.
    #[inline]
    pub const fn layer(&self) -> Option<&Layer> { self.layer.as_ref() }

    /// Mark the layer dirty. Does nothing before load or after unload.
    pub fn mark_dirty(&mut self) {
        if let Some(layer) = self.layer.as_mut() {
            layer.mark_dirty();
        }
    }

    /// Bounds to redraw this frame, if a redraw is pending.
    pub fn take_redraw(&mut self) -> Option<Rectangle> {
        let layer = self.layer.as_mut()?;
        layer.take_dirty().then(|| layer.bounds())
    }
}
