//! Band layout for the watchface surface.
//!
//! The surface height is cut into [`BAND_UNITS`] equal units:
//!
//! | Band | Units | Content |
//! |------|-------|---------|
//! | top | 5 | date |
//! | middle | 6 + remainder | time |
//! | bottom | 5 | steps |
//!
//! Whatever is left over from `height / 16` goes to the middle band, so the
//! time always gets the extra pixels.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::config::{BAND_UNITS, LARGE_BAND_UNITS, SMALL_BAND_UNITS};

/// The three full-width bands of the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bands {
    /// Date band.
    pub top: Rectangle,
    /// Time band.
    pub middle: Rectangle,
    /// Steps band.
    pub bottom: Rectangle,
}

/// Split `bounds` into the date, time, and steps bands.
///
/// The bottom band starts at `height - 5 * chunk`, anchored to the surface
/// height rather than to the top band. Layers always have a zero origin, where
/// both readings agree.
pub fn bounds_calc(bounds: Rectangle) -> Bands {
    let x = bounds.top_left.x;
    let y = bounds.top_left.y;
    let w = bounds.size.width;
    let h = bounds.size.height;

    let chunk = h / BAND_UNITS;
    let extra = h - chunk * BAND_UNITS;
    let small = SMALL_BAND_UNITS * chunk;
    let large = LARGE_BAND_UNITS * chunk + extra;

    Bands {
        top: Rectangle::new(Point::new(x, y), Size::new(w, small)),
        middle: Rectangle::new(Point::new(x, y + small as i32), Size::new(w, large)),
        bottom: Rectangle::new(Point::new(x, h as i32 - small as i32), Size::new(w, small)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(
        w: u32,
        h: u32,
    ) -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(w, h))
    }

    fn bottom_edge(r: &Rectangle) -> i32 { r.top_left.y + r.size.height as i32 }

    #[test]
    fn test_regular_panel_bands() {
        let bands = bounds_calc(surface(144, 168));
        // chunk = 10, extra = 8
        assert_eq!(bands.top, Rectangle::new(Point::new(0, 0), Size::new(144, 50)));
        assert_eq!(bands.middle, Rectangle::new(Point::new(0, 50), Size::new(144, 68)));
        assert_eq!(bands.bottom, Rectangle::new(Point::new(0, 118), Size::new(144, 50)));
    }

    #[test]
    fn test_tall_panel_bands() {
        let bands = bounds_calc(surface(200, 228));
        // chunk = 14, extra = 4
        assert_eq!(bands.top.size.height, 70);
        assert_eq!(bands.middle.size.height, 88);
        assert_eq!(bands.bottom.top_left.y, 158);
    }

    #[test]
    fn test_heights_sum_and_spans_contiguous_for_all_heights() {
        for h in 0..=400 {
            let bands = bounds_calc(surface(144, h));
            let total = bands.top.size.height + bands.middle.size.height + bands.bottom.size.height;
            assert_eq!(total, h, "heights must sum to {h}");

            assert_eq!(bands.top.top_left.y, 0);
            assert_eq!(bottom_edge(&bands.top), bands.middle.top_left.y, "gap above time band at h={h}");
            assert_eq!(bottom_edge(&bands.middle), bands.bottom.top_left.y, "gap below time band at h={h}");
            assert_eq!(bottom_edge(&bands.bottom), h as i32);
        }
    }

    #[test]
    fn test_all_bands_span_full_width() {
        for w in [1, 144, 200, 333] {
            let bands = bounds_calc(surface(w, 168));
            assert_eq!(bands.top.size.width, w);
            assert_eq!(bands.middle.size.width, w);
            assert_eq!(bands.bottom.size.width, w);
        }
    }

    #[test]
    fn test_remainder_goes_to_middle_band() {
        // 175 = 16 * 10 + 15
        let bands = bounds_calc(surface(144, 175));
        assert_eq!(bands.top.size.height, 50);
        assert_eq!(bands.middle.size.height, 75);
        assert_eq!(bands.bottom.size.height, 50);
    }

    #[test]
    fn test_tiny_surface_gives_everything_to_time_band() {
        let bands = bounds_calc(surface(144, 15));
        assert_eq!(bands.top.size.height, 0);
        assert_eq!(bands.middle.size.height, 15);
        assert_eq!(bands.bottom, Rectangle::new(Point::new(0, 15), Size::new(144, 0)));
    }

    #[test]
    fn test_bottom_band_anchored_to_surface_height() {
        let bounds = Rectangle::new(Point::new(3, 20), Size::new(144, 168));
        let bands = bounds_calc(bounds);
        assert_eq!(bands.top.top_left, Point::new(3, 20));
        assert_eq!(bands.middle.top_left, Point::new(3, 70));
        // Not 20 + 118: the bottom band ignores the vertical origin
        assert_eq!(bands.bottom.top_left, Point::new(3, 118));
    }
}
