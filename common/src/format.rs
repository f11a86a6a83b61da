//! Text for the three watchface fields.
//!
//! Everything is written into fixed-capacity `heapless::String`s, so no
//! allocator is needed on the firmware.

use core::fmt::Write;

use heapless::String;

use crate::thresholds::{STEPS_DISPLAY_MAX, STEPS_OVERFLOW_TEXT};

/// Capacity of a formatted field. `HH:MM`, `MM/DD` and five-digit steps all fit.
pub const FIELD_LEN: usize = 8;

/// A formatted field, ready to draw.
pub type FieldText = String<FIELD_LEN>;

/// User preference for how hours are shown.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockStyle {
    /// 1-12, midnight and noon shown as 12.
    TwelveHour,
    /// 0-23.
    #[default]
    TwentyFourHour,
}

impl ClockStyle {
    /// Build from the platform's "24h style" flag.
    #[inline]
    pub const fn from_24h_flag(is_24h: bool) -> Self { if is_24h { Self::TwentyFourHour } else { Self::TwelveHour } }

    /// Switch to the other style.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::TwelveHour => Self::TwentyFourHour,
            Self::TwentyFourHour => Self::TwelveHour,
        }
    }
}

/// Convert a 0-23 hour into the hour shown for `style`.
pub const fn preferred_hours(
    hours: u8,
    style: ClockStyle,
) -> u8 {
    match style {
        ClockStyle::TwentyFourHour => hours,
        ClockStyle::TwelveHour => match hours % 12 {
            0 => 12,
            h => h,
        },
    }
}

/// `HH:MM`, hour converted for `style`.
pub fn format_time(
    hours: u8,
    minutes: u8,
    style: ClockStyle,
) -> FieldText {
    let mut s = FieldText::new();
    let _ = write!(s, "{:02}:{:02}", preferred_hours(hours, style), minutes);
    s
}

/// `MM/DD`.
pub fn format_date(
    month: u8,
    date: u8,
) -> FieldText {
    let mut s = FieldText::new();
    let _ = write!(s, "{month:02}/{date:02}");
    s
}

/// Step count text, or `None` when the count is unknown and nothing should be drawn.
pub fn format_steps(steps: Option<u32>) -> Option<FieldText> {
    let steps = steps?;
    let mut s = FieldText::new();
    if steps <= STEPS_DISPLAY_MAX {
        let _ = write!(s, "{steps}");
    } else {
        let _ = s.push_str(STEPS_OVERFLOW_TEXT);
    }
    Some(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferred_hours_24h_is_identity() {
        for h in 0..24 {
            assert_eq!(preferred_hours(h, ClockStyle::TwentyFourHour), h);
        }
    }

    #[test]
    fn test_preferred_hours_12h() {
        assert_eq!(preferred_hours(0, ClockStyle::TwelveHour), 12);
        assert_eq!(preferred_hours(12, ClockStyle::TwelveHour), 12);
        assert_eq!(preferred_hours(13, ClockStyle::TwelveHour), 1);
        assert_eq!(preferred_hours(23, ClockStyle::TwelveHour), 11);
        for h in 0..24 {
            let shown = preferred_hours(h, ClockStyle::TwelveHour);
            assert!((1..=12).contains(&shown), "hour {h} shown as {shown}");
        }
    }

    #[test]
    fn test_format_time_zero_padded() {
        assert_eq!(format_time(9, 5, ClockStyle::TwentyFourHour), "09:05");
        assert_eq!(format_time(0, 0, ClockStyle::TwentyFourHour), "00:00");
        assert_eq!(format_time(23, 59, ClockStyle::TwentyFourHour), "23:59");
    }

    #[test]
    fn test_format_time_12h() {
        assert_eq!(format_time(0, 0, ClockStyle::TwelveHour), "12:00");
        assert_eq!(format_time(13, 7, ClockStyle::TwelveHour), "01:07");
    }

    #[test]
    fn test_format_date_zero_padded() {
        assert_eq!(format_date(3, 4), "03/04");
        assert_eq!(format_date(12, 31), "12/31");
        assert_eq!(format_date(1, 1), "01/01");
    }

    #[test]
    fn test_format_steps() {
        assert_eq!(format_steps(None), None);
        assert_eq!(format_steps(Some(0)).as_deref(), Some("0"));
        assert_eq!(format_steps(Some(99_999)).as_deref(), Some("99999"));
        assert_eq!(format_steps(Some(100_000)).as_deref(), Some("..."));
        assert_eq!(format_steps(Some(u32::MAX)).as_deref(), Some("..."));
    }

    #[test]
    fn test_clock_style_from_flag() {
        assert_eq!(ClockStyle::from_24h_flag(true), ClockStyle::TwentyFourHour);
        assert_eq!(ClockStyle::from_24h_flag(false), ClockStyle::TwelveHour);
        assert_eq!(ClockStyle::TwelveHour.toggle(), ClockStyle::TwentyFourHour);
    }
}
