//! Wall-clock time as delivered by the minute tick.

/// Local wall time fields the watchface displays.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallTime {
    /// 0-23.
    pub hour: u8,
    /// 0-59.
    pub minute: u8,
    /// 1-12.
    pub month: u8,
    /// Day of month, 1-31.
    pub day: u8,
}

impl WallTime {
    /// Midnight on January 1st.
    pub const MIDNIGHT_JAN_1: Self = Self::new(0, 0, 1, 1);

    pub const fn new(
        hour: u8,
        minute: u8,
        month: u8,
        day: u8,
    ) -> Self {
        Self {
            hour,
            minute,
            month,
            day,
        }
    }

    /// True at the top of the hour.
    #[inline]
    pub const fn is_top_of_hour(&self) -> bool { self.minute == 0 }

    /// Increments the minute. Handles rollover to hours, days and months.
    ///
    /// No year is tracked, so February always has 28 days.
    pub fn advance_minute(&mut self) {
        self.minute += 1;
        if self.minute >= 60 {
            self.minute = 0;
            self.hour += 1;
        }
        if self.hour >= 24 {
            self.hour = 0;
            self.day += 1;
        }
        if self.day > days_in_month(self.month) {
            self.day = 1;
            self.month = self.month % 12 + 1;
        }
    }
}

impl Default for WallTime {
    fn default() -> Self { Self::MIDNIGHT_JAN_1 }
}

/// Days in `month` (1-12) of a non-leap year.
pub const fn days_in_month(month: u8) -> u8 {
    match month {
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
