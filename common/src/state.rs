//! Watchface display state.
//!
//! One record holds everything the renderer reads. Event handlers mutate it in
//! place; it lives as long as the application.

use crate::clock::WallTime;
use crate::thresholds::BATTERY_FULL_PERCENT;

/// Current values of every displayed field.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayState {
    /// 0-23.
    pub hours: u8,
    /// 0-59.
    pub minutes: u8,
    /// 1-12.
    pub month: u8,
    /// Day of month, 1-31.
    pub date: u8,
    /// Steps today. `None` until the first successful sensor read.
    pub steps: Option<u32>,
    /// Last reported charge, 0-100.
    pub battery_percent: u8,
}

impl DisplayState {
    /// Startup defaults: 00:00 on January 1st, steps unknown, battery full.
    pub const fn new() -> Self {
        Self {
            hours: 0,
            minutes: 0,
            month: 1,
            date: 1,
            steps: None,
            battery_percent: BATTERY_FULL_PERCENT,
        }
    }

    /// Copy the time fields from a tick.
    pub fn set_time(
        &mut self,
        time: WallTime,
    ) {
        self.hours = time.hour;
        self.minutes = time.minute;
        self.month = time.month;
        self.date = time.day;
    }

    /// Store a battery report, clamped to 100%.
    pub fn set_battery(
        &mut self,
        percent: u8,
    ) {
        self.battery_percent = percent.min(BATTERY_FULL_PERCENT);
    }

    /// Store a step reading. An unavailable reading keeps the last known count.
    pub fn set_steps(
        &mut self,
        steps: Option<u32>,
    ) {
        if steps.is_some() {
            self.steps = steps;
        }
    }

    /// Time fields as a [`WallTime`].
    pub const fn time(&self) -> WallTime { WallTime::new(self.hours, self.minutes, self.month, self.date) }
}

impl Default for DisplayState {
    fn default() -> Self { Self::new() }
}
