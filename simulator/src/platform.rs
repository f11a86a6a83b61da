//! Desktop stand-ins for the watch services.
//!
//! Time comes from the host's local clock (via `jiff`) shifted by a
//! user-controlled minute offset. Battery, steps and the clock preference are
//! plain fields driven from the keyboard.

use jiff::{ToSpan, Zoned};
use log::info;
use watchface_common::thresholds::BATTERY_FULL_PERCENT;
use watchface_common::{BatteryChargeState, Platform, WallTime};

/// Battery change per key press, in percent.
pub const BATTERY_STEP: u8 = 10;

/// Steps added per key press.
pub const STEPS_STEP: u32 = 250;

pub struct SimPlatform {
    offset_minutes: i64,
    battery: BatteryChargeState,
    steps: Option<u32>,
    /// Count retained while the health service is switched off.
    hidden_steps: u32,
    is_24h: bool,
    pulses: u32,
}

impl SimPlatform {
    pub const fn new() -> Self {
        Self {
            offset_minutes: 0,
            battery: BatteryChargeState::discharging(BATTERY_FULL_PERCENT),
            steps: Some(0),
            hidden_steps: 0,
            is_24h: true,
            pulses: 0,
        }
    }

    /// Shift the simulated clock forward by `minutes`.
    pub fn skip_minutes(
        &mut self,
        minutes: i64,
    ) {
        self.offset_minutes += minutes;
    }

    /// Shift the simulated clock to the start of the next hour.
    pub fn skip_to_next_hour(&mut self) {
        let minute = i64::from(self.local_time().minute);
        self.skip_minutes(60 - minute);
    }

    pub fn raise_battery(&mut self) -> BatteryChargeState {
        self.battery.charge_percent = self
            .battery
            .charge_percent
            .saturating_add(BATTERY_STEP)
            .min(BATTERY_FULL_PERCENT);
        self.battery
    }

    pub fn lower_battery(&mut self) -> BatteryChargeState {
        self.battery.charge_percent = self.battery.charge_percent.saturating_sub(BATTERY_STEP);
        self.battery
    }

    pub fn toggle_charging(&mut self) -> BatteryChargeState {
        self.battery.is_charging = !self.battery.is_charging;
        self.battery.is_plugged = self.battery.is_charging;
        self.battery
    }

    pub fn walk(&mut self) {
        if let Some(steps) = self.steps.as_mut() {
            *steps = steps.saturating_add(STEPS_STEP);
        }
    }

    /// Switch the health service on or off. While off, `steps_today` reports no data.
    pub fn toggle_health_service(&mut self) {
        self.steps = match self.steps.take() {
            Some(steps) => {
                self.hidden_steps = steps;
                None
            }
            None => Some(self.hidden_steps),
        };
    }

    pub fn toggle_clock_style(&mut self) { self.is_24h = !self.is_24h; }

    pub const fn pulses(&self) -> u32 { self.pulses }
}

impl Platform for SimPlatform {
    fn local_time(&self) -> WallTime {
        let now = Zoned::now();
        let shifted = now.checked_add(self.offset_minutes.minutes()).unwrap_or(now);
        WallTime::new(
            shifted.hour() as u8,
            shifted.minute() as u8,
            shifted.month() as u8,
            shifted.day() as u8,
        )
    }

    fn battery_peek(&self) -> BatteryChargeState { self.battery }

    fn steps_today(&self) -> Option<u32> { self.steps }

    fn clock_is_24h(&self) -> bool { self.is_24h }

    fn vibes_short_pulse(&mut self) {
        self.pulses += 1;
        info!("*bzzt* (pulse #{})", self.pulses);
    }
}
