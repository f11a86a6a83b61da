//! Events delivered to the watchface by the platform.

use crate::clock::WallTime;

/// Battery report from the platform's battery service.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryChargeState {
    /// 0-100.
    pub charge_percent: u8,
    /// Battery is currently charging.
    pub is_charging: bool,
    /// Charger is connected.
    pub is_plugged: bool,
}

impl BatteryChargeState {
    /// Discharging report at `charge_percent`.
    pub const fn discharging(charge_percent: u8) -> Self {
        Self {
            charge_percent,
            is_charging: false,
            is_plugged: false,
        }
    }
}

/// Kind of health-service notification.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HealthEventKind {
    /// Large batch update (e.g. after the service starts or the day rolls over).
    SignificantUpdate,
    /// Step/activity data changed.
    MovementUpdate,
    /// Sleep data changed. Ignored by the watchface.
    SleepUpdate,
    /// A metric crossed a registered alert threshold.
    MetricAlert,
    /// Heart rate sample changed.
    HeartRateUpdate,
}

impl HealthEventKind {
    /// Whether this notification may change today's step count.
    #[inline]
    pub const fn affects_steps(self) -> bool { !matches!(self, Self::SleepUpdate) }
}

/// Every event the watchface reacts to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WatchEvent {
    /// Minute boundary with the new local time.
    Tick(WallTime),
    /// Battery charge changed.
    Battery(BatteryChargeState),
    /// Health service notification. Steps are re-read from the platform.
    Health(HealthEventKind),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_sleep_updates_are_ignored() {
        assert!(HealthEventKind::SignificantUpdate.affects_steps());
        assert!(HealthEventKind::MovementUpdate.affects_steps());
        assert!(HealthEventKind::MetricAlert.affects_steps());
        assert!(HealthEventKind::HeartRateUpdate.affects_steps());
        assert!(!HealthEventKind::SleepUpdate.affects_steps());
    }
}
