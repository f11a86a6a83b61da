//! Single-cell LiPo voltage to charge percentage.
//!
//! Linear between [`CELL_EMPTY_MV`] and [`CELL_FULL_MV`], clamped at both
//! ends. Hosts without a fuel gauge use this to build a
//! [`crate::events::BatteryChargeState`] from an ADC reading.

use crate::thresholds::BATTERY_FULL_PERCENT;

/// Cell voltage reported as 0%.
pub const CELL_EMPTY_MV: u32 = 3_300;
/// Cell voltage reported as 100%.
pub const CELL_FULL_MV: u32 = 4_200;

const _: () = assert!(CELL_EMPTY_MV < CELL_FULL_MV);

/// Charge percentage for a cell voltage in millivolts.
pub const fn percent_from_millivolts(millivolts: u32) -> u8 {
    if millivolts <= CELL_EMPTY_MV {
        return 0;
    }
    if millivolts >= CELL_FULL_MV {
        return BATTERY_FULL_PERCENT;
    }
    let above_empty = millivolts - CELL_EMPTY_MV;
    let span = CELL_FULL_MV - CELL_EMPTY_MV;
    (above_empty * BATTERY_FULL_PERCENT as u32 / span) as u8
}
