//! Watch services backed by task-shared statics.
//!
//! Producer tasks write these; the main task reads them through
//! [`FirmwarePlatform`] while handling events.
//!
//! | Static | Writer | Reader |
//! |--------|--------|--------|
//! | `CLOCK` | minute ticker, set buttons | `local_time` |
//! | `STEPS` | pedometer task, midnight reset | `steps_today` |
//! | `BATTERY` | battery sampler | `battery_peek` |
//! | `CLOCK_24H` | style button | `clock_is_24h` |
//! | `REDRAW` | style button | main task |
//! | `VIBE` | `vibes_short_pulse` | vibe task |

use core::cell::Cell;
use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use watchface_common::{BatteryChargeState, Platform, WallTime, WatchEvent};

/// Pending events, consumed by the main task only.
pub static EVENTS: Channel<CriticalSectionRawMutex, WatchEvent, 8> = Channel::new();

/// Wall clock. No RTC: starts at midnight on January 1st and is set with the buttons.
static CLOCK: Mutex<CriticalSectionRawMutex, Cell<WallTime>> = Mutex::new(Cell::new(WallTime::MIDNIGHT_JAN_1));

/// Steps counted since midnight.
static STEPS: AtomicU32 = AtomicU32::new(0);

/// Last battery sample.
static BATTERY: Mutex<CriticalSectionRawMutex, Cell<BatteryChargeState>> =
    Mutex::new(Cell::new(BatteryChargeState::discharging(100)));

static CLOCK_24H: AtomicBool = AtomicBool::new(true);

/// Redraw request without a state change (clock style switched).
pub static REDRAW: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Raised for each haptic pulse.
pub static VIBE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Move the clock forward. Returns the new time and whether a new day started.
pub fn advance_clock(minutes: u32) -> (WallTime, bool) {
    CLOCK.lock(|clock| {
        let before = clock.get();
        let mut time = before;
        for _ in 0..minutes {
            time.advance_minute();
        }
        clock.set(time);
        (time, time.day != before.day || time.month != before.month)
    })
}

/// Count one step, returning today's total.
pub fn record_step() -> u32 { STEPS.fetch_add(1, Ordering::Relaxed).saturating_add(1) }

/// Start a new day of step counting.
pub fn reset_steps() { STEPS.store(0, Ordering::Relaxed); }

pub fn store_battery(charge: BatteryChargeState) { BATTERY.lock(|battery| battery.set(charge)); }

/// Flip the 12h/24h preference, returning the new 24h flag.
pub fn toggle_clock_style() -> bool { !CLOCK_24H.fetch_xor(true, Ordering::Relaxed) }

/// The platform as seen by the watchface.
pub struct FirmwarePlatform;

impl Platform for FirmwarePlatform {
    fn local_time(&self) -> WallTime { CLOCK.lock(Cell::get) }

    fn battery_peek(&self) -> BatteryChargeState { BATTERY.lock(Cell::get) }

    fn steps_today(&self) -> Option<u32> { Some(STEPS.load(Ordering::Relaxed)) }

    fn clock_is_24h(&self) -> bool { CLOCK_24H.load(Ordering::Relaxed) }

    fn vibes_short_pulse(&mut self) { VIBE.signal(()); }
}
