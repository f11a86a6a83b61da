//! Event producer tasks.
//!
//! Each task turns one hardware source into [`WatchEvent`]s on
//! [`EVENTS`]. The main task is the only consumer.

use defmt::{debug, info, warn};
use embassy_rp::adc::{Adc, Async, Channel};
use embassy_rp::gpio::{Input, Output};
use embassy_time::{Duration, Ticker, Timer};
use watchface_common::battery::percent_from_millivolts;
use watchface_common::{BatteryChargeState, HealthEventKind, WallTime, WatchEvent};

use crate::platform::{EVENTS, REDRAW, VIBE, advance_clock, record_step, reset_steps, store_battery, toggle_clock_style};

/// Battery sampling period.
const BATTERY_SAMPLE_PERIOD: Duration = Duration::from_secs(30);

/// VSYS reaches the ADC through a 3:1 divider.
const VSYS_DIVIDER: u32 = 3;
/// ADC reference in millivolts.
const ADC_VREF_MV: u32 = 3_300;
/// 12-bit ADC full scale.
const ADC_MAX: u32 = 4_096;

/// Haptic pulse length.
const VIBE_PULSE: Duration = Duration::from_millis(100);

/// Ignore button bounce for this long after a press.
const DEBOUNCE: Duration = Duration::from_millis(50);

/// What a front button does.
#[derive(Clone, Copy, defmt::Format)]
pub enum ButtonAction {
    /// Switch between 12h and 24h.
    ToggleClockStyle,
    /// Set the clock forward by one minute.
    SkipMinute,
    /// Set the clock forward by one hour.
    SkipHour,
}

/// Tick and, on a new day, the step reset with its health update.
async fn publish_time((time, new_day): (WallTime, bool)) {
    EVENTS.send(WatchEvent::Tick(time)).await;
    if new_day {
        reset_steps();
        EVENTS.send(WatchEvent::Health(HealthEventKind::SignificantUpdate)).await;
    }
}

/// Minute boundary ticker.
#[embassy_executor::task]
pub async fn minute_ticker_task() {
    info!("Minute ticker started");
    let mut ticker = Ticker::every(Duration::from_secs(60));
    loop {
        ticker.next().await;
        publish_time(advance_clock(1)).await;
    }
}

/// Read VSYS and convert it to a charge report.
async fn sample_battery(
    adc: &mut Adc<'static, Async>,
    vsys: &mut Channel<'static>,
    vbus: &Input<'static>,
) -> Option<BatteryChargeState> {
    match adc.read(vsys).await {
        Ok(raw) => {
            let millivolts = u32::from(raw) * ADC_VREF_MV * VSYS_DIVIDER / ADC_MAX;
            let plugged = vbus.is_high();
            Some(BatteryChargeState {
                charge_percent: percent_from_millivolts(millivolts),
                is_charging: plugged,
                is_plugged: plugged,
            })
        }
        Err(e) => {
            warn!("VSYS read failed: {}", e);
            None
        }
    }
}

/// Startup battery reading, taken before the sampler task owns the ADC.
pub async fn peek_battery(
    adc: &mut Adc<'static, Async>,
    vsys: &mut Channel<'static>,
    vbus: &Input<'static>,
) {
    if let Some(charge) = sample_battery(adc, vsys, vbus).await {
        store_battery(charge);
    }
}

/// Periodic battery sampler. Only publishes changes.
#[embassy_executor::task]
pub async fn battery_task(
    mut adc: Adc<'static, Async>,
    mut vsys: Channel<'static>,
    vbus: Input<'static>,
) {
    info!("Battery sampler started");
    let mut last: Option<BatteryChargeState> = None;
    loop {
        if let Some(charge) = sample_battery(&mut adc, &mut vsys, &vbus).await
            && last != Some(charge)
        {
            last = Some(charge);
            store_battery(charge);
            EVENTS.send(WatchEvent::Battery(charge)).await;
        }
        Timer::after(BATTERY_SAMPLE_PERIOD).await;
    }
}

/// Step pulses from the external pedometer (one rising edge per step).
#[embassy_executor::task]
pub async fn pedometer_task(mut step_line: Input<'static>) {
    info!("Pedometer started");
    loop {
        step_line.wait_for_rising_edge().await;
        let total = record_step();
        debug!("Step {}", total);
        EVENTS.send(WatchEvent::Health(HealthEventKind::MovementUpdate)).await;
    }
}

/// Front button (active-low).
#[embassy_executor::task(pool_size = 3)]
pub async fn button_task(
    mut button: Input<'static>,
    action: ButtonAction,
) {
    loop {
        button.wait_for_falling_edge().await;
        info!("Button: {}", action);
        match action {
            ButtonAction::ToggleClockStyle => {
                let is_24h = toggle_clock_style();
                info!("24h clock: {}", is_24h);
                REDRAW.signal(());
            }
            ButtonAction::SkipMinute => publish_time(advance_clock(1)).await,
            ButtonAction::SkipHour => publish_time(advance_clock(60)).await,
        }
        Timer::after(DEBOUNCE).await;
        button.wait_for_high().await;
    }
}

/// Drives the vibe motor, with the blue LED (active-low) as a visible stand-in.
#[embassy_executor::task]
pub async fn vibe_task(
    mut motor: Output<'static>,
    mut led: Output<'static>,
) {
    loop {
        VIBE.wait().await;
        motor.set_high();
        led.set_low();
        Timer::after(VIBE_PULSE).await;
        motor.set_low();
        led.set_high();
    }
}
