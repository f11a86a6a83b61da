//! Watchface firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Shows the watchface on the Pimoroni PIM715 Display Pack 2.8".
//!
//! # Architecture
//!
//! Producer tasks push [`WatchEvent`]s into a bounded channel; the main task
//! owns the [`WatchFace`], handles every event to completion and redraws the
//! centered watch viewport when the layer is dirty.
//!
//! # Wiring
//!
//! | Pin | Function |
//! |-----|----------|
//! | GPIO12 (A) | Toggle 12h / 24h |
//! | GPIO14 (X) | Clock +1 minute |
//! | GPIO15 (Y) | Clock +1 hour |
//! | GPIO21 | Vibe motor driver |
//! | GPIO22 | Pedometer step pulse |
//! | GPIO24 | VBUS sense |
//! | GPIO29 | VSYS / 3 (ADC3) |

#![no_std]
#![no_main]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

mod display;
mod platform;
mod tasks;

use defmt::info;
use embassy_executor::Spawner;
use embassy_futures::select::{Either, select};
use embassy_rp::adc::{Adc, Channel as AdcChannel, Config as AdcConfig, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::Spi;
use embedded_graphics::prelude::*;
use watchface_common::colors::BLACK;
use watchface_common::window::Layer;
use watchface_common::{GraphicsCanvas, MonoFontLoader, WatchEvent, WatchFace};
use {defmt_rtt as _, panic_probe as _};

use crate::display::{display_spi_config, init_display, watch_viewport};
use crate::platform::{EVENTS, FirmwarePlatform, REDRAW};
use crate::tasks::{
    ButtonAction,
    battery_task,
    button_task,
    minute_ticker_task,
    pedometer_task,
    peek_battery,
    vibe_task,
};

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"pico2-watchface"),
    embassy_rp::binary_info::rp_program_description!(c"Watchface on PIM715 Display"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Watchface starting...");

    let p = embassy_rp::init(Default::default());

    // PIM715 RGB LED is active-low: High = off
    let _led_r = Output::new(p.PIN_26, Level::High);
    let _led_g = Output::new(p.PIN_27, Level::High);
    let led_b = Output::new(p.PIN_28, Level::High);

    // PIM715 pinout: CS=17, DC=16, CLK=18, MOSI=19, Backlight=20
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let _backlight = Output::new(p.PIN_20, Level::High);
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, display_spi_config());
    let mut display = init_display(spi, cs, dc);
    display.clear(BLACK).ok();
    info!("Display initialized!");

    // Battery: one reading for startup, then the sampler owns the ADC
    let mut adc = Adc::new(p.ADC, Irqs, AdcConfig::default());
    let mut vsys = AdcChannel::new_pin(p.PIN_29, Pull::None);
    let vbus = Input::new(p.PIN_24, Pull::None);
    peek_battery(&mut adc, &mut vsys, &vbus).await;

    let mut platform = FirmwarePlatform;
    let mut face = WatchFace::init(watch_viewport().size, &mut MonoFontLoader, &mut platform);

    spawner.spawn(vibe_task(Output::new(p.PIN_21, Level::Low), led_b)).unwrap();
    spawner.spawn(minute_ticker_task()).unwrap();
    spawner.spawn(battery_task(adc, vsys, vbus)).unwrap();
    spawner.spawn(pedometer_task(Input::new(p.PIN_22, Pull::Down))).unwrap();
    spawner
        .spawn(button_task(Input::new(p.PIN_12, Pull::Up), ButtonAction::ToggleClockStyle))
        .unwrap();
    spawner
        .spawn(button_task(Input::new(p.PIN_14, Pull::Up), ButtonAction::SkipMinute))
        .unwrap();
    spawner
        .spawn(button_task(Input::new(p.PIN_15, Pull::Up), ButtonAction::SkipHour))
        .unwrap();

    info!("Starting event loop...");

    let mut screen = display.cropped(&watch_viewport());
    loop {
        if face.window().layer().is_some_and(Layer::is_dirty) {
            screen.clear(face.window().background()).ok();
            face.render(&mut GraphicsCanvas::new(&mut screen), &platform).ok();
        }

        match select(EVENTS.receive(), REDRAW.wait()).await {
            Either::First(event) => handle(&mut face, event, &mut platform),
            Either::Second(()) => face.invalidate(),
        }
        // Coalesce everything already queued into one frame
        while let Ok(event) = EVENTS.try_receive() {
            handle(&mut face, event, &mut platform);
        }
    }
}

fn handle<F>(
    face: &mut WatchFace<F>,
    event: WatchEvent,
    platform: &mut FirmwarePlatform,
) {
    info!("Event: {}", event);
    face.handle(event, platform);
}
