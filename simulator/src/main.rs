//! Watchface simulator for desktop platforms.
//!
//! Runs the shared watchface on an `embedded-graphics-simulator` window with
//! the host's wall clock. Logging goes through `env_logger`
//! (`RUST_LOG=debug` shows every event).
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | Up / Down | Battery +/- 10% |
//! | C | Toggle charging |
//! | S | Walk 250 steps |
//! | N | Toggle the health service (steps unavailable) |
//! | T | Toggle 12h / 24h clock |
//! | M | Skip one minute |
//! | H | Skip to the next hour |

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

mod platform;
mod timing;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::info;
use watchface_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use watchface_common::window::Layer;
use watchface_common::{GraphicsCanvas, HealthEventKind, MonoFontLoader, Platform, WatchEvent, WatchFace};

use crate::platform::SimPlatform;
use crate::timing::FRAME_TIME;

fn main() {
    env_logger::init();

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Watchface Sim", &output_settings);

    let mut platform = SimPlatform::new();
    let mut face = WatchFace::init(display.size(), &mut MonoFontLoader, &mut platform);
    let mut last_time = platform.local_time();

    loop {
        let frame_start = Instant::now();

        // Redraw only when an event marked the layer
        if face.window().layer().is_some_and(Layer::is_dirty) {
            display.clear(face.window().background()).ok();
            face.render(&mut GraphicsCanvas::new(&mut display), &platform).ok();
        }
        window.update(&display);

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => {
                    face.deinit();
                    info!("Simulator exiting after {} pulses", platform.pulses());
                    return;
                }
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Up => {
                            let charge = platform.raise_battery();
                            face.handle(WatchEvent::Battery(charge), &mut platform);
                        }
                        Keycode::Down => {
                            let charge = platform.lower_battery();
                            face.handle(WatchEvent::Battery(charge), &mut platform);
                        }
                        Keycode::C => {
                            let charge = platform.toggle_charging();
                            face.handle(WatchEvent::Battery(charge), &mut platform);
                        }
                        Keycode::S => {
                            platform.walk();
                            face.handle(WatchEvent::Health(HealthEventKind::MovementUpdate), &mut platform);
                        }
                        Keycode::N => {
                            platform.toggle_health_service();
                            face.handle(WatchEvent::Health(HealthEventKind::SignificantUpdate), &mut platform);
                        }
                        Keycode::T => {
                            platform.toggle_clock_style();
                            face.invalidate();
                        }
                        Keycode::M => platform.skip_minutes(1),
                        Keycode::H => platform.skip_to_next_hour(),
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Minute boundary
        let now = platform.local_time();
        if now != last_time {
            last_time = now;
            face.handle(WatchEvent::Tick(now), &mut platform);
        }

        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }
}
