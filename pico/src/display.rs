//! Display driver for the Pimoroni PIM715 Display Pack 2.8" (ST7789).
//!
//! Pin mapping for PIM715:
//! - CS: GPIO17
//! - DC: GPIO16
//! - CLK: GPIO18 (SPI0 CLK)
//! - MOSI: GPIO19 (SPI0 TX)
//! - Backlight: GPIO20
//! - Reset: Tied to RUN pin (resets with Pico)
//!
//! The panel is larger than the watch screen, so the watchface draws into a
//! centered viewport.

use display_interface_spi::SPIInterface;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Config as SpiConfig, Spi};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_hal_bus::spi::ExclusiveDevice;
use mipidsi::models::ST7789;
use mipidsi::options::{ColorInversion, Orientation, Rotation};
use mipidsi::{Builder, NoResetPin};
use watchface_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Panel size after the 90° rotation.
pub const PANEL_WIDTH: u32 = 320;
pub const PANEL_HEIGHT: u32 = 240;

const _: () = assert!(SCREEN_WIDTH <= PANEL_WIDTH && SCREEN_HEIGHT <= PANEL_HEIGHT);

/// Display type alias for the ST7789 on PIM715 (no reset pin).
pub type Pim715Display<'d> = mipidsi::Display<
    SPIInterface<ExclusiveDevice<Spi<'d, SPI0, Blocking>, Output<'d>, embedded_hal_bus::spi::NoDelay>, Output<'d>>,
    ST7789,
    NoResetPin,
>;

/// Initialize the PIM715 display in landscape.
pub fn init_display<'d>(
    spi: Spi<'d, SPI0, Blocking>,
    cs: Output<'d>,
    dc: Output<'d>,
) -> Pim715Display<'d> {
    let spi_device = ExclusiveDevice::new_no_delay(spi, cs).unwrap();
    let di = SPIInterface::new(spi_device, dc);

    // Native panel is 240x320 portrait
    Builder::new(ST7789, di)
        .display_size(PANEL_HEIGHT as u16, PANEL_WIDTH as u16)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .invert_colors(ColorInversion::Inverted)
        .init(&mut embassy_time::Delay)
        .unwrap()
}

/// Watch screen area, centered on the panel.
pub const fn watch_viewport() -> Rectangle {
    Rectangle::new(
        Point::new(
            ((PANEL_WIDTH - SCREEN_WIDTH) / 2) as i32,
            ((PANEL_HEIGHT - SCREEN_HEIGHT) / 2) as i32,
        ),
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT),
    )
}

/// SPI configuration for the ST7789 display.
///
/// The ST7789 supports up to 62.5MHz SPI clock; 40MHz is reliable.
pub fn display_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = 40_000_000;
    config
}
