//! Watchface controller: startup, event dispatch, and frame rendering.
//!
//! [`WatchFace`] owns the display state, the loaded fonts and the window. The
//! host creates it once with [`WatchFace::init`], feeds it every
//! [`WatchEvent`] through [`WatchFace::handle`], and calls
//! [`WatchFace::render`] on each frame. Rendering only happens when an event
//! marked the layer dirty.
//!
//! Log lines use the crate's `debug!`/`info!`, which resolve to `defmt` on
//! firmware builds and to `log` elsewhere. Format strings stay within the
//! subset both accept (`{}` and `{:?}`).

use embedded_graphics::prelude::Size;

use crate::canvas::{Canvas, FontLoader, Fonts};
use crate::clock::WallTime;
use crate::events::{BatteryChargeState, HealthEventKind, WatchEvent};
use crate::format::ClockStyle;
use crate::render::draw_main;
use crate::state::DisplayState;
use crate::window::Window;
use crate::{debug, info};

/// Services the host platform provides to the watchface.
pub trait Platform {
    /// Current local time.
    fn local_time(&self) -> WallTime;

    /// Battery state right now.
    fn battery_peek(&self) -> BatteryChargeState;

    /// Steps taken today, `None` when the health service has no data.
    fn steps_today(&self) -> Option<u32>;

    /// User preference for 24-hour time. Read on every frame.
    fn clock_is_24h(&self) -> bool;

    /// Fire a short vibration.
    fn vibes_short_pulse(&mut self);
}

/// The running watchface.
pub struct WatchFace<F> {
    state: DisplayState,
    fonts: Fonts<F>,
    window: Window,
}

impl<F> WatchFace<F> {
    /// Start the watchface on a `screen`-sized display.
    ///
    /// Loads the fonts, applies the current time (as a tick, so starting on
    /// the hour vibrates), reads the battery, then creates and loads the window.
    pub fn init<L, P>(
        screen: Size,
        loader: &mut L,
        platform: &mut P,
    ) -> Self
    where
        L: FontLoader<Font = F>,
        P: Platform,
    {
        let mut face = Self {
            state: DisplayState::new(),
            fonts: Fonts::load(loader),
            window: Window::new(screen),
        };

        face.handle_tick(platform.local_time(), platform);
        face.state.set_battery(platform.battery_peek().charge_percent);

        face.window.load();
        info!("Watchface started: {:?}", face.state);
        face
    }

    /// Tear down the window.
    pub fn deinit(&mut self) {
        self.window.unload();
        info!("Watchface stopped");
    }

    /// Dispatch one event.
    pub fn handle<P>(
        &mut self,
        event: WatchEvent,
        platform: &mut P,
    ) where
        P: Platform,
    {
        match event {
            WatchEvent::Tick(time) => self.handle_tick(time, platform),
            WatchEvent::Battery(charge) => self.handle_battery(charge),
            WatchEvent::Health(kind) => self.handle_health(kind, platform),
        }
    }

    fn handle_tick<P>(
        &mut self,
        time: WallTime,
        platform: &mut P,
    ) where
        P: Platform,
    {
        debug!("Tick {:?}", time);
        self.state.set_time(time);
        if time.is_top_of_hour() {
            platform.vibes_short_pulse();
        }
        self.window.mark_dirty();
    }

    fn handle_battery(
        &mut self,
        charge: BatteryChargeState,
    ) {
        debug!("Battery {}% (charging: {})", charge.charge_percent, charge.is_charging);
        self.state.set_battery(charge.charge_percent);
        self.window.mark_dirty();
    }

    fn handle_health<P>(
        &mut self,
        kind: HealthEventKind,
        platform: &P,
    ) where
        P: Platform,
    {
        if !kind.affects_steps() {
            return;
        }
        self.state.set_steps(platform.steps_today());
        debug!("Health {:?}: steps {:?}", kind, self.state.steps);
        self.window.mark_dirty();
    }

    /// Draw a frame if one is pending.
    ///
    /// Returns `Ok(true)` when something was drawn. The canvas is only borrowed
    /// for the duration of the call.
    pub fn render<C, P>(
        &mut self,
        canvas: &mut C,
        platform: &P,
    ) -> Result<bool, C::Error>
    where
        C: Canvas<Font = F>,
        P: Platform,
    {
        let Some(bounds) = self.window.take_redraw() else {
            return Ok(false);
        };
        let clock_style = ClockStyle::from_24h_flag(platform.clock_is_24h());
        draw_main(canvas, &self.fonts, &self.state, clock_style, bounds)?;
        Ok(true)
    }

    /// Request a redraw without any state change (e.g. the clock style changed).
    pub fn invalidate(&mut self) { self.window.mark_dirty(); }

    /// Current display state.
    #[inline]
    pub const fn state(&self) -> &DisplayState { &self.state }

    /// Loaded fonts.
    #[inline]
    pub const fn fonts(&self) -> &Fonts<F> { &self.fonts }

    /// The watchface window.
    #[inline]
    pub const fn window(&self) -> &Window { &self.window }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::FontResource;
    use crate::render::tests::RecordingCanvas;

    const SCREEN: Size = Size::new(144, 168);

    struct NameLoader;

    impl FontLoader for NameLoader {
        type Font = &'static str;

        fn load_font(
            &mut self,
            resource: FontResource,
        ) -> &'static str {
            match resource {
                FontResource::NotoSansRegular => "regular",
                FontResource::NotoSansBold => "bold",
            }
        }
    }

    struct FakePlatform {
        time: WallTime,
        battery: u8,
        steps: Option<u32>,
        is_24h: bool,
        pulses: u32,
    }

    impl FakePlatform {
        fn at(time: WallTime) -> Self {
            Self {
                time,
                battery: 80,
                steps: None,
                is_24h: true,
                pulses: 0,
            }
        }
    }

    impl Platform for FakePlatform {
        fn local_time(&self) -> WallTime { self.time }

        fn battery_peek(&self) -> BatteryChargeState { BatteryChargeState::discharging(self.battery) }

        fn steps_today(&self) -> Option<u32> { self.steps }

        fn clock_is_24h(&self) -> bool { self.is_24h }

        fn vibes_short_pulse(&mut self) { self.pulses += 1; }
    }

    fn frame(
        face: &mut WatchFace<&'static str>,
        platform: &FakePlatform,
    ) -> Option<Vec<String>> {
        let mut canvas = RecordingCanvas::default();
        let drawn = face.render(&mut canvas, platform).unwrap();
        drawn.then(|| canvas.texts().into_iter().map(String::from).collect())
    }

    #[test]
    fn test_init_reads_platform() {
        let mut platform = FakePlatform::at(WallTime::new(8, 15, 6, 2));
        platform.battery = 42;
        let face = WatchFace::init(SCREEN, &mut NameLoader, &mut platform);

        assert_eq!(face.state().time(), WallTime::new(8, 15, 6, 2));
        assert_eq!(face.state().battery_percent, 42);
        assert_eq!(face.state().steps, None);
        assert_eq!(face.fonts().regular, "regular");
        assert_eq!(face.fonts().bold, "bold");
        assert!(face.window().is_loaded());
        assert_eq!(platform.pulses, 0);
    }

    #[test]
    fn test_init_on_the_hour_pulses() {
        let mut platform = FakePlatform::at(WallTime::new(7, 0, 6, 2));
        let _face = WatchFace::init(SCREEN, &mut NameLoader, &mut platform);
        assert_eq!(platform.pulses, 1);
    }

    #[test]
    fn test_first_frame_drawn_once() {
        let mut platform = FakePlatform::at(WallTime::new(8, 15, 6, 2));
        let mut face = WatchFace::init(SCREEN, &mut NameLoader, &mut platform);

        assert_eq!(frame(&mut face, &platform), Some(vec!["06/02".into(), "08:15".into()]));
        assert_eq!(frame(&mut face, &platform), None);
    }

    #[test]
    fn test_midnight_rollover_pulses_once_and_shows_zero() {
        let mut platform = FakePlatform::at(WallTime::new(23, 59, 3, 9));
        let mut face = WatchFace::init(SCREEN, &mut NameLoader, &mut platform);
        frame(&mut face, &platform);

        let mut next = platform.time;
        next.advance_minute();
        face.handle(WatchEvent::Tick(next), &mut platform);

        assert_eq!(platform.pulses, 1);
        let texts = frame(&mut face, &platform).expect("tick must trigger a redraw");
        assert_eq!(texts[1], "00:00");
        assert_eq!(texts[0], "03/10");
    }

    #[test]
    fn test_non_hour_tick_does_not_pulse() {
        let mut platform = FakePlatform::at(WallTime::new(10, 0, 1, 1));
        let mut face = WatchFace::init(SCREEN, &mut NameLoader, &mut platform);
        face.handle(WatchEvent::Tick(WallTime::new(10, 1, 1, 1)), &mut platform);
        face.handle(WatchEvent::Tick(WallTime::new(10, 2, 1, 1)), &mut platform);
        assert_eq!(platform.pulses, 1, "only the startup tick was on the hour");
    }

    #[test]
    fn test_battery_event_redraws_with_new_level() {
        let mut platform = FakePlatform::at(WallTime::new(10, 30, 1, 1));
        let mut face = WatchFace::init(SCREEN, &mut NameLoader, &mut platform);
        frame(&mut face, &platform);

        face.handle(WatchEvent::Battery(BatteryChargeState::discharging(20)), &mut platform);
        assert_eq!(face.state().battery_percent, 20);
        assert!(frame(&mut face, &platform).is_some());
    }

    #[test]
    fn test_health_event_updates_steps() {
        let mut platform = FakePlatform::at(WallTime::new(10, 30, 1, 1));
        let mut face = WatchFace::init(SCREEN, &mut NameLoader, &mut platform);
        frame(&mut face, &platform);

        platform.steps = Some(5_210);
        face.handle(WatchEvent::Health(HealthEventKind::MovementUpdate), &mut platform);
        assert_eq!(face.state().steps, Some(5_210));
        assert_eq!(
            frame(&mut face, &platform),
            Some(vec!["01/01".into(), "10:30".into(), "5210".into()])
        );
    }

    #[test]
    fn test_unavailable_steps_keep_last_count() {
        let mut platform = FakePlatform::at(WallTime::new(10, 30, 1, 1));
        let mut face = WatchFace::init(SCREEN, &mut NameLoader, &mut platform);

        platform.steps = Some(12);
        face.handle(WatchEvent::Health(HealthEventKind::SignificantUpdate), &mut platform);
        platform.steps = None;
        face.handle(WatchEvent::Health(HealthEventKind::MovementUpdate), &mut platform);
        assert_eq!(face.state().steps, Some(12));
    }

    #[test]
    fn test_sleep_update_ignored() {
        let mut platform = FakePlatform::at(WallTime::new(10, 30, 1, 1));
        let mut face = WatchFace::init(SCREEN, &mut NameLoader, &mut platform);

        frame(&mut face, &platform);

        platform.steps = Some(99);
        face.handle(WatchEvent::Health(HealthEventKind::SleepUpdate), &mut platform);
        assert_eq!(face.state().steps, None);
        assert_eq!(frame(&mut face, &platform), None);
    }

    #[test]
    fn test_clock_style_read_at_render_time() {
        let mut platform = FakePlatform::at(WallTime::new(15, 45, 1, 1));
        let mut face = WatchFace::init(SCREEN, &mut NameLoader, &mut platform);
        frame(&mut face, &platform);

        platform.is_24h = false;
        face.invalidate();
        assert_eq!(frame(&mut face, &platform).unwrap()[1], "03:45");
    }

    #[test]
    fn test_events_after_deinit_do_not_render() {
        let mut platform = FakePlatform::at(WallTime::new(15, 45, 1, 1));
        let mut face = WatchFace::init(SCREEN, &mut NameLoader, &mut platform);
        face.deinit();
        face.handle(WatchEvent::Battery(BatteryChargeState::discharging(50)), &mut platform);
        assert_eq!(face.state().battery_percent, 50);
        assert_eq!(frame(&mut face, &platform), None);
    }

    #[cfg(not(feature = "defmt"))]
    #[test]
    fn test_lifecycle_logged_through_log_facade() {
        use std::sync::Mutex;

        static LINES: Mutex<Vec<String>> = Mutex::new(Vec::new());

        struct Capture;

        impl log::Log for Capture {
            fn enabled(
                &self,
                _metadata: &log::Metadata<'_>,
            ) -> bool {
                true
            }

            fn log(
                &self,
                record: &log::Record<'_>,
            ) {
                if record.target() == "watchface_common::app" {
                    LINES.lock().unwrap().push(record.args().to_string());
                }
            }

            fn flush(&self) {}
        }

        static CAPTURE: Capture = Capture;
        log::set_logger(&CAPTURE).ok();
        log::set_max_level(log::LevelFilter::Debug);

        let mut platform = FakePlatform::at(WallTime::new(21, 37, 11, 29));
        let mut face = WatchFace::init(SCREEN, &mut NameLoader, &mut platform);
        face.deinit();

        let lines = LINES.lock().unwrap();
        assert!(
            lines
                .iter()
                .any(|line| line.starts_with("Watchface started") && line.contains("hours: 21, minutes: 37")),
            "{lines:?}"
        );
        assert!(lines.iter().any(|line| line == "Watchface stopped"));
        assert!(lines.iter().any(|line| line.starts_with("Tick") && line.contains("hour: 21")));
    }
}
