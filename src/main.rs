//! Speedometer gauge simulator for desktop.
//!
//! Hosts a [`GaugeView`] in an `embedded-graphics-simulator` window the way a
//! UI toolkit would: measure once, then draw whenever the view asks for a
//! frame. A readout panel shows the current speed and the widget's debug log.
//!
//! # Controls
//!
//! | Key    | Action                                          |
//! |--------|-------------------------------------------------|
//! | `W`    | Speed +10                                       |
//! | `S`    | Speed -10                                       |
//! | `A`    | Start/stop the demo sweep (drives the ticker)   |
//! | `P`    | Toggle redraw policy (on-change / continuous)   |
//!
//! Key repeat is ignored to prevent toggle spam when holding keys.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

use core::fmt::Write;
use std::thread;
use std::time::Instant;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use heapless::String;
use profont::PROFONT_24_POINT;
use speedometer_gauge::attributes::{Attr, StyleSheet};
use speedometer_gauge::colors::{BLACK, GRAY, GREEN, ORANGE, WHITE};
use speedometer_gauge::config::FRAME_TIME;
use speedometer_gauge::debug_log::DebugLog;
use speedometer_gauge::{Canvas, Constraint, GaugeView, Padding, RedrawPolicy};

// =============================================================================
// Window Layout
// =============================================================================

/// Simulated display width in pixels.
const SCREEN_WIDTH: u32 = 320;

/// Simulated display height in pixels.
const SCREEN_HEIGHT: u32 = 240;

/// The gauge gets a square region in the top-left corner, at most this big.
const GAUGE_MAX_SIZE: u32 = 170;

/// Suggested minimum gauge side before padding.
const GAUGE_MIN_SIZE: u32 = 160;

/// Left edge of the speed readout.
const READOUT_X: i32 = 180;

/// Top of the log terminal.
const LOG_Y: i32 = 182;

/// Log lines shown at once.
const LOG_LINES: usize = 5;

const LOG_LINE_HEIGHT: i32 = 11;

/// Speed change per key press.
const SPEED_STEP: i32 = 10;

// =============================================================================
// Demo Style
// =============================================================================

const DEMO_MAX_SPEED: u32 = 240;

fn demo_style() -> StyleSheet {
    StyleSheet::new()
        .with(Attr::Speed, 0)
        .with(Attr::MaxSpeed, DEMO_MAX_SPEED)
        .with(Attr::LowSpeedColor, 0xFF00_FF00)
        .with(Attr::NormalSpeedColor, 0xFFFF_FF00)
        .with(Attr::HighSpeedColor, 0xFFFF_0000)
        .with(Attr::ArrowColor, 0xFFFF_8000)
        .with(Attr::BodyStrokeWidth, 8)
        .with(Attr::ScaleStrokeWidth, 4)
}

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Speedometer Gauge Sim", &output_settings);

    let mut style = demo_style();
    let mut gauge = GaugeView::from_attributes(&mut style).with_padding(Padding::uniform(4));
    gauge.set_suggested_minimum_size(GAUGE_MIN_SIZE, GAUGE_MIN_SIZE);
    let side = gauge.measure(Constraint::AtMost(GAUGE_MAX_SIZE), Constraint::AtMost(GAUGE_MAX_SIZE));

    display.clear(BLACK).ok();
    window.update(&display);
    let mut frames_drawn = 0u32;

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::W => gauge.set_speed(gauge.speed() + SPEED_STEP),
                        Keycode::S => gauge.set_speed(gauge.speed() - SPEED_STEP),
                        Keycode::A => {
                            if gauge.is_animating() {
                                gauge.stop_animation();
                            } else {
                                gauge.start_animation();
                            }
                        }
                        Keycode::P => {
                            let next = match gauge.redraw_policy() {
                                RedrawPolicy::OnChange => RedrawPolicy::Continuous,
                                RedrawPolicy::Continuous => RedrawPolicy::OnChange,
                            };
                            gauge.set_redraw_policy(next);
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Demo sweep: the ticker drives the speed while running
        if let Some(frame) = gauge.tick() {
            let sweep = (frame % (2 * DEMO_MAX_SPEED)) as i32;
            let max = DEMO_MAX_SPEED as i32;
            gauge.set_speed(if sweep > max { 2 * max - sweep } else { sweep });
        }

        if gauge.needs_redraw() {
            Rectangle::new(Point::zero(), Size::new(side, side))
                .into_styled(PrimitiveStyle::with_fill(BLACK))
                .draw(&mut display)
                .ok();
            gauge.draw(&mut Canvas::new(&mut display)).ok();
            frames_drawn = frames_drawn.wrapping_add(1);

            draw_readout(&mut display, &gauge, frames_drawn);
            draw_log_terminal(&mut display, gauge.log());
        }

        window.update(&display);

        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}

fn draw_readout(
    display: &mut SimulatorDisplay<Rgb565>,
    gauge: &GaugeView,
    frames_drawn: u32,
) {
    Rectangle::new(Point::new(READOUT_X, 0), Size::new(SCREEN_WIDTH - READOUT_X as u32, LOG_Y as u32 - 4))
        .into_styled(PrimitiveStyle::with_fill(BLACK))
        .draw(display)
        .ok();

    let label_style = MonoTextStyle::new(&FONT_6X10, GRAY);
    let value_style = MonoTextStyle::new(&PROFONT_24_POINT, gauge.arrow_color());
    let info_style = MonoTextStyle::new(&FONT_6X10, WHITE);

    Text::new("SPEED", Point::new(READOUT_X, 20), label_style).draw(display).ok();

    let mut s: String<12> = String::new();
    let _ = write!(s, "{}", gauge.speed());
    Text::new(&s, Point::new(READOUT_X, 50), value_style).draw(display).ok();

    let mut s: String<16> = String::new();
    let _ = write!(s, "MAX {}", gauge.max_speed());
    Text::new(&s, Point::new(READOUT_X, 70), info_style).draw(display).ok();

    let policy = match gauge.redraw_policy() {
        RedrawPolicy::OnChange => "ON CHANGE",
        RedrawPolicy::Continuous => "CONTINUOUS",
    };
    Text::new(policy, Point::new(READOUT_X, 100), label_style).draw(display).ok();

    let mut s: String<20> = String::new();
    let _ = write!(s, "FRAMES {frames_drawn}");
    Text::new(&s, Point::new(READOUT_X, 115), label_style).draw(display).ok();
}

fn draw_log_terminal(
    display: &mut SimulatorDisplay<Rgb565>,
    log: &DebugLog,
) {
    Rectangle::new(Point::new(0, LOG_Y - 2), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - LOG_Y as u32 + 2))
        .into_styled(PrimitiveStyle::with_fill(Rgb565::new(1, 2, 1)))
        .draw(display)
        .ok();

    let prompt_style = MonoTextStyle::new(&FONT_6X10, GREEN);
    let text_style = MonoTextStyle::new(&FONT_6X10, ORANGE);

    let mut y = LOG_Y + 8;
    for line in log.iter().skip(log.len().saturating_sub(LOG_LINES)) {
        Text::new(">", Point::new(4, y), prompt_style).draw(display).ok();
        Text::new(line, Point::new(14, y), text_style).draw(display).ok();
        y += LOG_LINE_HEIGHT;
    }
}
