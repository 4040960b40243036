//! The speedometer widget as a host toolkit sees it.
//!
//! [`GaugeView`] owns the gauge state plus everything the host sizing and
//! paint callbacks need: padding, suggested minimum size, the measured
//! extent, and redraw bookkeeping. The host drives it in two steps:
//!
//! ```ignore
//! let side = view.measure(Constraint::AtMost(320), Constraint::AtMost(240));
//! loop {
//!     if view.needs_redraw() {
//!         view.draw(&mut Canvas::new(&mut display)).ok();
//!     }
//!     view.tick();
//! }
//! ```
//!
//! Rectangles are derived from the current extent on every draw.

use embedded_graphics::pixelcolor::Rgb565;

use crate::animations::{FrameTicker, RedrawPolicy};
use crate::attributes::AttributeProvider;
use crate::config::DEFAULT_SUGGESTED_MIN_SIZE;
use crate::debug_log::DebugLog;
use crate::layout::{LayoutRect, Padding, layout_body_rect, layout_scale_rect};
use crate::log_fmt;
use crate::measure::{Constraint, compute_square_extent};
use crate::renderer::GaugeRenderer;
use crate::state::GaugeState;
use crate::surface::GaugeSurface;

/// Circular speedometer widget.
pub struct GaugeView {
    state: GaugeState,
    padding: Padding,
    suggested_min_width: u32,
    suggested_min_height: u32,
    width: u32,
    height: u32,
    ticker: FrameTicker,
    policy: RedrawPolicy,
    /// Set after a draw under `RedrawPolicy::Continuous`, or by `request_redraw`.
    redraw_requested: bool,
    log: DebugLog,
}

impl GaugeView {
    /// View with default state and no extent yet.
    pub fn new() -> Self { Self::with_state(GaugeState::new()) }

    /// View styled from `provider`. The provider is released before this returns.
    pub fn from_attributes<P>(provider: &mut P) -> Self
    where
        P: AttributeProvider + ?Sized,
    {
        let view = Self::with_state(GaugeState::from_attributes(provider));
        view.log_attributes()
    }

    fn with_state(state: GaugeState) -> Self {
        let mut log = DebugLog::new();
        log.push("gauge view created");
        Self {
            state,
            padding: Padding::ZERO,
            suggested_min_width: DEFAULT_SUGGESTED_MIN_SIZE,
            suggested_min_height: DEFAULT_SUGGESTED_MIN_SIZE,
            width: 0,
            height: 0,
            ticker: FrameTicker::new(),
            policy: RedrawPolicy::default(),
            redraw_requested: false,
            log,
        }
    }

    fn log_attributes(mut self) -> Self {
        log_fmt!(self.log, "speed={} max={}", self.state.speed(), self.state.max_speed());
        log_fmt!(
            self.log,
            "stroke body={} scale={}",
            self.state.body_stroke_width(),
            self.state.scale_stroke_width()
        );
        self
    }

    /// Builder form of [`set_padding`](Self::set_padding).
    #[must_use]
    pub fn with_padding(
        mut self,
        padding: Padding,
    ) -> Self {
        self.set_padding(padding);
        self
    }

    pub fn set_padding(
        &mut self,
        padding: Padding,
    ) {
        if self.padding != padding {
            self.padding = padding;
            self.state.mark_dirty();
        }
    }

    #[inline]
    pub const fn padding(&self) -> Padding { self.padding }

    /// Minimum size the host suggests, before padding.
    pub fn set_suggested_minimum_size(
        &mut self,
        width: u32,
        height: u32,
    ) {
        self.suggested_min_width = width;
        self.suggested_min_height = height;
    }

    // =========================================================================
    // Sizing
    // =========================================================================

    /// Resolve the host constraints into a square side and adopt it as the extent.
    pub fn measure(
        &mut self,
        width_constraint: Constraint,
        height_constraint: Constraint,
    ) -> u32 {
        let side = compute_square_extent(
            self.suggested_min_width,
            self.suggested_min_height,
            self.padding,
            width_constraint,
            height_constraint,
        );
        log_fmt!(self.log, "measure {:?} x {:?}", width_constraint, height_constraint);
        log_fmt!(self.log, "measured {side}x{side}");
        self.set_size(side, side);
        side
    }

    /// Set the extent directly, for hosts that do their own layout.
    pub fn set_size(
        &mut self,
        width: u32,
        height: u32,
    ) {
        if (self.width, self.height) != (width, height) {
            self.width = width;
            self.height = height;
            self.state.mark_dirty();
        }
    }

    #[inline]
    pub const fn width(&self) -> u32 { self.width }

    #[inline]
    pub const fn height(&self) -> u32 { self.height }

    /// Body ring rectangle for the current extent.
    pub const fn body_rect(&self) -> LayoutRect {
        layout_body_rect(self.width, self.height, self.padding, self.state.body_stroke_width())
    }

    /// Scale arc rectangle for the current extent.
    pub const fn scale_rect(&self) -> LayoutRect {
        layout_scale_rect(
            self.width,
            self.height,
            self.padding,
            self.state.body_stroke_width(),
            self.state.scale_stroke_width(),
        )
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Draw the gauge onto `surface`.
    ///
    /// The surface is shifted by half the body stroke for the duration of the
    /// frame so the centered stroke is not clipped at the top-left edge. On a
    /// surface error the state stays dirty and the next frame retries.
    pub fn draw<S>(
        &mut self,
        surface: &mut S,
    ) -> Result<(), S::Error>
    where
        S: GaugeSurface + ?Sized,
    {
        let half_stroke = (self.state.body_stroke_width() / 2) as i32;
        surface.translate(half_stroke, half_stroke);
        let result = GaugeRenderer::render(
            surface,
            self.body_rect(),
            self.scale_rect(),
            self.state.body_paint(),
            self.state.scale_paint(),
        );
        surface.translate(-half_stroke, -half_stroke);
        result?;

        self.state.take_dirty();
        self.redraw_requested = self.policy == RedrawPolicy::Continuous;
        Ok(())
    }

    /// Whether the host should schedule a draw.
    #[inline]
    pub const fn needs_redraw(&self) -> bool { self.state.is_dirty() || self.redraw_requested || self.ticker.is_running() }

    /// Ask for one more frame regardless of state changes.
    #[inline]
    pub const fn request_redraw(&mut self) { self.redraw_requested = true; }

    pub fn set_redraw_policy(
        &mut self,
        policy: RedrawPolicy,
    ) {
        if self.policy != policy {
            log_fmt!(self.log, "redraw policy {:?}", policy);
            self.policy = policy;
            self.redraw_requested |= policy == RedrawPolicy::Continuous;
        }
    }

    #[inline]
    pub const fn redraw_policy(&self) -> RedrawPolicy { self.policy }

    // =========================================================================
    // Animation
    // =========================================================================

    /// Start continuous frames until [`stop_animation`](Self::stop_animation).
    pub fn start_animation(&mut self) {
        if self.ticker.start() {
            self.log.push("animation started");
        }
    }

    pub fn stop_animation(&mut self) {
        if self.ticker.stop() {
            self.log.push("animation stopped");
        }
    }

    #[inline]
    pub const fn is_animating(&self) -> bool { self.ticker.is_running() }

    /// Advance the animation clock by one frame.
    #[inline]
    pub const fn tick(&mut self) -> Option<u32> { self.ticker.tick() }

    // =========================================================================
    // Properties
    // =========================================================================

    #[inline]
    pub const fn state(&self) -> &GaugeState { &self.state }

    /// Mutable state. Setters still mark the view dirty.
    #[inline]
    pub const fn state_mut(&mut self) -> &mut GaugeState { &mut self.state }

    #[inline]
    pub const fn log(&self) -> &DebugLog { &self.log }

    #[inline]
    pub const fn speed(&self) -> i32 { self.state.speed() }

    pub fn set_speed(
        &mut self,
        speed: i32,
    ) {
        self.state.set_speed(speed);
    }

    #[inline]
    pub const fn max_speed(&self) -> i32 { self.state.max_speed() }

    pub fn set_max_speed(
        &mut self,
        max_speed: i32,
    ) {
        self.state.set_max_speed(max_speed);
    }

    #[inline]
    pub const fn low_speed_color(&self) -> Rgb565 { self.state.low_speed_color() }

    pub fn set_low_speed_color(
        &mut self,
        color: Rgb565,
    ) {
        self.state.set_low_speed_color(color);
    }

    #[inline]
    pub const fn normal_speed_color(&self) -> Rgb565 { self.state.normal_speed_color() }

    pub fn set_normal_speed_color(
        &mut self,
        color: Rgb565,
    ) {
        self.state.set_normal_speed_color(color);
    }

    #[inline]
    pub const fn high_speed_color(&self) -> Rgb565 { self.state.high_speed_color() }

    pub fn set_high_speed_color(
        &mut self,
        color: Rgb565,
    ) {
        self.state.set_high_speed_color(color);
    }

    #[inline]
    pub const fn arrow_color(&self) -> Rgb565 { self.state.arrow_color() }

    pub fn set_arrow_color(
        &mut self,
        color: Rgb565,
    ) {
        self.state.set_arrow_color(color);
    }
}

impl Default for GaugeView {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::prelude::*;

    use super::*;
    use crate::attributes::{Attr, StyleSheet};
    use crate::colors::{GREEN, RED};
    use crate::config::BODY_COLOR;
    use crate::styles::PaintSpec;
    use crate::surface::{Canvas, CommandRecorder, DrawCommand, RECORDER_CAPACITY, RecorderFull};

    fn reference_view() -> GaugeView {
        let mut sheet = StyleSheet::new()
            .with(Attr::BodyStrokeWidth, 10)
            .with(Attr::ScaleStrokeWidth, 5)
            .with(Attr::NormalSpeedColor, 0xFF00_FF00);
        let mut view = GaugeView::from_attributes(&mut sheet);
        view.measure(Constraint::Exactly(300), Constraint::Exactly(300));
        view
    }

    #[test]
    fn test_measure_is_square() {
        let mut view = GaugeView::new();
        view.set_suggested_minimum_size(50, 80);

        let side = view.measure(Constraint::AtMost(1000), Constraint::AtMost(1000));
        assert_eq!(side, 80);
        assert_eq!((view.width(), view.height()), (80, 80));

        let side = view.measure(Constraint::Exactly(200), Constraint::AtMost(500));
        assert_eq!(side, 80);
        assert_eq!(view.width(), view.height());
    }

    #[test]
    fn test_measure_includes_padding() {
        let mut view = GaugeView::new().with_padding(Padding::uniform(10));
        view.set_suggested_minimum_size(100, 100);
        assert_eq!(view.measure(Constraint::Unspecified, Constraint::Unspecified), 120);
    }

    #[test]
    fn test_rects_for_reference_extent() {
        let view = reference_view();
        assert_eq!(view.body_rect(), LayoutRect::new(0, 0, 290, 290));
        assert_eq!(view.scale_rect(), LayoutRect::new(15, 15, 275, 275));
    }

    #[test]
    fn test_draw_command_sequence() {
        let mut view = reference_view();
        let mut recorder = CommandRecorder::new();

        view.draw(&mut recorder).unwrap();

        let body = LayoutRect::new(0, 0, 290, 290);
        let scale = LayoutRect::new(15, 15, 275, 275);
        let body_paint = PaintSpec::new(BODY_COLOR, 10);
        let scale_paint = PaintSpec::new(GREEN, 5);
        assert_eq!(
            recorder.commands(),
            &[
                DrawCommand::Translate { dx: 5, dy: 5 },
                DrawCommand::Arc { rect: body, start_angle: -90.0, sweep_angle: 360.0, paint: body_paint },
                DrawCommand::Rect { rect: body, paint: body_paint },
                DrawCommand::Arc { rect: scale, start_angle: -65.0, sweep_angle: 330.0, paint: scale_paint },
                DrawCommand::Rect { rect: scale, paint: scale_paint },
                DrawCommand::Translate { dx: -5, dy: -5 },
            ]
        );
    }

    #[test]
    fn test_rects_recomputed_every_draw() {
        let mut view = reference_view();
        let mut recorder = CommandRecorder::new();
        view.draw(&mut recorder).unwrap();

        view.set_size(100, 100);
        recorder.clear();
        view.draw(&mut recorder).unwrap();

        assert_eq!(
            recorder.commands()[2],
            DrawCommand::Rect { rect: LayoutRect::new(0, 0, 90, 90), paint: PaintSpec::new(BODY_COLOR, 10) }
        );
    }

    #[test]
    fn test_on_change_policy_goes_idle() {
        let mut view = reference_view();
        assert!(view.needs_redraw(), "first frame must draw");

        view.draw(&mut CommandRecorder::new()).unwrap();
        assert!(!view.needs_redraw(), "nothing changed since the last frame");

        view.set_speed(120);
        assert!(view.needs_redraw());
        view.draw(&mut CommandRecorder::new()).unwrap();
        assert!(!view.needs_redraw());

        view.set_speed(120);
        assert!(!view.needs_redraw(), "same speed is not a change");
    }

    #[test]
    fn test_continuous_policy_keeps_redrawing() {
        let mut view = reference_view();
        view.set_redraw_policy(RedrawPolicy::Continuous);

        for _ in 0..3 {
            assert!(view.needs_redraw());
            view.draw(&mut CommandRecorder::new()).unwrap();
        }
        assert!(view.needs_redraw());

        view.set_redraw_policy(RedrawPolicy::OnChange);
        view.draw(&mut CommandRecorder::new()).unwrap();
        assert!(!view.needs_redraw());
    }

    #[test]
    fn test_animation_keeps_redrawing_until_stopped() {
        let mut view = reference_view();
        view.draw(&mut CommandRecorder::new()).unwrap();

        view.start_animation();
        assert!(view.is_animating());
        assert!(view.needs_redraw());
        assert_eq!(view.tick(), Some(1));

        view.stop_animation();
        assert_eq!(view.tick(), None);
        assert!(!view.needs_redraw());
        assert_eq!(view.log().last(), Some("animation stopped"));
    }

    #[test]
    fn test_request_redraw_is_one_shot() {
        let mut view = reference_view();
        view.draw(&mut CommandRecorder::new()).unwrap();

        view.request_redraw();
        assert!(view.needs_redraw());
        view.draw(&mut CommandRecorder::new()).unwrap();
        assert!(!view.needs_redraw());
    }

    #[test]
    fn test_policy_switch_keeps_pending_request() {
        let mut view = reference_view();
        view.draw(&mut CommandRecorder::new()).unwrap();

        view.request_redraw();
        view.set_redraw_policy(RedrawPolicy::Continuous);
        view.set_redraw_policy(RedrawPolicy::OnChange);
        assert!(view.needs_redraw(), "request survives the switch back");

        view.draw(&mut CommandRecorder::new()).unwrap();
        assert!(!view.needs_redraw());
    }

    #[test]
    fn test_failed_draw_stays_dirty() {
        let mut view = reference_view();
        view.draw(&mut CommandRecorder::new()).unwrap();
        view.set_speed(10);
        let mut recorder = CommandRecorder::new();

        // Leave room for only part of a frame
        let filler = LayoutRect::new(0, 0, 1, 1);
        for _ in 0..RECORDER_CAPACITY - 3 {
            recorder.draw_rect(filler, PaintSpec::new(RED, 1)).unwrap();
        }

        assert_eq!(view.draw(&mut recorder), Err(RecorderFull));
        assert!(view.needs_redraw());
    }

    #[test]
    fn test_accessors_delegate_to_state() {
        let mut view = GaugeView::new();
        view.set_speed(42);
        view.set_max_speed(220);
        view.set_low_speed_color(GREEN);
        view.set_normal_speed_color(GREEN);
        view.set_high_speed_color(RED);
        view.set_arrow_color(RED);

        assert_eq!(view.speed(), 42);
        assert_eq!(view.max_speed(), 220);
        assert_eq!(view.low_speed_color(), GREEN);
        assert_eq!(view.normal_speed_color(), GREEN);
        assert_eq!(view.high_speed_color(), RED);
        assert_eq!(view.arrow_color(), RED);
        assert_eq!(view.state().speed(), 42);
    }

    #[test]
    fn test_attribute_summary_logged() {
        let mut sheet = StyleSheet::new().with(Attr::Speed, 60).with(Attr::MaxSpeed, 240);
        let view = GaugeView::from_attributes(&mut sheet);

        assert!(view.log().iter().any(|line| line == "speed=60 max=240"));
        assert_eq!(sheet.acquisitions(), sheet.releases());
    }

    #[test]
    fn test_draw_on_mock_display() {
        let mut sheet = StyleSheet::new()
            .with(Attr::BodyStrokeWidth, 2)
            .with(Attr::ScaleStrokeWidth, 1)
            .with(Attr::NormalSpeedColor, 0xFF00_FF00);
        let mut view = GaugeView::from_attributes(&mut sheet);
        view.measure(Constraint::Exactly(48), Constraint::Exactly(48));

        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        display.set_allow_overdraw(true);
        view.draw(&mut Canvas::new(&mut display)).unwrap();

        let mut body_pixels = 0;
        let mut scale_pixels = 0;
        for y in 0..48 {
            for x in 0..48 {
                match display.get_pixel(Point::new(x, y)) {
                    Some(color) if color == BODY_COLOR => body_pixels += 1,
                    Some(color) if color == GREEN => scale_pixels += 1,
                    _ => {}
                }
            }
        }
        assert!(body_pixels > 0, "body ring should be visible");
        assert!(scale_pixels > 0, "scale arc should be visible");
        // Gauge center stays empty
        assert_eq!(display.get_pixel(Point::new(24, 24)), None);
    }
}
