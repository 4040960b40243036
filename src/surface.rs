//! Drawing surfaces the gauge renders onto.
//!
//! [`GaugeSurface`] is the seam between the renderer and whatever actually
//! puts pixels somewhere. Two implementations ship with the crate:
//!
//! - [`Canvas`]: adapter over any `DrawTarget<Color = Rgb565>` (simulator
//!   window, display driver framebuffer, `MockDisplay`).
//! - [`CommandRecorder`]: stores the issued commands instead of drawing them.
//!
//! Angles are in degrees with 0 at three o'clock and positive values turning
//! clockwise, matching `embedded-graphics` arcs on a y-down screen.

use core::fmt;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Arc;
use heapless::Vec;

use crate::layout::LayoutRect;
use crate::styles::PaintSpec;

/// Primitive drawing operations the gauge needs from its host.
pub trait GaugeSurface {
    /// Error reported by the underlying target.
    type Error;

    /// Shift the origin of every following draw call by `(dx, dy)`.
    fn translate(
        &mut self,
        dx: i32,
        dy: i32,
    );

    /// Stroke an arc of the circle inscribed in `rect`.
    fn draw_arc(
        &mut self,
        rect: LayoutRect,
        start_angle: f32,
        sweep_angle: f32,
        paint: PaintSpec,
    ) -> Result<(), Self::Error>;

    /// Stroke the outline of `rect`.
    fn draw_rect(
        &mut self,
        rect: LayoutRect,
        paint: PaintSpec,
    ) -> Result<(), Self::Error>;
}

// =============================================================================
// DrawTarget Adapter
// =============================================================================

/// [`GaugeSurface`] over an `embedded-graphics` draw target.
pub struct Canvas<'a, D> {
    target: &'a mut D,
    origin: Point,
}

impl<'a, D> Canvas<'a, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: &'a mut D) -> Self { Self { target, origin: Point::zero() } }

    /// Current translation applied to draw calls.
    #[inline]
    pub const fn origin(&self) -> Point { self.origin }
}

impl<D> GaugeSurface for Canvas<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Error = D::Error;

    fn translate(
        &mut self,
        dx: i32,
        dy: i32,
    ) {
        self.origin += Point::new(dx, dy);
    }

    fn draw_arc(
        &mut self,
        rect: LayoutRect,
        start_angle: f32,
        sweep_angle: f32,
        paint: PaintSpec,
    ) -> Result<(), Self::Error> {
        let rect = rect.translate(self.origin.x, self.origin.y);
        Arc::new(rect.top_left(), rect.arc_diameter(), start_angle.deg(), sweep_angle.deg())
            .into_styled(paint.primitive_style())
            .draw(&mut *self.target)
    }

    fn draw_rect(
        &mut self,
        rect: LayoutRect,
        paint: PaintSpec,
    ) -> Result<(), Self::Error> {
        rect.translate(self.origin.x, self.origin.y)
            .to_rectangle()
            .into_styled(paint.primitive_style())
            .draw(&mut *self.target)
    }
}

// =============================================================================
// Command Recorder
// =============================================================================

/// Maximum number of commands a [`CommandRecorder`] holds.
pub const RECORDER_CAPACITY: usize = 16;

/// A single recorded surface call.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum DrawCommand {
    Translate {
        dx: i32,
        dy: i32,
    },
    Arc {
        rect: LayoutRect,
        start_angle: f32,
        sweep_angle: f32,
        paint: PaintSpec,
    },
    Rect {
        rect: LayoutRect,
        paint: PaintSpec,
    },
}

/// The recorder ran out of room for commands.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RecorderFull;

impl fmt::Display for RecorderFull {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "command recorder is full ({RECORDER_CAPACITY} commands)")
    }
}

impl core::error::Error for RecorderFull {}

/// [`GaugeSurface`] that records every call instead of drawing it.
#[derive(Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand, RECORDER_CAPACITY>,
}

impl CommandRecorder {
    pub const fn new() -> Self { Self { commands: Vec::new() } }

    /// Commands recorded so far, in issue order.
    pub fn commands(&self) -> &[DrawCommand] { &self.commands }

    /// Drop all recorded commands.
    pub fn clear(&mut self) { self.commands.clear(); }

    fn record(
        &mut self,
        command: DrawCommand,
    ) -> Result<(), RecorderFull> {
        self.commands.push(command).map_err(|_| RecorderFull)
    }
}

impl GaugeSurface for CommandRecorder {
    type Error = RecorderFull;

    fn translate(
        &mut self,
        dx: i32,
        dy: i32,
    ) {
        // A full recorder already failed the frame; the translation is lost with it.
        self.record(DrawCommand::Translate { dx, dy }).ok();
    }

    fn draw_arc(
        &mut self,
        rect: LayoutRect,
        start_angle: f32,
        sweep_angle: f32,
        paint: PaintSpec,
    ) -> Result<(), Self::Error> {
        self.record(DrawCommand::Arc { rect, start_angle, sweep_angle, paint })
    }

    fn draw_rect(
        &mut self,
        rect: LayoutRect,
        paint: PaintSpec,
    ) -> Result<(), Self::Error> {
        self.record(DrawCommand::Rect { rect, paint })
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;
    use crate::colors::{GREEN, RED};

    #[test]
    fn test_recorder_keeps_order() {
        let mut recorder = CommandRecorder::new();
        let rect = LayoutRect::new(0, 0, 10, 10);
        let paint = PaintSpec::new(RED, 1);

        recorder.translate(1, 1);
        recorder.draw_rect(rect, paint).unwrap();
        recorder.draw_arc(rect, 0.0, 90.0, paint).unwrap();

        assert_eq!(
            recorder.commands(),
            &[
                DrawCommand::Translate { dx: 1, dy: 1 },
                DrawCommand::Rect { rect, paint },
                DrawCommand::Arc { rect, start_angle: 0.0, sweep_angle: 90.0, paint },
            ]
        );

        recorder.clear();
        assert!(recorder.commands().is_empty());
    }

    #[test]
    fn test_recorder_reports_full() {
        let mut recorder = CommandRecorder::new();
        let rect = LayoutRect::new(0, 0, 4, 4);
        let paint = PaintSpec::new(RED, 1);

        for _ in 0..RECORDER_CAPACITY {
            recorder.draw_rect(rect, paint).unwrap();
        }
        assert_eq!(recorder.draw_rect(rect, paint), Err(RecorderFull));
        assert_eq!(recorder.commands().len(), RECORDER_CAPACITY);
    }

    #[test]
    fn test_canvas_draws_rect_outline() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        display.set_allow_overdraw(true);
        let mut canvas = Canvas::new(&mut display);

        canvas.draw_rect(LayoutRect::new(2, 2, 12, 12), PaintSpec::new(GREEN, 1)).unwrap();

        // 1px centered stroke lands on the rectangle's own pixels
        assert_eq!(display.get_pixel(Point::new(2, 2)), Some(GREEN));
        assert_eq!(display.get_pixel(Point::new(11, 11)), Some(GREEN));
        assert_eq!(display.get_pixel(Point::new(6, 6)), None);
    }

    #[test]
    fn test_canvas_translation_applies_to_draws() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        display.set_allow_overdraw(true);
        let mut canvas = Canvas::new(&mut display);

        canvas.translate(3, 4);
        assert_eq!(canvas.origin(), Point::new(3, 4));
        canvas.draw_rect(LayoutRect::new(0, 0, 5, 5), PaintSpec::new(RED, 1)).unwrap();

        assert_eq!(display.get_pixel(Point::new(3, 4)), Some(RED));
        assert_eq!(display.get_pixel(Point::new(0, 0)), None);
    }

    #[test]
    fn test_canvas_draws_arc() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        display.set_allow_overdraw(true);
        let mut canvas = Canvas::new(&mut display);

        canvas.draw_arc(LayoutRect::new(0, 0, 21, 21), -90.0, 360.0, PaintSpec::new(RED, 1)).unwrap();

        let area = display.affected_area();
        assert!(area.size.width > 0 && area.size.height > 0);
        // Inside of the ring stays untouched
        assert_eq!(display.get_pixel(Point::new(10, 10)), None);
    }
}
