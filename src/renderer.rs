//! Gauge renderer: turns the two ring rectangles into draw calls.
//!
//! Each render pass issues four commands, always in this order:
//!
//! | # | Primitive | Rect  | Start | Sweep | Paint |
//! |---|-----------|-------|-------|-------|-------|
//! | 1 | Arc       | body  | -90   | 360   | body  |
//! | 2 | Outline   | body  |       |       | body  |
//! | 3 | Arc       | scale | -65   | 330   | scale |
//! | 4 | Outline   | scale |       |       | scale |
//!
//! The outlines duplicate the arcs' bounding boxes; existing skins rely on
//! them so they stay. Angles never depend on the gauge state.

use crate::config::{BODY_START_ANGLE, BODY_SWEEP_ANGLE, SCALE_START_ANGLE, SCALE_SWEEP_ANGLE};
use crate::layout::LayoutRect;
use crate::styles::PaintSpec;
use crate::surface::GaugeSurface;

/// Stateless gauge renderer.
#[derive(Clone, Copy, Debug, Default)]
pub struct GaugeRenderer;

impl GaugeRenderer {
    /// Issue the body ring and scale arc draw commands.
    pub fn render<S>(
        surface: &mut S,
        body_rect: LayoutRect,
        scale_rect: LayoutRect,
        body_paint: PaintSpec,
        scale_paint: PaintSpec,
    ) -> Result<(), S::Error>
    where
        S: GaugeSurface + ?Sized,
    {
        surface.draw_arc(body_rect, BODY_START_ANGLE, BODY_SWEEP_ANGLE, body_paint)?;
        surface.draw_rect(body_rect, body_paint)?;
        surface.draw_arc(scale_rect, SCALE_START_ANGLE, SCALE_SWEEP_ANGLE, scale_paint)?;
        surface.draw_rect(scale_rect, scale_paint)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{GREEN, RED, WHITE};
    use crate::layout::{Padding, layout_body_rect, layout_scale_rect};
    use crate::surface::{CommandRecorder, DrawCommand};

    fn reference_rects() -> (LayoutRect, LayoutRect) {
        (
            layout_body_rect(300, 300, Padding::ZERO, 10),
            layout_scale_rect(300, 300, Padding::ZERO, 10, 5),
        )
    }

    #[test]
    fn test_render_issues_commands_in_order() {
        let (body, scale) = reference_rects();
        let body_paint = PaintSpec::body(10);
        let scale_paint = PaintSpec::new(GREEN, 5);
        let mut recorder = CommandRecorder::new();

        GaugeRenderer::render(&mut recorder, body, scale, body_paint, scale_paint).unwrap();

        assert_eq!(
            recorder.commands(),
            &[
                DrawCommand::Arc { rect: body, start_angle: -90.0, sweep_angle: 360.0, paint: body_paint },
                DrawCommand::Rect { rect: body, paint: body_paint },
                DrawCommand::Arc { rect: scale, start_angle: -65.0, sweep_angle: 330.0, paint: scale_paint },
                DrawCommand::Rect { rect: scale, paint: scale_paint },
            ]
        );
    }

    #[test]
    fn test_arc_angles_independent_of_paint() {
        let (body, scale) = reference_rects();

        for (color, width) in [(RED, 1), (WHITE, 20), (GREEN, 0)] {
            let mut recorder = CommandRecorder::new();
            GaugeRenderer::render(&mut recorder, body, scale, PaintSpec::new(color, width), PaintSpec::new(color, width))
                .unwrap();

            let arcs = recorder.commands().iter().filter_map(|command| match command {
                DrawCommand::Arc { start_angle, sweep_angle, .. } => Some((*start_angle, *sweep_angle)),
                _ => None,
            });
            let mut count = 0;
            for (i, angles) in arcs.enumerate() {
                let expected = if i == 0 { (-90.0, 360.0) } else { (-65.0, 330.0) };
                assert_eq!(angles, expected);
                count += 1;
            }
            assert_eq!(count, 2);
        }
    }
}
