//! Paint specifications for the gauge strokes.
//!
//! Every gauge primitive is a stroked outline, never filled. A [`PaintSpec`]
//! carries the stroke color and width and converts to an `embedded-graphics`
//! `PrimitiveStyle` at draw time. `PrimitiveStyle::with_stroke()` is a
//! `const fn`, so fixed paints can live in `const` items.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::PrimitiveStyle;

use crate::config::BODY_COLOR;

/// Stroke paint for one gauge primitive.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PaintSpec {
    pub color: Rgb565,
    pub stroke_width: u32,
}

impl PaintSpec {
    pub const fn new(
        color: Rgb565,
        stroke_width: u32,
    ) -> Self {
        Self { color, stroke_width }
    }

    /// Paint for the body ring.
    pub const fn body(stroke_width: u32) -> Self { Self::new(BODY_COLOR, stroke_width) }

    /// Centered stroke style, no fill.
    #[inline]
    pub const fn primitive_style(&self) -> PrimitiveStyle<Rgb565> { PrimitiveStyle::with_stroke(self.color, self.stroke_width) }
}
