//! Gauge layout: content padding and the two ring rectangles.
//!
//! Both rectangles are recomputed from the current widget extent on every
//! draw, nothing here is cached.
//!
//! ```text
//!  padding.left
//!  |
//!  +---------------------------+  <- body rect (right/bottom inset by body stroke)
//!  |  +---------------------+  |
//!  |  |                     |  |  <- scale rect (every edge inset by
//!  |  |                     |  |     body stroke + scale stroke)
//!  |  +---------------------+  |
//!  +---------------------------+
//! ```

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

/// Content padding in pixels.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Padding {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Padding {
    /// No padding on any side.
    pub const ZERO: Self = Self::uniform(0);

    /// Create padding from individual sides.
    pub const fn new(
        left: u32,
        top: u32,
        right: u32,
        bottom: u32,
    ) -> Self {
        Self { left, top, right, bottom }
    }

    /// Same padding on every side.
    pub const fn uniform(value: u32) -> Self { Self::new(value, value, value, value) }

    /// Left plus right padding.
    #[inline]
    pub const fn horizontal(&self) -> u32 { self.left.saturating_add(self.right) }

    /// Top plus bottom padding.
    #[inline]
    pub const fn vertical(&self) -> u32 { self.top.saturating_add(self.bottom) }
}

/// Axis-aligned rectangle given by its edges, in pixels.
///
/// Edges follow the canvas convention: `right` and `bottom` are exclusive,
/// so `width = right - left`. A rectangle whose far edge lies before its near
/// edge is inverted and has zero width or height.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct LayoutRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl LayoutRect {
    pub const fn new(
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
    ) -> Self {
        Self { left, top, right, bottom }
    }

    /// Horizontal extent, zero when inverted.
    #[inline]
    pub const fn width(&self) -> u32 {
        if self.right > self.left { self.right.abs_diff(self.left) } else { 0 }
    }

    /// Vertical extent, zero when inverted.
    #[inline]
    pub const fn height(&self) -> u32 {
        if self.bottom > self.top { self.bottom.abs_diff(self.top) } else { 0 }
    }

    /// True when the rectangle covers no pixels.
    #[inline]
    pub const fn is_empty(&self) -> bool { self.width() == 0 || self.height() == 0 }

    /// Move every edge inwards by `amount`.
    #[must_use]
    pub const fn inset(
        &self,
        amount: i32,
    ) -> Self {
        Self::new(
            self.left.saturating_add(amount),
            self.top.saturating_add(amount),
            self.right.saturating_sub(amount),
            self.bottom.saturating_sub(amount),
        )
    }

    /// Shift the rectangle by `(dx, dy)`.
    #[must_use]
    pub const fn translate(
        &self,
        dx: i32,
        dy: i32,
    ) -> Self {
        Self::new(
            self.left.saturating_add(dx),
            self.top.saturating_add(dy),
            self.right.saturating_add(dx),
            self.bottom.saturating_add(dy),
        )
    }

    /// True when `other` lies strictly inside this rectangle on every side.
    pub const fn strictly_contains(
        &self,
        other: &Self,
    ) -> bool {
        other.left > self.left && other.top > self.top && other.right < self.right && other.bottom < self.bottom
    }

    /// Top-left corner.
    #[inline]
    pub const fn top_left(&self) -> Point { Point::new(self.left, self.top) }

    /// Diameter of the circle an arc over this rectangle is drawn on.
    ///
    /// Arcs are circular, so a non-square rectangle uses its shorter side.
    #[inline]
    pub const fn arc_diameter(&self) -> u32 {
        let (w, h) = (self.width(), self.height());
        if w < h { w } else { h }
    }

    /// Convert into an `embedded-graphics` rectangle.
    pub const fn to_rectangle(&self) -> Rectangle { Rectangle::new(self.top_left(), Size::new(self.width(), self.height())) }
}

impl From<LayoutRect> for Rectangle {
    fn from(rect: LayoutRect) -> Self { rect.to_rectangle() }
}

/// Pixel coordinate for an unsigned length, clamped to `i32::MAX`.
#[inline]
const fn to_coord(value: u32) -> i32 { if value > i32::MAX as u32 { i32::MAX } else { value as i32 } }

/// Rectangle the body ring is drawn in.
///
/// Lengths beyond `i32::MAX` are clamped and the edge arithmetic saturates.
pub const fn layout_body_rect(
    width: u32,
    height: u32,
    padding: Padding,
    body_stroke_width: u32,
) -> LayoutRect {
    let stroke = to_coord(body_stroke_width);
    LayoutRect::new(
        to_coord(padding.left),
        to_coord(padding.top),
        to_coord(width).saturating_sub(stroke).saturating_sub(to_coord(padding.right)),
        to_coord(height).saturating_sub(stroke).saturating_sub(to_coord(padding.bottom)),
    )
}

/// Rectangle the scale arc is drawn in: the body rect inset by both strokes.
pub const fn layout_scale_rect(
    width: u32,
    height: u32,
    padding: Padding,
    body_stroke_width: u32,
    scale_stroke_width: u32,
) -> LayoutRect {
    layout_body_rect(width, height, padding, body_stroke_width)
        .inset(to_coord(body_stroke_width).saturating_add(to_coord(scale_stroke_width)))
}
