//! Gauge state: speed, speed-band colors, arrow color and stroke widths.
//!
//! Accessors are plain and unvalidated. Setters mark the state dirty when the
//! stored value actually changes; the host consumes the flag with
//! [`GaugeState::take_dirty`] to decide whether a new frame is needed.

use embedded_graphics::pixelcolor::Rgb565;

use crate::attributes::{Attr, AttributeProvider, ObtainedAttributes};
use crate::colors::BLACK;
use crate::config::{DEFAULT_BODY_STROKE_WIDTH, DEFAULT_SCALE_STROKE_WIDTH};
use crate::styles::PaintSpec;

/// Mutable gauge configuration, owned by a single view.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GaugeState {
    speed: i32,
    max_speed: i32,
    low_speed_color: Rgb565,
    normal_speed_color: Rgb565,
    high_speed_color: Rgb565,
    arrow_color: Rgb565,
    body_stroke_width: u32,
    scale_stroke_width: u32,

    /// Set by setters, cleared by `take_dirty`. Starts set so the first frame draws.
    dirty: bool,
}

/// Generates a getter and a dirty-marking setter per field.
macro_rules! accessors {
    ($($(#[$doc:meta])* $field:ident, $setter:ident: $ty:ty;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub const fn $field(&self) -> $ty { self.$field }

            $(#[$doc])*
            pub fn $setter(
                &mut self,
                value: $ty,
            ) {
                if self.$field != value {
                    self.$field = value;
                    self.dirty = true;
                }
            }
        )*
    };
}

impl GaugeState {
    /// Zero speed, black colors, default stroke widths.
    pub const fn new() -> Self {
        Self {
            speed: 0,
            max_speed: 0,
            low_speed_color: BLACK,
            normal_speed_color: BLACK,
            high_speed_color: BLACK,
            arrow_color: BLACK,
            body_stroke_width: DEFAULT_BODY_STROKE_WIDTH,
            scale_stroke_width: DEFAULT_SCALE_STROKE_WIDTH,
            dirty: true,
        }
    }

    /// Read the whole state from a style provider.
    ///
    /// The provider is obtained once and released before returning.
    pub fn from_attributes<P>(provider: &mut P) -> Self
    where
        P: AttributeProvider + ?Sized,
    {
        let attrs = ObtainedAttributes::obtain(provider);
        Self {
            speed: attrs.integer(Attr::Speed, 0),
            max_speed: attrs.integer(Attr::MaxSpeed, 0),
            low_speed_color: attrs.color(Attr::LowSpeedColor),
            normal_speed_color: attrs.color(Attr::NormalSpeedColor),
            high_speed_color: attrs.color(Attr::HighSpeedColor),
            arrow_color: attrs.color(Attr::ArrowColor),
            body_stroke_width: attrs.dimension(Attr::BodyStrokeWidth, DEFAULT_BODY_STROKE_WIDTH),
            scale_stroke_width: attrs.dimension(Attr::ScaleStrokeWidth, DEFAULT_SCALE_STROKE_WIDTH),
            dirty: true,
        }
    }

    accessors! {
        /// Current speed.
        speed, set_speed: i32;
        /// Top of the scale.
        max_speed, set_max_speed: i32;
        /// Low speed band color.
        low_speed_color, set_low_speed_color: Rgb565;
        /// Normal speed band color. Also the scale arc's stroke color.
        normal_speed_color, set_normal_speed_color: Rgb565;
        /// High speed band color.
        high_speed_color, set_high_speed_color: Rgb565;
        /// Needle color.
        arrow_color, set_arrow_color: Rgb565;
        /// Body ring stroke width in pixels.
        body_stroke_width, set_body_stroke_width: u32;
        /// Scale arc stroke width in pixels.
        scale_stroke_width, set_scale_stroke_width: u32;
    }

    /// Paint for the body ring.
    #[inline]
    pub const fn body_paint(&self) -> PaintSpec { PaintSpec::body(self.body_stroke_width) }

    /// Paint for the scale arc.
    ///
    /// Uses the normal speed color; the three bands are not blended.
    #[inline]
    pub const fn scale_paint(&self) -> PaintSpec { PaintSpec::new(self.normal_speed_color, self.scale_stroke_width) }

    /// Whether a setter changed something since the last [`take_dirty`](Self::take_dirty).
    #[inline]
    pub const fn is_dirty(&self) -> bool { self.dirty }

    /// Return the dirty flag and clear it.
    #[inline]
    pub const fn take_dirty(&mut self) -> bool {
        let dirty = self.dirty;
        self.dirty = false;
        dirty
    }

    /// Force the next frame to redraw.
    #[inline]
    pub const fn mark_dirty(&mut self) { self.dirty = true; }
}

impl Default for GaugeState {
    fn default() -> Self { Self::new() }
}
