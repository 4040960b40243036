//! Gauge configuration constants.
//!
//! Everything here is a compile-time `const`: arc geometry, stroke defaults,
//! and the frame pacing used by hosts that drive the widget.

use core::time::Duration;

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::GRAY;

// =============================================================================
// Arc Geometry
// =============================================================================

/// Start angle of the body ring in degrees (twelve o'clock).
pub const BODY_START_ANGLE: f32 = -90.0;

/// Sweep of the body ring in degrees (full circle).
pub const BODY_SWEEP_ANGLE: f32 = 360.0;

/// Start angle of the scale arc in degrees.
pub const SCALE_START_ANGLE: f32 = -65.0;

/// Sweep of the scale arc in degrees. Leaves a 30 degree gap at the top.
pub const SCALE_SWEEP_ANGLE: f32 = 330.0;

const _: () = assert!(BODY_SWEEP_ANGLE <= 360.0);
const _: () = assert!(SCALE_SWEEP_ANGLE < BODY_SWEEP_ANGLE);

// =============================================================================
// Stroke Defaults
// =============================================================================

/// Body ring stroke width used when the style does not provide one.
pub const DEFAULT_BODY_STROKE_WIDTH: u32 = 10;

/// Scale arc stroke width used when the style does not provide one.
pub const DEFAULT_SCALE_STROKE_WIDTH: u32 = 5;

/// Color of the body ring. Not styleable.
pub const BODY_COLOR: Rgb565 = GRAY;

// =============================================================================
// Sizing
// =============================================================================

/// Suggested minimum side length reported by a freshly created view.
pub const DEFAULT_SUGGESTED_MIN_SIZE: u32 = 0;

// =============================================================================
// Timing
// =============================================================================

/// Target frame time (~50 FPS) for hosts that tick the gauge.
pub const FRAME_TIME: Duration = Duration::from_millis(20);
