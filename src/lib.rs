//! Circular speedometer gauge widget.
//!
//! Draws a body ring and a partial scale arc onto any `embedded-graphics`
//! draw target. The crate is platform-agnostic and `no_std`:
//!
//! - [`attributes`]: Style attribute provider and scoped acquisition guard
//! - [`colors`]: RGB565 constants and ARGB conversion
//! - [`config`]: Arc angles, stroke defaults, frame timing
//! - [`measure`]: Per-axis constraints and square extent resolution
//! - [`layout`]: Padding and the body/scale rectangles
//! - [`styles`]: Stroke paint specifications
//! - [`surface`]: Drawing surface trait, `DrawTarget` adapter, command recorder
//! - [`renderer`]: The four draw commands of a gauge frame
//! - [`state`]: Speed, colors and stroke widths with dirty tracking
//! - [`animations`]: Frame ticker and redraw policy
//! - [`view`]: The widget as a host toolkit drives it
//! - [`debug_log`]: Ring buffer of debug messages
//!
//! # Testing
//!
//! Tests run with `std` enabled (via `cfg_attr`), the library itself stays
//! `no_std`.
//!
//! ```bash
//! cargo test --lib
//! cargo run --features simulator --bin simulator
//! ```

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animations;
pub mod attributes;
pub mod colors;
pub mod config;
pub mod debug_log;
pub mod layout;
pub mod measure;
pub mod renderer;
pub mod state;
pub mod styles;
pub mod surface;
pub mod view;

// Re-export commonly used items
pub use animations::{FrameTicker, RedrawPolicy};
pub use attributes::{Attr, AttributeProvider, ObtainedAttributes, StyleSheet};
pub use layout::{LayoutRect, Padding, layout_body_rect, layout_scale_rect};
pub use measure::{Constraint, compute_square_extent, resolve_size};
pub use renderer::GaugeRenderer;
pub use state::GaugeState;
pub use styles::PaintSpec;
pub use surface::{Canvas, CommandRecorder, DrawCommand, GaugeSurface, RecorderFull};
pub use view::GaugeView;
