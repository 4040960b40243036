//! Color constants and conversions for the gauge.
//!
//! Colors are stored as `Rgb565`, the native format of the draw targets this
//! crate renders to. Style attributes deliver colors as 32-bit ARGB integers
//! (`0xAARRGGBB`), so [`color_from_argb`] narrows them to 5-6-5 bits.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Also what an unset color attribute (`0`) resolves to.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red. Default high speed band in the simulator style.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green. Default low speed band in the simulator style.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure yellow.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Custom Colors
// =============================================================================

/// Orange. Default arrow color in the simulator style.
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

/// Dark gray used for the speedometer body ring.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Convert a packed `0xAARRGGBB` color into `Rgb565`.
///
/// Alpha is ignored; the low bits of each channel are truncated.
pub const fn color_from_argb(argb: u32) -> Rgb565 {
    let r = ((argb >> 16) & 0xFF) as u8;
    let g = ((argb >> 8) & 0xFF) as u8;
    let b = (argb & 0xFF) as u8;
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_argb_zero_is_black() {
        assert_eq!(color_from_argb(0), BLACK);
    }

    #[test]
    fn test_color_from_argb_primaries() {
        assert_eq!(color_from_argb(0xFFFF_0000), RED);
        assert_eq!(color_from_argb(0xFF00_FF00), GREEN);
        assert_eq!(color_from_argb(0xFFFF_FFFF), WHITE);
    }

    #[test]
    fn test_color_from_argb_ignores_alpha() {
        assert_eq!(color_from_argb(0x00FF_0000), color_from_argb(0x80FF_0000));
    }
}
