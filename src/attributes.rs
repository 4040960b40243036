//! Style attribute resolution.
//!
//! A host hands the gauge its style through an [`AttributeProvider`]. Reading
//! is a scoped acquisition: [`ObtainedAttributes`] obtains the provider when
//! created and releases it when dropped, so the provider is released on every
//! exit path, early returns included.
//!
//! Missing attributes fall back silently: integers and colors to `0`, stroke
//! widths to the configured defaults.

use embedded_graphics::pixelcolor::Rgb565;
use heapless::LinearMap;

use crate::colors::color_from_argb;

/// Styleable gauge attributes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Attr {
    Speed,
    MaxSpeed,
    LowSpeedColor,
    NormalSpeedColor,
    HighSpeedColor,
    ArrowColor,
    BodyStrokeWidth,
    ScaleStrokeWidth,
}

impl Attr {
    /// Number of attributes.
    pub const COUNT: usize = 8;

    /// Every attribute, in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Speed,
        Self::MaxSpeed,
        Self::LowSpeedColor,
        Self::NormalSpeedColor,
        Self::HighSpeedColor,
        Self::ArrowColor,
        Self::BodyStrokeWidth,
        Self::ScaleStrokeWidth,
    ];
}

/// Source of raw attribute values.
///
/// Values are raw 32-bit words: signed integers are stored two's complement,
/// colors as `0xAARRGGBB`, dimensions as pixels.
pub trait AttributeProvider {
    /// Acquire whatever backs the attribute values.
    fn obtain(&mut self);

    /// Raw value of `attr`, `None` when the style does not set it.
    fn get(
        &self,
        attr: Attr,
    ) -> Option<u32>;

    /// Release what [`obtain`](Self::obtain) acquired.
    fn release(&mut self);
}

/// Scoped, typed view over an obtained [`AttributeProvider`].
pub struct ObtainedAttributes<'a, P>
where
    P: AttributeProvider + ?Sized,
{
    provider: &'a mut P,
}

impl<'a, P> ObtainedAttributes<'a, P>
where
    P: AttributeProvider + ?Sized,
{
    /// Obtain `provider`; it is released when the returned guard drops.
    pub fn obtain(provider: &'a mut P) -> Self {
        provider.obtain();
        Self { provider }
    }

    /// Raw value of `attr`.
    #[inline]
    pub fn get(
        &self,
        attr: Attr,
    ) -> Option<u32> {
        self.provider.get(attr)
    }

    /// Signed integer attribute, `default` when unset.
    pub fn integer(
        &self,
        attr: Attr,
        default: i32,
    ) -> i32 {
        self.get(attr).map_or(default, |raw| raw as i32)
    }

    /// Color attribute, black when unset.
    pub fn color(
        &self,
        attr: Attr,
    ) -> Rgb565 {
        color_from_argb(self.get(attr).unwrap_or(0))
    }

    /// Pixel dimension attribute, `default` when unset.
    pub fn dimension(
        &self,
        attr: Attr,
        default: u32,
    ) -> u32 {
        self.get(attr).unwrap_or(default)
    }
}

impl<P> Drop for ObtainedAttributes<'_, P>
where
    P: AttributeProvider + ?Sized,
{
    fn drop(&mut self) { self.provider.release(); }
}

// =============================================================================
// In-memory Style Sheet
// =============================================================================

/// In-memory [`AttributeProvider`].
///
/// Tracks how often it was obtained and released so hosts can verify that
/// every acquisition is paired.
#[derive(Default)]
pub struct StyleSheet {
    values: LinearMap<Attr, u32, { Attr::COUNT }>,
    obtained: u32,
    released: u32,
}

impl StyleSheet {
    /// Empty style: every attribute falls back to its default.
    pub fn new() -> Self { Self { values: LinearMap::new(), obtained: 0, released: 0 } }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(
        mut self,
        attr: Attr,
        value: u32,
    ) -> Self {
        self.set(attr, value);
        self
    }

    /// Builder form of [`set_integer`](Self::set_integer).
    #[must_use]
    pub fn with_integer(
        mut self,
        attr: Attr,
        value: i32,
    ) -> Self {
        self.set_integer(attr, value);
        self
    }

    /// Set a raw attribute value, replacing any previous one.
    pub fn set(
        &mut self,
        attr: Attr,
        value: u32,
    ) {
        // One slot per attribute, so the map never runs out of room.
        self.values.insert(attr, value).ok();
    }

    /// Set a signed integer attribute.
    pub fn set_integer(
        &mut self,
        attr: Attr,
        value: i32,
    ) {
        self.set(attr, value as u32);
    }

    /// Unset an attribute.
    pub fn remove(
        &mut self,
        attr: Attr,
    ) -> Option<u32> {
        self.values.remove(&attr)
    }

    /// True while obtained and not yet released.
    #[inline]
    pub const fn is_obtained(&self) -> bool { self.obtained > self.released }

    /// Number of acquisitions so far.
    #[inline]
    pub const fn acquisitions(&self) -> u32 { self.obtained }

    /// Number of releases so far.
    #[inline]
    pub const fn releases(&self) -> u32 { self.released }
}

impl AttributeProvider for StyleSheet {
    fn obtain(&mut self) { self.obtained += 1; }

    fn get(
        &self,
        attr: Attr,
    ) -> Option<u32> {
        self.values.get(&attr).copied()
    }

    fn release(&mut self) { self.released += 1; }
}
