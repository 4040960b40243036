//! Sizing protocol: per-axis constraints and square extent resolution.
//!
//! A host lays the widget out by handing it one [`Constraint`] per axis. The
//! gauge resolves both axes independently and then reports the smaller of the
//! two so the result is always square.

use crate::layout::Padding;

/// Sizing instruction for one axis.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Constraint {
    /// The parent dictates the exact size.
    Exactly(u32),
    /// The widget may be as large as it wants up to this size.
    AtMost(u32),
    /// No constraint; the widget picks its desired size.
    #[default]
    Unspecified,
}

impl Constraint {
    /// Size value carried by the constraint, `0` when unspecified.
    #[inline]
    pub const fn size(self) -> u32 {
        match self {
            Self::Exactly(size) | Self::AtMost(size) => size,
            Self::Unspecified => 0,
        }
    }
}

/// Resolve a desired size against an axis constraint.
#[inline]
pub const fn resolve_size(
    desired: u32,
    constraint: Constraint,
) -> u32 {
    match constraint {
        Constraint::Exactly(size) => size,
        Constraint::AtMost(size) => {
            if desired < size {
                desired
            } else {
                size
            }
        }
        Constraint::Unspecified => desired,
    }
}

/// Compute the side of the square the gauge occupies.
///
/// The larger suggested minimum plus the padding of each axis is resolved
/// against that axis' constraint; the smaller result wins.
pub fn compute_square_extent(
    suggested_min_width: u32,
    suggested_min_height: u32,
    padding: Padding,
    width_constraint: Constraint,
    height_constraint: Constraint,
) -> u32 {
    let suggested = suggested_min_width.max(suggested_min_height);
    let width = resolve_size(suggested.saturating_add(padding.horizontal()), width_constraint);
    let height = resolve_size(suggested.saturating_add(padding.vertical()), height_constraint);
    width.min(height)
}
