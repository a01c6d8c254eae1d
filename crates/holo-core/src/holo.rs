//! Pointer-to-visual mapping for the holo effect.
//!
//! Everything here is a pure function of the card geometry and the pointer
//! position. The resulting [`HoloState`] renders to the CSS custom properties
//! consumed by the card stylesheet.

use crate::constants::{
    ACTIVE_OPACITY, CENTER_PERCENT, HYP_DECIMALS, HYP_MAX, PERCENT_DECIMALS, TILT_DIVISOR,
};
use glam::DVec2;
use smallvec::SmallVec;

/// Bounding box of a card in client coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CardRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.left, self.top)
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        self.origin() + DVec2::new(self.width, self.height) * 0.5
    }
}

/// Visual property set written onto a card while it is hovered or touched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoloState {
    /// Pointer x as a percentage of the card width, in [0, 100].
    pub px: f64,
    /// Pointer y as a percentage of the card height, in [0, 100].
    pub py: f64,
    /// Distance from the centre, normalized by half the size, in [0, 0.5].
    pub hyp: f64,
    /// Tilt around the vertical axis in degrees.
    pub rx: f64,
    /// Tilt around the horizontal axis in degrees (y inverted).
    pub ry: f64,
    /// Shine opacity.
    pub o: f64,
}

/// CSS custom property names, in the order they are written.
pub const PROPERTY_NAMES: [&str; 8] = [
    "--mx", "--my", "--posx", "--posy", "--hyp", "--rx", "--ry", "--o",
];

pub type PropertyList = SmallVec<[(&'static str, String); 8]>;

impl HoloState {
    /// Resting state: centred, flat, invisible shine.
    pub const NEUTRAL: HoloState = HoloState {
        px: CENTER_PERCENT,
        py: CENTER_PERCENT,
        hyp: 0.0,
        rx: 0.0,
        ry: 0.0,
        o: 0.0,
    };

    /// Render as `(name, value)` pairs ready for `style.setProperty`.
    pub fn properties(&self) -> PropertyList {
        let mut out = PropertyList::new();
        out.push((PROPERTY_NAMES[0], format!("{}%", self.px)));
        out.push((PROPERTY_NAMES[1], format!("{}%", self.py)));
        out.push((PROPERTY_NAMES[2], format!("{}%", self.px)));
        out.push((PROPERTY_NAMES[3], format!("{}%", self.py)));
        out.push((PROPERTY_NAMES[4], format!("{}", self.hyp)));
        out.push((PROPERTY_NAMES[5], format!("{}deg", self.rx)));
        out.push((PROPERTY_NAMES[6], format!("{}deg", self.ry)));
        out.push((PROPERTY_NAMES[7], format!("{}", self.o)));
        out
    }
}

impl Default for HoloState {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Round to `decimals` places, halves toward +∞; never yields negative zero.
/// Same result as `Math.round(value * 10^d) / 10^d` in the browser.
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let f = 10f64.powi(decimals);
    let scaled = value * f;
    let floor = scaled.floor();
    // `scaled + 0.5` can itself round up, so compare the fraction instead
    let whole = if scaled - floor >= 0.5 { floor + 1.0 } else { floor };
    whole / f + 0.0
}

/// Percentage of `offset` along `extent`, clamped to [0, 100].
/// Degenerate extents and non-finite offsets fall back to the centre.
#[inline]
pub fn axis_percent(offset: f64, extent: f64) -> f64 {
    if !extent.is_finite() || extent <= 0.0 || !offset.is_finite() {
        return CENTER_PERCENT;
    }
    ((offset / extent) * 100.0).clamp(0.0, 100.0)
}

/// Distance of a percentage position from the centre, 0 at centre, 1 at an edge midpoint.
#[inline]
pub fn hypotenuse(px: f64, py: f64) -> f64 {
    let d = DVec2::new(px, py) - DVec2::splat(CENTER_PERCENT);
    d.length() / CENTER_PERCENT
}

/// Map a client-space pointer position onto the visual property set of a card.
pub fn map_pointer(rect: CardRect, pointer: DVec2) -> HoloState {
    let local = pointer - rect.origin();
    let px = axis_percent(local.x, rect.width);
    let py = axis_percent(local.y, rect.height);

    HoloState {
        px: round_to(px, PERCENT_DECIMALS),
        py: round_to(py, PERCENT_DECIMALS),
        hyp: round_to(hypotenuse(px, py).min(HYP_MAX), HYP_DECIMALS),
        rx: round_to((px - CENTER_PERCENT) / TILT_DIVISOR, PERCENT_DECIMALS),
        ry: round_to((CENTER_PERCENT - py) / TILT_DIVISOR, PERCENT_DECIMALS),
        o: ACTIVE_OPACITY,
    }
}
