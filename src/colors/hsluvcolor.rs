//! This module implements HSLuv: a hue, saturation and lightness space with the familiar shape of
//! HSL, but built on CIELCHuv so that lightness is perceptual and hue is a real angle. Saturation
//! is chroma measured as a percentage of the most chroma sRGB can show at that hue and lightness,
//! so every (h, s, l) with s and l between 0 and 100 is a displayable color, and s = 100 is always
//! on the edge of the gamut.

use super::cielchuvcolor::CIELCHuvColor;
use crate::color::{Color, RGBColor, XYZColor};
use crate::consts::{BLACK_LIGHTNESS, GRAY_CHROMA, WHITE_LIGHTNESS};
use crate::coord::Coord;
use crate::gamut;

/// Turns LCH into (hue, saturation, lightness), with saturation measured against `max_chroma`,
/// a function of lightness and hue.
pub(crate) fn lch_to_hsl<F: Fn(f64, f64) -> f64>(lch: CIELCHuvColor, max_chroma: F) -> Coord {
    // black and white have nowhere to go: any saturation is as good as any other
    let s = if lch.l > WHITE_LIGHTNESS || lch.l < BLACK_LIGHTNESS {
        0.0
    } else {
        lch.c / max_chroma(lch.l, lch.h) * 100.0
    };
    let h = if lch.c < GRAY_CHROMA { 0.0 } else { lch.h };
    Coord { x: h, y: s, z: lch.l }
}

/// The inverse of `lch_to_hsl`.
pub(crate) fn hsl_to_lch<F: Fn(f64, f64) -> f64>(hsl: Coord, max_chroma: F) -> CIELCHuvColor {
    let (h, s, l) = (hsl.x, hsl.y, hsl.z);
    let c = if l > WHITE_LIGHTNESS || l < BLACK_LIGHTNESS {
        0.0
    } else {
        max_chroma(l, h) / 100.0 * s
    };
    let h = if s < GRAY_CHROMA { 0.0 } else { h };
    CIELCHuvColor { l, c, h }
}

/// Wraps any angle into [0, 360).
pub(crate) fn wrap_hue(h: f64) -> f64 {
    let wrapped = h % 360.0;
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// A color in HSLuv.
/// # Example
///
/// ```
/// # use scarlet_hsluv::prelude::*;
/// # use scarlet_hsluv::colors::HSLuvColor;
/// // the same saturation and lightness look equally vivid and equally bright at every hue
/// let coral = HSLuvColor{h: 10., s: 80., l: 65.};
/// let sky = coral.with_hue(240.);
/// let coral_rgb: RGBColor = coral.convert();
/// let sky_rgb: RGBColor = sky.convert();
/// println!("{} {}", coral_rgb, sky_rgb);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSLuvColor {
    /// Hue in degrees, the same angle as CIELCHuv's. Ranges from 0 to 360; grays report 0.
    pub h: f64,
    /// Saturation as a percentage of the largest chroma sRGB can display at this hue and
    /// lightness. Between 0 and 100 for every sRGB color.
    pub s: f64,
    /// Lightness, identical to CIELUV's. Ranges from 0 (black) to 100 (white).
    pub l: f64,
}

impl Color for HSLuvColor {
    fn from_xyz(xyz: XYZColor) -> HSLuvColor {
        let lch = CIELCHuvColor::from_xyz(xyz);
        HSLuvColor::from(lch_to_hsl(lch, gamut::max_chroma_for_lh))
    }
    fn to_xyz(&self) -> XYZColor {
        hsl_to_lch((*self).into(), gamut::max_chroma_for_lh).to_xyz()
    }
}

impl HSLuvColor {
    /// Converts 8-bit sRGB channels into HSLuv.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> HSLuvColor {
        RGBColor::from((r, g, b)).convert()
    }

    /// Converts to 8-bit sRGB channels, clamping anything that lands outside the gamut.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        self.convert::<RGBColor>().to_rgb8()
    }

    /// Returns this color with the hue replaced, wrapped into [0, 360).
    pub fn with_hue(&self, h: f64) -> HSLuvColor {
        HSLuvColor {
            h: wrap_hue(h),
            ..*self
        }
    }

    /// Returns this color with the saturation replaced.
    pub fn with_saturation(&self, s: f64) -> HSLuvColor {
        HSLuvColor { s, ..*self }
    }

    /// Returns this color with the lightness replaced.
    pub fn with_lightness(&self, l: f64) -> HSLuvColor {
        HSLuvColor { l, ..*self }
    }

    /// Rotates the hue by `degrees`, wrapping around the circle.
    pub fn rotate_hue(&self, degrees: f64) -> HSLuvColor {
        self.with_hue(self.h + degrees)
    }

    /// Adds `delta` to the lightness. Negative deltas darken.
    /// # Panics
    /// Panics if the new lightness would leave [0, 100].
    /// # Example
    /// ```
    /// # use scarlet_hsluv::colors::HSLuvColor;
    /// let color = HSLuvColor{h: 250., s: 70., l: 40.};
    /// assert_eq!(color.shift_lightness(15.).l, 55.);
    /// ```
    pub fn shift_lightness(&self, delta: f64) -> HSLuvColor {
        let l = self.l + delta;
        assert!(
            l >= 0.0 && l <= 100.0,
            "lightness {} + {} leaves [0, 100]",
            self.l,
            delta
        );
        self.with_lightness(l)
    }

    /// Adds `delta` to the saturation. Negative deltas desaturate.
    /// # Panics
    /// Panics if the new saturation would leave [0, 100].
    pub fn shift_saturation(&self, delta: f64) -> HSLuvColor {
        let s = self.s + delta;
        assert!(
            s >= 0.0 && s <= 100.0,
            "saturation {} + {} leaves [0, 100]",
            self.s,
            delta
        );
        self.with_saturation(s)
    }
}

impl From<Coord> for HSLuvColor {
    fn from(c: Coord) -> HSLuvColor {
        HSLuvColor {
            h: c.x,
            s: c.y,
            l: c.z,
        }
    }
}

impl Into<Coord> for HSLuvColor {
    fn into(self) -> Coord {
        Coord {
            x: self.h,
            y: self.s,
            z: self.l,
        }
    }
}
