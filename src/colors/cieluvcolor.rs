//! This module implements CIELUV, the space HSLuv and HPLuv are built on. CIELUV was adopted at the
//! same time as CIELAB with similar goals, but its chromaticity axes come from the CIE 1976 UCS
//! diagram, which is what makes the sRGB gamut boundary straight-edged in it.

use crate::color::{Color, XYZColor};
use crate::consts::{BLACK_LIGHTNESS, EPSILON, KAPPA, REF_U, REF_V};
use crate::coord::Coord;

/// A color in CIELUV, relative to the D65 white point. `l` is lightness and `u` and `v` are the
/// chromaticity coordinates, scaled by lightness so that black has no chroma at all.
/// # Example
///
/// ```
/// # use scarlet_hsluv::prelude::*;
/// # use scarlet_hsluv::colors::CIELUVColor;
/// let white: CIELUVColor = RGBColor{r: 1., g: 1., b: 1.}.convert();
/// assert!((white.l - 100.).abs() <= 1e-9);
/// assert!(white.u.abs() <= 1e-9);
/// assert!(white.v.abs() <= 1e-9);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELUVColor {
    /// Lightness, from 0 (black) to 100 (white).
    pub l: f64,
    /// Roughly how red (positive) or green (negative) the color is. Unbounded.
    pub u: f64,
    /// Roughly how yellow (positive) or blue (negative) the color is. Unbounded.
    pub v: f64,
}

/// CIE lightness from relative luminance: linear near black, cube root everywhere else.
pub(crate) fn y_to_l(y: f64) -> f64 {
    if y <= EPSILON {
        y * KAPPA
    } else {
        116.0 * y.cbrt() - 16.0
    }
}

/// The inverse of `y_to_l`.
pub(crate) fn l_to_y(l: f64) -> f64 {
    if l <= 8.0 {
        l / KAPPA
    } else {
        ((l + 16.0) / 116.0).powi(3)
    }
}

impl Color for CIELUVColor {
    fn from_xyz(xyz: XYZColor) -> CIELUVColor {
        // CIE 1976 u' and v' chromaticity; with no light at all, there is no chromaticity either
        let denom = xyz.x + 15.0 * xyz.y + 3.0 * xyz.z;
        let (u_prime, v_prime) = if denom == 0.0 {
            (0.0, 0.0)
        } else {
            (4.0 * xyz.x / denom, 9.0 * xyz.y / denom)
        };

        let l = y_to_l(xyz.y);
        if l < BLACK_LIGHTNESS {
            return CIELUVColor { l, u: 0.0, v: 0.0 };
        }
        CIELUVColor {
            l,
            u: 13.0 * l * (u_prime - REF_U),
            v: 13.0 * l * (v_prime - REF_V),
        }
    }

    fn to_xyz(&self) -> XYZColor {
        // u and v are divided by lightness below, so black has to be handled on its own
        if self.l <= BLACK_LIGHTNESS {
            return XYZColor {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            };
        }
        let u_prime = self.u / (13.0 * self.l) + REF_U;
        let v_prime = self.v / (13.0 * self.l) + REF_V;

        let y = l_to_y(self.l);
        let x = -(9.0 * y * u_prime) / ((u_prime - 4.0) * v_prime - u_prime * v_prime);
        let z = (9.0 * y - 15.0 * v_prime * y - v_prime * x) / (3.0 * v_prime);
        XYZColor { x, y, z }
    }
}

impl From<Coord> for CIELUVColor {
    fn from(c: Coord) -> CIELUVColor {
        CIELUVColor {
            l: c.x,
            u: c.y,
            v: c.z,
        }
    }
}

impl Into<Coord> for CIELUVColor {
    fn into(self) -> Coord {
        Coord {
            x: self.l,
            y: self.u,
            z: self.v,
        }
    }
}
