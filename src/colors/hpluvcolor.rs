//! This module implements HPLuv, the pastel sibling of HSLuv. HPLuv measures saturation against a
//! single radius per lightness, the largest circle that fits inside the sRGB gamut at every hue,
//! instead of against the gamut edge along each hue. Hue changes at constant saturation are then
//! perfectly smooth, at the cost of reaching only pastel colors: vivid sRGB colors have an HPLuv
//! saturation above 100.

use super::cielchuvcolor::CIELCHuvColor;
use super::hsluvcolor::{hsl_to_lch, lch_to_hsl, wrap_hue};
use crate::color::{Color, XYZColor};
use crate::coord::Coord;
use crate::gamut;

/// Whether a color fits in HPLuv with a saturation between 0 and 100.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Representability {
    /// Saturation is between 0 and 100.
    Representable,
    /// Saturation is outside [0, 100]: the color is more vivid than HPLuv reaches at its
    /// lightness. Clamping the saturation gives the closest color HPLuv can represent.
    OutOfRange,
}

impl Representability {
    /// `true` for `Representable`.
    pub fn is_representable(self) -> bool {
        self == Representability::Representable
    }

    /// The numeric status code: 0 when representable, -1 when not.
    pub fn code(self) -> i32 {
        match self {
            Representability::Representable => 0,
            Representability::OutOfRange => -1,
        }
    }
}

fn safe_chroma(l: f64, _h: f64) -> f64 {
    gamut::max_safe_chroma_for_l(l)
}

/// A color in HPLuv. Hue and lightness mean exactly what they mean in HSLuv; saturation is a
/// percentage of the hue-independent safe chroma at this lightness.
/// # Example
///
/// ```
/// # use scarlet_hsluv::prelude::*;
/// # use scarlet_hsluv::colors::{HPLuvColor, Representability};
/// let green: HPLuvColor = RGBColor{r: 0., g: 1., b: 0.}.convert();
/// assert!(green.s > 100.);
/// assert_eq!(green.representability(), Representability::OutOfRange);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HPLuvColor {
    /// Hue in degrees, from 0 to 360. Grays report 0.
    pub h: f64,
    /// Saturation as a percentage of the largest chroma displayable at every hue for this
    /// lightness. Above 100 for colors outside that circle.
    pub s: f64,
    /// Lightness, identical to CIELUV's. Ranges from 0 (black) to 100 (white).
    pub l: f64,
}

impl Color for HPLuvColor {
    fn from_xyz(xyz: XYZColor) -> HPLuvColor {
        let lch = CIELCHuvColor::from_xyz(xyz);
        HPLuvColor::from(lch_to_hsl(lch, safe_chroma))
    }
    fn to_xyz(&self) -> XYZColor {
        hsl_to_lch((*self).into(), safe_chroma).to_xyz()
    }
}

impl HPLuvColor {
    /// Whether this color's saturation lies within [0, 100].
    pub fn representability(&self) -> Representability {
        if self.s >= 0.0 && self.s <= 100.0 {
            Representability::Representable
        } else {
            Representability::OutOfRange
        }
    }

    /// Returns this color with the hue replaced, wrapped into [0, 360).
    pub fn with_hue(&self, h: f64) -> HPLuvColor {
        HPLuvColor {
            h: wrap_hue(h),
            ..*self
        }
    }

    /// Returns this color with the saturation replaced.
    pub fn with_saturation(&self, s: f64) -> HPLuvColor {
        HPLuvColor { s, ..*self }
    }

    /// Returns this color with the lightness replaced.
    pub fn with_lightness(&self, l: f64) -> HPLuvColor {
        HPLuvColor { l, ..*self }
    }

    /// Rotates the hue by `degrees`, wrapping around the circle.
    pub fn rotate_hue(&self, degrees: f64) -> HPLuvColor {
        self.with_hue(self.h + degrees)
    }

    /// Adds `delta` to the lightness.
    /// # Panics
    /// Panics if the new lightness would leave [0, 100].
    pub fn shift_lightness(&self, delta: f64) -> HPLuvColor {
        let l = self.l + delta;
        assert!(
            l >= 0.0 && l <= 100.0,
            "lightness {} + {} leaves [0, 100]",
            self.l,
            delta
        );
        self.with_lightness(l)
    }

    /// Adds `delta` to the saturation.
    /// # Panics
    /// Panics if the new saturation would leave [0, 100].
    pub fn shift_saturation(&self, delta: f64) -> HPLuvColor {
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

impl From<Coord> for HPLuvColor {
    fn from(c: Coord) -> HPLuvColor {
        HPLuvColor {
            h: c.x,
            s: c.y,
            l: c.z,
        }
    }
}

impl Into<Coord> for HPLuvColor {
    fn into(self) -> Coord {
        Coord {
            x: self.h,
            y: self.s,
            z: self.l,
        }
    }
}
