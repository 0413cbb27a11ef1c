//! This module implements the CIELCHuv color space, a cylindrical transformation of the
//! CIELUV space, akin to the relationship between CIELAB and CIELCH.

use super::cieluvcolor::CIELUVColor;
use crate::color::{Color, XYZColor};
use crate::consts::GRAY_CHROMA;
use crate::coord::Coord;

/// The polar version of CIELUV. Lightness is unchanged, chroma is the distance from the gray axis,
/// and hue is the angle around it.
/// # Example
///
/// ```
/// # use scarlet_hsluv::prelude::*;
/// # use scarlet_hsluv::colors::CIELCHuvColor;
/// let red = RGBColor{r: 1., g: 0., b: 0.};
/// let red_lch: CIELCHuvColor = red.convert();
/// assert!((red_lch.h - 12.177).abs() <= 1e-3);
/// // rotate by half a turn: the opposite hue at the same lightness and chroma
/// let mut cyanish = red_lch;
/// cyanish.h = (cyanish.h + 180.) % 360.;
/// let back: CIELCHuvColor = cyanish.convert::<XYZColor>().convert();
/// assert!((back.h - 192.177).abs() <= 1e-3);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELCHuvColor {
    /// The lightness component, exactly the same as CIELUV's. Varies between 0 and 100.
    pub l: f64,
    /// The chroma component: the distance from the gray axis in the (u, v) plane. Never negative,
    /// and around 180 for the most colorful sRGB colors.
    pub c: f64,
    /// The hue component in degrees, from 0 up to (not including) 360. Grays have no meaningful hue
    /// and get 0.
    pub h: f64,
}

impl From<CIELUVColor> for CIELCHuvColor {
    fn from(luv: CIELUVColor) -> CIELCHuvColor {
        let c = luv.u.hypot(luv.v);
        let h = if c < GRAY_CHROMA {
            0.0
        } else {
            let unbounded_h = luv.v.atan2(luv.u).to_degrees();
            // atan2 covers (-180, 180]: one shift is enough
            if unbounded_h < 0.0 {
                unbounded_h + 360.0
            } else {
                unbounded_h
            }
        };
        CIELCHuvColor { l: luv.l, c, h }
    }
}

impl From<CIELCHuvColor> for CIELUVColor {
    fn from(lch: CIELCHuvColor) -> CIELUVColor {
        let rad_h = lch.h.to_radians();
        CIELUVColor {
            l: lch.l,
            u: lch.c * rad_h.cos(),
            v: lch.c * rad_h.sin(),
        }
    }
}

impl Color for CIELCHuvColor {
    /// Converts from XYZ to CIELCHuv through CIELUV.
    fn from_xyz(xyz: XYZColor) -> CIELCHuvColor {
        CIELUVColor::from_xyz(xyz).into()
    }
    /// Gets the XYZ color that corresponds to this one, through CIELUV.
    fn to_xyz(&self) -> XYZColor {
        CIELUVColor::from(*self).to_xyz()
    }
}

impl From<Coord> for CIELCHuvColor {
    fn from(c: Coord) -> CIELCHuvColor {
        CIELCHuvColor {
            l: c.x,
            c: c.y,
            h: c.z,
        }
    }
}

impl Into<Coord> for CIELCHuvColor {
    fn into(self) -> Coord {
        Coord {
            x: self.l,
            y: self.c,
            z: self.h,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_cielchuv_xyz_conversion() {
        let xyz = XYZColor {
            x: 0.4,
            y: 0.6,
            z: 0.2,
        };
        let lchuv: CIELCHuvColor = xyz.convert();
        let xyz2: XYZColor = lchuv.convert();
        assert!(xyz.approx_equal(&xyz2));
    }

    #[test]
    fn test_hue_is_normalized() {
        let luv = CIELUVColor {
            l: 50.,
            u: 10.,
            v: -10.,
        };
        let lch = CIELCHuvColor::from(luv);
        assert!((lch.h - 315.).abs() <= 1e-10);
        assert!((lch.c - 200f64.sqrt()).abs() <= 1e-10);
    }

    #[test]
    fn test_gray_has_zero_hue() {
        let lch = CIELCHuvColor::from(CIELUVColor {
            l: 40.,
            u: -1e-10,
            v: -1e-10,
        });
        assert_eq!(lch.h, 0.);
        assert!(lch.c < GRAY_CHROMA);
    }
}
