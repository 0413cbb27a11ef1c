//! This module describes the Bound trait, which describes the range each component of a color
//! space may take. RGB is bounded by the unit cube; HSLuv and HPLuv by their hue circle and
//! percentage scales. Conversions never clamp on their own, so this is where clamping policy lives.

use crate::color::{Color, RGBColor};
use crate::colors::{HPLuvColor, HSLuvColor};
use crate::coord::Coord;

/// Describes a color space with explicit bounds on each component.
/// # Example
/// Pull a vivid green into the pastel range HPLuv can represent.
///
/// ```
/// # use scarlet_hsluv::prelude::*;
/// # use scarlet_hsluv::colors::HPLuvColor;
/// let green = RGBColor{r: 0., g: 1., b: 0.};
/// let pastel_green = HPLuvColor::clamp(green);
/// let pastel: HPLuvColor = pastel_green.convert();
/// assert!((pastel.s - 100.).abs() <= 1e-9);
/// ```
pub trait Bound: Color + From<Coord> + Into<Coord> + Copy {
    /// Returns `[(min1, max1), (min2, max2), (min3, max3)]`, the bounds of each component in the
    /// order they appear in the Coord representation.
    fn bounds() -> [(f64, f64); 3];

    /// Clamps each component of a point to the bounds. NaN components are left alone.
    fn clamp_coord(point: Coord) -> Coord {
        let ranges = Self::bounds();
        let clamp = |component: f64, (min, max): (f64, f64)| {
            if component < min {
                min
            } else if component > max {
                max
            } else {
                component
            }
        };
        Coord {
            x: clamp(point.x, ranges[0]),
            y: clamp(point.y, ranges[1]),
            z: clamp(point.z, ranges[2]),
        }
    }

    /// Converts any color into this space, clamps it there, and converts it back. Colors already
    /// inside the bounds come back unchanged (up to rounding).
    fn clamp<T: Color>(color: T) -> T {
        let converted: Self = color.convert();
        let point: Coord = converted.into();
        Self::from(Self::clamp_coord(point)).convert()
    }
}

impl Bound for RGBColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 1.), (0., 1.), (0., 1.)]
    }
}

impl From<Coord> for RGBColor {
    fn from(c: Coord) -> RGBColor {
        RGBColor {
            r: c.x,
            g: c.y,
            b: c.z,
        }
    }
}

impl Into<Coord> for RGBColor {
    fn into(self) -> Coord {
        Coord {
            x: self.r,
            y: self.g,
            z: self.b,
        }
    }
}

impl Bound for HSLuvColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 360.), (0., 100.), (0., 100.)]
    }
}

impl Bound for HPLuvColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 360.), (0., 100.), (0., 100.)]
    }
}

#[cfg(test)]
mod tests {
    use super::Bound;
    use crate::color::{Color, RGBColor};
    use crate::colors::{HPLuvColor, HSLuvColor, Representability};

    #[test]
    fn test_zero_one_bounds() {
        let color = RGBColor {
            r: 0.1,
            g: -0.2,
            b: 1.2,
        };
        assert!(RGBColor::clamp(color).approx_equal(&RGBColor {
            r: 0.1,
            g: 0.,
            b: 1.
        }));
    }

    #[test]
    fn test_hsluv_bounds() {
        let color = HSLuvColor {
            h: 120.,
            s: 130.,
            l: -4.,
        };
        assert_eq!(
            HSLuvColor::from(HSLuvColor::clamp_coord(color.into())),
            HSLuvColor {
                h: 120.,
                s: 100.,
                l: 0.
            }
        );
    }

    #[test]
    fn test_hpluv_clamp_makes_representable() {
        let rgb = RGBColor {
            r: 0.9,
            g: 0.2,
            b: 0.6,
        };
        let before: HPLuvColor = rgb.convert();
        assert_eq!(before.representability(), Representability::OutOfRange);
        let after: HPLuvColor = HPLuvColor::clamp(rgb).convert();
        assert!((after.s - 100.).abs() <= 1e-9);
        assert!((after.l - before.l).abs() <= 1e-9);
        assert!((after.h - before.h).abs() <= 1e-9);
    }

    #[test]
    fn test_in_gamut_color_is_unchanged() {
        let rgb = RGBColor {
            r: 0.3,
            g: 0.6,
            b: 0.2,
        };
        assert!(HSLuvColor::clamp(rgb).approx_equal(&rgb));
    }
}
