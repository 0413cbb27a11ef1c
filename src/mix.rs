//! Describes a Color that can be mixed with other colors in its own 3D space. Mixing is taking the
//! midpoint of two colors' projections, so the result depends on the space: red and cyan mixed in
//! RGB give gray, while mixed in HSLuv they keep their saturation and average their hues. `A.mix(B)`
//! is only allowed when A and B share a type, so that `A.mix(B)` and `B.mix(A)` always agree.
//!
//! Hue is mixed as a plain number, not an angle: mixing hues 350 and 10 gives 180, not 0.

use crate::color::{Color, XYZColor};
use crate::coord::Coord;

/// A Color that can be mixed with another of its own type.
pub trait Mix: Color {
    /// Given two Colors, returns a Color representing their midpoint.
    fn mix(self, other: Self) -> Self;
}

impl<T: Color + From<Coord> + Into<Coord>> Mix for T {
    /// Given two colors that represent the points (a1, b1, c1) and (a2, b2, c2) in their common
    /// projection, returns the color (a1 + a2, b1 + b2, c1 + c2) / 2.
    fn mix(self, other: T) -> T {
        let c1: Coord = self.into();
        let c2: Coord = other.into();
        T::from(c1.midpoint(&c2))
    }
}

// XYZColor has no Coord conversion, so it gets its own midpoint
impl Mix for XYZColor {
    fn mix(self, other: XYZColor) -> XYZColor {
        XYZColor {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
            z: (self.z + other.z) / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::RGBColor;
    use crate::colors::HSLuvColor;

    #[test]
    fn test_mix_rgb() {
        let c1 = RGBColor::from((0, 0, 255));
        let c2 = RGBColor::from((255, 0, 1));
        // 0.5 lands in bucket 127
        assert_eq!(c1.mix(c2).to_string(), "#7F0080");
    }

    #[test]
    fn test_mix_hsluv() {
        let c1 = HSLuvColor {
            h: 40.,
            s: 80.,
            l: 30.,
        };
        let c2 = HSLuvColor {
            h: 120.,
            s: 60.,
            l: 70.,
        };
        let mixed = c1.mix(c2);
        assert!((mixed.h - 80.).abs() <= 1e-9);
        assert!((mixed.s - 70.).abs() <= 1e-9);
        assert!((mixed.l - 50.).abs() <= 1e-9);
        assert_eq!(mixed, c2.mix(c1));
    }

    #[test]
    fn test_mix_xyz() {
        // fractions with powers of 2 in the denominator keep this exact
        let c1 = XYZColor {
            x: 0.5,
            y: 0.25,
            z: 0.75,
        };
        let c3 = XYZColor {
            x: 0.75,
            y: 0.5,
            z: 0.25,
        };
        let c2 = XYZColor {
            x: 0.625,
            y: 0.375,
            z: 0.5,
        };
        assert_eq!(c1.mix(c3), c2);
        assert_eq!(c3.mix(c1), c2);
    }
}
