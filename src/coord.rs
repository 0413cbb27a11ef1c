//! This module contains [`Coord`], a point in 3D space with the handful of operations that mixing
//! and clamping need. Any color type that converts to and from a `Coord` gets [`Mix`] and can
//! implement [`Bound`] with a single method.
//!
//! [`Mix`]: ../mix/trait.Mix.html
//! [`Bound`]: ../bound/trait.Bound.html

use num::{self, Num, NumCast};
use std::ops::{Add, Div, Mul, Sub};

/// Represents a scalar value that a [`Coord`] can be scaled by. Anything numeric from the
/// [`num`] traits qualifies: `2u8`, `0.5f32` and `3.0f64` all work.
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

/// A point in 3D space. The axes are called `x`, `y` and `z`, and every color type maps its
/// components onto them in the order of the letters in its name: `HSLuvColor` puts hue on `x`,
/// saturation on `y`, and lightness on `z`.
///
/// # Example
/// ```
/// # use scarlet_hsluv::coord::Coord;
/// let a = Coord{x: 120., y: 40., z: 50.};
/// let b = Coord{x: 180., y: 60., z: 70.};
/// let sum = a + b; // (300, 100, 120)
/// let diff = b - a; // (60, 20, 20)
/// let half = diff / 2; // (30, 10, 10)
/// assert_eq!(a + half, a.midpoint(&b));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

// scalar multiplication only: (a, b, c) * s = (sa, sb, sc), not commutative
impl<U: Scalar> Mul<U> for Coord {
    type Output = Coord;
    fn mul(self, rhs: U) -> Coord {
        let r: f64 = num::cast(rhs).unwrap_or(f64::NAN);
        Coord {
            x: self.x * r,
            y: self.y * r,
            z: self.z * r,
        }
    }
}

impl<U: Scalar> Div<U> for Coord {
    type Output = Coord;
    /// Divides every component by a scalar. Dividing by zero follows IEEE semantics and produces
    /// infinities or NaN, the same as plain `f64` division.
    fn div(self, rhs: U) -> Coord {
        let r: f64 = num::cast(rhs).unwrap_or(f64::NAN);
        Coord {
            x: self.x / r,
            y: self.y / r,
            z: self.z / r,
        }
    }
}

impl Coord {
    /// The midpoint between two points.
    pub fn midpoint(&self, other: &Coord) -> Coord {
        self.weighted_midpoint(other, 0.5)
    }

    /// The weighted midpoint: `weight` is how much of `self` ends up in the result, so a weight of
    /// 1 returns `self` and a weight of 0 returns `other`.
    /// # Example
    /// ```
    /// # use scarlet_hsluv::coord::Coord;
    /// let a = Coord{x: 0.2, y: 0., z: 1.};
    /// let b = Coord{x: 1., y: 0.8, z: 1.};
    /// let mid = a.weighted_midpoint(&b, 0.25);
    /// assert!((mid.x - 0.8).abs() <= 1e-10);
    /// assert!((mid.y - 0.6).abs() <= 1e-10);
    /// ```
    pub fn weighted_midpoint(&self, other: &Coord, weight: f64) -> Coord {
        Coord {
            x: self.x * weight + (1.0 - weight) * other.x,
            y: self.y * weight + (1.0 - weight) * other.y,
            z: self.z * weight + (1.0 - weight) * other.z,
        }
    }

    /// The Euclidean distance between two points. In HSLuv this is not a perceptual difference: hue
    /// is an angle, so (359, 50, 50) and (1, 50, 50) are close colors that sit far apart here.
    pub fn euclidean_distance(&self, other: &Coord) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_ops() {
        let c = Coord {
            x: 1.,
            y: 8.,
            z: 7.,
        };
        assert_eq!(
            c * 2u8,
            Coord {
                x: 2.,
                y: 16.,
                z: 14.
            }
        );
        assert_eq!(
            c / 2.,
            Coord {
                x: 0.5,
                y: 4.,
                z: 3.5
            }
        );
        assert!((c / 0.).x.is_infinite());
    }

    #[test]
    fn test_distance() {
        let a = Coord {
            x: 0.,
            y: 0.,
            z: -1.,
        };
        let b = Coord {
            x: 2.,
            y: 3.,
            z: 5.,
        };
        assert!((a.euclidean_distance(&b) - 7.).abs() <= 1e-10);
    }
}
