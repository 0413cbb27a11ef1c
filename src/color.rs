//! This file defines the [`Color`] trait, the hub type [`XYZColor`] that every color converts
//! through, and [`RGBColor`], the sRGB color that HSLuv and HPLuv are ultimately measured against.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use float_cmp::approx_eq;
use regex::Regex;
use tracing::debug;

use crate::consts::{
    self, LINEAR_RGB_TO_XYZ, SRGB_DECODE_THRESHOLD, SRGB_ENCODE_THRESHOLD, XYZ_TO_LINEAR_RGB,
};

/// The tolerance used by `approx_equal` on the base color types.
const APPROX_EPSILON: f64 = 1e-9;

/// A point in the CIE 1931 XYZ color space, relative to the D65 white point with Y normalized so
/// that white has a luminance of 1. This is the common ground every other color type converts
/// through.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XYZColor {
    /// The X axis of the CIE 1931 XYZ space, roughly representing the long-wavelength receptors.
    pub x: f64,
    /// The Y axis: luminance. 0 is black and 1 is the white point.
    pub y: f64,
    /// The Z axis, roughly representing the short-wavelength receptors.
    pub z: f64,
}

impl XYZColor {
    /// Returns `true` if every component agrees with `other` to within a small absolute tolerance.
    pub fn approx_equal(&self, other: &XYZColor) -> bool {
        approx_eq!(f64, self.x, other.x, epsilon = APPROX_EPSILON)
            && approx_eq!(f64, self.y, other.y, epsilon = APPROX_EPSILON)
            && approx_eq!(f64, self.z, other.z, epsilon = APPROX_EPSILON)
    }
}

/// A trait for any color representation that can be converted to and from CIE XYZ. Implementing
/// the two conversions gives every other conversion for free through `convert`.
pub trait Color: Sized {
    /// Builds this color from an XYZ color.
    fn from_xyz(xyz: XYZColor) -> Self;
    /// Returns the XYZ color that matches this one.
    fn to_xyz(&self) -> XYZColor;
    /// Converts between any two color types by going through XYZ.
    /// # Example
    /// ```
    /// # use scarlet_hsluv::prelude::*;
    /// # use scarlet_hsluv::colors::HSLuvColor;
    /// let red = RGBColor{r: 1., g: 0., b: 0.};
    /// let red_hsluv: HSLuvColor = red.convert();
    /// assert!((red_hsluv.s - 100.).abs() <= 1e-9);
    /// ```
    fn convert<T: Color>(&self) -> T {
        T::from_xyz(self.to_xyz())
    }
}

impl Color for XYZColor {
    fn from_xyz(xyz: XYZColor) -> XYZColor {
        xyz
    }
    fn to_xyz(&self) -> XYZColor {
        *self
    }
}

/// Removes the sRGB gamma from one channel. Negative values mirror the positive curve, so
/// out-of-gamut inputs are continued rather than clipped.
pub fn to_linear(c: f64) -> f64 {
    if c.abs() <= SRGB_DECODE_THRESHOLD {
        c / 12.92
    } else {
        c.signum() * ((c.abs() + 0.055) / 1.055).powf(2.4)
    }
}

/// Applies the sRGB gamma to one linear channel, the inverse of [`to_linear`].
pub fn from_linear(c: f64) -> f64 {
    if c.abs() <= SRGB_ENCODE_THRESHOLD {
        12.92 * c
    } else {
        c.signum() * (1.055 * c.abs().powf(1.0 / 2.4) - 0.055)
    }
}

/// A color in the sRGB color space: the space of nearly every monitor. Components are floats that
/// are nominally between 0 and 1, but nothing clamps them: values outside that range pass through
/// every conversion and come back out of range.
/// # Example
/// ```
/// # use scarlet_hsluv::prelude::*;
/// let teal = RGBColor::from_hex_code("#008080").unwrap();
/// assert_eq!(teal.to_rgb8(), (0, 128, 128));
/// assert_eq!(teal.to_string(), "#008080");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel.
    pub r: f64,
    /// The green channel.
    pub g: f64,
    /// The blue channel.
    pub b: f64,
}

impl Color for RGBColor {
    /// Converts an XYZ color into sRGB by matrix multiplication, then applies gamma.
    fn from_xyz(xyz: XYZColor) -> RGBColor {
        let linear = consts::mul(&XYZ_TO_LINEAR_RGB, [xyz.x, xyz.y, xyz.z]);
        RGBColor {
            r: from_linear(linear[0]),
            g: from_linear(linear[1]),
            b: from_linear(linear[2]),
        }
    }
    /// Removes gamma and converts to XYZ by matrix multiplication.
    fn to_xyz(&self) -> XYZColor {
        let linear = [to_linear(self.r), to_linear(self.g), to_linear(self.b)];
        let xyz = consts::mul(&LINEAR_RGB_TO_XYZ, linear);
        XYZColor {
            x: xyz[0],
            y: xyz[1],
            z: xyz[2],
        }
    }
}

/// An error in parsing a string as an RGB color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RGBParseError {
    /// The string was not a `#` followed by exactly three or six hex digits.
    InvalidHexSyntax,
}

impl fmt::Display for RGBParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RGBParseError::InvalidHexSyntax => {
                write!(f, "invalid hex color: expected #rgb or #rrggbb")
            }
        }
    }
}

impl Error for RGBParseError {}

lazy_static! {
    static ref HEX_CODE: Regex =
        Regex::new(r"^#([[:xdigit:]]{6}|[[:xdigit:]]{3})$").expect("hex color regex is valid");
}

impl RGBColor {
    /// Parses a hex code of the form `#rrggbb` or the shorthand `#rgb`, where `#f80` means
    /// `#ff8800`. Case does not matter; the leading `#` is required.
    /// # Errors
    /// Returns `RGBParseError::InvalidHexSyntax` for anything else.
    /// # Example
    /// ```
    /// # use scarlet_hsluv::prelude::*;
    /// let orange = RGBColor::from_hex_code("#F80").unwrap();
    /// assert_eq!(orange.to_rgb8(), (255, 136, 0));
    /// assert!(RGBColor::from_hex_code("f80").is_err());
    /// ```
    pub fn from_hex_code(hex: &str) -> Result<RGBColor, RGBParseError> {
        let digits = match HEX_CODE.captures(hex).and_then(|caps| caps.get(1)) {
            Some(m) => m.as_str(),
            None => {
                debug!(hex, "rejected hex color");
                return Err(RGBParseError::InvalidHexSyntax);
            }
        };
        // shorthand doubles every digit: f80 is ff8800
        let full: String = if digits.len() == 3 {
            digits.chars().flat_map(|c| vec![c, c]).collect()
        } else {
            digits.to_string()
        };
        let channel = |i: usize| {
            u8::from_str_radix(&full[2 * i..2 * i + 2], 16)
                .map_err(|_| RGBParseError::InvalidHexSyntax)
        };
        Ok(RGBColor::from((channel(0)?, channel(1)?, channel(2)?)))
    }

    /// Returns the nearest 8-bit channel values. Each channel is clamped to [0, 1] and then
    /// multiplied by 255.999 and floored, so the whole [0, 1] range is split into 256 equal buckets
    /// and 1.0 still maps to 255.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let quantize = |c: f64| {
            let clamped = if c.is_nan() || c <= 0.0 {
                0.0
            } else if c >= 1.0 {
                1.0
            } else {
                c
            };
            (clamped * 255.999).floor() as u8
        };
        (quantize(self.r), quantize(self.g), quantize(self.b))
    }

    /// Returns `true` if every channel agrees with `other` to within a small absolute tolerance.
    pub fn approx_equal(&self, other: &RGBColor) -> bool {
        approx_eq!(f64, self.r, other.r, epsilon = APPROX_EPSILON)
            && approx_eq!(f64, self.g, other.g, epsilon = APPROX_EPSILON)
            && approx_eq!(f64, self.b, other.b, epsilon = APPROX_EPSILON)
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    fn from(rgb: (u8, u8, u8)) -> RGBColor {
        RGBColor {
            r: f64::from(rgb.0) / 255.0,
            g: f64::from(rgb.1) / 255.0,
            b: f64::from(rgb.2) / 255.0,
        }
    }
}

impl FromStr for RGBColor {
    type Err = RGBParseError;
    fn from_str(s: &str) -> Result<RGBColor, RGBParseError> {
        RGBColor::from_hex_code(s)
    }
}

impl fmt::Display for RGBColor {
    /// Writes the color as an uppercase `#RRGGBB` hex code, using `to_rgb8`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (r, g, b) = self.to_rgb8();
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}
