//! Plain-triplet entry points for the four conversions between RGB and HSLuv or HPLuv, plus hex
//! string helpers. These are thin wrappers over the color types for callers that just want numbers
//! in and numbers out.
//!
//! Nothing here clamps. RGB channels outside [0, 1], saturations outside [0, 100] and the like run
//! through the same formulas and produce mathematically continued results.

use tracing::trace;

use crate::bound::Bound;
use crate::color::{Color, RGBColor, RGBParseError};
use crate::colors::{HPLuvColor, HSLuvColor, Representability};
use crate::coord::Coord;

/// The result of converting RGB into HPLuv: the triplet, plus whether it fits in HPLuv.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HPLuvConversion {
    /// Hue, saturation and lightness. Saturation may be outside [0, 100].
    pub hpluv: (f64, f64, f64),
    /// Whether the saturation is within [0, 100].
    pub representability: Representability,
}

impl HPLuvConversion {
    /// Shorthand for `self.representability.is_representable()`.
    pub fn is_representable(&self) -> bool {
        self.representability.is_representable()
    }

    /// The closest HPLuv triplet with every component in range: hue in [0, 360], saturation and
    /// lightness in [0, 100].
    pub fn clamped(&self) -> (f64, f64, f64) {
        let (h, s, l) = self.hpluv;
        let c = HPLuvColor::clamp_coord(Coord { x: h, y: s, z: l });
        (c.x, c.y, c.z)
    }
}

/// Converts HSLuv to RGB. Hue is in degrees, saturation and lightness are percentages.
/// # Example
/// ```
/// let (r, g, b) = scarlet_hsluv::hsluv_to_rgb(12.177050630061776, 100., 53.23711559542933);
/// assert!((r - 1.).abs() <= 1e-9 && g.abs() <= 1e-9 && b.abs() <= 1e-9);
/// ```
pub fn hsluv_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let rgb: RGBColor = HSLuvColor { h, s, l }.convert();
    (rgb.r, rgb.g, rgb.b)
}

/// Converts RGB, with channels between 0 and 1, to HSLuv.
pub fn rgb_to_hsluv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let hsluv: HSLuvColor = RGBColor { r, g, b }.convert();
    (hsluv.h, hsluv.s, hsluv.l)
}

/// Converts HPLuv to RGB.
pub fn hpluv_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let rgb: RGBColor = HPLuvColor { h, s, l }.convert();
    (rgb.r, rgb.g, rgb.b)
}

/// Converts RGB to HPLuv. Not every RGB color has an HPLuv saturation within [0, 100]; those that
/// don't still get their real (out of range) saturation, flagged as `OutOfRange`, and the caller
/// decides whether to clamp.
/// # Example
/// ```
/// # use scarlet_hsluv::rgb_to_hpluv;
/// let green = rgb_to_hpluv(0., 1., 0.);
/// assert!(!green.is_representable());
/// assert_eq!(green.representability.code(), -1);
/// assert_eq!(green.clamped().1, 100.);
/// ```
pub fn rgb_to_hpluv(r: f64, g: f64, b: f64) -> HPLuvConversion {
    let hpluv: HPLuvColor = RGBColor { r, g, b }.convert();
    let representability = hpluv.representability();
    if !representability.is_representable() {
        trace!(r, g, b, s = hpluv.s, "color outside HPLuv");
    }
    HPLuvConversion {
        hpluv: (hpluv.h, hpluv.s, hpluv.l),
        representability,
    }
}

/// Converts HSLuv to an uppercase `#RRGGBB` hex code.
pub fn hsluv_to_hex(h: f64, s: f64, l: f64) -> String {
    HSLuvColor { h, s, l }.convert::<RGBColor>().to_string()
}

/// Parses a `#rrggbb` or `#rgb` hex code into HSLuv.
/// # Errors
/// Returns `RGBParseError::InvalidHexSyntax` if the string is not a hex code.
pub fn hex_to_hsluv(hex: &str) -> Result<(f64, f64, f64), RGBParseError> {
    let hsluv: HSLuvColor = RGBColor::from_hex_code(hex)?.convert();
    Ok((hsluv.h, hsluv.s, hsluv.l))
}

/// Converts HPLuv to an uppercase `#RRGGBB` hex code.
pub fn hpluv_to_hex(h: f64, s: f64, l: f64) -> String {
    HPLuvColor { h, s, l }.convert::<RGBColor>().to_string()
}

/// Parses a `#rrggbb` or `#rgb` hex code into HPLuv, with the same representability check as
/// [`rgb_to_hpluv`].
/// # Errors
/// Returns `RGBParseError::InvalidHexSyntax` if the string is not a hex code.
pub fn hex_to_hpluv(hex: &str) -> Result<HPLuvConversion, RGBParseError> {
    let rgb = RGBColor::from_hex_code(hex)?;
    Ok(rgb_to_hpluv(rgb.r, rgb.g, rgb.b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_triplet_eq(actual: (f64, f64, f64), expected: (f64, f64, f64), tol: f64) {
        assert!(
            (actual.0 - expected.0).abs() <= tol
                && (actual.1 - expected.1).abs() <= tol
                && (actual.2 - expected.2).abs() <= tol,
            "{:?} != {:?}",
            actual,
            expected
        );
    }

    #[test]
    fn test_red() {
        let hsluv = rgb_to_hsluv(1., 0., 0.);
        assert_triplet_eq(hsluv, (12.177050630061776, 100., 53.23711559542933), 1e-9);
        assert_triplet_eq(hsluv_to_rgb(hsluv.0, hsluv.1, hsluv.2), (1., 0., 0.), 1e-9);
    }

    #[test]
    fn test_mid_gray() {
        let (_, s, l) = rgb_to_hsluv(0.5, 0.5, 0.5);
        assert!(s.abs() <= 1e-9);
        assert!((l - 53.38896474111415).abs() <= 1e-9);
        assert_triplet_eq(hsluv_to_rgb(0., s, l), (0.5, 0.5, 0.5), 1e-9);
        // the hue of a gray does not matter on the way back
        assert_triplet_eq(hsluv_to_rgb(217., s, l), (0.5, 0.5, 0.5), 1e-9);
    }

    #[test]
    fn test_green_is_not_representable_in_hpluv() {
        let green = rgb_to_hpluv(0., 1., 0.);
        assert_eq!(green.representability, Representability::OutOfRange);
        assert!(green.hpluv.1 > 100.);
        // the unclamped value still converts back exactly
        let (h, s, l) = green.hpluv;
        assert_triplet_eq(hpluv_to_rgb(h, s, l), (0., 1., 0.), 1e-9);
        let (ch, cs, cl) = green.clamped();
        assert_eq!((ch, cs, cl), (h, 100., l));
    }

    #[test]
    fn test_pastel_is_representable_in_hpluv() {
        let pastel = rgb_to_hpluv(0.8, 0.7, 0.75);
        assert!(pastel.is_representable());
        assert_eq!(pastel.representability.code(), 0);
        assert_eq!(pastel.clamped(), pastel.hpluv);
        let (h, s, l) = pastel.hpluv;
        assert_triplet_eq(hpluv_to_rgb(h, s, l), (0.8, 0.7, 0.75), 1e-9);
    }

    #[test]
    fn test_hex_helpers() {
        assert_eq!(hsluv_to_hex(12.177050630061776, 100., 53.23711559542933), "#FF0000");
        let (h, s, l) = hex_to_hsluv("#ff0000").unwrap();
        assert!((h - 12.177050630061776).abs() <= 1e-9);
        assert!((s - 100.).abs() <= 1e-9);
        assert!((l - 53.23711559542933).abs() <= 1e-9);

        let teal = hex_to_hpluv("#008080").unwrap();
        let (h, s, l) = teal.hpluv;
        assert_eq!(hpluv_to_hex(h, s, l), "#008080");

        assert_eq!(hex_to_hsluv("red"), Err(RGBParseError::InvalidHexSyntax));
        assert!(hex_to_hpluv("#12345").is_err());
    }

    #[test]
    fn test_out_of_range_input_is_continued() {
        let (h, s, l) = rgb_to_hsluv(1.2, -0.1, 0.3);
        assert!(h.is_finite() && s.is_finite() && l.is_finite());
        assert!(s > 100.);
        assert_triplet_eq(hsluv_to_rgb(h, s, l), (1.2, -0.1, 0.3), 1e-9);
    }
}
