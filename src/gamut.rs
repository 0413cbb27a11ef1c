//! The sRGB gamut as seen from inside CIELCHuv. At any fixed lightness, the set of (u, v) points
//! that land inside the RGB unit cube is a convex hexagon: each RGB channel is linear in u and v
//! for constant L, so each channel hitting 0 or 1 carves out one straight edge. HSLuv measures
//! saturation against the distance to that hexagon along the hue's ray; HPLuv measures it against
//! the largest circle that fits inside the hexagon.
//!
//! Everything here is a pure function of lightness (and hue): the six lines are built on the
//! stack for every call.

use crate::consts::{EPSILON, KAPPA, XYZ_TO_LINEAR_RGB};

/// A line `v = slope * u + intercept` in the (u, v) chroma plane of CIELUV.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Rise over run.
    pub slope: f64,
    /// Where the line crosses the v axis.
    pub intercept: f64,
}

impl Line {
    /// How far a ray leaving the origin at `theta` radians travels before it meets this line.
    /// Negative if the line is behind the ray, and infinite or NaN if the ray runs parallel to it.
    pub fn ray_length(&self, theta: f64) -> f64 {
        self.intercept / (theta.sin() - self.slope * theta.cos())
    }

    /// The perpendicular distance from the origin to this line.
    pub fn distance_from_origin(&self) -> f64 {
        self.intercept.abs() / (self.slope.powi(2) + 1.0).sqrt()
    }
}

/// Returns the six edges of the sRGB gamut at lightness `l`: for each of red, green and blue, the
/// line where that channel is exactly 0 and the line where it is exactly 1, in that order.
pub fn bounds(l: f64) -> [Line; 6] {
    // luminance at this lightness, using the same two-piece curve as CIELUV
    let sub1 = (l + 16.0).powi(3) / 1560896.0;
    let sub2 = if sub1 > EPSILON { sub1 } else { l / KAPPA };

    let mut lines = [Line {
        slope: 0.0,
        intercept: 0.0,
    }; 6];
    for (channel, row) in XYZ_TO_LINEAR_RGB.iter().enumerate() {
        let (m1, m2, m3) = (row[0], row[1], row[2]);
        for t in 0..2usize {
            let limit = t as f64;
            let top1 = (284517.0 * m1 - 94839.0 * m3) * sub2;
            let top2 = (838422.0 * m3 + 769860.0 * m2 + 731718.0 * m1) * l * sub2
                - 769860.0 * limit * l;
            let bottom = (632260.0 * m3 - 126452.0 * m2) * sub2 + 126452.0 * limit;
            lines[channel * 2 + t] = Line {
                slope: top1 / bottom,
                intercept: top2 / bottom,
            };
        }
    }
    lines
}

/// The largest chroma that stays inside sRGB at lightness `l` and hue `h` (in degrees): the
/// distance from the origin to the nearest hexagon edge along the hue's ray.
///
/// Edges behind the ray or parallel to it never bound it and are skipped. At black and white the
/// hexagon collapses, which callers handle before getting here; if no edge qualifies the result is
/// infinite.
pub fn max_chroma_for_lh(l: f64, h: f64) -> f64 {
    let theta = h.to_radians();
    bounds(l)
        .iter()
        .map(|line| line.ray_length(theta))
        .filter(|len| len.is_finite() && *len >= 0.0)
        .fold(f64::INFINITY, f64::min)
}

/// The largest chroma that stays inside sRGB at lightness `l` for every hue at once: the radius of
/// the biggest origin-centered circle inside the hexagon.
pub fn max_safe_chroma_for_l(l: f64) -> f64 {
    bounds(l)
        .iter()
        .map(Line::distance_from_origin)
        .fold(f64::INFINITY, f64::min)
}
