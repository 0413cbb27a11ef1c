//! This file provides the constants used for matrix multiplication and CIELUV conversion. Both
//! matrices are written out in full instead of computing one as the inverse of the other: the gamut
//! boundary math in `gamut` depends on the exact values of `XYZ_TO_LINEAR_RGB`, and every HSLuv
//! implementation agrees on these digits, so they are part of the contract rather than something to
//! derive.

/// Converts XYZ (D65, Y normalized to 1) into linear sRGB. Each row is one output channel.
pub const XYZ_TO_LINEAR_RGB: [[f64; 3]; 3] = [
    [03.240969941904521, -1.537383177570093, -0.498610760293],
    [-0.96924363628087, 01.87596750150772, 00.041555057407175],
    [00.055630079696993, -0.20397695888897, 01.056971514242878],
];

/// Converts linear sRGB into XYZ. The inverse of `XYZ_TO_LINEAR_RGB`, to the precision listed.
pub const LINEAR_RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.41239079926595, 0.35758433938387, 0.18048078840183],
    [0.21263900587151, 0.71516867876775, 0.072192315360733],
    [0.019330818715591, 0.11919477979462, 0.95053215224966],
];

/// The u' chromaticity of the D65 reference white.
pub const REF_U: f64 = 0.19783000664283;
/// The v' chromaticity of the D65 reference white.
pub const REF_V: f64 = 0.46831999493879;

/// CIE kappa, (29/3)^3, truncated the way HSLuv truncates it.
pub const KAPPA: f64 = 903.2962962;
/// CIE epsilon, (6/29)^3, truncated the way HSLuv truncates it.
pub const EPSILON: f64 = 0.0088564516;

/// Below this, lightness counts as black and chroma or hue stop being meaningful.
pub const BLACK_LIGHTNESS: f64 = 0.00000001;
/// Above this, lightness counts as white.
pub const WHITE_LIGHTNESS: f64 = 99.9999999;
/// Chroma (and saturation) below this is gray: the hue is reported as 0.
pub const GRAY_CHROMA: f64 = 0.00000001;

/// sRGB decoding threshold: encoded values at or below this are on the linear segment.
pub const SRGB_DECODE_THRESHOLD: f64 = 0.04045;
/// sRGB encoding threshold: linear values at or below this are on the linear segment.
pub const SRGB_ENCODE_THRESHOLD: f64 = 0.0031308;

/// Multiplies a row-major 3x3 matrix by a column vector.
pub fn mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    let dot = |row: &[f64; 3]| row[0] * v[0] + row[1] * v[1] + row[2] * v[2];
    [dot(&m[0]), dot(&m[1]), dot(&m[2])]
}
