//! This module contains the color spaces built on top of [`XYZColor`] and [`RGBColor`]: CIELUV and
//! its cylindrical form CIELCHuv, and the two spaces derived from those, HSLuv and HPLuv. For
//! convenience, each main type is imported into this module's namespace directly.
//!
//! [`XYZColor`]: ../color/struct.XYZColor.html
//! [`RGBColor`]: ../color/struct.RGBColor.html
pub mod cielchuvcolor;
pub mod cieluvcolor;
pub mod hpluvcolor;
pub mod hsluvcolor;

// for convenience, use this namespace for the color objects
pub use self::cielchuvcolor::CIELCHuvColor;
pub use self::cieluvcolor::CIELUVColor;
pub use self::hpluvcolor::{HPLuvColor, Representability};
pub use self::hsluvcolor::HSLuvColor;
