//! This module brings the most common functionality under a single namespace, to prevent excessive
//! imports: every trait in the crate, the base colors [`RGBColor`] and [`XYZColor`], and the
//! associated parse error [`RGBParseError`]. The derived spaces in [`colors`] are not included.
//!
//! [`RGBColor`]: ../color/struct.RGBColor.html
//! [`XYZColor`]: ../color/struct.XYZColor.html
//! [`RGBParseError`]: ../color/enum.RGBParseError.html
//! [`colors`]: ../colors/index.html

pub use crate::bound::Bound;
pub use crate::color::{Color, RGBColor, RGBParseError, XYZColor};
pub use crate::mix::Mix;
