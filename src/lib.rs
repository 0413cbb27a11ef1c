//! HSLuv and HPLuv are hue, saturation and lightness spaces that behave the way HSL promises to but
//! doesn't: lightness is perceptual lightness from CIELUV, hue is a real angle in CIELCHuv, and
//! saturation is measured against what sRGB can actually display. In HSLuv, saturation 100 is the
//! edge of the sRGB gamut at that exact hue and lightness; in HPLuv, it is the largest radius that
//! is safe at every hue, which gives smooth pastel palettes.
//!
//! Every conversion goes through CIE XYZ, the same way for every color type: implement [`Color`] and
//! the rest follows. For callers that only want numbers, [`rgb_to_hsluv`], [`hsluv_to_rgb`],
//! [`rgb_to_hpluv`] and [`hpluv_to_rgb`] work on plain triplets.
//!
//! ```
//! use scarlet_hsluv::prelude::*;
//! use scarlet_hsluv::colors::HSLuvColor;
//!
//! let brand = RGBColor::from_hex_code("#3f7fbf").unwrap();
//! let hsluv: HSLuvColor = brand.convert();
//! // a darker shade with the same perceived hue and saturation
//! let shade: RGBColor = hsluv.shift_lightness(-20.).convert();
//! println!("{} -> {}", brand, shade);
//! ```
//!
//! [`Color`]: color/trait.Color.html

#![doc(html_root_url = "https://docs.rs/scarlet-hsluv/0.1.0")]
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.96924363628087 with -0.969_243_636_280_87
#![allow(clippy::unreadable_literal)]
#![allow(clippy::excessive_precision)]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate serde_derive;

pub mod bound;
pub mod color;
pub mod colors;
mod consts;
pub mod conversions;
pub mod coord;
pub mod gamut;
pub mod mix;
pub mod prelude;

pub use crate::conversions::{
    hex_to_hpluv, hex_to_hsluv, hpluv_to_hex, hpluv_to_rgb, hsluv_to_hex, hsluv_to_rgb,
    rgb_to_hpluv, rgb_to_hsluv, HPLuvConversion,
};
