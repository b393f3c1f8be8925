//! chromat is a universal color conversion engine. It parses color values
//! written in the hex, rgb, hsl, hwb, lab, lch, oklab and oklch grammars,
//! converts between them through shared pivot spaces (gamma and linear
//! sRGB, CIE-XYZ and Oklab, all referenced to D65), and serializes the
//! result with format appropriate rounding. An alpha channel carried in the
//! source text is propagated, and can be overridden per conversion.
//!
//! Every function is a pure computation over its arguments: there is no
//! shared state, so calls are safe from any number of threads.
//!
//! ```rust
//! use chromat::{to_hex, to_rgba, ColorFormat};
//!
//! assert_eq!(to_hex("rgb(255, 0, 0)").unwrap(), "#ff0000");
//! assert_eq!(
//!     to_rgba("#ff000080").unwrap(),
//!     "rgba(255, 0, 0, 0.5019607843137255)"
//! );
//! assert_eq!(chromat::detect("hsl(0, 100%, 50%)").unwrap(), ColorFormat::Hsl);
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod format;
mod interpolate;
mod math;
pub mod models;
mod parse;
mod serialize;
#[cfg(test)]
mod test;

pub use color::{AlphaChannel, Color, Component, Components, Flags, HasSpace, Space};
pub use convert::convert;
pub use format::{detect, ColorFormat, UnrecognizedFormat};
pub use parse::is_valid;
pub use serialize::{
    to_hex, to_hex_alpha, to_hsl, to_hsl_object, to_hsla, to_hwb, to_hwb_object, to_hwba, to_lab,
    to_lab_object, to_lch, to_lch_object, to_oklab, to_oklab_object, to_oklch, to_oklch_object,
    to_rgb, to_rgb_object, to_rgba, HslObject, HwbObject, LabObject, LchObject, OklabObject,
    OklchObject, RgbObject,
};
