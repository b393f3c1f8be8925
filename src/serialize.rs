//! Per-format rounding and serialization of converted colors, plus the
//! fixed-target convenience wrappers most collaborators call.
//!
//! String output is always derived from the object form, so the numeric
//! content of a string and its matching `*_object` function agree by
//! construction.

use crate::{
    color::{Color, Component, Components},
    convert::{convert, convert_color},
    format::{ColorFormat, UnrecognizedFormat},
    math::round_half_up,
};

/// The RGB family components as serialized: channels rounded to integers on
/// the `0..=255` scale, alpha resolved but unrounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RgbObject {
    /// The red channel.
    pub r: Component,
    /// The green channel.
    pub g: Component,
    /// The blue channel.
    pub b: Component,
    /// The resolved alpha in `[0, 1]`.
    pub alpha: Component,
}

/// The HSL components as serialized: hue in degrees and percentages, each
/// rounded to integers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HslObject {
    /// The hue, in degrees.
    pub h: Component,
    /// The saturation, as a percentage.
    pub s: Component,
    /// The lightness, as a percentage.
    pub l: Component,
    /// The resolved alpha in `[0, 1]`.
    pub alpha: Component,
}

/// The HWB components as serialized: hue in degrees and percentages, each
/// rounded to integers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HwbObject {
    /// The hue, in degrees.
    pub h: Component,
    /// The whiteness, as a percentage.
    pub w: Component,
    /// The blackness, as a percentage.
    pub b: Component,
    /// The resolved alpha in `[0, 1]`.
    pub alpha: Component,
}

/// The CIE-Lab components, unrounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabObject {
    /// The lightness.
    pub l: Component,
    /// The a axis.
    pub a: Component,
    /// The b axis.
    pub b: Component,
    /// The resolved alpha in `[0, 1]`.
    pub alpha: Component,
}

/// The CIE-Lch components, unrounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LchObject {
    /// The lightness.
    pub l: Component,
    /// The chroma.
    pub c: Component,
    /// The hue, in degrees.
    pub h: Component,
    /// The resolved alpha in `[0, 1]`.
    pub alpha: Component,
}

/// The Oklab components, unrounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OklabObject {
    /// The lightness.
    pub l: Component,
    /// The a axis.
    pub a: Component,
    /// The b axis.
    pub b: Component,
    /// The resolved alpha in `[0, 1]`.
    pub alpha: Component,
}

/// The Oklch components, unrounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OklchObject {
    /// The lightness.
    pub l: Component,
    /// The chroma.
    pub c: Component,
    /// The hue, in degrees.
    pub h: Component,
    /// The resolved alpha in `[0, 1]`.
    pub alpha: Component,
}

fn resolved_alpha(color: &Color) -> Component {
    color.alpha().unwrap_or(1.0)
}

fn rgb_object(color: &Color) -> RgbObject {
    let Components(red, green, blue) = color.components;
    RgbObject {
        r: round_half_up(red * 255.0),
        g: round_half_up(green * 255.0),
        b: round_half_up(blue * 255.0),
        alpha: resolved_alpha(color),
    }
}

fn hsl_object(color: &Color) -> HslObject {
    let Components(hue, saturation, lightness) = color.components;
    HslObject {
        h: round_half_up(hue),
        s: round_half_up(saturation * 100.0),
        l: round_half_up(lightness * 100.0),
        alpha: resolved_alpha(color),
    }
}

fn hwb_object(color: &Color) -> HwbObject {
    let Components(hue, whiteness, blackness) = color.components;
    HwbObject {
        h: round_half_up(hue),
        w: round_half_up(whiteness * 100.0),
        b: round_half_up(blackness * 100.0),
        alpha: resolved_alpha(color),
    }
}

fn lab_object(color: &Color) -> LabObject {
    let Components(l, a, b) = color.components;
    LabObject {
        l,
        a,
        b,
        alpha: resolved_alpha(color),
    }
}

fn lch_object(color: &Color) -> LchObject {
    let Components(l, c, h) = color.components;
    LchObject {
        l,
        c,
        h,
        alpha: resolved_alpha(color),
    }
}

fn oklab_object(color: &Color) -> OklabObject {
    let Components(l, a, b) = color.components;
    OklabObject {
        l,
        a,
        b,
        alpha: resolved_alpha(color),
    }
}

fn oklch_object(color: &Color) -> OklchObject {
    let Components(l, c, h) = color.components;
    OklchObject {
        l,
        c,
        h,
        alpha: resolved_alpha(color),
    }
}

/// A rounded channel value as a hex byte. The clamp to `0..=255` is the
/// only place input values are clamped.
fn hex_byte(value: Component) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

fn alpha_byte(alpha: Component) -> u8 {
    hex_byte(round_half_up(alpha * 255.0))
}

/// A space separated triplet with the permissive 4th alpha token appended
/// when the resolved alpha is not opaque.
fn triplet(name: &str, c0: Component, c1: Component, c2: Component, alpha: Component) -> String {
    if alpha == 1.0 {
        format!("{}({} {} {})", name, c0, c1, c2)
    } else {
        format!("{}({} {} {} {})", name, c0, c1, c2, alpha)
    }
}

/// Serialize a converted color in the representation of `format`. The color
/// is expected to already be in the format's space with a resolved alpha.
pub(crate) fn to_string(color: &Color, format: ColorFormat) -> String {
    match format {
        ColorFormat::Hex => {
            let o = rgb_object(color);
            format!(
                "#{:02x}{:02x}{:02x}",
                hex_byte(o.r),
                hex_byte(o.g),
                hex_byte(o.b)
            )
        }
        ColorFormat::HexAlpha => {
            let o = rgb_object(color);
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                hex_byte(o.r),
                hex_byte(o.g),
                hex_byte(o.b),
                alpha_byte(o.alpha)
            )
        }
        ColorFormat::Rgb | ColorFormat::Color => {
            let o = rgb_object(color);
            format!("rgb({}, {}, {})", o.r, o.g, o.b)
        }
        ColorFormat::Rgba => {
            let o = rgb_object(color);
            format!("rgba({}, {}, {}, {})", o.r, o.g, o.b, o.alpha)
        }
        ColorFormat::Hsl => {
            let o = hsl_object(color);
            format!("hsl({}, {}%, {}%)", o.h, o.s, o.l)
        }
        ColorFormat::Hsla => {
            let o = hsl_object(color);
            format!("hsla({}, {}%, {}%, {})", o.h, o.s, o.l, o.alpha)
        }
        ColorFormat::Hwb => {
            let o = hwb_object(color);
            format!("hwb({}, {}%, {}%)", o.h, o.w, o.b)
        }
        ColorFormat::Hwba => {
            let o = hwb_object(color);
            format!("hwba({}, {}%, {}%, {})", o.h, o.w, o.b, o.alpha)
        }
        ColorFormat::Lab => {
            let o = lab_object(color);
            triplet("lab", o.l, o.a, o.b, o.alpha)
        }
        ColorFormat::Lch => {
            let o = lch_object(color);
            triplet("lch", o.l, o.c, o.h, o.alpha)
        }
        ColorFormat::Oklab => {
            let o = oklab_object(color);
            triplet("oklab", o.l, o.a, o.b, o.alpha)
        }
        ColorFormat::Oklch => {
            let o = oklch_object(color);
            triplet("oklch", o.l, o.c, o.h, o.alpha)
        }
    }
}

/// Serialize `value` as `#rrggbb`.
pub fn to_hex(value: &str) -> Result<String, UnrecognizedFormat> {
    convert(value, ColorFormat::Hex, None, None)
}

/// Serialize `value` as `#rrggbbaa`.
pub fn to_hex_alpha(value: &str) -> Result<String, UnrecognizedFormat> {
    convert(value, ColorFormat::HexAlpha, None, None)
}

/// Serialize `value` as `rgb(R, G, B)`.
pub fn to_rgb(value: &str) -> Result<String, UnrecognizedFormat> {
    convert(value, ColorFormat::Rgb, None, None)
}

/// Serialize `value` as `rgba(R, G, B, A)`.
pub fn to_rgba(value: &str) -> Result<String, UnrecognizedFormat> {
    convert(value, ColorFormat::Rgba, None, None)
}

/// Serialize `value` as `hsl(H, S%, L%)`.
pub fn to_hsl(value: &str) -> Result<String, UnrecognizedFormat> {
    convert(value, ColorFormat::Hsl, None, None)
}

/// Serialize `value` as `hsla(H, S%, L%, A)`.
pub fn to_hsla(value: &str) -> Result<String, UnrecognizedFormat> {
    convert(value, ColorFormat::Hsla, None, None)
}

/// Serialize `value` as `hwb(H, W%, B%)`.
pub fn to_hwb(value: &str) -> Result<String, UnrecognizedFormat> {
    convert(value, ColorFormat::Hwb, None, None)
}

/// Serialize `value` as `hwba(H, W%, B%, A)`.
pub fn to_hwba(value: &str) -> Result<String, UnrecognizedFormat> {
    convert(value, ColorFormat::Hwba, None, None)
}

/// Serialize `value` as `lab(L a b)`.
pub fn to_lab(value: &str) -> Result<String, UnrecognizedFormat> {
    convert(value, ColorFormat::Lab, None, None)
}

/// Serialize `value` as `lch(L C H)`.
pub fn to_lch(value: &str) -> Result<String, UnrecognizedFormat> {
    convert(value, ColorFormat::Lch, None, None)
}

/// Serialize `value` as `oklab(l a b)`.
pub fn to_oklab(value: &str) -> Result<String, UnrecognizedFormat> {
    convert(value, ColorFormat::Oklab, None, None)
}

/// Serialize `value` as `oklch(l c h)`.
pub fn to_oklch(value: &str) -> Result<String, UnrecognizedFormat> {
    convert(value, ColorFormat::Oklch, None, None)
}

/// The RGB components of `value`, with the rounding of [`to_rgb`].
pub fn to_rgb_object(value: &str) -> Result<RgbObject, UnrecognizedFormat> {
    let (color, _) = convert_color(value, ColorFormat::Rgb, None, None)?;
    Ok(rgb_object(&color))
}

/// The HSL components of `value`, with the rounding of [`to_hsl`].
pub fn to_hsl_object(value: &str) -> Result<HslObject, UnrecognizedFormat> {
    let (color, _) = convert_color(value, ColorFormat::Hsl, None, None)?;
    Ok(hsl_object(&color))
}

/// The HWB components of `value`, with the rounding of [`to_hwb`].
pub fn to_hwb_object(value: &str) -> Result<HwbObject, UnrecognizedFormat> {
    let (color, _) = convert_color(value, ColorFormat::Hwb, None, None)?;
    Ok(hwb_object(&color))
}

/// The unrounded CIE-Lab components of `value`.
pub fn to_lab_object(value: &str) -> Result<LabObject, UnrecognizedFormat> {
    let (color, _) = convert_color(value, ColorFormat::Lab, None, None)?;
    Ok(lab_object(&color))
}

/// The unrounded CIE-Lch components of `value`.
pub fn to_lch_object(value: &str) -> Result<LchObject, UnrecognizedFormat> {
    let (color, _) = convert_color(value, ColorFormat::Lch, None, None)?;
    Ok(lch_object(&color))
}

/// The unrounded Oklab components of `value`.
pub fn to_oklab_object(value: &str) -> Result<OklabObject, UnrecognizedFormat> {
    let (color, _) = convert_color(value, ColorFormat::Oklab, None, None)?;
    Ok(oklab_object(&color))
}

/// The unrounded Oklch components of `value`.
pub fn to_oklch_object(value: &str) -> Result<OklchObject, UnrecognizedFormat> {
    let (color, _) = convert_color(value, ColorFormat::Oklch, None, None)?;
    Ok(oklch_object(&color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn fixed_target_strings() {
        assert_eq!(to_hex("rgb(255, 0, 0)").unwrap(), "#ff0000");
        assert_eq!(to_rgb("hsl(0, 100%, 50%)").unwrap(), "rgb(255, 0, 0)");
        assert_eq!(
            to_rgba("#ff000080").unwrap(),
            "rgba(255, 0, 0, 0.5019607843137255)"
        );
        assert_eq!(
            to_hex_alpha("hsla(0, 100%, 50%, 0.75)").unwrap(),
            "#ff0000bf"
        );
        assert_eq!(to_hsl("rgb(255, 0, 0)").unwrap(), "hsl(0, 100%, 50%)");
        assert_eq!(to_hwb("rgb(255, 0, 0)").unwrap(), "hwb(0, 0%, 0%)");
    }

    #[test]
    fn boundary_alphas_serialize_exactly() {
        let zero = convert("rgb(255, 0, 0)", ColorFormat::Rgba, None, Some(0.0)).unwrap();
        assert_eq!(zero, "rgba(255, 0, 0, 0)");

        let zero = convert("rgb(255, 0, 0)", ColorFormat::HexAlpha, None, Some(0.0)).unwrap();
        assert_eq!(zero, "#ff000000");

        let one = convert("rgba(255, 0, 0, 0.5)", ColorFormat::HexAlpha, None, Some(1.0)).unwrap();
        assert_eq!(one, "#ff0000ff");

        let intrinsic = to_hex_alpha("rgb(255, 0, 0)").unwrap();
        assert_eq!(intrinsic, "#ff0000ff");
    }

    #[test]
    fn strings_agree_with_objects() {
        for value in ["rgb(210, 105, 30)", "hsl(25, 75%, 47%)", "#1e90ff"] {
            let o = to_rgb_object(value).unwrap();
            assert_eq!(
                to_rgb(value).unwrap(),
                format!("rgb({}, {}, {})", o.r, o.g, o.b)
            );

            let o = to_hsl_object(value).unwrap();
            assert_eq!(
                to_hsl(value).unwrap(),
                format!("hsl({}, {}%, {}%)", o.h, o.s, o.l)
            );

            let o = to_hwb_object(value).unwrap();
            assert_eq!(
                to_hwb(value).unwrap(),
                format!("hwb({}, {}%, {}%)", o.h, o.w, o.b)
            );
        }
    }

    #[test]
    fn objects_round_the_display_families_only() {
        let rgb = to_rgb_object("hwb(40, 30%, 40%)").unwrap();
        assert_eq!(rgb.r, 153.0);
        assert_eq!(rgb.g, 128.0);
        assert_eq!(rgb.b, 77.0);
        assert_eq!(rgb.alpha, 1.0);

        let lab = to_lab_object("rgb(210, 105, 30)").unwrap();
        assert_component_eq!(lab.l, 55.9881227048);
        assert_component_eq!(lab.a, 37.0479791793);
        assert_component_eq!(lab.b, 56.7413298199);

        let oklch = to_oklch_object("rgb(210, 105, 30)").unwrap();
        assert_component_eq!(oklch.l, 0.6343984169);
        assert_component_eq!(oklch.c, 0.1549924154);
        assert_component_eq!(oklch.h, 50.2664830832);
    }

    #[test]
    fn hex_bytes_clamp_out_of_range_channels() {
        assert_eq!(to_hex("rgb(300, -20, 0)").unwrap(), "#ff0000");
    }

    #[test]
    fn perceptual_strings_round_trip() {
        let lab = to_lab("rgb(210, 105, 30)").unwrap();
        assert_eq!(to_rgb(&lab).unwrap(), "rgb(210, 105, 30)");

        let oklch = to_oklch("rgb(210, 105, 30)").unwrap();
        assert_eq!(to_rgb(&oklch).unwrap(), "rgb(210, 105, 30)");
    }

    #[test]
    fn perceptual_strings_carry_a_translucent_alpha() {
        let lab = to_lab("rgba(210, 105, 30, 0.5)").unwrap();
        assert!(lab.ends_with(" 0.5)"));
        assert_eq!(to_rgba(&lab).unwrap(), "rgba(210, 105, 30, 0.5)");

        let opaque = to_lab("rgb(210, 105, 30)").unwrap();
        assert_eq!(opaque.split_whitespace().count(), 3);
    }

    #[test]
    fn display_family_round_trips_are_stable() {
        let hsl = to_hsl("hsl(120, 50%, 50%)").unwrap();
        assert_eq!(hsl, "hsl(120, 50%, 50%)");

        let rgb = to_rgb(&to_hsl("rgb(255, 0, 0)").unwrap()).unwrap();
        assert_eq!(rgb, "rgb(255, 0, 0)");

        let back = to_hsl(&to_rgb("hsl(120, 50%, 50%)").unwrap()).unwrap();
        assert_eq!(back, "hsl(120, 50%, 50%)");

        let hwb = to_hwb(&to_rgb("hwb(40, 30%, 40%)").unwrap()).unwrap();
        assert_eq!(hwb, "hwb(40, 30%, 40%)");
    }
}
