//! Parsers that turn grammar-matching text into canonical [`Color`]
//! records, and the total validator built on top of them.

use std::str::FromStr;

use crate::{
    color::{Color, Component, Space},
    format::{detect, ColorFormat, UnrecognizedFormat},
};

/// Parse `value` according to an already detected format.
///
/// Parsers are total: tokens that fail numeric coercion become NaN rather
/// than erroring, and range checking is left to [`is_valid`]. Values are
/// scaled into model space (sRGB channels and percentages onto `0..=1`).
pub(crate) fn parse(value: &str, format: ColorFormat) -> Color {
    let value = value.trim();
    match format {
        ColorFormat::Hex | ColorFormat::HexAlpha => parse_hex(value),
        ColorFormat::Color => parse_fallback(value),
        _ => parse_function(value, format),
    }
}

impl FromStr for Color {
    type Err = UnrecognizedFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        detect(s).map(|format| parse(s, format))
    }
}

impl TryFrom<&str> for Color {
    type Error = UnrecognizedFormat;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

fn hex_nibble(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Parse the `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA` notations.
/// Shorthand digits are expanded by doubling.
fn parse_hex(value: &str) -> Color {
    let digits = value.trim_start_matches('#').as_bytes();

    let nibble =
        |index: usize| digits.get(index).and_then(|&b| hex_nibble(b)).unwrap_or(0) as Component;
    let byte = |index: usize| (nibble(index) * 16.0 + nibble(index + 1)) / 255.0;
    let short = |index: usize| nibble(index) * 17.0 / 255.0;

    let (red, green, blue, alpha) = match digits.len() {
        3 => (short(0), short(1), short(2), None),
        4 => (short(0), short(1), short(2), Some(short(3))),
        8 => (byte(0), byte(2), byte(4), Some(byte(6))),
        _ => (byte(0), byte(2), byte(4), None),
    };

    Color::new(Space::Srgb, red, green, blue, alpha)
}

/// Slice the argument list out of a functional notation and split it into
/// tokens. Commas, whitespace and `/` all separate.
fn arguments(value: &str) -> Vec<&str> {
    let inner = match value.split_once('(') {
        Some((_, rest)) => rest.trim_end().trim_end_matches(')'),
        None => value,
    };

    inner
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Coerce a token to a number, tolerating a trailing `%`. Missing or
/// malformed tokens coerce to NaN.
fn number(token: Option<&str>) -> Component {
    match token {
        Some(token) => token
            .strip_suffix('%')
            .unwrap_or(token)
            .parse()
            .unwrap_or(Component::NAN),
        None => Component::NAN,
    }
}

fn is_numeric(token: &str) -> bool {
    token
        .strip_suffix('%')
        .unwrap_or(token)
        .parse::<Component>()
        .map_or(false, |value| value.is_finite())
}

/// Parse any functional notation. A 4th token is read as intrinsic alpha
/// whether or not the format name carries an `a` suffix.
fn parse_function(value: &str, format: ColorFormat) -> Color {
    let tokens = arguments(value);

    let c0 = number(tokens.first().copied());
    let c1 = number(tokens.get(1).copied());
    let c2 = number(tokens.get(2).copied());
    let alpha = tokens.get(3).map(|token| number(Some(*token)));

    let space = format.space();
    match space {
        Space::Srgb => Color::new(space, c0 / 255.0, c1 / 255.0, c2 / 255.0, alpha),
        Space::Hsl | Space::Hwb => Color::new(space, c0, c1 / 100.0, c2 / 100.0, alpha),
        _ => Color::new(space, c0, c1, c2, alpha),
    }
}

/// Parse the permissive fallback. A known function name selects the
/// component model with a free channel count; the `color(...)` form itself
/// is handled by [`parse_color_function`].
fn parse_fallback(value: &str) -> Color {
    let name = value
        .split_once('(')
        .map(|(name, _)| name.trim().to_ascii_lowercase());

    match name.as_deref() {
        Some("rgb") | Some("rgba") => parse_function(value, ColorFormat::Rgba),
        Some("hsl") | Some("hsla") => parse_function(value, ColorFormat::Hsla),
        Some("hwb") | Some("hwba") => parse_function(value, ColorFormat::Hwba),
        Some("lab") => parse_function(value, ColorFormat::Lab),
        Some("lch") => parse_function(value, ColorFormat::Lch),
        Some("oklab") => parse_function(value, ColorFormat::Oklab),
        Some("oklch") => parse_function(value, ColorFormat::Oklch),
        _ => parse_color_function(value),
    }
}

/// Parse the `color(...)` form: an optional leading color space ident
/// followed by three components in the space's own scale and an optional
/// alpha. sRGB channels are `0..=1` here, unlike `rgb(...)`.
fn parse_color_function(value: &str) -> Color {
    let mut tokens = arguments(value);

    let has_ident = tokens.first().map_or(false, |first| !is_numeric(first));
    let space = if has_ident {
        match tokens.remove(0).to_ascii_lowercase().as_str() {
            "hsl" => Space::Hsl,
            "hwb" => Space::Hwb,
            "lab" => Space::Lab,
            "lch" => Space::Lch,
            "oklab" => Space::Oklab,
            "oklch" => Space::Oklch,
            _ => Space::Srgb,
        }
    } else {
        Space::Srgb
    };

    let c0 = number(tokens.first().copied());
    let c1 = number(tokens.get(1).copied());
    let c2 = number(tokens.get(2).copied());
    let alpha = tokens.get(3).map(|token| number(Some(*token)));

    match space {
        Space::Hsl | Space::Hwb => Color::new(space, c0, c1 / 100.0, c2 / 100.0, alpha),
        _ => Color::new(space, c0, c1, c2, alpha),
    }
}

/// Report whether `value` matches a supported grammar with well-formed
/// components. Never fails.
///
/// Out-of-range channel values are accepted (`rgb(300, 0, 0)` is valid);
/// only a hue and an intrinsic alpha are range checked, against `[0, 360)`
/// and `[0, 1]` respectively.
pub fn is_valid(value: &str) -> bool {
    let Ok(format) = detect(value) else {
        return false;
    };

    if matches!(format, ColorFormat::Hex | ColorFormat::HexAlpha) {
        return true;
    }

    let mut tokens = arguments(value.trim());
    if format == ColorFormat::Color && tokens.first().map_or(false, |first| !is_numeric(first)) {
        tokens.remove(0);
    }

    if tokens.len() < 3 || tokens.len() > 4 {
        return false;
    }
    if !tokens.iter().all(|token| is_numeric(token)) {
        return false;
    }

    let hue = match format {
        ColorFormat::Hsl | ColorFormat::Hsla | ColorFormat::Hwb | ColorFormat::Hwba => {
            Some(number(tokens.first().copied()))
        }
        ColorFormat::Lch | ColorFormat::Oklch => Some(number(tokens.get(2).copied())),
        _ => None,
    };
    if let Some(hue) = hue {
        if !(0.0..360.0).contains(&hue) {
            return false;
        }
    }

    if let Some(alpha) = tokens.get(3).copied() {
        let alpha = number(Some(alpha));
        if !(0.0..=1.0).contains(&alpha) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::color::{Components, Flags};

    #[test]
    fn hex_shorthand_expands_by_doubling() {
        let c: Color = "#f00".parse().unwrap();
        assert_eq!(c.space, Space::Srgb);
        assert_eq!(c.components, Components(1.0, 0.0, 0.0));
        assert_eq!(c.alpha(), None);

        let c: Color = "#abc".parse().unwrap();
        assert_component_eq!(c.components.0, 170.0 / 255.0);
        assert_component_eq!(c.components.1, 187.0 / 255.0);
        assert_component_eq!(c.components.2, 204.0 / 255.0);

        assert!(Color::try_from("#f00").is_ok());
        assert!(Color::try_from("nope").is_err());
    }

    #[test]
    fn hex_alpha_reads_the_trailing_byte() {
        let c: Color = "#ff000080".parse().unwrap();
        assert_eq!(c.components, Components(1.0, 0.0, 0.0));
        assert_eq!(c.alpha(), Some(128.0 / 255.0));

        let c: Color = "#f008".parse().unwrap();
        assert_eq!(c.alpha(), Some(136.0 / 255.0));
    }

    #[test]
    fn functional_separators_and_percents() {
        let comma: Color = "rgb(210, 105, 30)".parse().unwrap();
        let space: Color = "rgb(210 105 30)".parse().unwrap();
        assert_eq!(comma.components, space.components);

        let c: Color = "hsl(25, 75%, 47%)".parse().unwrap();
        assert_eq!(c.space, Space::Hsl);
        assert_eq!(c.components, Components(25.0, 0.75, 0.47));

        let c: Color = "hwb(25 12% 18%)".parse().unwrap();
        assert_eq!(c.space, Space::Hwb);
        assert_eq!(c.components, Components(25.0, 0.12, 0.18));
    }

    #[test]
    fn a_fourth_token_is_intrinsic_alpha_for_any_function() {
        let c: Color = "rgb(255, 0, 0, 0.5)".parse().unwrap();
        assert_eq!(c.alpha(), Some(0.5));

        let c: Color = "lab(56 37 57 / 0.25)".parse().unwrap();
        assert_eq!(c.alpha(), Some(0.25));

        let c: Color = "rgba(255, 0, 0)".parse().unwrap();
        assert_eq!(c.alpha(), None);
        assert_eq!(c.flags, Flags::ALPHA_IS_NONE);
    }

    #[test]
    fn perceptual_components_pass_through_unscaled() {
        let c: Color = "lab(55.98 37.04 56.74)".parse().unwrap();
        assert_eq!(c.components, Components(55.98, 37.04, 56.74));

        let c: Color = "oklch(0.63 0.15 50.26)".parse().unwrap();
        assert_eq!(c.components, Components(0.63, 0.15, 50.26));
    }

    #[test]
    fn color_function_skips_a_leading_space_ident() {
        let c: Color = "color(srgb 1 0 0)".parse().unwrap();
        assert_eq!(c.space, Space::Srgb);
        assert_eq!(c.components, Components(1.0, 0.0, 0.0));

        let c: Color = "color(oklch 0.63 0.15 50.26 0.5)".parse().unwrap();
        assert_eq!(c.space, Space::Oklch);
        assert_eq!(c.alpha(), Some(0.5));
    }

    #[test]
    fn malformed_tokens_coerce_to_nan() {
        let c: Color = "rgb(red, 0, 0)".parse().unwrap();
        assert!(c.components.0.is_nan());
        assert_eq!(c.components.1, 0.0);
    }

    #[test]
    fn validity_is_permissive_about_channel_range() {
        assert!(is_valid("rgb(300, 0, 0)"));
        assert!(is_valid("hsl(0, 150%, 50%)"));
        assert!(is_valid("lab(120 -200 200)"));
    }

    #[test]
    fn validity_rejects_unmatched_or_malformed_input() {
        assert!(!is_valid("#gggggg"));
        assert!(!is_valid("rgb(red, 0, 0)"));
        assert!(!is_valid("rgb(1, 2)"));
        assert!(!is_valid("rgb(1, 2, 3, 0.5, 6)"));
        assert!(!is_valid("blue"));
    }

    #[test]
    fn validity_range_checks_hue_and_alpha() {
        assert!(is_valid("hsl(359.9, 100%, 50%)"));
        assert!(!is_valid("hsl(360, 100%, 50%)"));
        assert!(!is_valid("hwb(-10, 0%, 0%)"));
        assert!(!is_valid("lch(50 30 400)"));
        assert!(is_valid("rgba(255, 0, 0, 1)"));
        assert!(!is_valid("rgba(255, 0, 0, 1.5)"));
        assert!(!is_valid("rgba(255, 0, 0, -0.5)"));
    }

    #[test]
    fn hex_validity_follows_detection() {
        assert!(is_valid("#fff"));
        assert!(is_valid("#ff000080"));
        assert!(!is_valid("#ff000"));

        assert!(is_valid(" #FF8000 "));
    }
}
