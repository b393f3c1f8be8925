//! Each color space/form is modeled with its own type and conversions are
//! only implemented on relevant models, so conversion paths stay accurate
//! and composable. Non-adjacent spaces are connected by routing through the
//! CIE-XYZ base instead of special casing every pairwise combination.
//!
//! ```rust
//! use chromat::{convert, ColorFormat};
//! let rgb = convert("hsl(0, 100%, 50%)", ColorFormat::Rgb, None, None).unwrap();
//! assert_eq!(rgb, "rgb(255, 0, 0)");
//! ```

use crate::{
    color::{Color, Component, Space},
    format::{detect, ColorFormat, UnrecognizedFormat},
    models::{Hsl, Hwb, Lab, Lch, Model, Oklab, Oklch, Srgb, SrgbLinear, ToBase, Xyz},
    parse, serialize,
};

impl Color {
    /// Convert this color from its current color space/notation to the
    /// specified color space/notation. The alpha channel is carried along
    /// untouched, including its absence.
    pub fn to_space(&self, space: Space) -> Self {
        use Space as S;

        if self.space == space {
            return self.clone();
        }

        // Handle direct conversions.
        match (self.space, space) {
            (S::Srgb, S::SrgbLinear) => {
                return Srgb::from(self.components)
                    .to_linear_light()
                    .to_color(self.alpha())
            }
            (S::SrgbLinear, S::Srgb) => {
                return SrgbLinear::from(self.components)
                    .to_gamma_encoded()
                    .to_color(self.alpha())
            }
            (S::Srgb, S::Hsl) => {
                return Srgb::from(self.components).to_hsl().to_color(self.alpha())
            }
            (S::Hsl, S::Srgb) => {
                return Hsl::from(self.components).to_srgb().to_color(self.alpha())
            }
            (S::Srgb, S::Hwb) => {
                return Srgb::from(self.components).to_hwb().to_color(self.alpha())
            }
            (S::Hwb, S::Srgb) => {
                return Hwb::from(self.components).to_srgb().to_color(self.alpha())
            }
            (S::Hsl, S::Hwb) => {
                return Hsl::from(self.components)
                    .to_srgb()
                    .to_hwb()
                    .to_color(self.alpha())
            }
            (S::Hwb, S::Hsl) => {
                return Hwb::from(self.components)
                    .to_srgb()
                    .to_hsl()
                    .to_color(self.alpha())
            }
            (S::Lab, S::Lch) => {
                return Lab::from(self.components).to_polar().to_color(self.alpha())
            }
            (S::Oklab, S::Oklch) => {
                return Oklab::from(self.components)
                    .to_polar()
                    .to_color(self.alpha())
            }
            (S::Lch, S::Lab) => {
                return Lch::from(self.components)
                    .to_rectangular()
                    .to_color(self.alpha())
            }
            (S::Oklch, S::Oklab) => {
                return Oklch::from(self.components)
                    .to_rectangular()
                    .to_color(self.alpha())
            }
            _ => {}
        }

        // The rest routes through the XYZ base.
        let base = match self.space {
            S::Srgb => Srgb::from(self.components).to_base(),
            S::SrgbLinear => SrgbLinear::from(self.components).to_base(),
            S::Hsl => Hsl::from(self.components).to_base(),
            S::Hwb => Hwb::from(self.components).to_base(),
            S::Lab => Lab::from(self.components).to_base(),
            S::Lch => Lch::from(self.components).to_base(),
            S::Oklab => Oklab::from(self.components).to_base(),
            S::Oklch => Oklch::from(self.components).to_base(),
            S::Xyz => Xyz::from(self.components).to_base(),
        };

        match space {
            S::Srgb => SrgbLinear::from(base)
                .to_gamma_encoded()
                .to_color(self.alpha()),
            S::SrgbLinear => SrgbLinear::from(base).to_color(self.alpha()),
            S::Hsl => SrgbLinear::from(base)
                .to_gamma_encoded()
                .to_hsl()
                .to_color(self.alpha()),
            S::Hwb => SrgbLinear::from(base)
                .to_gamma_encoded()
                .to_hwb()
                .to_color(self.alpha()),
            S::Lab => Lab::from(base).to_color(self.alpha()),
            S::Lch => Lab::from(base).to_polar().to_color(self.alpha()),
            S::Oklab => Oklab::from(base).to_color(self.alpha()),
            S::Oklch => Oklab::from(base).to_polar().to_color(self.alpha()),
            S::Xyz => base.to_color(self.alpha()),
        }
    }
}

impl Srgb {
    /// Convert a color specified in the sRGB color space to the HSL
    /// notation.
    pub fn to_hsl(&self) -> Hsl {
        util::rgb_to_hsl(&self.to_components()).into()
    }

    /// Convert a color specified in the sRGB color space to the HWB
    /// notation.
    pub fn to_hwb(&self) -> Hwb {
        util::rgb_to_hwb(&self.to_components()).into()
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to the sRGB color space.
    pub fn to_srgb(&self) -> Srgb {
        util::hsl_to_rgb(&self.to_components()).into()
    }
}

impl Hwb {
    /// Convert this color from the HWB notation to the sRGB color space.
    pub fn to_srgb(&self) -> Srgb {
        util::hwb_to_rgb(&self.to_components()).into()
    }
}

mod util {
    use crate::{
        color::{Component, Components},
        math::{almost_zero, normalize, normalize_hue},
    };

    /// Calculate the hue from RGB components and return it along with the
    /// min and max RGB values. The hue of an achromatic color is 0.
    fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if delta != 0.0 {
            normalize_hue(
                60.0 * if max == red {
                    (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
                } else if max == green {
                    (blue - red) / delta + 2.0
                } else {
                    (red - green) / delta + 4.0
                },
            )
        } else {
            0.0
        };

        (hue, min, max)
    }

    /// Convert from RGB notation to HSL notation.
    /// <https://drafts.csswg.org/css-color-4/#rgb-to-hsl>
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        let saturation =
            if almost_zero(delta) || almost_zero(lightness) || almost_zero(1.0 - lightness) {
                0.0
            } else {
                (max - lightness) / lightness.min(1.0 - lightness)
            };

        Components(hue, saturation, lightness)
    }

    /// Convert from HSL notation to RGB notation.
    /// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = from.map(normalize);

        if saturation <= 0.0 {
            return Components(lightness, lightness, lightness);
        }

        let hue = normalize_hue(hue);

        macro_rules! f {
            ($n:expr) => {{
                let k = ($n + hue / 30.0) % 12.0;
                let a = saturation * lightness.min(1.0 - lightness);
                lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
            }};
        }

        Components(f!(0.0), f!(8.0), f!(4.0))
    }

    /// Convert from RGB notation to HWB notation.
    /// <https://drafts.csswg.org/css-color-4/#rgb-to-hwb>
    pub fn rgb_to_hwb(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let whiteness = min;
        let blackness = 1.0 - max;

        Components(hue, whiteness, blackness)
    }

    /// Convert from HWB notation to RGB notation.
    /// <https://drafts.csswg.org/css-color-4/#hwb-to-rgb>
    pub fn hwb_to_rgb(from: &Components) -> Components {
        let hue = from.0;
        let whiteness = from.1;
        let blackness = from.2;

        if whiteness + blackness >= 1.0 {
            let gray = whiteness / (whiteness + blackness);
            return Components(gray, gray, gray);
        }

        let rgb = hsl_to_rgb(&Components(hue, 1.0, 0.5));
        rgb.map(|v| v * (1.0 - whiteness - blackness) + whiteness)
    }
}

/// Apply the alpha resolution rule shared by every conversion: an explicit
/// override (clamped to `[0, 1]`) wins, else the intrinsic source alpha
/// verbatim, else exactly 1.
pub(crate) fn resolve_alpha(
    overridden: Option<Component>,
    intrinsic: Option<Component>,
) -> Component {
    overridden
        .map(|alpha| alpha.clamp(0.0, 1.0))
        .or(intrinsic)
        .unwrap_or(1.0)
}

/// The serialization format used when the permissive
/// [`ColorFormat::Color`] tag is the conversion target: the source family,
/// with its alpha carrying variant iff the resolved alpha is not opaque.
fn fallback_format(space: Space, alpha: Component) -> ColorFormat {
    let opaque = alpha == 1.0;
    match space {
        Space::Hsl => {
            if opaque {
                ColorFormat::Hsl
            } else {
                ColorFormat::Hsla
            }
        }
        Space::Hwb => {
            if opaque {
                ColorFormat::Hwb
            } else {
                ColorFormat::Hwba
            }
        }
        Space::Lab => ColorFormat::Lab,
        Space::Lch => ColorFormat::Lch,
        Space::Oklab => ColorFormat::Oklab,
        Space::Oklch => ColorFormat::Oklch,
        _ => {
            if opaque {
                ColorFormat::Rgb
            } else {
                ColorFormat::Rgba
            }
        }
    }
}

/// Resolve the source format, parse, pivot to the target family and resolve
/// the alpha channel. Returns the converted color along with the effective
/// target format.
pub(crate) fn convert_color(
    value: &str,
    target: ColorFormat,
    source: Option<ColorFormat>,
    alpha: Option<Component>,
) -> Result<(Color, ColorFormat), UnrecognizedFormat> {
    let format = match source {
        Some(format) => format,
        None => detect(value)?,
    };

    let parsed = parse::parse(value, format);
    let resolved = resolve_alpha(alpha, parsed.alpha());

    let target = match target {
        ColorFormat::Color => fallback_format(parsed.space, resolved),
        target => target,
    };

    Ok((
        parsed.to_space(target.space()).with_alpha(resolved),
        target,
    ))
}

/// Convert a textual color value into the target format's string
/// representation.
///
/// The source format is taken from `source` when given and detected
/// otherwise; `alpha` overrides any alpha carried in the source text.
/// Fails only when neither a hint nor detection resolves a format.
///
/// ```rust
/// use chromat::{convert, ColorFormat};
/// let out = convert("rgba(255, 0, 0, 0.5)", ColorFormat::Hsla, None, Some(0.9)).unwrap();
/// assert_eq!(out, "hsla(0, 100%, 50%, 0.9)");
/// ```
pub fn convert(
    value: &str,
    target: ColorFormat,
    source: Option<ColorFormat>,
    alpha: Option<Component>,
) -> Result<String, UnrecognizedFormat> {
    let (color, target) = convert_color(value, target, source, alpha)?;
    Ok(serialize::to_string(&color, target))
}
