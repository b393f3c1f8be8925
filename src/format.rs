//! The closed set of textual color formats and the grammar detector that
//! classifies raw strings into them.

use std::fmt;
use std::str::FromStr;

use crate::color::Space;

/// A tag naming one of the supported textual color grammars. Returned by
/// [`detect`] and used to select a conversion target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormat {
    /// `#RGB` or `#RRGGBB`.
    Hex,
    /// `#RGBA` or `#RRGGBBAA`.
    HexAlpha,
    /// `rgb(R, G, B)`.
    Rgb,
    /// `rgba(R, G, B, A)`.
    Rgba,
    /// `hsl(H, S%, L%)`.
    Hsl,
    /// `hsla(H, S%, L%, A)`.
    Hsla,
    /// `hwb(H, W%, B%)`.
    Hwb,
    /// `hwba(H, W%, B%, A)`.
    Hwba,
    /// `lab(L a b)`.
    Lab,
    /// `lch(L C H)`.
    Lch,
    /// `oklab(l a b)`.
    Oklab,
    /// `oklch(l c h)`.
    Oklch,
    /// The permissive `color(...)` fallback grammar, which also accepts the
    /// other functional families with a free channel count.
    Color,
}

impl ColorFormat {
    /// The grammar name of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::HexAlpha => "hexalpha",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::Hsl => "hsl",
            Self::Hsla => "hsla",
            Self::Hwb => "hwb",
            Self::Hwba => "hwba",
            Self::Lab => "lab",
            Self::Lch => "lch",
            Self::Oklab => "oklab",
            Self::Oklch => "oklch",
            Self::Color => "color",
        }
    }

    /// The conversion graph node that colors of this format live in. The
    /// permissive fallback defaults to sRGB; its parser refines the space
    /// from the function name.
    pub fn space(&self) -> Space {
        match self {
            Self::Hex | Self::HexAlpha | Self::Rgb | Self::Rgba | Self::Color => Space::Srgb,
            Self::Hsl | Self::Hsla => Space::Hsl,
            Self::Hwb | Self::Hwba => Space::Hwb,
            Self::Lab => Space::Lab,
            Self::Lch => Space::Lch,
            Self::Oklab => Space::Oklab,
            Self::Oklch => Space::Oklch,
        }
    }

    /// Whether the format's grammar carries an explicit alpha channel.
    pub fn has_alpha(&self) -> bool {
        matches!(self, Self::HexAlpha | Self::Rgba | Self::Hsla | Self::Hwba)
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFormat {
    type Err = UnrecognizedFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "hexalpha" => Ok(Self::HexAlpha),
            "rgb" => Ok(Self::Rgb),
            "rgba" => Ok(Self::Rgba),
            "hsl" => Ok(Self::Hsl),
            "hsla" => Ok(Self::Hsla),
            "hwb" => Ok(Self::Hwb),
            "hwba" => Ok(Self::Hwba),
            "lab" => Ok(Self::Lab),
            "lch" => Ok(Self::Lch),
            "oklab" => Ok(Self::Oklab),
            "oklch" => Ok(Self::Oklch),
            "color" => Ok(Self::Color),
            _ => Err(UnrecognizedFormat::new(s)),
        }
    }
}

/// Error returned when a string matches none of the supported color
/// grammars. This is the only error the engine raises.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnrecognizedFormat {
    value: String,
}

impl UnrecognizedFormat {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The text that failed to match a grammar.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for UnrecognizedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized color format: {:?}", self.value)
    }
}

impl std::error::Error for UnrecognizedFormat {}

/// Classify a raw string into the color format its structure matches.
///
/// Detection is structural: a leading `#` with 3/4/6/8 hex digits selects
/// the hex family, a known function name followed by a parenthesized
/// argument list selects its tag. Surrounding whitespace is tolerated and
/// matching is case-insensitive.
pub fn detect(value: &str) -> Result<ColorFormat, UnrecognizedFormat> {
    let trimmed = value.trim();

    if let Some(digits) = trimmed.strip_prefix('#') {
        if digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            match digits.len() {
                3 | 6 => return Ok(ColorFormat::Hex),
                4 | 8 => return Ok(ColorFormat::HexAlpha),
                _ => {}
            }
        }
        return Err(UnrecognizedFormat::new(value));
    }

    if let Some((name, arguments)) = trimmed.split_once('(') {
        if arguments.ends_with(')') {
            return match name.trim().to_ascii_lowercase().as_str() {
                "rgb" => Ok(ColorFormat::Rgb),
                "rgba" => Ok(ColorFormat::Rgba),
                "hsl" => Ok(ColorFormat::Hsl),
                "hsla" => Ok(ColorFormat::Hsla),
                "hwb" => Ok(ColorFormat::Hwb),
                "hwba" => Ok(ColorFormat::Hwba),
                "lab" => Ok(ColorFormat::Lab),
                "lch" => Ok(ColorFormat::Lch),
                "oklab" => Ok(ColorFormat::Oklab),
                "oklch" => Ok(ColorFormat::Oklch),
                "color" => Ok(ColorFormat::Color),
                _ => Err(UnrecognizedFormat::new(value)),
            };
        }
    }

    Err(UnrecognizedFormat::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_every_grammar() {
        let cases = [
            ("#fff", ColorFormat::Hex),
            ("#ff0000", ColorFormat::Hex),
            ("#ff08", ColorFormat::HexAlpha),
            ("#ff000080", ColorFormat::HexAlpha),
            ("rgb(255, 0, 0)", ColorFormat::Rgb),
            ("rgba(255, 0, 0, 0.5)", ColorFormat::Rgba),
            ("hsl(0, 100%, 50%)", ColorFormat::Hsl),
            ("hsla(0, 100%, 50%, 0.5)", ColorFormat::Hsla),
            ("hwb(0, 0%, 0%)", ColorFormat::Hwb),
            ("hwba(0, 0%, 0%, 0.5)", ColorFormat::Hwba),
            ("lab(56 37 57)", ColorFormat::Lab),
            ("lch(56 68 57)", ColorFormat::Lch),
            ("oklab(0.63 0.1 0.12)", ColorFormat::Oklab),
            ("oklch(0.63 0.15 50)", ColorFormat::Oklch),
            ("color(srgb 1 0 0)", ColorFormat::Color),
        ];

        for (value, expected) in cases {
            assert_eq!(detect(value).unwrap(), expected, "{}", value);
        }
    }

    #[test]
    fn detection_tolerates_case_and_whitespace() {
        assert_eq!(detect("  RGB( 255 , 0 , 0 )  ").unwrap(), ColorFormat::Rgb);
        assert_eq!(detect("OkLch(0.6 0.1 50)").unwrap(), ColorFormat::Oklch);
        assert_eq!(detect(" #FF0000 ").unwrap(), ColorFormat::Hex);
    }

    #[test]
    fn unmatched_grammars_fail() {
        for value in [
            "",
            "red",
            "#gggggg",
            "#ff000",
            "#f",
            "rgb 255, 0, 0",
            "rgb(255, 0, 0",
            "cmyk(0, 0, 0, 1)",
        ] {
            assert!(detect(value).is_err(), "{:?}", value);
        }

        let err = detect("#gggggg").unwrap_err();
        assert_eq!(err.value(), "#gggggg");
        assert!(err.to_string().contains("#gggggg"));
    }

    #[test]
    fn alpha_bearing_formats() {
        assert!(ColorFormat::HexAlpha.has_alpha());
        assert!(ColorFormat::Rgba.has_alpha());
        assert!(ColorFormat::Hsla.has_alpha());
        assert!(ColorFormat::Hwba.has_alpha());
        assert!(!ColorFormat::Rgb.has_alpha());
        assert!(!ColorFormat::Lab.has_alpha());
    }

    #[test]
    fn a_fourth_channel_does_not_change_the_detected_tag() {
        assert_eq!(detect("rgb(255, 0, 0, 0.5)").unwrap(), ColorFormat::Rgb);
        assert_eq!(detect("lab(56 37 57 0.5)").unwrap(), ColorFormat::Lab);
    }

    #[test]
    fn format_names_round_trip() {
        for format in [
            ColorFormat::Hex,
            ColorFormat::HexAlpha,
            ColorFormat::Rgb,
            ColorFormat::Rgba,
            ColorFormat::Hsl,
            ColorFormat::Hsla,
            ColorFormat::Hwb,
            ColorFormat::Hwba,
            ColorFormat::Lab,
            ColorFormat::Lch,
            ColorFormat::Oklab,
            ColorFormat::Oklch,
            ColorFormat::Color,
        ] {
            assert_eq!(format.as_str().parse::<ColorFormat>().unwrap(), format);
        }
        assert!("cmyk".parse::<ColorFormat>().is_err());
    }
}
