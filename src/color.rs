//! A [`Color`] represents a color value in any node of the conversion graph,
//! along with an alpha channel that is tracked as present or absent.

use bitflags::bitflags;

/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

bitflags! {
    /// Flags to mark parts of a [`Color`] that were absent from its source
    /// text.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Flags : u8 {
        /// Set when the source text carried no alpha channel. An absent
        /// alpha and an alpha of 1.0 are distinct until resolution.
        const ALPHA_IS_NONE = 1 << 0;
    }
}

/// The nodes of the conversion graph. Every supported textual format maps
/// onto one of these; [`SrgbLinear`](Space::SrgbLinear) and
/// [`Xyz`](Space::Xyz) are pivot spaces that no grammar produces directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Space {
    /// The sRGB color space, gamma encoded. Hex and rgb values live here.
    Srgb = 0,
    /// The HSL (hue, saturation, lightness) notation of the sRGB color
    /// space.
    Hsl = 1,
    /// The HWB (hue, whiteness, blackness) notation of the sRGB color
    /// space.
    Hwb = 2,
    /// The CIE-Lab color space, referenced to the D65 white point.
    Lab = 3,
    /// The cylindrical polar form of CIE-Lab.
    Lch = 4,
    /// The Oklab color space.
    Oklab = 5,
    /// The cylindrical polar form of Oklab.
    Oklch = 6,
    /// The sRGB color space with no gamma encoding; pivot towards CIE-XYZ.
    SrgbLinear = 7,
    /// The CIE-XYZ color space with a D65 white point, the base of the
    /// conversion graph.
    Xyz = 8,
}

/// Implemented by color models that correspond to a fixed [`Space`].
pub trait HasSpace {
    /// The space the model's components are expressed in.
    const SPACE: Space;
}

/// Struct that can hold a color of any space in the conversion graph.
#[derive(Clone, Debug)]
pub struct Color {
    /// The three components that make up any color.
    pub components: Components,
    /// The alpha component of the color. Only meaningful when
    /// [`Flags::ALPHA_IS_NONE`] is clear; use [`Color::alpha`] to read it.
    pub alpha: Component,
    /// Holds any flags that might be enabled for this color.
    pub flags: Flags,
    /// The space in which the components are set.
    pub space: Space,
}

impl Color {
    /// Create a new [`Color`]. The alpha component accepts anything that
    /// converts into an [`AlphaChannel`], so an absent alpha can be passed
    /// as `None`:
    /// ```rust
    /// use chromat::{Color, Space};
    /// let c = Color::new(Space::Srgb, 1.0, 0.0, 0.0, None);
    /// assert!(c.alpha().is_none());
    /// ```
    pub fn new(
        space: Space,
        c0: Component,
        c1: Component,
        c2: Component,
        alpha: impl Into<AlphaChannel>,
    ) -> Self {
        let mut flags = Flags::empty();
        let alpha = alpha.into().value_and_flag(&mut flags);

        Self {
            components: Components(c0, c1, c2),
            alpha,
            flags,
            space,
        }
    }

    /// Return the alpha component of the color, or `None` when the source
    /// carried no alpha channel.
    pub fn alpha(&self) -> Option<Component> {
        if self.flags.contains(Flags::ALPHA_IS_NONE) {
            None
        } else {
            Some(self.alpha)
        }
    }

    /// Return this color with its alpha channel replaced by a resolved
    /// value.
    pub fn with_alpha(&self, alpha: Component) -> Self {
        Self {
            components: self.components,
            alpha,
            flags: self.flags - Flags::ALPHA_IS_NONE,
            space: self.space,
        }
    }
}

/// A struct that holds an alpha value passed to [`Color::new`] that may be
/// missing. Any value that can be passed implements `From<?> for
/// AlphaChannel`.
pub struct AlphaChannel {
    value: Component,
    is_none: bool,
}

impl AlphaChannel {
    /// Extract the value and set the missing flag if the alpha is none.
    pub fn value_and_flag(&self, flags: &mut Flags) -> Component {
        if self.is_none {
            *flags |= Flags::ALPHA_IS_NONE;
        }
        self.value
    }
}

impl From<Component> for AlphaChannel {
    fn from(value: Component) -> Self {
        Self {
            value,
            is_none: false,
        }
    }
}

impl From<Option<Component>> for AlphaChannel {
    fn from(value: Option<Component>) -> Self {
        if let Some(value) = value {
            Self::from(value)
        } else {
            Self {
                value: 1.0,
                is_none: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_color_with_correct_components() {
        let c = Color::new(Space::Srgb, 0.1, 0.2, 0.3, 0.4);
        assert_eq!(c.components, Components(0.1, 0.2, 0.3));
        assert_eq!(c.alpha, 0.4);
        assert_eq!(c.flags, Flags::empty());
        assert_eq!(c.space, Space::Srgb);

        let c = Color::new(Space::Hsl, 120.0, 0.5, 0.5, None);
        assert_eq!(c.components, Components(120.0, 0.5, 0.5));
        assert_eq!(c.alpha(), None);
        assert_eq!(c.flags, Flags::ALPHA_IS_NONE);
        assert_eq!(c.space, Space::Hsl);
    }

    #[test]
    fn absent_alpha_is_distinct_from_opaque() {
        let absent = Color::new(Space::Srgb, 0.0, 0.0, 0.0, None);
        let opaque = Color::new(Space::Srgb, 0.0, 0.0, 0.0, 1.0);
        assert_eq!(absent.alpha(), None);
        assert_eq!(opaque.alpha(), Some(1.0));
    }

    #[test]
    fn with_alpha_resolves_a_missing_channel() {
        let c = Color::new(Space::Srgb, 0.1, 0.2, 0.3, None).with_alpha(0.5);
        assert_eq!(c.alpha(), Some(0.5));
        assert_eq!(c.flags, Flags::empty());
    }

    #[test]
    fn alpha_channel_conversions() {
        let mut flags = Flags::empty();
        let value = AlphaChannel::from(0.25).value_and_flag(&mut flags);
        assert_eq!(value, 0.25);
        assert!(flags.is_empty());

        let mut flags = Flags::empty();
        AlphaChannel::from(None).value_and_flag(&mut flags);
        assert_eq!(flags, Flags::ALPHA_IS_NONE);

        let mut flags = Flags::empty();
        let value = AlphaChannel::from(Some(0.75)).value_and_flag(&mut flags);
        assert_eq!(value, 0.75);
        assert!(flags.is_empty());
    }
}
