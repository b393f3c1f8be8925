//! Model a color in the sRGB color space, gamma encoded or linear light.

use crate::{
    color::{Component, HasSpace, Space},
    math::{transform, transform_3x3, Transform},
    models::xyz::{ToXyz, Xyz},
};

mod encoding {
    /// This trait is used to identify tags that specify gamma encoding.
    pub trait Encoding {}

    /// Tag for gamma encoded components.
    #[derive(Clone, Debug)]
    pub struct GammaEncoded;
    impl Encoding for GammaEncoded {}

    /// Tag for linear light components.
    #[derive(Clone, Debug)]
    pub struct LinearLight;
    impl Encoding for LinearLight {}
}

chromat_macros::gen_model! {
    /// A color specified in the sRGB color space.
    pub struct Rgb<E: encoding::Encoding> {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

impl Rgb<encoding::GammaEncoded> {
    /// Convert this model from gamma encoded to linear light.
    /// <https://drafts.csswg.org/css-color-4/#color-conversion-code>
    pub fn to_linear_light(&self) -> Rgb<encoding::LinearLight> {
        let components = self.to_components().map(|value| {
            let abs = value.abs();

            if abs < 0.04045 {
                value / 12.92
            } else {
                value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
            }
        });
        components.into()
    }
}

impl Rgb<encoding::LinearLight> {
    /// Convert this model from linear light to gamma encoded.
    pub fn to_gamma_encoded(&self) -> Rgb<encoding::GammaEncoded> {
        let components = self.to_components().map(|value| {
            let abs = value.abs();

            if abs > 0.0031308 {
                value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
            } else {
                12.92 * value
            }
        });
        components.into()
    }
}

/// Model for a color in the sRGB color space with gamma encoding.
pub type Srgb = Rgb<encoding::GammaEncoded>;

impl HasSpace for Srgb {
    const SPACE: Space = Space::Srgb;
}

/// Model for a color in the sRGB color space with no gamma encoding.
pub type SrgbLinear = Rgb<encoding::LinearLight>;

impl HasSpace for SrgbLinear {
    const SPACE: Space = Space::SrgbLinear;
}

impl ToXyz for SrgbLinear {
    fn to_xyz(&self) -> Xyz {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.4123907992659595,  0.21263900587151036, 0.01933081871559185,
            0.35758433938387796, 0.7151686787677559,  0.11919477979462599,
            0.1804807884018343,  0.07219231536073371, 0.9505321522496606,
        );

        transform(&TO_XYZ, self.to_components()).into()
    }
}

impl From<Xyz> for SrgbLinear {
    fn from(value: Xyz) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             3.2409699419045213, -0.9692436362808798,  0.05563007969699361,
            -1.5373831775700935,  1.8759675015077206, -0.20397695888897657,
            -0.4986107602930033,  0.04155505740717561, 1.0569715142428786,
        );

        transform(&FROM_XYZ, value.to_components()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn gamma_transfer_round_trips() {
        let srgb = Srgb::new(0.8235294118, 0.4117647059, 0.1176470588);
        let linear = srgb.to_linear_light();

        assert_component_eq!(linear.red, 0.6444796820);
        assert_component_eq!(linear.green, 0.1412632911);
        assert_component_eq!(linear.blue, 0.0129830323);

        let back = linear.to_gamma_encoded();
        assert_component_eq!(back.red, srgb.red);
        assert_component_eq!(back.green, srgb.green);
        assert_component_eq!(back.blue, srgb.blue);
    }

    #[test]
    fn dark_values_use_the_linear_segment() {
        let linear = Srgb::new(0.02, 0.0, 0.0).to_linear_light();
        assert_component_eq!(linear.red, 0.02 / 12.92);
    }

    #[test]
    fn xyz_round_trips() {
        let linear = SrgbLinear::new(0.6444796820, 0.1412632911, 0.0129830323);
        let xyz = linear.to_xyz();

        assert_component_eq!(xyz.x, 0.3186342197);
        assert_component_eq!(xyz.y, 0.2390058753);
        assert_component_eq!(xyz.z, 0.0416369565);

        let back = SrgbLinear::from(xyz);
        assert_component_eq!(back.red, linear.red);
        assert_component_eq!(back.green, linear.green);
        assert_component_eq!(back.blue, linear.blue);
    }
}
