//! Functions for converting color models to a base color space common to
//! all models. Used for color conversion.

use crate::models::{self, ToXyz};

/// The base color space every conversion route passes through: CIE-XYZ with
/// a D65 white point.
pub type Base = models::Xyz;

/// Used to convert any model to the base color space.
pub trait ToBase {
    /// Convert the model to the base color space.
    fn to_base(&self) -> Base;
}

impl ToBase for models::Srgb {
    fn to_base(&self) -> Base {
        self.to_linear_light().to_xyz()
    }
}

impl ToBase for models::SrgbLinear {
    fn to_base(&self) -> Base {
        self.to_xyz()
    }
}

impl ToBase for models::Hsl {
    fn to_base(&self) -> Base {
        self.to_srgb().to_base()
    }
}

impl ToBase for models::Hwb {
    fn to_base(&self) -> Base {
        self.to_srgb().to_base()
    }
}

impl ToBase for models::Lab {
    fn to_base(&self) -> Base {
        self.to_xyz()
    }
}

impl ToBase for models::Lch {
    fn to_base(&self) -> Base {
        self.to_rectangular().to_base()
    }
}

impl ToBase for models::Oklab {
    fn to_base(&self) -> Base {
        self.to_xyz()
    }
}

impl ToBase for models::Oklch {
    fn to_base(&self) -> Base {
        self.to_rectangular().to_base()
    }
}

impl ToBase for models::Xyz {
    fn to_base(&self) -> Base {
        self.clone()
    }
}
