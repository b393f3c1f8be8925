//! Model a color in the CIE-XYZ color space.

use crate::color::{Component, Components, HasSpace, Space};

/// The D65 reference white that every leg of the conversion graph is
/// calibrated against.
#[allow(clippy::excessive_precision)]
pub(crate) const WHITE_POINT: Components =
    Components(0.9504559270516716, 1.0, 1.0890577507598784);

/// Specify that a color model supports conversion to CIE-XYZ.
pub trait ToXyz {
    /// Convert this color to CIE-XYZ.
    fn to_xyz(&self) -> Xyz;
}

chromat_macros::gen_model! {
    /// A model for a color in the CIE-XYZ color space with a D65 white
    /// point.
    pub struct Xyz {
        /// The X component of the color.
        pub x: Component,
        /// The Y component of the color.
        pub y: Component,
        /// The Z component of the color.
        pub z: Component,
    }
}

impl HasSpace for Xyz {
    const SPACE: Space = Space::Xyz;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::models::Model;

    #[test]
    fn round_trips_through_a_generic_color() {
        let model = Xyz::new(0.1, 0.2, 0.3);
        let color = model.to_color(Some(0.4));
        assert_eq!(color.space, Space::Xyz);
        assert_eq!(color.components, Components(0.1, 0.2, 0.3));
        assert_eq!(color.alpha(), Some(0.4));

        let back = Xyz::from(color.components);
        assert_eq!(back.to_components(), model.to_components());

        let missing = Xyz::new(0.1, 0.2, 0.3).to_color(None);
        assert_eq!(missing.alpha(), None);
        let _ = Color::new(Space::Xyz, 0.1, 0.2, 0.3, None);
    }
}
