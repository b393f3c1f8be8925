//! Model a color with the HSL notation in the sRGB color space.

use crate::color::{Component, HasSpace, Space};

chromat_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    pub struct Hsl {
        /// The hue component of the color, in degrees.
        pub hue: Component,
        /// The saturation component of the color.
        pub saturation: Component,
        /// The lightness component of the color.
        pub lightness: Component,
    }
}

impl HasSpace for Hsl {
    const SPACE: Space = Space::Hsl;
}
