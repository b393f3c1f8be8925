//! Linear interpolation between two colors in a chosen space, used for
//! gradient previews.

use num_traits::Float;

use crate::color::{Color, Component, Space};

fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

impl Color {
    /// Linearly interpolate from this color to another in the color space
    /// specified using `t` as the progress between them. Missing alphas
    /// resolve to opaque before mixing.
    pub fn interpolate(&self, other: &Self, t: Component, space: Space) -> Color {
        let left = self.to_space(space);
        let right = other.to_space(space);

        let alpha = lerp(
            left.alpha().unwrap_or(1.0),
            right.alpha().unwrap_or(1.0),
            t,
        )
        .clamp(0.0, 1.0);

        Color::new(
            space,
            lerp(left.components.0, right.components.0, t),
            lerp(left.components.1, right.components.1, t),
            lerp(left.components.2, right.components.2, t),
            alpha,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic() {
        let left = Color::new(Space::Srgb, 0.1, 0.2, 0.3, 1.0);
        let right = Color::new(Space::Srgb, 0.5, 0.6, 0.7, 1.0);
        let mixed = left.interpolate(&right, 0.5, Space::Srgb);
        assert_eq!(mixed.components.0, 0.3);
        assert_eq!(mixed.components.1, 0.4);
        assert_eq!(mixed.components.2, 0.5);
        assert_eq!(mixed.alpha, 1.0);
        assert_eq!(mixed.space, Space::Srgb);
    }

    #[test]
    fn endpoints_convert_into_the_interpolation_space() {
        let red = Color::new(Space::Srgb, 1.0, 0.0, 0.0, 1.0);
        let blue = Color::new(Space::Hsl, 240.0, 1.0, 0.5, 1.0);
        let mixed = red.interpolate(&blue, 0.5, Space::Hsl);
        assert_eq!(mixed.space, Space::Hsl);
        assert_eq!(mixed.components.0, 120.0);
    }

    #[test]
    fn interpolated_alpha_is_clamped() {
        let left = Color::new(Space::Srgb, 0.0, 0.0, 0.0, 0.5);
        let right = Color::new(Space::Srgb, 1.0, 1.0, 1.0, 1.0);
        let extrapolated = left.interpolate(&right, 2.0, Space::Srgb);
        assert_eq!(extrapolated.alpha(), Some(1.0));
    }
}
