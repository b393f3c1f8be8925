//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};

use crate::color::{Component, Components};

/// A transform holding the 3x3 matrix of a pivot space conversion.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Create a [`Transform`] from the 9 coefficients of a 3x3 matrix, passed
/// one column at a time.
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(
        components.0,
        components.1,
        components.2,
    ));
    Components(x, y, z)
}

/// Round to the nearest integer, with halves rounding towards positive
/// infinity.
pub fn round_half_up(value: Component) -> Component {
    (value + 0.5).floor()
}

/// Normalize a hue angle in degrees into the [0, 360) range.
pub fn normalize_hue(hue: Component) -> Component {
    hue.rem_euclid(360.0)
}

/// Map a NaN value to 0.
pub fn normalize(value: Component) -> Component {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

/// Check whether a value is close enough to zero to be treated as zero.
pub fn almost_zero(value: Component) -> bool {
    value.abs() < 1.0e-7
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_halves_goes_up() {
        assert_eq!(round_half_up(190.5), 191.0);
        assert_eq!(round_half_up(191.25), 191.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(0.0), 0.0);
    }

    #[test]
    fn hue_normalization() {
        assert_eq!(normalize_hue(0.0), 0.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-90.0), 270.0);
        assert_eq!(normalize_hue(725.0), 5.0);
    }

    #[test]
    fn identity_transform() {
        let m = transform_3x3(
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            0.0, 0.0, 1.0,
        );
        assert_eq!(transform(&m, Components(0.1, 0.2, 0.3)), Components(0.1, 0.2, 0.3));
    }
}
