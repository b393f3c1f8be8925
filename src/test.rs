/// Check for equality between two components allowing for conversion
/// rounding errors.
#[macro_export]
macro_rules! assert_component_eq {
    ($actual:expr,$expected:expr) => {{
        approx::assert_abs_diff_eq!($actual, $expected, epsilon = 1.0e-6);
    }};
}
