//! Numeric conversion helpers used across the project.
//!
//! Point counts arrive as `usize` but every buoyancy formula divides by them
//! as floats. These helpers keep that conversion in one place so no formula
//! ever truncates through integer division.

/// Convert a point count into `f32`.
#[expect(
    clippy::cast_precision_loss,
    reason = "Test point counts are tiny compared to the f32 mantissa."
)]
#[must_use]
pub fn count_as_f32(count: usize) -> f32 {
    debug_assert!(
        count <= 1 << f32::MANTISSA_DIGITS,
        "count {count} cannot be represented exactly as f32"
    );
    count as f32
}

/// Ratio of `part` to `whole` as a float, or `0.0` when `whole` is zero.
///
/// # Examples
/// ```
/// use flotsam::numeric::fraction_of;
/// assert!((fraction_of(1, 3) - 1.0 / 3.0).abs() < f32::EPSILON);
/// assert_eq!(fraction_of(2, 0), 0.0);
/// ```
#[must_use]
pub fn fraction_of(part: usize, whole: usize) -> f32 {
    if whole == 0 {
        return 0.0;
    }
    count_as_f32(part) / count_as_f32(whole)
}

/// Sign of `value` as `-1.0`, `0.0` or `1.0`.
///
/// Unlike [`f32::signum`], zero maps to zero so a weightless world yields a
/// zero signed radius.
#[must_use]
pub const fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 4, 0.0)]
    #[case(1, 4, 0.25)]
    #[case(3, 4, 0.75)]
    #[case(4, 4, 1.0)]
    fn fraction_does_not_truncate(#[case] part: usize, #[case] whole: usize, #[case] expected: f32) {
        assert!((fraction_of(part, whole) - expected).abs() < f32::EPSILON);
    }

    #[rstest]
    #[case(-980.0, -1.0)]
    #[case(980.0, 1.0)]
    #[case(0.0, 0.0)]
    #[case(-0.0, 0.0)]
    fn sign_maps_zero_to_zero(#[case] value: f32, #[case] expected: f32) {
        assert_eq!(sign(value), expected);
    }
}
