//! Physics helper functions.
//!
//! Small, engine-agnostic formulas shared by the reference rigid body and
//! the tests.

use glam::Vec3;

/// Smallest acceptable mass to avoid numerically unstable accelerations.
pub const MIN_MASS: f32 = 1e-6;

/// Computes acceleration from a force vector and mass.
///
/// Returns `None` if `mass` is non-positive or effectively zero (see
/// [`MIN_MASS`]). The calculation applies `F=ma` for each component
/// independently.
///
/// # Examples
///
/// ```
/// use flotsam::applied_acceleration;
/// use glam::Vec3;
/// let a = applied_acceleration(Vec3::new(7.0, -14.0, 21.0), 7.0).unwrap();
/// assert!((a - Vec3::new(1.0, -2.0, 3.0)).length() < 1e-6);
/// assert!(applied_acceleration(Vec3::ONE, 0.0).is_none());
/// ```
#[must_use]
pub fn applied_acceleration(force: Vec3, mass: f32) -> Option<Vec3> {
    (mass > MIN_MASS).then(|| force / mass)
}

/// Velocity multiplier for implicit damping over one step, `1 / (1 + dt * c)`.
///
/// Negative coefficients are treated as zero so damping never adds energy.
#[must_use]
pub const fn damping_factor(delta_seconds: f32, coefficient: f32) -> f32 {
    1.0 / (1.0 + delta_seconds * coefficient.max(0.0))
}

/// Velocity of a point offset by `lever_arm` from the centre of mass.
#[must_use]
pub fn point_velocity(linear: Vec3, angular: Vec3, lever_arm: Vec3) -> Vec3 {
    linear + angular.cross(lever_arm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case::explicit_mass(Vec3::new(7.0, -14.0, 21.0), 7.0, Some(Vec3::new(1.0, -2.0, 3.0)))]
    #[case::zero_mass(Vec3::ONE, 0.0, None)]
    #[case::negative_mass(Vec3::ONE, -5.0, None)]
    fn acceleration_cases(#[case] force: Vec3, #[case] mass: f32, #[case] expected: Option<Vec3>) {
        match (applied_acceleration(force, mass), expected) {
            (Some(a), Some(e)) => {
                assert_relative_eq!(a.x, e.x);
                assert_relative_eq!(a.y, e.y);
                assert_relative_eq!(a.z, e.z);
            }
            (None, None) => {}
            (a, e) => panic!("mismatch: {a:?} vs {e:?}"),
        }
    }

    #[rstest]
    #[case(0.5, 1.0, 1.0 / 1.5)]
    #[case(0.5, 0.0, 1.0)]
    #[case(0.5, -3.0, 1.0)]
    fn damping_factor_never_amplifies(#[case] dt: f32, #[case] c: f32, #[case] expected: f32) {
        assert_relative_eq!(damping_factor(dt, c), expected);
    }

    #[rstest]
    fn spinning_body_moves_rim_points() {
        let v = point_velocity(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0), Vec3::X);
        assert_relative_eq!(v.y, 2.0);
        assert_relative_eq!(v.x, 0.0);
    }
}
