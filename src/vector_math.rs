//! Basic vector math helper functions.
//! Small helpers for safe normalisation and speed limiting.
use glam::Vec3;

/// Returns the unit vector in the direction of `vector`.
///
/// Non-finite or zero vectors produce [`Vec3::ZERO`] instead of NaNs.
///
/// # Examples
///
/// ```
/// use flotsam::vector_math::safe_normal;
/// use glam::Vec3;
/// let n = safe_normal(Vec3::new(3.0, 0.0, 4.0));
/// assert!((n - Vec3::new(0.6, 0.0, 0.8)).length() < 1e-6);
/// assert_eq!(safe_normal(Vec3::ZERO), Vec3::ZERO);
/// ```
#[must_use]
pub fn safe_normal(vector: Vec3) -> Vec3 {
    if !vector.is_finite() {
        return Vec3::ZERO;
    }
    vector.try_normalize().unwrap_or(Vec3::ZERO)
}

/// Rescales `velocity` to `max_speed` when it is faster, keeping direction.
///
/// Returns `None` when the velocity is already within the limit so callers
/// can skip writing it back.
///
/// # Examples
///
/// ```
/// use flotsam::vector_math::clamp_speed;
/// use glam::Vec3;
/// let clamped = clamp_speed(Vec3::new(0.0, 30.0, 40.0), 5.0).unwrap();
/// assert!((clamped.length() - 5.0).abs() < 1e-5);
/// assert!(clamp_speed(Vec3::X, 5.0).is_none());
/// ```
#[must_use]
pub fn clamp_speed(velocity: Vec3, max_speed: f32) -> Option<Vec3> {
    if velocity.length() > max_speed {
        Some(safe_normal(velocity) * max_speed)
    } else {
        None
    }
}
