//! Pure per-point buoyancy formulas.
//!
//! Nothing here touches a body or a wave field, so every term of the
//! integrator can be checked in isolation.

use glam::Vec3;

use crate::numeric::fraction_of;

/// Submersion of one test sphere given the surface height above it.
///
/// A point is underwater only when the surface is strictly above
/// `point_z + signed_radius`. The returned fraction ramps from `0` at first
/// contact to `1` once the surface has risen a full sphere diameter past
/// that level. A zero `radius` makes the ramp a step; a negative one clamps
/// the fraction to `0`.
///
/// Returns `None` for points above the surface.
///
/// # Examples
///
/// ```
/// use flotsam::buoyancy::depth_fraction;
/// // Sphere of radius 1 centred at z = 0 under gravity pointing down.
/// assert_eq!(depth_fraction(-1.0, 0.0, -1.0, 1.0), None);
/// assert_eq!(depth_fraction(0.0, 0.0, -1.0, 1.0), Some(0.5));
/// assert_eq!(depth_fraction(5.0, 0.0, -1.0, 1.0), Some(1.0));
/// ```
#[must_use]
pub fn depth_fraction(wave_height: f32, point_z: f32, signed_radius: f32, radius: f32) -> Option<f32> {
    let contact = point_z + signed_radius;
    if wave_height <= contact || wave_height.is_nan() {
        return None;
    }
    let diameter = 2.0 * radius;
    if diameter == 0.0 {
        return Some(1.0);
    }
    Some(((wave_height - contact) / diameter).clamp(0.0, 1.0))
}

/// Inputs of the Archimedes term for one submerged point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchimedesTerm {
    /// Mass of the whole body.
    pub body_mass: f32,
    /// Density assumed for this point's share of the body.
    pub point_density: f32,
    /// Density of the surrounding fluid.
    pub fluid_density: f32,
    /// World gravity along z; the force points against it.
    pub gravity_z: f32,
    /// Number of test points sharing the displaced volume.
    pub total_points: usize,
    /// Submersion fraction from [`depth_fraction`].
    pub depth: f32,
}

impl ArchimedesTerm {
    /// Vertical buoyant force contributed by this point.
    ///
    /// The displaced volume `mass / density` is shared evenly between all
    /// test points and scaled by the point's submersion. Non-positive
    /// densities and empty point sets contribute nothing.
    #[must_use]
    pub fn force_z(&self) -> f32 {
        if self.point_density <= 0.0 || self.total_points == 0 {
            return 0.0;
        }
        let volume = self.body_mass / self.point_density;
        volume * self.fluid_density * -self.gravity_z * fraction_of(1, self.total_points)
            * self.depth
    }
}

/// Drag opposing the motion of a submerged point, per axis.
#[must_use]
pub fn damping_force(point_velocity: Vec3, velocity_damper: Vec3, body_mass: f32, depth: f32) -> Vec3 {
    -point_velocity * velocity_damper * body_mass * depth
}

/// Body damping after blending in the fluid contribution.
///
/// Always computed from the same `base`, so repeated ticks never compound.
#[must_use]
pub fn blended_damping(base: f32, fluid: f32, submerged: usize, total: usize) -> f32 {
    base + fluid * fraction_of(submerged, total)
}
