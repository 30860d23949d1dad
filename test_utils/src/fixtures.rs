//! Ready-made profiles and controllers.

use std::sync::Arc;

use flotsam::{Buoyancy, BuoyancyProfile, FlatSea, WaveField};
use glam::Vec3;

/// Gravity used throughout the tests, in cm/s².
pub const GRAVITY_Z: f32 = -980.0;

/// One test point at the body origin with the given radius.
pub fn single_point_profile(radius: f32) -> BuoyancyProfile {
    let mut profile = BuoyancyProfile::with_points([Vec3::ZERO]);
    profile.test_point_radius = radius;
    profile
}

/// Four points on the corners of a square hull of half-width `half`.
pub fn square_hull_profile(half: f32) -> BuoyancyProfile {
    BuoyancyProfile::with_points([
        Vec3::new(half, half, 0.0),
        Vec3::new(half, -half, 0.0),
        Vec3::new(-half, half, 0.0),
        Vec3::new(-half, -half, 0.0),
    ])
}

/// A controller on a calm sea at `height`, not yet activated.
pub fn on_flat_sea(profile: BuoyancyProfile, height: f32) -> Buoyancy {
    Buoyancy::new(profile).with_wave_field(flat_sea(height))
}

/// Shared handle to a calm sea at `height`.
pub fn flat_sea(height: f32) -> Arc<dyn WaveField> {
    Arc::new(FlatSea::new(height))
}
