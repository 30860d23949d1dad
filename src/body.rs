//! The physics-body seam.
//!
//! Buoyancy never integrates motion itself. It queries and nudges a rigid
//! body owned by some physics engine through [`PhysicsBody`]. The crate ships
//! one implementation, [`crate::rigid_body::RigidBodyState`], for headless
//! runs and tests.

use bevy::prelude::Transform;
use glam::Vec3;

/// Identifies a sub-body of an articulated body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoneId(pub u32);

impl BoneId {
    /// The root body, used for single-body floaters.
    pub const ROOT: Self = Self(0);
}

/// Queries and mutations the buoyancy integrator needs from a rigid body.
pub trait PhysicsBody {
    /// Whether the body is driven by the physics solver this tick.
    fn is_simulating(&self) -> bool;

    /// Mass in kilograms.
    fn mass(&self) -> f32;

    /// Current linear damping coefficient.
    fn linear_damping(&self) -> f32;

    /// Current angular damping coefficient.
    fn angular_damping(&self) -> f32;

    /// Linear velocity of the centre of mass.
    fn linear_velocity(&self) -> Vec3;

    /// World velocity of the material point at `world_point`.
    ///
    /// Returns `None` when `bone` does not name a valid body instance.
    fn velocity_at_point(&self, world_point: Vec3, bone: BoneId) -> Option<Vec3>;

    /// Current world transform.
    fn transform(&self) -> Transform;

    /// Teleports the body. `sweep` asks the engine to stop at blocking hits.
    fn set_world_position(&mut self, position: Vec3, sweep: bool);

    /// Accumulates `force` applied at `world_point` for the next solver step.
    fn add_force_at_point(&mut self, force: Vec3, world_point: Vec3);

    /// Replaces the linear damping coefficient.
    fn set_linear_damping(&mut self, damping: f32);

    /// Replaces the angular damping coefficient.
    fn set_angular_damping(&mut self, damping: f32);

    /// Replaces the linear velocity.
    fn set_linear_velocity(&mut self, velocity: Vec3);
}
