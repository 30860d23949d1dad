//! A [`PhysicsBody`] that records what was done to it.

use bevy::prelude::Transform;
use flotsam::{BoneId, PhysicsBody};
use glam::Vec3;

/// One `add_force_at_point` call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppliedForce {
    pub force: Vec3,
    pub point: Vec3,
}

/// Scriptable body for driving the integrator without a physics engine.
///
/// Queries return the configured fields; mutations update them and are
/// recorded so tests can inspect the exact calls made in a tick.
#[derive(Clone, Debug)]
pub struct RecordingBody {
    pub transform: Transform,
    pub mass: f32,
    pub linear_damping: f32,
    pub angular_damping: f32,
    pub linear_velocity: Vec3,
    /// Velocity reported for every sampled point; `None` mimics an invalid
    /// body instance.
    pub point_velocity: Option<Vec3>,
    pub simulating: bool,
    pub forces: Vec<AppliedForce>,
    pub teleports: Vec<(Vec3, bool)>,
    pub velocity_writes: Vec<Vec3>,
}

impl RecordingBody {
    /// A simulating body of `mass` at `position`, at rest and undamped.
    ///
    /// # Examples
    /// ```
    /// use test_utils::body::RecordingBody;
    /// use glam::Vec3;
    /// let body = RecordingBody::new(10.0, Vec3::Z);
    /// assert!(body.forces.is_empty());
    /// ```
    pub fn new(mass: f32, position: Vec3) -> Self {
        Self {
            transform: Transform::from_translation(position),
            mass,
            linear_damping: 0.0,
            angular_damping: 0.0,
            linear_velocity: Vec3::ZERO,
            point_velocity: Some(Vec3::ZERO),
            simulating: true,
            forces: Vec::new(),
            teleports: Vec::new(),
            velocity_writes: Vec::new(),
        }
    }

    pub fn with_damping(mut self, linear: f32, angular: f32) -> Self {
        self.linear_damping = linear;
        self.angular_damping = angular;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.linear_velocity = velocity;
        self.point_velocity = Some(velocity);
        self
    }

    pub fn kinematic(mut self) -> Self {
        self.simulating = false;
        self
    }

    /// Sum of all recorded forces.
    pub fn net_force(&self) -> Vec3 {
        self.forces.iter().map(|f| f.force).sum()
    }

    /// Forgets recorded calls, keeping the current state.
    pub fn clear_log(&mut self) {
        self.forces.clear();
        self.teleports.clear();
        self.velocity_writes.clear();
    }
}

impl PhysicsBody for RecordingBody {
    fn is_simulating(&self) -> bool {
        self.simulating
    }

    fn mass(&self) -> f32 {
        self.mass
    }

    fn linear_damping(&self) -> f32 {
        self.linear_damping
    }

    fn angular_damping(&self) -> f32 {
        self.angular_damping
    }

    fn linear_velocity(&self) -> Vec3 {
        self.linear_velocity
    }

    fn velocity_at_point(&self, _world_point: Vec3, bone: BoneId) -> Option<Vec3> {
        if bone == BoneId::ROOT {
            self.point_velocity
        } else {
            None
        }
    }

    fn transform(&self) -> Transform {
        self.transform
    }

    fn set_world_position(&mut self, position: Vec3, sweep: bool) {
        self.transform.translation = position;
        self.teleports.push((position, sweep));
    }

    fn add_force_at_point(&mut self, force: Vec3, world_point: Vec3) {
        self.forces.push(AppliedForce {
            force,
            point: world_point,
        });
    }

    fn set_linear_damping(&mut self, damping: f32) {
        self.linear_damping = damping;
    }

    fn set_angular_damping(&mut self, damping: f32) {
        self.angular_damping = damping;
    }

    fn set_linear_velocity(&mut self, velocity: Vec3) {
        self.linear_velocity = velocity;
        self.velocity_writes.push(velocity);
    }
}
