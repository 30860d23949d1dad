//! Minimal rigid body used when no external physics engine is present.
//!
//! [`RigidBodyState`] accumulates forces and torques between steps and
//! integrates them with semi-implicit Euler:
//!
//! ```text
//! v = (v_0 + a * Δt) / (1 + Δt * c_lin)
//! ω = (ω_0 + α * Δt) / (1 + Δt * c_ang)
//! x = x_0 + v * Δt
//! θ = θ_0 + ω * Δt
//! ```
//!
//! Inertia is modelled as a single scalar, which is enough for the headless
//! simulation and the Bevy wiring. An optional [`UprightSpring`] plays the
//! role of the stay-upright joint.

use bevy::prelude::{Component, Transform};
use glam::{Quat, Vec3};

use crate::body::{BoneId, PhysicsBody};
use crate::constraint::UprightConstraintSpec;
use crate::physics::{applied_acceleration, damping_factor, point_velocity};

/// Angular spring pulling a body back to a rest orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UprightSpring {
    /// Orientation the spring pulls toward.
    pub rest_rotation: Quat,
    /// Torque per radian of deviation.
    pub stiffness: f32,
    /// Torque per rad/s of spin.
    pub damping: f32,
}

impl UprightSpring {
    /// Builds the spring a stay-upright joint describes, resting at `rotation`.
    #[must_use]
    pub const fn from_spec(spec: &UprightConstraintSpec, rotation: Quat) -> Self {
        Self {
            rest_rotation: rotation,
            stiffness: spec.swing.stiffness,
            damping: spec.swing.damping,
        }
    }

    /// Restoring torque for the current orientation and spin.
    #[must_use]
    pub fn torque(&self, rotation: Quat, angular_velocity: Vec3) -> Vec3 {
        let mut error = self.rest_rotation * rotation.inverse();
        // q and -q are the same rotation; take the short way round.
        if error.w < 0.0 {
            error = -error;
        }
        error.to_scaled_axis() * self.stiffness - angular_velocity * self.damping
    }
}

/// Headless rigid body implementing [`PhysicsBody`].
#[derive(Component, Debug, Clone, PartialEq)]
pub struct RigidBodyState {
    /// Centre of mass in world space.
    pub position: Vec3,
    /// World orientation.
    pub rotation: Quat,
    /// Velocity of the centre of mass.
    pub linear_velocity: Vec3,
    /// Spin as a scaled axis, in rad/s.
    pub angular_velocity: Vec3,
    /// Mass in kilograms.
    pub mass: f32,
    /// Scalar moment of inertia about every axis.
    pub inertia: f32,
    /// Implicit linear damping coefficient.
    pub linear_damping: f32,
    /// Implicit angular damping coefficient.
    pub angular_damping: f32,
    /// Kinematic bodies ignore forces and are positioned directly.
    pub simulating: bool,
    /// Stay-upright spring, when attached.
    pub upright: Option<UprightSpring>,
    force: Vec3,
    torque: Vec3,
}

impl Default for RigidBodyState {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl RigidBodyState {
    /// A simulating body of `mass` at the origin, with solid-sphere inertia
    /// for a unit radius.
    #[must_use]
    pub const fn new(mass: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            linear_velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            mass,
            inertia: 0.4 * mass,
            linear_damping: 0.0,
            angular_damping: 0.0,
            simulating: true,
            upright: None,
            force: Vec3::ZERO,
            torque: Vec3::ZERO,
        }
    }

    /// Moves the body to `position`.
    #[must_use]
    pub const fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Overrides the scalar moment of inertia.
    #[must_use]
    pub const fn with_inertia(mut self, inertia: f32) -> Self {
        self.inertia = inertia;
        self
    }

    /// Turns the body kinematic so it is positioned rather than simulated.
    #[must_use]
    pub const fn kinematic(mut self) -> Self {
        self.simulating = false;
        self
    }

    /// Force accumulated since the last step.
    #[must_use]
    pub const fn accumulated_force(&self) -> Vec3 {
        self.force
    }

    /// Torque accumulated since the last step.
    #[must_use]
    pub const fn accumulated_torque(&self) -> Vec3 {
        self.torque
    }

    /// Installs the angular spring a stay-upright joint describes.
    pub const fn attach_upright(&mut self, spec: &UprightConstraintSpec) {
        self.upright = Some(UprightSpring::from_spec(spec, self.rotation));
    }

    /// Advances the body by `delta_seconds` under `gravity` and clears the
    /// accumulated force and torque.
    pub fn integrate(&mut self, delta_seconds: f32, gravity: Vec3) {
        let force = std::mem::take(&mut self.force);
        let torque = std::mem::take(&mut self.torque);
        if !self.simulating || delta_seconds <= 0.0 {
            return;
        }

        let Some(lin_acc) = applied_acceleration(force, self.mass) else {
            return;
        };
        self.linear_velocity += (lin_acc + gravity) * delta_seconds;
        self.linear_velocity *= damping_factor(delta_seconds, self.linear_damping);

        let spring = self
            .upright
            .map_or(Vec3::ZERO, |s| s.torque(self.rotation, self.angular_velocity));
        if let Some(ang_acc) = applied_acceleration(torque + spring, self.inertia) {
            self.angular_velocity += ang_acc * delta_seconds;
        }
        self.angular_velocity *= damping_factor(delta_seconds, self.angular_damping);

        self.position += self.linear_velocity * delta_seconds;
        let delta_rot = Quat::from_scaled_axis(self.angular_velocity * delta_seconds);
        self.rotation = (delta_rot * self.rotation).normalize();
    }
}

impl PhysicsBody for RigidBodyState {
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

    fn velocity_at_point(&self, world_point: Vec3, bone: BoneId) -> Option<Vec3> {
        (bone == BoneId::ROOT).then(|| {
            point_velocity(
                self.linear_velocity,
                self.angular_velocity,
                world_point - self.position,
            )
        })
    }

    fn transform(&self) -> Transform {
        Transform::from_translation(self.position).with_rotation(self.rotation)
    }

    fn set_world_position(&mut self, position: Vec3, _sweep: bool) {
        // No colliders here, so a sweep never hits anything.
        self.position = position;
    }

    fn add_force_at_point(&mut self, force: Vec3, world_point: Vec3) {
        self.force += force;
        self.torque += (world_point - self.position).cross(force);
    }

    fn set_linear_damping(&mut self, damping: f32) {
        self.linear_damping = damping;
    }

    fn set_angular_damping(&mut self, damping: f32) {
        self.angular_damping = damping;
    }

    fn set_linear_velocity(&mut self, velocity: Vec3) {
        self.linear_velocity = velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    const GRAVITY: Vec3 = Vec3::new(0.0, 0.0, -980.0);

    #[rstest]
    fn free_fall_follows_semi_implicit_euler() {
        let mut body = RigidBodyState::new(10.0).at(Vec3::new(0.0, 0.0, 100.0));
        body.integrate(0.1, GRAVITY);
        assert_relative_eq!(body.linear_velocity.z, -98.0, epsilon = 1e-3);
        assert_relative_eq!(body.position.z, 100.0 - 9.8, epsilon = 1e-3);
    }

    #[rstest]
    fn off_centre_force_produces_torque() {
        let mut body = RigidBodyState::new(2.0);
        body.add_force_at_point(Vec3::Z, Vec3::X);
        assert_eq!(body.accumulated_force(), Vec3::Z);
        assert_relative_eq!(body.accumulated_torque().y, -1.0);
        body.integrate(0.0, GRAVITY);
        assert_eq!(body.accumulated_force(), Vec3::ZERO);
    }

    #[rstest]
    fn kinematic_body_ignores_forces() {
        let mut body = RigidBodyState::new(2.0).kinematic();
        body.add_force_at_point(Vec3::splat(100.0), Vec3::ZERO);
        body.integrate(0.5, GRAVITY);
        assert_eq!(body.position, Vec3::ZERO);
        assert_eq!(body.linear_velocity, Vec3::ZERO);
    }

    #[rstest]
    fn unknown_bone_has_no_velocity() {
        let body = RigidBodyState::new(1.0);
        assert!(body.velocity_at_point(Vec3::ZERO, BoneId(3)).is_none());
        assert_eq!(body.velocity_at_point(Vec3::ZERO, BoneId::ROOT), Some(Vec3::ZERO));
    }

    #[rstest]
    fn upright_spring_reduces_tilt() {
        let spec = UprightConstraintSpec::stay_upright(Vec3::ZERO, 50.0, 5.0);
        let mut body = RigidBodyState::new(1.0);
        body.attach_upright(&spec);
        body.rotation = Quat::from_rotation_x(0.5);
        let initial_tilt = body.rotation.angle_between(Quat::IDENTITY);
        for _ in 0..120 {
            body.integrate(1.0 / 60.0, Vec3::ZERO);
        }
        assert!(body.rotation.angle_between(Quat::IDENTITY) < initial_tilt * 0.5);
    }
}
