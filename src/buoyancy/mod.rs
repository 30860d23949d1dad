//! Per-tick buoyancy integration.
//!
//! [`Buoyancy`] owns a [`BuoyancyProfile`], an optional wave field and the
//! state derived on activation. Each tick it either snaps a kinematic body
//! onto the surface or samples every test point, pushes the submerged ones
//! up and blends fluid damping into the body.
//!
//! Sampling is side-effect free and collected into [`PointSample`]s before
//! any force reaches the body, so the body sees one serial batch of writes
//! per tick.

mod forces;

pub use forces::{blended_damping, damping_force, depth_fraction, ArchimedesTerm};

use std::fmt;
use std::sync::Arc;

use glam::Vec3;
use log::{debug, error, info, trace, warn};

use crate::body::{BoneId, PhysicsBody};
use crate::constraint::{ConstraintFactory, ConstraintHandle, UprightConstraintSpec};
use crate::debug_draw::{DebugDraw, DebugSphere};
use crate::numeric::sign;
use crate::profile::BuoyancyProfile;
use crate::vector_math::clamp_speed;
use crate::wave::WaveField;

/// State derived once per activation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuntimeState {
    /// Test-point radius oriented by the gravity sign seen at activation.
    ///
    /// A later gravity flip leaves this stale until the next activation.
    pub signed_radius: f32,
    /// Body linear damping captured at activation.
    pub base_linear_damping: f32,
    /// Body angular damping captured at activation.
    pub base_angular_damping: f32,
    /// Stay-upright joint, when one was created.
    pub constraint: Option<ConstraintHandle>,
}

/// Which path a tick took.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// No wave field is bound; nothing happened.
    Unbound,
    /// [`Buoyancy::activate`] has not run yet; nothing happened.
    Inactive,
    /// The body is not simulating and was placed at the surface height.
    Kinematic {
        /// Surface height the body was moved to.
        height: f32,
    },
    /// The profile has no test points; no force was applied.
    NoTestPoints,
    /// Forces were integrated for every test point.
    Simulated,
}

/// Summary of one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Path taken.
    pub outcome: TickOutcome,
    /// Test points found underwater.
    pub submerged: usize,
    /// Test points sampled.
    pub total: usize,
}

impl TickReport {
    const fn idle(outcome: TickOutcome) -> Self {
        Self {
            outcome,
            submerged: 0,
            total: 0,
        }
    }
}

/// Result of sampling one test point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSample {
    /// Test point transformed into world space.
    pub world_point: Vec3,
    /// Surface height sampled under the point.
    pub wave_height: f32,
    /// Submersion fraction in `[0, 1]`, `None` when the point is dry.
    pub depth: Option<f32>,
    /// Combined buoyant and damping force, zero for dry points.
    pub force: Vec3,
}

impl PointSample {
    /// Whether the point was underwater.
    #[must_use]
    pub const fn is_submerged(&self) -> bool {
        self.depth.is_some()
    }
}

/// Buoyancy controller for one floating body.
#[derive(Clone)]
pub struct Buoyancy {
    profile: BuoyancyProfile,
    wave_field: Option<Arc<dyn WaveField>>,
    runtime: Option<RuntimeState>,
}

impl fmt::Debug for Buoyancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buoyancy")
            .field("profile", &self.profile)
            .field("has_wave_field", &self.wave_field.is_some())
            .field("runtime", &self.runtime)
            .finish()
    }
}

impl Buoyancy {
    /// Creates an inactive controller with no wave field.
    #[must_use]
    pub const fn new(profile: BuoyancyProfile) -> Self {
        Self {
            profile,
            wave_field: None,
            runtime: None,
        }
    }

    /// Builder form of [`Buoyancy::bind_wave_field`].
    #[must_use]
    pub fn with_wave_field(mut self, wave_field: Arc<dyn WaveField>) -> Self {
        self.bind_wave_field(wave_field);
        self
    }

    /// Injects the surface this body floats on, replacing any previous one.
    pub fn bind_wave_field(&mut self, wave_field: Arc<dyn WaveField>) {
        self.wave_field = Some(wave_field);
    }

    /// Whether a wave field has been bound.
    #[must_use]
    pub const fn has_wave_field(&self) -> bool {
        self.wave_field.is_some()
    }

    /// Tuning in use.
    #[must_use]
    pub const fn profile(&self) -> &BuoyancyProfile {
        &self.profile
    }

    /// Mutable access for between-tick tuning.
    ///
    /// Changing the radius or its sign after activation does not refresh
    /// [`RuntimeState::signed_radius`].
    pub const fn profile_mut(&mut self) -> &mut BuoyancyProfile {
        &mut self.profile
    }

    /// State derived by the last activation.
    #[must_use]
    pub const fn runtime(&self) -> Option<&RuntimeState> {
        self.runtime.as_ref()
    }

    /// Whether [`Buoyancy::activate`] has run.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.runtime.is_some()
    }

    /// Prepares the controller for ticking.
    ///
    /// Creates the stay-upright joint through `constraints` when the profile
    /// asks for it, normalises the test-point radius, derives the signed
    /// radius from `gravity_z` and snapshots the body's damping as the base
    /// that fluid damping is added to. A failed or missing factory is logged
    /// and activation carries on without the joint.
    ///
    /// Calling this again re-derives everything, including a fresh damping
    /// snapshot.
    pub fn activate<B>(
        &mut self,
        body: &B,
        gravity_z: f32,
        constraints: Option<&mut dyn ConstraintFactory>,
    ) -> &RuntimeState
    where
        B: PhysicsBody + ?Sized,
    {
        let constraint = if self.profile.enable_stay_upright_constraint {
            self.create_upright(body, constraints)
        } else {
            None
        };

        self.profile.test_point_radius = self.profile.test_point_radius.abs();
        let runtime = RuntimeState {
            signed_radius: sign(gravity_z) * self.profile.test_point_radius,
            base_linear_damping: body.linear_damping(),
            base_angular_damping: body.angular_damping(),
            constraint,
        };
        if !self.has_wave_field() {
            warn!("buoyancy activated without a wave field; ticks will be skipped");
        }
        info!(
            "buoyancy active: {} test points, signed radius {}, base damping {}/{}",
            self.profile.test_points.len(),
            runtime.signed_radius,
            runtime.base_linear_damping,
            runtime.base_angular_damping
        );
        self.runtime.insert(runtime)
    }

    fn create_upright<B>(
        &self,
        body: &B,
        constraints: Option<&mut dyn ConstraintFactory>,
    ) -> Option<ConstraintHandle>
    where
        B: PhysicsBody + ?Sized,
    {
        let Some(factory) = constraints else {
            warn!("stay-upright constraint requested but no constraint factory was supplied");
            return None;
        };
        let spec = UprightConstraintSpec::stay_upright(
            body.transform().translation,
            self.profile.stay_upright_stiffness,
            self.profile.stay_upright_damping,
        );
        match factory.create_upright(&spec) {
            Ok(handle) => {
                debug!("stay-upright constraint {handle:?} anchored at {}", spec.anchor);
                Some(handle)
            }
            Err(e) => {
                error!("failed to create stay-upright constraint: {e}");
                None
            }
        }
    }

    /// Runs one buoyancy step against `body`.
    ///
    /// `gravity_z` is the current world gravity; it scales the buoyant force
    /// but does not refresh the signed radius.
    pub fn tick<B, D>(&self, body: &mut B, gravity_z: f32, debug_draw: &mut D) -> TickReport
    where
        B: PhysicsBody + ?Sized,
        D: DebugDraw + ?Sized,
    {
        let Some(wave_field) = self.wave_field.as_deref() else {
            return TickReport::idle(TickOutcome::Unbound);
        };

        if !body.is_simulating() {
            let location = body.transform().translation;
            let height = wave_field.height_at(location);
            body.set_world_position(Vec3::new(location.x, location.y, height), true);
            return TickReport::idle(TickOutcome::Kinematic { height });
        }

        let Some(runtime) = self.runtime.as_ref() else {
            debug!("buoyancy tick skipped: not activated");
            return TickReport::idle(TickOutcome::Inactive);
        };

        if self.profile.test_points.is_empty() {
            return TickReport::idle(TickOutcome::NoTestPoints);
        }

        let samples = self.sample_points(wave_field, &*body, runtime, gravity_z);
        let total = samples.len();
        let mut submerged = 0;
        for sample in &samples {
            if sample.is_submerged() {
                body.add_force_at_point(sample.force, sample.world_point);
                submerged += 1;
            }
            if self.profile.draw_debug_points {
                debug_draw.draw_sphere(DebugSphere::test_point(
                    sample.world_point,
                    self.profile.test_point_radius,
                    sample.is_submerged(),
                ));
            }
        }

        if self.profile.clamp_max_velocity && submerged > 0 {
            if let Some(clamped) =
                clamp_speed(body.linear_velocity(), self.profile.max_underwater_velocity)
            {
                trace!("clamping underwater velocity to {clamped}");
                body.set_linear_velocity(clamped);
            }
        }

        body.set_linear_damping(blended_damping(
            runtime.base_linear_damping,
            self.profile.fluid_linear_damping,
            submerged,
            total,
        ));
        body.set_angular_damping(blended_damping(
            runtime.base_angular_damping,
            self.profile.fluid_angular_damping,
            submerged,
            total,
        ));

        debug!("buoyancy tick: {submerged}/{total} points submerged");
        TickReport {
            outcome: TickOutcome::Simulated,
            submerged,
            total,
        }
    }

    /// Samples every test point without touching the body.
    pub fn sample_points<B>(
        &self,
        wave_field: &dyn WaveField,
        body: &B,
        runtime: &RuntimeState,
        gravity_z: f32,
    ) -> Vec<PointSample>
    where
        B: PhysicsBody + ?Sized,
    {
        let transform = body.transform();
        let mass = body.mass();
        let total_points = self.profile.test_points.len();

        self.profile
            .test_points
            .iter()
            .enumerate()
            .map(|(index, local)| {
                let world_point = transform.transform_point(*local);
                let wave_height = wave_field.height_at(world_point);
                let depth = depth_fraction(
                    wave_height,
                    world_point.z,
                    runtime.signed_radius,
                    self.profile.test_point_radius,
                );
                let force = depth.map_or(Vec3::ZERO, |fraction| {
                    let buoyant_z = ArchimedesTerm {
                        body_mass: mass,
                        point_density: self.profile.point_density(index),
                        fluid_density: self.profile.fluid_density,
                        gravity_z,
                        total_points,
                        depth: fraction,
                    }
                    .force_z();
                    let point_velocity = body
                        .velocity_at_point(world_point, BoneId::ROOT)
                        .unwrap_or(Vec3::ZERO);
                    let drag =
                        damping_force(point_velocity, self.profile.velocity_damper, mass, fraction);
                    Vec3::new(drag.x, drag.y, drag.z + buoyant_z)
                });
                trace!("test point {index} at {world_point}: surface {wave_height}, depth {depth:?}");
                PointSample {
                    world_point,
                    wave_height,
                    depth,
                    force,
                }
            })
            .collect()
    }
}
