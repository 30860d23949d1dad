//! Activation: signed radius, damping snapshot and stay-upright joint
//! creation, checked against mocked collaborators.

use approx::assert_relative_eq;
use bevy::prelude::Transform;
use flotsam::constraint::{AngularMotion, LinearMotion};
use flotsam::{
    BoneId, Buoyancy, BuoyancyProfile, ConstraintError, ConstraintFactory, ConstraintHandle,
    NoDebugDraw, PhysicsBody, UprightConstraintSpec,
};
use glam::Vec3;
use mockall::mock;
use mockall::predicate::always;
use rstest::rstest;
use test_utils::body::RecordingBody;
use test_utils::fixtures::{flat_sea, single_point_profile, GRAVITY_Z};

mock! {
    pub Body {}
    impl PhysicsBody for Body {
        fn is_simulating(&self) -> bool;
        fn mass(&self) -> f32;
        fn linear_damping(&self) -> f32;
        fn angular_damping(&self) -> f32;
        fn linear_velocity(&self) -> Vec3;
        fn velocity_at_point(&self, world_point: Vec3, bone: BoneId) -> Option<Vec3>;
        fn transform(&self) -> Transform;
        fn set_world_position(&mut self, position: Vec3, sweep: bool);
        fn add_force_at_point(&mut self, force: Vec3, world_point: Vec3);
        fn set_linear_damping(&mut self, damping: f32);
        fn set_angular_damping(&mut self, damping: f32);
        fn set_linear_velocity(&mut self, velocity: Vec3);
    }
}

mock! {
    pub Factory {}
    impl ConstraintFactory for Factory {
        fn create_upright(
            &mut self,
            spec: &UprightConstraintSpec,
        ) -> Result<ConstraintHandle, ConstraintError>;
    }
}

fn upright_profile() -> BuoyancyProfile {
    let mut profile = single_point_profile(10.0);
    profile.enable_stay_upright_constraint = true;
    profile.stay_upright_stiffness = 75.0;
    profile.stay_upright_damping = 3.0;
    profile
}

#[rstest]
fn activation_snapshots_body_damping() {
    let mut body = MockBody::new();
    body.expect_linear_damping().times(1).return_const(0.3_f32);
    body.expect_angular_damping().times(1).return_const(0.7_f32);

    let mut buoyancy = Buoyancy::new(single_point_profile(10.0));
    let runtime = *buoyancy.activate(&body, GRAVITY_Z, None);

    assert_relative_eq!(runtime.base_linear_damping, 0.3);
    assert_relative_eq!(runtime.base_angular_damping, 0.7);
    assert!(runtime.constraint.is_none());
}

#[rstest]
#[case::gravity_down(-980.0, 10.0, -10.0)]
#[case::gravity_up(980.0, 10.0, 10.0)]
#[case::negative_radius(-980.0, -4.0, -4.0)]
#[case::weightless(0.0, 10.0, 0.0)]
fn signed_radius_follows_gravity(
    #[case] gravity_z: f32,
    #[case] radius: f32,
    #[case] expected: f32,
) {
    let body = RecordingBody::new(1.0, Vec3::ZERO);
    let mut buoyancy = Buoyancy::new(single_point_profile(radius));

    let runtime = *buoyancy.activate(&body, gravity_z, None);

    assert_relative_eq!(runtime.signed_radius, expected);
    assert!(buoyancy.profile().test_point_radius >= 0.0);
    assert_relative_eq!(buoyancy.profile().test_point_radius, radius.abs());
}

#[rstest]
fn signed_radius_is_not_refreshed_by_tick_gravity() {
    let mut body = RecordingBody::new(100.0, Vec3::ZERO);
    let mut buoyancy = Buoyancy::new(single_point_profile(10.0)).with_wave_field(flat_sea(-5.0));
    buoyancy.activate(&body, GRAVITY_Z, None);

    // Surface at -5 is above the bottom of the sphere under the activation-time
    // gravity sign, so the point stays wet even when ticked with gravity up.
    let report = buoyancy.tick(&mut body, -GRAVITY_Z, &mut NoDebugDraw);

    assert_eq!(report.submerged, 1);
    assert!(body.forces[0].force.z < 0.0, "inverted gravity pushes down");
    assert_relative_eq!(buoyancy.runtime().map_or(0.0, |r| r.signed_radius), -10.0);
}

#[rstest]
fn upright_joint_is_anchored_at_body_location() {
    let anchor = Vec3::new(12.0, -3.0, 40.0);
    let body = RecordingBody::new(50.0, anchor);
    let mut factory = MockFactory::new();
    factory
        .expect_create_upright()
        .withf(move |spec: &UprightConstraintSpec| {
            spec.anchor == anchor
                && spec.linear_motion == [LinearMotion::Free; 3]
                && spec.linear_limit == 0.0
                && spec.swing1_motion == AngularMotion::Limited
                && spec.swing2_motion == AngularMotion::Limited
                && spec.twist_motion == AngularMotion::Limited
                && spec.swing.soft
                && spec.twist.soft
                && spec.swing.limit_angle == 0.0
                && spec.twist.limit_angle == 0.0
                && spec.swing.stiffness == 75.0
                && spec.twist.stiffness == 75.0
                && spec.swing.damping == 3.0
                && spec.twist.damping == 3.0
        })
        .times(1)
        .returning(|_| Ok(ConstraintHandle(9)));

    let mut buoyancy = Buoyancy::new(upright_profile());
    let runtime = *buoyancy.activate(&body, GRAVITY_Z, Some(&mut factory));

    assert_eq!(runtime.constraint, Some(ConstraintHandle(9)));
}

#[rstest]
fn upright_joint_is_skipped_when_disabled() {
    let body = RecordingBody::new(50.0, Vec3::ZERO);
    let mut factory = MockFactory::new();
    factory.expect_create_upright().never();

    let mut buoyancy = Buoyancy::new(single_point_profile(10.0));
    let runtime = *buoyancy.activate(&body, GRAVITY_Z, Some(&mut factory));

    assert!(runtime.constraint.is_none());
}

#[rstest]
fn failed_joint_does_not_abort_activation() {
    let body = RecordingBody::new(50.0, Vec3::ZERO).with_damping(0.1, 0.2);
    let mut factory = MockFactory::new();
    factory
        .expect_create_upright()
        .with(always())
        .times(1)
        .returning(|_| Err(ConstraintError::MissingBody));

    let mut buoyancy = Buoyancy::new(upright_profile());
    let runtime = *buoyancy.activate(&body, GRAVITY_Z, Some(&mut factory));

    assert!(runtime.constraint.is_none());
    assert!(buoyancy.is_active());
    assert_relative_eq!(runtime.base_linear_damping, 0.1);
}

#[rstest]
fn rejected_joint_leaves_no_handle() {
    let body = RecordingBody::new(50.0, Vec3::ZERO);
    let mut factory = MockFactory::new();
    factory
        .expect_create_upright()
        .times(1)
        .returning(|_| Err(ConstraintError::Rejected("solver joint limit reached".into())));

    let mut buoyancy = Buoyancy::new(upright_profile());
    let runtime = *buoyancy.activate(&body, GRAVITY_Z, Some(&mut factory));

    assert!(runtime.constraint.is_none());
    assert_relative_eq!(runtime.signed_radius, -10.0);
    assert_eq!(
        ConstraintError::Rejected("solver joint limit reached".into()).to_string(),
        "constraint creation failed: solver joint limit reached"
    );
}

#[rstest]
fn missing_factory_does_not_abort_activation() {
    let body = RecordingBody::new(50.0, Vec3::ZERO);
    let mut buoyancy = Buoyancy::new(upright_profile());

    let runtime = *buoyancy.activate(&body, GRAVITY_Z, None);

    assert!(runtime.constraint.is_none());
    assert!(buoyancy.is_active());
}

#[rstest]
fn tick_uses_snapshot_not_live_damping() {
    let mut body = MockBody::new();
    body.expect_linear_damping().times(1).return_const(0.5_f32);
    body.expect_angular_damping().times(1).return_const(0.5_f32);
    body.expect_is_simulating().return_const(true);
    body.expect_transform().return_const(Transform::IDENTITY);
    body.expect_mass().return_const(10.0_f32);
    body.expect_velocity_at_point().return_const(Some(Vec3::ZERO));
    body.expect_add_force_at_point().times(1).return_const(());
    body.expect_set_linear_damping()
        .withf(|d| (*d - 1.5).abs() < 1e-6)
        .times(1)
        .return_const(());
    body.expect_set_angular_damping()
        .withf(|d| (*d - 1.5).abs() < 1e-6)
        .times(1)
        .return_const(());

    let mut buoyancy = Buoyancy::new(single_point_profile(10.0)).with_wave_field(flat_sea(100.0));
    buoyancy.activate(&body, GRAVITY_Z, None);
    let report = buoyancy.tick(&mut body, GRAVITY_Z, &mut NoDebugDraw);

    assert_eq!(report.submerged, 1);
}
