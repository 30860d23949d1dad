//! Loading buoyancy profiles from disk.

use std::io::Write;

use flotsam::{Buoyancy, BuoyancyProfile, ProfileError};
use glam::Vec3;
use rstest::rstest;
use tempfile::NamedTempFile;
use test_utils::body::RecordingBody;
use test_utils::fixtures::GRAVITY_Z;

fn write_profile(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp profile");
    file.write_all(json.as_bytes()).expect("write temp profile");
    file
}

#[rstest]
fn profile_round_trips_through_a_file() {
    let mut profile = BuoyancyProfile::with_points([Vec3::new(1.0, 2.0, 3.0), Vec3::NEG_Z]);
    profile.point_density_override = vec![800.0];
    profile.clamp_max_velocity = true;
    let json = serde_json::to_string_pretty(&profile).expect("serialise profile");
    let file = write_profile(&json);

    let loaded = BuoyancyProfile::from_path(file.path()).expect("load profile");

    assert_eq!(loaded, profile);
}

#[rstest]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let err = BuoyancyProfile::from_path(dir.path().join("absent.json"))
        .expect_err("absent file should fail");
    assert!(matches!(err, ProfileError::Io(_)));
}

#[rstest]
fn invalid_file_names_the_field() {
    let file = write_profile(r#"{ "fluid_density": 0 }"#);
    let err = BuoyancyProfile::from_path(file.path()).expect_err("zero fluid density");
    assert_eq!(err.to_string(), "invalid `fluid_density`: 0 is not a positive finite number");
}

#[rstest]
fn loaded_negative_radius_is_normalised_on_activation() {
    let file = write_profile(r#"{ "test_point_radius": -12.5, "test_points": [[0, 0, 0]] }"#);
    let profile = BuoyancyProfile::from_path(file.path()).expect("load profile");
    let body = RecordingBody::new(10.0, Vec3::ZERO);
    let mut buoyancy = Buoyancy::new(profile);

    let runtime = *buoyancy.activate(&body, GRAVITY_Z, None);

    assert_eq!(buoyancy.profile().test_point_radius, 12.5);
    assert_eq!(runtime.signed_radius, -12.5);
}
