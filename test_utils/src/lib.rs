//! Utility helpers for tests.
//!
//! Provides a [`RecordingBody`](body::RecordingBody) that logs every
//! mutation the buoyancy integrator makes, plus profile fixtures.

pub mod body;
pub mod fixtures;

use glam::Vec3;

/// Assert that two vectors agree component-wise within `tolerance`.
///
/// # Panics
/// Panics with both vectors in the message when any component differs.
pub fn assert_vec3_near(actual: Vec3, expected: Vec3, tolerance: f32) {
    assert!(
        (actual - expected).abs().max_element() <= tolerance,
        "expected {expected}, got {actual} (tolerance {tolerance})"
    );
}
