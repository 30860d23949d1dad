//! Debug markers for test points.
//!
//! Markers are observational only; sinks may render, log or drop them.

use glam::Vec3;

use crate::constants::{DEBUG_SPHERE_SEGMENTS, DRY_POINT_COLOR, SUBMERGED_POINT_COLOR};

/// A wireframe sphere request for one test point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugSphere {
    /// World-space centre.
    pub center: Vec3,
    /// Test-point radius.
    pub radius: f32,
    /// Tessellation hint for renderers.
    pub segments: u32,
    /// Whether the test point was underwater this tick.
    pub submerged: bool,
}

impl DebugSphere {
    /// Marker for a test point.
    #[must_use]
    pub const fn test_point(center: Vec3, radius: f32, submerged: bool) -> Self {
        Self {
            center,
            radius,
            segments: DEBUG_SPHERE_SEGMENTS,
            submerged,
        }
    }

    /// Linear RGBA, blue when submerged and yellow when dry.
    #[must_use]
    pub const fn color(&self) -> [f32; 4] {
        if self.submerged {
            SUBMERGED_POINT_COLOR
        } else {
            DRY_POINT_COLOR
        }
    }
}

/// Receives debug markers emitted during a tick.
pub trait DebugDraw {
    /// Handles one marker. Called once per test point when markers are on.
    fn draw_sphere(&mut self, sphere: DebugSphere);
}

/// Discards every marker.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDebugDraw;

impl DebugDraw for NoDebugDraw {
    fn draw_sphere(&mut self, _sphere: DebugSphere) {}
}

/// Collects markers in emission order.
#[derive(Debug, Default, Clone)]
pub struct DebugMarkerLog {
    spheres: Vec<DebugSphere>,
}

impl DebugMarkerLog {
    /// Markers recorded since the last [`DebugMarkerLog::clear`].
    #[must_use]
    pub fn spheres(&self) -> &[DebugSphere] {
        &self.spheres
    }

    /// Forgets every recorded marker.
    pub fn clear(&mut self) {
        self.spheres.clear();
    }

    /// Number of recorded markers.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.spheres.len()
    }

    /// Whether no markers have been recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }
}

impl DebugDraw for DebugMarkerLog {
    fn draw_sphere(&mut self, sphere: DebugSphere) {
        self.spheres.push(sphere);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(true, SUBMERGED_POINT_COLOR)]
    #[case(false, DRY_POINT_COLOR)]
    fn colour_tracks_submersion(#[case] submerged: bool, #[case] expected: [f32; 4]) {
        let sphere = DebugSphere::test_point(Vec3::ONE, 10.0, submerged);
        assert_eq!(sphere.color(), expected);
        assert_eq!(sphere.segments, 8);
        assert_eq!(sphere.submerged, submerged);
    }

    #[rstest]
    fn log_keeps_order_until_cleared() {
        let mut log = DebugMarkerLog::default();
        log.draw_sphere(DebugSphere::test_point(Vec3::X, 1.0, true));
        log.draw_sphere(DebugSphere::test_point(Vec3::Y, 1.0, false));
        assert_eq!(log.len(), 2);
        assert_eq!(log.spheres().first().map(|s| s.center), Some(Vec3::X));
        log.clear();
        assert!(log.is_empty());
    }
}
