//! Wave-field providers.
//!
//! The integrator only needs the surface height under a world position. Any
//! ocean simulation can plug in by implementing [`WaveField`]; closures work
//! out of the box.

use glam::Vec3;

/// Read-only oracle for the fluid surface.
pub trait WaveField: Send + Sync {
    /// Returns a point on the surface above or below `world_position`.
    ///
    /// Only the `z` component is meaningful to the buoyancy integrator.
    fn sample_surface(&self, world_position: Vec3) -> Vec3;

    /// Convenience accessor for the surface height at `world_position`.
    fn height_at(&self, world_position: Vec3) -> f32 {
        self.sample_surface(world_position).z
    }
}

impl<F> WaveField for F
where
    F: Fn(Vec3) -> Vec3 + Send + Sync,
{
    fn sample_surface(&self, world_position: Vec3) -> Vec3 {
        self(world_position)
    }
}

/// A perfectly calm surface at a fixed height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlatSea {
    /// Surface height in world units.
    pub height: f32,
}

impl FlatSea {
    /// Creates a calm sea at `height`.
    #[must_use]
    pub const fn new(height: f32) -> Self {
        Self { height }
    }
}

impl WaveField for FlatSea {
    fn sample_surface(&self, world_position: Vec3) -> Vec3 {
        Vec3::new(world_position.x, world_position.y, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn flat_sea_ignores_position() {
        let sea = FlatSea::new(5.0);
        assert_eq!(sea.height_at(Vec3::new(100.0, -40.0, 7.0)), 5.0);
        assert_eq!(sea.height_at(Vec3::ZERO), 5.0);
    }

    #[rstest]
    fn closures_are_wave_fields() {
        let ramp = |p: Vec3| Vec3::new(p.x, p.y, p.x * 0.5);
        assert_eq!(ramp.height_at(Vec3::new(4.0, 0.0, 0.0)), 2.0);
    }
}
