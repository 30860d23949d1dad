//! Resources and components shared by the buoyancy systems.

use std::sync::Arc;

use bevy::prelude::*;

use crate::buoyancy::Buoyancy;
use crate::constants::DEFAULT_GRAVITY_Z;
use crate::debug_draw::DebugMarkerLog;
use crate::profile::BuoyancyProfile;
use crate::wave::WaveField;

/// The scene's ocean, bound to every floater spawned without its own.
#[derive(Resource, Clone)]
pub struct OceanSurface(pub Arc<dyn WaveField>);

impl OceanSurface {
    /// Shares `wave_field` as the scene's ocean.
    #[must_use]
    pub fn new(wave_field: impl WaveField + 'static) -> Self {
        Self(Arc::new(wave_field))
    }
}

/// World gravity in units per second squared.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct WorldGravity(pub Vec3);

impl Default for WorldGravity {
    fn default() -> Self {
        Self(Vec3::new(0.0, 0.0, DEFAULT_GRAVITY_Z))
    }
}

/// Test-point markers emitted during the latest fixed step.
#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct DebugMarkers(pub DebugMarkerLog);

/// Buoyancy controller attached to a body entity.
#[derive(Component, Debug, Clone, Deref, DerefMut)]
pub struct Floater(pub Buoyancy);

impl Floater {
    /// A floater that picks up the scene's [`OceanSurface`] on activation.
    #[must_use]
    pub const fn new(profile: BuoyancyProfile) -> Self {
        Self(Buoyancy::new(profile))
    }

    /// A floater bound to its own surface instead of the scene's.
    #[must_use]
    pub fn on(profile: BuoyancyProfile, wave_field: Arc<dyn WaveField>) -> Self {
        Self(Buoyancy::new(profile).with_wave_field(wave_field))
    }
}
