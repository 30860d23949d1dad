//! Bevy wiring for buoyant bodies.
//!
//! This is the layer that knows about scenes: it hands the scene's
//! [`OceanSurface`] to floaters that were spawned without one, activates
//! them, ticks them in `FixedUpdate` and steps the reference rigid bodies.

mod plugin;
mod resources;
mod systems;

pub use plugin::{BuoyancyPlugin, FloaterUnbound};
pub use resources::{DebugMarkers, Floater, OceanSurface, WorldGravity};
pub use systems::{
    activate_floaters_system, buoyancy_tick_system, integrate_bodies_system,
    sync_kinematic_transforms_system,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::BuoyancyProfile;
    use rstest::rstest;

    #[rstest]
    fn floater_starts_inactive() {
        let floater = Floater::new(BuoyancyProfile::default());
        assert!(!floater.is_active());
        assert!(!floater.has_wave_field());
    }

    #[rstest]
    fn plugin_is_default_constructible() {
        let _: BuoyancyPlugin = BuoyancyPlugin;
    }
}
