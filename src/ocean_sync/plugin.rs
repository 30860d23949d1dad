//! Bevy plugin wiring buoyancy systems into the fixed schedule.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::warn;

use super::{
    activate_floaters_system, buoyancy_tick_system, integrate_bodies_system,
    sync_kinematic_transforms_system, DebugMarkers, WorldGravity,
};

/// Raised when a floater activates with neither its own wave field nor a
/// scene [`super::OceanSurface`]. The floater stays inert.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloaterUnbound {
    /// The floater left without a surface.
    pub entity: Entity,
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn log_unbound_floater(event: On<FloaterUnbound>) {
    let FloaterUnbound { entity } = event.event();
    warn!("floater {entity:?} has no ocean to float on; buoyancy disabled");
}

/// Installs the buoyancy resources and the fixed-step system chain.
#[derive(Default)]
pub struct BuoyancyPlugin;

impl Plugin for BuoyancyPlugin {
    fn build(&self, app: &mut App) {
        app.add_observer(log_unbound_floater);
        app.init_resource::<WorldGravity>();
        app.init_resource::<DebugMarkers>();
        app.add_systems(
            FixedUpdate,
            (
                activate_floaters_system,
                sync_kinematic_transforms_system,
                buoyancy_tick_system,
                integrate_bodies_system,
            )
                .chain(),
        );
    }
}
