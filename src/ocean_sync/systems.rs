//! Systems driving floaters each fixed step.

use std::sync::Arc;

use bevy::prelude::*;
use log::debug;

use crate::constraint::{ConstraintError, ConstraintFactory, ConstraintHandle, UprightConstraintSpec};
use crate::rigid_body::RigidBodyState;

use super::{DebugMarkers, Floater, FloaterUnbound, OceanSurface, WorldGravity};

/// Records the joint a floater asks for so it can be attached to the
/// reference body once activation returns.
struct SpringFactory {
    entity: Entity,
    requested: Option<UprightConstraintSpec>,
}

impl ConstraintFactory for SpringFactory {
    fn create_upright(
        &mut self,
        spec: &UprightConstraintSpec,
    ) -> Result<ConstraintHandle, ConstraintError> {
        self.requested = Some(*spec);
        Ok(ConstraintHandle(self.entity.to_bits()))
    }
}

/// Activates floaters that have not run yet.
///
/// Floaters without their own wave field are bound to the scene's
/// [`OceanSurface`]. When there is none, a [`FloaterUnbound`] event is
/// raised and the floater activates anyway so later ticks stay cheap no-ops.
pub fn activate_floaters_system(
    mut commands: Commands,
    ocean: Option<Res<OceanSurface>>,
    gravity: Res<WorldGravity>,
    mut query: Query<(Entity, &mut Floater, &mut RigidBodyState)>,
) {
    for (entity, mut floater, mut body) in &mut query {
        if floater.is_active() {
            continue;
        }
        if !floater.has_wave_field() {
            match ocean.as_deref() {
                Some(surface) => floater.bind_wave_field(Arc::clone(&surface.0)),
                None => commands.trigger(FloaterUnbound { entity }),
            }
        }

        let mut springs = SpringFactory {
            entity,
            requested: None,
        };
        floater.activate(&*body, gravity.0.z, Some(&mut springs));
        if let Some(spec) = springs.requested {
            body.attach_upright(&spec);
        }
        debug!("activated floater {entity:?}");
    }
}

/// Copies animated transforms into kinematic bodies before they are ticked.
pub fn sync_kinematic_transforms_system(mut query: Query<(&mut RigidBodyState, &Transform)>) {
    for (mut body, transform) in &mut query {
        if body.simulating {
            continue;
        }
        body.position = transform.translation;
        body.rotation = transform.rotation;
    }
}

/// Applies buoyancy to every floater and refreshes [`DebugMarkers`].
pub fn buoyancy_tick_system(
    gravity: Res<WorldGravity>,
    mut markers: ResMut<DebugMarkers>,
    mut query: Query<(&Floater, &mut RigidBodyState)>,
) {
    markers.clear();
    for (floater, mut body) in &mut query {
        floater.tick(&mut *body, gravity.0.z, &mut markers.0);
    }
}

/// Steps the reference bodies and mirrors them into their transforms.
pub fn integrate_bodies_system(
    time: Res<Time>,
    gravity: Res<WorldGravity>,
    mut query: Query<(&mut RigidBodyState, Option<&mut Transform>)>,
) {
    let delta_seconds = time.delta_secs();
    for (mut body, transform) in &mut query {
        body.integrate(delta_seconds, gravity.0);
        if let Some(mut transform) = transform {
            transform.translation = body.position;
            transform.rotation = body.rotation;
        }
    }
}
