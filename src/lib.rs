#![cfg_attr(docsrs, feature(doc_cfg))]
//! Point-sampled buoyancy for rigid bodies floating on a wave field.
//!
//! A [`Buoyancy`] controller samples the surface height under a set of test
//! spheres on a body, pushes submerged spheres up with an Archimedes force,
//! drags them against their own velocity and blends fluid damping into the
//! body. Physics engines, wave generators and debug renderers plug in through
//! the [`PhysicsBody`], [`WaveField`], [`ConstraintFactory`] and
//! [`DebugDraw`] traits; [`BuoyancyPlugin`] wires everything into Bevy.
pub mod body;
pub mod buoyancy;
pub mod constants;
pub mod constraint;
pub mod debug_draw;
pub mod logging;
pub mod numeric;
pub mod ocean_sync;
pub mod physics;
pub mod profile;
pub mod rigid_body;
pub mod vector_math;
pub mod wave;
pub use constants::*;

// Re-export commonly used items
pub use body::{BoneId, PhysicsBody};
pub use buoyancy::{Buoyancy, PointSample, RuntimeState, TickOutcome, TickReport};
pub use constraint::{
    ConstraintError, ConstraintFactory, ConstraintHandle, UprightConstraintSpec,
};
pub use debug_draw::{DebugDraw, DebugMarkerLog, DebugSphere, NoDebugDraw};
pub use logging::init as init_logging;
pub use ocean_sync::{BuoyancyPlugin, DebugMarkers, Floater, OceanSurface, WorldGravity};
pub use physics::applied_acceleration;
pub use profile::{BuoyancyProfile, ProfileError};
pub use rigid_body::RigidBodyState;
pub use vector_math::{clamp_speed, safe_normal};
pub use wave::{FlatSea, WaveField};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use flotsam::prelude::*;
    //! ```

    pub use crate::Buoyancy;
    pub use crate::BuoyancyPlugin;
    pub use crate::BuoyancyProfile;
    pub use crate::FlatSea;
    pub use crate::Floater;
    pub use crate::OceanSurface;
    pub use crate::PhysicsBody;
    pub use crate::RigidBodyState;
    pub use crate::WaveField;
}
