//! Stay-upright constraint description.
//!
//! Buoyant bodies tend to capsize when every test point pushes up at once.
//! The fix is a soft 6-DOF joint anchored at the body's starting location:
//! translation stays free, every angular axis is limited to zero degrees with
//! a soft spring, which pulls the body back toward its initial orientation.
//! This module only describes that joint; creating it is up to the physics
//! engine behind a [`ConstraintFactory`].

use glam::Vec3;
use thiserror::Error;

/// How a linear axis of the joint may move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinearMotion {
    /// Unconstrained.
    Free,
    /// Bounded by [`UprightConstraintSpec::linear_limit`].
    Limited,
    /// Held in place.
    Locked,
}

/// How an angular axis of the joint may move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngularMotion {
    /// Unconstrained.
    Free,
    /// Bounded by the group's [`SoftLimit`].
    Limited,
    /// Held at the reference orientation.
    Locked,
}

/// Soft-limit spring parameters for one angular group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoftLimit {
    /// Springs toward the limit instead of stopping hard.
    pub soft: bool,
    /// Allowed deviation in degrees.
    pub limit_angle: f32,
    /// Spring strength once past the limit.
    pub stiffness: f32,
    /// Spring damping once past the limit.
    pub damping: f32,
}

/// Full description of a 6-DOF joint attached to a single body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UprightConstraintSpec {
    /// World location the joint frame is attached at.
    pub anchor: Vec3,
    /// Motion along x, y and z.
    pub linear_motion: [LinearMotion; 3],
    /// Travel allowed on limited linear axes.
    pub linear_limit: f32,
    /// First swing axis.
    pub swing1_motion: AngularMotion,
    /// Second swing axis.
    pub swing2_motion: AngularMotion,
    /// Twist axis.
    pub twist_motion: AngularMotion,
    /// Shared by both swing axes.
    pub swing: SoftLimit,
    /// Spring on the twist axis.
    pub twist: SoftLimit,
}

impl UprightConstraintSpec {
    /// Soft zero-angle spring toward the orientation held at `anchor`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flotsam::constraint::{AngularMotion, LinearMotion, UprightConstraintSpec};
    /// use glam::Vec3;
    /// let spec = UprightConstraintSpec::stay_upright(Vec3::ZERO, 50.0, 5.0);
    /// assert_eq!(spec.linear_motion, [LinearMotion::Free; 3]);
    /// assert_eq!(spec.twist_motion, AngularMotion::Limited);
    /// assert_eq!(spec.swing.limit_angle, 0.0);
    /// ```
    #[must_use]
    pub const fn stay_upright(anchor: Vec3, stiffness: f32, damping: f32) -> Self {
        let spring = SoftLimit {
            soft: true,
            limit_angle: 0.0,
            stiffness,
            damping,
        };
        Self {
            anchor,
            linear_motion: [LinearMotion::Free; 3],
            linear_limit: 0.0,
            swing1_motion: AngularMotion::Limited,
            swing2_motion: AngularMotion::Limited,
            twist_motion: AngularMotion::Limited,
            swing: spring,
            twist: spring,
        }
    }
}

/// Opaque identifier of a joint created by a [`ConstraintFactory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstraintHandle(pub u64);

/// Raised when the physics engine refuses to create a joint.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConstraintError {
    /// The body cannot host a joint, e.g. it has been despawned.
    #[error("constraint target is unavailable")]
    MissingBody,
    /// Engine-specific failure.
    #[error("constraint creation failed: {0}")]
    Rejected(String),
}

/// Creates joints on the body being activated.
pub trait ConstraintFactory {
    /// Attaches a joint described by `spec` to the body.
    ///
    /// # Errors
    /// Returns a [`ConstraintError`] when the engine cannot create it.
    fn create_upright(
        &mut self,
        spec: &UprightConstraintSpec,
    ) -> Result<ConstraintHandle, ConstraintError>;
}
