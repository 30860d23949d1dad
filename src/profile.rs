//! Per-body buoyancy configuration.
//!
//! A [`BuoyancyProfile`] is the whole configuration surface of a floating
//! body. Profiles are plain data: they can be built in code, tweaked between
//! ticks, or loaded from JSON with [`BuoyancyProfile::from_path`].

use std::fs;
use std::path::Path;

use glam::Vec3;
use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_FLUID_ANGULAR_DAMPING, DEFAULT_FLUID_DENSITY, DEFAULT_FLUID_LINEAR_DAMPING,
    DEFAULT_MAX_UNDERWATER_VELOCITY, DEFAULT_MESH_DENSITY, DEFAULT_STAY_UPRIGHT_DAMPING,
    DEFAULT_STAY_UPRIGHT_STIFFNESS, DEFAULT_TEST_POINT_RADIUS, DEFAULT_VELOCITY_DAMPER,
};

/// Errors raised while loading or validating a [`BuoyancyProfile`].
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The profile file could not be read.
    #[error("failed to read buoyancy profile: {0}")]
    Io(#[from] std::io::Error),
    /// The profile is not valid JSON for this schema.
    #[error("failed to parse buoyancy profile: {0}")]
    Json(#[from] serde_json::Error),
    /// A field holds a value the integrator cannot work with.
    #[error("invalid `{field}`: {reason}")]
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ProfileError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Static buoyancy settings for one floating body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuoyancyProfile {
    /// Density of the floating body in kg/m³.
    pub mesh_density: f32,
    /// Density of the surrounding fluid in kg/m³.
    pub fluid_density: f32,
    /// Linear damping added when every test point is submerged.
    pub fluid_linear_damping: f32,
    /// Angular damping added when every test point is submerged.
    pub fluid_angular_damping: f32,
    /// Per-axis coefficient opposing the velocity of each submerged point.
    pub velocity_damper: Vec3,
    /// Whether to cap the body's speed while any point is submerged.
    pub clamp_max_velocity: bool,
    /// Speed cap applied when [`Self::clamp_max_velocity`] is set.
    pub max_underwater_velocity: f32,
    /// Radius of each test sphere. Negative values are normalised on
    /// activation.
    pub test_point_radius: f32,
    /// Body-local sample positions. At least one is needed for any force.
    pub test_points: Vec<Vec3>,
    /// Optional per-point density, index-aligned with [`Self::test_points`].
    /// A shorter list leaves the remaining points on [`Self::mesh_density`].
    pub point_density_override: Vec<f32>,
    /// Emit a debug sphere for every test point each tick.
    pub draw_debug_points: bool,
    /// Create a soft angular spring holding the initial orientation.
    pub enable_stay_upright_constraint: bool,
    /// Stiffness of the upright spring, shared by swing and twist.
    pub stay_upright_stiffness: f32,
    /// Damping of the upright spring, shared by swing and twist.
    pub stay_upright_damping: f32,
}

impl Default for BuoyancyProfile {
    fn default() -> Self {
        Self {
            mesh_density: DEFAULT_MESH_DENSITY,
            fluid_density: DEFAULT_FLUID_DENSITY,
            fluid_linear_damping: DEFAULT_FLUID_LINEAR_DAMPING,
            fluid_angular_damping: DEFAULT_FLUID_ANGULAR_DAMPING,
            velocity_damper: Vec3::splat(DEFAULT_VELOCITY_DAMPER),
            clamp_max_velocity: false,
            max_underwater_velocity: DEFAULT_MAX_UNDERWATER_VELOCITY,
            test_point_radius: DEFAULT_TEST_POINT_RADIUS,
            test_points: Vec::new(),
            point_density_override: Vec::new(),
            draw_debug_points: false,
            enable_stay_upright_constraint: false,
            stay_upright_stiffness: DEFAULT_STAY_UPRIGHT_STIFFNESS,
            stay_upright_damping: DEFAULT_STAY_UPRIGHT_DAMPING,
        }
    }
}

impl BuoyancyProfile {
    /// Creates a default profile sampling the given local points.
    #[must_use]
    pub fn with_points(test_points: impl IntoIterator<Item = Vec3>) -> Self {
        Self {
            test_points: test_points.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Density used for the test point at `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flotsam::BuoyancyProfile;
    /// let mut profile = BuoyancyProfile::default();
    /// profile.point_density_override = vec![2000.0];
    /// assert_eq!(profile.point_density(0), 2000.0);
    /// assert_eq!(profile.point_density(1), profile.mesh_density);
    /// ```
    #[must_use]
    pub fn point_density(&self, index: usize) -> f32 {
        self.point_density_override
            .get(index)
            .copied()
            .unwrap_or(self.mesh_density)
    }

    /// Parses and validates a profile from JSON text.
    ///
    /// Missing fields fall back to [`BuoyancyProfile::default`].
    ///
    /// # Errors
    /// Returns [`ProfileError::Json`] for malformed input and
    /// [`ProfileError::Invalid`] when validation fails.
    pub fn from_json_str(json: &str) -> Result<Self, ProfileError> {
        let profile: Self = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Reads, parses and validates a profile from a JSON file.
    ///
    /// # Errors
    /// Returns [`ProfileError::Io`] if the file cannot be read, otherwise the
    /// errors of [`BuoyancyProfile::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Rejects values that would make the force integration meaningless.
    ///
    /// A negative radius is accepted; activation takes its absolute value.
    ///
    /// # Errors
    /// Returns [`ProfileError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ProfileError> {
        positive("mesh_density", self.mesh_density)?;
        positive("fluid_density", self.fluid_density)?;
        non_negative("fluid_linear_damping", self.fluid_linear_damping)?;
        non_negative("fluid_angular_damping", self.fluid_angular_damping)?;
        non_negative("max_underwater_velocity", self.max_underwater_velocity)?;
        non_negative("stay_upright_stiffness", self.stay_upright_stiffness)?;
        non_negative("stay_upright_damping", self.stay_upright_damping)?;
        if !self.test_point_radius.is_finite() {
            return Err(ProfileError::invalid("test_point_radius", "must be finite"));
        }
        if !self.velocity_damper.is_finite() {
            return Err(ProfileError::invalid("velocity_damper", "must be finite"));
        }
        if let Some(index) = self.test_points.iter().position(|p| !p.is_finite()) {
            return Err(ProfileError::invalid(
                "test_points",
                format!("point {index} is not finite"),
            ));
        }
        if let Some((index, density)) = self
            .point_density_override
            .iter()
            .enumerate()
            .find(|(_, d)| !(d.is_finite() && **d > 0.0))
        {
            return Err(ProfileError::invalid(
                "point_density_override",
                format!("entry {index} is {density}, expected a positive density"),
            ));
        }
        if self.point_density_override.len() > self.test_points.len() {
            warn!(
                "point_density_override has {} entries for {} test points; extras are ignored",
                self.point_density_override.len(),
                self.test_points.len()
            );
        }
        if self.test_points.is_empty() {
            warn!("buoyancy profile has no test points and will apply no force");
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ProfileError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ProfileError::invalid(
            field,
            format!("{value} is not a positive finite number"),
        ))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ProfileError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ProfileError::invalid(
            field,
            format!("{value} is not a non-negative finite number"),
        ))
    }
}
