//! Default buoyancy tuning used when a profile omits a field.
//!
//! Distances are in centimetres and masses in kilograms, so the default
//! gravity is `-980 cm/s²`.

/// Density assumed for the floating body.
pub const DEFAULT_MESH_DENSITY: f32 = 600.0;
/// Density of sea water.
pub const DEFAULT_FLUID_DENSITY: f32 = 1025.0;
/// Radius of each test sphere.
pub const DEFAULT_TEST_POINT_RADIUS: f32 = 10.0;
/// Linear damping added when every test point is submerged.
pub const DEFAULT_FLUID_LINEAR_DAMPING: f32 = 1.0;
/// Angular damping added when every test point is submerged.
pub const DEFAULT_FLUID_ANGULAR_DAMPING: f32 = 1.0;
/// Per-axis drag coefficient applied to submerged point velocities.
pub const DEFAULT_VELOCITY_DAMPER: f32 = 0.1;
/// Speed limit used when underwater clamping is enabled.
pub const DEFAULT_MAX_UNDERWATER_VELOCITY: f32 = 1000.0;
/// Stay-upright spring stiffness.
pub const DEFAULT_STAY_UPRIGHT_STIFFNESS: f32 = 50.0;
/// Stay-upright spring damping.
pub const DEFAULT_STAY_UPRIGHT_DAMPING: f32 = 5.0;
/// World gravity along z.
pub const DEFAULT_GRAVITY_Z: f32 = -980.0;
/// Sphere tessellation used for test-point debug markers.
pub const DEBUG_SPHERE_SEGMENTS: u32 = 8;
/// Marker colour for a test point above the surface.
pub const DRY_POINT_COLOR: [f32; 4] = [0.8, 0.7, 0.2, 0.8];
/// Marker colour for a submerged test point.
pub const SUBMERGED_POINT_COLOR: [f32; 4] = [0.0, 0.2, 0.7, 0.8];
