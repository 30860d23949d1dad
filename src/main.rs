//! Headless demo: drops a hull onto a rolling swell and logs how it floats.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use flotsam::{
    init_logging, Buoyancy, BuoyancyProfile, ConstraintError, ConstraintFactory,
    ConstraintHandle, NoDebugDraw, RigidBodyState, TickOutcome, UprightConstraintSpec,
    DEFAULT_GRAVITY_Z,
};
use glam::{Quat, Vec3};
use log::info;

/// Drops a crate onto a rolling swell and logs how it floats.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON buoyancy profile; a four-point hull is used when omitted
    #[arg(short, long)]
    profile: Option<PathBuf>,
    /// Number of fixed steps to simulate
    #[arg(short, long, default_value_t = 600)]
    ticks: u32,
    /// Fixed step rate in hertz
    #[arg(long, default_value_t = 60.0)]
    rate: f32,
    /// Body mass in kilograms
    #[arg(long, default_value_t = 100.0)]
    mass: f32,
    /// Height the body is released from
    #[arg(long, default_value_t = 100.0)]
    drop_height: f32,
    /// Swell amplitude
    #[arg(long, default_value_t = 20.0)]
    amplitude: f32,
    /// Swell wavelength
    #[arg(long, default_value_t = 1200.0)]
    wavelength: f32,
    /// Swell period in seconds
    #[arg(long, default_value_t = 6.0)]
    period: f32,
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn default_hull() -> BuoyancyProfile {
    let mut profile = BuoyancyProfile::with_points([
        Vec3::new(50.0, 50.0, -20.0),
        Vec3::new(50.0, -50.0, -20.0),
        Vec3::new(-50.0, 50.0, -20.0),
        Vec3::new(-50.0, -50.0, -20.0),
    ]);
    profile.clamp_max_velocity = true;
    profile.enable_stay_upright_constraint = true;
    profile
}

fn swell(args: &Args, time: f32) -> impl Fn(Vec3) -> Vec3 + Send + Sync {
    let amplitude = args.amplitude;
    let wavenumber = std::f32::consts::TAU / args.wavelength;
    let phase = std::f32::consts::TAU * time / args.period;
    move |p: Vec3| Vec3::new(p.x, p.y, amplitude * (wavenumber * p.x - phase).sin())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    ensure!(args.rate > 0.0, "--rate must be positive");
    ensure!(args.wavelength > 0.0, "--wavelength must be positive");
    ensure!(args.period > 0.0, "--period must be positive");

    let profile = match &args.profile {
        Some(path) => BuoyancyProfile::from_path(path)
            .with_context(|| format!("loading profile {}", path.display()))?,
        None => default_hull(),
    };

    let gravity = Vec3::new(0.0, 0.0, DEFAULT_GRAVITY_Z);
    let delta_seconds = 1.0 / args.rate;
    let mut body = RigidBodyState::new(args.mass)
        .at(Vec3::new(0.0, 0.0, args.drop_height))
        .with_inertia(args.mass * 1000.0);
    let mut buoyancy = Buoyancy::new(profile).with_wave_field(Arc::new(swell(&args, 0.0)));

    let mut factory = CliSprings(None);
    buoyancy.activate(&body, gravity.z, Some(&mut factory));
    if let Some(spec) = factory.0.take() {
        body.attach_upright(&spec);
    }

    let mut time = 0.0_f32;
    let mut next_report = 0.0_f32;
    for step in 0..args.ticks {
        buoyancy.bind_wave_field(Arc::new(swell(&args, time)));
        let report = buoyancy.tick(&mut body, gravity.z, &mut NoDebugDraw);
        body.integrate(delta_seconds, gravity);
        if time >= next_report || step + 1 == args.ticks {
            next_report += 1.0;
            let submerged = match report.outcome {
                TickOutcome::Simulated => format!("{}/{}", report.submerged, report.total),
                other => format!("{other:?}"),
            };
            info!(
                "t={time:6.2}s z={:8.2} vz={:8.2} submerged={submerged} tilt={:.3}rad",
                body.position.z,
                body.linear_velocity.z,
                body.rotation.angle_between(Quat::IDENTITY)
            );
        }
        time += delta_seconds;
    }
    Ok(())
}

/// Hands the requested joint back to the reference body.
struct CliSprings(Option<UprightConstraintSpec>);

impl ConstraintFactory for CliSprings {
    fn create_upright(
        &mut self,
        spec: &UprightConstraintSpec,
    ) -> std::result::Result<ConstraintHandle, ConstraintError> {
        self.0 = Some(*spec);
        Ok(ConstraintHandle(1))
    }
}
