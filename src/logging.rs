//! Logger bootstrap shared by the binary and tests.
//!
//! The crate logs through the `log` facade:
//!
//! - `info`: controller activation with its signed radius and damping
//!   snapshot, plus the CLI's once-per-second motion summary.
//! - `warn`: floaters with no wave field, a stay-upright joint requested
//!   without a factory, and profile oddities such as unused density
//!   overrides.
//! - `error`: a constraint factory refusing to build the joint.
//! - `debug`: per-tick submerged counts and floater activation in Bevy.
//! - `trace`: every sampled test point and velocity clamp.
use env_logger::{Builder, Env};
use log::{debug, LevelFilter};

/// Initializes the global logger with millisecond timestamps.
///
/// When `verbose` is `true`, per-tick debug summaries are printed. Otherwise
/// only info level and above are shown. `RUST_LOG` overrides either choice.
/// Later calls leave the first logger in place, so tests may call this
/// freely.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);
    builder.format_timestamp_millis();

    if builder.try_init().is_err() {
        debug!("logger already installed; keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(true)]
    #[case(false)]
    fn init_is_idempotent(#[case] verbose: bool) {
        init(verbose);
        init(verbose);
        log::info!("logger initialised twice without panicking");
    }
}
