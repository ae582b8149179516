//! Startup gate.
//!
//! # Responsibilities
//! - Validate the environment before any other subsystem reads it
//! - Report every invalid variable and terminate on failure
//! - Hold the process-wide validated record
//!
//! # Design Decisions
//! - Fail fast: any invalid variable is fatal
//! - This is the only module that calls `std::process::exit`
//! - Validation runs at most once per process

use std::sync::OnceLock;

use crate::config::{render_report, validate_env, EnvConfig, EnvSource, ProcessEnv};

/// Exit status used when the environment is invalid.
pub const INVALID_ENV_EXIT_CODE: i32 = 1;

static ENV: OnceLock<EnvConfig> = OnceLock::new();

/// Validate `source`, or print diagnostics to stderr and exit with status 1.
pub fn validate_or_exit(source: &impl EnvSource) -> EnvConfig {
    match validate_env(source) {
        Ok(config) => config,
        Err(errors) => {
            eprint!("{}", render_report(&errors));
            std::process::exit(INVALID_ENV_EXIT_CODE);
        }
    }
}

/// The validated process environment.
///
/// The first call validates the current process environment and exits on
/// failure; later calls return the same record.
pub fn env() -> &'static EnvConfig {
    ENV.get_or_init(|| validate_or_exit(&ProcessEnv))
}
