//! Environment configuration subsystem.
//!
//! # Data Flow
//! ```text
//! process env (+ optional .env via dotenvy)
//!     → loader.rs (EnvSource snapshot)
//!     → validation.rs (per-variable checks, all errors collected)
//!     → EnvConfig (validated, immutable)
//!
//! On failure:
//!     → report.rs (operator diagnostics)
//!     → lifecycle::startup (exit 1)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once validated and built exactly once per process
//! - No defaults: every variable is required
//! - Validation and process exit are separate calls

pub mod loader;
pub mod report;
pub mod schema;
pub mod validation;

pub use loader::{load_dotenv, ConfigError, EnvSource, ProcessEnv, DEFAULT_DOTENV};
pub use report::render_report;
pub use schema::{EnvConfig, EnvSummary, EnvVar};
pub use validation::{validate_env, ValidationError};
