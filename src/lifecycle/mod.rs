//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load .env → Validate environment → (EnvConfig | exit 1)
//! ```
//!
//! # Design Decisions
//! - Environment is validated before logging or any other subsystem starts
//! - Process termination lives here, never in `config`

pub mod startup;

pub use startup::{env, validate_or_exit};
