//! StellarStream backend environment gate.
//!
//! Downstream code reads configuration through [`env()`] instead of
//! `std::env`, so the environment is validated once, before first use.

pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::schema::EnvConfig;
pub use lifecycle::startup::env;
