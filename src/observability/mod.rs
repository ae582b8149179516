//! Observability subsystem.
//!
//! Binaries call [`logging::init_logging`] once validation has passed.

pub mod logging;
