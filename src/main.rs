//! StellarStream backend.
//!
//! # Startup
//!
//! ```text
//! .env (optional) ──▶ process env ──▶ validate ──┬──▶ EnvConfig ──▶ subsystems
//!                                                │
//!                                                └──▶ diagnostics on stderr, exit 1
//! ```
//!
//! The environment gate runs before logging is installed, so a bad
//! environment produces only the operator report.

use stellarstream_backend::config::load_dotenv;
use stellarstream_backend::observability::logging::init_logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    load_dotenv(None)?;

    let env = stellarstream_backend::env();

    init_logging();

    let summary = env.summary();
    tracing::info!(
        database_url = %summary.database_url,
        stellar_rpc_url = %summary.stellar_rpc_url,
        contract_id = %summary.contract_id,
        network_passphrase = %summary.network_passphrase,
        "Configuration loaded"
    );

    Ok(())
}
