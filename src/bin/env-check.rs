use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use stellarstream_backend::config::{load_dotenv, EnvConfig, ProcessEnv};
use stellarstream_backend::lifecycle::validate_or_exit;

#[derive(Parser)]
#[command(name = "env-check")]
#[command(about = "Validate the StellarStream backend environment", long_about = None)]
struct Cli {
    /// Dotenv file to load before validating (default: ./.env if present)
    #[arg(long, value_name = "PATH", conflicts_with = "no_dotenv")]
    env_file: Option<PathBuf>,

    /// Validate the process environment only
    #[arg(long)]
    no_dotenv: bool,

    /// Print the validated values as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if !cli.no_dotenv {
        if let Err(e) = load_dotenv(cli.env_file.as_deref()) {
            eprintln!("error: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    }

    let config = validate_or_exit(&ProcessEnv);
    print_config(&config, cli.json)?;

    Ok(ExitCode::SUCCESS)
}

fn print_config(config: &EnvConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let summary = config.summary();
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("✅ Environment OK");
    println!("  DATABASE_URL={}", summary.database_url);
    println!("  STELLAR_RPC_URL={}", summary.stellar_rpc_url);
    println!("  CONTRACT_ID={}", summary.contract_id);
    println!("  NETWORK_PASSPHRASE={}", summary.network_passphrase);
    Ok(())
}
