//! Environment validation.
//!
//! # Responsibilities
//! - Check that every required variable is present
//! - Check URL fields parse as absolute URLs
//! - Check the contract id has the strkey contract shape
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - At most one error per variable, reported in `EnvVar::ALL` order
//! - Pure: no logging, no process exit (see `lifecycle::startup`)
//! - Values are accepted verbatim, never trimmed or normalised

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use url::Url;

use crate::config::loader::EnvSource;
use crate::config::schema::{EnvConfig, EnvVar};

/// Strkey contract address: `C` followed by 55 base32 characters.
///
/// Only the shape is checked; the embedded checksum is not verified.
static CONTRACT_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^C[A-Z2-7]{55}$").expect("contract id pattern is valid")
});

/// A missing or invalid environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{var}: {message}")]
pub struct ValidationError {
    pub var: EnvVar,
    pub message: String,
}

impl ValidationError {
    fn new(var: EnvVar, message: impl Into<String>) -> Self {
        Self {
            var,
            message: message.into(),
        }
    }
}

/// Validate all required variables from `source`.
///
/// Every variable is checked even after a failure so operators see the
/// full list at once.
pub fn validate_env(source: &impl EnvSource) -> Result<EnvConfig, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut check = |var: EnvVar, rule: fn(EnvVar, Option<String>) -> Result<String, ValidationError>| {
        match rule(var, source.get(var.name())) {
            Ok(value) => Some(value),
            Err(e) => {
                errors.push(e);
                None
            }
        }
    };

    let database_url = check(EnvVar::DatabaseUrl, validate_url);
    let stellar_rpc_url = check(EnvVar::StellarRpcUrl, validate_url);
    let contract_id = check(EnvVar::ContractId, validate_contract_id);
    let network_passphrase = check(EnvVar::NetworkPassphrase, validate_required);

    match (database_url, stellar_rpc_url, contract_id, network_passphrase) {
        (Some(database_url), Some(stellar_rpc_url), Some(contract_id), Some(network_passphrase))
            if errors.is_empty() =>
        {
            Ok(EnvConfig {
                database_url,
                stellar_rpc_url,
                contract_id,
                network_passphrase,
            })
        }
        _ => Err(errors),
    }
}

fn validate_url(var: EnvVar, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(value) if Url::parse(&value).is_ok() => Ok(value),
        _ => Err(ValidationError::new(
            var,
            format!("{} must be a valid URL (e.g. {})", var, var.example()),
        )),
    }
}

fn validate_contract_id(var: EnvVar, value: Option<String>) -> Result<String, ValidationError> {
    let value = validate_required(var, value)?;
    if CONTRACT_ID_RE.is_match(&value) {
        Ok(value)
    } else {
        Err(ValidationError::new(
            var,
            format!(
                "{} must be a valid Stellar contract address (56 chars, starting with \"C\")",
                var
            ),
        ))
    }
}

fn validate_required(var: EnvVar, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ValidationError::new(var, format!("{} is required", var))),
    }
}
