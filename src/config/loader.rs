//! Environment loading.
//!
//! Validation reads through [`EnvSource`] so it can run against the real
//! process environment or an in-memory snapshot.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use thiserror::Error;

/// Dotenv file loaded when no explicit path is given.
pub const DEFAULT_DOTENV: &str = ".env";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The dotenv file could not be read or parsed.
    #[error("failed to load dotenv file: {0}")]
    DotEnv(#[from] dotenvy::Error),
}

/// A read-only view of environment variables.
pub trait EnvSource {
    /// Value of `key`, or `None` when unset.
    fn get(&self, key: &str) -> Option<String>;
}

/// The current process environment.
///
/// Values that are not valid UTF-8 are reported as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Load a dotenv file into the process environment.
///
/// With `None`, `./.env` is loaded if present and a missing file is fine.
/// Parent directories are not searched. With `Some(path)`, the file must
/// exist. Variables already set in the process are never overridden.
/// Returns whether a file was loaded.
pub fn load_dotenv(path: Option<&Path>) -> Result<bool, ConfigError> {
    match dotenvy::from_path(path.unwrap_or(Path::new(DEFAULT_DOTENV))) {
        Ok(()) => Ok(true),
        Err(e) if path.is_none() && e.not_found() => Ok(false),
        Err(e) => Err(ConfigError::DotEnv(e)),
    }
}
