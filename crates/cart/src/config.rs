//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MAISON_CART_PATH` - Path of the persistence file (default:
//!   `maison-cart.json`, relative to the working directory)
//! - `MAISON_CART_KEY` - Storage key the cart blob lives under (default:
//!   `maison.cart`)

use std::path::PathBuf;

use thiserror::Error;

use crate::repository::CartRepository;
use crate::store::{DEFAULT_CART_KEY, FileStore};

const DEFAULT_CART_PATH: &str = "maison-cart.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart subsystem configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Path of the key-value persistence file
    pub storage_path: PathBuf,
    /// Storage key for the serialized cart
    pub storage_key: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_CART_PATH),
            storage_key: DEFAULT_CART_KEY.to_owned(),
        }
    }
}

impl CartConfig {
    /// Load configuration from environment variables, falling back to the
    /// defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value
    /// (currently: empty path or empty key).
    pub fn from_env() -> Result<Self, ConfigError> {
        let storage_path = get_env_or_default("MAISON_CART_PATH", DEFAULT_CART_PATH);
        if storage_path.is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "MAISON_CART_PATH".to_owned(),
                "must not be empty".to_owned(),
            ));
        }

        let storage_key =
            get_env_or_default("MAISON_CART_KEY", DEFAULT_CART_KEY);
        if storage_key.is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "MAISON_CART_KEY".to_owned(),
                "must not be empty".to_owned(),
            ));
        }

        Ok(Self {
            storage_path: PathBuf::from(storage_path),
            storage_key,
        })
    }

    /// Build the file-backed key-value store this configuration points at.
    #[must_use]
    pub fn file_store(&self) -> FileStore {
        FileStore::new(&self.storage_path)
    }

    /// Open a repository over the configured file store, loading any
    /// persisted cart.
    #[must_use]
    pub fn open_repository(&self) -> CartRepository<FileStore> {
        CartRepository::open(self.file_store(), self.storage_key.clone())
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
