//! Runtime configuration read from the environment.

use vend_backend::{BackendConfig, DEFAULT_BASE_URL};

use crate::error::GatewayError;

/// Address the gateway listens on.
pub const LISTEN_ADDR_ENV: &str = "VEND_LISTEN_ADDR";
/// Base URL of the vending-machine backend.
pub const BACKEND_URL_ENV: &str = "VEND_BACKEND_URL";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8081";

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct GatewayConfig {
    pub listen_addr: String,
    pub backend: BackendConfig,
}

impl GatewayConfig {
    /// Read [`LISTEN_ADDR_ENV`] and [`BACKEND_URL_ENV`], falling back to defaults.
    ///
    /// # Errors
    /// Returns [`GatewayError::Backend`] if the backend URL is invalid.
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    ///
    /// # Errors
    /// Returns [`GatewayError::Backend`] if the backend URL is invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GatewayError> {
        let listen_addr = lookup(LISTEN_ADDR_ENV).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned());
        let backend_url = lookup(BACKEND_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let backend = BackendConfig::new(&backend_url)?;
        Ok(Self { listen_addr, backend })
    }
}
