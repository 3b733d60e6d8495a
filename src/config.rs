//! Host configuration parsed from environment variables.
//!
//! Optional:
//! - `PORT`: listen port, default 3000
//! - `BOMBONA_API_URL`: asset/tag backend base
//! - `RFID_READS_API_URL`: read-analytics backend base

use dashboard_client::net::config::{ApiConfig, ConfigError, DEFAULT_BOMBONAS_BASE, DEFAULT_READS_BASE};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum HostConfigError {
    #[error("PORT: invalid value `{0}`")]
    InvalidPort(String),
    #[error(transparent)]
    Api(#[from] ConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub api: ApiConfig,
}

impl HostConfig {
    pub fn from_env() -> Result<Self, HostConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HostConfigError> {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match read("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| HostConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let bombonas = read("BOMBONA_API_URL").unwrap_or_else(|| DEFAULT_BOMBONAS_BASE.to_owned());
        let reads = read("RFID_READS_API_URL").unwrap_or_else(|| DEFAULT_READS_BASE.to_owned());

        Ok(Self { port, api: ApiConfig::new(&bombonas, &reads)? })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
