//! Host configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Errors produced while reading host configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Directory served under `/assets` (background image, stat icons).
    pub assets_dir: PathBuf,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `ASSETS_DIR`: default `public/assets` next to the workspace root
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `HOST` or `PORT` does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("HOST") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::Invalid { var: "HOST", value: raw.clone() })?,
            None => DEFAULT_HOST,
        };
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw.clone() })?,
            None => DEFAULT_PORT,
        };
        let assets_dir = lookup("ASSETS_DIR")
            .filter(|v| !v.trim().is_empty())
            .map_or_else(default_assets_dir, PathBuf::from);

        Ok(Self { host, port, assets_dir })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public/assets")
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
