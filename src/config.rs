//! Server configuration parsed from environment variables.
//!
//! Leptos build settings (`site-root`, `site-pkg-dir`, default `site-addr`)
//! come from `[[workspace.metadata.leptos]]` via `get_configuration`. The
//! variables here only override where the server listens and which directory
//! backs the static fallback.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

/// Errors produced while assembling server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is not a valid u16.
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort { value: String, source: ParseIntError },

    /// `BIND_ADDR` is not an IP address.
    #[error("invalid BIND_ADDR {value:?}: {source}")]
    InvalidBindAddr { value: String, source: AddrParseError },

    /// The Leptos metadata section could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub addr: SocketAddr,
    pub public_dir: PathBuf,
}

impl SiteConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `BIND_ADDR`: listen IP, defaults to the Leptos `site-addr` IP
    /// - `PORT`: listen port, defaults to the Leptos `site-addr` port
    /// - `PUBLIC_DIR`: static fallback directory, defaults to the site root
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `PORT` or `BIND_ADDR` is malformed.
    pub fn from_env(site_addr: SocketAddr, site_root: &Path) -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok(), site_addr, site_root)
    }

    pub(crate) fn from_vars(
        var: impl Fn(&str) -> Option<String>,
        site_addr: SocketAddr,
        site_root: &Path,
    ) -> Result<Self, ConfigError> {
        let ip = match non_empty(var("BIND_ADDR")) {
            Some(value) => value
                .parse::<IpAddr>()
                .map_err(|source| ConfigError::InvalidBindAddr { value, source })?,
            None => site_addr.ip(),
        };
        let port = match non_empty(var("PORT")) {
            Some(value) => value
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => site_addr.port(),
        };
        let public_dir = non_empty(var("PUBLIC_DIR")).map_or_else(|| site_root.to_path_buf(), PathBuf::from);

        Ok(Self { addr: SocketAddr::new(ip, port), public_dir })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
