//! Service configuration loaded from environment variables.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 0.0.0.0)
//! - `STOREFRONT_PORT` - Listen port (default: `PORT`, then 8080)
//! - `STOREFRONT_CATALOG_PATH` - Catalog JSON file (default: data/products.json)
//! - `STOREFRONT_LOG_FORMAT` - `json` or `pretty` (default: json)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

use storefront_observability::LogFormat;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CATALOG_PATH: &str = "data/products.json";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid environment variable {0}: {1}")]
    InvalidEnvVar(&'static str, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub catalog_path: PathBuf,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load from the process environment (and a `.env` file, if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match lookup("STOREFRONT_HOST") {
            Some(raw) => parse_var("STOREFRONT_HOST", &raw)?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        // `PORT` is the conventional variable set by hosting platforms.
        let port = match lookup("STOREFRONT_PORT") {
            Some(raw) => parse_var("STOREFRONT_PORT", &raw)?,
            None => match lookup("PORT") {
                Some(raw) => parse_var("PORT", &raw)?,
                None => DEFAULT_PORT,
            },
        };

        let catalog_path = lookup("STOREFRONT_CATALOG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH), PathBuf::from);

        let log_format = match lookup("STOREFRONT_LOG_FORMAT") {
            Some(raw) => parse_var("STOREFRONT_LOG_FORMAT", &raw)?,
            None => LogFormat::default(),
        };

        Ok(Self {
            host,
            port,
            catalog_path,
            log_format,
        })
    }

    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: core::str::FromStr,
    T::Err: core::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidEnvVar(name, e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.socket_addr(), "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.catalog_path, PathBuf::from("data/products.json"));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn explicit_values_are_used() {
        let config = load(&[
            ("STOREFRONT_HOST", "127.0.0.1"),
            ("STOREFRONT_PORT", "3000"),
            ("STOREFRONT_CATALOG_PATH", "/srv/catalog.json"),
            ("STOREFRONT_LOG_FORMAT", "pretty"),
        ])
        .unwrap();
        assert_eq!(config.socket_addr(), "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.catalog_path, PathBuf::from("/srv/catalog.json"));
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn port_falls_back_to_platform_variable() {
        assert_eq!(load(&[("PORT", "9090")]).unwrap().port, 9090);
        assert_eq!(
            load(&[("PORT", "9090"), ("STOREFRONT_PORT", "7070")]).unwrap().port,
            7070
        );
    }

    #[test]
    fn invalid_values_name_the_variable() {
        assert!(matches!(
            load(&[("STOREFRONT_PORT", "eighty")]),
            Err(ConfigError::InvalidEnvVar("STOREFRONT_PORT", _))
        ));
        assert!(matches!(
            load(&[("STOREFRONT_HOST", "not-an-ip")]),
            Err(ConfigError::InvalidEnvVar("STOREFRONT_HOST", _))
        ));
        assert!(matches!(
            load(&[("STOREFRONT_LOG_FORMAT", "xml")]),
            Err(ConfigError::InvalidEnvVar("STOREFRONT_LOG_FORMAT", _))
        ));
    }
}
