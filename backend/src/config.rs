use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::HeaderValue;

use crate::error::ConfigError;

pub const DEFAULT_DIST_DIR: &str = "frontend/dist";
pub const DEFAULT_CACHE_CONTROL: &str = "public, max-age=3600";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Built site, as produced by `trunk build` in the frontend crate.
    pub dist_dir: PathBuf,
    pub cache_control: HeaderValue,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => match lookup("ENVIRONMENT").as_deref() {
                Some("staging") => 3100,
                _ => 3000,
            },
        };
        let dist_dir = lookup("DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let cache_control = lookup("CACHE_CONTROL").unwrap_or_else(|| DEFAULT_CACHE_CONTROL.to_string());
        let cache_control = HeaderValue::from_str(&cache_control).map_err(|_| ConfigError::InvalidHeader {
            name: "CACHE_CONTROL",
            value: cache_control.clone(),
        })?;
        Ok(Self {
            port,
            dist_dir,
            cache_control,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.dist_dir, PathBuf::from("frontend/dist"));
        assert_eq!(config.cache_control, "public, max-age=3600");
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn staging_uses_its_own_port() {
        assert_eq!(config(&[("ENVIRONMENT", "staging")]).unwrap().port, 3100);
        assert_eq!(config(&[("ENVIRONMENT", "development")]).unwrap().port, 3000);
    }

    #[test]
    fn explicit_port_wins() {
        let config = config(&[("ENVIRONMENT", "staging"), ("PORT", " 8080 ")]).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(matches!(
            config(&[("PORT", "eighty")]),
            Err(ConfigError::InvalidPort(raw)) if raw == "eighty"
        ));
        assert!(matches!(
            config(&[("CACHE_CONTROL", "no-cache\n")]),
            Err(ConfigError::InvalidHeader { name: "CACHE_CONTROL", .. })
        ));
    }

    #[test]
    fn overrides() {
        let config = config(&[("DIST_DIR", "/srv/bluedrop"), ("CACHE_CONTROL", "no-cache")]).unwrap();
        assert_eq!(config.dist_dir, PathBuf::from("/srv/bluedrop"));
        assert_eq!(config.cache_control, "no-cache");
    }
}
