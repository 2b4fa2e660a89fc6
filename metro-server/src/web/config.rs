//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::cache::CacheConfig;
use crate::planner::{ConfigError, RouteConfig};

/// Errors raised while reading server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ServerConfigError {
    /// A variable is set but cannot be parsed
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// The route configuration file is unusable
    #[error(transparent)]
    Route(#[from] ConfigError),
}

/// Settings for running the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Station directory JSON file
    pub stations_path: PathBuf,

    /// Optional JSON file with route parameters
    pub route_config_path: Option<PathBuf>,

    /// City used when a request names none
    pub default_city: String,

    /// Address to listen on
    pub addr: SocketAddr,

    pub cache: CacheConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            stations_path: PathBuf::from("stations.json"),
            route_config_path: None,
            default_city: "kolkata".to_string(),
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            cache: CacheConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from `METRO_*` environment variables.
    pub fn from_env() -> Result<Self, ServerConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value. Unset and empty variables take defaults.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ServerConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(path) = get("METRO_STATIONS_PATH") {
            config.stations_path = PathBuf::from(path);
        }
        config.route_config_path = get("METRO_ROUTE_CONFIG").map(PathBuf::from);
        if let Some(city) = get("METRO_DEFAULT_CITY") {
            config.default_city = city.trim().to_lowercase();
        }
        if let Some(addr) = get("METRO_ADDR") {
            config.addr = parse("METRO_ADDR", addr)?;
        }
        if let Some(secs) = get("METRO_CACHE_TTL_SECS") {
            config.cache.ttl = Duration::from_secs(parse("METRO_CACHE_TTL_SECS", secs)?);
        }
        if let Some(capacity) = get("METRO_CACHE_CAPACITY") {
            config.cache.max_capacity = parse("METRO_CACHE_CAPACITY", capacity)?;
        }

        Ok(config)
    }

    /// Route parameters from the configured file, or defaults.
    pub fn route_config(&self) -> Result<RouteConfig, ServerConfigError> {
        match &self.route_config_path {
            Some(path) => Ok(RouteConfig::from_json_file(path)?),
            None => Ok(RouteConfig::default()),
        }
    }
}

fn parse<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ServerConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ServerConfigError::Invalid { var, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.stations_path, PathBuf::from("stations.json"));
        assert!(config.route_config_path.is_none());
        assert_eq!(config.default_city, "kolkata");
        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.cache.max_capacity, 64);
    }

    #[test]
    fn reads_variables() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("METRO_STATIONS_PATH", "/srv/metro.json"),
            ("METRO_ROUTE_CONFIG", "/srv/route.json"),
            ("METRO_DEFAULT_CITY", " Delhi "),
            ("METRO_ADDR", "0.0.0.0:8080"),
            ("METRO_CACHE_TTL_SECS", "30"),
            ("METRO_CACHE_CAPACITY", "8"),
        ]))
        .unwrap();

        assert_eq!(config.stations_path, PathBuf::from("/srv/metro.json"));
        assert_eq!(
            config.route_config_path,
            Some(PathBuf::from("/srv/route.json"))
        );
        assert_eq!(config.default_city, "delhi");
        assert_eq!(config.addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.cache.ttl, Duration::from_secs(30));
        assert_eq!(config.cache.max_capacity, 8);
    }

    #[test]
    fn empty_values_take_defaults() {
        let config =
            ServerConfig::from_lookup(lookup(&[("METRO_ADDR", ""), ("METRO_ROUTE_CONFIG", " ")]))
                .unwrap();
        assert_eq!(config.addr.port(), 3000);
        assert!(config.route_config_path.is_none());
    }

    #[test]
    fn invalid_values_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[("METRO_ADDR", "nowhere")])).unwrap_err();
        assert!(matches!(
            err,
            ServerConfigError::Invalid {
                var: "METRO_ADDR",
                ..
            }
        ));

        assert!(ServerConfig::from_lookup(lookup(&[("METRO_CACHE_CAPACITY", "-1")])).is_err());
    }

    #[test]
    fn route_config_defaults_without_file() {
        let config = ServerConfig::default();
        let route = config.route_config().unwrap();
        assert_eq!(route.minutes_per_station, 2.0);
    }

    #[test]
    fn route_config_from_missing_file() {
        let config = ServerConfig {
            route_config_path: Some(PathBuf::from("/nonexistent/route.json")),
            ..ServerConfig::default()
        };
        assert!(matches!(
            config.route_config(),
            Err(ServerConfigError::Route(ConfigError::Io(_)))
        ));
    }
}
