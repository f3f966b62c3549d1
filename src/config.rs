//! Process configuration, read once from the environment at startup.

use crate::error::ConfigError;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/favorites";
pub const DEFAULT_PORT: u16 = 3000;

/// Which `Store` backs the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    /// Seeded in-memory catalog; nothing persists across restarts.
    Memory,
}

impl FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreKind::Postgres),
            "memory" => Ok(StoreKind::Memory),
            _ => Err(ConfigError::Invalid {
                var: "STORE",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub host: String,
    pub port: u16,
    /// Current user when a request carries no `X-User-Id`. `None` disables the fallback.
    pub default_user_id: Option<i32>,
    pub store: StoreKind,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_url: DEFAULT_DATABASE_URL.into(),
            max_connections: 5,
            host: "0.0.0.0".into(),
            port: DEFAULT_PORT,
            default_user_id: Some(1),
            store: StoreKind::Postgres,
        }
    }
}

fn parse_var<T: FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        value: value.to_string(),
    })
}

fn parse_user_id(value: &str) -> Result<Option<i32>, ConfigError> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    match value.parse::<i32>() {
        Ok(id) if id > 0 => Ok(Some(id)),
        _ => Err(ConfigError::Invalid {
            var: "DEFAULT_USER_ID",
            value: value.to_string(),
        }),
    }
}

impl AppConfig {
    /// Read from the process environment. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();
        if let Some(url) = lookup("DATABASE_URL") {
            config.database_url = url;
        }
        if let Some(v) = lookup("DATABASE_MAX_CONNECTIONS") {
            config.max_connections = parse_var("DATABASE_MAX_CONNECTIONS", &v)?;
        }
        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(v) = lookup("PORT") {
            config.port = parse_var("PORT", &v)?;
        }
        if let Some(v) = lookup("DEFAULT_USER_ID") {
            config.default_user_id = parse_user_id(&v)?;
        }
        if let Some(v) = lookup("STORE") {
            config.store = v.parse()?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.port, 3000);
        assert_eq!(config.default_user_id, Some(1));
    }

    #[test]
    fn reads_every_variable() {
        let config = from_pairs(&[
            ("DATABASE_URL", "postgres://db/catalog"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DEFAULT_USER_ID", "7"),
            ("STORE", "Memory"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "postgres://db/catalog");
        assert_eq!(config.max_connections, 12);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.default_user_id, Some(7));
        assert_eq!(config.store, StoreKind::Memory);
    }

    #[test]
    fn default_user_can_be_disabled() {
        assert_eq!(from_pairs(&[("DEFAULT_USER_ID", "none")]).unwrap().default_user_id, None);
        assert_eq!(from_pairs(&[("DEFAULT_USER_ID", "")]).unwrap().default_user_id, None);
    }

    #[test]
    fn invalid_values_name_the_variable() {
        let err = from_pairs(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
        let err = from_pairs(&[("DEFAULT_USER_ID", "-3")]).unwrap_err();
        assert!(err.to_string().contains("DEFAULT_USER_ID"));
        let err = from_pairs(&[("STORE", "sqlite")]).unwrap_err();
        assert!(err.to_string().contains("STORE"));
    }
}
