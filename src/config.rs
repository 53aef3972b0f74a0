//! Process configuration read from the environment.

use std::env;

pub const DEFAULT_AUTH_TOKEN: &str = "token2019";
pub const DEFAULT_PORT: u16 = 2019;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Postgres connection string. `None` runs the service without persistence.
    pub database_url: Option<String>,
    /// Exact value the `Authorization` header must carry.
    pub auth_token: String,
    pub port: u16,
    pub max_connections: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            auth_token: DEFAULT_AUTH_TOKEN.to_string(),
            port: DEFAULT_PORT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from a key lookup. Unparseable numbers keep the default.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("DATABASE_URL") {
            let v = v.trim();
            self.database_url = if v.is_empty() { None } else { Some(v.to_string()) };
        }
        if let Some(v) = lookup("AUTH_TOKEN") {
            if !v.is_empty() {
                self.auth_token = v;
            }
        }
        if let Some(v) = lookup("PORT") {
            self.port = v.trim().parse().unwrap_or(self.port);
        }
        if let Some(v) = lookup("DATABASE_MAX_CONNECTIONS") {
            self.max_connections = v.trim().parse().unwrap_or(self.max_connections);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = AppConfig::default().with_overrides(lookup(&[]));
        assert_eq!(config.database_url, None);
        assert_eq!(config.auth_token, "token2019");
        assert_eq!(config.port, 2019);
        assert_eq!(config.max_connections, 5);
    }

    #[test]
    fn test_overrides_applied() {
        let config = AppConfig::default().with_overrides(lookup(&[
            ("DATABASE_URL", "postgres://localhost/customers"),
            ("AUTH_TOKEN", "s3cret"),
            ("PORT", "8080"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
        ]));
        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/customers"));
        assert_eq!(config.auth_token, "s3cret");
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_connections, 12);
    }

    #[test]
    fn test_empty_database_url_means_unset() {
        let config = AppConfig::default().with_overrides(lookup(&[("DATABASE_URL", "  ")]));
        assert_eq!(config.database_url, None);
    }

    #[test]
    fn test_bad_numbers_keep_defaults() {
        let config = AppConfig::default().with_overrides(lookup(&[
            ("PORT", "not-a-port"),
            ("DATABASE_MAX_CONNECTIONS", "-1"),
        ]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
    }
}
