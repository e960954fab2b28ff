//! Application configuration loaded from environment variables.

use serde::Deserialize;

use crate::error::{AppError, Result};

/// Actor type registered when `TEST_APP_ACTOR_TYPE` is unset or empty.
pub const DEFAULT_ACTOR_TYPE: &str = "testActorPubsubTypePerf";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Actor Registration ===
    /// Actor type this app hosts. Must be unique per test app.
    #[serde(default = "default_actor_type")]
    pub test_app_actor_type: String,

    // === Server Configuration ===
    /// HTTP port the actor runtime calls into. Not read from the
    /// environment; only `--port` changes it.
    #[serde(skip_deserializing, default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Serve Prometheus metrics on `/metrics`.
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,
}

fn default_actor_type() -> String {
    DEFAULT_ACTOR_TYPE.to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            test_app_actor_type: default_actor_type(),
            port: default_port(),
            rust_log: default_log_level(),
            metrics_enabled: true,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env::<Self>()?.normalized())
    }

    /// Build configuration from explicit key/value pairs instead of the
    /// process environment.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let pairs = pairs.into_iter().map(|(k, v)| (k.into(), v.into()));
        Ok(envy::from_iter::<_, Self>(pairs)?.normalized())
    }

    /// An exported-but-empty actor type falls back to the default.
    fn normalized(mut self) -> Self {
        if self.test_app_actor_type.is_empty() {
            self.test_app_actor_type = default_actor_type();
        }
        self
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(AppError::InvalidConfig("--port must be non-zero".to_string()));
        }

        Ok(())
    }

    /// Registered actor type.
    pub fn actor_type(&self) -> &str {
        &self.test_app_actor_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::from_pairs(Vec::<(String, String)>::new()).unwrap();

        assert_eq!(config.actor_type(), DEFAULT_ACTOR_TYPE);
        assert_eq!(config.port, 3000);
        assert_eq!(config.rust_log, "info");
        assert!(config.metrics_enabled);
    }

    #[test]
    fn actor_type_is_read_from_env_name() {
        let config = Config::from_pairs([("TEST_APP_ACTOR_TYPE", "foo")]).unwrap();
        assert_eq!(config.actor_type(), "foo");
    }

    #[test]
    fn empty_actor_type_falls_back_to_default() {
        let config = Config::from_pairs([("TEST_APP_ACTOR_TYPE", "")]).unwrap();
        assert_eq!(config.actor_type(), DEFAULT_ACTOR_TYPE);
    }

    #[test]
    fn whitespace_actor_type_is_kept() {
        let config = Config::from_pairs([("TEST_APP_ACTOR_TYPE", "  ")]).unwrap();
        assert_eq!(config.actor_type(), "  ");
    }

    #[test]
    fn port_env_var_is_ignored() {
        let config = Config::from_pairs([("PORT", "8080")]).unwrap();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn metrics_flag_is_parsed() {
        let config = Config::from_pairs([("METRICS_ENABLED", "false")]).unwrap();
        assert!(!config.metrics_enabled);
    }

    #[test]
    fn invalid_metrics_flag_is_a_config_error() {
        let result = Config::from_pairs([("METRICS_ENABLED", "not-a-bool")]);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn validate_accepts_slash_in_actor_type() {
        let config = Config {
            test_app_actor_type: "a/b".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_port() {
        let config = Config {
            port: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(Config::default().validate().is_ok());
    }
}
